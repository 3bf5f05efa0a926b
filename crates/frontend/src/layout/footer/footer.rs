use crate::shared::context::use_app;
use contracts::system::auth::HealthStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Clone, Debug, PartialEq)]
enum ServerStatus {
    Online(Option<String>),
    Degraded,
    Offline,
    Checking,
}

impl ServerStatus {
    fn from_health(result: Option<HealthStatus>) -> Self {
        match result {
            Some(health) if health.is_ok() => ServerStatus::Online(health.version),
            Some(_) => ServerStatus::Degraded,
            None => ServerStatus::Offline,
        }
    }

    fn display_text(&self) -> String {
        match self {
            ServerStatus::Online(Some(version)) => format!("Server: Online (v{})", version),
            ServerStatus::Online(None) => "Server: Online".to_string(),
            ServerStatus::Degraded => "Server: Degraded".to_string(),
            ServerStatus::Offline => "Server: Offline".to_string(),
            ServerStatus::Checking => "Server: Checking...".to_string(),
        }
    }

    fn css_class(&self) -> &'static str {
        match self {
            ServerStatus::Online(_) => "status-online",
            ServerStatus::Degraded => "status-checking",
            ServerStatus::Offline => "status-offline",
            ServerStatus::Checking => "status-checking",
        }
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let app = use_app();
    let status = RwSignal::new(ServerStatus::Checking);

    // Проверка сервера при монтировании
    Effect::new(move |_| {
        let auth = app.auth();
        spawn_local(async move {
            let result = auth.health().await;
            if let Err(e) = &result {
                log::warn!("health check failed: {}", e);
            }
            status.try_set(ServerStatus::from_health(result.ok()));
        });
    });

    view! {
        <footer data-zone="footer" class="status-bar">
            <span class=move || status.with(ServerStatus::css_class)>
                {move || status.with(ServerStatus::display_text)}
            </span>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_health() {
        let ok: HealthStatus = serde_json::from_str(r#"{"status":"ok","version":"1.4.0"}"#).unwrap();
        assert_eq!(
            ServerStatus::from_health(Some(ok)).display_text(),
            "Server: Online (v1.4.0)"
        );
        let down: HealthStatus = serde_json::from_str(r#"{"status":"degraded"}"#).unwrap();
        assert_eq!(ServerStatus::from_health(Some(down)), ServerStatus::Degraded);
        assert_eq!(ServerStatus::from_health(None), ServerStatus::Offline);
    }
}
