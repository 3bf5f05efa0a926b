use contracts::system::auth::{
    ActivateAccountRequest, HealthStatus, LoginRequest, LoginResponse, UserInfo,
};

use crate::config::LOGIN_PATH;
use crate::error::ApiError;
use crate::http::client::ApiClient;
use crate::services::Navigator;
use crate::session::Session;
use std::rc::Rc;

/// Login, logout, account activation and the health probe
#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
    navigator: Rc<dyn Navigator>,
}

impl AuthService {
    pub fn new(api: ApiClient, navigator: Rc<dyn Navigator>) -> Self {
        Self { api, navigator }
    }

    /// Exchange credentials for a token and store the session
    pub async fn login(&self, username: &str, password: &str) -> Result<UserInfo, ApiError> {
        let request = LoginRequest {
            username: username.trim().to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = self.api.post_json("auth/login", &request).await?;
        log::info!("signed in as {}", response.user.username);
        self.api.session().set(Session {
            token: response.token,
            user: Some(response.user.clone()),
        });
        Ok(response.user)
    }

    /// Forget the session and reload into the login screen
    pub fn logout(&self) {
        log::info!("signing out");
        self.api.session().clear();
        self.navigator.hard_redirect(LOGIN_PATH);
    }

    /// Set the password of an invited account
    pub async fn activate_account(&self, token: &str, password: &str) -> Result<(), ApiError> {
        let request = ActivateAccountRequest {
            token: token.to_string(),
            password: password.to_string(),
        };
        self.api
            .send_json(crate::http::HttpMethod::Post, "auth/activate", &request)
            .await
    }

    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        self.api.get_json("health", None).await
    }

    pub fn current_user(&self) -> Option<UserInfo> {
        self.api.session().user()
    }

    pub fn is_authenticated(&self) -> bool {
        self.api.session().is_authenticated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;
    use crate::session::SessionStore;
    use crate::testing::{api_client, RecordingNavigator, ScriptedTransport};
    use contracts::system::users::UserRole;

    fn service() -> (AuthService, Rc<ScriptedTransport>, Rc<RecordingNavigator>) {
        let transport = Rc::new(ScriptedTransport::new());
        let navigator = Rc::new(RecordingNavigator::default());
        let api = api_client(transport.clone(), SessionStore::in_memory(), navigator.clone());
        (AuthService::new(api, navigator.clone()), transport, navigator)
    }

    #[tokio::test]
    async fn test_login_stores_session() {
        let (auth, transport, _) = service();
        transport.on_json(
            HttpMethod::Post,
            "auth/login",
            200,
            r#"{"token":"jwt-1","user":{"id":1,"username":"admin","fullName":"Office Admin","role":"admin"}}"#,
        );

        let user = auth.login(" admin ", "secret123").await.unwrap();

        assert!(user.is_admin());
        assert!(auth.is_authenticated());
        assert_eq!(auth.current_user().unwrap().display_name(), "Office Admin");
        let request = &transport.requests()[0];
        assert_eq!(request.header_value("Authorization"), None);
        match &request.body {
            Some(crate::http::RequestBody::Json(body)) => assert!(body.contains(r#""username":"admin""#)),
            other => panic!("unexpected body {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_rejected_login_reloads_into_login_screen() {
        let (auth, transport, navigator) = service();
        transport.on_json(
            HttpMethod::Post,
            "auth/login",
            401,
            r#"{"message":"Invalid username or password"}"#,
        );

        let err = auth.login("admin", "nope").await.unwrap_err();

        assert!(err.is_unauthorized());
        assert!(!auth.is_authenticated());
        assert_eq!(navigator.redirects(), vec!["/login".to_string()]);
    }

    #[tokio::test]
    async fn test_failed_login_shows_backend_message() {
        let (auth, transport, navigator) = service();
        transport.on_json(
            HttpMethod::Post,
            "auth/login",
            400,
            r#"{"message":"Account is not activated"}"#,
        );

        let err = auth.login("admin", "secret123").await.unwrap_err();

        assert_eq!(err.user_message(), "Account is not activated");
        assert!(!auth.is_authenticated());
        assert!(navigator.redirects().is_empty());
    }

    #[tokio::test]
    async fn test_logout_clears_and_redirects() {
        let (auth, transport, navigator) = service();
        transport.on_json(
            HttpMethod::Post,
            "auth/login",
            200,
            r#"{"token":"jwt-1","user":{"id":2,"username":"ops","role":"staff"}}"#,
        );
        auth.login("ops", "secret123").await.unwrap();
        assert_eq!(auth.current_user().unwrap().role, UserRole::Staff);

        auth.logout();

        assert!(!auth.is_authenticated());
        assert_eq!(navigator.redirects(), vec!["/login".to_string()]);
    }

    #[tokio::test]
    async fn test_health_is_public() {
        let (auth, transport, _) = service();
        transport.on_json(HttpMethod::Get, "health", 200, r#"{"status":"ok","version":"1.4.0"}"#);

        let health = auth.health().await.unwrap();

        assert!(health.is_ok());
        assert_eq!(health.version.as_deref(), Some("1.4.0"));
    }
}
