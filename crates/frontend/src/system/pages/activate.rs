use client::form::validate::MIN_PASSWORD_LEN;
use client::config::LOGIN_PATH;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_utils::query_param;
use crate::shared::context::use_app;

/// Local checks before the activation request is sent
fn check_passwords(password: &str, confirm: &str) -> Result<(), String> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        ));
    }
    if password != confirm {
        return Err("Passwords do not match".to_string());
    }
    Ok(())
}

/// Landing page of the invitation link: `/activate?token=...`
#[component]
pub fn ActivatePage() -> impl IntoView {
    let app = use_app();
    let token = query_param("token").unwrap_or_default();
    let has_token = !token.is_empty();

    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error_message = RwSignal::new(None::<String>);
    let is_loading = RwSignal::new(false);
    let done = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }
        let password_val = password.get_untracked();
        if let Err(e) = check_passwords(&password_val, &confirm.get_untracked()) {
            error_message.set(Some(e));
            return;
        }

        is_loading.set(true);
        error_message.set(None);

        let auth = app.auth();
        let token = token.clone();
        spawn_local(async move {
            let result = auth.activate_account(&token, &password_val).await;
            is_loading.try_set(false);
            match result {
                Ok(()) => {
                    log::info!("account activated");
                    done.try_set(true);
                }
                Err(e) => {
                    error_message.try_set(Some(e.user_message()));
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Fleet Admin"</h1>
                <h2>"Activate account"</h2>

                {move || {
                    if !has_token {
                        view! {
                            <div class="error-message">"The activation link is missing its token."</div>
                        }
                            .into_any()
                    } else if done.get() {
                        view! {
                            <div class="success-message">
                                "Your password is set. "
                                <a href=LOGIN_PATH>"Sign in"</a>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <Show when=move || error_message.get().is_some()>
                                <div class="error-message">
                                    {move || error_message.get().unwrap_or_default()}
                                </div>
                            </Show>
                            <form on:submit=on_submit.clone()>
                                <div class="form-group">
                                    <label for="password">"New password"</label>
                                    <input
                                        type="password"
                                        id="password"
                                        autocomplete="new-password"
                                        prop:value=move || password.get()
                                        on:input=move |ev| password.set(event_target_value(&ev))
                                        required
                                        disabled=move || is_loading.get()
                                    />
                                </div>
                                <div class="form-group">
                                    <label for="confirm">"Repeat password"</label>
                                    <input
                                        type="password"
                                        id="confirm"
                                        autocomplete="new-password"
                                        prop:value=move || confirm.get()
                                        on:input=move |ev| confirm.set(event_target_value(&ev))
                                        required
                                        disabled=move || is_loading.get()
                                    />
                                </div>
                                <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                                    {move || if is_loading.get() { "Saving..." } else { "Set password" }}
                                </button>
                            </form>
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_checks() {
        assert!(check_passwords("short", "short").is_err());
        assert_eq!(
            check_passwords("secret123", "secret124"),
            Err("Passwords do not match".to_string())
        );
        assert!(check_passwords("secret123", "secret123").is_ok());
    }
}
