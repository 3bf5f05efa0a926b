use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::context::use_app;
use crate::system::auth::context::use_auth;

#[component]
pub fn LoginPage() -> impl IntoView {
    let app = use_app();
    let auth_ctx = use_auth();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error_message = RwSignal::new(None::<String>);
    let is_loading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }
        let username_val = username.get_untracked();
        let password_val = password.get_untracked();
        if username_val.trim().is_empty() || password_val.is_empty() {
            error_message.set(Some("Enter username and password".to_string()));
            return;
        }

        is_loading.set(true);
        error_message.set(None);

        let auth = app.auth();
        spawn_local(async move {
            match auth.login(&username_val, &password_val).await {
                // switching the user swaps this page for the main layout
                Ok(user) => auth_ctx.user.set(Some(user)),
                Err(e) => {
                    log::warn!("login failed: {}", e);
                    error_message.try_set(Some(e.user_message()));
                    is_loading.try_set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Fleet Admin"</h1>
                <h2>"Sign in"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Username"</label>
                        <input
                            type="text"
                            id="username"
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>
                    <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
