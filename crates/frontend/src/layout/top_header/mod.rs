//! TopHeader: sidebar toggle, application title, signed-in user and logout.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::context::use_app;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();
    let app = use_app();
    let auth_ctx = use_auth();

    let is_sidebar_visible = move || ctx.left_open.get();

    // reloads into the login screen
    let logout = move |_| app.auth().logout();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">"Fleet Admin"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("user")}
                    <span>{move || auth_ctx.display_name()}</span>
                    <Show when=move || auth_ctx.is_admin()>
                        <span class="badge">"Admin"</span>
                    </Show>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Sign out">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
