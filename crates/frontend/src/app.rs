use crate::app_shell::AppShell;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::confirm::ConfirmDialog;
use crate::shared::context::AppContext;
use crate::shared::notifications::Toasts;
use crate::system::auth::context::AuthContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let app = AppContext::new();
    provide_context(app);

    // restored session, if the tab was reloaded
    provide_context(AuthContext::new(app.auth().current_user()));

    // opened tabs and sidebar state
    provide_context(AppGlobalContext::new());

    view! {
        <AppShell />
        <ConfirmDialog service=app.confirm />
        <Toasts center=app.notifications />
    }
}
