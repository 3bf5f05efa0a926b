//! Application shell: root components.
//!
//! - `AppShell` - gate between activation, login and the main layout
//! - `MainLayout` - Shell + Sidebar + Tabs

use crate::layout::center::tabs::Tabs;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::shared::api_utils::{current_path, replace_url};
use crate::system::auth::context::use_auth;
use crate::system::pages::activate::ActivatePage;
use crate::system::pages::login::LoginPage;
use client::config::LOGIN_PATH;
use leptos::prelude::*;

const ACTIVATE_PATH: &str = "/activate";

/// Initializes router integration to keep tabs in sync with `?active=...`.
#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = expect_context::<AppGlobalContext>();
    tabs_store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Tabs /> }.into_any()
        />
    }
}

/// Shows:
/// - `ActivatePage` on the invitation link, signed in or not
/// - `LoginPage` without a session
/// - `MainLayout` otherwise
#[component]
pub fn AppShell() -> impl IntoView {
    let auth = use_auth();

    if current_path() == ACTIVATE_PATH {
        return view! { <ActivatePage /> }.into_any();
    }

    // leave /login behind once signed in
    Effect::new(move |_| {
        if auth.is_authenticated() && current_path() == LOGIN_PATH {
            replace_url("/");
        }
    });

    view! {
        <Show when=move || auth.is_authenticated() fallback=|| view! { <LoginPage /> }>
            <MainLayout />
        </Show>
    }
    .into_any()
}
