use leptos::prelude::*;

use super::context::use_auth;

/// Component that requires admin privileges
/// Shows fallback if not admin
#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show
            when=move || auth.is_admin()
            fallback=|| view! { <div class="access-denied">"Access denied. Administrator role required."</div> }
        >
            {children()}
        </Show>
    }
}
