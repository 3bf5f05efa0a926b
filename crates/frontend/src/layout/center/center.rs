use leptos::prelude::*;

/// Work area holding the open tabs
#[component]
pub fn Center(children: Children) -> impl IntoView {
    view! {
        <main data-zone="center" class="app-tabs" role="main">
            {children()}
        </main>
    }
}
