use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Collapsible navigation column; the header toggle flips `left_open`
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = expect_context::<AppGlobalContext>();

    view! {
        <aside
            data-zone="left"
            class="left"
            class:hidden=move || !ctx.left_open.get()
            aria-label="Fleet navigation"
        >
            {children()}
        </aside>
    }
}
