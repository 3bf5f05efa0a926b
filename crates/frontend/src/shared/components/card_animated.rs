//! CardAnimated: Thaw Card that fades in, optionally after a delay so a
//! row of cards appears one after another.

use leptos::prelude::*;
use thaw::Card;

#[component]
pub fn CardAnimated(
    /// Delay before the animation starts, in ms
    #[prop(optional)]
    delay_ms: u32,
    #[prop(optional, into)]
    title: Option<String>,
    children: Children,
) -> impl IntoView {
    let style = format!("animation: card-appear 0.28s ease-out {}ms both;", delay_ms);

    view! {
        <Card attr:style=style>
            {title.map(|t| view! { <h3 class="card__title">{t}</h3> })}
            {children()}
        </Card>
    }
}
