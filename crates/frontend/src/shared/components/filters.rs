//! Server-side filter inputs. Every change re-fetches the list.

use contracts::domain::common::{LookupKind, Resource};
use contracts::enums::RecipientType;
use contracts::shared::list_filter::keys;
use leptos::prelude::*;

use crate::shared::list_page::ListPage;

#[component]
pub fn FilterSelect<R>(
    page: ListPage<R>,
    key: &'static str,
    label: &'static str,
    /// (value, label) pairs; an "All" option is added in front
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
) -> impl IntoView
where
    R: Resource,
{
    let current = page.filter_value(key);

    view! {
        <label class="filter">
            <span class="filter__label">{label}</span>
            <select on:change=move |ev| page.set_filter(key, event_target_value(&ev))>
                <option value="" selected=move || current.with(String::is_empty)>"All"</option>
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|(value, text)| {
                            let selected_value = value.clone();
                            view! {
                                <option value=value selected=move || current.get() == selected_value>
                                    {text}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </label>
    }
}

/// Period filter ("YYYY-MM")
#[component]
pub fn FilterMonth<R>(page: ListPage<R>, #[prop(default = "Month")] label: &'static str) -> impl IntoView
where
    R: Resource,
{
    let current = page.filter_value(keys::MONTH);

    view! {
        <label class="filter">
            <span class="filter__label">{label}</span>
            <input
                type="month"
                prop:value=move || current.get()
                on:change=move |ev| page.set_filter(keys::MONTH, event_target_value(&ev))
            />
        </label>
    }
}

/// Recipient type plus a recipient picked from the matching lookup table.
/// Switching the type drops the recipient.
#[component]
pub fn FilterRecipient<R>(page: ListPage<R>) -> impl IntoView
where
    R: Resource,
{
    let recipient_type = page.filter_value(keys::RECIPIENT_TYPE);
    let drivers = page.lookup_options(LookupKind::Drivers);
    let users = page.lookup_options(LookupKind::Users);
    let type_options: Vec<(String, String)> = RecipientType::all()
        .iter()
        .map(|t| (t.code().to_string(), t.display_name().to_string()))
        .collect();
    let recipient_options = Signal::derive(move || {
        match RecipientType::from_code(&recipient_type.get()).map(|t| t.lookup_kind()) {
            Some(LookupKind::Drivers) => drivers.get(),
            Some(LookupKind::Users) => users.get(),
            _ => Vec::new(),
        }
    });
    let recipient = page.filter_value(keys::RECIPIENT_ID);

    view! {
        <label class="filter">
            <span class="filter__label">"Recipient type"</span>
            <select on:change=move |ev| {
                let value = event_target_value(&ev);
                page.update_filter(|filter| {
                    filter.set(keys::RECIPIENT_TYPE, value);
                    filter.remove(keys::RECIPIENT_ID);
                });
            }>
                <option value="" selected=move || recipient_type.with(String::is_empty)>"All"</option>
                {type_options
                    .into_iter()
                    .map(|(value, text)| {
                        let selected_value = value.clone();
                        view! {
                            <option value=value selected=move || recipient_type.get() == selected_value>
                                {text}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
        <label class="filter">
            <span class="filter__label">"Recipient"</span>
            <select
                disabled=move || recipient_type.with(String::is_empty)
                on:change=move |ev| page.set_filter(keys::RECIPIENT_ID, event_target_value(&ev))
            >
                <option value="" selected=move || recipient.with(String::is_empty)>"All"</option>
                {move || {
                    recipient_options
                        .get()
                        .into_iter()
                        .map(|(value, text)| {
                            let selected_value = value.clone();
                            view! {
                                <option value=value selected=move || recipient.get() == selected_value>
                                    {text}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </label>
    }
}
