//! Page chrome shared by every resource list: header actions, search,
//! filters, the table with row actions, pagination and the edit modal.

use contracts::domain::common::{Lookups, RecordId, Resource, NOT_AVAILABLE};
use contracts::shared::export::ExportFormat;
use client::list::ListViewState;
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::context::use_app;
use crate::shared::icons::icon;
use crate::shared::list_page::ListPage;

/// Columns past this index collapse into the expandable row on narrow screens
const PRIMARY_COLUMNS: usize = 3;

fn column_class(index: usize) -> &'static str {
    if index < PRIMARY_COLUMNS {
        "table__cell"
    } else {
        "table__cell table__cell--secondary"
    }
}

fn display(value: &str) -> String {
    if value.trim().is_empty() {
        NOT_AVAILABLE.to_string()
    } else {
        value.to_string()
    }
}

#[component]
pub fn ListFrame<R>(
    page: ListPage<R>,
    title: &'static str,
    columns: &'static [&'static str],
    /// One display string per column
    cells: fn(&R, &Lookups) -> Vec<String>,
    /// Server-side filter inputs
    #[prop(optional)]
    filters: Option<ChildrenFn>,
    /// Line shown above the table (totals of the filtered view)
    #[prop(optional)]
    summary: Option<fn(&ListViewState<R>) -> String>,
    #[prop(default = "Search...")] search_placeholder: &'static str,
    /// Create/edit modal, rendered while it is open
    children: ChildrenFn,
) -> impl IntoView
where
    R: Resource,
{
    let app = use_app();
    let state = page.state;
    let expanded = RwSignal::new(None::<RecordId>);

    let loading = Signal::derive(move || state.with(|s| s.loading));
    let exporting = Signal::derive(move || page.exporting.get().is_some());
    let has_filter = move || state.with(|s| !s.filter.is_empty());

    let rows = move || {
        state.with(|s| {
            s.page_items()
                .into_iter()
                .map(|record| {
                    let values = cells(&record, &s.lookups);
                    (record, values)
                })
                .collect::<Vec<_>>()
        })
    };

    let empty_text = move || {
        state.with(|s| {
            if s.loading && !s.is_loaded {
                "Loading...".to_string()
            } else {
                format!("No {} found", R::list_name().to_lowercase())
            }
        })
    };

    let render_row = move |record: R, values: Vec<String>| {
        let id = record.id();
        let is_expanded = move || expanded.get() == Some(id);
        let for_edit = record.clone();
        let details = values.clone();

        view! {
            <tr class="table__row">
                <td class="table__expand">
                    <button
                        class="button button--icon"
                        title="Details"
                        on:click=move |_| expanded.update(|e| *e = if *e == Some(id) { None } else { Some(id) })
                    >
                        {move || if is_expanded() { icon("chevron-down") } else { icon("chevron-right") }}
                    </button>
                </td>
                {values
                    .iter()
                    .enumerate()
                    .map(|(i, value)| view! { <td class=column_class(i)>{display(value)}</td> })
                    .collect_view()}
                <td class="table__actions">
                    <button
                        class="button button--icon"
                        title="Edit"
                        on:click=move |_| page.open_edit(for_edit.clone())
                    >
                        {icon("edit")}
                    </button>
                    <button
                        class="button button--icon button--danger"
                        title="Delete"
                        on:click=move |_| page.delete(record.clone())
                    >
                        {icon("delete")}
                    </button>
                </td>
            </tr>
            <Show when=is_expanded>
                <tr class="table__details">
                    <td colspan=(columns.len() + 2).to_string()>
                        <dl class="details-list">
                            {columns
                                .iter()
                                .zip(details.iter())
                                .map(|(column, value)| {
                                    view! {
                                        <dt>{*column}</dt>
                                        <dd>{display(value)}</dd>
                                    }
                                })
                                .collect_view()}
                        </dl>
                    </td>
                </tr>
            </Show>
        }
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">{title}</h1>
                    <span class="header__count">{move || state.with(|s| s.filtered_count())}</span>
                </div>
                <div class="header__actions">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| page.open_create()>
                        {icon("plus")}
                        {format!(" New {}", R::element_name().to_lowercase())}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| page.refresh()
                        disabled=loading
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| page.export(ExportFormat::Excel)
                        disabled=exporting
                    >
                        {icon("download")}
                        " Excel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| page.export(ExportFormat::Pdf)
                        disabled=exporting
                    >
                        {icon("file-text")}
                        " PDF"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <div class="search-box">
                        {icon("search")}
                        <input
                            type="search"
                            placeholder=search_placeholder
                            prop:value=move || state.with(|s| s.search_term.clone())
                            on:input=move |ev| page.search(&event_target_value(&ev))
                        />
                    </div>
                    {filters.map(|filters| view! { <div class="filter-panel-content">{filters()}</div> })}
                    <Show when=has_filter>
                        <button class="button button--link" on:click=move |_| page.reset_filter()>
                            "Clear filters"
                        </button>
                    </Show>
                </div>

                {summary.map(|summary| {
                    view! { <div class="list-summary">{move || state.with(|s| summary(s))}</div> }
                })}

                <div class="table-wrapper">
                    <table class="table">
                        <thead>
                            <tr>
                                <th class="table__expand"></th>
                                {columns
                                    .iter()
                                    .enumerate()
                                    .map(|(i, column)| view! { <th class=column_class(i)>{*column}</th> })
                                    .collect_view()}
                                <th class="table__actions">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let rows = rows();
                                if rows.is_empty() {
                                    view! {
                                        <tr>
                                            <td class="table__empty" colspan=(columns.len() + 2).to_string()>
                                                {empty_text}
                                            </td>
                                        </tr>
                                    }
                                    .into_any()
                                } else {
                                    rows.into_iter()
                                        .map(|(record, values)| render_row(record, values))
                                        .collect_view()
                                        .into_any()
                                }
                            }}
                        </tbody>
                    </table>
                </div>

                <PaginationControls
                    current_page=Signal::derive(move || state.with(|s| s.current_page))
                    total_pages=Signal::derive(move || state.with(|s| s.total_pages()))
                    total_count=Signal::derive(move || state.with(|s| s.filtered_count()))
                    page_size=Signal::derive(move || state.with(|s| s.items_per_page))
                    on_page_change=Callback::new(move |p| page.go_to_page(p))
                    on_page_size_change=Callback::new(move |n| page.set_page_size(n))
                    page_size_options=app.page_size_options()
                />
            </div>

            <Show when=move || state.with(|s| s.is_modal_open())>
                {children()}
            </Show>
        </div>
    }
}
