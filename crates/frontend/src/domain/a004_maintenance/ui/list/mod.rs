use crate::domain::a004_maintenance::ui::details::MaintenanceDetails;
use crate::shared::components::filters::{FilterMonth, FilterSelect};
use crate::shared::components::list_frame::ListFrame;
use crate::shared::context::use_app;
use crate::shared::date_utils::format_date;
use crate::shared::list_page::ListPage;
use client::list::ListViewState;
use contracts::domain::a004_maintenance::aggregate::Maintenance;
use contracts::domain::common::{or_na, LookupKind, Lookups};
use contracts::shared::finance::format_money;
use contracts::shared::list_filter::keys;
use leptos::children::ToChildren;
use leptos::prelude::*;

const COLUMNS: &[&str] = &["Date", "Vehicle", "Description", "Cost", "Provider", "Odometer"];

fn cells(record: &Maintenance, lookups: &Lookups) -> Vec<String> {
    vec![
        format_date(&record.date),
        lookups.name_or_id(LookupKind::Vehicles, record.vehicle_id),
        record.description.clone(),
        format_money(record.cost),
        or_na(&record.service_provider),
        or_na(&record.odometer),
    ]
}

fn summary(state: &ListViewState<Maintenance>) -> String {
    format!("Total cost {}", format_money(state.total_by(|m| m.cost)))
}

#[component]
#[allow(non_snake_case)]
pub fn MaintenanceList() -> impl IntoView {
    let page = ListPage::<Maintenance>::mount(use_app().services());

    view! {
        <ListFrame
            page=page
            title="Maintenance"
            columns=COLUMNS
            cells=cells
            summary=summary
            search_placeholder="Vehicle, description or provider..."
            filters=ChildrenFn::to_children(move || {
                view! {
                    <FilterSelect
                        page=page
                        key=keys::VEHICLE_ID
                        label="Vehicle"
                        options=page.lookup_options(LookupKind::Vehicles)
                    />
                    <FilterMonth page=page />
                }
            })
        >
            <MaintenanceDetails page=page />
        </ListFrame>
    }
}
