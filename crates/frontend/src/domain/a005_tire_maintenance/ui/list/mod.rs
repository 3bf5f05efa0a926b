use crate::domain::a005_tire_maintenance::ui::details::TireMaintenanceDetails;
use crate::shared::components::filters::{FilterMonth, FilterSelect};
use crate::shared::components::list_frame::ListFrame;
use crate::shared::context::use_app;
use crate::shared::date_utils::format_date;
use crate::shared::list_page::ListPage;
use client::list::ListViewState;
use contracts::domain::a005_tire_maintenance::aggregate::TireMaintenance;
use contracts::domain::common::{or_na, LookupKind, Lookups};
use contracts::shared::finance::format_money;
use contracts::shared::list_filter::keys;
use leptos::children::ToChildren;
use leptos::prelude::*;

const COLUMNS: &[&str] = &["Date", "Vehicle", "Position", "Action", "Cost", "Mileage", "Notes"];

fn cells(record: &TireMaintenance, lookups: &Lookups) -> Vec<String> {
    vec![
        format_date(&record.date),
        lookups.name_or_id(LookupKind::Vehicles, record.vehicle_id),
        record.tire_position.clone(),
        record.action.display_name().to_string(),
        format_money(record.cost),
        or_na(&record.mileage),
        or_na(&record.notes),
    ]
}

fn summary(state: &ListViewState<TireMaintenance>) -> String {
    format!("Total cost {}", format_money(state.total_by(|t| t.cost)))
}

#[component]
#[allow(non_snake_case)]
pub fn TireMaintenanceList() -> impl IntoView {
    let page = ListPage::<TireMaintenance>::mount(use_app().services());

    view! {
        <ListFrame
            page=page
            title="Tire maintenance"
            columns=COLUMNS
            cells=cells
            summary=summary
            search_placeholder="Vehicle or position..."
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
            <TireMaintenanceDetails page=page />
        </ListFrame>
    }
}
