use crate::domain::a006_fuel::ui::details::FuelDetails;
use crate::shared::components::filters::{FilterMonth, FilterSelect};
use crate::shared::components::list_frame::ListFrame;
use crate::shared::context::use_app;
use crate::shared::date_utils::format_date;
use crate::shared::list_page::ListPage;
use client::list::ListViewState;
use contracts::domain::a006_fuel::aggregate::FuelRecord;
use contracts::domain::common::{or_na, LookupKind, Lookups};
use contracts::shared::finance::{format_money, format_unit_price};
use contracts::shared::list_filter::keys;
use leptos::children::ToChildren;
use leptos::prelude::*;

const COLUMNS: &[&str] = &["Date", "Vehicle", "Quantity (L)", "Cost", "Unit price", "Odometer", "Station"];

fn cells(record: &FuelRecord, lookups: &Lookups) -> Vec<String> {
    vec![
        format_date(&record.date),
        lookups.name_or_id(LookupKind::Vehicles, record.vehicle_id),
        format!("{:.2}", record.quantity),
        format_money(record.cost),
        record.unit_price_display(),
        or_na(&record.odometer),
        or_na(&record.station),
    ]
}

/// Average price is weighted by volume, not by record
fn summary(state: &ListViewState<FuelRecord>) -> String {
    let litres = state.total_by(|f| f.quantity);
    let cost = state.total_by(|f| f.cost);
    format!(
        "{:.2} L, cost {}, average {} per L",
        litres,
        format_money(cost),
        format_unit_price(cost, litres)
    )
}

#[component]
#[allow(non_snake_case)]
pub fn FuelList() -> impl IntoView {
    let page = ListPage::<FuelRecord>::mount(use_app().services());

    view! {
        <ListFrame
            page=page
            title="Fuel"
            columns=COLUMNS
            cells=cells
            summary=summary
            search_placeholder="Vehicle or station..."
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
            <FuelDetails page=page />
        </ListFrame>
    }
}
