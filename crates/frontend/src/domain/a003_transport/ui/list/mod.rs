use crate::domain::a003_transport::ui::details::TransportDetails;
use crate::shared::components::filters::{FilterMonth, FilterSelect};
use crate::shared::components::list_frame::ListFrame;
use crate::shared::context::use_app;
use crate::shared::date_utils::{format_datetime, format_opt_datetime};
use crate::shared::list_page::ListPage;
use client::list::ListViewState;
use contracts::domain::a003_transport::aggregate::Transport;
use contracts::domain::common::{or_na, LookupKind, Lookups};
use contracts::shared::finance::format_money;
use contracts::shared::list_filter::keys;
use leptos::children::ToChildren;
use leptos::prelude::*;

const COLUMNS: &[&str] = &[
    "Departure",
    "Vehicle",
    "Route",
    "Driver",
    "Arrival",
    "Distance (km)",
    "Income",
];

fn cells(trip: &Transport, lookups: &Lookups) -> Vec<String> {
    vec![
        format_datetime(&trip.departure_time),
        lookups.name_or_id(LookupKind::Vehicles, trip.vehicle_id),
        format!("{} → {}", trip.origin, trip.destination),
        lookups.name_or_id(LookupKind::Drivers, trip.driver_id),
        format_opt_datetime(&trip.arrival_time),
        or_na(&trip.distance_km),
        format_money(trip.income),
    ]
}

fn summary(state: &ListViewState<Transport>) -> String {
    format!(
        "{} trips, income {}, {:.1} km",
        state.filtered_count(),
        format_money(state.total_by(|t| t.income)),
        state.total_by(|t| t.distance_km.unwrap_or(0.0))
    )
}

#[component]
#[allow(non_snake_case)]
pub fn TransportList() -> impl IntoView {
    let page = ListPage::<Transport>::mount(use_app().services());

    view! {
        <ListFrame
            page=page
            title="Transports"
            columns=COLUMNS
            cells=cells
            summary=summary
            search_placeholder="Route, vehicle or driver..."
            filters=ChildrenFn::to_children(move || {
                view! {
                    <FilterSelect
                        page=page
                        key=keys::VEHICLE_ID
                        label="Vehicle"
                        options=page.lookup_options(LookupKind::Vehicles)
                    />
                    <FilterSelect
                        page=page
                        key=keys::DRIVER_ID
                        label="Driver"
                        options=page.lookup_options(LookupKind::Drivers)
                    />
                    <FilterMonth page=page />
                }
            })
        >
            <TransportDetails page=page />
        </ListFrame>
    }
}
