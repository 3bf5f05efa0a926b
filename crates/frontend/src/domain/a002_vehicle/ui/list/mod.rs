use crate::domain::a002_vehicle::ui::details::VehicleDetails;
use crate::shared::components::filters::FilterSelect;
use crate::shared::components::form_fields::enum_options;
use crate::shared::components::list_frame::ListFrame;
use crate::shared::context::use_app;
use crate::shared::date_utils::format_opt_date;
use crate::shared::list_page::ListPage;
use contracts::domain::a002_vehicle::aggregate::{Vehicle, VehicleStatus};
use contracts::domain::common::{or_na, Lookups};
use contracts::shared::list_filter::keys;
use leptos::children::ToChildren;
use leptos::prelude::*;

const COLUMNS: &[&str] = &["Number", "Type", "Make / model", "Year", "Capacity (t)", "Insurance expiry", "Status"];

fn cells(vehicle: &Vehicle, _lookups: &Lookups) -> Vec<String> {
    let make_model = [vehicle.make.as_deref(), vehicle.model.as_deref()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");
    vec![
        vehicle.vehicle_number.clone(),
        vehicle.vehicle_type.clone(),
        make_model,
        or_na(&vehicle.year),
        or_na(&vehicle.capacity_tons),
        format_opt_date(&vehicle.insurance_expiry),
        vehicle
            .status
            .map(|s| s.display_name().to_string())
            .unwrap_or_default(),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn VehicleList() -> impl IntoView {
    let page = ListPage::<Vehicle>::mount(use_app().services());
    let status_options = enum_options(VehicleStatus::all(), VehicleStatus::code, VehicleStatus::display_name);

    view! {
        <ListFrame
            page=page
            title="Vehicles"
            columns=COLUMNS
            cells=cells
            search_placeholder="Number, type or make..."
            filters=ChildrenFn::to_children(move || {
                view! {
                    <FilterSelect page=page key=keys::STATUS label="Status" options=status_options.clone() />
                }
            })
        >
            <VehicleDetails page=page />
        </ListFrame>
    }
}
