use crate::domain::a001_driver::ui::details::DriverDetails;
use crate::shared::components::filters::FilterSelect;
use crate::shared::components::form_fields::enum_options;
use crate::shared::components::list_frame::ListFrame;
use crate::shared::context::use_app;
use crate::shared::date_utils::{format_date, today};
use crate::shared::list_page::ListPage;
use contracts::domain::a001_driver::aggregate::{Driver, DriverStatus};
use contracts::domain::common::{or_na, Lookups};
use contracts::shared::list_filter::keys;
use leptos::children::ToChildren;
use leptos::prelude::*;

const COLUMNS: &[&str] = &["Name", "License No.", "NIC", "Phone", "License expiry", "Status"];

fn cells(driver: &Driver, _lookups: &Lookups) -> Vec<String> {
    let expiry = match driver.license_expiry {
        Some(date) if driver.is_license_expired(today()) => format!("{} (expired)", format_date(&date)),
        Some(date) => format_date(&date),
        None => String::new(),
    };
    vec![
        driver.name.clone(),
        driver.license_number.clone(),
        driver.nic_no.clone(),
        or_na(&driver.phone),
        expiry,
        driver
            .status
            .map(|s| s.display_name().to_string())
            .unwrap_or_default(),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn DriverList() -> impl IntoView {
    let page = ListPage::<Driver>::mount(use_app().services());
    let status_options = enum_options(DriverStatus::all(), DriverStatus::code, DriverStatus::display_name);

    view! {
        <ListFrame
            page=page
            title="Drivers"
            columns=COLUMNS
            cells=cells
            search_placeholder="Name, license, NIC or phone..."
            filters=ChildrenFn::to_children(move || {
                view! {
                    <FilterSelect page=page key=keys::STATUS label="Status" options=status_options.clone() />
                }
            })
        >
            <DriverDetails page=page />
        </ListFrame>
    }
}
