use crate::domain::a010_attendance::ui::details::AttendanceDetails;
use crate::shared::components::filters::{FilterMonth, FilterSelect};
use crate::shared::components::form_fields::enum_options;
use crate::shared::components::list_frame::ListFrame;
use crate::shared::context::use_app;
use crate::shared::date_utils::format_date;
use crate::shared::list_page::ListPage;
use client::list::ListViewState;
use contracts::domain::a010_attendance::aggregate::{Attendance, AttendanceStatus};
use contracts::domain::common::{or_na, LookupKind, Lookups};
use contracts::shared::list_filter::keys;
use leptos::children::ToChildren;
use leptos::prelude::*;

const COLUMNS: &[&str] = &["Date", "Driver", "Status", "Check in", "Check out", "Hours", "Notes"];

fn cells(record: &Attendance, lookups: &Lookups) -> Vec<String> {
    let time = |t: &Option<chrono::NaiveTime>| t.map(|t| t.format("%H:%M").to_string()).unwrap_or_default();
    vec![
        format_date(&record.date),
        lookups.name_or_id(LookupKind::Drivers, record.driver_id),
        record.status.display_name().to_string(),
        time(&record.check_in),
        time(&record.check_out),
        record
            .hours_worked()
            .map(|h| format!("{:.1}", h))
            .unwrap_or_default(),
        or_na(&record.notes),
    ]
}

fn summary(state: &ListViewState<Attendance>) -> String {
    let present = state
        .filtered_items()
        .iter()
        .filter(|a| a.status == AttendanceStatus::Present)
        .count();
    format!(
        "{} of {} present, {:.1} hours",
        present,
        state.filtered_count(),
        state.total_by(|a| a.hours_worked().unwrap_or(0.0))
    )
}

#[component]
#[allow(non_snake_case)]
pub fn AttendanceList() -> impl IntoView {
    let page = ListPage::<Attendance>::mount(use_app().services());
    let status_options =
        enum_options(AttendanceStatus::all(), AttendanceStatus::code, AttendanceStatus::display_name);

    view! {
        <ListFrame
            page=page
            title="Attendance"
            columns=COLUMNS
            cells=cells
            summary=summary
            search_placeholder="Driver..."
            filters=ChildrenFn::to_children(move || {
                view! {
                    <FilterSelect
                        page=page
                        key=keys::DRIVER_ID
                        label="Driver"
                        options=page.lookup_options(LookupKind::Drivers)
                    />
                    <FilterSelect page=page key=keys::STATUS label="Status" options=status_options.clone() />
                    <FilterMonth page=page />
                }
            })
        >
            <AttendanceDetails page=page />
        </ListFrame>
    }
}
