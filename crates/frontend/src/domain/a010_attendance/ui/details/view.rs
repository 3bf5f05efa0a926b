use client::drafts::a010_attendance::AttendanceDraft;
use contracts::domain::a010_attendance::aggregate::{Attendance, AttendanceStatus};
use contracts::domain::common::LookupKind;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::shared::components::form_fields::{enum_options, FormActions, SelectField, TextArea, TextField};
use crate::shared::form::FormHandle;
use crate::shared::list_page::ListPage;
use crate::shared::modal::Modal;

#[component]
pub fn AttendanceDetails(page: ListPage<Attendance>) -> impl IntoView {
    let form = FormHandle::<AttendanceDraft>::for_selection(page.selected().as_ref());
    let title = if form.is_edit() { "Edit attendance" } else { "Mark attendance" };
    let close = Callback::new(move |_| page.close_modal());

    // check-in/out only apply to a present driver
    let present = form.derive(|d| d.status == AttendanceStatus::Present);
    let submitting = form.submitting();
    let times_disabled = Signal::derive(move || submitting.get() || !present.get());

    view! {
        <Modal title=title.to_string() on_close=close>
            <form
                class="details-form"
                on:submit=move |ev: SubmitEvent| {
                    ev.prevent_default();
                    page.submit(form);
                }
            >
                <div class="form-grid">
                    <SelectField
                        label="Driver"
                        required=true
                        placeholder="Select driver"
                        options=page.lookup_options(LookupKind::Drivers)
                        value=form.value(|d| d.driver_id.clone())
                        on_change=form.setter(|d, v| d.driver_id = v)
                        error=form.error("driverId")
                        disabled=form.locked("driverId")
                    />
                    <TextField
                        label="Date"
                        input_type="date"
                        required=true
                        value=form.value(|d| d.date.clone())
                        on_input=form.setter(|d, v| d.date = v)
                        error=form.error("date")
                        disabled=form.locked("date")
                    />
                    <SelectField
                        label="Status"
                        required=true
                        options=enum_options(AttendanceStatus::all(), AttendanceStatus::code, AttendanceStatus::display_name)
                        value=form.value(|d| d.status.code().to_string())
                        on_change=form.setter(|d, v| {
                            if let Some(status) = AttendanceStatus::from_code(&v) {
                                d.status = status;
                            }
                        })
                        disabled=form.locked("status")
                    />
                    <TextField
                        label="Check in"
                        input_type="time"
                        value=form.value(|d| d.check_in.clone())
                        on_input=form.setter(|d, v| d.check_in = v)
                        error=form.error("checkIn")
                        disabled=times_disabled
                    />
                    <TextField
                        label="Check out"
                        input_type="time"
                        value=form.value(|d| d.check_out.clone())
                        on_input=form.setter(|d, v| d.check_out = v)
                        error=form.error("checkOut")
                        disabled=times_disabled
                    />
                    <TextArea
                        label="Notes"
                        value=form.value(|d| d.notes.clone())
                        on_input=form.setter(|d, v| d.notes = v)
                        disabled=form.locked("notes")
                    />
                </div>
                <FormActions form=form on_cancel=close />
            </form>
        </Modal>
    }
}
