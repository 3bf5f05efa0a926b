use client::drafts::a001_driver::DriverDraft;
use contracts::domain::a001_driver::aggregate::{Driver, DriverStatus};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::shared::components::form_fields::{enum_options, FormActions, SelectField, TextArea, TextField};
use crate::shared::components::image_upload::ImageUpload;
use crate::shared::form::FormHandle;
use crate::shared::list_page::ListPage;
use crate::shared::modal::Modal;

#[component]
pub fn DriverDetails(page: ListPage<Driver>) -> impl IntoView {
    let form = FormHandle::<DriverDraft>::for_selection(page.selected().as_ref());
    let title = if form.is_edit() { "Edit driver" } else { "New driver" };
    let close = Callback::new(move |_| page.close_modal());
    let status_options = enum_options(DriverStatus::all(), DriverStatus::code, DriverStatus::display_name);

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
                    <TextField
                        label="Name"
                        required=true
                        value=form.value(|d| d.name.clone())
                        on_input=form.setter(|d, v| d.name = v)
                        error=form.error("name")
                        disabled=form.locked("name")
                    />
                    <TextField
                        label="License number"
                        required=true
                        value=form.value(|d| d.license_number.clone())
                        on_input=form.setter(|d, v| d.license_number = v)
                        error=form.error("licenseNumber")
                        disabled=form.locked("licenseNumber")
                    />
                    <TextField
                        label="NIC number"
                        required=true
                        placeholder="912345678V"
                        value=form.value(|d| d.nic_no.clone())
                        on_input=form.setter(|d, v| d.nic_no = v)
                        error=form.error("nicNo")
                        disabled=form.locked("nicNo")
                    />
                    <TextField
                        label="Phone"
                        input_type="tel"
                        value=form.value(|d| d.phone.clone())
                        on_input=form.setter(|d, v| d.phone = v)
                        disabled=form.locked("phone")
                    />
                    <TextField
                        label="License expiry"
                        input_type="date"
                        value=form.value(|d| d.license_expiry.clone())
                        on_input=form.setter(|d, v| d.license_expiry = v)
                        error=form.error("licenseExpiry")
                        disabled=form.locked("licenseExpiry")
                    />
                    <SelectField
                        label="Status"
                        placeholder="Not set"
                        options=status_options
                        value=form.value(|d| d.status.map(|s| s.code().to_string()).unwrap_or_default())
                        on_change=form.setter(|d, v| d.status = DriverStatus::from_code(&v))
                        disabled=form.locked("status")
                    />
                    <TextArea
                        label="Address"
                        value=form.value(|d| d.address.clone())
                        on_input=form.setter(|d, v| d.address = v)
                        disabled=form.locked("address")
                    />
                    <ImageUpload
                        label="Profile picture"
                        value=form.value(|d| d.profile_image.clone().unwrap_or_default())
                        on_change=form.setter(|d, v| d.profile_image = (!v.is_empty()).then_some(v))
                        disabled=form.submitting()
                    />
                </div>
                <FormActions form=form on_cancel=close />
            </form>
        </Modal>
    }
}
