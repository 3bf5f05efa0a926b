use client::drafts::a002_vehicle::VehicleDraft;
use contracts::domain::a002_vehicle::aggregate::{Vehicle, VehicleStatus};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::shared::components::form_fields::{enum_options, FormActions, SelectField, TextField};
use crate::shared::form::FormHandle;
use crate::shared::list_page::ListPage;
use crate::shared::modal::Modal;

#[component]
pub fn VehicleDetails(page: ListPage<Vehicle>) -> impl IntoView {
    let form = FormHandle::<VehicleDraft>::for_selection(page.selected().as_ref());
    let title = if form.is_edit() { "Edit vehicle" } else { "New vehicle" };
    let close = Callback::new(move |_| page.close_modal());

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
                        label="Vehicle number"
                        required=true
                        placeholder="WP LB-4521"
                        value=form.value(|d| d.vehicle_number.clone())
                        on_input=form.setter(|d, v| d.vehicle_number = v)
                        error=form.error("vehicleNumber")
                        disabled=form.locked("vehicleNumber")
                    />
                    <TextField
                        label="Type"
                        required=true
                        placeholder="Lorry, tipper, trailer..."
                        value=form.value(|d| d.vehicle_type.clone())
                        on_input=form.setter(|d, v| d.vehicle_type = v)
                        error=form.error("vehicleType")
                        disabled=form.locked("vehicleType")
                    />
                    <TextField
                        label="Make"
                        value=form.value(|d| d.make.clone())
                        on_input=form.setter(|d, v| d.make = v)
                        disabled=form.locked("make")
                    />
                    <TextField
                        label="Model"
                        value=form.value(|d| d.model.clone())
                        on_input=form.setter(|d, v| d.model = v)
                        disabled=form.locked("model")
                    />
                    <TextField
                        label="Year"
                        input_type="number"
                        value=form.value(|d| d.year.clone())
                        on_input=form.setter(|d, v| d.year = v)
                        error=form.error("year")
                        disabled=form.locked("year")
                    />
                    <TextField
                        label="Capacity (t)"
                        input_type="number"
                        step="0.1"
                        value=form.value(|d| d.capacity_tons.clone())
                        on_input=form.setter(|d, v| d.capacity_tons = v)
                        error=form.error("capacityTons")
                        disabled=form.locked("capacityTons")
                    />
                    <TextField
                        label="Insurance expiry"
                        input_type="date"
                        value=form.value(|d| d.insurance_expiry.clone())
                        on_input=form.setter(|d, v| d.insurance_expiry = v)
                        error=form.error("insuranceExpiry")
                        disabled=form.locked("insuranceExpiry")
                    />
                    <SelectField
                        label="Status"
                        placeholder="Not set"
                        options=enum_options(VehicleStatus::all(), VehicleStatus::code, VehicleStatus::display_name)
                        value=form.value(|d| d.status.map(|s| s.code().to_string()).unwrap_or_default())
                        on_change=form.setter(|d, v| d.status = VehicleStatus::from_code(&v))
                        disabled=form.locked("status")
                    />
                </div>
                <FormActions form=form on_cancel=close />
            </form>
        </Modal>
    }
}
