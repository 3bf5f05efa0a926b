use client::drafts::a004_maintenance::MaintenanceDraft;
use contracts::domain::a004_maintenance::aggregate::Maintenance;
use contracts::domain::common::LookupKind;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::shared::components::form_fields::{FormActions, SelectField, TextArea, TextField};
use crate::shared::form::FormHandle;
use crate::shared::list_page::ListPage;
use crate::shared::modal::Modal;

#[component]
pub fn MaintenanceDetails(page: ListPage<Maintenance>) -> impl IntoView {
    let form = FormHandle::<MaintenanceDraft>::for_selection(page.selected().as_ref());
    let title = if form.is_edit() { "Edit service" } else { "New service" };
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
                    <SelectField
                        label="Vehicle"
                        required=true
                        placeholder="Select vehicle"
                        options=page.lookup_options(LookupKind::Vehicles)
                        value=form.value(|d| d.vehicle_id.clone())
                        on_change=form.setter(|d, v| d.vehicle_id = v)
                        error=form.error("vehicleId")
                        disabled=form.locked("vehicleId")
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
                    <TextField
                        label="Cost"
                        input_type="number"
                        step="0.01"
                        required=true
                        value=form.value(|d| d.cost.clone())
                        on_input=form.setter(|d, v| d.cost = v)
                        error=form.error("cost")
                        disabled=form.locked("cost")
                    />
                    <TextField
                        label="Odometer (km)"
                        input_type="number"
                        value=form.value(|d| d.odometer.clone())
                        on_input=form.setter(|d, v| d.odometer = v)
                        error=form.error("odometer")
                        disabled=form.locked("odometer")
                    />
                    <TextField
                        label="Service provider"
                        value=form.value(|d| d.service_provider.clone())
                        on_input=form.setter(|d, v| d.service_provider = v)
                        disabled=form.locked("serviceProvider")
                    />
                    <TextArea
                        label="Description"
                        placeholder="Oil change, brake pads..."
                        value=form.value(|d| d.description.clone())
                        on_input=form.setter(|d, v| d.description = v)
                        error=form.error("description")
                        disabled=form.locked("description")
                    />
                </div>
                <FormActions form=form on_cancel=close />
            </form>
        </Modal>
    }
}
