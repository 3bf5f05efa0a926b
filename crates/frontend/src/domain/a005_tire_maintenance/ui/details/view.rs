use client::drafts::a005_tire_maintenance::TireMaintenanceDraft;
use contracts::domain::a005_tire_maintenance::aggregate::{TireAction, TireMaintenance};
use contracts::domain::common::LookupKind;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::shared::components::form_fields::{enum_options, FormActions, SelectField, TextArea, TextField};
use crate::shared::form::FormHandle;
use crate::shared::list_page::ListPage;
use crate::shared::modal::Modal;

#[component]
pub fn TireMaintenanceDetails(page: ListPage<TireMaintenance>) -> impl IntoView {
    let form = FormHandle::<TireMaintenanceDraft>::for_selection(page.selected().as_ref());
    let title = if form.is_edit() { "Edit tire record" } else { "New tire record" };
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
                        label="Tire position"
                        required=true
                        placeholder="Front left, rear axle inner..."
                        value=form.value(|d| d.tire_position.clone())
                        on_input=form.setter(|d, v| d.tire_position = v)
                        error=form.error("tirePosition")
                        disabled=form.locked("tirePosition")
                    />
                    <SelectField
                        label="Action"
                        required=true
                        options=enum_options(TireAction::all(), TireAction::code, TireAction::display_name)
                        value=form.value(|d| d.action.code().to_string())
                        on_change=form.setter(|d, v| {
                            if let Some(action) = TireAction::from_code(&v) {
                                d.action = action;
                            }
                        })
                        disabled=form.locked("action")
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
                        label="Mileage (km)"
                        input_type="number"
                        value=form.value(|d| d.mileage.clone())
                        on_input=form.setter(|d, v| d.mileage = v)
                        error=form.error("mileage")
                        disabled=form.locked("mileage")
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
