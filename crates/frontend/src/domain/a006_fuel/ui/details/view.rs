use client::drafts::a006_fuel::FuelDraft;
use contracts::domain::a006_fuel::aggregate::FuelRecord;
use contracts::domain::common::LookupKind;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::shared::components::form_fields::{FormActions, Preview, SelectField, TextField};
use crate::shared::form::FormHandle;
use crate::shared::list_page::ListPage;
use crate::shared::modal::Modal;

#[component]
pub fn FuelDetails(page: ListPage<FuelRecord>) -> impl IntoView {
    let form = FormHandle::<FuelDraft>::for_selection(page.selected().as_ref());
    let title = if form.is_edit() { "Edit fuel record" } else { "New fuel record" };
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
                        label="Quantity (L)"
                        input_type="number"
                        step="0.01"
                        required=true
                        value=form.value(|d| d.quantity.clone())
                        on_input=form.setter(|d, v| d.quantity = v)
                        error=form.error("quantity")
                        disabled=form.locked("quantity")
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
                    <Preview label="Unit price" value=form.derive(FuelDraft::unit_price_preview) />
                    <TextField
                        label="Odometer (km)"
                        input_type="number"
                        value=form.value(|d| d.odometer.clone())
                        on_input=form.setter(|d, v| d.odometer = v)
                        error=form.error("odometer")
                        disabled=form.locked("odometer")
                    />
                    <TextField
                        label="Station"
                        value=form.value(|d| d.station.clone())
                        on_input=form.setter(|d, v| d.station = v)
                        disabled=form.locked("station")
                    />
                </div>
                <FormActions form=form on_cancel=close />
            </form>
        </Modal>
    }
}
