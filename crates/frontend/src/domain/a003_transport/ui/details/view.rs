use client::drafts::a003_transport::TransportDraft;
use contracts::domain::a003_transport::aggregate::Transport;
use contracts::domain::common::LookupKind;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::shared::components::form_fields::{FormActions, SelectField, TextArea, TextField};
use crate::shared::form::FormHandle;
use crate::shared::list_page::ListPage;
use crate::shared::modal::Modal;

#[component]
pub fn TransportDetails(page: ListPage<Transport>) -> impl IntoView {
    let form = FormHandle::<TransportDraft>::for_selection(page.selected().as_ref());
    let title = if form.is_edit() { "Edit trip" } else { "New trip" };
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
                        label="Origin"
                        required=true
                        value=form.value(|d| d.origin.clone())
                        on_input=form.setter(|d, v| d.origin = v)
                        error=form.error("origin")
                        disabled=form.locked("origin")
                    />
                    <TextField
                        label="Destination"
                        required=true
                        value=form.value(|d| d.destination.clone())
                        on_input=form.setter(|d, v| d.destination = v)
                        error=form.error("destination")
                        disabled=form.locked("destination")
                    />
                    <TextField
                        label="Departure date"
                        input_type="date"
                        required=true
                        value=form.value(|d| d.departure_date.clone())
                        on_input=form.setter(|d, v| d.departure_date = v)
                        error=form.error("departureTime")
                        disabled=form.locked("departureTime")
                    />
                    <TextField
                        label="Departure time"
                        input_type="time"
                        required=true
                        value=form.value(|d| d.departure_time.clone())
                        on_input=form.setter(|d, v| d.departure_time = v)
                        disabled=form.locked("departureTime")
                    />
                    <TextField
                        label="Arrival date"
                        input_type="date"
                        value=form.value(|d| d.arrival_date.clone())
                        on_input=form.setter(|d, v| d.arrival_date = v)
                        error=form.error("arrivalTime")
                        disabled=form.locked("arrivalTime")
                    />
                    <TextField
                        label="Arrival time"
                        input_type="time"
                        value=form.value(|d| d.arrival_time.clone())
                        on_input=form.setter(|d, v| d.arrival_time = v)
                        disabled=form.locked("arrivalTime")
                    />
                    <TextField
                        label="Distance (km)"
                        input_type="number"
                        step="0.1"
                        value=form.value(|d| d.distance_km.clone())
                        on_input=form.setter(|d, v| d.distance_km = v)
                        error=form.error("distanceKm")
                        disabled=form.locked("distanceKm")
                    />
                    <TextField
                        label="Income"
                        input_type="number"
                        step="0.01"
                        required=true
                        value=form.value(|d| d.income.clone())
                        on_input=form.setter(|d, v| d.income = v)
                        error=form.error("income")
                        disabled=form.locked("income")
                    />
                    <TextArea
                        label="Description"
                        value=form.value(|d| d.description.clone())
                        on_input=form.setter(|d, v| d.description = v)
                        disabled=form.locked("description")
                    />
                </div>
                <FormActions form=form on_cancel=close />
            </form>
        </Modal>
    }
}
