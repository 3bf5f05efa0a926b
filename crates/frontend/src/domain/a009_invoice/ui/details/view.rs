use client::drafts::a009_invoice::InvoiceDraft;
use contracts::domain::a009_invoice::aggregate::{Invoice, InvoiceStatus};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::shared::components::form_fields::{enum_options, FormActions, SelectField, TextArea, TextField};
use crate::shared::form::FormHandle;
use crate::shared::list_page::ListPage;
use crate::shared::modal::Modal;

#[component]
pub fn InvoiceDetails(page: ListPage<Invoice>) -> impl IntoView {
    let form = FormHandle::<InvoiceDraft>::for_selection(page.selected().as_ref());
    let title = if form.is_edit() { "Edit invoice" } else { "New invoice" };
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
                        label="Invoice number"
                        required=true
                        placeholder="INV-2024-001"
                        value=form.value(|d| d.invoice_number.clone())
                        on_input=form.setter(|d, v| d.invoice_number = v)
                        error=form.error("invoiceNumber")
                        disabled=form.locked("invoiceNumber")
                    />
                    <TextField
                        label="Customer"
                        required=true
                        value=form.value(|d| d.customer_name.clone())
                        on_input=form.setter(|d, v| d.customer_name = v)
                        error=form.error("customerName")
                        disabled=form.locked("customerName")
                    />
                    <TextField
                        label="Trip ID"
                        input_type="number"
                        value=form.value(|d| d.transport_id.clone())
                        on_input=form.setter(|d, v| d.transport_id = v)
                        error=form.error("transportId")
                        disabled=form.locked("transportId")
                    />
                    <TextField
                        label="Amount"
                        input_type="number"
                        step="0.01"
                        required=true
                        value=form.value(|d| d.amount.clone())
                        on_input=form.setter(|d, v| d.amount = v)
                        error=form.error("amount")
                        disabled=form.locked("amount")
                    />
                    <TextField
                        label="Issue date"
                        input_type="date"
                        required=true
                        value=form.value(|d| d.issue_date.clone())
                        on_input=form.setter(|d, v| d.issue_date = v)
                        error=form.error("issueDate")
                        disabled=form.locked("issueDate")
                    />
                    <TextField
                        label="Due date"
                        input_type="date"
                        value=form.value(|d| d.due_date.clone())
                        on_input=form.setter(|d, v| d.due_date = v)
                        error=form.error("dueDate")
                        disabled=form.locked("dueDate")
                    />
                    <SelectField
                        label="Status"
                        required=true
                        options=enum_options(InvoiceStatus::all(), InvoiceStatus::code, InvoiceStatus::display_name)
                        value=form.value(|d| d.status.code().to_string())
                        on_change=form.setter(|d, v| {
                            if let Some(status) = InvoiceStatus::from_code(&v) {
                                d.status = status;
                            }
                        })
                        disabled=form.locked("status")
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
