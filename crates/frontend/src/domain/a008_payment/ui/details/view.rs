use client::drafts::a008_payment::PaymentDraft;
use contracts::domain::a008_payment::aggregate::{Payment, PaymentStatus};
use contracts::domain::common::LookupKind;
use contracts::enums::RecipientType;
use contracts::shared::finance::format_money;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::shared::components::form_fields::{
    enum_options, FormActions, Preview, SelectField, TextArea, TextField,
};
use crate::shared::form::FormHandle;
use crate::shared::list_page::ListPage;
use crate::shared::modal::Modal;

#[component]
pub fn PaymentDetails(page: ListPage<Payment>) -> impl IntoView {
    let form = FormHandle::<PaymentDraft>::for_selection(page.selected().as_ref());
    let title = if form.is_edit() { "Edit payment" } else { "New payment" };
    let close = Callback::new(move |_| page.close_modal());

    let drivers = page.lookup_options(LookupKind::Drivers);
    let users = page.lookup_options(LookupKind::Users);
    let recipient_type = form.derive(|d| d.recipient_type);
    let recipients = Signal::derive(move || match recipient_type.get() {
        RecipientType::Driver => drivers.get(),
        RecipientType::User => users.get(),
    });
    let net_pay = form.derive(|d| format_money(d.net_pay_preview()));

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
                        label="Recipient type"
                        required=true
                        options=enum_options(RecipientType::all(), RecipientType::code, RecipientType::display_name)
                        value=form.value(|d| d.recipient_type.code().to_string())
                        on_change=form.setter(|d, v| {
                            if let Some(t) = RecipientType::from_code(&v) {
                                d.set_recipient_type(t);
                            }
                        })
                        disabled=form.locked("recipientType")
                    />
                    <SelectField
                        label="Recipient"
                        required=true
                        placeholder="Select recipient"
                        options=recipients
                        value=form.value(|d| d.recipient_id.clone())
                        on_change=form.setter(|d, v| d.recipient_id = v)
                        error=form.error("recipientId")
                        disabled=form.locked("recipientId")
                    />
                    <TextField
                        label="Payroll month"
                        input_type="month"
                        required=true
                        value=form.value(|d| d.month.clone())
                        on_input=form.setter(|d, v| d.month = v)
                        error=form.error("month")
                        disabled=form.locked("month")
                    />
                    <TextField
                        label="Base amount"
                        input_type="number"
                        step="0.01"
                        required=true
                        value=form.value(|d| d.base_amount.clone())
                        on_input=form.setter(|d, v| d.base_amount = v)
                        error=form.error("baseAmount")
                        disabled=form.locked("baseAmount")
                    />
                    <TextField
                        label="Deductions"
                        input_type="number"
                        step="0.01"
                        value=form.value(|d| d.deductions.clone())
                        on_input=form.setter(|d, v| d.deductions = v)
                        error=form.error("deductions")
                        disabled=form.locked("deductions")
                    />
                    <TextField
                        label="Advances deducted"
                        input_type="number"
                        step="0.01"
                        value=form.value(|d| d.advances_deducted.clone())
                        on_input=form.setter(|d, v| d.advances_deducted = v)
                        error=form.error("advancesDeducted")
                        disabled=form.locked("advancesDeducted")
                    />
                    <Preview label="Net pay" value=net_pay />
                    <SelectField
                        label="Status"
                        placeholder="Not set"
                        options=enum_options(PaymentStatus::all(), PaymentStatus::code, PaymentStatus::display_name)
                        value=form.value(|d| d.status.map(|s| s.code().to_string()).unwrap_or_default())
                        on_change=form.setter(|d, v| d.status = PaymentStatus::from_code(&v))
                        disabled=form.locked("status")
                    />
                    <TextField
                        label="Paid on"
                        input_type="date"
                        value=form.value(|d| d.paid_date.clone())
                        on_input=form.setter(|d, v| d.paid_date = v)
                        error=form.error("paidDate")
                        disabled=form.locked("paidDate")
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
