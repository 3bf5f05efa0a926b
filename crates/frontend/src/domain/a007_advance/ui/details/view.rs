use client::drafts::a007_advance::AdvanceDraft;
use contracts::domain::a007_advance::aggregate::Advance;
use contracts::domain::common::LookupKind;
use contracts::enums::RecipientType;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::shared::components::form_fields::{enum_options, FormActions, SelectField, TextArea, TextField};
use crate::shared::form::FormHandle;
use crate::shared::list_page::ListPage;
use crate::shared::modal::Modal;

#[component]
pub fn AdvanceDetails(page: ListPage<Advance>) -> impl IntoView {
    let form = FormHandle::<AdvanceDraft>::for_selection(page.selected().as_ref());
    let title = if form.is_edit() { "Edit advance" } else { "New advance" };
    let close = Callback::new(move |_| page.close_modal());

    let drivers = page.lookup_options(LookupKind::Drivers);
    let users = page.lookup_options(LookupKind::Users);
    let recipient_type = form.derive(|d| d.recipient_type);
    let recipients = Signal::derive(move || match recipient_type.get() {
        RecipientType::Driver => drivers.get(),
        RecipientType::User => users.get(),
    });

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
                        label="Date"
                        input_type="date"
                        required=true
                        value=form.value(|d| d.date.clone())
                        on_input=form.setter(|d, v| d.date = v)
                        error=form.error("date")
                        disabled=form.locked("date")
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
                    <TextArea
                        label="Reason"
                        value=form.value(|d| d.reason.clone())
                        on_input=form.setter(|d, v| d.reason = v)
                        disabled=form.locked("reason")
                    />
                </div>
                <FormActions form=form on_cancel=close />
            </form>
        </Modal>
    }
}
