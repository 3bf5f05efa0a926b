use crate::domain::a008_payment::ui::details::PaymentDetails;
use crate::shared::components::filters::{FilterMonth, FilterRecipient, FilterSelect};
use crate::shared::components::form_fields::enum_options;
use crate::shared::components::list_frame::ListFrame;
use crate::shared::context::use_app;
use crate::shared::date_utils::format_opt_date;
use crate::shared::list_page::ListPage;
use client::list::ListViewState;
use contracts::domain::a008_payment::aggregate::{Payment, PaymentStatus};
use contracts::domain::common::Lookups;
use contracts::shared::finance::format_money;
use contracts::shared::list_filter::keys;
use contracts::shared::period::month_label;
use leptos::children::ToChildren;
use leptos::prelude::*;

const COLUMNS: &[&str] = &[
    "Recipient",
    "Month",
    "Net pay",
    "Status",
    "Base",
    "Deductions",
    "Advances",
    "Paid on",
];

fn cells(payment: &Payment, lookups: &Lookups) -> Vec<String> {
    vec![
        payment.recipient_name(lookups),
        month_label(&payment.month),
        format_money(payment.net_pay()),
        payment
            .status
            .map(|s| s.display_name().to_string())
            .unwrap_or_default(),
        format_money(payment.base_amount),
        format_money(payment.deductions),
        format_money(payment.advances_deducted),
        format_opt_date(&payment.paid_date),
    ]
}

fn summary(state: &ListViewState<Payment>) -> String {
    format!(
        "{} payments, net total {}",
        state.filtered_count(),
        format_money(state.total_by(Payment::net_pay))
    )
}

#[component]
#[allow(non_snake_case)]
pub fn PaymentList() -> impl IntoView {
    let page = ListPage::<Payment>::mount(use_app().services());
    let status_options = enum_options(PaymentStatus::all(), PaymentStatus::code, PaymentStatus::display_name);

    view! {
        <ListFrame
            page=page
            title="Payments"
            columns=COLUMNS
            cells=cells
            summary=summary
            search_placeholder="Recipient or notes..."
            filters=ChildrenFn::to_children(move || {
                view! {
                    <FilterRecipient page=page />
                    <FilterMonth page=page label="Payroll month" />
                    <FilterSelect page=page key=keys::STATUS label="Status" options=status_options.clone() />
                }
            })
        >
            <PaymentDetails page=page />
        </ListFrame>
    }
}
