use crate::domain::a009_invoice::ui::details::InvoiceDetails;
use crate::shared::components::filters::{FilterMonth, FilterSelect};
use crate::shared::components::form_fields::enum_options;
use crate::shared::components::list_frame::ListFrame;
use crate::shared::context::use_app;
use crate::shared::date_utils::{format_date, format_opt_date, today};
use crate::shared::list_page::ListPage;
use client::list::ListViewState;
use contracts::domain::a009_invoice::aggregate::{Invoice, InvoiceStatus};
use contracts::domain::common::{or_na, Lookups};
use contracts::shared::finance::format_money;
use contracts::shared::list_filter::keys;
use leptos::children::ToChildren;
use leptos::prelude::*;

const COLUMNS: &[&str] = &["Number", "Customer", "Amount", "Status", "Issued", "Due", "Trip"];

fn cells(invoice: &Invoice, _lookups: &Lookups) -> Vec<String> {
    let status = if invoice.is_overdue(today()) {
        format!("{} (overdue)", invoice.status.display_name())
    } else {
        invoice.status.display_name().to_string()
    };
    vec![
        invoice.invoice_number.clone(),
        invoice.customer_name.clone(),
        format_money(invoice.amount),
        status,
        format_date(&invoice.issue_date),
        format_opt_date(&invoice.due_date),
        or_na(&invoice.transport_id),
    ]
}

fn summary(state: &ListViewState<Invoice>) -> String {
    let outstanding = state.total_by(|i| {
        if matches!(i.status, InvoiceStatus::Paid | InvoiceStatus::Cancelled) {
            0.0
        } else {
            i.amount
        }
    });
    format!(
        "Invoiced {}, outstanding {}",
        format_money(state.total_by(|i| i.amount)),
        format_money(outstanding)
    )
}

#[component]
#[allow(non_snake_case)]
pub fn InvoiceList() -> impl IntoView {
    let page = ListPage::<Invoice>::mount(use_app().services());
    let status_options = enum_options(InvoiceStatus::all(), InvoiceStatus::code, InvoiceStatus::display_name);

    view! {
        <ListFrame
            page=page
            title="Invoices"
            columns=COLUMNS
            cells=cells
            summary=summary
            search_placeholder="Number or customer..."
            filters=ChildrenFn::to_children(move || {
                view! {
                    <FilterSelect page=page key=keys::STATUS label="Status" options=status_options.clone() />
                    <FilterMonth page=page />
                }
            })
        >
            <InvoiceDetails page=page />
        </ListFrame>
    }
}
