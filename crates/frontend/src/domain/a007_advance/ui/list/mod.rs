use crate::domain::a007_advance::ui::details::AdvanceDetails;
use crate::shared::components::filters::{FilterMonth, FilterRecipient};
use crate::shared::components::list_frame::ListFrame;
use crate::shared::context::use_app;
use crate::shared::date_utils::format_date;
use crate::shared::list_page::ListPage;
use client::list::ListViewState;
use contracts::domain::a007_advance::aggregate::Advance;
use contracts::domain::common::{or_na, Lookups};
use contracts::shared::finance::format_money;
use contracts::shared::period::month_label;
use leptos::children::ToChildren;
use leptos::prelude::*;

const COLUMNS: &[&str] = &["Recipient", "Amount", "Month", "Type", "Date", "Reason"];

fn cells(advance: &Advance, lookups: &Lookups) -> Vec<String> {
    vec![
        advance.recipient_name(lookups),
        format_money(advance.amount),
        month_label(&advance.month),
        advance.recipient_type.display_name().to_string(),
        format_date(&advance.date),
        or_na(&advance.reason),
    ]
}

fn summary(state: &ListViewState<Advance>) -> String {
    format!(
        "{} advances, total {}",
        state.filtered_count(),
        format_money(state.total_by(|a| a.amount))
    )
}

#[component]
#[allow(non_snake_case)]
pub fn AdvanceList() -> impl IntoView {
    let page = ListPage::<Advance>::mount(use_app().services());

    view! {
        <ListFrame
            page=page
            title="Advances"
            columns=COLUMNS
            cells=cells
            summary=summary
            search_placeholder="Recipient or reason..."
            filters=ChildrenFn::to_children(move || {
                view! {
                    <FilterRecipient page=page />
                    <FilterMonth page=page label="Payroll month" />
                }
            })
        >
            <AdvanceDetails page=page />
        </ListFrame>
    }
}
