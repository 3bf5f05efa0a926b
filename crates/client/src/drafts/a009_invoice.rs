use contracts::domain::a009_invoice::aggregate::{Invoice, InvoiceDto, InvoiceStatus};

use crate::form::validate::{format_date, input_value};
use crate::form::{FormMode, ResourceDraft, ValidationErrors, Validator};

#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceDraft {
    pub invoice_number: String,
    pub customer_name: String,
    pub transport_id: String,
    pub issue_date: String,
    pub due_date: String,
    pub amount: String,
    pub status: InvoiceStatus,
    pub notes: String,
}

impl Default for InvoiceDraft {
    fn default() -> Self {
        Self {
            invoice_number: String::new(),
            customer_name: String::new(),
            transport_id: String::new(),
            issue_date: String::new(),
            due_date: String::new(),
            amount: String::new(),
            status: InvoiceStatus::Pending,
            notes: String::new(),
        }
    }
}

impl ResourceDraft for InvoiceDraft {
    type Record = Invoice;
    type Payload = InvoiceDto;

    const LOCKED_ON_EDIT: &'static [&'static str] = &["invoiceNumber"];

    fn from_record(record: &Invoice) -> Self {
        Self {
            invoice_number: record.invoice_number.clone(),
            customer_name: record.customer_name.clone(),
            transport_id: input_value(&record.transport_id),
            issue_date: format_date(&record.issue_date),
            due_date: record.due_date.as_ref().map(format_date).unwrap_or_default(),
            amount: record.amount.to_string(),
            status: record.status,
            notes: input_value(&record.notes),
        }
    }

    fn validate(&self, _mode: FormMode) -> Result<InvoiceDto, ValidationErrors> {
        let mut v = Validator::new();
        let invoice_number = v.required_text("invoiceNumber", "Invoice number", &self.invoice_number);
        let customer_name = v.required_text("customerName", "Customer", &self.customer_name);
        let transport_id = v.optional_id("transportId", "Trip", &self.transport_id);
        let issue_date = v.required_date("issueDate", "Issue date", &self.issue_date);
        let due_date = v.optional_date("dueDate", "Due date", &self.due_date);
        if let Some(due) = due_date {
            if due < issue_date {
                v.error("dueDate", "Due date cannot be before the issue date");
            }
        }
        let amount = v.required_number("amount", "Amount", &self.amount, 0.0);
        v.finish(InvoiceDto {
            invoice_number,
            customer_name,
            transport_id,
            issue_date,
            due_date,
            amount,
            status: self.status,
            notes: Validator::optional_text(&self.notes),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_due_before_issue_rejected() {
        let draft = InvoiceDraft {
            invoice_number: "INV-0042".into(),
            customer_name: "Lanka Tiles".into(),
            issue_date: "2024-05-10".into(),
            due_date: "2024-05-01".into(),
            amount: "120000".into(),
            ..Default::default()
        };
        let errors = draft.validate(FormMode::Create).unwrap_err();
        assert_eq!(errors.get("dueDate"), Some("Due date cannot be before the issue date"));
    }

    #[test]
    fn test_optional_trip_link() {
        let draft = InvoiceDraft {
            invoice_number: "INV-0042".into(),
            customer_name: "Lanka Tiles".into(),
            issue_date: "2024-05-10".into(),
            amount: "120000".into(),
            ..Default::default()
        };
        let dto = draft.validate(FormMode::Create).unwrap();
        assert_eq!(dto.transport_id, None);
        assert_eq!(dto.status, InvoiceStatus::Pending);
    }
}
