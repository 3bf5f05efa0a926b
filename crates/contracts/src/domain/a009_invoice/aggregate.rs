use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{Lookups, RecordId, Resource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Pending,
    Paid,
    Overdue,
    Cancelled,
}

impl InvoiceStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "Pending",
            InvoiceStatus::Paid => "Paid",
            InvoiceStatus::Overdue => "Overdue",
            InvoiceStatus::Cancelled => "Cancelled",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Overdue => "overdue",
            InvoiceStatus::Cancelled => "cancelled",
        }
    }

    pub fn all() -> Vec<InvoiceStatus> {
        vec![
            InvoiceStatus::Pending,
            InvoiceStatus::Paid,
            InvoiceStatus::Overdue,
            InvoiceStatus::Cancelled,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }
}

impl std::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Счёт клиенту
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: RecordId,
    pub invoice_number: String,
    pub customer_name: String,
    pub transport_id: Option<RecordId>,
    pub issue_date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub amount: f64,
    pub status: InvoiceStatus,
    pub notes: Option<String>,
}

impl Invoice {
    /// Unpaid and past the due date
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        match self.status {
            InvoiceStatus::Paid | InvoiceStatus::Cancelled => false,
            InvoiceStatus::Overdue => true,
            InvoiceStatus::Pending => self.due_date.map(|d| d < today).unwrap_or(false),
        }
    }
}

impl Resource for Invoice {
    fn collection_path() -> &'static str {
        "invoices"
    }

    fn element_name() -> &'static str {
        "Invoice"
    }

    fn list_name() -> &'static str {
        "Invoices"
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self, _lookups: &Lookups) -> String {
        self.invoice_number.clone()
    }

    fn search_fields(&self, _lookups: &Lookups) -> Vec<String> {
        vec![
            self.invoice_number.clone(),
            self.customer_name.clone(),
            self.status.display_name().to_string(),
        ]
    }
}

/// Body of POST/PUT `invoices`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDto {
    pub invoice_number: String,
    pub customer_name: String,
    pub transport_id: Option<RecordId>,
    pub issue_date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub amount: f64,
    pub status: InvoiceStatus,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_overdue() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let mut invoice = Invoice {
            id: 1,
            invoice_number: "INV-0001".into(),
            customer_name: "Lanka Freight".into(),
            transport_id: None,
            issue_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            due_date: NaiveDate::from_ymd_opt(2024, 5, 31),
            amount: 120000.0,
            status: InvoiceStatus::Pending,
            notes: None,
        };
        assert!(invoice.is_overdue(today));

        invoice.status = InvoiceStatus::Paid;
        assert!(!invoice.is_overdue(today));

        invoice.status = InvoiceStatus::Pending;
        invoice.due_date = None;
        assert!(!invoice.is_overdue(today));
    }
}
