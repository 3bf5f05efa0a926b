use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{LookupKind, Lookups, RecordId, Resource};
use crate::enums::RecipientType;
use crate::shared::finance;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Paid,
}

impl PaymentStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Paid => "Paid",
        }
    }

    /// Wire value, also used as the `<select>` option value
    pub fn code(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Paid => "paid",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }

    pub fn all() -> Vec<PaymentStatus> {
        vec![PaymentStatus::Pending, PaymentStatus::Paid]
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Выплата зарплаты за месяц
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: RecordId,
    pub recipient_type: RecipientType,
    pub recipient_id: RecordId,
    /// Pay period, "YYYY-MM"
    pub month: String,
    pub base_amount: f64,
    pub deductions: f64,
    pub advances_deducted: f64,
    pub paid_date: Option<NaiveDate>,
    pub status: Option<PaymentStatus>,
    pub notes: Option<String>,
}

impl Payment {
    /// base - deductions - advances deducted
    pub fn net_pay(&self) -> f64 {
        finance::net_pay(self.base_amount, self.deductions, self.advances_deducted)
    }

    pub fn recipient_name(&self, lookups: &Lookups) -> String {
        lookups.name_or_id(self.recipient_type.lookup_kind(), self.recipient_id)
    }
}

impl Resource for Payment {
    fn collection_path() -> &'static str {
        "payments"
    }

    fn element_name() -> &'static str {
        "Payment"
    }

    fn list_name() -> &'static str {
        "Payments"
    }

    fn lookups() -> &'static [LookupKind] {
        &[LookupKind::Drivers, LookupKind::Users]
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self, lookups: &Lookups) -> String {
        format!("{} ({})", self.recipient_name(lookups), self.month)
    }

    fn search_fields(&self, lookups: &Lookups) -> Vec<String> {
        vec![self.recipient_name(lookups), self.month.clone()]
    }
}

/// Body of POST/PUT `payments`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDto {
    pub recipient_type: RecipientType,
    pub recipient_id: RecordId,
    pub month: String,
    pub base_amount: f64,
    pub deductions: f64,
    pub advances_deducted: f64,
    pub paid_date: Option<NaiveDate>,
    pub status: Option<PaymentStatus>,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_net_pay_and_recipient_name() {
        let payment: Payment = serde_json::from_str(
            r#"{"id":1,"recipientType":"driver","recipientId":4,"month":"2024-05",
                "baseAmount":50000,"deductions":2000,"advancesDeducted":3000}"#,
        )
        .unwrap();
        assert_eq!(payment.net_pay(), 45000.0);

        let mut lookups = Lookups::new();
        lookups.insert(LookupKind::Drivers, vec![(4, "K. Fernando".to_string())]);
        lookups.insert(LookupKind::Users, vec![(4, "Office Admin".to_string())]);
        assert_eq!(payment.recipient_name(&lookups), "K. Fernando");
        assert_eq!(payment.display_name(&lookups), "K. Fernando (2024-05)");
    }
}
