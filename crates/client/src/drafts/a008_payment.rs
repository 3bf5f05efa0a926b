use contracts::domain::a008_payment::aggregate::{Payment, PaymentDto, PaymentStatus};
use contracts::enums::RecipientType;
use contracts::shared::finance;

use crate::form::validate::{format_date, input_value};
use crate::form::{FormMode, ResourceDraft, ValidationErrors, Validator};

#[derive(Debug, Clone, PartialEq)]
pub struct PaymentDraft {
    pub recipient_type: RecipientType,
    pub recipient_id: String,
    pub month: String,
    pub base_amount: String,
    pub deductions: String,
    pub advances_deducted: String,
    pub paid_date: String,
    pub status: Option<PaymentStatus>,
    pub notes: String,
}

impl Default for PaymentDraft {
    fn default() -> Self {
        Self {
            recipient_type: RecipientType::Driver,
            recipient_id: String::new(),
            month: String::new(),
            base_amount: String::new(),
            deductions: "0".to_string(),
            advances_deducted: "0".to_string(),
            paid_date: String::new(),
            status: Some(PaymentStatus::Pending),
            notes: String::new(),
        }
    }
}

impl PaymentDraft {
    pub fn set_recipient_type(&mut self, recipient_type: RecipientType) {
        if self.recipient_type != recipient_type {
            self.recipient_type = recipient_type;
            self.recipient_id.clear();
        }
    }

    /// Net pay shown under the amount inputs while typing
    pub fn net_pay_preview(&self) -> f64 {
        let parse = |s: &str| s.trim().parse::<f64>().unwrap_or(0.0);
        finance::net_pay(
            parse(&self.base_amount),
            parse(&self.deductions),
            parse(&self.advances_deducted),
        )
    }
}

impl ResourceDraft for PaymentDraft {
    type Record = Payment;
    type Payload = PaymentDto;

    const LOCKED_ON_EDIT: &'static [&'static str] = &["recipientType", "recipientId", "month"];

    fn from_record(record: &Payment) -> Self {
        Self {
            recipient_type: record.recipient_type,
            recipient_id: record.recipient_id.to_string(),
            month: record.month.clone(),
            base_amount: record.base_amount.to_string(),
            deductions: record.deductions.to_string(),
            advances_deducted: record.advances_deducted.to_string(),
            paid_date: record.paid_date.as_ref().map(format_date).unwrap_or_default(),
            status: record.status,
            notes: input_value(&record.notes),
        }
    }

    fn validate(&self, _mode: FormMode) -> Result<PaymentDto, ValidationErrors> {
        let mut v = Validator::new();
        let recipient_id = v.required_id(
            "recipientId",
            self.recipient_type.display_name(),
            &self.recipient_id,
        );
        let month = v.month("month", &self.month);
        let base_amount = v.required_number("baseAmount", "Base amount", &self.base_amount, 0.0);
        let deductions = v.required_number("deductions", "Deductions", &self.deductions, 0.0);
        let advances_deducted = v.required_number(
            "advancesDeducted",
            "Advances deducted",
            &self.advances_deducted,
            0.0,
        );
        if finance::net_pay(base_amount, deductions, advances_deducted) < 0.0 {
            v.error("deductions", "Deductions exceed the base amount");
        }
        let paid_date = v.optional_date("paidDate", "Paid date", &self.paid_date);
        if self.status == Some(PaymentStatus::Paid) && paid_date.is_none() {
            v.error("paidDate", "Paid date is required for a paid payment");
        }
        v.finish(PaymentDto {
            recipient_type: self.recipient_type,
            recipient_id,
            month,
            base_amount,
            deductions,
            advances_deducted,
            paid_date,
            status: self.status,
            notes: Validator::optional_text(&self.notes),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> PaymentDraft {
        PaymentDraft {
            recipient_id: "2".into(),
            month: "2024-05".into(),
            base_amount: "50000".into(),
            deductions: "2000".into(),
            advances_deducted: "3000".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_net_pay_preview() {
        assert_eq!(draft().net_pay_preview(), 45000.0);
    }

    #[test]
    fn test_deductions_cannot_exceed_base() {
        let mut d = draft();
        d.deductions = "48000".into();
        let errors = d.validate(FormMode::Create).unwrap_err();
        assert_eq!(errors.get("deductions"), Some("Deductions exceed the base amount"));
    }

    #[test]
    fn test_paid_requires_paid_date() {
        let mut d = draft();
        d.status = Some(PaymentStatus::Paid);
        assert!(d.validate(FormMode::Create).is_err());
        d.paid_date = "2024-06-01".into();
        let dto = d.validate(FormMode::Create).unwrap();
        assert_eq!(dto.recipient_type, RecipientType::Driver);
        assert_eq!(dto.recipient_id, 2);
    }
}
