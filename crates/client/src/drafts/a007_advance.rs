use contracts::domain::a007_advance::aggregate::{Advance, AdvanceDto};
use contracts::enums::RecipientType;

use crate::form::validate::{format_date, input_value};
use crate::form::{FormMode, ResourceDraft, ValidationErrors, Validator};

#[derive(Debug, Clone, PartialEq)]
pub struct AdvanceDraft {
    pub recipient_type: RecipientType,
    pub recipient_id: String,
    pub amount: String,
    pub date: String,
    pub month: String,
    pub reason: String,
}

impl Default for AdvanceDraft {
    fn default() -> Self {
        Self {
            recipient_type: RecipientType::Driver,
            recipient_id: String::new(),
            amount: String::new(),
            date: String::new(),
            month: String::new(),
            reason: String::new(),
        }
    }
}

impl AdvanceDraft {
    /// Switching the recipient type invalidates the picked recipient
    pub fn set_recipient_type(&mut self, recipient_type: RecipientType) {
        if self.recipient_type != recipient_type {
            self.recipient_type = recipient_type;
            self.recipient_id.clear();
        }
    }
}

impl ResourceDraft for AdvanceDraft {
    type Record = Advance;
    type Payload = AdvanceDto;

    const LOCKED_ON_EDIT: &'static [&'static str] = &["recipientType", "recipientId", "month"];

    fn from_record(record: &Advance) -> Self {
        Self {
            recipient_type: record.recipient_type,
            recipient_id: record.recipient_id.to_string(),
            amount: record.amount.to_string(),
            date: format_date(&record.date),
            month: record.month.clone(),
            reason: input_value(&record.reason),
        }
    }

    fn validate(&self, _mode: FormMode) -> Result<AdvanceDto, ValidationErrors> {
        let mut v = Validator::new();
        let recipient_id = v.required_id(
            "recipientId",
            self.recipient_type.display_name(),
            &self.recipient_id,
        );
        let amount = v.required_number("amount", "Amount", &self.amount, 0.0);
        if amount == 0.0 && !self.amount.trim().is_empty() {
            v.error("amount", "Amount must be greater than 0");
        }
        let date = v.required_date("date", "Date", &self.date);
        let month = v.month("month", &self.month);
        v.finish(AdvanceDto {
            recipient_type: self.recipient_type,
            recipient_id,
            amount,
            date,
            month,
            reason: Validator::optional_text(&self.reason),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipient_change_clears_id() {
        let mut draft = AdvanceDraft {
            recipient_id: "4".into(),
            ..Default::default()
        };
        draft.set_recipient_type(RecipientType::Driver);
        assert_eq!(draft.recipient_id, "4");
        draft.set_recipient_type(RecipientType::User);
        assert_eq!(draft.recipient_id, "");
    }

    #[test]
    fn test_zero_amount_rejected() {
        let draft = AdvanceDraft {
            recipient_id: "4".into(),
            amount: "0".into(),
            date: "2024-05-10".into(),
            month: "2024-05".into(),
            ..Default::default()
        };
        let errors = draft.validate(FormMode::Create).unwrap_err();
        assert_eq!(errors.get("amount"), Some("Amount must be greater than 0"));
    }
}
