use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{LookupKind, Lookups, RecordId, Resource};
use crate::enums::RecipientType;

/// Аванс, выданный водителю или сотруднику
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Advance {
    pub id: RecordId,
    pub recipient_type: RecipientType,
    pub recipient_id: RecordId,
    pub amount: f64,
    pub date: NaiveDate,
    /// Payroll month the advance is deducted from, "YYYY-MM"
    pub month: String,
    pub reason: Option<String>,
}

impl Advance {
    pub fn recipient_name(&self, lookups: &Lookups) -> String {
        lookups.name_or_id(self.recipient_type.lookup_kind(), self.recipient_id)
    }
}

impl Resource for Advance {
    fn collection_path() -> &'static str {
        "advances"
    }

    fn element_name() -> &'static str {
        "Advance"
    }

    fn list_name() -> &'static str {
        "Advances"
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
        let mut fields = vec![self.recipient_name(lookups), self.month.clone()];
        fields.extend(self.reason.clone());
        fields
    }
}

/// Body of POST/PUT `advances`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvanceDto {
    pub recipient_type: RecipientType,
    pub recipient_id: RecordId,
    pub amount: f64,
    pub date: NaiveDate,
    pub month: String,
    pub reason: Option<String>,
}
