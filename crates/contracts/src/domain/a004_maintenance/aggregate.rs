use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{LookupKind, Lookups, RecordId, Resource};

/// Запись о техобслуживании
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Maintenance {
    pub id: RecordId,
    pub vehicle_id: RecordId,
    pub date: NaiveDate,
    pub description: String,
    pub cost: f64,
    pub service_provider: Option<String>,
    pub odometer: Option<f64>,
}

impl Resource for Maintenance {
    fn collection_path() -> &'static str {
        "maintenance"
    }

    fn element_name() -> &'static str {
        "Maintenance record"
    }

    fn list_name() -> &'static str {
        "Maintenance"
    }

    fn lookups() -> &'static [LookupKind] {
        &[LookupKind::Vehicles]
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self, lookups: &Lookups) -> String {
        format!(
            "{} ({})",
            self.description,
            lookups.name_or_id(LookupKind::Vehicles, self.vehicle_id)
        )
    }

    fn search_fields(&self, lookups: &Lookups) -> Vec<String> {
        let mut fields = vec![
            self.description.clone(),
            lookups.name_or_id(LookupKind::Vehicles, self.vehicle_id),
        ];
        fields.extend(self.service_provider.clone());
        fields
    }
}

/// Body of POST/PUT `maintenance`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceDto {
    pub vehicle_id: RecordId,
    pub date: NaiveDate,
    pub description: String,
    pub cost: f64,
    pub service_provider: Option<String>,
    pub odometer: Option<f64>,
}
