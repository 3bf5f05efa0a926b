use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{LookupKind, Lookups, RecordId, Resource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TireAction {
    Replaced,
    Rotated,
    Repaired,
    Inspected,
}

impl TireAction {
    pub fn display_name(&self) -> &'static str {
        match self {
            TireAction::Replaced => "Replaced",
            TireAction::Rotated => "Rotated",
            TireAction::Repaired => "Repaired",
            TireAction::Inspected => "Inspected",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            TireAction::Replaced => "replaced",
            TireAction::Rotated => "rotated",
            TireAction::Repaired => "repaired",
            TireAction::Inspected => "inspected",
        }
    }

    pub fn all() -> Vec<TireAction> {
        vec![
            TireAction::Replaced,
            TireAction::Rotated,
            TireAction::Repaired,
            TireAction::Inspected,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|a| a.code() == code)
    }
}

impl std::fmt::Display for TireAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Работа с шинами
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TireMaintenance {
    pub id: RecordId,
    pub vehicle_id: RecordId,
    pub date: NaiveDate,
    /// Free text such as "front-left" or "rear axle inner right"
    pub tire_position: String,
    pub action: TireAction,
    pub cost: f64,
    pub mileage: Option<f64>,
    pub notes: Option<String>,
}

impl Resource for TireMaintenance {
    fn collection_path() -> &'static str {
        "tire-maintenance"
    }

    fn element_name() -> &'static str {
        "Tire maintenance record"
    }

    fn list_name() -> &'static str {
        "Tire Maintenance"
    }

    fn export_stem() -> &'static str {
        "tire_maintenance"
    }

    fn lookups() -> &'static [LookupKind] {
        &[LookupKind::Vehicles]
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self, lookups: &Lookups) -> String {
        format!(
            "{} {} ({})",
            self.action,
            self.tire_position,
            lookups.name_or_id(LookupKind::Vehicles, self.vehicle_id)
        )
    }

    fn search_fields(&self, lookups: &Lookups) -> Vec<String> {
        vec![
            self.tire_position.clone(),
            self.action.display_name().to_string(),
            lookups.name_or_id(LookupKind::Vehicles, self.vehicle_id),
        ]
    }
}

/// Body of POST/PUT `tire-maintenance`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TireMaintenanceDto {
    pub vehicle_id: RecordId,
    pub date: NaiveDate,
    pub tire_position: String,
    pub action: TireAction,
    pub cost: f64,
    pub mileage: Option<f64>,
    pub notes: Option<String>,
}
