use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{Lookups, RecordId, Resource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    Available,
    OnTrip,
    InMaintenance,
    Retired,
}

impl VehicleStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            VehicleStatus::Available => "Available",
            VehicleStatus::OnTrip => "On trip",
            VehicleStatus::InMaintenance => "In maintenance",
            VehicleStatus::Retired => "Retired",
        }
    }

    /// Wire value, also used as the `<select>` option value
    pub fn code(&self) -> &'static str {
        match self {
            VehicleStatus::Available => "available",
            VehicleStatus::OnTrip => "on_trip",
            VehicleStatus::InMaintenance => "in_maintenance",
            VehicleStatus::Retired => "retired",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }

    pub fn all() -> Vec<VehicleStatus> {
        vec![
            VehicleStatus::Available,
            VehicleStatus::OnTrip,
            VehicleStatus::InMaintenance,
            VehicleStatus::Retired,
        ]
    }
}

impl std::fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Транспортное средство
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: RecordId,
    /// Registration plate, unique per fleet
    pub vehicle_number: String,
    pub vehicle_type: String,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub capacity_tons: Option<f64>,
    pub insurance_expiry: Option<NaiveDate>,
    pub status: Option<VehicleStatus>,
}

impl Resource for Vehicle {
    fn collection_path() -> &'static str {
        "vehicles"
    }

    fn element_name() -> &'static str {
        "Vehicle"
    }

    fn list_name() -> &'static str {
        "Vehicles"
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self, _lookups: &Lookups) -> String {
        self.vehicle_number.clone()
    }

    fn search_fields(&self, _lookups: &Lookups) -> Vec<String> {
        let mut fields = vec![self.vehicle_number.clone(), self.vehicle_type.clone()];
        fields.extend(self.make.clone());
        fields.extend(self.model.clone());
        fields
    }
}

/// Body of POST/PUT `vehicles`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDto {
    pub vehicle_number: String,
    pub vehicle_type: String,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub capacity_tons: Option<f64>,
    pub insurance_expiry: Option<NaiveDate>,
    pub status: Option<VehicleStatus>,
}
