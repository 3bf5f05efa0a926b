use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{LookupKind, Lookups, RecordId, Resource};
use crate::shared::finance;

/// Заправка
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelRecord {
    pub id: RecordId,
    pub vehicle_id: RecordId,
    pub date: NaiveDate,
    /// Litres
    pub quantity: f64,
    pub cost: f64,
    pub odometer: Option<f64>,
    pub station: Option<String>,
}

impl FuelRecord {
    pub fn unit_price(&self) -> f64 {
        finance::unit_price(self.cost, self.quantity)
    }

    /// Price per litre with two decimals, "0.00" for zero quantity
    pub fn unit_price_display(&self) -> String {
        finance::format_unit_price(self.cost, self.quantity)
    }
}

impl Resource for FuelRecord {
    fn collection_path() -> &'static str {
        "fuel"
    }

    fn element_name() -> &'static str {
        "Fuel record"
    }

    fn list_name() -> &'static str {
        "Fuel"
    }

    fn lookups() -> &'static [LookupKind] {
        &[LookupKind::Vehicles]
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self, lookups: &Lookups) -> String {
        format!(
            "{} L on {} ({})",
            self.quantity,
            self.date,
            lookups.name_or_id(LookupKind::Vehicles, self.vehicle_id)
        )
    }

    fn search_fields(&self, lookups: &Lookups) -> Vec<String> {
        let mut fields = vec![lookups.name_or_id(LookupKind::Vehicles, self.vehicle_id)];
        fields.extend(self.station.clone());
        fields
    }
}

/// Body of POST/PUT `fuel`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelRecordDto {
    pub vehicle_id: RecordId,
    pub date: NaiveDate,
    pub quantity: f64,
    pub cost: f64,
    pub odometer: Option<f64>,
    pub station: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(quantity: f64, cost: f64) -> FuelRecord {
        FuelRecord {
            id: 1,
            vehicle_id: 2,
            date: NaiveDate::from_ymd_opt(2024, 5, 4).unwrap(),
            quantity,
            cost,
            odometer: None,
            station: None,
        }
    }

    #[test]
    fn test_unit_price_display() {
        assert_eq!(record(0.0, 3500.0).unit_price_display(), "0.00");
        assert_eq!(record(10.0, 3500.0).unit_price_display(), "350.00");
        assert_eq!(record(10.0, 3500.0).unit_price(), 350.0);
    }
}
