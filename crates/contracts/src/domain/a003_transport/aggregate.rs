use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::common::{LookupKind, Lookups, RecordId, Resource};
use crate::shared::period::month_of;

/// Рейс машины с водителем
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transport {
    pub id: RecordId,
    pub vehicle_id: RecordId,
    pub driver_id: RecordId,
    pub origin: String,
    pub destination: String,
    pub departure_time: NaiveDateTime,
    pub arrival_time: Option<NaiveDateTime>,
    pub distance_km: Option<f64>,
    pub income: f64,
    pub description: Option<String>,
}

impl Transport {
    /// "YYYY-MM" of the departure
    pub fn month(&self) -> String {
        month_of(self.departure_time.date())
    }

    /// Trip length in hours, when the arrival is known and after departure
    pub fn duration_hours(&self) -> Option<f64> {
        let arrival = self.arrival_time?;
        let minutes = (arrival - self.departure_time).num_minutes();
        (minutes >= 0).then(|| minutes as f64 / 60.0)
    }
}

impl Resource for Transport {
    fn collection_path() -> &'static str {
        "transports"
    }

    fn element_name() -> &'static str {
        "Transport"
    }

    fn list_name() -> &'static str {
        "Transports"
    }

    fn lookups() -> &'static [LookupKind] {
        &[LookupKind::Vehicles, LookupKind::Drivers]
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self, _lookups: &Lookups) -> String {
        format!("{} -> {}", self.origin, self.destination)
    }

    fn search_fields(&self, lookups: &Lookups) -> Vec<String> {
        vec![
            self.origin.clone(),
            self.destination.clone(),
            lookups.name_or_id(LookupKind::Vehicles, self.vehicle_id),
            lookups.name_or_id(LookupKind::Drivers, self.driver_id),
        ]
    }
}

/// Body of POST/PUT `transports`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportDto {
    pub vehicle_id: RecordId,
    pub driver_id: RecordId,
    pub origin: String,
    pub destination: String,
    pub departure_time: NaiveDateTime,
    pub arrival_time: Option<NaiveDateTime>,
    pub distance_km: Option<f64>,
    pub income: f64,
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Transport {
        serde_json::from_str(
            r#"{"id":3,"vehicleId":5,"driverId":1,"origin":"Colombo","destination":"Kandy",
                "departureTime":"2024-05-02T06:30:00","arrivalTime":"2024-05-02T10:00:00",
                "income":18000.0}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_month_and_duration() {
        let trip = sample();
        assert_eq!(trip.month(), "2024-05");
        assert_eq!(trip.duration_hours(), Some(3.5));
        assert_eq!(trip.distance_km, None);
    }

    #[test]
    fn test_search_uses_resolved_names() {
        let trip = sample();
        let mut lookups = Lookups::new();
        lookups.insert(LookupKind::Drivers, vec![(1, "J. Silva".to_string())]);
        lookups.insert(LookupKind::Vehicles, vec![(5, "WP-KA-9090".to_string())]);

        assert!(trip.matches_search("silva", &lookups));
        assert!(trip.matches_search("ka-90", &lookups));
        assert!(trip.matches_search("kandy", &lookups));
        assert!(!trip.matches_search("galle", &lookups));
    }
}
