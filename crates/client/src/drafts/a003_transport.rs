use contracts::domain::a003_transport::aggregate::{Transport, TransportDto};

use crate::form::validate::{format_date, format_time, input_value};
use crate::form::{FormMode, ResourceDraft, ValidationErrors, Validator};

/// Departure and arrival are edited as separate date and time inputs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransportDraft {
    pub vehicle_id: String,
    pub driver_id: String,
    pub origin: String,
    pub destination: String,
    pub departure_date: String,
    pub departure_time: String,
    pub arrival_date: String,
    pub arrival_time: String,
    pub distance_km: String,
    pub income: String,
    pub description: String,
}

impl ResourceDraft for TransportDraft {
    type Record = Transport;
    type Payload = TransportDto;

    fn from_record(record: &Transport) -> Self {
        let (arrival_date, arrival_time) = record
            .arrival_time
            .map(|at| (format_date(&at.date()), format_time(&at.time())))
            .unwrap_or_default();
        Self {
            vehicle_id: record.vehicle_id.to_string(),
            driver_id: record.driver_id.to_string(),
            origin: record.origin.clone(),
            destination: record.destination.clone(),
            departure_date: format_date(&record.departure_time.date()),
            departure_time: format_time(&record.departure_time.time()),
            arrival_date,
            arrival_time,
            distance_km: input_value(&record.distance_km),
            income: record.income.to_string(),
            description: input_value(&record.description),
        }
    }

    fn validate(&self, _mode: FormMode) -> Result<TransportDto, ValidationErrors> {
        let mut v = Validator::new();
        let vehicle_id = v.required_id("vehicleId", "Vehicle", &self.vehicle_id);
        let driver_id = v.required_id("driverId", "Driver", &self.driver_id);
        let origin = v.required_text("origin", "Origin", &self.origin);
        let destination = v.required_text("destination", "Destination", &self.destination);
        let departure_time = v.required_date_time(
            "departureTime",
            "Departure",
            &self.departure_date,
            &self.departure_time,
        );
        let arrival_time =
            v.optional_date_time("arrivalTime", "Arrival", &self.arrival_date, &self.arrival_time);
        if let Some(arrival) = arrival_time {
            if arrival < departure_time {
                v.error("arrivalTime", "Arrival cannot be before departure");
            }
        }
        let distance_km = v.optional_number("distanceKm", "Distance", &self.distance_km, 0.0);
        let income = v.required_number("income", "Income", &self.income, 0.0);
        v.finish(TransportDto {
            vehicle_id,
            driver_id,
            origin,
            destination,
            departure_time,
            arrival_time,
            distance_km,
            income,
            description: Validator::optional_text(&self.description),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> TransportDraft {
        TransportDraft {
            vehicle_id: "2".into(),
            driver_id: "7".into(),
            origin: "Colombo".into(),
            destination: "Kandy".into(),
            departure_date: "2024-05-03".into(),
            departure_time: "07:30".into(),
            income: "45000".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_payload_composes_iso_timestamps() {
        let dto = draft().validate(FormMode::Create).unwrap();
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["departureTime"], "2024-05-03T07:30:00");
        assert!(json["arrivalTime"].is_null());
        assert!(json["distanceKm"].is_null());
        assert_eq!(json["vehicleId"], 2);
    }

    #[test]
    fn test_arrival_before_departure_rejected() {
        let mut d = draft();
        d.arrival_date = "2024-05-02".into();
        d.arrival_time = "23:00".into();
        let errors = d.validate(FormMode::Create).unwrap_err();
        assert_eq!(errors.get("arrivalTime"), Some("Arrival cannot be before departure"));
    }

    #[test]
    fn test_edit_splits_timestamps() {
        let transport: Transport = serde_json::from_str(
            r#"{"id":1,"vehicleId":2,"driverId":7,"origin":"Colombo","destination":"Kandy",
                "departureTime":"2024-05-03T07:30:00","arrivalTime":"2024-05-03T11:05:00",
                "income":45000}"#,
        )
        .unwrap();
        let d = TransportDraft::from_record(&transport);
        assert_eq!(d.departure_date, "2024-05-03");
        assert_eq!(d.arrival_time, "11:05");
        assert_eq!(d.distance_km, "");
    }
}
