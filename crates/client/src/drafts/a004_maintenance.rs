use contracts::domain::a004_maintenance::aggregate::{Maintenance, MaintenanceDto};

use crate::form::validate::{format_date, input_value};
use crate::form::{FormMode, ResourceDraft, ValidationErrors, Validator};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaintenanceDraft {
    pub vehicle_id: String,
    pub date: String,
    pub description: String,
    pub cost: String,
    pub service_provider: String,
    pub odometer: String,
}

impl ResourceDraft for MaintenanceDraft {
    type Record = Maintenance;
    type Payload = MaintenanceDto;

    fn from_record(record: &Maintenance) -> Self {
        Self {
            vehicle_id: record.vehicle_id.to_string(),
            date: format_date(&record.date),
            description: record.description.clone(),
            cost: record.cost.to_string(),
            service_provider: input_value(&record.service_provider),
            odometer: input_value(&record.odometer),
        }
    }

    fn validate(&self, _mode: FormMode) -> Result<MaintenanceDto, ValidationErrors> {
        let mut v = Validator::new();
        let vehicle_id = v.required_id("vehicleId", "Vehicle", &self.vehicle_id);
        let date = v.required_date("date", "Date", &self.date);
        let description = v.required_text("description", "Description", &self.description);
        let cost = v.required_number("cost", "Cost", &self.cost, 0.0);
        let odometer = v.optional_number("odometer", "Odometer", &self.odometer, 0.0);
        v.finish(MaintenanceDto {
            vehicle_id,
            date,
            description,
            cost,
            service_provider: Validator::optional_text(&self.service_provider),
            odometer,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_cost_and_bad_date() {
        let draft = MaintenanceDraft {
            vehicle_id: "1".into(),
            date: "03/05/2024".into(),
            description: "Brake pads".into(),
            ..Default::default()
        };
        let errors = draft.validate(FormMode::Create).unwrap_err();
        assert_eq!(errors.get("cost"), Some("Cost is required"));
        assert_eq!(errors.get("date"), Some("Date must be a date (YYYY-MM-DD)"));
    }
}
