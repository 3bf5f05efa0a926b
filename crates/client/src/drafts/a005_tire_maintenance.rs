use contracts::domain::a005_tire_maintenance::aggregate::{
    TireAction, TireMaintenance, TireMaintenanceDto,
};

use crate::form::validate::{format_date, input_value};
use crate::form::{FormMode, ResourceDraft, ValidationErrors, Validator};

#[derive(Debug, Clone, PartialEq)]
pub struct TireMaintenanceDraft {
    pub vehicle_id: String,
    pub date: String,
    pub tire_position: String,
    pub action: TireAction,
    pub cost: String,
    pub mileage: String,
    pub notes: String,
}

impl Default for TireMaintenanceDraft {
    fn default() -> Self {
        Self {
            vehicle_id: String::new(),
            date: String::new(),
            tire_position: String::new(),
            action: TireAction::Replaced,
            cost: String::new(),
            mileage: String::new(),
            notes: String::new(),
        }
    }
}

impl ResourceDraft for TireMaintenanceDraft {
    type Record = TireMaintenance;
    type Payload = TireMaintenanceDto;

    fn from_record(record: &TireMaintenance) -> Self {
        Self {
            vehicle_id: record.vehicle_id.to_string(),
            date: format_date(&record.date),
            tire_position: record.tire_position.clone(),
            action: record.action,
            cost: record.cost.to_string(),
            mileage: input_value(&record.mileage),
            notes: input_value(&record.notes),
        }
    }

    fn validate(&self, _mode: FormMode) -> Result<TireMaintenanceDto, ValidationErrors> {
        let mut v = Validator::new();
        let vehicle_id = v.required_id("vehicleId", "Vehicle", &self.vehicle_id);
        let date = v.required_date("date", "Date", &self.date);
        let tire_position = v.required_text("tirePosition", "Tire position", &self.tire_position);
        let cost = v.required_number("cost", "Cost", &self.cost, 0.0);
        let mileage = v.optional_number("mileage", "Mileage", &self.mileage, 0.0);
        v.finish(TireMaintenanceDto {
            vehicle_id,
            date,
            tire_position,
            action: self.action,
            cost,
            mileage,
            notes: Validator::optional_text(&self.notes),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_serialized_by_code() {
        let draft = TireMaintenanceDraft {
            vehicle_id: "4".into(),
            date: "2024-05-20".into(),
            tire_position: "front-left".into(),
            action: TireAction::Rotated,
            cost: "0".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(draft.validate(FormMode::Create).unwrap()).unwrap();
        assert_eq!(json["action"], "rotated");
        assert!(json["mileage"].is_null());
    }
}
