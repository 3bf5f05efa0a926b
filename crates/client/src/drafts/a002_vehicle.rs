use contracts::domain::a002_vehicle::aggregate::{Vehicle, VehicleDto, VehicleStatus};

use crate::form::validate::{format_date, input_value};
use crate::form::{FormMode, ResourceDraft, ValidationErrors, Validator};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VehicleDraft {
    pub vehicle_number: String,
    pub vehicle_type: String,
    pub make: String,
    pub model: String,
    pub year: String,
    pub capacity_tons: String,
    pub insurance_expiry: String,
    pub status: Option<VehicleStatus>,
}

impl ResourceDraft for VehicleDraft {
    type Record = Vehicle;
    type Payload = VehicleDto;

    fn from_record(record: &Vehicle) -> Self {
        Self {
            vehicle_number: record.vehicle_number.clone(),
            vehicle_type: record.vehicle_type.clone(),
            make: input_value(&record.make),
            model: input_value(&record.model),
            year: input_value(&record.year),
            capacity_tons: input_value(&record.capacity_tons),
            insurance_expiry: record.insurance_expiry.as_ref().map(format_date).unwrap_or_default(),
            status: record.status,
        }
    }

    fn validate(&self, _mode: FormMode) -> Result<VehicleDto, ValidationErrors> {
        let mut v = Validator::new();
        let vehicle_number = v
            .required_text("vehicleNumber", "Vehicle number", &self.vehicle_number)
            .to_uppercase();
        let vehicle_type = v.required_text("vehicleType", "Vehicle type", &self.vehicle_type);
        let year = v.optional_integer("year", "Year", &self.year);
        if let Some(year) = year {
            if !(1950..=2100).contains(&year) {
                v.error("year", "Year must be between 1950 and 2100");
            }
        }
        let capacity_tons = v.optional_number("capacityTons", "Capacity", &self.capacity_tons, 0.0);
        let insurance_expiry =
            v.optional_date("insuranceExpiry", "Insurance expiry", &self.insurance_expiry);
        v.finish(VehicleDto {
            vehicle_number,
            vehicle_type,
            make: Validator::optional_text(&self.make),
            model: Validator::optional_text(&self.model),
            year,
            capacity_tons,
            insurance_expiry,
            status: self.status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_optionals_become_null() {
        let draft = VehicleDraft {
            vehicle_number: "wp-ab-1234".into(),
            vehicle_type: "Lorry".into(),
            ..Default::default()
        };
        let dto = draft.validate(FormMode::Create).unwrap();
        assert_eq!(dto.vehicle_number, "WP-AB-1234");
        let json = serde_json::to_value(&dto).unwrap();
        assert!(json["capacityTons"].is_null());
        assert!(json["year"].is_null());
    }

    #[test]
    fn test_year_range() {
        let draft = VehicleDraft {
            vehicle_number: "X".into(),
            vehicle_type: "Van".into(),
            year: "1899".into(),
            ..Default::default()
        };
        let errors = draft.validate(FormMode::Create).unwrap_err();
        assert_eq!(errors.get("year"), Some("Year must be between 1950 and 2100"));
    }
}
