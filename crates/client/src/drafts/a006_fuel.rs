use contracts::domain::a006_fuel::aggregate::{FuelRecord, FuelRecordDto};
use contracts::shared::finance;

use crate::form::validate::{format_date, input_value};
use crate::form::{FormMode, ResourceDraft, ValidationErrors, Validator};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FuelDraft {
    pub vehicle_id: String,
    pub date: String,
    pub quantity: String,
    pub cost: String,
    pub odometer: String,
    pub station: String,
}

impl FuelDraft {
    /// Live unit price preview while typing
    pub fn unit_price_preview(&self) -> String {
        let quantity = self.quantity.trim().parse::<f64>().unwrap_or(0.0);
        let cost = self.cost.trim().parse::<f64>().unwrap_or(0.0);
        finance::format_unit_price(cost, quantity)
    }
}

impl ResourceDraft for FuelDraft {
    type Record = FuelRecord;
    type Payload = FuelRecordDto;

    fn from_record(record: &FuelRecord) -> Self {
        Self {
            vehicle_id: record.vehicle_id.to_string(),
            date: format_date(&record.date),
            quantity: record.quantity.to_string(),
            cost: record.cost.to_string(),
            odometer: input_value(&record.odometer),
            station: input_value(&record.station),
        }
    }

    fn validate(&self, _mode: FormMode) -> Result<FuelRecordDto, ValidationErrors> {
        let mut v = Validator::new();
        let vehicle_id = v.required_id("vehicleId", "Vehicle", &self.vehicle_id);
        let date = v.required_date("date", "Date", &self.date);
        let quantity = v.required_number("quantity", "Quantity", &self.quantity, 0.0);
        let cost = v.required_number("cost", "Cost", &self.cost, 0.0);
        let odometer = v.optional_number("odometer", "Odometer", &self.odometer, 0.0);
        v.finish(FuelRecordDto {
            vehicle_id,
            date,
            quantity,
            cost,
            odometer,
            station: Validator::optional_text(&self.station),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_price_preview() {
        let mut draft = FuelDraft {
            quantity: "10".into(),
            cost: "3500".into(),
            ..Default::default()
        };
        assert_eq!(draft.unit_price_preview(), "350.00");
        draft.quantity = "0".into();
        assert_eq!(draft.unit_price_preview(), "0.00");
        draft.quantity = "".into();
        assert_eq!(draft.unit_price_preview(), "0.00");
    }

    #[test]
    fn test_negative_quantity_rejected() {
        let draft = FuelDraft {
            vehicle_id: "1".into(),
            date: "2024-05-01".into(),
            quantity: "-5".into(),
            cost: "100".into(),
            ..Default::default()
        };
        let errors = draft.validate(FormMode::Create).unwrap_err();
        assert_eq!(errors.get("quantity"), Some("Quantity must be at least 0"));
    }
}
