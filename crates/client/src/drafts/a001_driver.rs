use contracts::domain::a001_driver::aggregate::{Driver, DriverDto, DriverStatus};

use crate::form::validate::{format_date, input_value};
use crate::form::{FormMode, ResourceDraft, ValidationErrors, Validator};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DriverDraft {
    pub name: String,
    pub license_number: String,
    pub nic_no: String,
    pub phone: String,
    pub address: String,
    pub license_expiry: String,
    /// Filled by the image upload, never typed
    pub profile_image: Option<String>,
    pub status: Option<DriverStatus>,
}

impl ResourceDraft for DriverDraft {
    type Record = Driver;
    type Payload = DriverDto;

    fn from_record(record: &Driver) -> Self {
        Self {
            name: record.name.clone(),
            license_number: record.license_number.clone(),
            nic_no: record.nic_no.clone(),
            phone: input_value(&record.phone),
            address: input_value(&record.address),
            license_expiry: record.license_expiry.as_ref().map(format_date).unwrap_or_default(),
            profile_image: record.profile_image.clone(),
            status: record.status,
        }
    }

    fn validate(&self, _mode: FormMode) -> Result<DriverDto, ValidationErrors> {
        let mut v = Validator::new();
        let name = v.required_text("name", "Name", &self.name);
        let license_number = v.required_text("licenseNumber", "License number", &self.license_number);
        let nic_no = v.nic("nicNo", &self.nic_no);
        let license_expiry = v.optional_date("licenseExpiry", "License expiry", &self.license_expiry);
        v.finish(DriverDto {
            name,
            license_number,
            nic_no,
            phone: Validator::optional_text(&self.phone),
            address: Validator::optional_text(&self.address),
            license_expiry,
            profile_image: self.profile_image.clone(),
            status: self.status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_fields_and_nic() {
        let draft = DriverDraft {
            nic_no: "12345".into(),
            ..Default::default()
        };
        let errors = draft.validate(FormMode::Create).unwrap_err();
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert_eq!(errors.get("licenseNumber"), Some("License number is required"));
        assert!(errors.get("nicNo").is_some());
        assert!(errors.get("phone").is_none());
    }

    #[test]
    fn test_round_trip_through_record() {
        let driver: Driver = serde_json::from_str(
            r#"{"id":3,"name":"J. Silva","licenseNumber":"B1234","nicNo":"912345678v",
                "phone":"0771234567","licenseExpiry":"2026-01-31","status":"on_leave"}"#,
        )
        .unwrap();
        let draft = DriverDraft::from_record(&driver);
        assert_eq!(draft.license_expiry, "2026-01-31");
        assert_eq!(draft.address, "");

        let dto = draft.validate(FormMode::Edit(3)).unwrap();
        assert_eq!(dto.nic_no, "912345678V");
        assert_eq!(dto.phone.as_deref(), Some("0771234567"));
        assert_eq!(dto.address, None);
        assert_eq!(dto.status, Some(DriverStatus::OnLeave));
    }
}
