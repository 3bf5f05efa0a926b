use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::{Lookups, RecordId, Resource};

// ============================================================================
// Enums
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriverStatus {
    Active,
    OnLeave,
    Inactive,
}

impl DriverStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            DriverStatus::Active => "Active",
            DriverStatus::OnLeave => "On leave",
            DriverStatus::Inactive => "Inactive",
        }
    }

    /// Wire value, also used as the `<select>` option value
    pub fn code(&self) -> &'static str {
        match self {
            DriverStatus::Active => "active",
            DriverStatus::OnLeave => "on_leave",
            DriverStatus::Inactive => "inactive",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }

    pub fn all() -> Vec<DriverStatus> {
        vec![DriverStatus::Active, DriverStatus::OnLeave, DriverStatus::Inactive]
    }
}

impl std::fmt::Display for DriverStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

// ============================================================================
// Record
// ============================================================================

/// Водитель
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub id: RecordId,
    pub name: String,
    pub license_number: String,
    pub nic_no: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub license_expiry: Option<NaiveDate>,
    /// URL returned by the image host
    pub profile_image: Option<String>,
    pub status: Option<DriverStatus>,
}

impl Driver {
    /// True once the licence expiry date is in the past
    pub fn is_license_expired(&self, today: NaiveDate) -> bool {
        self.license_expiry.map(|d| d < today).unwrap_or(false)
    }
}

impl Resource for Driver {
    fn collection_path() -> &'static str {
        "drivers"
    }

    fn element_name() -> &'static str {
        "Driver"
    }

    fn list_name() -> &'static str {
        "Drivers"
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self, _lookups: &Lookups) -> String {
        self.name.clone()
    }

    fn search_fields(&self, _lookups: &Lookups) -> Vec<String> {
        let mut fields = vec![
            self.name.clone(),
            self.license_number.clone(),
            self.nic_no.clone(),
        ];
        fields.extend(self.phone.clone());
        fields
    }
}

// ============================================================================
// Payload
// ============================================================================

/// Body of POST/PUT `drivers`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverDto {
    pub name: String,
    pub license_number: String,
    pub nic_no: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub license_expiry: Option<NaiveDate>,
    pub profile_image: Option<String>,
    pub status: Option<DriverStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_missing_optionals() {
        let json = r#"{"id":7,"name":"J. Silva","licenseNumber":"B1234","nicNo":"912345678V"}"#;
        let driver: Driver = serde_json::from_str(json).unwrap();
        assert_eq!(driver.id, 7);
        assert_eq!(driver.license_number, "B1234");
        assert_eq!(driver.phone, None);
        assert_eq!(driver.status, None);
    }

    #[test]
    fn test_blank_optionals_serialize_as_null() {
        let dto = DriverDto {
            name: "J. Silva".into(),
            license_number: "B1234".into(),
            nic_no: "912345678V".into(),
            phone: None,
            address: None,
            license_expiry: None,
            profile_image: None,
            status: None,
        };
        let value = serde_json::to_value(&dto).unwrap();
        assert!(value.get("phone").unwrap().is_null());
        assert_eq!(value["nicNo"], "912345678V");
    }

    #[test]
    fn test_search_covers_licence_and_nic() {
        let driver = Driver {
            id: 1,
            name: "J. Silva".into(),
            license_number: "B1234".into(),
            nic_no: "912345678V".into(),
            phone: None,
            address: None,
            license_expiry: NaiveDate::from_ymd_opt(2024, 1, 31),
            profile_image: None,
            status: Some(DriverStatus::Active),
        };
        let lookups = Lookups::new();
        assert!(driver.matches_search("b12", &lookups));
        assert!(driver.matches_search("678v", &lookups));
        assert!(!driver.matches_search("perera", &lookups));
        assert!(driver.is_license_expired(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()));
    }
}
