use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Well-known filter parameter names accepted by list endpoints
pub mod keys {
    pub const RECIPIENT_TYPE: &str = "recipientType";
    pub const RECIPIENT_ID: &str = "recipientId";
    pub const MONTH: &str = "month";
    pub const VEHICLE_ID: &str = "vehicleId";
    pub const DRIVER_ID: &str = "driverId";
    pub const STATUS: &str = "status";
    pub const ROLE: &str = "role";
}

/// Server-side filter criteria: field name → value.
///
/// Sent as query parameters on every list and export request. Keys are
/// kept sorted so query strings and export file names are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListFilter(BTreeMap<String, String>);

impl ListFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of `set`
    pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Set a criterion; a blank value removes it
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            self.0.remove(key);
        } else {
            self.0.insert(key.to_string(), trimmed.to_string());
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn remove(&mut self, key: &str) {
        self.0.remove(key);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Values in key order
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.0.values().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_values_clear_the_criterion() {
        let mut filter = ListFilter::new()
            .with(keys::MONTH, "2024-05")
            .with(keys::RECIPIENT_TYPE, "driver");
        assert_eq!(filter.get(keys::MONTH), Some("2024-05"));

        filter.set(keys::MONTH, "   ");
        assert_eq!(filter.get(keys::MONTH), None);
        assert!(!filter.is_empty());

        filter.remove(keys::RECIPIENT_TYPE);
        assert!(filter.is_empty());
    }

    #[test]
    fn test_values_are_key_ordered() {
        let filter = ListFilter::new()
            .with(keys::RECIPIENT_TYPE, "driver")
            .with(keys::MONTH, "2024-05")
            .with(keys::RECIPIENT_ID, "12");
        let values: Vec<&str> = filter.values().collect();
        assert_eq!(values, vec!["2024-05", "12", "driver"]);
    }
}
