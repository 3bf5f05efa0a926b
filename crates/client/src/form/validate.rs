//! Parsing raw input strings into payload fields.
//!
//! Every method records an error under `field` when the input is unusable
//! and hands back a placeholder, so one pass collects all messages.
//! `finish` then decides whether the payload may be built.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use contracts::domain::common::RecordId;
use contracts::shared::period;

use super::ValidationErrors;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Default)]
pub struct Validator {
    errors: ValidationErrors,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: &str, message: impl Into<String>) {
        self.errors.add(field, message);
    }

    /// `Ok(payload)` when no field failed
    pub fn finish<P>(self, payload: P) -> Result<P, ValidationErrors> {
        if self.errors.is_empty() {
            Ok(payload)
        } else {
            Err(self.errors)
        }
    }

    // ============================================================================
    // Text
    // ============================================================================

    pub fn required_text(&mut self, field: &str, label: &str, value: &str) -> String {
        let value = value.trim();
        if value.is_empty() {
            self.error(field, format!("{} is required", label));
        }
        value.to_string()
    }

    /// Blank -> `None`
    pub fn optional_text(value: &str) -> Option<String> {
        let value = value.trim();
        (!value.is_empty()).then(|| value.to_string())
    }

    /// National identity card: 9 digits + V/X, or 12 digits
    pub fn nic(&mut self, field: &str, value: &str) -> String {
        let value = self.required_text(field, "NIC number", value);
        if !value.is_empty() && !is_valid_nic(&value) {
            self.error(field, "NIC must be 9 digits followed by V or X, or 12 digits");
        }
        value.to_uppercase()
    }

    pub fn email(&mut self, field: &str, value: &str) -> String {
        let value = self.required_text(field, "Email", value);
        if !value.is_empty() && !is_valid_email(&value) {
            self.error(field, "Enter a valid email address");
        }
        value
    }

    pub fn password(&mut self, field: &str, value: &str) -> String {
        if value.chars().count() < MIN_PASSWORD_LEN {
            self.error(
                field,
                format!("Password must be at least {} characters", MIN_PASSWORD_LEN),
            );
        }
        value.to_string()
    }

    // ============================================================================
    // Numbers
    // ============================================================================

    pub fn required_number(&mut self, field: &str, label: &str, value: &str, min: f64) -> f64 {
        if value.trim().is_empty() {
            self.error(field, format!("{} is required", label));
            return 0.0;
        }
        self.optional_number(field, label, value, min).unwrap_or(0.0)
    }

    /// Blank -> `None`, which goes out as JSON `null`
    pub fn optional_number(
        &mut self,
        field: &str,
        label: &str,
        value: &str,
        min: f64,
    ) -> Option<f64> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        match value.parse::<f64>() {
            Ok(n) if !n.is_finite() => {
                self.error(field, format!("{} must be a number", label));
                None
            }
            Ok(n) if n < min => {
                self.error(field, format!("{} must be at least {}", label, min));
                None
            }
            Ok(n) => Some(n),
            Err(_) => {
                self.error(field, format!("{} must be a number", label));
                None
            }
        }
    }

    pub fn optional_integer(&mut self, field: &str, label: &str, value: &str) -> Option<i32> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        match value.parse::<i32>() {
            Ok(n) => Some(n),
            Err(_) => {
                self.error(field, format!("{} must be a whole number", label));
                None
            }
        }
    }

    /// Id picked from a lookup select
    pub fn required_id(&mut self, field: &str, label: &str, value: &str) -> RecordId {
        match value.trim().parse::<RecordId>() {
            Ok(id) if id > 0 => id,
            _ => {
                self.error(field, format!("Select a {}", label.to_lowercase()));
                0
            }
        }
    }

    pub fn optional_id(&mut self, field: &str, label: &str, value: &str) -> Option<RecordId> {
        if value.trim().is_empty() {
            return None;
        }
        Some(self.required_id(field, label, value))
    }

    // ============================================================================
    // Dates
    // ============================================================================

    pub fn required_date(&mut self, field: &str, label: &str, value: &str) -> NaiveDate {
        if value.trim().is_empty() {
            self.error(field, format!("{} is required", label));
            return NaiveDate::MIN;
        }
        self.optional_date(field, label, value)
            .unwrap_or(NaiveDate::MIN)
    }

    pub fn optional_date(&mut self, field: &str, label: &str, value: &str) -> Option<NaiveDate> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        match NaiveDate::parse_from_str(value, DATE_FORMAT) {
            Ok(date) => Some(date),
            Err(_) => {
                self.error(field, format!("{} must be a date (YYYY-MM-DD)", label));
                None
            }
        }
    }

    /// "HH:MM" or "HH:MM:SS" as produced by `<input type="time">`
    pub fn optional_time(&mut self, field: &str, label: &str, value: &str) -> Option<NaiveTime> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        match parse_time(value) {
            Some(time) => Some(time),
            None => {
                self.error(field, format!("{} must be a time (HH:MM)", label));
                None
            }
        }
    }

    /// Compose separate date and time inputs into one timestamp
    pub fn required_date_time(
        &mut self,
        field: &str,
        label: &str,
        date: &str,
        time: &str,
    ) -> NaiveDateTime {
        if date.trim().is_empty() || time.trim().is_empty() {
            self.error(field, format!("{} date and time are required", label));
            return NaiveDateTime::MIN;
        }
        self.optional_date_time(field, label, date, time)
            .unwrap_or(NaiveDateTime::MIN)
    }

    /// Both blank -> `None`; one of the two blank is an error
    pub fn optional_date_time(
        &mut self,
        field: &str,
        label: &str,
        date: &str,
        time: &str,
    ) -> Option<NaiveDateTime> {
        match (date.trim().is_empty(), time.trim().is_empty()) {
            (true, true) => None,
            (false, false) => {
                let date = self.optional_date(field, label, date)?;
                let time = self.optional_time(field, label, time)?;
                Some(date.and_time(time))
            }
            _ => {
                self.error(field, format!("Enter both {} date and time", label.to_lowercase()));
                None
            }
        }
    }

    /// Payroll period "YYYY-MM"
    pub fn month(&mut self, field: &str, value: &str) -> String {
        let value = value.trim();
        if value.is_empty() {
            self.error(field, "Month is required");
        } else if !period::is_valid_month(value) {
            self.error(field, "Month must be in YYYY-MM format");
        }
        value.to_string()
    }
}

pub fn is_valid_nic(value: &str) -> bool {
    let value = value.trim();
    let bytes = value.as_bytes();
    match bytes.len() {
        10 => {
            bytes[..9].iter().all(u8::is_ascii_digit)
                && matches!(bytes[9], b'V' | b'v' | b'X' | b'x')
        }
        12 => bytes.iter().all(u8::is_ascii_digit),
        _ => false,
    }
}

pub fn is_valid_email(value: &str) -> bool {
    match value.trim().split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .map(|(host, tld)| !host.is_empty() && !tld.is_empty())
                    .unwrap_or(false)
        }
        None => false,
    }
}

pub fn parse_time(value: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}

/// Value for an `<input type="date">`
pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Value for an `<input type="time">`
pub fn format_time(time: &NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Blank for `None`, plain `Display` otherwise
pub fn input_value<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(ToString::to_string).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nic_formats() {
        assert!(is_valid_nic("912345678V"));
        assert!(is_valid_nic("912345678x"));
        assert!(is_valid_nic("199123456789"));
        assert!(!is_valid_nic("91234567V"));
        assert!(!is_valid_nic("91234567AV"));
        assert!(!is_valid_nic("1991234567890"));
    }

    #[test]
    fn test_email() {
        assert!(is_valid_email("ops@fleet.lk"));
        assert!(!is_valid_email("ops@fleet"));
        assert!(!is_valid_email("@fleet.lk"));
        assert!(!is_valid_email("a@b@c.lk"));
    }

    #[test]
    fn test_numbers() {
        let mut v = Validator::new();
        assert_eq!(v.optional_number("odometer", "Odometer", "  ", 0.0), None);
        assert_eq!(v.optional_number("odometer", "Odometer", "1200.5", 0.0), Some(1200.5));
        assert_eq!(v.required_number("cost", "Cost", "abc", 0.0), 0.0);
        assert_eq!(v.required_number("quantity", "Quantity", "-1", 0.0), 0.0);
        let errors = v.finish(()).unwrap_err();
        assert_eq!(errors.get("cost"), Some("Cost must be a number"));
        assert_eq!(errors.get("quantity"), Some("Quantity must be at least 0"));
    }

    #[test]
    fn test_date_time_composition() {
        let mut v = Validator::new();
        let departure = v.required_date_time("departureTime", "Departure", "2024-05-03", "07:30");
        assert_eq!(
            departure,
            NaiveDate::from_ymd_opt(2024, 5, 3)
                .unwrap()
                .and_hms_opt(7, 30, 0)
                .unwrap()
        );
        assert_eq!(v.optional_date_time("arrivalTime", "Arrival", "", ""), None);
        assert!(v.finish(()).is_ok());

        let mut v = Validator::new();
        v.optional_date_time("arrivalTime", "Arrival", "2024-05-03", "");
        let errors = v.finish(()).unwrap_err();
        assert_eq!(errors.get("arrivalTime"), Some("Enter both arrival date and time"));
    }

    #[test]
    fn test_month_and_required_id() {
        let mut v = Validator::new();
        v.month("month", "2024-13");
        v.required_id("vehicleId", "Vehicle", "");
        let errors = v.finish(()).unwrap_err();
        assert_eq!(errors.get("month"), Some("Month must be in YYYY-MM format"));
        assert_eq!(errors.get("vehicleId"), Some("Select a vehicle"));
    }
}
