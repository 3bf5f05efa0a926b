/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application
use chrono::{NaiveDate, NaiveDateTime};
use contracts::domain::common::NOT_AVAILABLE;
use contracts::shared::period::month_of;

/// Example: 2024-03-15 -> "15 Mar 2024"
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%d %b %Y").to_string()
}

/// Example: 2024-03-15T14:02:26 -> "15 Mar 2024 14:02"
pub fn format_datetime(datetime: &NaiveDateTime) -> String {
    datetime.format("%d %b %Y %H:%M").to_string()
}

pub fn format_opt_date(date: &Option<NaiveDate>) -> String {
    date.as_ref()
        .map(format_date)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

pub fn format_opt_datetime(datetime: &Option<NaiveDateTime>) -> String {
    datetime
        .as_ref()
        .map(format_datetime)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Today's date in the browser's timezone
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_default()
}

/// "YYYY-MM" of today
pub fn current_month() -> String {
    month_of(today())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(format_date(&date), "15 Mar 2024");
        assert_eq!(format_opt_date(&None), "N/A");
    }

    #[test]
    fn test_format_datetime() {
        let dt = NaiveDate::from_ymd_opt(2024, 12, 31)
            .unwrap()
            .and_hms_opt(23, 59, 59)
            .unwrap();
        assert_eq!(format_datetime(&dt), "31 Dec 2024 23:59");
    }
}
