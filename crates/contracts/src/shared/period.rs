//! Month ("YYYY-MM") helpers used by filters, payroll and the dashboard.

use chrono::{Datelike, NaiveDate};

/// Parse "YYYY-MM" into (year, month)
pub fn parse_month(value: &str) -> Option<(i32, u32)> {
    let (year, month) = value.trim().split_once('-')?;
    if year.len() != 4 || month.len() != 2 {
        return None;
    }
    let year: i32 = year.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    if !(1..=12).contains(&month) {
        return None;
    }
    Some((year, month))
}

pub fn is_valid_month(value: &str) -> bool {
    parse_month(value).is_some()
}

/// "YYYY-MM" of a date
pub fn month_of(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Human label: "2024-05" -> "May 2024"
pub fn month_label(value: &str) -> String {
    match parse_month(value).and_then(|(y, m)| NaiveDate::from_ymd_opt(y, m, 1)) {
        Some(date) => date.format("%B %Y").to_string(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2024-05"), Some((2024, 5)));
        assert_eq!(parse_month("2024-13"), None);
        assert_eq!(parse_month("24-05"), None);
        assert_eq!(parse_month("2024-5"), None);
        assert_eq!(parse_month("may"), None);
    }

    #[test]
    fn test_month_of_and_label() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(month_of(date), "2024-03");
        assert_eq!(month_label("2024-03"), "March 2024");
        assert_eq!(month_label("garbage"), "garbage");
    }
}
