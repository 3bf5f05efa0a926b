use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::domain::common::{LookupKind, Lookups, RecordId, Resource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Leave,
}

impl AttendanceStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::Leave => "Leave",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
            AttendanceStatus::Leave => "leave",
        }
    }

    pub fn all() -> Vec<AttendanceStatus> {
        vec![
            AttendanceStatus::Present,
            AttendanceStatus::Absent,
            AttendanceStatus::Leave,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|s| s.code() == code)
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Отметка посещаемости водителя за день
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    pub id: RecordId,
    pub driver_id: RecordId,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub check_in: Option<NaiveTime>,
    pub check_out: Option<NaiveTime>,
    pub notes: Option<String>,
}

impl Attendance {
    /// Hours between check-in and check-out, when both are recorded
    pub fn hours_worked(&self) -> Option<f64> {
        let (check_in, check_out) = (self.check_in?, self.check_out?);
        let minutes = (check_out - check_in).num_minutes();
        (minutes >= 0).then(|| minutes as f64 / 60.0)
    }
}

impl Resource for Attendance {
    fn collection_path() -> &'static str {
        "attendance"
    }

    fn element_name() -> &'static str {
        "Attendance record"
    }

    fn list_name() -> &'static str {
        "Attendance"
    }

    fn lookups() -> &'static [LookupKind] {
        &[LookupKind::Drivers]
    }

    fn id(&self) -> RecordId {
        self.id
    }

    fn display_name(&self, lookups: &Lookups) -> String {
        format!(
            "{} on {}",
            lookups.name_or_id(LookupKind::Drivers, self.driver_id),
            self.date
        )
    }

    fn search_fields(&self, lookups: &Lookups) -> Vec<String> {
        vec![
            lookups.name_or_id(LookupKind::Drivers, self.driver_id),
            self.status.display_name().to_string(),
        ]
    }
}

/// Body of POST/PUT `attendance`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceDto {
    pub driver_id: RecordId,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub check_in: Option<NaiveTime>,
    pub check_out: Option<NaiveTime>,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hours_worked() {
        let record: Attendance = serde_json::from_str(
            r#"{"id":1,"driverId":2,"date":"2024-05-06","status":"present",
                "checkIn":"08:00:00","checkOut":"17:30:00"}"#,
        )
        .unwrap();
        assert_eq!(record.hours_worked(), Some(9.5));

        let absent = Attendance {
            status: AttendanceStatus::Absent,
            check_in: None,
            check_out: None,
            ..record
        };
        assert_eq!(absent.hours_worked(), None);
    }
}
