use contracts::domain::a010_attendance::aggregate::{Attendance, AttendanceDto, AttendanceStatus};

use crate::form::validate::{format_date, format_time, input_value};
use crate::form::{FormMode, ResourceDraft, ValidationErrors, Validator};

#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceDraft {
    pub driver_id: String,
    pub date: String,
    pub status: AttendanceStatus,
    pub check_in: String,
    pub check_out: String,
    pub notes: String,
}

impl Default for AttendanceDraft {
    fn default() -> Self {
        Self {
            driver_id: String::new(),
            date: String::new(),
            status: AttendanceStatus::Present,
            check_in: String::new(),
            check_out: String::new(),
            notes: String::new(),
        }
    }
}

impl ResourceDraft for AttendanceDraft {
    type Record = Attendance;
    type Payload = AttendanceDto;

    const LOCKED_ON_EDIT: &'static [&'static str] = &["driverId", "date"];

    fn from_record(record: &Attendance) -> Self {
        Self {
            driver_id: record.driver_id.to_string(),
            date: format_date(&record.date),
            status: record.status,
            check_in: record.check_in.as_ref().map(format_time).unwrap_or_default(),
            check_out: record.check_out.as_ref().map(format_time).unwrap_or_default(),
            notes: input_value(&record.notes),
        }
    }

    fn validate(&self, _mode: FormMode) -> Result<AttendanceDto, ValidationErrors> {
        let mut v = Validator::new();
        let driver_id = v.required_id("driverId", "Driver", &self.driver_id);
        let date = v.required_date("date", "Date", &self.date);
        let (check_in, check_out) = if self.status == AttendanceStatus::Present {
            let check_in = v.optional_time("checkIn", "Check-in", &self.check_in);
            let check_out = v.optional_time("checkOut", "Check-out", &self.check_out);
            if let (Some(i), Some(o)) = (check_in, check_out) {
                if o < i {
                    v.error("checkOut", "Check-out cannot be before check-in");
                }
            }
            (check_in, check_out)
        } else {
            // Absent and leave days carry no times
            (None, None)
        };
        v.finish(AttendanceDto {
            driver_id,
            date,
            status: self.status,
            check_in,
            check_out,
            notes: Validator::optional_text(&self.notes),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_times_dropped_when_absent() {
        let draft = AttendanceDraft {
            driver_id: "7".into(),
            date: "2024-05-03".into(),
            status: AttendanceStatus::Absent,
            check_in: "08:00".into(),
            ..Default::default()
        };
        let dto = draft.validate(FormMode::Create).unwrap();
        assert_eq!(dto.check_in, None);
        let json = serde_json::to_value(&dto).unwrap();
        assert!(json["checkIn"].is_null());
    }

    #[test]
    fn test_check_out_after_check_in() {
        let draft = AttendanceDraft {
            driver_id: "7".into(),
            date: "2024-05-03".into(),
            check_in: "17:00".into(),
            check_out: "08:00".into(),
            ..Default::default()
        };
        let errors = draft.validate(FormMode::Create).unwrap_err();
        assert_eq!(errors.get("checkOut"), Some("Check-out cannot be before check-in"));
    }
}
