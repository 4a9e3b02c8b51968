use super::punch_type::PunchType;
use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Daily attendance record: one per employee per date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub id: String,
    pub employee_id: String,
    pub date: NaiveDate, // ⇔ "YYYY-MM-DD"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clock_in: Option<String>, // ⇔ "HH:MM"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lunch_start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lunch_end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clock_out: Option<String>,
    pub created_at: DateTime<Local>, // first punch of the day
    /// Fingerprint of the most recent punch applied to this record.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

impl TimeEntry {
    pub fn new(id: String, employee_id: &str, date: NaiveDate, created_at: DateTime<Local>) -> Self {
        Self {
            id,
            employee_id: employee_id.to_string(),
            date,
            clock_in: None,
            lunch_start: None,
            lunch_end: None,
            clock_out: None,
            created_at,
            hash: None,
        }
    }

    pub fn field(&self, punch: PunchType) -> Option<&str> {
        match punch {
            PunchType::ClockIn => self.clock_in.as_deref(),
            PunchType::LunchStart => self.lunch_start.as_deref(),
            PunchType::LunchEnd => self.lunch_end.as_deref(),
            PunchType::ClockOut => self.clock_out.as_deref(),
        }
    }

    /// An empty string counts as "not punched", like a blank form field.
    pub fn has(&self, punch: PunchType) -> bool {
        self.field(punch).is_some_and(|v| !v.is_empty())
    }

    pub(crate) fn set(&mut self, punch: PunchType, time_of_day: String) {
        let slot = match punch {
            PunchType::ClockIn => &mut self.clock_in,
            PunchType::LunchStart => &mut self.lunch_start,
            PunchType::LunchEnd => &mut self.lunch_end,
            PunchType::ClockOut => &mut self.clock_out,
        };
        *slot = Some(time_of_day);
    }
}
