//! Reporting engine: filtering, worked hours and report rows.

use crate::core::directory::Directory;
use crate::models::time_entry::TimeEntry;
use crate::utils::date::format_br;
use crate::utils::time::{minutes_between, parse_time};
use chrono::NaiveDate;

/// Sentinel for days without both clock-in and clock-out.
pub const INCOMPLETE: &str = "Incompleto";
pub const UNKNOWN_EMPLOYEE: &str = "Funcionário não encontrado";
pub const UNKNOWN_RA: &str = "N/A";

/// Keep entries of `employee_id` (all employees when `None` or empty) whose
/// date falls in `start..=end`. Input order is preserved.
pub fn filter<'a, I>(
    entries: I,
    employee_id: Option<&str>,
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<&'a TimeEntry>
where
    I: IntoIterator<Item = &'a TimeEntry>,
{
    let employee_id = employee_id.filter(|id| !id.is_empty());

    entries
        .into_iter()
        .filter(|e| employee_id.is_none_or(|id| e.employee_id == id))
        .filter(|e| e.date >= start && e.date <= end)
        .collect()
}

/// Worked minutes: clock-out minus clock-in, minus lunch when both lunch
/// punches exist. `None` when clock-in or clock-out is missing.
pub fn worked_minutes(entry: &TimeEntry) -> Option<f64> {
    let clock_in = parse_time(entry.clock_in.as_deref()?)?;
    let clock_out = parse_time(entry.clock_out.as_deref()?)?;

    let mut total = minutes_between(clock_in, clock_out);

    let lunch_start = entry.lunch_start.as_deref().and_then(parse_time);
    let lunch_end = entry.lunch_end.as_deref().and_then(parse_time);
    if let (Some(ls), Some(le)) = (lunch_start, lunch_end) {
        total -= minutes_between(ls, le);
    }

    Some(total)
}

/// `"<H>h <M>m"`: whole hours (floored) and the rounded remainder.
pub fn format_worked(total_minutes: f64) -> String {
    let hours = (total_minutes / 60.0).floor() as i64;
    let minutes = (total_minutes % 60.0).round() as i64;
    format!("{}h {}m", hours, minutes)
}

pub fn worked_duration(entry: &TimeEntry) -> String {
    match worked_minutes(entry) {
        Some(total) => format_worked(total),
        None => INCOMPLETE.to_string(),
    }
}

/// Sum over complete days only.
pub fn total_worked(entries: &[&TimeEntry]) -> String {
    let total: f64 = entries.iter().filter_map(|e| worked_minutes(e)).sum();
    format_worked(total)
}

/// One line of the admin report (screen table and CSV).
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub name: String,
    pub ra: String,
    pub date: String,
    pub clock_in: String,
    pub lunch_start: String,
    pub lunch_end: String,
    pub clock_out: String,
    pub worked: String,
}

impl ReportRow {
    pub fn build(entry: &TimeEntry, directory: &Directory) -> Self {
        let employee = directory.find(&entry.employee_id);
        let punch = |v: &Option<String>| v.clone().unwrap_or_default();

        Self {
            name: employee
                .map(|e| e.name.clone())
                .unwrap_or_else(|| UNKNOWN_EMPLOYEE.to_string()),
            ra: employee
                .map(|e| e.ra.clone())
                .unwrap_or_else(|| UNKNOWN_RA.to_string()),
            date: format_br(entry.date),
            clock_in: punch(&entry.clock_in),
            lunch_start: punch(&entry.lunch_start),
            lunch_end: punch(&entry.lunch_end),
            clock_out: punch(&entry.clock_out),
            worked: worked_duration(entry),
        }
    }

    pub fn cells(&self) -> [&str; 8] {
        [
            self.name.as_str(),
            self.ra.as_str(),
            self.date.as_str(),
            self.clock_in.as_str(),
            self.lunch_start.as_str(),
            self.lunch_end.as_str(),
            self.clock_out.as_str(),
            self.worked.as_str(),
        ]
    }
}

pub fn build_rows(entries: &[&TimeEntry], directory: &Directory) -> Vec<ReportRow> {
    entries
        .iter()
        .map(|e| ReportRow::build(e, directory))
        .collect()
}
