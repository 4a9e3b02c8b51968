//! AFD (Arquivo Fonte de Dados): one fixed-width line per daily record.
//!
//! Layout: `id` (9, left aligned, truncated) + date `YYYYMMDD` + time of the
//! first punch `HHMMSS` + record type `1` + RA (12, left aligned).

use crate::core::directory::Directory;
use crate::export::Document;
use crate::models::time_entry::TimeEntry;
use chrono::NaiveDate;

const RECORD_TYPE: &str = "1";

/// `AFD_<start>_<end>.txt`
pub fn afd_file_name(start: NaiveDate, end: NaiveDate) -> String {
    format!("AFD_{}_{}.txt", start, end)
}

pub fn afd_line(entry: &TimeEntry, ra: &str) -> String {
    format!(
        "{:<9.9}{}{}{}{:<12}\n",
        entry.id,
        entry.date.format("%Y%m%d"),
        entry.created_at.format("%H%M%S"),
        RECORD_TYPE,
        ra
    )
}

/// Every entry with `start <= date <= end` whose employee is known, in
/// store order. Entries of unknown employees are skipped.
pub fn export_afd<'a, I>(
    entries: I,
    directory: &Directory,
    start: NaiveDate,
    end: NaiveDate,
) -> String
where
    I: IntoIterator<Item = &'a TimeEntry>,
{
    entries
        .into_iter()
        .filter(|e| e.date >= start && e.date <= end)
        .filter_map(|e| {
            let employee = directory.find(&e.employee_id);
            if employee.is_none() {
                tracing::debug!(entry = %e.id, employee_id = %e.employee_id, "AFD: employee not found, skipped");
            }
            employee.map(|emp| afd_line(e, &emp.ra))
        })
        .collect()
}

pub fn afd_document<'a, I>(
    entries: I,
    directory: &Directory,
    start: NaiveDate,
    end: NaiveDate,
) -> Document
where
    I: IntoIterator<Item = &'a TimeEntry>,
{
    Document::text(
        afd_file_name(start, end),
        export_afd(entries, directory, start, end),
    )
}
