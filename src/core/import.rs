//! Bulk load of a browser-storage dump:
//! `{ "employees": [...], "timeEntries": [...] }`.

use crate::core::directory::Directory;
use crate::core::entries::TimeEntryStore;
use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;
use crate::models::time_entry::TimeEntry;
use serde::Deserialize;
use std::collections::HashSet;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub time_entries: Vec<TimeEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    pub employees: usize,
    pub time_entries: usize,
}

pub fn parse_snapshot(raw: &str) -> AppResult<Snapshot> {
    Ok(serde_json::from_str(raw)?)
}

fn check(snapshot: &Snapshot) -> AppResult<()> {
    let mut ras = HashSet::new();
    let mut usernames = HashSet::new();
    for e in &snapshot.employees {
        if !ras.insert(e.ra.as_str()) {
            return Err(AppError::Validation(format!("RA {} já está em uso", e.ra)));
        }
        if !usernames.insert(e.username.as_str()) {
            return Err(AppError::Validation(format!(
                "Nome de usuário '{}' já está em uso",
                e.username
            )));
        }
    }

    let mut days = HashSet::new();
    for t in &snapshot.time_entries {
        if !days.insert((t.employee_id.as_str(), t.date)) {
            return Err(AppError::Validation(format!(
                "more than one record for employee {} on {}",
                t.employee_id, t.date
            )));
        }
    }

    Ok(())
}

/// Replace both collections with the snapshot content.
///
/// Existing data is only overwritten when `force` is set.
pub fn import_snapshot(
    directory: &mut Directory,
    entries: &mut TimeEntryStore,
    snapshot: Snapshot,
    force: bool,
) -> AppResult<ImportSummary> {
    if !force && (!directory.list().is_empty() || !entries.all().is_empty()) {
        return Err(AppError::Validation(
            "database already contains data (use --force to overwrite)".into(),
        ));
    }

    check(&snapshot)?;

    let summary = ImportSummary {
        employees: snapshot.employees.len(),
        time_entries: snapshot.time_entries.len(),
    };

    // Both keys are written one after the other; if the second write fails the
    // previous employee collection is put back so storage is not left half-imported.
    let previous = directory.list().to_vec();
    directory.replace_all(snapshot.employees)?;

    if let Err(e) = entries.replace_all(snapshot.time_entries) {
        if let Err(restore) = directory.replace_all(previous) {
            tracing::error!(error = %restore, "could not restore employees after failed import");
        }
        return Err(e);
    }

    tracing::info!(
        employees = summary.employees,
        time_entries = summary.time_entries,
        "snapshot imported"
    );
    Ok(summary)
}
