//! Punch registration pipeline:
//! duplicate-check → hash → merge into the daily record → persist → receipt.

use crate::core::directory::Directory;
use crate::core::entries::TimeEntryStore;
use crate::core::hash::punch_hash;
use crate::core::receipt::{EmployerInfo, render_receipt};
use crate::errors::{AppError, AppResult};
use crate::export::Document;
use crate::models::punch_type::PunchType;
use crate::models::time_entry::TimeEntry;
use crate::utils::id::fresh_id;
use crate::utils::time::time_of_day;
use chrono::{DateTime, Local};

/// Outcome of a successful punch.
#[derive(Debug, Clone)]
pub struct Registration {
    pub punch: PunchType,
    pub time_of_day: String,
    /// Daily record after the punch was applied.
    pub entry: TimeEntry,
    /// `None` when the employee could not be resolved.
    pub receipt: Option<Document>,
}

pub struct PunchRegistrar<'a> {
    directory: &'a Directory,
    entries: &'a mut TimeEntryStore,
    employer: &'a EmployerInfo,
}

impl<'a> PunchRegistrar<'a> {
    pub fn new(
        directory: &'a Directory,
        entries: &'a mut TimeEntryStore,
        employer: &'a EmployerInfo,
    ) -> Self {
        Self {
            directory,
            entries,
            employer,
        }
    }

    /// Register `punch` for `employee_id` at `now`.
    ///
    /// Fails with [`AppError::DuplicatePunch`] when that punch is already
    /// recorded today; nothing is hashed, stored or rendered in that case.
    pub fn register(
        &mut self,
        employee_id: &str,
        punch: PunchType,
        now: DateTime<Local>,
    ) -> AppResult<Registration> {
        // 1️⃣ derive date, time-of-day and fingerprint input from one instant
        let today = now.date_naive();
        let time = time_of_day(&now);

        // 2️⃣ duplicate guard
        let existing = self.entries.today_entry_for(employee_id, today);
        if existing.is_some_and(|e| e.has(punch)) {
            tracing::debug!(employee_id, %punch, %today, "duplicate punch rejected");
            return Err(AppError::DuplicatePunch {
                employee_id: employee_id.to_string(),
                punch: punch.label().to_string(),
                date: today.format("%Y-%m-%d").to_string(),
            });
        }

        // 3️⃣ hash of this punch only (not chained with earlier punches)
        let hash = punch_hash(employee_id, punch, &now);

        // 4️⃣ merge into the daily record
        let mut entry = match existing {
            Some(e) => e.clone(),
            None => {
                let id = fresh_id(|candidate| self.entries.contains_id(candidate));
                TimeEntry::new(id, employee_id, today, now)
            }
        };
        entry.set(punch, time.clone());
        entry.hash = Some(hash);

        // 5️⃣ persist
        self.entries.upsert(entry.clone())?;

        // 6️⃣ receipt, when the employee is known
        let receipt = match self.directory.find(employee_id) {
            Some(employee) => Some(render_receipt(
                self.employer,
                employee,
                &entry,
                punch,
                &time,
                now,
            )),
            None => {
                tracing::warn!(employee_id, "punch stored but employee not found: no receipt");
                None
            }
        };

        Ok(Registration {
            punch,
            time_of_day: time,
            entry,
            receipt,
        })
    }
}
