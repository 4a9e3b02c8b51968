//! Time-entry store: daily attendance records backed by the key-value store
//! under [`TIME_ENTRIES_KEY`]. Records are only mutated through the punch
//! registration pipeline.

use crate::core::observe::Listeners;
use crate::db::kv::{KeyValueStore, TIME_ENTRIES_KEY};
use crate::errors::AppResult;
use crate::models::time_entry::TimeEntry;
use chrono::NaiveDate;
use std::rc::Rc;

pub struct TimeEntryStore {
    kv: Rc<dyn KeyValueStore>,
    entries: Vec<TimeEntry>,
    listeners: Listeners<TimeEntry>,
}

impl TimeEntryStore {
    /// Load the persisted collection. Records without a `hash` (written by
    /// older builds) load with `hash = None`.
    pub fn load(kv: Rc<dyn KeyValueStore>) -> AppResult<Self> {
        let entries = match kv.get(TIME_ENTRIES_KEY)? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => Vec::new(),
        };

        Ok(Self {
            kv,
            entries,
            listeners: Listeners::default(),
        })
    }

    pub fn all(&self) -> &[TimeEntry] {
        &self.entries
    }

    pub fn today_entry_for(&self, employee_id: &str, today: NaiveDate) -> Option<&TimeEntry> {
        self.entries
            .iter()
            .find(|e| e.employee_id == employee_id && e.date == today)
    }

    pub fn entries_for(&self, employee_id: &str) -> Vec<&TimeEntry> {
        self.entries
            .iter()
            .filter(|e| e.employee_id == employee_id)
            .collect()
    }

    /// Records of one employee with `start <= date <= end`.
    pub fn entries_in_range(
        &self,
        employee_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<&TimeEntry> {
        self.entries
            .iter()
            .filter(|e| e.employee_id == employee_id && e.date >= start && e.date <= end)
            .collect()
    }

    /// Records of every employee with `start <= date <= end`.
    pub fn all_entries_in_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<&TimeEntry> {
        self.entries
            .iter()
            .filter(|e| e.date >= start && e.date <= end)
            .collect()
    }

    pub fn count_on(&self, date: NaiveDate) -> usize {
        self.entries.iter().filter(|e| e.date == date).count()
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    pub fn subscribe<F>(&mut self, f: F)
    where
        F: Fn(&[TimeEntry]) + 'static,
    {
        self.listeners.subscribe(f);
    }

    /// Replace the whole collection (bulk import).
    pub(crate) fn replace_all(&mut self, entries: Vec<TimeEntry>) -> AppResult<()> {
        self.persist(&entries)?;
        self.entries = entries;
        self.listeners.notify(&self.entries);
        Ok(())
    }

    /// Replace the record for `(employee_id, date)` in place, or append it.
    /// Storage is written before the in-memory collection changes.
    pub(crate) fn upsert(&mut self, entry: TimeEntry) -> AppResult<()> {
        let mut next = self.entries.clone();

        match next
            .iter_mut()
            .find(|e| e.employee_id == entry.employee_id && e.date == entry.date)
        {
            Some(slot) => *slot = entry,
            None => next.push(entry),
        }

        self.persist(&next)?;
        self.entries = next;
        self.listeners.notify(&self.entries);
        Ok(())
    }

    fn persist(&self, entries: &[TimeEntry]) -> AppResult<()> {
        let json = serde_json::to_string(entries)?;
        if let Err(e) = self.kv.set(TIME_ENTRIES_KEY, &json) {
            tracing::error!(error = %e, "failed to persist time entries");
            return Err(e);
        }
        Ok(())
    }
}
