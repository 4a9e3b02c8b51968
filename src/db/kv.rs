//! Key-value persistence consumed by the directory, the time-entry store and
//! the session. Values are serialized collections (JSON text).

use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use chrono::Local;
use rusqlite::{OptionalExtension, params};
use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};

pub const EMPLOYEES_KEY: &str = "employees";
pub const TIME_ENTRIES_KEY: &str = "timeEntries";
pub const CURRENT_USER_KEY: &str = "currentUser";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&self, key: &str) -> AppResult<()>;
}

/// `kv` table backed store.
pub struct SqliteKv {
    pool: DbPool,
}

impl SqliteKv {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl KeyValueStore for SqliteKv {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let mut stmt = self
            .pool
            .conn
            .prepare_cached("SELECT value FROM kv WHERE key = ?1")?;
        Ok(stmt
            .query_row([key], |row| row.get::<_, String>(0))
            .optional()?)
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.pool.conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Local::now().to_rfc3339()],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.pool.conn.execute("DELETE FROM kv WHERE key = ?1", [key])?;
        Ok(())
    }
}

/// Volatile store. Writes can be switched off, globally or for single keys,
/// to simulate a storage failure.
#[derive(Default)]
pub struct MemoryKv {
    data: RefCell<HashMap<String, String>>,
    reject_writes: Cell<bool>,
    rejected_keys: RefCell<HashSet<String>>,
}

impl MemoryKv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.data
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    pub fn reject_writes(&self, reject: bool) {
        self.reject_writes.set(reject);
    }

    /// Make writes to `key` fail while other keys stay writable.
    pub fn reject_writes_to(&self, key: &str) {
        self.rejected_keys.borrow_mut().insert(key.to_string());
    }

    fn check_writable(&self, key: &str) -> AppResult<()> {
        if self.reject_writes.get() || self.rejected_keys.borrow().contains(key) {
            return Err(AppError::Other(format!("storage is read-only (key '{key}')")));
        }
        Ok(())
    }
}

impl KeyValueStore for MemoryKv {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.data.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.check_writable(key)?;
        self.data
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.check_writable(key)?;
        self.data.borrow_mut().remove(key);
        Ok(())
    }
}
