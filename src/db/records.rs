//! Remote-style record store: append-only tables of JSON records with simple
//! field filters. Used by the audit log, direct point registration and the
//! monthly espelho acceptance.

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use chrono::Local;
use rusqlite::params;
use serde_json::Value;
use std::cmp::Ordering;

pub const AUDIT_LOGS: &str = "audit_logs";
pub const REMOTE_TIME_ENTRIES: &str = "time_entries";
pub const ESPELHO_ACEITES: &str = "espelho_aceites";

#[derive(Debug, Clone)]
pub enum Filter {
    Eq(String, Value),
    Gte(String, Value),
    Lt(String, Value),
}

impl Filter {
    pub fn eq(field: &str, value: impl Into<Value>) -> Self {
        Filter::Eq(field.to_string(), value.into())
    }

    pub fn gte(field: &str, value: impl Into<Value>) -> Self {
        Filter::Gte(field.to_string(), value.into())
    }

    pub fn lt(field: &str, value: impl Into<Value>) -> Self {
        Filter::Lt(field.to_string(), value.into())
    }

    pub fn matches(&self, record: &Value) -> bool {
        let (field, expected) = match self {
            Filter::Eq(f, v) | Filter::Gte(f, v) | Filter::Lt(f, v) => (f, v),
        };
        let Some(actual) = record.get(field) else {
            return false;
        };

        match self {
            Filter::Eq(..) => actual == expected,
            Filter::Gte(..) => matches!(
                compare(actual, expected),
                Some(Ordering::Greater | Ordering::Equal)
            ),
            Filter::Lt(..) => compare(actual, expected) == Some(Ordering::Less),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Order {
    pub field: String,
    pub ascending: bool,
}

impl Order {
    pub fn asc(field: &str) -> Self {
        Self {
            field: field.to_string(),
            ascending: true,
        }
    }

    pub fn desc(field: &str) -> Self {
        Self {
            field: field.to_string(),
            ascending: false,
        }
    }
}

/// Strings compare lexicographically, numbers numerically; anything else is
/// not ordered.
fn compare(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::String(x), Value::String(y)) => Some(x.cmp(y)),
        (Value::Number(x), Value::Number(y)) => x.as_f64()?.partial_cmp(&y.as_f64()?),
        (Value::Bool(x), Value::Bool(y)) => Some(x.cmp(y)),
        _ => None,
    }
}

pub trait RecordStore {
    fn insert(&self, table: &str, record: Value) -> AppResult<()>;
    fn query(&self, table: &str, filters: &[Filter], order: Option<&Order>)
    -> AppResult<Vec<Value>>;
}

/// `records` table backed store.
pub struct SqliteRecordStore {
    pool: DbPool,
}

impl SqliteRecordStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl RecordStore for SqliteRecordStore {
    fn insert(&self, table: &str, record: Value) -> AppResult<()> {
        let body = serde_json::to_string(&record)?;
        self.pool.conn.execute(
            "INSERT INTO records (table_name, body, created_at) VALUES (?1, ?2, ?3)",
            params![table, body, Local::now().to_rfc3339()],
        )?;
        Ok(())
    }

    fn query(
        &self,
        table: &str,
        filters: &[Filter],
        order: Option<&Order>,
    ) -> AppResult<Vec<Value>> {
        let mut stmt = self
            .pool
            .conn
            .prepare_cached("SELECT body FROM records WHERE table_name = ?1 ORDER BY id ASC")?;
        let rows = stmt.query_map([table], |row| row.get::<_, String>(0))?;

        let mut out = Vec::new();
        for r in rows {
            let record: Value = serde_json::from_str(&r?)?;
            if filters.iter().all(|f| f.matches(&record)) {
                out.push(record);
            }
        }

        if let Some(o) = order {
            // stable sort keeps insertion order for ties and unordered values
            out.sort_by(|a, b| {
                let ord = match (a.get(&o.field), b.get(&o.field)) {
                    (Some(x), Some(y)) => compare(x, y).unwrap_or(Ordering::Equal),
                    _ => Ordering::Equal,
                };
                if o.ascending { ord } else { ord.reverse() }
            });
        }

        Ok(out)
    }
}
