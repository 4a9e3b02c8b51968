//! Audit trail stored in the remote `audit_logs` table.

use crate::db::records::{AUDIT_LOGS, Filter, Order, RecordStore};
use crate::errors::AppResult;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditAction {
    Insert,
    Update,
    Delete,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub table_name: String,
    pub record_id: String,
    pub action: AuditAction,
    pub changed_by: String,
    #[serde(default)]
    pub justification: Option<String>,
    #[serde(default)]
    pub old_data: Option<Value>,
    #[serde(default)]
    pub new_data: Option<Value>,
    pub created_at: DateTime<Local>,
}

pub struct AuditLogger<'a> {
    store: &'a dyn RecordStore,
}

impl<'a> AuditLogger<'a> {
    pub fn new(store: &'a dyn RecordStore) -> Self {
        Self { store }
    }

    /// Record a change. A failed insert is logged and swallowed: auditing
    /// never aborts the operation being audited.
    pub fn log(&self, entry: AuditEntry) {
        let record = match serde_json::to_value(&entry) {
            Ok(v) => v,
            Err(e) => {
                tracing::error!(error = %e, "audit entry not serializable");
                return;
            }
        };

        if let Err(e) = self.store.insert(AUDIT_LOGS, record) {
            tracing::error!(
                table = %entry.table_name,
                record_id = %entry.record_id,
                error = %e,
                "failed to write audit log"
            );
        }
    }

    /// Audit entries for one record, oldest first.
    pub fn history(&self, table_name: &str, record_id: &str) -> AppResult<Vec<AuditEntry>> {
        let rows = self.store.query(
            AUDIT_LOGS,
            &[
                Filter::eq("table_name", table_name),
                Filter::eq("record_id", record_id),
            ],
            Some(&Order::asc("created_at")),
        )?;

        rows.into_iter()
            .map(|v| serde_json::from_value(v).map_err(Into::into))
            .collect()
    }
}
