//! Direct point registration against the remote `time_entries` table.
//!
//! Unlike the local pipeline there is no daily record and no duplicate
//! guard: every call appends one punch row.

use crate::core::hash::generate_hash;
use crate::db::records::{REMOTE_TIME_ENTRIES, RecordStore};
use crate::errors::AppResult;
use crate::models::punch_type::PunchType;
use crate::utils::time::punch_timestamp;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemotePunch {
    pub employee_id: String,
    #[serde(rename = "type")]
    pub punch: PunchType,
    /// UTC, millisecond precision, `Z` suffix.
    pub timestamp: String,
    pub hash: String,
}

pub fn register_point(
    store: &dyn RecordStore,
    employee_id: &str,
    punch: PunchType,
    now: DateTime<Local>,
) -> AppResult<RemotePunch> {
    let timestamp = punch_timestamp(&now);
    let row = RemotePunch {
        employee_id: employee_id.to_string(),
        punch,
        hash: generate_hash(employee_id, punch.as_str(), &timestamp),
        timestamp,
    };

    store.insert(REMOTE_TIME_ENTRIES, serde_json::to_value(&row)?)?;
    tracing::debug!(employee_id, %punch, "remote punch stored");
    Ok(row)
}
