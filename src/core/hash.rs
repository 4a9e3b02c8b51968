//! Punch fingerprint.

use crate::models::punch_type::PunchType;
use crate::utils::time::punch_timestamp;
use chrono::{DateTime, Local};
use sha2::{Digest, Sha256};

/// SHA-256 over `"{employee_id}-{punch_type}-{timestamp}"`, lowercase hex.
pub fn generate_hash(employee_id: &str, punch_type: &str, timestamp: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(format!("{employee_id}-{punch_type}-{timestamp}").as_bytes());
    hex::encode(hasher.finalize())
}

/// Fingerprint of a punch happening at `now`.
pub fn punch_hash(employee_id: &str, punch: PunchType, now: &DateTime<Local>) -> String {
    generate_hash(employee_id, punch.as_str(), &punch_timestamp(now))
}
