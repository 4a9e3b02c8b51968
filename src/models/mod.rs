pub mod employee;
pub mod punch_type;
pub mod time_entry;
pub mod user;
