pub mod date;
pub mod id;
pub mod table;
pub mod time;
