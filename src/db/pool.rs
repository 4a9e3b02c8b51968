//! SQLite connection wrapper (lightweight for CLI usage).
//!
//! A single connection is shared by the key-value store, the record store and
//! the internal log, so the handle is reference counted.

use crate::db::initialize::init_db;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::path::Path;
use std::rc::Rc;

#[derive(Clone)]
pub struct DbPool {
    pub conn: Rc<Connection>,
}

impl DbPool {
    /// Open the database file and bring the schema up to date.
    pub fn new(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        init_db(&conn)?;
        Ok(Self {
            conn: Rc::new(conn),
        })
    }

    /// Fresh in-memory database with the full schema (tests, dry runs).
    pub fn in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        init_db(&conn)?;
        Ok(Self {
            conn: Rc::new(conn),
        })
    }
}
