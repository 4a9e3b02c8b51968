//! Unified application error type.
//! All modules (db, core, export, cli) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Stored data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid punch type: {0}")]
    InvalidPunchType(String),

    // ---------------------------
    // Domain errors
    // ---------------------------
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Punch '{punch}' already registered on {date} for employee {employee_id}")]
    DuplicatePunch {
        employee_id: String,
        punch: String,
        date: String,
    },

    #[error("Usuário ou senha inválidos")]
    InvalidCredentials,

    #[error("No active session: run `rponto login` first")]
    NotAuthenticated,

    #[error("Operation not allowed: {0}")]
    Forbidden(String),

    #[error("Employee not found: {0}")]
    EmployeeNotFound(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
