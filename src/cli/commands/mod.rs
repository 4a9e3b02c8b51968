pub mod config;
pub mod employee;
pub mod espelho;
pub mod export;
pub mod history;
pub mod import;
pub mod init;
pub mod log;
pub mod login;
pub mod punch;
pub mod report;
pub mod stats;
pub mod today;

use crate::config::Config;
use crate::core::directory::Directory;
use crate::errors::{AppError, AppResult};
use crate::export::DirectorySink;
use crate::models::employee::Employee;
use crate::utils::date::{YearMonth, parse_period, today};
use chrono::NaiveDate;

/// Look an employee up by id first, then by RA.
pub(crate) fn resolve_employee<'a>(directory: &'a Directory, key: &str) -> AppResult<&'a Employee> {
    directory
        .find(key)
        .or_else(|| directory.find_by_ra(key))
        .ok_or_else(|| AppError::EmployeeNotFound(key.to_string()))
}

/// `--period` bounds, defaulting to the current month.
pub(crate) fn period_or_current_month(period: &Option<String>) -> AppResult<(NaiveDate, NaiveDate)> {
    match period {
        Some(p) => parse_period(p),
        None => {
            let ym = YearMonth::of(today());
            Ok((ym.first_day(), ym.last_day()))
        }
    }
}

pub(crate) fn output_sink(cfg: &Config, force: bool) -> DirectorySink {
    DirectorySink::new(&cfg.output_dir, force).interactive(true)
}
