use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::audit::{AuditAction, AuditEntry, AuditLogger};
use crate::core::context::AppContext;
use crate::core::import::{import_snapshot, parse_snapshot};
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::ui::messages::success;
use chrono::Local;
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Import { file, force } = cmd else {
        return Ok(());
    };

    let raw = fs::read_to_string(file)?;
    let snapshot = parse_snapshot(&raw)?;

    let mut ctx = AppContext::open(cfg)?;
    let admin = ctx.auth.require_admin()?;

    let summary = import_snapshot(&mut ctx.directory, &mut ctx.entries, snapshot, *force)?;

    AuditLogger::new(&ctx.records).log(AuditEntry {
        table_name: "employees".to_string(),
        record_id: "*".to_string(),
        action: AuditAction::Insert,
        changed_by: admin.username.clone(),
        justification: Some(format!("import from {file}")),
        old_data: None,
        new_data: None,
        created_at: Local::now(),
    });
    ttlog_quiet(
        &ctx.pool.conn,
        "import",
        file,
        &format!(
            "{} employees, {} time entries",
            summary.employees, summary.time_entries
        ),
    );

    success(format!(
        "Imported {} employees and {} time entries",
        summary.employees, summary.time_entries
    ));
    Ok(())
}
