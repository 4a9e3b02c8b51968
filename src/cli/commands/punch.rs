use crate::cli::commands::output_sink;
use crate::cli::parser::Cli;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::context::AppContext;
use crate::core::point::register_point;
use crate::core::register::PunchRegistrar;
use crate::db::log::ttlog_quiet;
use crate::errors::{AppError, AppResult};
use crate::export::DocumentSink;
use crate::models::punch_type::PunchType;
use crate::ui::messages::{info, punch as punch_msg, success, warning};
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

/// `--at` instant (`YYYY-MM-DDTHH:MM`, local time).
fn parse_at(raw: &str) -> AppResult<DateTime<Local>> {
    let naive = NaiveDateTime::parse_from_str(raw.trim(), "%Y-%m-%dT%H:%M")
        .map_err(|_| AppError::InvalidDate(raw.to_string()))?;
    Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| AppError::InvalidDate(raw.to_string()))
}

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Punch {
        punch,
        no_receipt,
        at,
    } = &cli.command
    else {
        return Ok(());
    };

    // 1️⃣ punch type + instant
    let kind = PunchType::parse(punch).ok_or_else(|| AppError::InvalidPunchType(punch.clone()))?;
    let now = match at {
        Some(_) if !cli.test => {
            return Err(AppError::Forbidden("--at is only available in test mode".into()));
        }
        Some(raw) => parse_at(raw)?,
        None => Local::now(),
    };

    // 2️⃣ session
    let mut ctx = AppContext::open(cfg)?;
    let (_, employee_id) = ctx.auth.require_employee()?;

    // 3️⃣ pipeline
    let registration = {
        let mut registrar = PunchRegistrar::new(&ctx.directory, &mut ctx.entries, &ctx.employer);
        registrar.register(&employee_id, kind, now)?
    };

    punch_msg(format!(
        "{} registrada às {}",
        registration.punch.label(),
        registration.time_of_day
    ));
    ttlog_quiet(
        &ctx.pool.conn,
        "punch",
        &employee_id,
        &format!(
            "{} at {} (record {})",
            kind,
            registration.time_of_day,
            registration.entry.id
        ),
    );

    // 4️⃣ remote mirror (espelho source); failure is not fatal
    if cfg.remote_mirror
        && let Err(e) = register_point(&ctx.records, &employee_id, kind, now)
    {
        warning(format!("Punch stored locally but not mirrored: {e}"));
    }

    // 5️⃣ receipt
    match (&registration.receipt, *no_receipt) {
        (Some(doc), false) => {
            let path = output_sink(cfg, false).deliver(doc)?;
            success(format!("Comprovante salvo em {}", path.display()));
        }
        (Some(_), true) => {}
        (None, _) => info("No receipt: employee record not found."),
    }

    Ok(())
}
