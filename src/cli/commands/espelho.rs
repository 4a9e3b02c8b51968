use crate::cli::commands::{output_sink, resolve_employee};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::context::AppContext;
use crate::core::espelho::{accept, display_timestamp, is_accepted, month_punches, render_espelho};
use crate::db::log::ttlog_quiet;
use crate::errors::{AppError, AppResult};
use crate::export::DocumentSink;
use crate::ui::messages::{header, info, success};
use crate::utils::date::{YearMonth, today};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Espelho {
        month,
        accept: do_accept,
        pdf,
        employee,
        force,
    } = cmd
    else {
        return Ok(());
    };

    let month = match month {
        Some(m) => YearMonth::parse(m)?,
        None => YearMonth::of(today()),
    };

    let ctx = AppContext::open(cfg)?;
    let user = ctx.auth.require_user()?;

    // 1️⃣ whose timesheet: own, or any employee for the admin
    let emp = match (user.is_admin(), employee, user.employee_id.as_deref()) {
        (true, Some(key), _) => resolve_employee(&ctx.directory, key)?,
        (true, None, _) => {
            return Err(AppError::Validation(
                "--employee is required for the administrator".into(),
            ));
        }
        (false, Some(_), _) => {
            return Err(AppError::Forbidden(
                "employees can only see their own timesheet".into(),
            ));
        }
        (false, None, Some(id)) => resolve_employee(&ctx.directory, id)?,
        (false, None, None) => return Err(AppError::NotAuthenticated),
    };

    if *do_accept && user.is_admin() {
        return Err(AppError::Forbidden(
            "only the employee can accept the timesheet".into(),
        ));
    }

    // 2️⃣ listing
    let punches = month_punches(&ctx.records, &emp.id, month)?;
    header(format!("Espelho de Ponto {} - {}", month.key(), emp.name));
    if punches.is_empty() {
        info("Nenhum registro no mês.");
    }
    for p in &punches {
        println!("{} - {}", display_timestamp(&p.timestamp), p.punch.label());
    }

    // 3️⃣ acceptance
    let accepted = is_accepted(&ctx.records, &emp.id, month)?;
    if *do_accept {
        if accepted {
            info("Ponto já aceito.");
        } else {
            accept(&ctx.records, &emp.id, month)?;
            ttlog_quiet(
                &ctx.pool.conn,
                "espelho",
                &emp.id,
                &format!("Timesheet {} accepted", month.key()),
            );
            success("Ponto aceito.");
        }
    } else if accepted {
        info("Ponto aceito.");
    } else {
        info("Aceite pendente (use --accept).");
    }

    // 4️⃣ PDF
    if *pdf {
        let doc = render_espelho(emp, &punches, month);
        let path = output_sink(cfg, *force).deliver(&doc)?;
        success(format!("Espelho salvo em {}", path.display()));
    }

    Ok(())
}
