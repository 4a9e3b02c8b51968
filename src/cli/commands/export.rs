use crate::cli::commands::{output_sink, period_or_current_month, resolve_employee};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::context::AppContext;
use crate::core::report::filter;
use crate::db::log::ttlog_quiet;
use crate::errors::AppResult;
use crate::export::afd::afd_document;
use crate::export::csv::csv_document;
use crate::export::{DocumentSink, ExportFormat, notify_export_success};
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Export {
        format,
        period,
        employee,
        force,
    } = cmd
    else {
        return Ok(());
    };

    let (start, end) = period_or_current_month(period)?;

    let ctx = AppContext::open(cfg)?;
    ctx.auth.require_admin()?;

    let doc = match format {
        ExportFormat::Csv => {
            let employee_id = match employee {
                Some(key) => Some(resolve_employee(&ctx.directory, key)?.id.clone()),
                None => None,
            };
            let entries = filter(ctx.entries.all(), employee_id.as_deref(), start, end);
            csv_document(&entries, &ctx.directory, start, end)?
        }
        ExportFormat::Afd => {
            if employee.is_some() {
                warning("AFD always covers every employee: --employee ignored.");
            }
            afd_document(ctx.entries.all(), &ctx.directory, start, end)
        }
    };

    let path = output_sink(cfg, *force).deliver(&doc)?;

    ttlog_quiet(
        &ctx.pool.conn,
        "export",
        format.as_str(),
        &format!("{} -> {}", doc.file_name, path.display()),
    );
    notify_export_success(format.label(), &path);
    Ok(())
}
