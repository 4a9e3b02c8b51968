use crate::cli::commands::{period_or_current_month, resolve_employee};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::context::AppContext;
use crate::core::report::{build_rows, filter, total_worked};
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::date::format_br;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Report { period, employee } = cmd else {
        return Ok(());
    };

    let (start, end) = period_or_current_month(period)?;

    let ctx = AppContext::open(cfg)?;
    ctx.auth.require_admin()?;

    let employee_id = match employee {
        Some(key) => Some(resolve_employee(&ctx.directory, key)?.id.clone()),
        None => None,
    };

    let entries = filter(ctx.entries.all(), employee_id.as_deref(), start, end);

    header(format!(
        "Relatório de pontos {} a {}",
        format_br(start),
        format_br(end)
    ));

    if entries.is_empty() {
        info("Nenhum registro no período.");
        return Ok(());
    }

    let mut table = Table::new(&[
        "Nome", "RA", "Data", "Entrada", "Início Almoço", "Fim Almoço", "Saída", "Horas",
    ]);
    for row in build_rows(&entries, &ctx.directory) {
        table.add_row(row.cells().iter().map(|c| c.to_string()).collect());
    }

    print!("{}", table.render());
    println!("\nRegistros: {}   Total: {}", entries.len(), total_worked(&entries));
    Ok(())
}
