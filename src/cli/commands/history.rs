use crate::cli::commands::period_or_current_month;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::context::AppContext;
use crate::core::report::{total_worked, worked_duration};
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::date::format_br;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::History { period } = cmd else {
        return Ok(());
    };

    let (start, end) = period_or_current_month(period)?;

    let ctx = AppContext::open(cfg)?;
    let (_, employee_id) = ctx.auth.require_employee()?;

    let entries = ctx.entries.entries_in_range(&employee_id, start, end);
    if entries.is_empty() {
        info(format!("No records between {} and {}.", format_br(start), format_br(end)));
        return Ok(());
    }

    let mut table = Table::new(&["Data", "Entrada", "Início Almoço", "Fim Almoço", "Saída", "Horas"]);
    for e in &entries {
        table.add_row(vec![
            format_br(e.date),
            e.clock_in.clone().unwrap_or_default(),
            e.lunch_start.clone().unwrap_or_default(),
            e.lunch_end.clone().unwrap_or_default(),
            e.clock_out.clone().unwrap_or_default(),
            worked_duration(e),
        ]);
    }

    print!("{}", table.render());
    println!("\nTotal: {}", total_worked(&entries));
    Ok(())
}
