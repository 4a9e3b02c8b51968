use crate::config::Config;
use crate::core::context::AppContext;
use crate::core::report::worked_duration;
use crate::errors::AppResult;
use crate::models::punch_type::PunchType;
use crate::ui::messages::{header, info};
use crate::utils::date::{format_br, today};

/// Today's punches of the logged-in employee, with the next expected one.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let ctx = AppContext::open(cfg)?;
    let (_, employee_id) = ctx.auth.require_employee()?;

    let day = today();
    header(format!("Registros de hoje ({})", format_br(day)));

    let Some(entry) = ctx.entries.today_entry_for(&employee_id, day) else {
        info("Nenhum registro hoje.");
        return Ok(());
    };

    for p in PunchType::ALL {
        println!(
            "{:<18} {}",
            format!("{}:", p.label()),
            entry.field(p).unwrap_or("--:--")
        );
    }
    println!("{:<18} {}", "Horas:", worked_duration(entry));

    if let Some(next) = PunchType::ALL.into_iter().find(|p| !entry.has(*p)) {
        info(format!("Próximo registro: {}", next.label()));
    }

    Ok(())
}
