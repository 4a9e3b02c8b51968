use crate::config::Config;
use crate::core::context::AppContext;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::date::{format_br, today};

/// Admin dashboard counters.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let ctx = AppContext::open(cfg)?;
    ctx.auth.require_admin()?;

    let day = today();
    header("Painel do administrador");
    println!("Funcionários ativos : {}", ctx.directory.active_count());
    println!("Funcionários total  : {}", ctx.directory.list().len());
    println!("Registros hoje      : {} ({})", ctx.entries.count_on(day), format_br(day));
    Ok(())
}
