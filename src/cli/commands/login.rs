use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::context::AppContext;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};

/// `login`, `logout` and `whoami`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let ctx = AppContext::open(cfg)?;

    match cmd {
        Commands::Login { username, password } => {
            match ctx.auth.login(&ctx.directory, username, password)? {
                Some(user) if user.is_admin() => {
                    success(format!("Logged in as administrator '{}'", user.username));
                }
                Some(user) => {
                    let name = user
                        .employee_id
                        .as_deref()
                        .and_then(|id| ctx.directory.find(id))
                        .map(|e| e.name.clone())
                        .unwrap_or_else(|| user.username.clone());
                    success(format!("Bem-vindo, {name}!"));
                }
                None => return Err(AppError::InvalidCredentials),
            }
        }
        Commands::Logout => {
            ctx.auth.logout()?;
            success("Session closed.");
        }
        Commands::Whoami => match ctx.auth.current()? {
            Some(user) if user.is_admin() => info(format!("{} (admin)", user.username)),
            Some(user) => info(format!(
                "{} (employee {})",
                user.username,
                user.employee_id.as_deref().unwrap_or("?")
            )),
            None => info("Not logged in."),
        },
        _ => {}
    }

    Ok(())
}
