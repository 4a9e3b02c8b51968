use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::db::migrate::applied_versions;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database with all pending migrations
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    // 1️⃣ configuration + DB path
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    println!("⚙️  Initializing rponto…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", &db_path);

    // 2️⃣ open + migrate
    let pool = DbPool::new(&db_path)?;
    let versions = applied_versions(&pool.conn)?;
    tracing::debug!(?versions, "schema migrations applied");

    // 3️⃣ internal log (non-blocking)
    ttlog_quiet(
        &pool.conn,
        "init",
        "database",
        &format!("Database initialized at {}", &db_path),
    );

    success(format!("Database initialized at {}", &db_path));
    tracing::debug!(output_dir = %cfg.output_dir, "documents directory");
    println!("🎉 rponto initialization completed!");
    Ok(())
}
