//! Diagnostic logging (stderr). User-facing output goes through `ui::messages`.

use tracing_subscriber::EnvFilter;

/// Environment variable overriding the configured level (`RPONTO_LOG=debug`).
pub const LOG_ENV: &str = "RPONTO_LOG";

/// Initialize the global subscriber. `level` comes from the configuration;
/// `RPONTO_LOG` wins when set. Calling it twice is harmless.
pub fn init_logger(level: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false)
        .try_init();
}
