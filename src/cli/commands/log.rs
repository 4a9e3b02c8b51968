use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::{LogRow, load_log};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;

const FG_RESET: &str = "\x1b[0m";

/// ANSI color of an operation name.
fn color_for_operation(op: &str) -> &'static str {
    match op {
        "punch" => "\x1b[32m",
        "employee_add" | "import" => "\x1b[36m",
        "employee_update" => "\x1b[33m",
        "employee_toggle" => "\x1b[31m",
        "migration_applied" => "\x1b[35m",
        "export" | "espelho" => "\x1b[34m",
        "init" => "\x1b[38;5;208m",
        _ => "\x1b[37m",
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(3)).collect();
    out.push_str("...");
    out
}

fn print_rows(rows: &[LogRow]) {
    let id_w = rows
        .iter()
        .map(|r| r.id.to_string().len())
        .max()
        .unwrap_or(1);

    let dates: Vec<String> = rows
        .iter()
        .map(|r| {
            chrono::DateTime::parse_from_rfc3339(&r.date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or_else(|_| r.date.clone())
        })
        .collect();
    let date_w = dates.iter().map(|d| d.len()).max().unwrap_or(10);

    // unica colonna op+target, limitata a 60 caratteri visibili
    let op_targets: Vec<String> = rows
        .iter()
        .map(|r| {
            let raw = if r.target.is_empty() {
                r.operation.clone()
            } else {
                format!("{} ({})", r.operation, r.target)
            };
            truncate(&raw, 60)
        })
        .collect();
    let op_w = op_targets
        .iter()
        .map(|s| s.chars().count())
        .max()
        .unwrap_or(10);

    println!("📜 Internal log:\n");

    for ((row, date), op_target) in rows.iter().zip(&dates).zip(&op_targets) {
        let color = color_for_operation(&row.operation);
        let (op, rest) = match op_target.split_once(' ') {
            Some((op, rest)) => (op, format!(" {rest}")),
            None => (op_target.as_str(), String::new()),
        };
        let padding = " ".repeat(op_w.saturating_sub(op_target.chars().count()));

        println!(
            "{:>id_w$}: {:<date_w$} | {color}{op}{FG_RESET}{rest}{padding} => {}",
            row.id,
            date,
            row.message,
            id_w = id_w,
            date_w = date_w
        );
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let pool = DbPool::new(&cfg.database)?;
        let rows = load_log(&pool.conn)?;

        if rows.is_empty() {
            info("The internal log is empty.");
        } else {
            print_rows(&rows);
        }
    }

    Ok(())
}
