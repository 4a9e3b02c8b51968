use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rponto
/// Employee time clock (ponto eletrônico) backed by SQLite
#[derive(Parser)]
#[command(
    name = "rponto",
    version = env!("CARGO_PKG_VERSION"),
    about = "Employee time clock: punches, receipts, reports and AFD export using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the directory where receipts and exports are written
    #[arg(global = true, long = "out", value_name = "DIR")]
    pub out: Option<String>,

    /// Run in test mode (built-in defaults, no config file read or written)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Open a session (admin or employee)
    Login {
        username: String,

        #[arg(long, short = 'p')]
        password: String,
    },

    /// Close the current session
    Logout,

    /// Show who is logged in
    Whoami,

    /// Manage employees (admin)
    Employee {
        #[command(subcommand)]
        action: EmployeeAction,
    },

    /// Register a punch for the logged-in employee
    Punch {
        /// clock-in | lunch-start | lunch-end | clock-out
        punch: String,

        #[arg(long = "no-receipt", help = "Do not write the PDF receipt")]
        no_receipt: bool,

        /// Punch instant override, `YYYY-MM-DDTHH:MM` (test mode only)
        #[arg(long = "at", hide = true)]
        at: Option<String>,
    },

    /// Show today's record of the logged-in employee
    Today,

    /// List the records of the logged-in employee
    History {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,
    },

    /// Attendance report (admin)
    Report {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long, short, help = "Employee id or RA (default: all)")]
        employee: Option<String>,
    },

    /// Export attendance data (admin)
    Export {
        #[arg(value_enum)]
        format: ExportFormat,

        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long, short, help = "Employee id or RA (CSV only)")]
        employee: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Dashboard counters (admin)
    Stats,

    /// Monthly timesheet: list, accept, PDF
    Espelho {
        #[arg(long, short, value_name = "YYYY-MM", help = "Reference month (default: current)")]
        month: Option<String>,

        #[arg(long, help = "Confirm the timesheet of the month")]
        accept: bool,

        #[arg(long, help = "Write the timesheet PDF")]
        pdf: bool,

        #[arg(long, short, help = "Employee id or RA (admin only)")]
        employee: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Import a browser-storage JSON dump (admin)
    Import {
        #[arg(value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite existing data")]
        force: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum EmployeeAction {
    /// Register a new employee
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        ra: String,
        #[arg(long)]
        cpf: String,
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
    },

    /// List employees
    List {
        #[arg(long, help = "Show only active employees")]
        active: bool,
    },

    /// Change employee data
    Update {
        /// Employee id or RA
        employee: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        ra: Option<String>,
        #[arg(long)]
        cpf: Option<String>,
        #[arg(long)]
        username: Option<String>,
        #[arg(long)]
        password: Option<String>,
    },

    /// Deactivate or reactivate an employee
    Toggle {
        /// Employee id or RA
        employee: String,
    },
}
