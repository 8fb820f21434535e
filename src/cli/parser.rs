use crate::export::ExportFormat;
use crate::models::AppointmentStatus;
use crate::utils::date::parse_date_arg;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Command-line interface definition for InkMaster
/// Studio manager for tattoo artists: appointments, clients, portfolio, pricing
#[derive(Parser)]
#[command(
    name = "inkmaster",
    version = env!("CARGO_PKG_VERSION"),
    about = "Manage a tattoo studio from the terminal: appointments, clients, portfolio and price estimates",
    long_about = None
)]
pub struct Cli {
    /// Override the configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Start without the demo data
    #[arg(global = true, long = "empty")]
    pub empty: bool,

    /// Pin "today" to a date (YYYY-MM-DD) instead of reading the system clock
    #[arg(global = true, long = "as-of", hide = true, value_parser = parse_date_arg)]
    pub as_of: Option<NaiveDate>,

    #[command(subcommand)]
    pub command: Commands,
}

fn parse_status(s: &str) -> Result<AppointmentStatus, String> {
    AppointmentStatus::from_label(s)
        .ok_or_else(|| format!("Invalid status '{}': use scheduled, completed or cancelled", s))
}

#[derive(Subcommand)]
pub enum Commands {
    /// Studio overview: revenue, today's appointments, recent sessions
    Dashboard,

    /// List appointments
    Appointments {
        /// Show only appointments dated today
        #[arg(long = "today")]
        today: bool,

        /// Filter by status (scheduled, completed, cancelled)
        #[arg(long, value_parser = parse_status)]
        status: Option<AppointmentStatus>,
    },

    /// List clients
    Clients,

    /// Show the portfolio
    Portfolio,

    /// Estimate the price of a tattoo
    Estimate {
        /// Size: small, medium, large, xlarge
        #[arg(long, default_value = "")]
        size: String,

        /// Complexity: simple, moderate, complex, detailed
        #[arg(long, default_value = "")]
        complexity: String,

        /// Estimated session hours
        #[arg(long, allow_negative_numbers = true)]
        hours: f64,

        /// Hourly rate (defaults to the configured rate)
        #[arg(long, allow_negative_numbers = true)]
        rate: Option<f64>,
    },

    /// Show the pricing guide and multipliers
    Guide,

    /// List the services offered when booking
    Services,

    /// Export a collection of the session to a file
    Export {
        /// Export format: csv, json
        #[arg(long, value_enum, value_name = "FORMAT", default_value = "csv")]
        format: ExportFormat,

        /// Output file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Export appointments (default)
        #[arg(long, conflicts_with_all = ["clients", "portfolio"])]
        appointments: bool,

        /// Export clients
        #[arg(long, conflicts_with_all = ["appointments", "portfolio"])]
        clients: bool,

        /// Export portfolio pieces
        #[arg(long, conflicts_with_all = ["appointments", "clients"])]
        portfolio: bool,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Show or create the configuration file
    Config {
        /// Print the effective configuration
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        /// Write a configuration file with the default values
        #[arg(long = "init", help = "Write the default configuration file")]
        init: bool,
    },

    /// Interactive session: fill in forms and add appointments and clients
    Shell,
}
