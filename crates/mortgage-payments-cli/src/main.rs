mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::payments::{BreakdownArgs, PaymentsArgs};

/// Canadian-convention mortgage payment calculations
#[derive(Parser)]
#[command(
    name = "mortpay",
    version,
    about = "Canadian-convention mortgage payment calculations",
    long_about = "Computes monthly, semi-monthly, bi-weekly, weekly and rapid \
                  (accelerated) mortgage payments from a principal, a quoted \
                  nominal rate compounded semi-annually and an amortization \
                  period, with decimal precision."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Payment per period for each standard and rapid plan
    Payments(PaymentsArgs),
    /// Periodic rate, payment count and lifetime cost per frequency
    Breakdown(BreakdownArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
    Text,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Payments(args) => commands::payments::run_payments(args),
        Commands::Breakdown(args) => commands::payments::run_breakdown(args),
        Commands::Version => {
            println!("mortpay {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            log::debug!("command failed: {e:?}");
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
