use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use mortgage_payments_core::payments::breakdown;
use mortgage_payments_core::payments::calculator::{self, PaymentInput};

use crate::input;

/// Loan terms shared by every payment command
#[derive(Args)]
pub struct LoanTermArgs {
    /// Loan principal (e.g. 300000)
    #[arg(long, allow_negative_numbers = true)]
    pub principal: Option<Decimal>,

    /// Quoted nominal annual rate in percent (e.g. 5.5 for 5.5%)
    #[arg(long, alias = "annual-rate", allow_negative_numbers = true)]
    pub rate: Option<Decimal>,

    /// Amortization period in whole years
    #[arg(long, alias = "amortization")]
    pub years: Option<u32>,

    /// Path to JSON or YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

/// Arguments for the six-way payment comparison
#[derive(Args)]
pub struct PaymentsArgs {
    #[command(flatten)]
    pub terms: LoanTermArgs,
}

/// Arguments for the per-frequency lifetime breakdown
#[derive(Args)]
pub struct BreakdownArgs {
    #[command(flatten)]
    pub terms: LoanTermArgs,
}

pub fn run_payments(args: PaymentsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let terms = resolve_terms(&args.terms)?;
    let result = calculator::calculate_mortgage_payments(&terms)?;
    Ok(serde_json::to_value(result)?)
}

pub fn run_breakdown(args: BreakdownArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let terms = resolve_terms(&args.terms)?;
    let result = breakdown::payment_breakdown(&terms)?;
    Ok(serde_json::to_value(result)?)
}

fn resolve_terms(args: &LoanTermArgs) -> Result<PaymentInput, Box<dyn std::error::Error>> {
    if let Some(ref path) = args.input {
        return input::file::read_input(path);
    }

    if args.principal.is_none() && args.rate.is_none() && args.years.is_none() {
        if let Some(data) = input::stdin::read_stdin()? {
            return Ok(PaymentInput::from_value(data)?);
        }
    }

    Ok(PaymentInput {
        principal: args
            .principal
            .ok_or("--principal is required (or provide --input)")?,
        annual_rate_percent: args
            .rate
            .ok_or("--rate is required (or provide --input)")?,
        amortization_years: args
            .years
            .ok_or("--years is required (or provide --input)")?,
    })
}
