//! Six-way mortgage payment comparison.
//!
//! The four standard frequencies are independent annuities at the period
//! rate equivalent to semi-annual compounding. The two rapid (accelerated)
//! plans are simple fractions of the unrounded monthly payment, which is how
//! lenders quote them; they are not annuities in their own right.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::payments::annuity::annuity_payment;
use crate::payments::currency::round_currency;
use crate::payments::frequency::{periodic_rate, PaymentFrequency};
use crate::payments::validation::{input_warnings, validate_input, validate_terms};
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::MortgageResult;

// ---------------------------------------------------------------------------
// Input / output types
// ---------------------------------------------------------------------------

/// Loan terms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentInput {
    /// Loan amount.
    pub principal: Money,
    /// Quoted nominal annual rate as a percentage (5.5 for 5.5%).
    pub annual_rate_percent: Decimal,
    /// Amortization period in whole years.
    pub amortization_years: u32,
}

impl PaymentInput {
    /// Parse loan terms from a JSON document.
    pub fn from_json(json: &str) -> MortgageResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse loan terms from an already-decoded JSON value.
    pub fn from_value(value: serde_json::Value) -> MortgageResult<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

/// Per-period payment for each plan, rounded to cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MortgagePayments {
    pub monthly: Money,
    pub semi_monthly: Money,
    pub bi_weekly: Money,
    pub weekly: Money,
    pub rapid_bi_weekly: Money,
    pub rapid_weekly: Money,
}

impl MortgagePayments {
    /// Payments in fixed order: monthly, semi-monthly, bi-weekly, weekly,
    /// rapid bi-weekly, rapid weekly.
    pub fn as_tuple(&self) -> (Money, Money, Money, Money, Money, Money) {
        (
            self.monthly,
            self.semi_monthly,
            self.bi_weekly,
            self.weekly,
            self.rapid_bi_weekly,
            self.rapid_weekly,
        )
    }
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Compute all six payment amounts for validated loan terms.
///
/// Invalid terms (non-positive principal or amortization, negative rate)
/// are rejected before any arithmetic runs.
pub fn compute_payments(
    principal: Money,
    annual_rate_percent: Decimal,
    amortization_years: u32,
) -> MortgageResult<MortgagePayments> {
    validate_terms(principal, annual_rate_percent, amortization_years)?;
    payments_for_terms(principal, annual_rate_percent, amortization_years)
}

/// Compute payments and wrap them in the standard output envelope.
pub fn calculate_mortgage_payments(
    input: &PaymentInput,
) -> MortgageResult<ComputationOutput<MortgagePayments>> {
    let start = Instant::now();
    validate_input(input)?;

    let warnings = input_warnings(input);
    let payments = payments_for_terms(
        input.principal,
        input.annual_rate_percent,
        input.amortization_years,
    )?;

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Annuity payments at semi-annually compounded equivalent period rates",
        input,
        warnings,
        elapsed,
        payments,
    ))
}

// ---------------------------------------------------------------------------
// Internals
// ---------------------------------------------------------------------------

/// Quoted percentage to decimal rate.
pub(crate) fn percent_to_rate(annual_rate_percent: Decimal) -> Rate {
    annual_rate_percent / dec!(100)
}

/// Unrounded level payment for one standard frequency.
pub(crate) fn standard_payment(
    principal: Money,
    annual_rate: Rate,
    amortization_years: u32,
    frequency: PaymentFrequency,
) -> MortgageResult<(Rate, Money)> {
    let rate = periodic_rate(annual_rate, frequency)?;
    let periods = frequency.total_periods(amortization_years);
    let payment = annuity_payment(principal, rate, periods)?;

    log::debug!(
        "{frequency}: periodic rate {rate}, {periods} periods, payment {payment}"
    );

    Ok((rate, payment))
}

fn payments_for_terms(
    principal: Money,
    annual_rate_percent: Decimal,
    amortization_years: u32,
) -> MortgageResult<MortgagePayments> {
    let annual_rate = percent_to_rate(annual_rate_percent);
    let payment = |frequency| {
        standard_payment(principal, annual_rate, amortization_years, frequency)
            .map(|(_, amount)| amount)
    };

    let monthly = payment(PaymentFrequency::Monthly)?;
    let semi_monthly = payment(PaymentFrequency::SemiMonthly)?;
    let bi_weekly = payment(PaymentFrequency::BiWeekly)?;
    let weekly = payment(PaymentFrequency::Weekly)?;

    // Rapid plans derive from the unrounded monthly amount.
    let rapid_bi_weekly = monthly / dec!(2);
    let rapid_weekly = monthly / dec!(4);

    Ok(MortgagePayments {
        monthly: round_currency(monthly),
        semi_monthly: round_currency(semi_monthly),
        bi_weekly: round_currency(bi_weekly),
        weekly: round_currency(weekly),
        rapid_bi_weekly: round_currency(rapid_bi_weekly),
        rapid_weekly: round_currency(rapid_weekly),
    })
}
