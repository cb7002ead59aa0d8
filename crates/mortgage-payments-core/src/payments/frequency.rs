use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::MortgageError;
use crate::types::Rate;
use crate::MortgageResult;

/// Compounding periods per year for the quoted nominal rate.
const COMPOUNDING_PER_YEAR: Decimal = dec!(2);

/// Standard (non-accelerated) payment frequencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentFrequency {
    Monthly,
    SemiMonthly,
    BiWeekly,
    Weekly,
}

impl PaymentFrequency {
    /// Every standard frequency, in output order.
    pub const ALL: [PaymentFrequency; 4] = [
        PaymentFrequency::Monthly,
        PaymentFrequency::SemiMonthly,
        PaymentFrequency::BiWeekly,
        PaymentFrequency::Weekly,
    ];

    pub fn periods_per_year(self) -> u32 {
        match self {
            PaymentFrequency::Monthly => 12,
            PaymentFrequency::SemiMonthly => 24,
            PaymentFrequency::BiWeekly => 26,
            PaymentFrequency::Weekly => 52,
        }
    }

    /// Total number of payments over the amortization period.
    pub fn total_periods(self, amortization_years: u32) -> u64 {
        u64::from(amortization_years) * u64::from(self.periods_per_year())
    }

    pub fn label(self) -> &'static str {
        match self {
            PaymentFrequency::Monthly => "Monthly",
            PaymentFrequency::SemiMonthly => "Semi-monthly",
            PaymentFrequency::BiWeekly => "Bi-weekly",
            PaymentFrequency::Weekly => "Weekly",
        }
    }
}

impl fmt::Display for PaymentFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Effective rate per payment period equivalent to a nominal annual rate
/// compounded semi-annually: `(1 + rq/2)^(2/p) - 1`.
///
/// `annual_rate` is a decimal rate (0.055 for 5.5%), not a percentage.
pub fn periodic_rate(annual_rate: Rate, frequency: PaymentFrequency) -> MortgageResult<Rate> {
    if annual_rate.is_zero() {
        return Ok(Decimal::ZERO);
    }

    let base = Decimal::ONE + annual_rate / COMPOUNDING_PER_YEAR;
    let exponent = COMPOUNDING_PER_YEAR / Decimal::from(frequency.periods_per_year());

    let growth = base
        .checked_powd(exponent)
        .ok_or_else(|| MortgageError::invalid("annual_rate_percent", "Rate is out of range"))?;

    Ok(growth - Decimal::ONE)
}

/// Effective annual rate implied by semi-annual compounding: `(1 + rq/2)^2 - 1`.
pub fn effective_annual_rate(annual_rate: Rate) -> MortgageResult<Rate> {
    let half = Decimal::ONE + annual_rate / COMPOUNDING_PER_YEAR;
    half.checked_mul(half)
        .map(|growth| growth - Decimal::ONE)
        .ok_or_else(|| MortgageError::invalid("annual_rate_percent", "Rate is out of range"))
}
