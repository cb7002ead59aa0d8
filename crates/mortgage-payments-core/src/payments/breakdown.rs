use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::MortgageError;
use crate::payments::calculator::{percent_to_rate, standard_payment, PaymentInput};
use crate::payments::currency::round_currency;
use crate::payments::frequency::{effective_annual_rate, PaymentFrequency};
use crate::payments::validation::{input_warnings, validate_input};
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::MortgageResult;

/// Lifetime totals for one standard payment frequency.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrequencyBreakdown {
    pub frequency: PaymentFrequency,
    pub periods_per_year: u32,
    pub total_periods: u64,
    /// Effective rate per period (unrounded).
    pub periodic_rate: Rate,
    pub payment: Money,
    pub total_paid: Money,
    pub total_interest: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentBreakdown {
    /// Annual rate after semi-annual compounding.
    pub effective_annual_rate: Rate,
    pub frequencies: Vec<FrequencyBreakdown>,
}

/// Per-frequency rate, payment count and lifetime cost of the loan.
///
/// Totals are taken from the unrounded payment, so `total_paid` may differ
/// by a few cents from `payment * total_periods`.
pub fn payment_breakdown(input: &PaymentInput) -> MortgageResult<ComputationOutput<PaymentBreakdown>> {
    let start = Instant::now();
    validate_input(input)?;

    let warnings = input_warnings(input);
    let annual_rate = percent_to_rate(input.annual_rate_percent);

    let mut frequencies = Vec::with_capacity(PaymentFrequency::ALL.len());
    for frequency in PaymentFrequency::ALL {
        let (rate, payment) = standard_payment(
            input.principal,
            annual_rate,
            input.amortization_years,
            frequency,
        )?;
        let total_periods = frequency.total_periods(input.amortization_years);
        let total_paid = payment
            .checked_mul(Decimal::from(total_periods))
            .ok_or_else(|| MortgageError::InvalidInput {
                field: "principal".into(),
                reason: format!("Lifetime {frequency} total exceeds the representable range"),
            })?;
        let total_interest = (total_paid - input.principal).max(Decimal::ZERO);

        frequencies.push(FrequencyBreakdown {
            frequency,
            periods_per_year: frequency.periods_per_year(),
            total_periods,
            periodic_rate: rate,
            payment: round_currency(payment),
            total_paid: round_currency(total_paid),
            total_interest: round_currency(total_interest),
        });
    }

    let output = PaymentBreakdown {
        effective_annual_rate: effective_annual_rate(annual_rate)?,
        frequencies,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Lifetime cost per payment frequency under semi-annual compounding",
        input,
        warnings,
        elapsed,
        output,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn reference_input() -> PaymentInput {
        PaymentInput {
            principal: dec!(300000),
            annual_rate_percent: dec!(5.5),
            amortization_years: 25,
        }
    }

    #[test]
    fn test_breakdown_lists_standard_frequencies() {
        let out = payment_breakdown(&reference_input()).unwrap();
        let freqs: Vec<PaymentFrequency> =
            out.result.frequencies.iter().map(|f| f.frequency).collect();
        assert_eq!(freqs, PaymentFrequency::ALL.to_vec());
        assert_eq!(out.result.frequencies[3].total_periods, 1300);
    }

    #[test]
    fn test_breakdown_monthly_totals() {
        let out = payment_breakdown(&reference_input()).unwrap();
        let monthly = &out.result.frequencies[0];
        assert_eq!(monthly.payment, dec!(1831.17));
        assert_eq!(monthly.total_paid, dec!(549352.33));
        assert_eq!(monthly.total_interest, dec!(249352.33));
    }

    #[test]
    fn test_more_frequent_payments_cost_less_interest() {
        let out = payment_breakdown(&reference_input()).unwrap();
        let interest: Vec<Money> = out
            .result
            .frequencies
            .iter()
            .map(|f| f.total_interest)
            .collect();
        assert!(interest.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_zero_rate_has_no_interest() {
        let input = PaymentInput {
            principal: dec!(100000),
            annual_rate_percent: Decimal::ZERO,
            amortization_years: 10,
        };
        let out = payment_breakdown(&input).unwrap();
        assert_eq!(out.result.effective_annual_rate, Decimal::ZERO);
        for f in &out.result.frequencies {
            assert_eq!(f.total_interest, Decimal::ZERO);
            assert_eq!(f.total_paid, dec!(100000));
        }
    }

    #[test]
    fn test_lifetime_total_overflow_is_an_error() {
        let input = PaymentInput {
            principal: dec!(10000000000000000000000000000),
            annual_rate_percent: dec!(5),
            amortization_years: 1000,
        };
        match payment_breakdown(&input) {
            Err(MortgageError::InvalidInput { field, reason }) => {
                assert_eq!(field, "principal");
                assert!(reason.contains("Monthly"));
            }
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_effective_annual_rate_reported() {
        let out = payment_breakdown(&reference_input()).unwrap();
        // (1.0275)^2 - 1
        assert_eq!(out.result.effective_annual_rate, dec!(0.05575625));
    }
}
