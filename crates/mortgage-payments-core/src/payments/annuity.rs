use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;

use crate::error::MortgageError;
use crate::types::{Money, Rate};
use crate::MortgageResult;

/// Level payment that fully amortizes `principal` over `periods` at
/// `rate` per period: `P * r / (1 - (1 + r)^-n)`.
///
/// A zero (or non-positive) rate falls back to straight-line `P / n`.
/// When `(1 + r)^n` exceeds the Decimal range the discount term is
/// treated as zero, which yields the interest-only limit `P * r`.
pub fn annuity_payment(principal: Money, rate: Rate, periods: u64) -> MortgageResult<Money> {
    if periods == 0 {
        return Err(MortgageError::InvalidInput {
            field: "periods".into(),
            reason: "Number of periods must be > 0".into(),
        });
    }

    if rate <= Decimal::ZERO {
        return Ok(principal / Decimal::from(periods));
    }

    let discount = match (Decimal::ONE + rate).checked_powu(periods) {
        Some(factor) if !factor.is_zero() => Decimal::ONE / factor,
        Some(_) => {
            return Err(MortgageError::DivisionByZero {
                context: "annuity growth factor".into(),
            })
        }
        None => Decimal::ZERO,
    };

    let denominator = Decimal::ONE - discount;
    if denominator.is_zero() {
        return Err(MortgageError::DivisionByZero {
            context: "annuity payment denominator".into(),
        });
    }

    principal
        .checked_mul(rate)
        .and_then(|interest| interest.checked_div(denominator))
        .ok_or_else(|| MortgageError::InvalidInput {
            field: "principal".into(),
            reason: "Principal is too large for the payment to be represented".into(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_annuity_payment_basic() {
        // 1000 over 12 periods at 1%: 88.8488...
        let pmt = annuity_payment(dec!(1000), dec!(0.01), 12).unwrap();
        assert!((pmt - dec!(88.8488)).abs() < dec!(0.0001));
    }

    #[test]
    fn test_annuity_payment_zero_rate_is_straight_line() {
        let pmt = annuity_payment(dec!(1200), Decimal::ZERO, 12).unwrap();
        assert_eq!(pmt, dec!(100));
    }

    #[test]
    fn test_annuity_payment_single_period() {
        // One period: repay principal plus one period of interest.
        let pmt = annuity_payment(dec!(1000), dec!(0.05), 1).unwrap();
        assert!((pmt - dec!(1050)).abs() < dec!(0.0000001));
    }

    #[test]
    fn test_annuity_payment_zero_periods_rejected() {
        let err = annuity_payment(dec!(1000), dec!(0.01), 0).unwrap_err();
        assert!(matches!(err, MortgageError::InvalidInput { .. }));
    }

    #[test]
    fn test_annuity_payment_out_of_range_principal_rejected() {
        let err = annuity_payment(dec!(70000000000000000000000000000), dec!(1.8), 12).unwrap_err();
        match err {
            MortgageError::InvalidInput { field, .. } => assert_eq!(field, "principal"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_annuity_payment_overflow_tends_to_interest_only() {
        let pmt = annuity_payment(dec!(1000), dec!(0.5), 1_000_000).unwrap();
        assert_eq!(pmt, dec!(500));
    }
}
