use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::MortgageError;
use crate::payments::calculator::PaymentInput;
use crate::types::Money;
use crate::MortgageResult;

/// Nominal rate (in percent) above which a warning is attached.
const HIGH_RATE_PERCENT: Decimal = dec!(20);

/// Amortization (in years) above which a warning is attached.
const LONG_AMORTIZATION_YEARS: u32 = 40;

/// Reject inputs the payment formula is not defined for.
pub fn validate_input(input: &PaymentInput) -> MortgageResult<()> {
    validate_terms(
        input.principal,
        input.annual_rate_percent,
        input.amortization_years,
    )
}

pub(crate) fn validate_terms(
    principal: Money,
    annual_rate_percent: Decimal,
    amortization_years: u32,
) -> MortgageResult<()> {
    if principal <= Decimal::ZERO {
        return Err(MortgageError::invalid(
            "principal",
            "Principal must be positive",
        ));
    }
    if annual_rate_percent < Decimal::ZERO {
        return Err(MortgageError::invalid(
            "annual_rate_percent",
            "Annual rate cannot be negative",
        ));
    }
    if amortization_years == 0 {
        return Err(MortgageError::invalid(
            "amortization_years",
            "Amortization period must be at least one year",
        ));
    }
    Ok(())
}

/// Non-fatal observations about otherwise valid input.
pub fn input_warnings(input: &PaymentInput) -> Vec<String> {
    let mut warnings = Vec::new();

    if input.annual_rate_percent.is_zero() {
        warnings.push("Zero interest rate: payments use straight-line amortization".into());
    } else if input.annual_rate_percent > HIGH_RATE_PERCENT {
        warnings.push(format!(
            "Annual rate of {}% is unusually high for a mortgage",
            input.annual_rate_percent
        ));
    }

    if input.amortization_years > LONG_AMORTIZATION_YEARS {
        warnings.push(format!(
            "Amortization of {} years exceeds the typical {}-year maximum",
            input.amortization_years, LONG_AMORTIZATION_YEARS
        ));
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(principal: Decimal, rate: Decimal, years: u32) -> PaymentInput {
        PaymentInput {
            principal,
            annual_rate_percent: rate,
            amortization_years: years,
        }
    }

    fn rejected_field(input: &PaymentInput) -> String {
        match validate_input(input) {
            Err(MortgageError::InvalidInput { field, .. }) => field,
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_input_passes() {
        assert!(validate_input(&input(dec!(300000), dec!(5.5), 25)).is_ok());
        assert!(validate_input(&input(dec!(1), dec!(0), 1)).is_ok());
    }

    #[test]
    fn test_rejects_non_positive_principal() {
        assert_eq!(rejected_field(&input(dec!(0), dec!(5), 25)), "principal");
        assert_eq!(rejected_field(&input(dec!(-10), dec!(5), 25)), "principal");
    }

    #[test]
    fn test_rejects_negative_rate() {
        assert_eq!(
            rejected_field(&input(dec!(1000), dec!(-0.01), 25)),
            "annual_rate_percent"
        );
    }

    #[test]
    fn test_rejects_zero_amortization() {
        assert_eq!(
            rejected_field(&input(dec!(1000), dec!(5), 0)),
            "amortization_years"
        );
    }

    #[test]
    fn test_warnings() {
        assert!(input_warnings(&input(dec!(1000), dec!(5), 25)).is_empty());
        assert_eq!(input_warnings(&input(dec!(1000), dec!(0), 25)).len(), 1);
        assert_eq!(input_warnings(&input(dec!(1000), dec!(25), 50)).len(), 2);
    }
}
