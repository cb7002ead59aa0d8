use rust_decimal::{Decimal, RoundingStrategy};

use crate::types::Money;

/// Number of decimal places for every reported amount.
pub const CURRENCY_DP: u32 = 2;

/// Round to cents, ties away from zero (0.125 -> 0.13).
pub fn round_currency(amount: Money) -> Money {
    amount.round_dp_with_strategy(CURRENCY_DP, RoundingStrategy::MidpointAwayFromZero)
}

/// Render an amount as `$1,234.56`: dollar sign, thousands separators and
/// exactly two decimals. Negative amounts render as `-$1,234.56`.
pub fn format_currency(amount: Money) -> String {
    let mut rounded = round_currency(amount);
    rounded.rescale(CURRENCY_DP);

    let negative = rounded < Decimal::ZERO;
    let digits = rounded.abs().to_string();
    let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_currency_half_up() {
        assert_eq!(round_currency(dec!(0.125)), dec!(0.13));
        assert_eq!(round_currency(dec!(2.675)), dec!(2.68));
        assert_eq!(round_currency(dec!(833.3333)), dec!(833.33));
        assert_eq!(round_currency(dec!(-0.125)), dec!(-0.13));
    }

    #[test]
    fn test_format_currency_thousands() {
        assert_eq!(format_currency(dec!(1234567.891)), "$1,234,567.89");
        assert_eq!(format_currency(dec!(1831.17)), "$1,831.17");
        assert_eq!(format_currency(dec!(100000)), "$100,000.00");
    }

    #[test]
    fn test_format_currency_small_values() {
        assert_eq!(format_currency(dec!(421.8)), "$421.80");
        assert_eq!(format_currency(dec!(0)), "$0.00");
        assert_eq!(format_currency(dec!(0.005)), "$0.01");
        assert_eq!(format_currency(dec!(999.999)), "$1,000.00");
    }

    #[test]
    fn test_format_currency_negative() {
        assert_eq!(format_currency(dec!(-2500.5)), "-$2,500.50");
    }
}
