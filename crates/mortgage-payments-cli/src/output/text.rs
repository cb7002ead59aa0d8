use rust_decimal::Decimal;
use serde_json::{Map, Value};
use std::str::FromStr;

use mortgage_payments_core::payments::currency::format_currency;

use super::{format_scalar, result_of};

/// Payment fields in console order, with their labels.
const PAYMENT_LINES: [(&str, &str); 6] = [
    ("monthly", "Monthly"),
    ("semi_monthly", "Semi-monthly"),
    ("bi_weekly", "Bi-weekly"),
    ("weekly", "Weekly"),
    ("rapid_bi_weekly", "Rapid Bi-weekly"),
    ("rapid_weekly", "Rapid Weekly"),
];

/// Human-readable console output: one `Label: $1,234.56` line per amount.
pub fn print_text(value: &Value) {
    for line in text_lines(value) {
        println!("{}", line);
    }
}

fn text_lines(value: &Value) -> Vec<String> {
    let Value::Object(result) = result_of(value) else {
        return vec![format_scalar(value)];
    };

    if let Some(Value::Array(rows)) = result.get("frequencies") {
        return rows
            .iter()
            .filter_map(Value::as_object)
            .map(breakdown_line)
            .collect();
    }

    PAYMENT_LINES
        .iter()
        .filter_map(|(key, label)| {
            result
                .get(*key)
                .map(|v| format!("{} Payment: {}", label, currency(v)))
        })
        .collect()
}

fn breakdown_line(row: &Map<String, Value>) -> String {
    let label = row
        .get("frequency")
        .and_then(Value::as_str)
        .map(frequency_label)
        .unwrap_or("Unknown");
    let field = |key: &str| row.get(key).map(currency).unwrap_or_default();

    format!(
        "{}: {} x {} = {} (interest {})",
        label,
        field("payment"),
        row.get("total_periods").map(format_scalar).unwrap_or_default(),
        field("total_paid"),
        field("total_interest"),
    )
}

fn frequency_label(key: &str) -> &'static str {
    PAYMENT_LINES
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, label)| *label)
        .unwrap_or("Unknown")
}

fn currency(value: &Value) -> String {
    let raw = format_scalar(value);
    match Decimal::from_str(&raw) {
        Ok(amount) => format_currency(amount),
        Err(_) => raw,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_payment_lines_in_console_order() {
        let v = json!({
            "result": {
                "bi_weekly": "844.13",
                "monthly": "1831.17",
                "rapid_bi_weekly": "915.59",
                "rapid_weekly": "457.79",
                "semi_monthly": "914.55",
                "weekly": "421.84"
            }
        });
        assert_eq!(
            text_lines(&v),
            vec![
                "Monthly Payment: $1,831.17",
                "Semi-monthly Payment: $914.55",
                "Bi-weekly Payment: $844.13",
                "Weekly Payment: $421.84",
                "Rapid Bi-weekly Payment: $915.59",
                "Rapid Weekly Payment: $457.79",
            ]
        );
    }

    #[test]
    fn test_breakdown_lines() {
        let v = json!({
            "result": {
                "effective_annual_rate": "0.05575625",
                "frequencies": [{
                    "frequency": "monthly",
                    "payment": "1831.17",
                    "total_periods": 300,
                    "total_paid": "549352.33",
                    "total_interest": "249352.33"
                }]
            }
        });
        assert_eq!(
            text_lines(&v),
            vec!["Monthly: $1,831.17 x 300 = $549,352.33 (interest $249,352.33)"]
        );
    }
}
