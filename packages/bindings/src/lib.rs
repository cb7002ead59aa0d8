use napi::Result as NapiResult;
use napi_derive::napi;

use mortgage_payments_core::payments::breakdown;
use mortgage_payments_core::payments::calculator::{self, PaymentInput};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn parse_terms(input_json: &str) -> NapiResult<PaymentInput> {
    PaymentInput::from_json(input_json).map_err(to_napi_error)
}

#[napi]
pub fn mortgage_payments(input_json: String) -> NapiResult<String> {
    let input = parse_terms(&input_json)?;
    let output = calculator::calculate_mortgage_payments(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn payment_breakdown(input_json: String) -> NapiResult<String> {
    let input = parse_terms(&input_json)?;
    let output = breakdown::payment_breakdown(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
