//! Mortgage payment calculations under Canadian convention: the quoted
//! nominal rate compounds semi-annually and is converted to an equivalent
//! effective rate per payment period before the annuity formula is applied.

pub mod annuity;
pub mod calculator;
pub mod currency;
pub mod frequency;
pub mod validation;

#[cfg(feature = "breakdown")]
pub mod breakdown;
