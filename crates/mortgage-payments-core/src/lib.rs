pub mod error;
pub mod types;

#[cfg(feature = "payments")]
pub mod payments;

pub use error::MortgageError;
pub use types::*;

/// Standard result type for all mortgage-payments operations
pub type MortgageResult<T> = Result<T, MortgageError>;
