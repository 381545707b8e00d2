//! FX error types.

use thiserror::Error;

/// Errors that can occur while converting an amount.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FxError {
    /// The amount string holds no usable number.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// The converted value does not fit the decimal range.
    #[error("Converted amount out of range")]
    AmountOutOfRange,
}

/// Result type for FX operations.
pub type FxResult<T> = Result<T, FxError>;
