//! Range slider error types

use thiserror::Error;

/// Configuration errors raised when bounds or a selected range are rejected
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum RangeError {
    /// Minimum is not strictly below maximum
    #[error("Invalid bounds: min ({min}) must be less than max ({max})")]
    InvalidBounds { min: f64, max: f64 },

    /// NaN or infinite input
    #[error("Range values must be finite numbers")]
    NonFinite,

    /// Low handle placed above the high handle
    #[error("Inverted range: low ({low}) is greater than high ({high})")]
    Inverted { low: f64, high: f64 },

    /// Selected range reaches outside the bounds
    #[error("Range ({low}, {high}) lies outside bounds [{min}, {max}]")]
    OutOfBounds {
        low: f64,
        high: f64,
        min: f64,
        max: f64,
    },
}

/// Result type for range slider operations
pub type RangeResult<T> = Result<T, RangeError>;
