//! Error types for parameter validation
//!
//! The formatting, sanitizing and APR operations themselves are total and
//! never fail. Errors only come from building validated parameters
//! (fraction digits, APR inputs, tab names) out of untrusted values.

use thiserror::Error;

/// Validation errors raised when constructing display parameters
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DisplayError {
    /// Maximum fraction digits outside the formatter's legal range
    #[error("maximum fraction digits {value} out of range 0..={max}")]
    FractionDigitsOutOfRange { value: u32, max: u8 },

    /// APR parameter failed validation
    #[error("invalid APR parameter {name}: {value}")]
    InvalidAprParameter { name: &'static str, value: f64 },

    /// Tab query did not match any manage tab
    #[error("unknown manage tab: '{0}'")]
    UnknownTab(String),
}

pub type Result<T> = std::result::Result<T, DisplayError>;
