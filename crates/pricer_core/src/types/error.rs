//! Error types for structured error handling.
//!
//! This module provides:
//! - `PeriodError`: Errors from calendar period parsing

use thiserror::Error;

/// Period parsing errors.
///
/// # Examples
/// ```
/// use pricer_core::types::{Period, PeriodError};
///
/// let err = "5X".parse::<Period>().unwrap_err();
/// assert_eq!(err, PeriodError::UnknownUnit { input: "5X".to_string(), unit: 'X' });
/// assert_eq!(format!("{}", err), "Invalid period '5X': unknown unit 'X'");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PeriodError {
    /// Input was empty or whitespace only.
    #[error("Empty period string")]
    Empty,

    /// Trailing digits without a unit letter (e.g. `"5"`).
    #[error("Invalid period '{0}': missing unit")]
    MissingUnit(String),

    /// Unit letter without a preceding length (e.g. `"Y"`).
    #[error("Invalid period '{0}': missing length")]
    MissingLength(String),

    /// Unit letter outside `D`, `W`, `M`, `Y`.
    #[error("Invalid period '{input}': unknown unit '{unit}'")]
    UnknownUnit {
        /// Original input
        input: String,
        /// Offending character
        unit: char,
    },

    /// Day based and month based units combined (e.g. `"1M2D"`).
    #[error("Invalid period '{0}': cannot mix day and month based units")]
    MixedUnits(String),

    /// Length does not fit the period representation.
    #[error("Invalid period '{0}': length out of range")]
    Overflow(String),
}
