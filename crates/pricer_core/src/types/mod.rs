//! Core value types.
//!
//! This module provides:
//! - `period`: Calendar periods (tenors, expiries, terms) such as `3M` or `5Y`
//! - `error`: Structured error types for period parsing
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Period`], [`TimeUnit`] from `period`
//! - [`PeriodError`] from `error`

pub mod error;
pub mod period;

// Re-export commonly used types at module level
pub use error::PeriodError;
pub use period::{Period, TimeUnit};
