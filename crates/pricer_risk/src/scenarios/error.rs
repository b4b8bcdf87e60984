//! Shift specification error types.
//!
//! Raised by the validating constructors in `shifts` and by
//! `StressTestCase::insert`.

use thiserror::Error;

use super::risk_factor::{RiskFactorClass, ShiftShape};

/// Errors that can occur while building shift specifications.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShiftSpecError {
    /// Shift magnitudes and their axis labels differ in length.
    #[error("Number of {axis} ({axis_len}) does not match number of shifts ({shifts})")]
    SizeMismatch {
        /// Name of the axis (tenors, expiries)
        axis: &'static str,
        /// Number of shift magnitudes
        shifts: usize,
        /// Number of axis labels
        axis_len: usize,
    },

    /// A sequence that must be non-empty was empty.
    #[error("No {0} provided")]
    EmptySequence(&'static str),

    /// Shift type text is neither `Absolute` nor `Relative`.
    #[error("Unknown shift type '{0}': expected Absolute or Relative")]
    UnknownShiftType(String),

    /// Specification shape does not match the risk factor class.
    #[error("Cannot store a {found} shift for {class}: expected a {expected} shift")]
    ShapeMismatch {
        /// Target risk factor class
        class: RiskFactorClass,
        /// Shape the class requires
        expected: ShiftShape,
        /// Shape that was supplied
        found: ShiftShape,
    },

    /// A shift without a shift type was given to a class that requires one.
    #[error("{0} shifts require a shift type")]
    MissingShiftType(RiskFactorClass),

    /// A risk factor key was empty.
    #[error("Empty {kind} key for {class}")]
    EmptyKey {
        /// Target risk factor class
        class: RiskFactorClass,
        /// What the key identifies
        kind: &'static str,
    },
}
