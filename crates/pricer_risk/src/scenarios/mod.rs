//! Stress scenario definitions.
//!
//! This module provides the in-memory schema of a stress test document:
//! - Shift specifications per risk factor (curve, spot, vol, vol cube)
//! - Risk factor classes and the shape of shift each one takes
//! - Named stress tests and ordered collections of them
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │               StressTestCollection               │
//! ├──────────────────────────────────────────────────┤
//! │  StressTestCase   - label + one map per class    │
//! │  RiskFactorClass  - class → ShiftShape           │
//! │  ShiftSpec        - Curve | Spot | Vol | VolCube │
//! │  ShiftType        - Absolute | Relative          │
//! └──────────────────────────────────────────────────┘
//! ```
//!
//! Every shift specification is validated when it is constructed, so a
//! collection built through these types is always internally consistent.

mod error;
mod risk_factor;
mod shifts;
mod stress_test;

pub use error::ShiftSpecError;
pub use risk_factor::{RiskFactorClass, ShiftShape};
pub use shifts::{
    CurveShiftSpec, ShiftSpec, ShiftSpecRef, ShiftType, SpotShiftSpec, VolCubeShiftSpec,
    VolShiftSpec,
};
pub use stress_test::{StressTestCase, StressTestCollection};
