//! # Pricer Risk (L4: Application)
//!
//! Stress test scenario definitions.
//!
//! This crate provides:
//! - Shift types (absolute, relative) and the four shift specification shapes
//!   (curve, spot, volatility term structure, volatility cube)
//! - Risk factor classes covering discount, index and yield curves, FX and
//!   equity spots and volatilities, swaption and cap/floor volatilities,
//!   and security spreads
//! - Named stress tests bundling per-factor shifts, and ordered collections
//!   of stress tests
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            pricer_risk (L4)             │
//! ├─────────────────────────────────────────┤
//! │  scenarios/ - ShiftType, *ShiftSpec,    │
//! │               RiskFactorClass,          │
//! │               StressTestCase,           │
//! │               StressTestCollection      │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │            pricer_core (L1)             │
//! │  Period, TimeUnit                       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! Reading and writing stress test documents lives in `adapter_xml`.
//!
//! ## Example
//!
//! ```
//! use pricer_core::types::Period;
//! use pricer_risk::scenarios::{
//!     CurveShiftSpec, RiskFactorClass, ShiftSpec, ShiftType, StressTestCase,
//!     StressTestCollection,
//! };
//!
//! let spec = CurveShiftSpec::new(
//!     ShiftType::Absolute,
//!     vec![0.0001, 0.0002],
//!     vec![Period::years(1), Period::years(5)],
//! )
//! .unwrap();
//!
//! let mut case = StressTestCase::new("parallel_up");
//! case.insert(RiskFactorClass::DiscountCurve, "USD", ShiftSpec::Curve(spec))
//!     .unwrap();
//!
//! let collection: StressTestCollection = vec![case].into_iter().collect();
//! assert_eq!(collection.len(), 1);
//! assert_eq!(collection.get("parallel_up").unwrap().total_shifts(), 1);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable `Serialize` for all scenario types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod scenarios;

// Re-export commonly used types
pub use scenarios::{
    CurveShiftSpec, RiskFactorClass, ShiftShape, ShiftSpec, ShiftSpecError, ShiftSpecRef,
    ShiftType, SpotShiftSpec, StressTestCase, StressTestCollection, VolCubeShiftSpec,
    VolShiftSpec,
};
