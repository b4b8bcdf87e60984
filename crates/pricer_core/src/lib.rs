//! # pricer_core: Foundation Types for Stress Testing
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Calendar period type: `Period`, `TimeUnit` (`types::period`)
//! - Error types: `PeriodError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::types::{Period, TimeUnit};
//!
//! let tenor: Period = "12M".parse().unwrap();
//! assert_eq!(tenor, Period::new(1, TimeUnit::Years));
//! assert_eq!(tenor.to_string(), "1Y");
//! assert!(tenor > "6M".parse::<Period>().unwrap());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `Period` (as its display string)

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod types;
