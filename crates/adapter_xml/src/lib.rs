//! # Adapter XML (A: Adapter)
//!
//! Reads and writes stress test documents.
//!
//! This crate provides:
//! - An owned XML document tree (`document`) over `quick-xml`
//! - Text codecs for real lists, tenor lists and compact `n*x` repeats (`values`)
//! - The element and attribute names of each section (`layout`)
//! - `load` / `load_str`, turning a document into a validated
//!   [`StressTestCollection`](pricer_risk::StressTestCollection)
//! - `dump` / `dump_to_string`, writing a collection back out in canonical
//!   section order
//!
//! ## Document shape
//!
//! ```text
//! StressTesting
//!   StressTest[id]*
//!     DiscountCurves       -> DiscountCurve[ccy]*
//!     IndexCurves          -> IndexCurve[index]*
//!     YieldCurves          -> YieldCurve[name]*
//!     FxSpots              -> FxSpot[ccypair]*
//!     FxVolatilities       -> FxVolatility[ccypair]*
//!     EquitySpots          -> EquitySpot[equity]*
//!     EquityVolatilities   -> EquityVolatility[equity]*
//!     SwaptionVolatilities -> SwaptionVolatility[ccy]*
//!     CapFloorVolatilities -> CapFloorVolatility[ccy]*
//!     SecuritySpreads      -> SecuritySpread[security]*
//! ```
//!
//! ## Example
//!
//! ```
//! use adapter_xml::{dump_to_string, load_str};
//!
//! let xml = r#"
//! <StressTesting>
//!   <StressTest id="parallel_up">
//!     <DiscountCurves>
//!       <DiscountCurve ccy="USD">
//!         <ShiftType>Absolute</ShiftType>
//!         <Shifts>0.0001</Shifts>
//!         <ShiftTenors>1Y</ShiftTenors>
//!       </DiscountCurve>
//!     </DiscountCurves>
//!   </StressTest>
//! </StressTesting>"#;
//!
//! let collection = load_str(xml).unwrap();
//! assert_eq!(collection.labels(), vec!["parallel_up"]);
//!
//! let written = dump_to_string(&collection, 2).unwrap();
//! assert_eq!(load_str(&written).unwrap(), collection);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod document;
pub mod dumper;
pub mod error;
pub mod layout;
pub mod loader;
pub mod values;

pub use document::XmlNode;
pub use dumper::{dump, dump_to_string};
pub use error::{ErrorContext, LoadError, ValueError, XmlError};
pub use layout::SectionLayout;
pub use loader::{load, load_str};
