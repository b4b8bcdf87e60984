//! Element and attribute names of the stress test document.
//!
//! Each [`RiskFactorClass`] has one [`SectionLayout`] row. The loader and
//! the dumper both walk this table, so a section's names live in exactly
//! one place.

use pricer_risk::{RiskFactorClass, ShiftShape};

/// Root element.
pub const ROOT: &str = "StressTesting";
/// Stress test element.
pub const STRESS_TEST: &str = "StressTest";
/// Stress test label attribute.
pub const ID: &str = "id";

/// Shift type child.
pub const SHIFT_TYPE: &str = "ShiftType";
/// Shift values child; in a cube entry, the parent of the `Shift` nodes.
pub const SHIFTS: &str = "Shifts";
/// Single cube shift value.
pub const SHIFT: &str = "Shift";
/// Spot shift size child.
pub const SHIFT_SIZE: &str = "ShiftSize";
/// Curve tenor axis.
pub const SHIFT_TENORS: &str = "ShiftTenors";
/// Volatility expiry axis.
pub const SHIFT_EXPIRIES: &str = "ShiftExpiries";
/// Cube term axis.
pub const SHIFT_TERMS: &str = "ShiftTerms";
/// Cube shift expiry attribute.
pub const EXPIRY: &str = "expiry";
/// Cube shift term attribute.
pub const TERM: &str = "term";

/// Names used for one risk factor class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionLayout {
    /// Risk factor class.
    pub class: RiskFactorClass,
    /// Section element, e.g. `DiscountCurves`.
    pub section: &'static str,
    /// Entry element, e.g. `DiscountCurve`.
    pub element: &'static str,
    /// Identifying attribute of an entry.
    pub key_attribute: &'static str,
}

const fn row(
    class: RiskFactorClass,
    section: &'static str,
    element: &'static str,
    key_attribute: &'static str,
) -> SectionLayout {
    SectionLayout {
        class,
        section,
        element,
        key_attribute,
    }
}

/// One row per class, in [`RiskFactorClass::all`] order.
pub const LAYOUTS: [SectionLayout; 10] = [
    row(RiskFactorClass::DiscountCurve, "DiscountCurves", "DiscountCurve", "ccy"),
    row(RiskFactorClass::IndexCurve, "IndexCurves", "IndexCurve", "index"),
    row(RiskFactorClass::YieldCurve, "YieldCurves", "YieldCurve", "name"),
    row(RiskFactorClass::FxSpot, "FxSpots", "FxSpot", "ccypair"),
    row(RiskFactorClass::FxVolatility, "FxVolatilities", "FxVolatility", "ccypair"),
    row(RiskFactorClass::EquitySpot, "EquitySpots", "EquitySpot", "equity"),
    row(RiskFactorClass::EquityVolatility, "EquityVolatilities", "EquityVolatility", "equity"),
    row(RiskFactorClass::SwaptionVolatility, "SwaptionVolatilities", "SwaptionVolatility", "ccy"),
    row(RiskFactorClass::CapFloorVolatility, "CapFloorVolatilities", "CapFloorVolatility", "ccy"),
    row(RiskFactorClass::SecuritySpread, "SecuritySpreads", "SecuritySpread", "security"),
];

/// Section order used when writing a stress test. The cube section comes
/// last.
pub const DUMP_ORDER: [RiskFactorClass; 10] = [
    RiskFactorClass::DiscountCurve,
    RiskFactorClass::IndexCurve,
    RiskFactorClass::YieldCurve,
    RiskFactorClass::FxSpot,
    RiskFactorClass::FxVolatility,
    RiskFactorClass::EquitySpot,
    RiskFactorClass::EquityVolatility,
    RiskFactorClass::SecuritySpread,
    RiskFactorClass::CapFloorVolatility,
    RiskFactorClass::SwaptionVolatility,
];

impl SectionLayout {
    /// Layout row for `class`.
    pub fn for_class(class: RiskFactorClass) -> &'static SectionLayout {
        // LAYOUTS is indexed in declaration order of RiskFactorClass.
        &LAYOUTS[class as usize]
    }

    /// All rows in declaration order.
    pub fn all() -> &'static [SectionLayout] {
        &LAYOUTS
    }

    /// Rows in writing order.
    pub fn dump_order() -> impl Iterator<Item = &'static SectionLayout> {
        DUMP_ORDER.iter().map(|class| Self::for_class(*class))
    }

    /// Whether an entry must carry `ShiftType`.
    #[inline]
    pub fn shift_type_required(&self) -> bool {
        self.class.requires_shift_type()
    }

    /// Shape of the shifts stored in this section.
    pub fn shape(&self) -> ShiftShape {
        self.class.shape()
    }

    /// Axis element paired with `Shifts` for curve and vol sections.
    pub fn axis_element(&self) -> Option<&'static str> {
        match self.shape() {
            ShiftShape::Curve => Some(SHIFT_TENORS),
            ShiftShape::Vol => Some(SHIFT_EXPIRIES),
            ShiftShape::Spot | ShiftShape::VolCube => None,
        }
    }
}
