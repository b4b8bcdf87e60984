//! Risk factor classes targeted by stress tests.
//!
//! This module provides [`RiskFactorClass`], identifying which market data
//! family a shift applies to, and [`ShiftShape`], the form of shift that
//! family accepts.

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Form of a shift specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum ShiftShape {
    /// Tenor-indexed shifts along a curve.
    Curve,
    /// Single shift of a scalar quote.
    Spot,
    /// Expiry-indexed shifts along a volatility term structure.
    Vol,
    /// Expiry × term grid with a parallel fallback.
    VolCube,
}

impl fmt::Display for ShiftShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Curve => "curve",
            Self::Spot => "spot",
            Self::Vol => "vol",
            Self::VolCube => "vol cube",
        };
        write!(f, "{}", name)
    }
}

/// Risk factor class of a stress test mapping.
///
/// Each [`StressTestCase`](super::StressTestCase) holds one mapping per class,
/// keyed by the identifier named in [`RiskFactorClass::key_kind`].
///
/// # Examples
///
/// ```rust
/// use pricer_risk::scenarios::{RiskFactorClass, ShiftShape};
///
/// assert_eq!(RiskFactorClass::SwaptionVolatility.shape(), ShiftShape::VolCube);
/// assert_eq!(RiskFactorClass::FxSpot.key_kind(), "currency pair");
/// assert_eq!(RiskFactorClass::all().len(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum RiskFactorClass {
    /// Discount curves keyed by currency.
    DiscountCurve,
    /// Index projection curves keyed by index name.
    IndexCurve,
    /// Yield curves keyed by curve name.
    YieldCurve,
    /// FX spot rates keyed by currency pair.
    FxSpot,
    /// FX volatilities keyed by currency pair.
    FxVolatility,
    /// Equity spot prices keyed by equity name.
    EquitySpot,
    /// Equity volatilities keyed by equity name.
    EquityVolatility,
    /// Swaption volatility cubes keyed by currency.
    SwaptionVolatility,
    /// Cap/floor volatilities keyed by currency.
    CapFloorVolatility,
    /// Security spreads keyed by security name.
    SecuritySpread,
}

impl RiskFactorClass {
    const ALL: [RiskFactorClass; 10] = [
        Self::DiscountCurve,
        Self::IndexCurve,
        Self::YieldCurve,
        Self::FxSpot,
        Self::FxVolatility,
        Self::EquitySpot,
        Self::EquityVolatility,
        Self::SwaptionVolatility,
        Self::CapFloorVolatility,
        Self::SecuritySpread,
    ];

    /// All classes in declaration order.
    #[inline]
    pub fn all() -> &'static [RiskFactorClass] {
        &Self::ALL
    }

    /// Returns the class name.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::DiscountCurve => "DiscountCurve",
            Self::IndexCurve => "IndexCurve",
            Self::YieldCurve => "YieldCurve",
            Self::FxSpot => "FxSpot",
            Self::FxVolatility => "FxVolatility",
            Self::EquitySpot => "EquitySpot",
            Self::EquityVolatility => "EquityVolatility",
            Self::SwaptionVolatility => "SwaptionVolatility",
            Self::CapFloorVolatility => "CapFloorVolatility",
            Self::SecuritySpread => "SecuritySpread",
        }
    }

    /// Returns the shape of shift this class accepts.
    #[inline]
    pub fn shape(&self) -> ShiftShape {
        match self {
            Self::DiscountCurve | Self::IndexCurve | Self::YieldCurve => ShiftShape::Curve,
            Self::FxSpot | Self::EquitySpot | Self::SecuritySpread => ShiftShape::Spot,
            Self::FxVolatility | Self::EquityVolatility | Self::CapFloorVolatility => {
                ShiftShape::Vol
            }
            Self::SwaptionVolatility => ShiftShape::VolCube,
        }
    }

    /// Returns true if shifts for this class must carry a shift type.
    ///
    /// Only FX and equity volatilities may leave it unset.
    #[inline]
    pub fn requires_shift_type(&self) -> bool {
        !matches!(self, Self::FxVolatility | Self::EquityVolatility)
    }

    /// Describes what the mapping key identifies.
    #[inline]
    pub fn key_kind(&self) -> &'static str {
        match self {
            Self::DiscountCurve | Self::SwaptionVolatility | Self::CapFloorVolatility => {
                "currency"
            }
            Self::IndexCurve => "index",
            Self::YieldCurve => "curve name",
            Self::FxSpot | Self::FxVolatility => "currency pair",
            Self::EquitySpot | Self::EquityVolatility => "equity",
            Self::SecuritySpread => "security",
        }
    }
}

impl fmt::Display for RiskFactorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
