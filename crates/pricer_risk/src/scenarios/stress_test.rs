//! Named stress tests and stress test collections.
//!
//! A [`StressTestCase`] bundles one shift mapping per [`RiskFactorClass`]
//! under a label. A [`StressTestCollection`] keeps stress tests in the
//! order they were defined.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::Serialize;

use super::error::ShiftSpecError;
use super::risk_factor::{RiskFactorClass, ShiftShape};
use super::shifts::{
    CurveShiftSpec, ShiftSpec, ShiftSpecRef, SpotShiftSpec, VolCubeShiftSpec, VolShiftSpec,
};

/// A labelled set of shifts applied together.
///
/// Each mapping is keyed by a risk factor identifier (currency, index name,
/// curve name, currency pair, equity or security). Keys are unique per
/// mapping; inserting an existing key replaces the previous entry.
///
/// # Examples
///
/// ```rust
/// use pricer_risk::scenarios::{
///     RiskFactorClass, ShiftSpec, ShiftType, SpotShiftSpec, StressTestCase,
/// };
///
/// let mut case = StressTestCase::new("fx_crash");
/// let spec = |size| ShiftSpec::Spot(SpotShiftSpec::new(ShiftType::Relative, size));
///
/// case.insert(RiskFactorClass::FxSpot, "EURUSD", spec(-0.05)).unwrap();
/// case.insert(RiskFactorClass::FxSpot, "EURUSD", spec(-0.10)).unwrap();
///
/// assert_eq!(case.shift_count(RiskFactorClass::FxSpot), 1);
/// assert_eq!(case.fx_spot_shifts["EURUSD"].shift_size(), -0.10);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct StressTestCase {
    /// Stress test identifier
    pub label: String,
    /// Discount curve shifts keyed by currency
    pub discount_curve_shifts: BTreeMap<String, CurveShiftSpec>,
    /// Index curve shifts keyed by index name
    pub index_curve_shifts: BTreeMap<String, CurveShiftSpec>,
    /// Yield curve shifts keyed by curve name
    pub yield_curve_shifts: BTreeMap<String, CurveShiftSpec>,
    /// FX spot shifts keyed by currency pair
    pub fx_spot_shifts: BTreeMap<String, SpotShiftSpec>,
    /// FX volatility shifts keyed by currency pair
    pub fx_vol_shifts: BTreeMap<String, VolShiftSpec>,
    /// Equity spot shifts keyed by equity name
    pub equity_spot_shifts: BTreeMap<String, SpotShiftSpec>,
    /// Equity volatility shifts keyed by equity name
    pub equity_vol_shifts: BTreeMap<String, VolShiftSpec>,
    /// Swaption volatility cube shifts keyed by currency
    pub swaption_vol_shifts: BTreeMap<String, VolCubeShiftSpec>,
    /// Cap/floor volatility shifts keyed by currency
    pub cap_floor_vol_shifts: BTreeMap<String, VolShiftSpec>,
    /// Security spread shifts keyed by security name
    pub security_spread_shifts: BTreeMap<String, SpotShiftSpec>,
}

fn entries<'a, T>(
    map: &'a BTreeMap<String, T>,
    wrap: fn(&'a T) -> ShiftSpecRef<'a>,
) -> Vec<(&'a str, ShiftSpecRef<'a>)> {
    map.iter().map(|(k, v)| (k.as_str(), wrap(v))).collect()
}

impl StressTestCase {
    /// Creates an empty stress test.
    ///
    /// The label should be non-empty: a stress test is identified by it in
    /// documents, and an empty label does not load back.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Returns the label.
    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Stores `spec` under `key` in the mapping for `class`.
    ///
    /// An existing entry with the same key is replaced.
    ///
    /// # Errors
    ///
    /// - `ShiftSpecError::EmptyKey` if `key` is empty.
    /// - `ShiftSpecError::ShapeMismatch` if the shape of `spec` is not the
    ///   shape `class` accepts.
    /// - `ShiftSpecError::MissingShiftType` if `spec` is a vol shift without
    ///   a shift type and `class` requires one.
    pub fn insert(
        &mut self,
        class: RiskFactorClass,
        key: impl Into<String>,
        spec: ShiftSpec,
    ) -> Result<(), ShiftSpecError> {
        use RiskFactorClass as C;

        let key = key.into();
        if key.is_empty() {
            return Err(ShiftSpecError::EmptyKey {
                class,
                kind: class.key_kind(),
            });
        }
        if let ShiftSpec::Vol(s) = &spec {
            if class.shape() == ShiftShape::Vol
                && class.requires_shift_type()
                && s.shift_type().is_none()
            {
                return Err(ShiftSpecError::MissingShiftType(class));
            }
        }

        match (class, spec) {
            (C::DiscountCurve, ShiftSpec::Curve(s)) => {
                self.discount_curve_shifts.insert(key, s);
            }
            (C::IndexCurve, ShiftSpec::Curve(s)) => {
                self.index_curve_shifts.insert(key, s);
            }
            (C::YieldCurve, ShiftSpec::Curve(s)) => {
                self.yield_curve_shifts.insert(key, s);
            }
            (C::FxSpot, ShiftSpec::Spot(s)) => {
                self.fx_spot_shifts.insert(key, s);
            }
            (C::FxVolatility, ShiftSpec::Vol(s)) => {
                self.fx_vol_shifts.insert(key, s);
            }
            (C::EquitySpot, ShiftSpec::Spot(s)) => {
                self.equity_spot_shifts.insert(key, s);
            }
            (C::EquityVolatility, ShiftSpec::Vol(s)) => {
                self.equity_vol_shifts.insert(key, s);
            }
            (C::SwaptionVolatility, ShiftSpec::VolCube(s)) => {
                self.swaption_vol_shifts.insert(key, s);
            }
            (C::CapFloorVolatility, ShiftSpec::Vol(s)) => {
                self.cap_floor_vol_shifts.insert(key, s);
            }
            (C::SecuritySpread, ShiftSpec::Spot(s)) => {
                self.security_spread_shifts.insert(key, s);
            }
            (class, other) => {
                return Err(ShiftSpecError::ShapeMismatch {
                    class,
                    expected: class.shape(),
                    found: other.shape(),
                })
            }
        }
        Ok(())
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with_shift(
        mut self,
        class: RiskFactorClass,
        key: impl Into<String>,
        spec: ShiftSpec,
    ) -> Result<Self, ShiftSpecError> {
        self.insert(class, key, spec)?;
        Ok(self)
    }

    /// Entries of the mapping for `class`, in key order.
    pub fn shifts(&self, class: RiskFactorClass) -> Vec<(&str, ShiftSpecRef<'_>)> {
        use RiskFactorClass as C;

        match class {
            C::DiscountCurve => entries(&self.discount_curve_shifts, ShiftSpecRef::Curve),
            C::IndexCurve => entries(&self.index_curve_shifts, ShiftSpecRef::Curve),
            C::YieldCurve => entries(&self.yield_curve_shifts, ShiftSpecRef::Curve),
            C::FxSpot => entries(&self.fx_spot_shifts, ShiftSpecRef::Spot),
            C::FxVolatility => entries(&self.fx_vol_shifts, ShiftSpecRef::Vol),
            C::EquitySpot => entries(&self.equity_spot_shifts, ShiftSpecRef::Spot),
            C::EquityVolatility => entries(&self.equity_vol_shifts, ShiftSpecRef::Vol),
            C::SwaptionVolatility => entries(&self.swaption_vol_shifts, ShiftSpecRef::VolCube),
            C::CapFloorVolatility => entries(&self.cap_floor_vol_shifts, ShiftSpecRef::Vol),
            C::SecuritySpread => entries(&self.security_spread_shifts, ShiftSpecRef::Spot),
        }
    }

    /// Number of entries in the mapping for `class`.
    pub fn shift_count(&self, class: RiskFactorClass) -> usize {
        use RiskFactorClass as C;

        match class {
            C::DiscountCurve => self.discount_curve_shifts.len(),
            C::IndexCurve => self.index_curve_shifts.len(),
            C::YieldCurve => self.yield_curve_shifts.len(),
            C::FxSpot => self.fx_spot_shifts.len(),
            C::FxVolatility => self.fx_vol_shifts.len(),
            C::EquitySpot => self.equity_spot_shifts.len(),
            C::EquityVolatility => self.equity_vol_shifts.len(),
            C::SwaptionVolatility => self.swaption_vol_shifts.len(),
            C::CapFloorVolatility => self.cap_floor_vol_shifts.len(),
            C::SecuritySpread => self.security_spread_shifts.len(),
        }
    }

    /// Returns true if the mapping for `class` has entries.
    #[inline]
    pub fn has_shifts(&self, class: RiskFactorClass) -> bool {
        self.shift_count(class) > 0
    }

    /// Total number of entries across all mappings.
    pub fn total_shifts(&self) -> usize {
        RiskFactorClass::all()
            .iter()
            .map(|c| self.shift_count(*c))
            .sum()
    }

    /// Returns true if no mapping has entries.
    pub fn is_empty(&self) -> bool {
        self.total_shifts() == 0
    }
}

/// Ordered sequence of stress tests.
///
/// Order is definition order and is preserved. Labels are expected to be
/// unique but this is not enforced.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(transparent))]
pub struct StressTestCollection {
    cases: Vec<StressTestCase>,
}

impl StressTestCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a stress test.
    pub fn push(&mut self, case: StressTestCase) {
        self.cases.push(case);
    }

    /// Number of stress tests.
    #[inline]
    pub fn len(&self) -> usize {
        self.cases.len()
    }

    /// Returns true if there are no stress tests.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Iterates stress tests in order.
    pub fn iter(&self) -> std::slice::Iter<'_, StressTestCase> {
        self.cases.iter()
    }

    /// Returns the stress tests as a slice.
    #[inline]
    pub fn cases(&self) -> &[StressTestCase] {
        &self.cases
    }

    /// First stress test with the given label.
    pub fn get(&self, label: &str) -> Option<&StressTestCase> {
        self.cases.iter().find(|c| c.label == label)
    }

    /// Labels in order.
    pub fn labels(&self) -> Vec<&str> {
        self.cases.iter().map(|c| c.label.as_str()).collect()
    }
}

impl FromIterator<StressTestCase> for StressTestCollection {
    fn from_iter<I: IntoIterator<Item = StressTestCase>>(iter: I) -> Self {
        Self {
            cases: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for StressTestCollection {
    type Item = StressTestCase;
    type IntoIter = std::vec::IntoIter<StressTestCase>;

    fn into_iter(self) -> Self::IntoIter {
        self.cases.into_iter()
    }
}

impl<'a> IntoIterator for &'a StressTestCollection {
    type Item = &'a StressTestCase;
    type IntoIter = std::slice::Iter<'a, StressTestCase>;

    fn into_iter(self) -> Self::IntoIter {
        self.cases.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenarios::ShiftType;
    use pricer_core::types::Period;

    fn curve(shift: f64) -> ShiftSpec {
        ShiftSpec::Curve(
            CurveShiftSpec::new(ShiftType::Absolute, vec![shift], vec![Period::years(1)]).unwrap(),
        )
    }

    fn spot(shift: f64) -> ShiftSpec {
        ShiftSpec::Spot(SpotShiftSpec::new(ShiftType::Relative, shift))
    }

    fn vol() -> ShiftSpec {
        ShiftSpec::Vol(
            VolShiftSpec::new(None, vec![0.01], vec![Period::months(6)]).unwrap(),
        )
    }

    fn typed_vol() -> ShiftSpec {
        ShiftSpec::Vol(
            VolShiftSpec::new(Some(ShiftType::Absolute), vec![0.01], vec![Period::years(1)])
                .unwrap(),
        )
    }

    fn cube() -> ShiftSpec {
        ShiftSpec::VolCube(
            VolCubeShiftSpec::new(
                ShiftType::Absolute,
                vec![Period::years(5)],
                vec![Period::years(1)],
            )
            .unwrap(),
        )
    }

    // ================================================================
    // StressTestCase
    // ================================================================

    #[test]
    fn test_new_case_is_empty() {
        let case = StressTestCase::new("base");
        assert_eq!(case.label(), "base");
        assert!(case.is_empty());
        for class in RiskFactorClass::all() {
            assert!(!case.has_shifts(*class));
            assert!(case.shifts(*class).is_empty());
        }
    }

    #[test]
    fn test_insert_routes_to_class_mapping() {
        let mut case = StressTestCase::new("mixed");
        case.insert(RiskFactorClass::DiscountCurve, "USD", curve(0.0001))
            .unwrap();
        case.insert(RiskFactorClass::IndexCurve, "USD-SOFR", curve(0.0002))
            .unwrap();
        case.insert(RiskFactorClass::SecuritySpread, "BOND1", spot(0.01))
            .unwrap();
        case.insert(RiskFactorClass::CapFloorVolatility, "EUR", typed_vol())
            .unwrap();
        case.insert(RiskFactorClass::SwaptionVolatility, "EUR", cube())
            .unwrap();

        assert_eq!(case.discount_curve_shifts.len(), 1);
        assert_eq!(case.index_curve_shifts.len(), 1);
        assert_eq!(case.security_spread_shifts.len(), 1);
        assert_eq!(case.cap_floor_vol_shifts.len(), 1);
        assert_eq!(case.swaption_vol_shifts.len(), 1);
        assert!(case.yield_curve_shifts.is_empty());
        assert_eq!(case.total_shifts(), 5);
    }

    #[test]
    fn test_insert_duplicate_key_last_wins() {
        let mut case = StressTestCase::new("dup");
        case.insert(RiskFactorClass::DiscountCurve, "USD", curve(0.0001))
            .unwrap();
        case.insert(RiskFactorClass::DiscountCurve, "USD", curve(0.0005))
            .unwrap();

        assert_eq!(case.shift_count(RiskFactorClass::DiscountCurve), 1);
        assert_eq!(case.discount_curve_shifts["USD"].shifts(), &[0.0005]);
    }

    #[test]
    fn test_insert_shape_mismatch() {
        let mut case = StressTestCase::new("bad");
        let err = case
            .insert(RiskFactorClass::SwaptionVolatility, "EUR", vol())
            .unwrap_err();
        assert_eq!(
            err,
            ShiftSpecError::ShapeMismatch {
                class: RiskFactorClass::SwaptionVolatility,
                expected: ShiftShape::VolCube,
                found: ShiftShape::Vol,
            }
        );
        assert!(case.is_empty());
    }

    #[test]
    fn test_insert_cap_floor_without_shift_type() {
        let mut case = StressTestCase::new("cap");
        let err = case
            .insert(RiskFactorClass::CapFloorVolatility, "USD", vol())
            .unwrap_err();
        assert_eq!(
            err,
            ShiftSpecError::MissingShiftType(RiskFactorClass::CapFloorVolatility)
        );
        assert!(case.is_empty());

        // FX and equity vols may leave it unset.
        case.insert(RiskFactorClass::FxVolatility, "EURUSD", vol())
            .unwrap();
        case.insert(RiskFactorClass::EquityVolatility, "SPX", vol())
            .unwrap();
        assert_eq!(case.total_shifts(), 2);
    }

    #[test]
    fn test_insert_empty_key() {
        let mut case = StressTestCase::new("keys");
        let err = case
            .insert(RiskFactorClass::DiscountCurve, "", curve(0.0001))
            .unwrap_err();
        assert_eq!(
            err,
            ShiftSpecError::EmptyKey {
                class: RiskFactorClass::DiscountCurve,
                kind: "currency",
            }
        );
        assert!(case.is_empty());
    }

    #[test]
    fn test_shifts_in_key_order() {
        let case = StressTestCase::new("order")
            .with_shift(RiskFactorClass::EquitySpot, "SPX", spot(-0.2))
            .unwrap()
            .with_shift(RiskFactorClass::EquitySpot, "DAX", spot(-0.1))
            .unwrap();

        let keys: Vec<&str> = case
            .shifts(RiskFactorClass::EquitySpot)
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, vec!["DAX", "SPX"]);
    }

    #[test]
    fn test_shifts_round_trip_through_insert() {
        let original = StressTestCase::new("copy")
            .with_shift(RiskFactorClass::YieldCurve, "BENCH", curve(0.001))
            .unwrap()
            .with_shift(RiskFactorClass::FxVolatility, "EURUSD", vol())
            .unwrap();

        let mut copy = StressTestCase::new("copy");
        for class in RiskFactorClass::all() {
            for (key, spec) in original.shifts(*class) {
                copy.insert(*class, key, spec.to_spec()).unwrap();
            }
        }
        assert_eq!(copy, original);
    }

    // ================================================================
    // StressTestCollection
    // ================================================================

    #[test]
    fn test_collection_preserves_order() {
        let mut collection = StressTestCollection::new();
        assert!(collection.is_empty());
        collection.push(StressTestCase::new("b"));
        collection.push(StressTestCase::new("a"));
        collection.push(StressTestCase::new("c"));

        assert_eq!(collection.len(), 3);
        assert_eq!(collection.labels(), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_collection_get_first_match() {
        let first = StressTestCase::new("x")
            .with_shift(RiskFactorClass::FxSpot, "USDJPY", spot(0.1))
            .unwrap();
        let collection: StressTestCollection =
            vec![first.clone(), StressTestCase::new("x")].into_iter().collect();

        assert_eq!(collection.get("x"), Some(&first));
        assert!(collection.get("y").is_none());
    }

    #[test]
    fn test_collection_into_iter() {
        let collection: StressTestCollection = ["a", "b"]
            .iter()
            .map(|l| StressTestCase::new(*l))
            .collect();
        let labels: Vec<String> = collection.into_iter().map(|c| c.label).collect();
        assert_eq!(labels, vec!["a", "b"]);
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_collection_serialises_as_list() {
            let collection: StressTestCollection = vec![StressTestCase::new("a")
                .with_shift(RiskFactorClass::FxSpot, "EURUSD", spot(0.05))
                .unwrap()]
            .into_iter()
            .collect();
            let json = serde_json::to_value(&collection).unwrap();
            assert_eq!(json[0]["label"], "a");
            assert_eq!(json[0]["fx_spot_shifts"]["EURUSD"]["shift_size"], 0.05);
        }
    }
}
