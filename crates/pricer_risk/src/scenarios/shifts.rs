//! Shift specifications for stress scenarios.
//!
//! Provides the four shapes of market data shock:
//! - `CurveShiftSpec`: Tenor-indexed shifts of a curve
//! - `SpotShiftSpec`: Single shift of a scalar quote
//! - `VolShiftSpec`: Expiry-indexed shifts of a volatility term structure
//! - `VolCubeShiftSpec`: Sparse expiry × term grid over a parallel shift
//!
//! `ShiftSpec` and `ShiftSpecRef` wrap the shapes so that a stress test can
//! be walked generically, one risk factor class at a time.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use pricer_core::types::Period;

#[cfg(feature = "serde")]
use serde::Serialize;

use super::error::ShiftSpecError;
use super::risk_factor::ShiftShape;

/// How a shift magnitude is applied to the base value.
///
/// # Examples
///
/// ```rust
/// use pricer_risk::scenarios::ShiftType;
///
/// let shift_type: ShiftType = "Relative".parse().unwrap();
/// assert_eq!(shift_type, ShiftType::Relative);
/// assert_eq!(shift_type.to_string(), "Relative");
/// assert!("Parallel".parse::<ShiftType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum ShiftType {
    /// Add the magnitude: `new_value = old_value + shift`
    Absolute,
    /// Scale by the magnitude: `new_value = old_value * (1 + shift)`
    Relative,
}

impl ShiftType {
    /// Returns the canonical document spelling.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Absolute => "Absolute",
            Self::Relative => "Relative",
        }
    }
}

impl fmt::Display for ShiftType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ShiftType {
    type Err = ShiftSpecError;

    /// Parses `Absolute` or `Relative` (case-insensitive, trimmed).
    fn from_str(s: &str) -> Result<Self, ShiftSpecError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "absolute" => Ok(Self::Absolute),
            "relative" => Ok(Self::Relative),
            _ => Err(ShiftSpecError::UnknownShiftType(s.to_string())),
        }
    }
}

/// Tenor-indexed shift of a discount, index or yield curve.
///
/// `shifts()[i]` applies at `tenors()[i]`. Both sequences are non-empty and
/// of equal length.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CurveShiftSpec {
    shift_type: ShiftType,
    shifts: Vec<f64>,
    tenors: Vec<Period>,
}

impl CurveShiftSpec {
    /// Creates a curve shift.
    ///
    /// # Errors
    ///
    /// - `ShiftSpecError::SizeMismatch` if `shifts` and `tenors` differ in length
    /// - `ShiftSpecError::EmptySequence` if no shifts are given
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pricer_core::types::Period;
    /// use pricer_risk::scenarios::{CurveShiftSpec, ShiftSpecError, ShiftType};
    ///
    /// let err = CurveShiftSpec::new(
    ///     ShiftType::Absolute,
    ///     vec![0.001, 0.002, 0.003],
    ///     vec![Period::years(1), Period::years(2)],
    /// )
    /// .unwrap_err();
    /// assert!(matches!(err, ShiftSpecError::SizeMismatch { .. }));
    /// ```
    pub fn new(
        shift_type: ShiftType,
        shifts: Vec<f64>,
        tenors: Vec<Period>,
    ) -> Result<Self, ShiftSpecError> {
        if shifts.len() != tenors.len() {
            return Err(ShiftSpecError::SizeMismatch {
                axis: "tenors",
                shifts: shifts.len(),
                axis_len: tenors.len(),
            });
        }
        if shifts.is_empty() {
            return Err(ShiftSpecError::EmptySequence("shifts"));
        }
        Ok(Self {
            shift_type,
            shifts,
            tenors,
        })
    }

    /// Returns the shift type.
    #[inline]
    pub fn shift_type(&self) -> ShiftType {
        self.shift_type
    }

    /// Returns the shift magnitudes.
    #[inline]
    pub fn shifts(&self) -> &[f64] {
        &self.shifts
    }

    /// Returns the tenors, aligned with [`shifts`](Self::shifts).
    #[inline]
    pub fn tenors(&self) -> &[Period] {
        &self.tenors
    }

    /// Iterates `(tenor, shift)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (Period, f64)> + '_ {
        self.tenors.iter().copied().zip(self.shifts.iter().copied())
    }
}

/// Single shift of an FX spot, equity spot or security spread.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SpotShiftSpec {
    shift_type: ShiftType,
    shift_size: f64,
}

impl SpotShiftSpec {
    /// Creates a spot shift.
    pub fn new(shift_type: ShiftType, shift_size: f64) -> Self {
        Self {
            shift_type,
            shift_size,
        }
    }

    /// Returns the shift type.
    #[inline]
    pub fn shift_type(&self) -> ShiftType {
        self.shift_type
    }

    /// Returns the shift magnitude.
    #[inline]
    pub fn shift_size(&self) -> f64 {
        self.shift_size
    }
}

/// Expiry-indexed shift of an FX, equity or cap/floor volatility.
///
/// Same layout as [`CurveShiftSpec`] with an expiry axis. The shift type
/// may be unset, and an empty specification is accepted.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct VolShiftSpec {
    shift_type: Option<ShiftType>,
    shifts: Vec<f64>,
    expiries: Vec<Period>,
}

impl VolShiftSpec {
    /// Creates a volatility shift.
    ///
    /// # Errors
    ///
    /// Returns `ShiftSpecError::SizeMismatch` if `shifts` and `expiries`
    /// differ in length.
    pub fn new(
        shift_type: Option<ShiftType>,
        shifts: Vec<f64>,
        expiries: Vec<Period>,
    ) -> Result<Self, ShiftSpecError> {
        if shifts.len() != expiries.len() {
            return Err(ShiftSpecError::SizeMismatch {
                axis: "expiries",
                shifts: shifts.len(),
                axis_len: expiries.len(),
            });
        }
        Ok(Self {
            shift_type,
            shifts,
            expiries,
        })
    }

    /// Returns the shift type, if one was given.
    #[inline]
    pub fn shift_type(&self) -> Option<ShiftType> {
        self.shift_type
    }

    /// Returns the shift magnitudes.
    #[inline]
    pub fn shifts(&self) -> &[f64] {
        &self.shifts
    }

    /// Returns the expiries, aligned with [`shifts`](Self::shifts).
    #[inline]
    pub fn expiries(&self) -> &[Period] {
        &self.expiries
    }

    /// Iterates `(expiry, shift)` pairs.
    pub fn points(&self) -> impl Iterator<Item = (Period, f64)> + '_ {
        self.expiries.iter().copied().zip(self.shifts.iter().copied())
    }
}

/// Two-dimensional shift of a swaption volatility cube.
///
/// `terms` and `expiries` declare the axes of the shock. `grid_shifts` is a
/// sparse override map keyed by `(expiry, term)`; any point without an
/// override receives `parallel_shift`. Grid keys need not appear on the
/// declared axes.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::Period;
/// use pricer_risk::scenarios::{ShiftType, VolCubeShiftSpec};
///
/// let cube = VolCubeShiftSpec::new(
///     ShiftType::Absolute,
///     vec![Period::years(5), Period::years(10)],
///     vec![Period::years(1), Period::years(2)],
/// )
/// .unwrap()
/// .with_parallel_shift(0.001)
/// .with_grid_shift(Period::years(1), Period::years(5), 0.002);
///
/// assert_eq!(cube.shift_at(Period::years(1), Period::years(5)), 0.002);
/// assert_eq!(cube.shift_at(Period::years(2), Period::years(10)), 0.001);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct VolCubeShiftSpec {
    shift_type: ShiftType,
    terms: Vec<Period>,
    expiries: Vec<Period>,
    parallel_shift: f64,
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_grid"))]
    grid_shifts: BTreeMap<(Period, Period), f64>,
}

impl VolCubeShiftSpec {
    /// Creates a cube shift with a zero parallel shift and no grid overrides.
    ///
    /// # Errors
    ///
    /// Returns `ShiftSpecError::EmptySequence` if either axis is empty.
    pub fn new(
        shift_type: ShiftType,
        terms: Vec<Period>,
        expiries: Vec<Period>,
    ) -> Result<Self, ShiftSpecError> {
        if terms.is_empty() {
            return Err(ShiftSpecError::EmptySequence("terms"));
        }
        if expiries.is_empty() {
            return Err(ShiftSpecError::EmptySequence("expiries"));
        }
        Ok(Self {
            shift_type,
            terms,
            expiries,
            parallel_shift: 0.0,
            grid_shifts: BTreeMap::new(),
        })
    }

    /// Sets the parallel shift.
    pub fn with_parallel_shift(mut self, shift: f64) -> Self {
        self.parallel_shift = shift;
        self
    }

    /// Adds a grid override.
    pub fn with_grid_shift(mut self, expiry: Period, term: Period, shift: f64) -> Self {
        self.grid_shifts.insert((expiry, term), shift);
        self
    }

    /// Replaces the parallel shift.
    pub fn set_parallel_shift(&mut self, shift: f64) {
        self.parallel_shift = shift;
    }

    /// Inserts a grid override, returning the value it replaced.
    pub fn insert_grid_shift(&mut self, expiry: Period, term: Period, shift: f64) -> Option<f64> {
        self.grid_shifts.insert((expiry, term), shift)
    }

    /// Returns the shift type.
    #[inline]
    pub fn shift_type(&self) -> ShiftType {
        self.shift_type
    }

    /// Returns the declared term axis.
    #[inline]
    pub fn terms(&self) -> &[Period] {
        &self.terms
    }

    /// Returns the declared expiry axis.
    #[inline]
    pub fn expiries(&self) -> &[Period] {
        &self.expiries
    }

    /// Returns the parallel shift.
    #[inline]
    pub fn parallel_shift(&self) -> f64 {
        self.parallel_shift
    }

    /// Returns the grid overrides keyed by `(expiry, term)`.
    #[inline]
    pub fn grid_shifts(&self) -> &BTreeMap<(Period, Period), f64> {
        &self.grid_shifts
    }

    /// Shift applying at `(expiry, term)`: the override if present, else
    /// the parallel shift.
    pub fn shift_at(&self, expiry: Period, term: Period) -> f64 {
        self.grid_shifts
            .get(&(expiry, term))
            .copied()
            .unwrap_or(self.parallel_shift)
    }
}

#[cfg(feature = "serde")]
fn serialize_grid<S>(
    grid: &BTreeMap<(Period, Period), f64>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    use serde::ser::SerializeSeq;

    #[derive(Serialize)]
    struct GridPoint<'a> {
        expiry: &'a Period,
        term: &'a Period,
        shift: f64,
    }

    let mut seq = serializer.serialize_seq(Some(grid.len()))?;
    for ((expiry, term), shift) in grid {
        seq.serialize_element(&GridPoint {
            expiry,
            term,
            shift: *shift,
        })?;
    }
    seq.end()
}

/// Owned shift specification of any shape.
#[derive(Debug, Clone, PartialEq)]
pub enum ShiftSpec {
    /// Curve shift
    Curve(CurveShiftSpec),
    /// Spot shift
    Spot(SpotShiftSpec),
    /// Volatility term structure shift
    Vol(VolShiftSpec),
    /// Volatility cube shift
    VolCube(VolCubeShiftSpec),
}

impl ShiftSpec {
    /// Returns the shape of this specification.
    pub fn shape(&self) -> ShiftShape {
        match self {
            Self::Curve(_) => ShiftShape::Curve,
            Self::Spot(_) => ShiftShape::Spot,
            Self::Vol(_) => ShiftShape::Vol,
            Self::VolCube(_) => ShiftShape::VolCube,
        }
    }

    /// Borrows this specification.
    pub fn as_spec_ref(&self) -> ShiftSpecRef<'_> {
        match self {
            Self::Curve(s) => ShiftSpecRef::Curve(s),
            Self::Spot(s) => ShiftSpecRef::Spot(s),
            Self::Vol(s) => ShiftSpecRef::Vol(s),
            Self::VolCube(s) => ShiftSpecRef::VolCube(s),
        }
    }
}

/// Borrowed shift specification of any shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShiftSpecRef<'a> {
    /// Curve shift
    Curve(&'a CurveShiftSpec),
    /// Spot shift
    Spot(&'a SpotShiftSpec),
    /// Volatility term structure shift
    Vol(&'a VolShiftSpec),
    /// Volatility cube shift
    VolCube(&'a VolCubeShiftSpec),
}

impl ShiftSpecRef<'_> {
    /// Returns the shape of the referenced specification.
    pub fn shape(&self) -> ShiftShape {
        match self {
            Self::Curve(_) => ShiftShape::Curve,
            Self::Spot(_) => ShiftShape::Spot,
            Self::Vol(_) => ShiftShape::Vol,
            Self::VolCube(_) => ShiftShape::VolCube,
        }
    }

    /// Clones the referenced specification.
    pub fn to_spec(&self) -> ShiftSpec {
        match *self {
            Self::Curve(s) => ShiftSpec::Curve(s.clone()),
            Self::Spot(s) => ShiftSpec::Spot(*s),
            Self::Vol(s) => ShiftSpec::Vol(s.clone()),
            Self::VolCube(s) => ShiftSpec::VolCube(s.clone()),
        }
    }
}
