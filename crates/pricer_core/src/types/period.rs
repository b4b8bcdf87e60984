//! Calendar periods for tenor, expiry and term axes.
//!
//! A [`Period`] is a signed length paired with a [`TimeUnit`]. Values are
//! normalised on construction so that equal calendar lengths compare equal
//! regardless of how they were written (`12M == 1Y`, `14D == 2W`).
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::{Period, TimeUnit};
//!
//! let expiry: Period = "1Y6M".parse().unwrap();
//! assert_eq!(expiry, Period::new(18, TimeUnit::Months));
//! assert_eq!(expiry.to_string(), "18M");
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::PeriodError;

/// Calendar unit of a [`Period`].
///
/// Declaration order is used as the tie-breaker when two periods have the
/// same approximate length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TimeUnit {
    /// Calendar days
    Days,
    /// Weeks of seven days
    Weeks,
    /// Calendar months
    Months,
    /// Years of twelve months
    Years,
}

impl TimeUnit {
    /// Returns the single-letter symbol used in period strings.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::TimeUnit;
    ///
    /// assert_eq!(TimeUnit::Months.symbol(), 'M');
    /// ```
    #[inline]
    pub fn symbol(&self) -> char {
        match self {
            TimeUnit::Days => 'D',
            TimeUnit::Weeks => 'W',
            TimeUnit::Months => 'M',
            TimeUnit::Years => 'Y',
        }
    }

    /// Approximate number of days in one unit, used for ordering only.
    #[inline]
    pub fn approximate_days(&self) -> i64 {
        match self {
            TimeUnit::Days => 1,
            TimeUnit::Weeks => 7,
            TimeUnit::Months => 30,
            TimeUnit::Years => 365,
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TimeUnit::Days => "Days",
            TimeUnit::Weeks => "Weeks",
            TimeUnit::Months => "Months",
            TimeUnit::Years => "Years",
        };
        write!(f, "{}", name)
    }
}

/// A calendar period such as `3M` or `5Y`.
///
/// Always held in normalised form:
/// - whole weeks of days become weeks
/// - whole years of months become years
/// - every zero-length period becomes `0D`
///
/// Equality and hashing therefore compare calendar lengths, not spellings.
/// Ordering is total: by approximate length in days, then by unit, then by
/// length, so it agrees with equality.
///
/// # Examples
///
/// ```
/// use pricer_core::types::{Period, TimeUnit};
///
/// assert_eq!(Period::new(24, TimeUnit::Months), Period::years(2));
/// assert_eq!(Period::new(21, TimeUnit::Days), Period::weeks(3));
/// assert!(Period::months(6) < Period::years(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Period {
    length: i32,
    unit: TimeUnit,
}

impl Period {
    /// Creates a normalised period.
    pub fn new(length: i32, unit: TimeUnit) -> Self {
        if length == 0 {
            return Self {
                length: 0,
                unit: TimeUnit::Days,
            };
        }
        match unit {
            TimeUnit::Days if length % 7 == 0 => Self {
                length: length / 7,
                unit: TimeUnit::Weeks,
            },
            TimeUnit::Months if length % 12 == 0 => Self {
                length: length / 12,
                unit: TimeUnit::Years,
            },
            _ => Self { length, unit },
        }
    }

    /// Creates a period of `n` days.
    #[inline]
    pub fn days(n: i32) -> Self {
        Self::new(n, TimeUnit::Days)
    }

    /// Creates a period of `n` weeks.
    #[inline]
    pub fn weeks(n: i32) -> Self {
        Self::new(n, TimeUnit::Weeks)
    }

    /// Creates a period of `n` months.
    #[inline]
    pub fn months(n: i32) -> Self {
        Self::new(n, TimeUnit::Months)
    }

    /// Creates a period of `n` years.
    #[inline]
    pub fn years(n: i32) -> Self {
        Self::new(n, TimeUnit::Years)
    }

    /// Returns the normalised length.
    #[inline]
    pub fn length(&self) -> i32 {
        self.length
    }

    /// Returns the normalised unit.
    #[inline]
    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// Approximate length in days (months count 30, years 365).
    #[inline]
    pub fn approximate_days(&self) -> i64 {
        i64::from(self.length) * self.unit.approximate_days()
    }
}

impl PartialOrd for Period {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Period {
    fn cmp(&self, other: &Self) -> Ordering {
        self.approximate_days()
            .cmp(&other.approximate_days())
            .then(self.unit.cmp(&other.unit))
            .then(self.length.cmp(&other.length))
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.length, self.unit.symbol())
    }
}

impl FromStr for Period {
    type Err = PeriodError;

    /// Parses `<n><unit>` groups such as `3M`, `10Y` or `1Y6M`.
    ///
    /// Unit letters are case-insensitive. Groups are summed; a single
    /// string may not combine day based (`D`, `W`) and month based
    /// (`M`, `Y`) units.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::Period;
    ///
    /// let p: Period = " 2w ".parse().unwrap();
    /// assert_eq!(p, Period::days(14));
    ///
    /// assert!("1M2D".parse::<Period>().is_err());
    /// assert!("5".parse::<Period>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, PeriodError> {
        let input = s.trim();
        if input.is_empty() {
            return Err(PeriodError::Empty);
        }

        let (negative, body) = match input.as_bytes()[0] {
            b'-' => (true, &input[1..]),
            b'+' => (false, &input[1..]),
            _ => (false, input),
        };
        if body.is_empty() {
            return Err(PeriodError::MissingLength(input.to_string()));
        }

        let overflow = || PeriodError::Overflow(input.to_string());
        let mut groups: Vec<(i64, TimeUnit)> = Vec::new();
        let mut digits = String::new();

        for c in body.chars() {
            if c.is_ascii_digit() {
                digits.push(c);
                continue;
            }
            if digits.is_empty() {
                return Err(PeriodError::MissingLength(input.to_string()));
            }
            let n: i64 = digits.parse().map_err(|_| overflow())?;
            digits.clear();

            let unit = match c.to_ascii_uppercase() {
                'D' => TimeUnit::Days,
                'W' => TimeUnit::Weeks,
                'M' => TimeUnit::Months,
                'Y' => TimeUnit::Years,
                _ => {
                    return Err(PeriodError::UnknownUnit {
                        input: input.to_string(),
                        unit: c,
                    })
                }
            };
            groups.push((n, unit));
        }

        if !digits.is_empty() || groups.is_empty() {
            return Err(PeriodError::MissingUnit(input.to_string()));
        }

        // A single group keeps its own unit so that any displayed period
        // parses back, including lengths that overflow once expressed in
        // days or months.
        let (total, unit) = match groups.as_slice() {
            [(n, unit)] => (*n, *unit),
            _ => {
                let day_based = |u: &TimeUnit| matches!(u, TimeUnit::Days | TimeUnit::Weeks);
                let unit = if groups.iter().all(|(_, u)| day_based(u)) {
                    TimeUnit::Days
                } else if groups.iter().any(|(_, u)| day_based(u)) {
                    return Err(PeriodError::MixedUnits(input.to_string()));
                } else {
                    TimeUnit::Months
                };
                let total = groups.iter().try_fold(0i64, |acc, (n, u)| {
                    let factor = match u {
                        TimeUnit::Weeks => 7,
                        TimeUnit::Years => 12,
                        TimeUnit::Days | TimeUnit::Months => 1,
                    };
                    n.checked_mul(factor)
                        .and_then(|add| acc.checked_add(add))
                        .ok_or_else(overflow)
                })?;
                (total, unit)
            }
        };

        let signed = if negative { -total } else { total };
        let length = i32::try_from(signed).map_err(|_| overflow())?;
        Ok(Period::new(length, unit))
    }
}

impl TryFrom<String> for Period {
    type Error = PeriodError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Period> for String {
    fn from(period: Period) -> Self {
        period.to_string()
    }
}
