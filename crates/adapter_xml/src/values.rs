//! Text codecs for the scalar and list values found in stress test documents.
//!
//! Lists are comma separated. Real lists additionally accept the compact
//! repeat token `count*value`, so `3*0.01` reads as three copies of `0.01`.

use pricer_core::types::Period;

use crate::error::ValueError;

/// Largest repeat count accepted in a `count*value` token.
pub const MAX_REPEAT: usize = 10_000;

/// Parses a single finite real number.
pub fn parse_real(token: &str) -> Result<f64, ValueError> {
    let token = token.trim();
    let value: f64 = token
        .parse()
        .map_err(|_| ValueError::InvalidReal(token.to_string()))?;
    if !value.is_finite() {
        return Err(ValueError::NonFinite(token.to_string()));
    }
    Ok(value)
}

/// Formats a real so that [`parse_real`] reads back the same value.
pub fn format_real(value: f64) -> String {
    value.to_string()
}

/// Parses a comma separated list of reals with optional `count*value`
/// repeat tokens. Blank input yields an empty list.
///
/// # Examples
///
/// ```
/// use adapter_xml::values::parse_compact_reals;
///
/// let values = parse_compact_reals("0.01, 2*0.02,0.03").unwrap();
/// assert_eq!(values, vec![0.01, 0.02, 0.02, 0.03]);
/// ```
pub fn parse_compact_reals(text: &str) -> Result<Vec<f64>, ValueError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut values = Vec::new();
    for token in text.split(',').map(str::trim) {
        match token.split_once('*') {
            Some((count, value)) => {
                let count: usize = count
                    .trim()
                    .parse()
                    .map_err(|_| ValueError::InvalidRepeat(token.to_string()))?;
                if count == 0 || count > MAX_REPEAT {
                    return Err(ValueError::InvalidRepeat(token.to_string()));
                }
                let value = parse_real(value)?;
                values.extend(std::iter::repeat(value).take(count));
            }
            None => values.push(parse_real(token)?),
        }
    }
    Ok(values)
}

/// Formats reals as a comma separated list, collapsing runs of two or
/// more identical values into `count*value`. Runs longer than
/// [`MAX_REPEAT`] are split over several tokens.
pub fn format_compact_reals(values: &[f64]) -> String {
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < values.len() {
        let value = values[i];
        let run = values[i..]
            .iter()
            .take_while(|v| v.to_bits() == value.to_bits())
            .take(MAX_REPEAT)
            .count();
        if run > 1 {
            tokens.push(format!("{}*{}", run, format_real(value)));
        } else {
            tokens.push(format_real(value));
        }
        i += run;
    }
    tokens.join(",")
}

/// Parses a comma separated list of tenors. Blank input yields an empty
/// list.
pub fn parse_periods(text: &str) -> Result<Vec<Period>, ValueError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    text.split(',')
        .map(|token| token.trim().parse::<Period>().map_err(ValueError::from))
        .collect()
}

/// Formats tenors as a comma separated list.
pub fn format_periods(periods: &[Period]) -> String {
    periods
        .iter()
        .map(Period::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
