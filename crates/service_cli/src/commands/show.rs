//! Show command implementation
//!
//! Prints the contents of a stress test file as a table or as JSON.

use std::fmt::Write as _;
use std::path::Path;

use clap::ValueEnum;
use pricer_core::types::Period;
use pricer_risk::{RiskFactorClass, ShiftSpecRef, StressTestCollection};

use super::load_file;
use crate::Result;

/// Output format of the show command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One row per shift
    Table,
    /// The loaded collection as JSON
    Json,
}

/// Run the show command
pub fn run(input: &Path, format: OutputFormat) -> Result<()> {
    let collection = load_file(input)?;
    print!("{}", render(&collection, format)?);
    Ok(())
}

/// Render `collection` in `format`.
pub fn render(collection: &StressTestCollection, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(collection)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(collection)?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn render_table(collection: &StressTestCollection) -> String {
    let mut out = String::new();
    for case in collection {
        let _ = writeln!(out, "StressTest {} ({} shifts)", case.label(), case.total_shifts());
        for class in RiskFactorClass::all() {
            for (key, spec) in case.shifts(*class) {
                let _ = writeln!(
                    out,
                    "  {:<20} {:<16} {:<9} {}",
                    class.name(),
                    key,
                    shift_type(spec),
                    describe(spec)
                );
            }
        }
    }
    out
}

fn shift_type(spec: ShiftSpecRef<'_>) -> &'static str {
    match spec {
        ShiftSpecRef::Curve(s) => s.shift_type().as_str(),
        ShiftSpecRef::Spot(s) => s.shift_type().as_str(),
        ShiftSpecRef::Vol(s) => s.shift_type().map_or("-", |t| t.as_str()),
        ShiftSpecRef::VolCube(s) => s.shift_type().as_str(),
    }
}

fn describe(spec: ShiftSpecRef<'_>) -> String {
    match spec {
        ShiftSpecRef::Curve(s) => format!("tenors [{}]", axis(s.tenors())),
        ShiftSpecRef::Spot(s) => format!("size {}", s.shift_size()),
        ShiftSpecRef::Vol(s) => format!("expiries [{}]", axis(s.expiries())),
        ShiftSpecRef::VolCube(s) => format!(
            "{}x{} grid, parallel {}, {} override(s)",
            s.expiries().len(),
            s.terms().len(),
            s.parallel_shift(),
            s.grid_shifts().len()
        ),
    }
}

fn axis(periods: &[Period]) -> String {
    periods
        .iter()
        .map(Period::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
