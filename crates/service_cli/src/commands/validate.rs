//! Validate command implementation
//!
//! Loads each stress test file and reports what it contains.

use std::path::PathBuf;

use pricer_risk::RiskFactorClass;
use tracing::{error, info};

use super::load_file;
use crate::{CliError, Result};

/// Run the validate command over `files`.
///
/// Every file is checked even after a failure; the command fails if any
/// file does.
pub fn run(files: &[PathBuf]) -> Result<()> {
    let mut failed = 0;

    for path in files {
        match load_file(path) {
            Ok(collection) => {
                for case in &collection {
                    let sections: Vec<&str> = RiskFactorClass::all()
                        .iter()
                        .filter(|class| case.has_shifts(**class))
                        .map(RiskFactorClass::name)
                        .collect();
                    info!(
                        file = %path.display(),
                        label = case.label(),
                        shifts = case.total_shifts(),
                        classes = %sections.join(","),
                        "stress test ok"
                    );
                }
                info!(file = %path.display(), stress_tests = collection.len(), "file ok");
            }
            Err(err) => {
                error!(file = %path.display(), "{}", err);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(CliError::ValidationFailed {
            failed,
            total: files.len(),
        });
    }
    Ok(())
}
