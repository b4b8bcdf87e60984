//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod normalise;
pub mod show;
pub mod validate;

use std::path::Path;

use pricer_risk::StressTestCollection;
use tracing::debug;

use crate::{CliError, Result};

/// Reads and loads a stress test document.
pub fn load_file(path: &Path) -> Result<StressTestCollection> {
    if !path.exists() {
        return Err(CliError::FileNotFound(path.to_path_buf()));
    }
    debug!(file = %path.display(), "reading stress test file");
    let xml = std::fs::read_to_string(path)?;
    adapter_xml::load_str(&xml).map_err(|source| CliError::Load {
        path: path.to_path_buf(),
        source,
    })
}
