//! Normalise command implementation
//!
//! Loads a stress test file and writes it back in canonical form: fixed
//! section order, sorted keys and compact value lists.

use std::path::{Path, PathBuf};

use tracing::info;

use super::load_file;
use crate::config::CliConfig;
use crate::Result;

/// Run the normalise command.
///
/// The document is written to `output` if given, else into the configured
/// `output_dir` under the input's file name, else to stdout.
pub fn run(input: &Path, output: Option<&Path>, config: &CliConfig) -> Result<()> {
    let collection = load_file(input)?;
    let xml = adapter_xml::dump_to_string(&collection, config.indent)?;

    match destination(input, output, config) {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(&path, format!("{xml}\n"))?;
            info!(
                input = %input.display(),
                output = %path.display(),
                stress_tests = collection.len(),
                "normalised stress test file"
            );
        }
        None => println!("{xml}"),
    }
    Ok(())
}

fn destination(input: &Path, output: Option<&Path>, config: &CliConfig) -> Option<PathBuf> {
    if let Some(output) = output {
        return Some(output.to_path_buf());
    }
    let dir = config.output_dir.as_ref()?;
    Some(match input.file_name() {
        Some(name) => dir.join(name),
        None => dir.join("stress_test.xml"),
    })
}
