//! Output module for persisting crawl results
//!
//! This module handles:
//! - Writing the result tree as pretty-printed JSON
//! - Writing flat per-page records as CSV
//! - Printing the final pass/fail statistics

mod csv_output;
mod json_output;
pub mod stats;
mod traits;

pub use csv_output::CsvOutput;
pub use json_output::JsonOutput;
pub use stats::{format_summary_line, print_summary};
pub use traits::{OutputError, OutputHandler, OutputResult};

use crate::config::{OutputConfig, OutputFormat};
use crate::tree::ResultMapping;
use std::path::PathBuf;

/// Returns the handler for an output format
pub fn handler_for(format: OutputFormat) -> Box<dyn OutputHandler> {
    match format {
        OutputFormat::Json => Box::new(JsonOutput),
        OutputFormat::Csv => Box::new(CsvOutput),
    }
}

/// Writes the results to the configured file
///
/// # Returns
///
/// * `Ok(PathBuf)` - The path the results were written to
/// * `Err(OutputError)` - Failed to create the directory or write the file
pub fn save_results(results: &ResultMapping, config: &OutputConfig) -> OutputResult<PathBuf> {
    let path = config.path();
    let handler = handler_for(config.format);

    tracing::info!(
        "Writing {} entries as {} to {}",
        results.len(),
        handler.format_name(),
        path.display()
    );
    handler.write(results, &path)?;

    Ok(path)
}
