//! Output handler trait and error types
//!
//! This module defines the interface every result writer implements.

use crate::tree::ResultMapping;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Trait for output handlers
///
/// An output handler persists the result mapping of a finished crawl.
pub trait OutputHandler {
    /// Short name of the format, used in log lines
    fn format_name(&self) -> &'static str;

    /// Writes the results to `path`, creating its parent directory if absent
    ///
    /// # Arguments
    ///
    /// * `results` - The mapping produced by the crawl
    /// * `path` - Destination file; overwritten if it exists
    fn write(&self, results: &ResultMapping, path: &Path) -> OutputResult<()>;
}

/// Creates the parent directory of `path` if it does not exist yet
pub(crate) fn ensure_parent_dir(path: &Path) -> OutputResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            std::fs::create_dir_all(parent)?;
            tracing::debug!("Created output directory {}", parent.display());
        }
    }
    Ok(())
}
