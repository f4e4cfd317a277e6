//! Configuration module for Docs-Harvest
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files, and provides the built-in presets used when no file is given.
//!
//! # Example
//!
//! ```no_run
//! use docs_harvest::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("harvest.toml")).unwrap();
//! println!("Results go to {}", config.output.path().display());
//! ```

mod parser;
mod presets;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, ContentSelectors, CrawlerConfig, OutputConfig, OutputFormat, SectionLayout, SiteConfig,
    UserAgentConfig,
};

pub use presets::{SiteKind, GEEKS_FOR_GEEKS_ROOT, GEEKS_FOR_GEEKS_SECTIONS, PYTHON_DOCS_ROOT};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate;
