//! Docs-Harvest: a recursive documentation crawler
//!
//! This crate walks a documentation site starting from its index page,
//! follows the table-of-contents links of every page it reaches, extracts the
//! paragraph and code-block text of each page, and assembles the result into a
//! nested tree together with success/failure counters.

pub mod config;
pub mod crawler;
pub mod output;
pub mod tree;
pub mod url;

use thiserror::Error;

/// Main error type for Docs-Harvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Transport error for {url}: {message}")]
    Transport { url: String, message: String },

    #[error("Root page {url} unavailable (status {status})")]
    RootUnavailable { url: String, status: u16 },

    #[error("Content extraction failed for {url}: {message}")]
    ContentExtraction { url: String, message: String },

    #[error("Invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),
}

impl HarvestError {
    /// Returns true for failures that are counted against a single page
    /// instead of aborting the run
    pub fn is_page_local(&self) -> bool {
        matches!(self, Self::ContentExtraction { .. })
    }
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid selector in config: {0}")]
    InvalidSelector(String),
}

/// Result type alias for Docs-Harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

// Re-export commonly used types
pub use config::{Config, SiteKind};
pub use crawler::{Coordinator, CrawlReport};
pub use tree::{ContentRecord, CrawlStats, PageBody, PageNode, ResultMapping, SectionEntry};
