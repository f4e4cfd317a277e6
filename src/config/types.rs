use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

/// Main configuration structure for Docs-Harvest
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub output: OutputConfig,
    pub site: SiteConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Minimum time between the starts of two successive fetches (milliseconds)
    #[serde(rename = "request-interval-ms")]
    pub request_interval_ms: u64,

    /// Transport-level timeout of a single fetch (seconds)
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: u64,
}

impl CrawlerConfig {
    pub fn request_interval(&self) -> Duration {
        Duration::from_millis(self.request_interval_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the crawler
    #[serde(rename = "contact-url")]
    pub contact_url: String,

    /// Email address for crawler-related contact
    #[serde(rename = "contact-email")]
    pub contact_email: String,
}

impl UserAgentConfig {
    /// Format: CrawlerName/Version (+ContactURL; ContactEmail)
    pub fn header_value(&self) -> String {
        format!(
            "{}/{} (+{}; {})",
            self.crawler_name, self.crawler_version, self.contact_url, self.contact_email
        )
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory the result file is written to (created if absent)
    pub directory: String,

    /// Name of the result file inside `directory`
    #[serde(rename = "file-name")]
    pub file_name: String,

    pub format: OutputFormat,
}

impl OutputConfig {
    pub fn path(&self) -> PathBuf {
        PathBuf::from(&self.directory).join(&self.file_name)
    }
}

/// Serialization format of the result file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Nested tree, pretty-printed
    Json,
    /// One flat record per crawled page
    Csv,
}

/// Structure of the documentation site being crawled
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Human-readable site name used in log lines
    pub name: String,

    /// Index page the crawl starts from
    #[serde(rename = "root-url")]
    pub root_url: String,

    /// Selector of the child links followed below each page
    ///
    /// When absent, the crawl stops at the top-level pages.
    #[serde(rename = "child-link-selector", default)]
    pub child_link_selector: Option<String>,

    pub layout: SectionLayout,

    pub content: ContentSelectors,
}

/// How the index page groups its top-level links into sections
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum SectionLayout {
    /// The i-th section header pairs with the i-th link table
    PairedTables {
        #[serde(rename = "header-selector")]
        header_selector: String,
        #[serde(rename = "table-selector")]
        table_selector: String,
        #[serde(rename = "link-selector")]
        link_selector: String,
    },

    /// Each named section is a `div` whose classes are the words of its name
    NamedSections {
        sections: Vec<String>,
        #[serde(rename = "link-selector", default = "default_link_selector")]
        link_selector: String,
    },
}

fn default_link_selector() -> String {
    "a".to_string()
}

impl SectionLayout {
    /// Selector of the container of a named section
    ///
    /// "Data Types" becomes `div.Data.Types`.
    pub fn named_section_selector(section: &str, link_selector: &str) -> String {
        let classes = section.split(' ').collect::<Vec<_>>().join(".");
        format!("div.{} {}", classes, link_selector)
    }
}

/// Selectors used to extract a page's own content
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ContentSelectors {
    /// Node that must be present for the page to count as a content page
    #[serde(default)]
    pub required: Option<String>,

    /// Paragraph selectors, each applied in order
    #[serde(default)]
    pub paragraphs: Vec<String>,

    /// Code-block selectors, each applied in order
    #[serde(rename = "code-blocks", default)]
    pub code_blocks: Vec<String>,
}
