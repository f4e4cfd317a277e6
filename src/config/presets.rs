//! Built-in site presets
//!
//! These reproduce the fixed endpoints, selectors and delay the crawler runs
//! with when no configuration file is given.

use crate::config::types::{
    Config, ContentSelectors, CrawlerConfig, OutputConfig, OutputFormat, SectionLayout, SiteConfig,
    UserAgentConfig,
};

pub const PYTHON_DOCS_ROOT: &str = "https://docs.python.org/3/";
pub const GEEKS_FOR_GEEKS_ROOT: &str = "https://www.geeksforgeeks.org/python-programming-language/";

const DEFAULT_OUTPUT_DIR: &str = "save_data";
const DEFAULT_REQUEST_INTERVAL_MS: u64 = 500;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Section containers on the GeeksforGeeks Python landing page
pub const GEEKS_FOR_GEEKS_SECTIONS: &[&str] = &[
    "Basics",
    "io",
    "Data Types",
    "Variables",
    "Operators",
    "Control Flow",
    "Functions",
    "Object Oriented Concepts",
    "Exception Handling",
    "Python Collections",
    "Django tutorial",
    "Data Analysis",
    "Numpy",
    "Pandas",
    "Machine Learning with Python",
    "Python GUI",
    "Modules in Python",
    "WorkingWithDatabase",
    "Misc",
    "Applications and Projects",
];

/// The documentation sites with a built-in preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SiteKind {
    /// docs.python.org: recursive table-of-contents crawl, JSON output
    PythonDocs,
    /// GeeksforGeeks Python tutorial: one level of articles, CSV output
    GeeksForGeeks,
}

impl SiteKind {
    /// Returns the full configuration for this site
    pub fn preset(self) -> Config {
        match self {
            Self::PythonDocs => python_docs(),
            Self::GeeksForGeeks => geeks_for_geeks(),
        }
    }
}

fn crawler() -> CrawlerConfig {
    CrawlerConfig {
        request_interval_ms: DEFAULT_REQUEST_INTERVAL_MS,
        request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
    }
}

fn user_agent() -> UserAgentConfig {
    UserAgentConfig {
        crawler_name: "DocsHarvest".to_string(),
        crawler_version: env!("CARGO_PKG_VERSION").to_string(),
        contact_url: "https://github.com/docs-harvest/docs-harvest".to_string(),
        contact_email: "crawler@docs-harvest.dev".to_string(),
    }
}

fn python_docs() -> Config {
    Config {
        crawler: crawler(),
        user_agent: user_agent(),
        output: OutputConfig {
            directory: DEFAULT_OUTPUT_DIR.to_string(),
            file_name: "pydoc_data.json".to_string(),
            format: OutputFormat::Json,
        },
        site: SiteConfig {
            name: "Python documentation".to_string(),
            root_url: PYTHON_DOCS_ROOT.to_string(),
            child_link_selector: Some("li.toctree-l1 > a".to_string()),
            layout: SectionLayout::PairedTables {
                header_selector: "p>strong".to_string(),
                table_selector: "table.contentstable".to_string(),
                link_selector: "a.biglink".to_string(),
            },
            content: ContentSelectors {
                required: Some("div.body".to_string()),
                paragraphs: vec!["div.body > section > p".to_string(), "body p".to_string()],
                code_blocks: vec![".highlight".to_string()],
            },
        },
    }
}

fn geeks_for_geeks() -> Config {
    Config {
        crawler: crawler(),
        user_agent: user_agent(),
        output: OutputConfig {
            directory: DEFAULT_OUTPUT_DIR.to_string(),
            file_name: "gfg_data.csv".to_string(),
            format: OutputFormat::Csv,
        },
        site: SiteConfig {
            name: "GeeksforGeeks Python".to_string(),
            root_url: GEEKS_FOR_GEEKS_ROOT.to_string(),
            child_link_selector: None,
            layout: SectionLayout::NamedSections {
                sections: GEEKS_FOR_GEEKS_SECTIONS
                    .iter()
                    .map(|s| s.to_string())
                    .collect(),
                link_selector: "a".to_string(),
            },
            content: ContentSelectors {
                required: Some("article.content div.text".to_string()),
                paragraphs: vec!["article.content div.text".to_string()],
                code_blocks: vec![],
            },
        },
    }
}
