//! Crawler coordinator - top-level crawl orchestration
//!
//! The coordinator fetches the index page, walks its top-level sections in
//! document order, hands every successfully fetched top-level page to the
//! aggregator, and merges the returned subtrees and counts into the final
//! result mapping.

use crate::config::{validate, Config};
use crate::crawler::aggregator::Aggregator;
use crate::crawler::fetcher::{Fetch, HttpFetcher};
use crate::crawler::pacer::RequestPacer;
use crate::crawler::parser::{discover_sections, PageSelectors};
use crate::tree::{CrawlStats, ResultMapping, SectionEntry};
use crate::{HarvestError, Result};
use std::sync::Arc;
use url::Url;

/// Outcome of a complete crawl run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlReport {
    /// Top-level link text → crawled entry
    pub results: ResultMapping,

    /// Counts over every page attempted in the run
    pub stats: CrawlStats,
}

/// Main crawler coordinator structure
pub struct Coordinator {
    config: Config,
    root_url: Url,
    aggregator: Aggregator,
}

impl Coordinator {
    /// Creates a coordinator that fetches over HTTP
    pub fn new(config: Config) -> Result<Self> {
        let fetcher = HttpFetcher::from_config(&config.user_agent, &config.crawler)?;
        Self::with_fetcher(config, Arc::new(fetcher))
    }

    /// Creates a coordinator on top of any fetch implementation
    ///
    /// # Errors
    ///
    /// Fails if the configuration does not validate.
    pub fn with_fetcher(config: Config, fetcher: Arc<dyn Fetch>) -> Result<Self> {
        validate(&config)?;
        let root_url = Url::parse(&config.site.root_url)?;
        let selectors = PageSelectors::compile(&config.site)?;
        let pacer = RequestPacer::new(config.crawler.request_interval());

        Ok(Self {
            config,
            root_url,
            aggregator: Aggregator::new(fetcher, selectors, pacer),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Runs the crawl
    ///
    /// 1. Fetch the index page; anything but 200 aborts the run
    /// 2. Discover the top-level links, section by section
    /// 3. For each link: fetch it, crawl below it, record the outcome
    ///
    /// # Errors
    ///
    /// - `HarvestError::RootUnavailable` if the index page is not 200
    /// - `HarvestError::Transport` from any fetch in the run
    pub async fn run(&mut self) -> Result<CrawlReport> {
        tracing::info!(
            "Starting crawl of {} at {}",
            self.config.site.name,
            self.root_url
        );

        let root = self.aggregator.fetch(&self.root_url).await?;
        if !root.is_success() {
            return Err(HarvestError::RootUnavailable {
                url: self.root_url.to_string(),
                status: root.status,
            });
        }

        let top_level = discover_sections(&root.body, &root.url, &self.config.site.layout)?;
        tracing::info!("Found {} top-level links", top_level.len());

        let mut report = CrawlReport::default();

        for link in top_level {
            let page = self.aggregator.fetch(&link.url).await?;

            if !page.is_success() {
                tracing::warn!(
                    "Failure: problem fetching page '{}'. Status: {}",
                    link.name,
                    page.status
                );
                report.stats += CrawlStats::FAILURE;
                continue;
            }

            match self.aggregator.crawl(&page).await {
                Ok((body, subtree_stats)) => {
                    report.stats += subtree_stats + CrawlStats::SUCCESS;
                    tracing::info!("Success: scraped page '{}'", link.name);

                    let entry = SectionEntry {
                        name: link.name,
                        section: link.section,
                        url: link.url.to_string(),
                        body,
                    };
                    if let Some(replaced) = report.results.insert(entry) {
                        tracing::warn!(
                            "Duplicate top-level link '{}': replacing result from {}",
                            replaced.name,
                            replaced.url
                        );
                    }
                }
                Err(e) if e.is_page_local() => {
                    tracing::warn!(
                        "Failure: problem getting content of page '{}'. Error: {}",
                        link.name,
                        e
                    );
                    report.stats += CrawlStats::FAILURE;
                }
                Err(e) => return Err(e),
            }
        }

        tracing::info!(
            "Crawl completed: {} entries, {} pages succeeded, {} failed",
            report.results.len(),
            report.stats.succeeded,
            report.stats.failed
        );

        Ok(report)
    }
}

/// Runs a complete crawl over HTTP with the given configuration
///
/// # Example
///
/// ```no_run
/// use docs_harvest::config::SiteKind;
/// use docs_harvest::crawler::run_crawl;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let report = run_crawl(SiteKind::PythonDocs.preset()).await?;
/// println!("{} pages crawled", report.stats.succeeded);
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(config: Config) -> Result<CrawlReport> {
    let mut coordinator = Coordinator::new(config)?;
    coordinator.run().await
}
