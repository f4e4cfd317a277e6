//! Crawler module for documentation page fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching behind the `Fetch` trait
//! - HTML content extraction and link discovery
//! - Request pacing
//! - Recursive crawl-and-aggregate of a page subtree
//! - Top-level orchestration over the index page's sections

mod aggregator;
mod coordinator;
mod fetcher;
mod pacer;
mod parser;

#[cfg(test)]
mod testing;

pub use aggregator::Aggregator;
pub use coordinator::{run_crawl, Coordinator, CrawlReport};
pub use fetcher::{build_http_client, Fetch, FetchedPage, HttpFetcher};
pub use pacer::RequestPacer;
pub use parser::{
    discover_sections, extract_page, ChildLink, ExtractedPage, PageSelectors, TopLevelLink,
};
