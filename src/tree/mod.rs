//! Result tree produced by a crawl
//!
//! This module contains the in-memory data model of a crawl:
//! - Per-page extracted content
//! - Tree nodes linking a page to its successfully crawled children
//! - Top-level section entries and the ordered result mapping
//! - Additive success/failure counters

mod node;
mod stats;

pub use node::{ContentRecord, PageBody, PageNode, ResultMapping, SectionEntry};
pub use stats::CrawlStats;
