//! Recursive crawl-and-aggregate
//!
//! Starting from one fetched page, the aggregator extracts the page's own
//! content, follows each of its child links in document order, recurses into
//! every child that was fetched successfully, and assembles the result tree
//! bottom-up. Success and failure counts are returned by value and summed at
//! each level, so the counts of a subtree always equal the outcomes of every
//! child link attempted inside it.

use crate::crawler::fetcher::{Fetch, FetchedPage};
use crate::crawler::pacer::RequestPacer;
use crate::crawler::parser::{extract_page, PageSelectors};
use crate::tree::{CrawlStats, PageBody, PageNode};
use crate::url::page_identity;
use crate::Result;
use futures::future::{FutureExt, LocalBoxFuture};
use std::sync::Arc;
use url::Url;

/// Crawls the subtree below a fetched page
pub struct Aggregator {
    fetcher: Arc<dyn Fetch>,
    selectors: PageSelectors,
    pacer: RequestPacer,
}

impl Aggregator {
    pub fn new(fetcher: Arc<dyn Fetch>, selectors: PageSelectors, pacer: RequestPacer) -> Self {
        Self {
            fetcher,
            selectors,
            pacer,
        }
    }

    /// Fetches a URL once the pacer allows the next request
    ///
    /// Every request of a run goes through here so the minimum interval holds
    /// across top-level links and child links alike.
    pub async fn fetch(&mut self, url: &Url) -> Result<FetchedPage> {
        self.pacer.wait_turn().await;
        tracing::debug!("Fetching {}", url);
        self.fetcher.fetch(url).await
    }

    /// Crawls everything below a successfully fetched page
    ///
    /// Returns the page's own content with its crawled children, and the
    /// success/failure counts of every child link attempted in the subtree.
    /// The page itself is not counted; that is the caller's outcome to record.
    ///
    /// # Errors
    ///
    /// - `HarvestError::ContentExtraction` if the page's own content cannot be
    ///   extracted. Its children are not visited.
    /// - `HarvestError::Transport` (and any other unexpected error) from any
    ///   fetch in the subtree. These abort the whole crawl.
    pub async fn crawl(&mut self, page: &FetchedPage) -> Result<(PageBody, CrawlStats)> {
        self.crawl_below(page, Vec::new()).await
    }

    /// Recursive step; `lineage` holds the pages on the path from the
    /// top-level page down to (excluding) `page`
    fn crawl_below<'a>(
        &'a mut self,
        page: &'a FetchedPage,
        mut lineage: Vec<Url>,
    ) -> LocalBoxFuture<'a, Result<(PageBody, CrawlStats)>> {
        async move {
            let extracted = extract_page(&page.body, &page.url, &self.selectors)?;
            lineage.push(page_identity(&page.url));

            let mut stats = CrawlStats::default();
            let mut children = Vec::new();

            for link in extracted.links {
                if is_ancestor(&lineage, &link.url) {
                    tracing::warn!(
                        "Failure: sub page '{}' links back to an ancestor ({})",
                        link.name,
                        link.url
                    );
                    stats += CrawlStats::FAILURE;
                    continue;
                }

                let child = self.fetch(&link.url).await?;

                if !child.is_success() {
                    tracing::warn!(
                        "Failure: problem fetching sub page '{}'. Status: {}",
                        link.name,
                        child.status
                    );
                    stats += CrawlStats::FAILURE;
                    continue;
                }

                // Redirects may land on an ancestor even when the link did not
                if child.url != link.url && is_ancestor(&lineage, &child.url) {
                    tracing::warn!(
                        "Failure: sub page '{}' redirects back to an ancestor ({})",
                        link.name,
                        child.url
                    );
                    stats += CrawlStats::FAILURE;
                    continue;
                }

                match self.crawl_below(&child, lineage.clone()).await {
                    Ok((body, child_stats)) => {
                        stats += child_stats;
                        stats += CrawlStats::SUCCESS;
                        tracing::info!("Success: scraped page {}", link.url);
                        children.push(PageNode {
                            name: link.name,
                            url: link.url.to_string(),
                            body,
                        });
                    }
                    Err(e) if e.is_page_local() => {
                        tracing::warn!(
                            "Failure: problem getting content of sub page '{}'. Error: {}",
                            link.name,
                            e
                        );
                        stats += CrawlStats::FAILURE;
                    }
                    Err(e) => return Err(e),
                }
            }

            Ok((PageBody::new(extracted.content, children), stats))
        }
        .boxed_local()
    }
}

fn is_ancestor(lineage: &[Url], url: &Url) -> bool {
    let identity = page_identity(url);
    lineage.iter().any(|ancestor| *ancestor == identity)
}
