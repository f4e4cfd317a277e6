//! In-memory fixtures shared by the crawler unit tests

use crate::config::{Config, ContentSelectors, SiteKind};
use crate::crawler::fetcher::{Fetch, FetchedPage};
use crate::HarvestError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use url::Url;

/// `Fetch` backed by a fixed URL → (status, body) table
///
/// Unregistered URLs fail with a transport error. Every request is recorded
/// in order.
#[derive(Debug, Default)]
pub struct StaticFetcher {
    pages: HashMap<Url, (u16, String)>,
    requests: Mutex<Vec<Url>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: Url, status: u16, body: String) -> Self {
        self.pages.insert(url, (status, body));
        self
    }

    pub fn requests(&self) -> Vec<Url> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Fetch for StaticFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, HarvestError> {
        self.requests.lock().unwrap().push(url.clone());
        match self.pages.get(url) {
            Some((status, body)) => Ok(FetchedPage {
                url: url.clone(),
                status: *status,
                body: body.clone(),
            }),
            None => Err(HarvestError::Transport {
                url: url.to_string(),
                message: "Connection refused".to_string(),
            }),
        }
    }
}

/// Python-docs style configuration with simplified selectors and no pacing
pub fn test_config() -> Config {
    let mut config = SiteKind::PythonDocs.preset();
    config.crawler.request_interval_ms = 0;
    config.site.root_url = "https://docs.example.com/3/".to_string();
    config.site.child_link_selector = Some("li.toc > a".to_string());
    config.site.content = ContentSelectors {
        required: Some("div.body".to_string()),
        paragraphs: vec!["div.body p".to_string()],
        code_blocks: vec![".highlight".to_string()],
    };
    config
}

/// A content page with one paragraph and the given (href, name) child links
pub fn content_page(text: &str, links: &[(&str, &str)]) -> String {
    let items: String = links
        .iter()
        .map(|(href, name)| format!(r#"<li class="toc"><a href="{href}">{name}</a></li>"#))
        .collect();
    format!(
        r#"<html><body><div class="body"><p>{}</p><ul>{}</ul></div></body></html>"#,
        text, items
    )
}

/// An index page with paired `p>strong` headers and `table.contentstable` tables
pub fn index_page(sections: &[(&str, &[(&str, &str)])]) -> String {
    let body: String = sections
        .iter()
        .map(|(header, links)| {
            let cells: String = links
                .iter()
                .map(|(href, name)| {
                    format!(r#"<td><a class="biglink" href="{href}">{name}</a></td>"#)
                })
                .collect();
            format!(
                r#"<p><strong>{}</strong></p><table class="contentstable"><tr>{}</tr></table>"#,
                header, cells
            )
        })
        .collect();
    format!("<html><body>{}</body></html>", body)
}
