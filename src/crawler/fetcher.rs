//! HTTP fetcher implementation
//!
//! This module resolves a URL to its status code and body:
//! - Building the HTTP client with the crawler's user agent string
//! - GET requests with transport-level timeouts
//! - Separating transport failures (errors) from non-200 statuses (values)

use crate::config::{CrawlerConfig, UserAgentConfig};
use crate::HarvestError;
use async_trait::async_trait;
use reqwest::{redirect::Policy, Client};
use std::time::Duration;
use url::Url;

/// A completed fetch, whatever its status code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    /// Final URL after redirects
    pub url: Url,

    /// HTTP status code
    pub status: u16,

    /// Page body content
    pub body: String,
}

impl FetchedPage {
    /// Only a 200 response counts as a fetched page
    pub fn is_success(&self) -> bool {
        self.status == 200
    }
}

/// Fetch primitive used by the crawler
///
/// Implementations return `Ok` for every response that completed, including
/// 4xx/5xx statuses, and `Err(HarvestError::Transport)` only when the request
/// itself could not complete (DNS, connection refused, timeout).
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, HarvestError>;
}

/// Builds an HTTP client with proper configuration
///
/// # Example
///
/// ```no_run
/// use docs_harvest::config::SiteKind;
/// use docs_harvest::crawler::build_http_client;
///
/// let config = SiteKind::PythonDocs.preset();
/// let client = build_http_client(&config.user_agent, &config.crawler).unwrap();
/// ```
pub fn build_http_client(
    user_agent: &UserAgentConfig,
    crawler: &CrawlerConfig,
) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent.header_value())
        .timeout(crawler.request_timeout())
        .connect_timeout(Duration::from_secs(10))
        .redirect(Policy::limited(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// `Fetch` implementation backed by reqwest
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds the client from configuration and wraps it
    pub fn from_config(
        user_agent: &UserAgentConfig,
        crawler: &CrawlerConfig,
    ) -> Result<Self, HarvestError> {
        Ok(Self::new(build_http_client(user_agent, crawler)?))
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage, HarvestError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| transport_error(url, e))?;

        let status = response.status().as_u16();
        let final_url = response.url().clone();

        // A body that cannot be read is a transport failure as well
        let body = response.text().await.map_err(|e| transport_error(url, e))?;

        tracing::trace!("Fetched {} ({}, {} bytes)", final_url, status, body.len());

        Ok(FetchedPage {
            url: final_url,
            status,
            body,
        })
    }
}

/// Classifies a reqwest failure into a transport error
fn transport_error(url: &Url, error: reqwest::Error) -> HarvestError {
    let message = if error.is_timeout() {
        "Request timeout".to_string()
    } else if error.is_connect() {
        format!("Connection failed: {}", error)
    } else if error.is_redirect() {
        "Too many redirects".to_string()
    } else {
        error.to_string()
    };

    HarvestError::Transport {
        url: url.to_string(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteKind;

    #[test]
    fn test_build_http_client() {
        let config = SiteKind::PythonDocs.preset();
        let client = build_http_client(&config.user_agent, &config.crawler);
        assert!(client.is_ok());
    }

    #[test]
    fn test_only_200_is_success() {
        let page = |status| FetchedPage {
            url: Url::parse("https://example.com/").unwrap(),
            status,
            body: String::new(),
        };
        assert!(page(200).is_success());
        assert!(!page(201).is_success());
        assert!(!page(404).is_success());
        assert!(!page(500).is_success());
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let config = SiteKind::PythonDocs.preset();
        let fetcher = HttpFetcher::from_config(&config.user_agent, &config.crawler).unwrap();

        // Reserve a free port, then release it so nothing is listening
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let url = Url::parse(&format!("http://127.0.0.1:{}/", port)).unwrap();
        let result = fetcher.fetch(&url).await;
        assert!(matches!(result, Err(HarvestError::Transport { .. })));
    }

    // Status handling against real responses is covered with wiremock in the
    // integration tests
}
