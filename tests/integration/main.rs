//! Integration tests for Docs-Harvest
//!
//! These drive the real HTTP fetcher against wiremock servers.

mod crawl_tests;
