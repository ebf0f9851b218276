//! Channel feed HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::parser::parse_feed;
use super::types::FeedEntry;
use crate::error::{FeedError, Result};

const USER_AGENT: &str = concat!("video-feed/", env!("CARGO_PKG_VERSION"));
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Resolves a feed URL to its entries.
#[async_trait]
pub trait FeedFetcher: Send + Sync {
    /// Fetch and parse the feed at `url`, in feed order.
    async fn fetch(&self, url: &str) -> Result<Vec<FeedEntry>>;
}

/// Feed fetcher backed by `reqwest`.
pub struct FeedClient {
    client: Client,
}

impl FeedClient {
    /// Create a client with the default user agent and timeout.
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl FeedFetcher for FeedClient {
    async fn fetch(&self, url: &str) -> Result<Vec<FeedEntry>> {
        tracing::debug!(url, "Fetching feed");

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(FeedError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = response.bytes().await?;
        tracing::debug!(len = bytes.len(), "Got feed body");

        parse_feed(&bytes)
    }
}
