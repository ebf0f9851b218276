//! Snapshot pipeline - orchestrates the resolve-fetch-filter-write flow.

use std::sync::Arc;

use crate::config::FeedConfig;
use crate::error::{FeedError, Result};
use crate::feed::FeedFetcher;
use crate::filter::{filter_entries, FilterOutcome, VideoRecord};
use crate::resolver;
use crate::storage::Snapshot;

/// Result of fetching and filtering one feed.
#[derive(Debug, Default)]
pub struct Collected {
    /// Feed URL that was fetched.
    pub feed_url: String,
    /// Number of raw entries in the feed.
    pub fetched: usize,
    /// Filtered records and skipped shorts.
    pub filtered: FilterOutcome,
    /// Fetch failure that was recovered as an empty feed.
    pub fetch_error: Option<String>,
}

impl Collected {
    /// Normalized records, in feed order.
    #[must_use]
    pub fn records(&self) -> &[VideoRecord] {
        &self.filtered.records
    }

    /// Whether the operator should retry with the canonical channel ID.
    ///
    /// Only the handle form gets this hint, and only when the feed came back
    /// without any entries at all.
    #[must_use]
    pub fn suggests_channel_id(&self) -> bool {
        self.fetched == 0 && resolver::is_handle_url(&self.feed_url)
    }

    /// The records, or [`FeedError::NoContent`] when there are none.
    pub fn require_records(&self) -> Result<&[VideoRecord]> {
        if self.filtered.records.is_empty() {
            return Err(FeedError::NoContent {
                feed_url: self.feed_url.clone(),
            });
        }
        Ok(&self.filtered.records)
    }
}

/// Video snapshot pipeline.
pub struct Pipeline {
    config: FeedConfig,
    fetcher: Arc<dyn FeedFetcher>,
}

impl Pipeline {
    /// Create a new pipeline.
    #[must_use]
    pub fn new(config: FeedConfig, fetcher: Arc<dyn FeedFetcher>) -> Self {
        Self { config, fetcher }
    }

    /// Pipeline configuration.
    #[must_use]
    pub fn config(&self) -> &FeedConfig {
        &self.config
    }

    /// Feed URL for the configured channel.
    #[must_use]
    pub fn feed_url(&self) -> String {
        resolver::feed_url(&self.config.channel)
    }

    /// Fetch the feed and filter it.
    ///
    /// Fetch failures ([`FeedError::is_fetch_failure`]) are logged and treated
    /// as an empty feed, so callers see "no entries" whether the feed was empty
    /// or unreachable. Any other error is returned.
    pub async fn collect(&self) -> Result<Collected> {
        let feed_url = self.feed_url();
        tracing::info!(url = %feed_url, max_videos = self.config.max_videos, "Fetching feed");

        let (entries, fetch_error) = match self.fetcher.fetch(&feed_url).await {
            Ok(entries) => (entries, None),
            Err(e) if e.is_fetch_failure() => {
                tracing::warn!(url = %feed_url, error = %e, "Feed fetch failed, treating as empty");
                (Vec::new(), Some(e.to_string()))
            }
            Err(e) => return Err(e),
        };

        if entries.is_empty() && resolver::is_handle_url(&feed_url) {
            tracing::warn!(
                url = %feed_url,
                "No entries for handle; the canonical channel ID (UC...) may work"
            );
        }

        let filtered = filter_entries(&entries, self.config.max_videos);

        tracing::info!(
            fetched = entries.len(),
            kept = filtered.records.len(),
            shorts_skipped = filtered.shorts_skipped(),
            "Filtered feed"
        );

        Ok(Collected {
            feed_url,
            fetched: entries.len(),
            filtered,
            fetch_error,
        })
    }

    /// Write a snapshot of `records` to the configured output path.
    pub fn write_snapshot(&self, records: &[VideoRecord]) -> Result<Snapshot> {
        let snapshot = Snapshot::new(records.to_vec());
        snapshot.save(&self.config.output_path)?;
        Ok(snapshot)
    }

    /// Run the whole flow: collect, require content, write.
    ///
    /// Nothing is written when the feed yields no usable records.
    pub async fn run(&self) -> Result<Snapshot> {
        let collected = self.collect().await?;
        let records = collected.require_records()?;
        self.write_snapshot(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChannelIdentifier;
    use crate::feed::FeedEntry;
    use async_trait::async_trait;
    use std::path::PathBuf;

    struct StaticFeed(Vec<FeedEntry>);

    #[async_trait]
    impl FeedFetcher for StaticFeed {
        async fn fetch(&self, _url: &str) -> Result<Vec<FeedEntry>> {
            Ok(self.0.clone())
        }
    }

    struct FailingFeed;

    #[async_trait]
    impl FeedFetcher for FailingFeed {
        async fn fetch(&self, _url: &str) -> Result<Vec<FeedEntry>> {
            Err(FeedError::Parse("unexpected EOF".to_string()))
        }
    }

    struct BrokenFeed;

    #[async_trait]
    impl FeedFetcher for BrokenFeed {
        async fn fetch(&self, _url: &str) -> Result<Vec<FeedEntry>> {
            Err(FeedError::Io(std::io::Error::other("disk gone")))
        }
    }

    fn config(channel: ChannelIdentifier) -> FeedConfig {
        FeedConfig {
            channel,
            max_videos: 2,
            output_path: PathBuf::from("unused.json"),
        }
    }

    #[tokio::test]
    async fn test_fetch_error_becomes_empty() {
        let pipeline = Pipeline::new(
            config(ChannelIdentifier::ChannelId("UCabc123".to_string())),
            Arc::new(FailingFeed),
        );
        let collected = pipeline.collect().await.unwrap();

        assert_eq!(collected.fetched, 0);
        assert!(collected.records().is_empty());
        assert!(collected.fetch_error.is_some());
        assert!(!collected.suggests_channel_id());
        assert!(matches!(
            collected.require_records(),
            Err(FeedError::NoContent { .. })
        ));
    }

    #[tokio::test]
    async fn test_empty_handle_feed_suggests_channel_id() {
        let pipeline = Pipeline::new(
            config(ChannelIdentifier::Handle("@someuser".to_string())),
            Arc::new(StaticFeed(Vec::new())),
        );
        let collected = pipeline.collect().await.unwrap();

        assert_eq!(
            collected.feed_url,
            "https://www.youtube.com/feeds/videos.xml?user=someuser"
        );
        assert!(collected.suggests_channel_id());
        assert!(collected.fetch_error.is_none());
    }

    #[tokio::test]
    async fn test_collect_respects_limit() {
        let entries = (0..5)
            .map(|i| FeedEntry::new(format!("https://www.youtube.com/watch?v=v{i}")))
            .collect();
        let pipeline = Pipeline::new(
            config(ChannelIdentifier::ChannelId("UCabc123".to_string())),
            Arc::new(StaticFeed(entries)),
        );
        let collected = pipeline.collect().await.unwrap();

        assert_eq!(collected.fetched, 5);
        assert_eq!(collected.require_records().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_non_fetch_error_is_returned() {
        let pipeline = Pipeline::new(
            config(ChannelIdentifier::ChannelId("UCabc123".to_string())),
            Arc::new(BrokenFeed),
        );

        assert!(matches!(pipeline.collect().await, Err(FeedError::Io(_))));
        assert!(matches!(pipeline.run().await, Err(FeedError::Io(_))));
    }
}
