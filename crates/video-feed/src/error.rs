//! Error types for the video feed pipeline.

use thiserror::Error;

/// Errors that can occur while building a video snapshot.
#[derive(Debug, Error)]
pub enum FeedError {
    /// No usable channel configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Feed endpoint answered with a non-success status
    #[error("HTTP {status} when fetching {url}")]
    Status { status: u16, url: String },

    /// Feed body could not be parsed
    #[error("Failed to parse feed: {0}")]
    Parse(String),

    /// Filtering produced zero usable records
    #[error("No videos found in feed {feed_url}")]
    NoContent { feed_url: String },

    /// Snapshot file could not be written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl FeedError {
    /// Whether the pipeline recovers from this error by treating the feed as empty.
    #[must_use]
    pub fn is_fetch_failure(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Status { .. } | Self::Parse(_))
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, FeedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_failures_are_recoverable() {
        assert!(FeedError::Parse("bad xml".to_string()).is_fetch_failure());
        assert!(FeedError::Status {
            status: 404,
            url: "https://example.com".to_string()
        }
        .is_fetch_failure());
        assert!(!FeedError::Configuration("missing".to_string()).is_fetch_failure());
        assert!(!FeedError::NoContent {
            feed_url: "https://example.com".to_string()
        }
        .is_fetch_failure());
    }
}
