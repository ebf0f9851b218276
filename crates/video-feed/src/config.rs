//! Configuration for a snapshot run.

use std::path::PathBuf;

use crate::error::{FeedError, Result};

/// Environment variable holding the canonical channel ID.
pub const CHANNEL_ID_VAR: &str = "YOUTUBE_CHANNEL_ID";

/// Environment variable holding the channel handle.
pub const CHANNEL_USERNAME_VAR: &str = "YOUTUBE_CHANNEL_USERNAME";

/// Environment variable holding the maximum number of videos to keep.
pub const MAX_VIDEOS_VAR: &str = "MAX_RECENT_VIDEOS";

/// Default number of recent videos kept in the snapshot.
pub const DEFAULT_MAX_VIDEOS: usize = 2;

/// Default snapshot location, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "data/youtube.json";

/// Prefix shared by every canonical channel ID.
pub const CHANNEL_ID_PREFIX: &str = "UC";

/// A configured channel, either by canonical ID or by handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelIdentifier {
    /// Canonical `UC...` channel ID.
    ChannelId(String),
    /// User-facing handle, with or without the leading `@`.
    Handle(String),
}

impl ChannelIdentifier {
    /// Pick the identifier from the two optional settings.
    ///
    /// The channel ID wins when both are present. Blank values count as unset.
    pub fn from_settings(channel_id: Option<&str>, username: Option<&str>) -> Result<Self> {
        fn non_blank(v: Option<&str>) -> Option<&str> {
            v.map(str::trim).filter(|v| !v.is_empty())
        }

        if let Some(id) = non_blank(channel_id) {
            return Ok(Self::ChannelId(id.to_string()));
        }
        if let Some(handle) = non_blank(username) {
            return Ok(Self::Handle(handle.to_string()));
        }

        Err(FeedError::Configuration(format!(
            "no channel identifier configured (set {CHANNEL_ID_VAR} or {CHANNEL_USERNAME_VAR})"
        )))
    }

    /// The raw configured value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::ChannelId(v) | Self::Handle(v) => v,
        }
    }

    /// Label used in console output.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ChannelId(_) => "ID",
            Self::Handle(_) => "Username",
        }
    }
}

/// Settings for a single snapshot run.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// Channel whose feed is fetched.
    pub channel: ChannelIdentifier,
    /// Maximum number of videos in the snapshot.
    pub max_videos: usize,
    /// Where the snapshot is written.
    pub output_path: PathBuf,
}

impl FeedConfig {
    /// Build a validated configuration.
    pub fn new(
        channel_id: Option<&str>,
        username: Option<&str>,
        max_videos: usize,
        output_path: PathBuf,
    ) -> Result<Self> {
        let channel = ChannelIdentifier::from_settings(channel_id, username)?;

        if max_videos == 0 {
            return Err(FeedError::Configuration(format!(
                "{MAX_VIDEOS_VAR} must be at least 1"
            )));
        }

        Ok(Self {
            channel,
            max_videos,
            output_path,
        })
    }

    /// Create configuration from environment variables.
    ///
    /// # Required Environment Variables (one of)
    /// - `YOUTUBE_CHANNEL_ID`: canonical channel ID (`UC...`)
    /// - `YOUTUBE_CHANNEL_USERNAME`: channel handle (`@name`)
    ///
    /// # Optional Environment Variables
    /// - `MAX_RECENT_VIDEOS`: videos to keep (default: 2)
    pub fn from_env() -> Result<Self> {
        let channel_id = std::env::var(CHANNEL_ID_VAR).ok();
        let username = std::env::var(CHANNEL_USERNAME_VAR).ok();

        let max_videos = parse_max_videos(std::env::var(MAX_VIDEOS_VAR).ok().as_deref())?;

        Self::new(
            channel_id.as_deref(),
            username.as_deref(),
            max_videos,
            PathBuf::from(DEFAULT_OUTPUT_PATH),
        )
    }
}

/// Parse a raw `MAX_RECENT_VIDEOS` value. Unset or blank means the default.
pub fn parse_max_videos(raw: Option<&str>) -> Result<usize> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => v.parse().map_err(|_| {
            FeedError::Configuration(format!("{MAX_VIDEOS_VAR} is not a number: {v}"))
        }),
        None => Ok(DEFAULT_MAX_VIDEOS),
    }
}
