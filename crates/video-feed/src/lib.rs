//! Video feed crate for channel video snapshots.
//!
//! This crate provides:
//! - Channel identifier to feed URL resolution
//! - Feed fetching and Atom parsing
//! - Short-form video detection and entry normalization
//! - JSON snapshot storage for static site consumption
//! - The console run behind the `update-videos` binary

pub mod app;
pub mod config;
pub mod error;
pub mod feed;
pub mod filter;
pub mod pipeline;
pub mod resolver;
pub mod storage;

// Re-export main types
pub use config::{ChannelIdentifier, FeedConfig};
pub use error::{FeedError, Result};
pub use feed::{FeedClient, FeedEntry, FeedFetcher};
pub use filter::{FilterOutcome, VideoRecord};
pub use pipeline::{Collected, Pipeline};
pub use storage::Snapshot;
