//! Channel feed fetching module.
//!
//! Provides the HTTP client and Atom parser for channel video feeds.

mod client;
mod parser;
mod types;

pub use client::{FeedClient, FeedFetcher};
pub use parser::parse_feed;
pub use types::{FeedEntry, MediaContent};
