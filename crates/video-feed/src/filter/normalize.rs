//! Feed entry to video record normalization.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::feed::FeedEntry;

/// Maximum description length, in characters, before truncation.
pub const DESCRIPTION_LIMIT: usize = 200;

/// Marker appended to truncated text.
pub const ELLIPSIS: &str = "...";

static VIDEO_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"watch\?v=([^&]+)").unwrap());

static MARKUP_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^<]+?>").unwrap());

/// A normalized video ready for the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoRecord {
    /// Video ID taken from the watch URL.
    pub id: String,
    /// Video title.
    pub title: String,
    /// Markup-free description, at most 200 characters plus ellipsis.
    pub description: String,
    /// Publication timestamp exactly as the feed reported it.
    pub published_at: String,
    /// High quality thumbnail URL.
    pub thumbnail: String,
    /// Embeddable player URL.
    pub embed_url: String,
    /// Short watch URL.
    pub watch_url: String,
}

impl VideoRecord {
    /// Normalize a feed entry. Returns `None` when no video ID can be extracted.
    #[must_use]
    pub fn from_entry(entry: &FeedEntry) -> Option<Self> {
        let id = extract_video_id(entry.link.as_deref()?)?;

        Some(Self {
            thumbnail: format!("https://i.ytimg.com/vi/{id}/hqdefault.jpg"),
            embed_url: format!("https://www.youtube.com/embed/{id}"),
            watch_url: format!("https://youtu.be/{id}"),
            title: entry.title_or_empty().to_string(),
            description: clean_description(entry.summary.as_deref().unwrap_or_default()),
            published_at: entry.timestamp().unwrap_or_default().to_string(),
            id,
        })
    }
}

/// Extract the video ID from a `watch?v=` URL.
#[must_use]
pub fn extract_video_id(url: &str) -> Option<String> {
    VIDEO_ID
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Strip markup tags and cap the description length.
#[must_use]
pub fn clean_description(raw: &str) -> String {
    let stripped = MARKUP_TAG.replace_all(raw, "");
    truncate_chars(&stripped, DESCRIPTION_LIMIT)
}

/// Truncate text to `max_chars`, respecting UTF-8 character boundaries.
#[must_use]
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &text[..cut]),
        None => text.to_string(),
    }
}
