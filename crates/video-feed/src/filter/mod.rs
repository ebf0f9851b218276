//! Entry filtering and normalization.
//!
//! Drops short-form entries and turns the rest into [`VideoRecord`]s.

mod classifier;
mod normalize;

pub use classifier::{is_short, short_signals, ShortSignal, MAX_SHORT_SECONDS, SHORTS_MARKER};
pub use normalize::{
    clean_description, extract_video_id, truncate_chars, VideoRecord, DESCRIPTION_LIMIT, ELLIPSIS,
};

use crate::feed::FeedEntry;

/// Result of filtering one feed.
#[derive(Debug, Clone, Default)]
pub struct FilterOutcome {
    /// Normalized records, in feed order.
    pub records: Vec<VideoRecord>,
    /// Titles of skipped short-form entries.
    pub skipped_shorts: Vec<String>,
}

impl FilterOutcome {
    /// Number of short-form entries skipped.
    #[must_use]
    pub fn shorts_skipped(&self) -> usize {
        self.skipped_shorts.len()
    }
}

/// Filter feed entries down to at most `max_videos` standard videos.
///
/// Iteration stops as soon as the limit is reached; later entries are never
/// classified. Entries without a video ID are dropped and not counted.
#[must_use]
pub fn filter_entries(entries: &[FeedEntry], max_videos: usize) -> FilterOutcome {
    let mut outcome = FilterOutcome::default();

    for entry in entries {
        if outcome.records.len() >= max_videos {
            break;
        }

        if is_short(entry) {
            let signals: Vec<String> = short_signals(entry)
                .iter()
                .map(ToString::to_string)
                .collect();
            tracing::debug!(
                title = entry.title_or_empty(),
                signals = %signals.join(","),
                "Skipping short"
            );
            outcome.skipped_shorts.push(entry.title_or_empty().to_string());
            continue;
        }

        let Some(record) = VideoRecord::from_entry(entry) else {
            tracing::debug!(link = ?entry.link, "Entry has no video id, dropping");
            continue;
        };

        outcome.records.push(record);
    }

    if outcome.shorts_skipped() > 0 {
        tracing::info!(skipped = outcome.shorts_skipped(), "Skipped shorts");
    }

    outcome
}
