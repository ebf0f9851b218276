//! Short-form video detection.

use std::fmt;

use crate::feed::FeedEntry;

/// Path segment used by short-form video URLs.
pub const SHORTS_MARKER: &str = "/shorts/";

/// Longest duration, in seconds, still considered short-form.
pub const MAX_SHORT_SECONDS: i64 = 60;

/// A signal that marks an entry as short-form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShortSignal {
    /// Primary link points at a shorts URL.
    PrimaryLink,
    /// One of the alternate links points at a shorts URL.
    AlternateLink,
    /// Title starts with a hashtag.
    HashtagTitle,
    /// A media duration hint is at most 60 seconds.
    Duration,
}

impl fmt::Display for ShortSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ShortSignal::PrimaryLink => "primary_link",
            ShortSignal::AlternateLink => "alternate_link",
            ShortSignal::HashtagTitle => "hashtag_title",
            ShortSignal::Duration => "duration",
        };
        write!(f, "{s}")
    }
}

/// Every short-form signal the entry carries.
#[must_use]
pub fn short_signals(entry: &FeedEntry) -> Vec<ShortSignal> {
    let checks = [
        (ShortSignal::PrimaryLink, primary_link_is_short(entry)),
        (ShortSignal::AlternateLink, alternate_link_is_short(entry)),
        (ShortSignal::HashtagTitle, title_is_hashtag(entry)),
        (ShortSignal::Duration, duration_is_short(entry)),
    ];

    checks
        .into_iter()
        .filter_map(|(signal, hit)| hit.then_some(signal))
        .collect()
}

/// Whether the entry is a short-form video. Any single signal is enough.
#[must_use]
pub fn is_short(entry: &FeedEntry) -> bool {
    primary_link_is_short(entry)
        || alternate_link_is_short(entry)
        || title_is_hashtag(entry)
        || duration_is_short(entry)
}

fn primary_link_is_short(entry: &FeedEntry) -> bool {
    entry
        .link
        .as_deref()
        .is_some_and(|link| link.contains(SHORTS_MARKER))
}

fn alternate_link_is_short(entry: &FeedEntry) -> bool {
    entry.links.iter().any(|link| link.contains(SHORTS_MARKER))
}

fn title_is_hashtag(entry: &FeedEntry) -> bool {
    entry.title_or_empty().starts_with('#')
}

// Missing or unparsable hints contribute nothing.
fn duration_is_short(entry: &FeedEntry) -> bool {
    entry
        .media
        .iter()
        .filter_map(|m| m.duration.as_deref())
        .filter_map(|raw| raw.trim().parse::<i64>().ok())
        .any(|seconds| seconds <= MAX_SHORT_SECONDS)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WATCH: &str = "https://www.youtube.com/watch?v=abc";

    #[test]
    fn test_standard_entry() {
        let entry = FeedEntry::new(WATCH).with_title("Regular upload");
        assert!(!is_short(&entry));
        assert!(short_signals(&entry).is_empty());
    }

    #[test]
    fn test_primary_link_marker() {
        let entry = FeedEntry::new("https://www.youtube.com/shorts/abc").with_title("Clip");
        assert!(is_short(&entry));
        assert!(short_signals(&entry).contains(&ShortSignal::PrimaryLink));
    }

    #[test]
    fn test_alternate_link_marker() {
        let entry = FeedEntry::new(WATCH)
            .with_title("Clip")
            .with_link("https://www.youtube.com/shorts/abc");
        assert!(is_short(&entry));
        assert_eq!(short_signals(&entry), vec![ShortSignal::AlternateLink]);
    }

    #[test]
    fn test_hashtag_title() {
        let entry = FeedEntry::new(WATCH).with_title("#shorts funny moment");
        assert!(is_short(&entry));
        assert_eq!(short_signals(&entry), vec![ShortSignal::HashtagTitle]);

        let entry = FeedEntry::new(WATCH).with_title("Talking about #rust");
        assert!(!is_short(&entry));
    }

    #[test]
    fn test_duration_threshold() {
        let at_limit = FeedEntry::new(WATCH).with_title("A").with_duration("60");
        assert!(is_short(&at_limit));

        let over_limit = FeedEntry::new(WATCH).with_title("A").with_duration("61");
        assert!(!is_short(&over_limit));

        let padded = FeedEntry::new(WATCH).with_title("A").with_duration(" 30 ");
        assert!(is_short(&padded));
    }

    #[test]
    fn test_unparsable_duration_is_ignored() {
        let entry = FeedEntry::new(WATCH)
            .with_title("A")
            .with_duration("PT45S")
            .with_duration("");
        assert!(!is_short(&entry));

        // A later valid hint still counts.
        let entry = entry.with_duration("15");
        assert!(is_short(&entry));
    }

    #[test]
    fn test_signals_are_independent() {
        let entry = FeedEntry::new("https://www.youtube.com/shorts/abc")
            .with_title("#tag")
            .with_duration("10");
        let signals = short_signals(&entry);
        assert_eq!(
            signals,
            vec![
                ShortSignal::PrimaryLink,
                ShortSignal::AlternateLink,
                ShortSignal::HashtagTitle,
                ShortSignal::Duration,
            ]
        );
    }

    #[test]
    fn test_signal_display() {
        assert_eq!(ShortSignal::PrimaryLink.to_string(), "primary_link");
        assert_eq!(ShortSignal::Duration.to_string(), "duration");
    }
}
