//! Channel identifier to feed URL mapping.

use crate::config::{ChannelIdentifier, CHANNEL_ID_PREFIX};

const FEED_BASE: &str = "https://www.youtube.com/feeds/videos.xml";

/// Build the feed URL for a channel.
///
/// Identifiers starting with `UC` use the `channel_id` query form; anything
/// else is treated as a handle, stripped of its `@` marker, and uses `user`.
#[must_use]
pub fn feed_url(channel: &ChannelIdentifier) -> String {
    let raw = channel.as_str();
    let url = if raw.starts_with(CHANNEL_ID_PREFIX) {
        format!("{FEED_BASE}?channel_id={raw}")
    } else {
        format!("{FEED_BASE}?user={}", raw.trim_start_matches('@'))
    };

    tracing::info!(url = %url, "Resolved feed URL");
    url
}

/// Whether the resolved URL uses the handle (`user=`) form.
#[must_use]
pub fn is_handle_url(url: &str) -> bool {
    url.contains("?user=")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_id_form() {
        let url = feed_url(&ChannelIdentifier::ChannelId("UCabc123".to_string()));
        assert_eq!(
            url,
            "https://www.youtube.com/feeds/videos.xml?channel_id=UCabc123"
        );
        assert!(!is_handle_url(&url));
    }

    #[test]
    fn test_handle_form_strips_marker() {
        let url = feed_url(&ChannelIdentifier::Handle("@someuser".to_string()));
        assert_eq!(url, "https://www.youtube.com/feeds/videos.xml?user=someuser");
        assert!(is_handle_url(&url));
    }

    #[test]
    fn test_prefix_decides_form_not_variant() {
        // A UC-looking value supplied as a handle still maps to the ID form.
        let url = feed_url(&ChannelIdentifier::Handle("UCxyz".to_string()));
        assert!(url.ends_with("?channel_id=UCxyz"));

        let url = feed_url(&ChannelIdentifier::ChannelId("someuser".to_string()));
        assert!(url.ends_with("?user=someuser"));
    }
}
