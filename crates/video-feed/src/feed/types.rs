//! Feed data types.

/// A raw feed entry as read from the channel feed.
///
/// Every field is optional because feeds routinely omit some of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedEntry {
    /// Primary (alternate) link to the video page.
    pub link: Option<String>,
    /// Every link href found on the entry.
    pub links: Vec<String>,
    /// Entry title.
    pub title: Option<String>,
    /// Publication timestamp, verbatim.
    pub published: Option<String>,
    /// Last update timestamp, verbatim.
    pub updated: Option<String>,
    /// Summary or media description, may contain markup.
    pub summary: Option<String>,
    /// Media items attached to the entry.
    pub media: Vec<MediaContent>,
}

impl FeedEntry {
    /// Create an entry with just a primary link.
    #[must_use]
    pub fn new(link: impl Into<String>) -> Self {
        let link = link.into();
        Self {
            links: vec![link.clone()],
            link: Some(link),
            ..Self::default()
        }
    }

    /// Set the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the summary.
    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Set the published timestamp.
    #[must_use]
    pub fn with_published(mut self, published: impl Into<String>) -> Self {
        self.published = Some(published.into());
        self
    }

    /// Set the updated timestamp.
    #[must_use]
    pub fn with_updated(mut self, updated: impl Into<String>) -> Self {
        self.updated = Some(updated.into());
        self
    }

    /// Add an alternate link.
    #[must_use]
    pub fn with_link(mut self, href: impl Into<String>) -> Self {
        self.links.push(href.into());
        self
    }

    /// Add a media item carrying a duration hint.
    #[must_use]
    pub fn with_duration(mut self, duration: impl Into<String>) -> Self {
        self.media.push(MediaContent {
            duration: Some(duration.into()),
        });
        self
    }

    /// Title or an empty string.
    #[must_use]
    pub fn title_or_empty(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    /// Published timestamp, falling back to the updated one.
    #[must_use]
    pub fn timestamp(&self) -> Option<&str> {
        self.published.as_deref().or(self.updated.as_deref())
    }
}

/// A media item from the entry's media group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaContent {
    /// Raw duration hint in seconds, unparsed.
    pub duration: Option<String>,
}
