//! JSON snapshot of the most recent videos.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::filter::VideoRecord;

/// Tag identifying how the snapshot was generated.
pub const SNAPSHOT_SOURCE: &str = "rss_feed";

/// The snapshot written for downstream consumers.
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Most recent videos, newest first.
    pub recent_videos: Vec<VideoRecord>,
    /// When this snapshot was generated.
    pub last_updated: DateTime<Utc>,
    /// Always equal to `recent_videos.len()`.
    pub total_videos: usize,
    /// Generation method.
    pub source: String,
}

impl Snapshot {
    /// Build a snapshot stamped with the current time.
    #[must_use]
    pub fn new(recent_videos: Vec<VideoRecord>) -> Self {
        Self {
            total_videos: recent_videos.len(),
            recent_videos,
            last_updated: Utc::now(),
            source: SNAPSHOT_SOURCE.to_string(),
        }
    }

    /// Load a snapshot from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let snapshot: Self = serde_json::from_str(&content)?;
        Ok(snapshot)
    }

    /// Save the snapshot, replacing whatever is at `path`.
    ///
    /// The JSON is written to a sibling temp file and renamed into place, so
    /// readers see either the old snapshot or the complete new one.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let tmp = temp_path(path);
        std::fs::write(&tmp, content)?;
        if let Err(e) = std::fs::rename(&tmp, path) {
            let _ = std::fs::remove_file(&tmp);
            return Err(e.into());
        }

        tracing::info!(path = %path.display(), total = self.total_videos, "Wrote snapshot");
        Ok(())
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(std::ffi::OsStr::to_os_string)
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, title: &str) -> VideoRecord {
        VideoRecord {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            published_at: "2024-05-01T12:00:00+00:00".to_string(),
            thumbnail: format!("https://i.ytimg.com/vi/{id}/hqdefault.jpg"),
            embed_url: format!("https://www.youtube.com/embed/{id}"),
            watch_url: format!("https://youtu.be/{id}"),
        }
    }

    #[test]
    fn test_new_counts_records() {
        let snapshot = Snapshot::new(vec![record("a", "A"), record("b", "B")]);
        assert_eq!(snapshot.total_videos, 2);
        assert_eq!(snapshot.source, SNAPSHOT_SOURCE);
    }

    #[test]
    fn test_save_creates_parents_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/data/youtube.json");

        let snapshot = Snapshot::new(vec![record("a", "Vídeo novo ✨")]);
        snapshot.save(&path).unwrap();

        let loaded = Snapshot::load(&path).unwrap();
        assert_eq!(loaded.total_videos, loaded.recent_videos.len());
        assert_eq!(loaded, snapshot);
        assert!(!temp_path(&path).exists());
    }

    #[test]
    fn test_json_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("youtube.json");
        Snapshot::new(vec![record("a", "Vídeo novo ✨")]).save(&path).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        // Non-ASCII text is kept as-is, not escaped.
        assert!(raw.contains("Vídeo novo ✨"));
        // Two-space indentation.
        assert!(raw.contains("\n  \"recent_videos\": ["));

        let keys = ["recent_videos", "last_updated", "total_videos", "source"];
        let positions: Vec<_> = keys
            .iter()
            .map(|k| raw.find(&format!("\"{k}\"")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_save_overwrites_previous() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("youtube.json");

        Snapshot::new(vec![record("a", "A"), record("b", "B")]).save(&path).unwrap();
        Snapshot::new(vec![record("c", "C")]).save(&path).unwrap();

        let loaded = Snapshot::load(&path).unwrap();
        assert_eq!(loaded.total_videos, 1);
        assert_eq!(loaded.recent_videos[0].id, "c");
    }
}
