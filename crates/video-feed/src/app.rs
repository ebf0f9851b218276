//! Console run of the snapshot pipeline, as driven by `update-videos`.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use colored::Colorize;

use crate::config::{parse_max_videos, FeedConfig};
use crate::error::FeedError;
use crate::feed::FeedFetcher;
use crate::filter::truncate_chars;
use crate::pipeline::Pipeline;
use crate::storage::Snapshot;

/// Exit status for any failed run.
pub const EXIT_FAILURE: u8 = 1;

const PREVIEW_CHARS: usize = 80;
const SKIP_TITLE_CHARS: usize = 50;

/// Raw run settings, as they arrive from flags, the environment or `.env`.
#[derive(Debug, Clone, Default)]
pub struct RunSettings {
    pub channel_id: Option<String>,
    pub channel_username: Option<String>,
    /// Unparsed so a bad value surfaces as a configuration error.
    pub max_videos: Option<String>,
    pub output_path: PathBuf,
}

impl RunSettings {
    /// Validate the settings into a [`FeedConfig`].
    pub fn into_config(self) -> crate::Result<FeedConfig> {
        let max_videos = parse_max_videos(self.max_videos.as_deref())?;
        FeedConfig::new(
            self.channel_id.as_deref(),
            self.channel_username.as_deref(),
            max_videos,
            self.output_path,
        )
    }
}

/// Run one snapshot update, printing progress to stdout.
///
/// `connect` builds the fetcher and is only called once the configuration is
/// valid, so a bad configuration never touches the network.
pub async fn run<F>(settings: RunSettings, connect: F) -> anyhow::Result<Snapshot>
where
    F: FnOnce() -> crate::Result<Arc<dyn FeedFetcher>>,
{
    println!("🎬 Updating recent YouTube videos via RSS feed...");
    println!("✨ No API key required\n");
    if let Ok(cwd) = std::env::current_dir() {
        println!("📁 Working directory: {}", cwd.display());
    }

    let config = settings.into_config()?;

    println!(
        "📺 Channel ({}): {}",
        config.channel.kind(),
        config.channel.as_str()
    );
    println!("🔍 Fetching the latest {} videos...\n", config.max_videos);

    let pipeline = Pipeline::new(config, connect()?);

    println!("🔍 Fetching RSS feed: {}", pipeline.feed_url());
    let collected = pipeline.collect().await?;

    if let Some(err) = &collected.fetch_error {
        println!("❌ Error fetching RSS feed: {err}");
    }

    for title in &collected.filtered.skipped_shorts {
        println!("⏭️  Skipping Short: {}", truncate_chars(title, SKIP_TITLE_CHARS));
    }
    if collected.filtered.shorts_skipped() > 0 {
        println!("📊 {} Short(s) skipped", collected.filtered.shorts_skipped());
    }

    if collected.suggests_channel_id() {
        println!("⚠️  No videos found for {}", collected.feed_url);
        println!("💡 Tip: try the full channel ID (starts with UC)");
    }

    let records = collected.require_records()?;

    println!("{}", format!("✅ {} video(s) found:", records.len()).green());
    for (i, video) in records.iter().enumerate() {
        println!("\n  {}. {}", i + 1, video.title);
        println!("     📅 {}", video.published_at);
        println!("     🔗 {}", video.watch_url);
        if !video.description.is_empty() {
            println!("     📝 {}", truncate_chars(&video.description, PREVIEW_CHARS));
        }
    }

    let output = pipeline.config().output_path.clone();
    println!("\n💾 Saving to {}...", output.display());
    let snapshot = pipeline
        .write_snapshot(records)
        .with_context(|| format!("writing snapshot to {}", output.display()))?;
    println!("✅ File updated: {}", output.display());

    println!("\n{}", "✨ Update completed successfully!".green().bold());
    println!("📊 Total videos: {}", snapshot.total_videos);
    println!("📁 File: {}", output.display());
    println!("🔄 Method: RSS feed ({})", snapshot.source);

    Ok(snapshot)
}

/// Exit status for a finished run. Failures get their remediation text printed.
pub fn exit_status(result: &anyhow::Result<Snapshot>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(e) => {
            report_failure(e);
            EXIT_FAILURE
        }
    }
}

fn report_failure(err: &anyhow::Error) {
    match err.downcast_ref::<FeedError>() {
        Some(FeedError::Configuration(msg)) => {
            eprintln!("{} {msg}", "❌ Configuration error:".red().bold());
            eprintln!("\nAdd one of the following variables to your .env file:");
            eprintln!("  YOUTUBE_CHANNEL_ID=UC... (full channel ID)");
            eprintln!("  YOUTUBE_CHANNEL_USERNAME=@yourhandle (your handle)");
            eprintln!("\n💡 How to find the channel ID:");
            eprintln!("1. Open your channel and click 'Customize channel'");
            eprintln!("2. The ID is in the URL: youtube.com/channel/YOUR_CHANNEL_ID");
            eprintln!("3. Copy the ID that starts with 'UC'");
            eprintln!("\n💡 Or use your @handle");
        }
        Some(FeedError::NoContent { feed_url }) => {
            eprintln!("\n{}", "❌ No videos found.".red().bold());
            eprintln!("   Feed: {feed_url}");
            eprintln!("\n💡 Possible fixes:");
            eprintln!("1. Check that the channel ID is correct");
            eprintln!("2. If you are using a username, try the full channel ID");
            eprintln!("3. Check that the channel has public videos");
        }
        _ => {
            eprintln!("{} {err:#}", "❌ Error:".red().bold());
        }
    }
}
