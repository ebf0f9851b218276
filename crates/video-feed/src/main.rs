//! update-videos CLI - refreshes the recent videos snapshot from a channel feed.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use video_feed::app::{self, RunSettings};
use video_feed::config::DEFAULT_OUTPUT_PATH;
use video_feed::{FeedClient, FeedFetcher};

/// Fetch a channel's video feed, drop Shorts, and write a JSON snapshot.
#[derive(Parser)]
#[command(name = "update-videos")]
#[command(about = "Update the recent videos snapshot from a YouTube channel feed")]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Canonical channel ID (starts with UC); wins over the username
    #[arg(long, env = "YOUTUBE_CHANNEL_ID")]
    channel_id: Option<String>,

    /// Channel handle, e.g. @name
    #[arg(long, env = "YOUTUBE_CHANNEL_USERNAME")]
    channel_username: Option<String>,

    /// Number of recent videos to keep [default: 2]
    #[arg(long, env = "MAX_RECENT_VIDEOS")]
    max_videos: Option<String>,

    /// Snapshot output path
    #[arg(long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    // .env values only fill variables that are not already set.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("video_feed=debug,update_videos=debug,info")
    } else {
        EnvFilter::new("video_feed=info,warn")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let settings = RunSettings {
        channel_id: cli.channel_id,
        channel_username: cli.channel_username,
        max_videos: cli.max_videos,
        output_path: cli.output,
    };

    let result = app::run(settings, || {
        Ok(Arc::new(FeedClient::new()?) as Arc<dyn FeedFetcher>)
    })
    .await;

    ExitCode::from(app::exit_status(&result))
}
