//! Medialoader - simulated social media downloader
//!
//! Headless front end for the media request flow: submits a URL, shows the
//! detected download options, and runs a simulated download.

use anyhow::{bail, Result};
use clap::Parser;
use medialoader::backend::{FlowActor, FlowCommand};
use medialoader::events::FlowEvent;
use medialoader::extractor::{FormatKind, Platform};
use medialoader::utils::{self, AppSettings, MedialoaderError};
use std::path::PathBuf;
use tokio::sync::{mpsc, oneshot};
use tracing::{warn, Level};

#[derive(Parser)]
#[command(name = "medialoader", about = "Fetch and download YouTube or Instagram media")]
struct Args {
    /// Media URL to fetch
    #[arg(long)]
    url: String,

    /// Quality label to download instead of the default option
    #[arg(long)]
    quality: Option<String>,

    /// Stop after showing the download options
    #[arg(long)]
    no_download: bool,

    /// Settings file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    let settings = match &args.config {
        Some(path) => AppSettings::load(path)?,
        None => AppSettings::load_or_default(&utils::default_settings_path())?,
    };

    if args.url.trim().is_empty() {
        bail!(MedialoaderError::EmptyUrl);
    }

    // Every callback runs on one event queue
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    rt.block_on(run_flow(args, settings))
}

async fn run_flow(args: Args, settings: AppSettings) -> Result<()> {
    println!(
        "Supported: {}",
        Platform::supported()
            .iter()
            .map(|p| p.display_name())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!("Fetching {}...", args.url);

    let (commands, mut events, handle) = FlowActor::spawn(settings);
    commands
        .send(FlowCommand::Submit {
            url: args.url.clone(),
        })
        .await?;

    let mut outcome = Ok(());
    while let Some(event) = events.recv().await {
        let notification = event.notification();
        println!("{}: {}", notification.title, notification.description);

        match event {
            FlowEvent::InvalidUrl { .. } => {
                outcome = Err(MedialoaderError::InvalidUrl(args.url.clone()).into());
                break;
            }
            FlowEvent::MediaDetected { .. } => {
                if let Some(quality) = &args.quality {
                    commands
                        .send(FlowCommand::SelectOption(quality.clone()))
                        .await?;
                }
                let selected = print_options(&commands).await?;
                if let Some(quality) = &args.quality {
                    if selected.as_deref() != Some(quality.as_str()) {
                        warn!("No option named {}, keeping {:?}", quality, selected);
                    }
                }

                if args.no_download {
                    break;
                }
                commands.send(FlowCommand::ConfirmDownload).await?;
            }
            FlowEvent::DownloadStarted { .. } => {}
            FlowEvent::DownloadCompleted { .. } => break,
        }
    }

    commands.send(FlowCommand::Shutdown).await?;
    handle.await?;
    outcome
}

/// Print the current media and its options, returning the selected label
async fn print_options(commands: &mpsc::Sender<FlowCommand>) -> Result<Option<String>> {
    let (tx, rx) = oneshot::channel();
    commands.send(FlowCommand::Snapshot(tx)).await?;
    let snapshot = rx.await?;

    let Some(media) = &snapshot.media else {
        return Ok(None);
    };

    println!();
    println!(
        "{} [{} {}]",
        media.title,
        media.platform.display_name(),
        media.media_type.display_name()
    );
    if let Some(duration) = &media.duration {
        println!("Duration: {}", duration);
    }
    if let Some(views) = &media.views {
        println!("{}", views);
    }

    println!("Choose Quality:");
    for option in &media.download_options {
        let marker = if snapshot.selected.as_deref() == Some(option.quality_label.as_str()) {
            "*"
        } else {
            " "
        };
        let kind = match option.kind() {
            FormatKind::Video => "video",
            FormatKind::Audio => "audio",
            FormatKind::Image => "image",
            FormatKind::Other => "file",
        };
        println!(
            " {} {:<12} {:<4} {:>8}  ({})",
            marker, option.quality_label, option.format, option.size_label, kind
        );
    }
    println!();

    Ok(snapshot.selected.clone())
}
