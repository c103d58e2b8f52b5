use super::messages::FlowCommand;
use crate::events::FlowEvent;
use crate::flow::MediaDownloader;
use crate::utils::config::AppSettings;
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

pub struct FlowActor {
    receiver: mpsc::Receiver<FlowCommand>,
    downloader: MediaDownloader,
}

impl FlowActor {
    pub fn new(downloader: MediaDownloader, receiver: mpsc::Receiver<FlowCommand>) -> Self {
        Self {
            receiver,
            downloader,
        }
    }

    /// Start an actor on the current runtime.
    ///
    /// Returns the command sender, the event receiver for the presentation
    /// layer, and the actor's join handle.
    pub fn spawn(
        settings: AppSettings,
    ) -> (
        mpsc::Sender<FlowCommand>,
        mpsc::Receiver<FlowEvent>,
        JoinHandle<()>,
    ) {
        let settings = settings.normalized();
        let (command_tx, command_rx) = mpsc::channel(settings.event_buffer);
        let (event_tx, event_rx) = mpsc::channel(settings.event_buffer);

        let downloader = MediaDownloader::new(settings, Arc::new(event_tx));
        let actor = Self::new(downloader, command_rx);
        let handle = tokio::spawn(actor.run());

        (command_tx, event_rx, handle)
    }

    pub async fn run(mut self) {
        info!("FlowActor started");

        while let Some(cmd) = self.receiver.recv().await {
            match cmd {
                FlowCommand::Submit { url } => {
                    // Outcomes arrive through the event sink
                    if let Err(e) = self.downloader.submit_request(&url).await {
                        debug!("Submission rejected: {}", e);
                    }
                }
                FlowCommand::SelectOption(label) => {
                    self.downloader.select_option(&label).await;
                }
                FlowCommand::ConfirmDownload => {
                    if self.downloader.confirm_download().await.is_none() {
                        debug!("Confirm ignored, nothing selected");
                    }
                }
                FlowCommand::CancelPending => {
                    self.downloader.cancel_all().await;
                }
                FlowCommand::Snapshot(reply) => {
                    let _ = reply.send(self.downloader.snapshot().await);
                }
                FlowCommand::Shutdown => {
                    info!("FlowActor shutting down");
                    break;
                }
            }
        }
    }
}
