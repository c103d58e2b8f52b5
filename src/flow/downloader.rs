//! Media request flow
//!
//! Accepts a URL, classifies it, and after a simulated delay offers the
//! platform's download options. Confirming a download reports "started"
//! immediately and "completed" after a second delay. No bytes move.

use crate::events::{EventSink, FlowEvent};
use crate::extractor::{DownloadOption, ExtractorRegistry, MediaInfo, MediaRequest};
use crate::flow::deferred::Deferred;
use crate::flow::state::{FlowSnapshot, FlowState, FlowStatus};
use crate::utils::config::AppSettings;
use crate::utils::error::MedialoaderError;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Outcome of a submission once its delay elapses
pub type PendingMedia = Deferred<Result<MediaInfo, MedialoaderError>>;

pub struct MediaDownloader {
    state: Arc<Mutex<FlowState>>,
    registry: Arc<ExtractorRegistry>,
    sink: Arc<dyn EventSink>,
    settings: AppSettings,
}

impl MediaDownloader {
    /// Create a flow backed by the default extractor registry
    pub fn new(settings: AppSettings, sink: Arc<dyn EventSink>) -> Self {
        Self::with_registry(settings, ExtractorRegistry::default(), sink)
    }

    pub fn with_registry(
        settings: AppSettings,
        registry: ExtractorRegistry,
        sink: Arc<dyn EventSink>,
    ) -> Self {
        Self {
            state: Arc::new(Mutex::new(FlowState::new())),
            registry: Arc::new(registry),
            sink,
            settings,
        }
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// Submit a URL.
    ///
    /// Unrecognized URLs fail immediately and leave the state untouched.
    /// Accepted URLs resolve after `detect_delay`; overlapping submissions
    /// are not de-duplicated and the last one to resolve wins.
    pub async fn submit_request(&self, url: &str) -> Result<PendingMedia, MedialoaderError> {
        if url.trim().is_empty() {
            debug!("Ignoring empty URL submission");
            return Err(MedialoaderError::EmptyUrl);
        }

        let platform = self.registry.classify(url);
        if !platform.is_known() {
            warn!("Rejected URL with no supported platform: {}", url);
            self.sink.emit(FlowEvent::invalid_url()).await;
            return Err(MedialoaderError::InvalidUrl(url.to_string()));
        }

        let request = MediaRequest::new(url, platform);
        let parent = {
            let mut state = self.state.lock().await;
            state.begin_request(request.clone());
            state.cancel_root().clone()
        };

        info!(
            "Submitted request {} ({}), resolving in {:?}",
            request.id,
            platform,
            self.settings.detect_delay()
        );

        let on_fire = {
            let state = self.state.clone();
            let registry = self.registry.clone();
            let sink = self.sink.clone();
            let request = request.clone();
            move || async move {
                let result = registry.extract_info(&request.url).await;
                match result {
                    Ok(media) => {
                        let event = FlowEvent::MediaDetected {
                            platform: media.platform,
                            media_type: media.media_type,
                        };
                        state.lock().await.resolve(media.clone());
                        info!("Request {} ready: {}", request.id, media.title);
                        sink.emit(event).await;
                        Ok(media)
                    }
                    Err(e) => {
                        state.lock().await.abandon();
                        warn!("Request {} failed: {}", request.id, e);
                        Err(MedialoaderError::ExtractionError(e.to_string()))
                    }
                }
            }
        };

        let on_cancel = {
            let state = self.state.clone();
            let request_id = request.id;
            move || async move {
                state.lock().await.abandon();
                debug!("Request {} cancelled", request_id);
            }
        };

        Ok(Deferred::schedule_or_else(
            self.settings.detect_delay(),
            &parent,
            on_fire,
            on_cancel,
        ))
    }

    /// Select a download option of the current media.
    ///
    /// Returns `false` without side effects when there is no media or the
    /// label is not one of its options.
    pub async fn select_option(&self, quality_label: &str) -> bool {
        let selected = self.state.lock().await.select(quality_label);
        if selected {
            debug!("Selected option {}", quality_label);
        } else {
            debug!("Ignoring selection of unknown option {}", quality_label);
        }
        selected
    }

    /// Start a simulated download of the selected option.
    ///
    /// `DownloadStarted` is emitted before this returns; `DownloadCompleted`
    /// follows after `download_delay`. Returns `None` when nothing is
    /// selected.
    pub async fn confirm_download(&self) -> Option<Deferred<()>> {
        let (title, quality_label, parent) = {
            let state = self.state.lock().await;
            let media = state.media()?;
            let selected = state.selected()?;
            (
                media.title.clone(),
                selected.to_string(),
                state.cancel_root().clone(),
            )
        };

        let download_id = Uuid::new_v4();
        info!(
            "Download {} started: {} ({})",
            download_id, title, quality_label
        );

        self.sink
            .emit(FlowEvent::DownloadStarted {
                download_id,
                title,
                quality_label,
            })
            .await;

        let sink = self.sink.clone();
        Some(Deferred::schedule(
            self.settings.download_delay(),
            &parent,
            move || async move {
                info!("Download {} complete", download_id);
                sink.emit(FlowEvent::DownloadCompleted { download_id }).await;
            },
        ))
    }

    /// Cancel every outstanding submission and download
    pub async fn cancel_all(&self) {
        let old = self.state.lock().await.reset_cancel_root();
        old.cancel();
        info!("Cancelled pending callbacks");
    }

    pub async fn status(&self) -> FlowStatus {
        self.state.lock().await.status()
    }

    pub async fn snapshot(&self) -> FlowSnapshot {
        self.state.lock().await.snapshot()
    }

    pub async fn selected_option(&self) -> Option<DownloadOption> {
        self.snapshot().await.selected_option().cloned()
    }
}
