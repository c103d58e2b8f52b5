//! Explicit state of one interactive session

use crate::extractor::{DownloadOption, MediaInfo, MediaRequest};
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowStatus {
    Idle,
    Pending,
    Ready,
}

/// Point-in-time copy of the session state
#[derive(Debug, Clone)]
pub struct FlowSnapshot {
    pub status: FlowStatus,
    pub media: Option<MediaInfo>,
    pub selected: Option<String>,
    pub last_request: Option<MediaRequest>,
}

impl FlowSnapshot {
    pub fn selected_option(&self) -> Option<&DownloadOption> {
        let label = self.selected.as_deref()?;
        self.media.as_ref()?.find_option(label)
    }
}

/// Session state. Transitions are synchronous; timing lives in `MediaDownloader`.
#[derive(Debug)]
pub struct FlowState {
    media: Option<MediaInfo>,
    selected: Option<String>,
    in_flight: usize,
    last_request: Option<MediaRequest>,
    cancel_root: CancellationToken,
}

impl Default for FlowState {
    fn default() -> Self {
        Self::new()
    }
}

impl FlowState {
    pub fn new() -> Self {
        Self {
            media: None,
            selected: None,
            in_flight: 0,
            last_request: None,
            cancel_root: CancellationToken::new(),
        }
    }

    pub fn status(&self) -> FlowStatus {
        if self.in_flight > 0 {
            FlowStatus::Pending
        } else if self.media.is_some() {
            FlowStatus::Ready
        } else {
            FlowStatus::Idle
        }
    }

    pub fn media(&self) -> Option<&MediaInfo> {
        self.media.as_ref()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn last_request(&self) -> Option<&MediaRequest> {
        self.last_request.as_ref()
    }

    /// Token that every deferred callback of this session descends from
    pub fn cancel_root(&self) -> &CancellationToken {
        &self.cancel_root
    }

    /// Record an accepted submission
    pub fn begin_request(&mut self, request: MediaRequest) {
        self.in_flight += 1;
        self.last_request = Some(request);
    }

    /// Replace the current media and reset the selection to the first option
    pub fn resolve(&mut self, media: MediaInfo) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.selected = media.default_option().map(|o| o.quality_label.clone());
        self.media = Some(media);
    }

    /// A submission ended without producing media
    pub fn abandon(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    /// Select an option of the current media. Unknown labels are ignored.
    pub fn select(&mut self, quality_label: &str) -> bool {
        let exists = self
            .media
            .as_ref()
            .map(|m| m.find_option(quality_label).is_some())
            .unwrap_or(false);

        if exists {
            self.selected = Some(quality_label.to_string());
        }
        exists
    }

    /// Cancel every outstanding callback and start a fresh token tree
    pub fn reset_cancel_root(&mut self) -> CancellationToken {
        std::mem::replace(&mut self.cancel_root, CancellationToken::new())
    }

    pub fn snapshot(&self) -> FlowSnapshot {
        FlowSnapshot {
            status: self.status(),
            media: self.media.clone(),
            selected: self.selected.clone(),
            last_request: self.last_request.clone(),
        }
    }
}
