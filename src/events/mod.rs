//! Events surfaced by the request flow to the presentation layer

pub mod sink;

pub use sink::{EventSink, MemorySink};

use crate::extractor::{MediaType, Platform};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const INVALID_URL_MESSAGE: &str = "Please enter a valid YouTube or Instagram URL";

/// Events that describe outcomes of the request flow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FlowEvent {
    /// A submitted URL matched no supported platform
    InvalidUrl { message: String },
    /// A pending submission resolved
    MediaDetected {
        platform: Platform,
        media_type: MediaType,
    },
    /// A download was confirmed
    DownloadStarted {
        download_id: Uuid,
        title: String,
        quality_label: String,
    },
    /// Deferred completion of a confirmed download
    DownloadCompleted { download_id: Uuid },
}

/// How a notification should be rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationVariant {
    Default,
    Destructive,
}

/// User-facing rendering of a `FlowEvent`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: NotificationVariant,
}

impl FlowEvent {
    pub fn invalid_url() -> Self {
        FlowEvent::InvalidUrl {
            message: INVALID_URL_MESSAGE.to_string(),
        }
    }

    pub fn notification(&self) -> Notification {
        match self {
            FlowEvent::InvalidUrl { message } => Notification {
                title: "Invalid URL".to_string(),
                description: message.clone(),
                variant: NotificationVariant::Destructive,
            },
            FlowEvent::MediaDetected {
                platform,
                media_type,
            } => Notification {
                title: "Media detected!".to_string(),
                description: format!(
                    "Found {} {}. Choose your download options below.",
                    platform, media_type
                ),
                variant: NotificationVariant::Default,
            },
            FlowEvent::DownloadStarted {
                title,
                quality_label,
                ..
            } => Notification {
                title: "Download started!".to_string(),
                description: format!("Downloading {} in {} quality.", title, quality_label),
                variant: NotificationVariant::Default,
            },
            FlowEvent::DownloadCompleted { .. } => Notification {
                title: "Download complete!".to_string(),
                description: "Your file has been saved to your downloads folder.".to_string(),
                variant: NotificationVariant::Default,
            },
        }
    }
}
