//! Data structures for media information

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use uuid::Uuid;

/// Origin service of a submitted URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    YouTube,
    Instagram,
    Unknown,
}

impl Platform {
    /// Classify a URL by substring matching.
    ///
    /// YouTube is checked before Instagram. No normalization is applied, so
    /// matching is case-sensitive and whitespace or scheme are left as-is.
    pub fn from_url(url: &str) -> Self {
        if url.contains("youtube.com") || url.contains("youtu.be") {
            return Platform::YouTube;
        }
        if url.contains("instagram.com") {
            return Platform::Instagram;
        }
        Platform::Unknown
    }

    /// Platforms the flow can detect, in classification order
    pub fn supported() -> &'static [Platform] {
        &[Platform::YouTube, Platform::Instagram]
    }

    pub fn is_known(&self) -> bool {
        *self != Platform::Unknown
    }

    /// Lowercase tag, as used in notifications
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::YouTube => "youtube",
            Platform::Instagram => "instagram",
            Platform::Unknown => "unknown",
        }
    }

    /// Get string representation for display
    pub fn display_name(&self) -> &'static str {
        match self {
            Platform::YouTube => "YouTube",
            Platform::Instagram => "Instagram",
            Platform::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shape of the referenced content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Video,
    Image,
    Carousel,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Video => "video",
            MediaType::Image => "image",
            MediaType::Carousel => "carousel",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MediaType::Video => "Video",
            MediaType::Image => "Image",
            MediaType::Carousel => "Carousel",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Affordance shown next to a download option, derived from its format tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatKind {
    Video,
    Audio,
    Image,
    Other,
}

impl FormatKind {
    pub fn from_format(format: &str) -> Self {
        match format {
            "MP4" => FormatKind::Video,
            "MP3" => FormatKind::Audio,
            "JPG" => FormatKind::Image,
            _ => FormatKind::Other,
        }
    }
}

/// One selectable quality/format/size combination
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadOption {
    /// Selection key, unique within one `MediaInfo`
    pub quality_label: String,
    pub format: String,
    /// Display only, not a byte count
    pub size_label: String,
}

impl DownloadOption {
    pub fn new(quality_label: &str, format: &str, size_label: &str) -> Self {
        Self {
            quality_label: quality_label.to_string(),
            format: format.to_string(),
            size_label: size_label.to_string(),
        }
    }

    pub fn kind(&self) -> FormatKind {
        FormatKind::from_format(&self.format)
    }
}

/// Media information structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaInfo {
    pub id: String,
    pub title: String,
    pub thumbnail_url: String,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub views: Option<String>,
    pub platform: Platform,
    pub media_type: MediaType,
    /// Ordered; the first entry is the default selection
    pub download_options: Vec<DownloadOption>,
}

impl MediaInfo {
    pub fn default_option(&self) -> Option<&DownloadOption> {
        self.download_options.first()
    }

    pub fn find_option(&self, quality_label: &str) -> Option<&DownloadOption> {
        self.download_options
            .iter()
            .find(|o| o.quality_label == quality_label)
    }

    /// Check that options are non-empty and their labels unique
    pub fn validate(&self) -> Result<(), String> {
        if self.download_options.is_empty() {
            return Err(format!("media {} has no download options", self.id));
        }

        let mut seen = HashSet::new();
        for option in &self.download_options {
            if !seen.insert(option.quality_label.as_str()) {
                return Err(format!(
                    "media {} has duplicate quality label {}",
                    self.id, option.quality_label
                ));
            }
        }

        Ok(())
    }
}

/// An accepted submission
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaRequest {
    pub id: Uuid,
    pub url: String,
    pub platform: Platform,
    pub submitted_at: DateTime<Utc>,
}

impl MediaRequest {
    pub fn new(url: &str, platform: Platform) -> Self {
        Self {
            id: Uuid::new_v4(),
            url: url.to_string(),
            platform,
            submitted_at: Utc::now(),
        }
    }
}
