//! Application configuration

use crate::utils::error::MedialoaderError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Simulated latency between submitting a URL and media being detected
    pub detect_delay_ms: u64,

    /// Simulated latency between a download starting and completing
    pub download_delay_ms: u64,

    /// Capacity of the event channel handed to the presentation layer
    pub event_buffer: usize,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            detect_delay_ms: 2000,
            download_delay_ms: 3000,
            event_buffer: 100,
        }
    }
}

impl AppSettings {
    /// Read settings from a JSON file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> Result<Self, MedialoaderError> {
        let content = std::fs::read_to_string(path)?;
        let settings: AppSettings = serde_json::from_str(&content)?;
        debug!("Loaded settings from {}", path.display());
        Ok(settings.normalized())
    }

    /// Like `load`, but a missing file yields the defaults
    pub fn load_or_default(path: &Path) -> Result<Self, MedialoaderError> {
        if !path.exists() {
            info!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Enforce sane minimums
    pub fn normalized(mut self) -> Self {
        if self.event_buffer == 0 {
            self.event_buffer = 1;
        }
        self
    }

    pub fn detect_delay(&self) -> Duration {
        Duration::from_millis(self.detect_delay_ms)
    }

    pub fn download_delay(&self) -> Duration {
        Duration::from_millis(self.download_delay_ms)
    }
}
