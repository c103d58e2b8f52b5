use crate::extractor::models::{MediaInfo, Platform};
use anyhow::Result;
use async_trait::async_trait;

/// Core trait for all media extractors
///
/// This trait isolates the request flow from the way media information is
/// obtained. The bundled extractors serve fixed payloads; a network-backed
/// extractor can be registered in their place.
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Returns a unique identifier for this extractor (e.g., "mock-youtube")
    fn id(&self) -> &'static str;

    /// The platform this extractor answers for
    fn platform(&self) -> Platform;

    /// Checks if this extractor can handle the given URL
    fn supports(&self, url: &str) -> bool {
        Platform::from_url(url) == self.platform()
    }

    /// Extracts media information
    async fn extract_info(&self, url: &str) -> Result<MediaInfo>;
}
