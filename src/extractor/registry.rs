use crate::extractor::mock::{MockInstagramExtractor, MockYoutubeExtractor};
use crate::extractor::models::{MediaInfo, Platform};
use crate::extractor::traits::Extractor;
use crate::utils::error::MedialoaderError;
use anyhow::Result;
use std::sync::Arc;
use tracing::debug;

/// The Extractor Registry
///
/// Holds an ordered list of extractors and routes requests to the first one
/// whose `supports(url)` matches. Order is the classification precedence.
#[derive(Clone)]
pub struct ExtractorRegistry {
    extractors: Vec<Arc<dyn Extractor>>,
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::new(vec![
            Arc::new(MockYoutubeExtractor::new()),
            Arc::new(MockInstagramExtractor::new()),
        ])
    }
}

impl ExtractorRegistry {
    pub fn new(extractors: Vec<Arc<dyn Extractor>>) -> Self {
        Self { extractors }
    }

    /// Find the extractor for a given URL
    pub fn find_extractor(&self, url: &str) -> Option<&Arc<dyn Extractor>> {
        let found = self.extractors.iter().find(|e| e.supports(url));
        match found {
            Some(extractor) => debug!("Routing to extractor: {}", extractor.id()),
            None => debug!("No extractor supports: {}", url),
        }
        found
    }

    /// Platform of the first matching extractor, or `Unknown`
    pub fn classify(&self, url: &str) -> Platform {
        self.find_extractor(url)
            .map(|e| e.platform())
            .unwrap_or(Platform::Unknown)
    }

    pub async fn extract_info(&self, url: &str) -> Result<MediaInfo> {
        let extractor = self
            .find_extractor(url)
            .ok_or_else(|| MedialoaderError::InvalidUrl(url.to_string()))?;

        let info = extractor.extract_info(url).await?;
        info.validate().map_err(MedialoaderError::ExtractionError)?;
        Ok(info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractor::models::MediaType;

    #[test]
    fn test_default_registry_classifies() {
        let registry = ExtractorRegistry::default();
        assert_eq!(registry.classify("https://youtu.be/a"), Platform::YouTube);
        assert_eq!(
            registry.classify("https://instagram.com/p/xyz"),
            Platform::Instagram
        );
        assert_eq!(registry.classify("https://example.com"), Platform::Unknown);
    }

    #[test]
    fn test_empty_registry_knows_nothing() {
        let registry = ExtractorRegistry::new(Vec::new());
        assert_eq!(registry.classify("https://youtu.be/a"), Platform::Unknown);
    }

    #[tokio::test]
    async fn test_extract_routes_by_platform() {
        let registry = ExtractorRegistry::default();
        let info = registry
            .extract_info("https://instagram.com/p/xyz")
            .await
            .unwrap();
        assert_eq!(info.media_type, MediaType::Carousel);

        let err = registry.extract_info("https://example.com").await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<MedialoaderError>(),
            Some(MedialoaderError::InvalidUrl(_))
        ));
    }
}
