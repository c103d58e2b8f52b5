//! Extractors serving fixed payloads
//!
//! The payload depends only on the platform, never on the URL content.

use crate::extractor::models::{DownloadOption, MediaInfo, MediaType, Platform};
use crate::extractor::traits::Extractor;
use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

pub struct MockYoutubeExtractor;

impl Default for MockYoutubeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl MockYoutubeExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn payload() -> MediaInfo {
        MediaInfo {
            id: "1".to_string(),
            title: "Amazing Tech Tutorial - Complete Guide 2024".to_string(),
            thumbnail_url:
                "https://images.unsplash.com/photo-1498050108023-c5249f4df085?w=400".to_string(),
            duration: Some("12:34".to_string()),
            views: Some("1.2M views".to_string()),
            platform: Platform::YouTube,
            media_type: MediaType::Video,
            download_options: vec![
                DownloadOption::new("1080p", "MP4", "245 MB"),
                DownloadOption::new("720p", "MP4", "156 MB"),
                DownloadOption::new("480p", "MP4", "98 MB"),
                DownloadOption::new("Audio Only", "MP3", "12 MB"),
            ],
        }
    }
}

#[async_trait]
impl Extractor for MockYoutubeExtractor {
    fn id(&self) -> &'static str {
        "mock-youtube"
    }

    fn platform(&self) -> Platform {
        Platform::YouTube
    }

    async fn extract_info(&self, url: &str) -> Result<MediaInfo> {
        debug!("MockYoutubeExtractor invoked for: {}", url);
        Ok(Self::payload())
    }
}

pub struct MockInstagramExtractor;

impl Default for MockInstagramExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl MockInstagramExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn payload() -> MediaInfo {
        MediaInfo {
            id: "2".to_string(),
            title: "Beautiful Nature Photography Collection".to_string(),
            thumbnail_url:
                "https://images.unsplash.com/photo-1581090464777-f3220bbe1b8b?w=400".to_string(),
            duration: None,
            views: None,
            platform: Platform::Instagram,
            media_type: MediaType::Carousel,
            download_options: vec![
                DownloadOption::new("Original", "JPG", "2.3 MB"),
                DownloadOption::new("High", "JPG", "1.8 MB"),
                DownloadOption::new("Medium", "JPG", "890 KB"),
            ],
        }
    }
}

#[async_trait]
impl Extractor for MockInstagramExtractor {
    fn id(&self) -> &'static str {
        "mock-instagram"
    }

    fn platform(&self) -> Platform {
        Platform::Instagram
    }

    async fn extract_info(&self, url: &str) -> Result<MediaInfo> {
        debug!("MockInstagramExtractor invoked for: {}", url);
        Ok(Self::payload())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payloads_are_valid() {
        assert!(MockYoutubeExtractor::payload().validate().is_ok());
        assert!(MockInstagramExtractor::payload().validate().is_ok());
    }

    #[test]
    fn test_supports_follows_classification() {
        let yt = MockYoutubeExtractor::new();
        let ig = MockInstagramExtractor::new();

        assert!(yt.supports("https://youtu.be/abc"));
        assert!(!yt.supports("https://instagram.com/p/xyz"));
        assert!(ig.supports("https://instagram.com/p/xyz"));
        // youtube wins the tie, so instagram must decline
        assert!(!ig.supports("https://instagram.com/?next=youtube.com"));
    }

    #[tokio::test]
    async fn test_payload_ignores_url_content() {
        let yt = MockYoutubeExtractor::new();
        let a = yt.extract_info("https://youtube.com/watch?v=a").await.unwrap();
        let b = yt.extract_info("https://youtu.be/zzz").await.unwrap();
        assert_eq!(a, b);
        assert_eq!(a.id, "1");
    }
}
