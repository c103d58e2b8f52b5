//! Property-based tests for URL classification

use medialoader::extractor::{ExtractorRegistry, Platform};
use proptest::prelude::*;

/// Text that can never form one of the platform markers
fn filler() -> impl Strategy<Value = String> {
    "[a-z0-9:/?=&_-]{0,24}".prop_filter("no platform marker", |s| {
        !s.contains("youtube.com") && !s.contains("youtu.be") && !s.contains("instagram.com")
    })
}

proptest! {
    #[test]
    fn youtube_marker_always_classifies_youtube(
        prefix in "\\PC{0,32}",
        suffix in "\\PC{0,32}",
        marker in prop::sample::select(vec!["youtube.com", "youtu.be"]),
    ) {
        let url = format!("{}{}{}", prefix, marker, suffix);
        prop_assert_eq!(Platform::from_url(&url), Platform::YouTube);
    }

    #[test]
    fn instagram_marker_classifies_instagram(prefix in filler(), suffix in filler()) {
        let url = format!("{}instagram.com{}", prefix, suffix);
        prop_assume!(!url.contains("youtube.com") && !url.contains("youtu.be"));
        prop_assert_eq!(Platform::from_url(&url), Platform::Instagram);
    }

    #[test]
    fn no_marker_is_unknown(url in "\\PC{0,64}") {
        prop_assume!(
            !url.contains("youtube.com") && !url.contains("youtu.be") && !url.contains("instagram.com")
        );
        prop_assert_eq!(Platform::from_url(&url), Platform::Unknown);
    }

    #[test]
    fn registry_agrees_with_platform(url in "\\PC{0,64}") {
        let registry = ExtractorRegistry::default();
        prop_assert_eq!(registry.classify(&url), Platform::from_url(&url));
    }
}

#[test]
fn youtube_wins_when_both_markers_present() {
    let registry = ExtractorRegistry::default();
    assert_eq!(
        registry.classify("https://instagram.com/p/xyz?ref=youtube.com"),
        Platform::YouTube
    );
}
