use medialoader::utils::{AppSettings, MedialoaderError};
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn load_reads_json_and_normalizes() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("settings.json");
    std::fs::write(
        &path,
        r#"{"detect_delay_ms": 50, "download_delay_ms": 75, "event_buffer": 0}"#,
    )
    .unwrap();

    let settings = AppSettings::load(&path).expect("load settings");
    assert_eq!(settings.detect_delay(), Duration::from_millis(50));
    assert_eq!(settings.download_delay(), Duration::from_millis(75));
    assert_eq!(settings.event_buffer, 1);
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("absent.json");

    let settings = AppSettings::load_or_default(&path).expect("defaults");
    assert_eq!(settings, AppSettings::default());

    assert!(matches!(
        AppSettings::load(&path),
        Err(MedialoaderError::IoError(_))
    ));
}

#[test]
fn malformed_file_is_a_serialization_error() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();

    assert!(matches!(
        AppSettings::load_or_default(&path),
        Err(MedialoaderError::SerializationError(_))
    ));
}
