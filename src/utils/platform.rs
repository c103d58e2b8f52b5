//! Platform-specific paths for Medialoader

use std::path::PathBuf;

/// Returns the configuration directory
/// - macOS: ~/Library/Application Support/Medialoader
/// - Windows: %APPDATA%\Medialoader
/// - Linux: ~/.config/medialoader
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(if cfg!(target_os = "linux") {
            "medialoader"
        } else {
            "Medialoader"
        })
}

/// Returns the default settings file location
pub fn default_settings_path() -> PathBuf {
    config_dir().join("settings.json")
}
