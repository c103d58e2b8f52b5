//! Utility modules for error handling and configuration

pub mod config;
pub mod error;
pub mod platform;

// Re-export for convenience
pub use config::AppSettings;
pub use error::MedialoaderError;
pub use platform::{config_dir, default_settings_path};
