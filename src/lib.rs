//! Medialoader library

pub mod backend;
pub mod events;
pub mod extractor;
pub mod flow;
pub mod utils;

// Re-export main types for easier use
pub use backend::{FlowActor, FlowCommand};
pub use events::{EventSink, FlowEvent, MemorySink, Notification};
pub use extractor::{DownloadOption, ExtractorRegistry, MediaInfo, MediaType, Platform};
pub use flow::{Deferred, FlowSnapshot, FlowStatus, MediaDownloader};
pub use utils::{AppSettings, MedialoaderError};
