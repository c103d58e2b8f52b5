pub mod deferred;
pub mod downloader;
pub mod state;

pub use deferred::Deferred;
pub use downloader::{MediaDownloader, PendingMedia};
pub use state::{FlowSnapshot, FlowState, FlowStatus};
