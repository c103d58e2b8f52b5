pub mod mock;
pub mod models;
pub mod registry;
pub mod traits;

pub use mock::{MockInstagramExtractor, MockYoutubeExtractor};
pub use models::{DownloadOption, FormatKind, MediaInfo, MediaRequest, MediaType, Platform};
pub use registry::ExtractorRegistry;
pub use traits::Extractor;
