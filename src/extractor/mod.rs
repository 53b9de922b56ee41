pub mod models;
pub mod selection;
pub mod traits;
pub mod ytdlp;

pub use models::{ExtractionResult, MediaFormat};
pub use selection::QualityPreference;
pub use traits::{ExtractOptions, Extractor};
pub use ytdlp::YtDlpExtractor;
