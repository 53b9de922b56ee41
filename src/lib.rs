//! ytresolver library

pub mod api;
pub mod extractor;
pub mod utils;

// Re-export main types for easier use
pub use api::{create_router, AppState};
pub use extractor::{
    ExtractOptions, ExtractionResult, Extractor, MediaFormat, QualityPreference, YtDlpExtractor,
};
pub use utils::{ServiceError, Settings};
