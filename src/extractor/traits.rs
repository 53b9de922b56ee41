use crate::extractor::models::ExtractionResult;
use crate::utils::error::ServiceError;
use async_trait::async_trait;

/// Per-call extractor options; built fresh for every request and
/// discarded afterward.
#[derive(Debug, Clone, Default)]
pub struct ExtractOptions {
    /// Format selector passed as `-f`; extractor default when absent
    pub format: Option<String>,
    /// Suppress warnings and progress noise
    pub quiet: bool,
    /// Container to request when video and audio streams are merged
    pub merge_format: Option<String>,
}

/// Boundary trait for the external extraction tool
///
/// Handlers depend on this instead of the concrete subprocess wrapper,
/// so tests can substitute a stub that never touches the network.
#[async_trait]
pub trait Extractor: Send + Sync {
    /// Resolve metadata and stream formats for a video page URL,
    /// without downloading any media.
    async fn extract(
        &self,
        url: &str,
        options: &ExtractOptions,
    ) -> Result<ExtractionResult, ServiceError>;
}
