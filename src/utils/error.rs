//! Error taxonomy for the resolution service
//!
//! Every request-scoped failure is one of three kinds with a fixed HTTP
//! status; all convert at the boundary to the uniform
//! `{success: false, message}` JSON shape.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Main error type for the resolution service
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Client omitted or emptied a required field
    #[error("{0}")]
    Validation(String),

    /// Extraction succeeded but exposed no usable media URL
    #[error("Could not extract download URL")]
    Extraction,

    /// The extractor call itself failed: spawn error, non-zero exit,
    /// unreadable output. Causes are collapsed; the payload keeps the
    /// upstream message for debugging.
    #[error("Video extraction failed")]
    Upstream(String),
}

impl ServiceError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Extraction | Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Debug-only detail carried alongside the public message
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Upstream(detail) => Some(detail),
            _ => None,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let mut body = json!({
            "success": false,
            "message": self.to_string(),
        });
        if let Some(detail) = self.detail() {
            body["detail"] = json!(detail);
        }
        (self.status(), Json(body)).into_response()
    }
}
