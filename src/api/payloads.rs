//! Request and response bodies for the HTTP surface

use crate::extractor::models::MediaFormat;
use serde::{Deserialize, Serialize};

/// Body of `POST /download`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadRequest {
    #[serde(default)]
    pub video_id: Option<String>,
    #[serde(default)]
    pub quality: Option<String>,
}

/// Body of `POST /info`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoRequest {
    #[serde(default)]
    pub video_id: Option<String>,
}

/// `GET /` payload
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub message: &'static str,
    pub version: &'static str,
}

/// Successful `POST /download` payload
#[derive(Debug, Clone, Serialize)]
pub struct DownloadResponse {
    pub success: bool,
    pub url: String,
    pub title: String,
    pub thumbnail: String,
    pub duration: u64,
    pub quality: String,
    pub filesize: u64,
}

/// One entry of the `/info` format list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatSummary {
    pub quality: String,
    pub ext: String,
    pub filesize: u64,
}

impl From<&MediaFormat> for FormatSummary {
    fn from(format: &MediaFormat) -> Self {
        Self {
            quality: format
                .format_note
                .clone()
                .unwrap_or_else(|| "unknown".to_string()),
            ext: format.ext.clone(),
            filesize: format.filesize.unwrap_or(0),
        }
    }
}

/// Successful `POST /info` payload
#[derive(Debug, Clone, Serialize)]
pub struct InfoResponse {
    pub success: bool,
    pub title: String,
    pub thumbnail: String,
    pub duration: u64,
    pub uploader: String,
    pub formats: Vec<FormatSummary>,
}
