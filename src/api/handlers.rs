//! Endpoint handlers
//!
//! Each handler validates its request, makes one extractor call, and
//! shapes the result. The dispatch table in `mod.rs` maps method+path
//! onto these functions.

use crate::api::payloads::{
    DownloadRequest, DownloadResponse, FormatSummary, InfoRequest, InfoResponse, StatusResponse,
};
use crate::api::AppState;
use crate::extractor::models::{ExtractionResult, MediaFormat};
use crate::extractor::selection::QualityPreference;
use crate::extractor::traits::ExtractOptions;
use crate::utils::error::ServiceError;
use axum::extract::State;
use axum::Json;
use tracing::{debug, info};

const WATCH_URL_BASE: &str = "https://www.youtube.com/watch?v=";

/// Cap on the format list returned by `/info`
const MAX_LISTED_FORMATS: usize = 10;

/// Containers worth showing to a browser-based caller
const LISTABLE_CONTAINERS: [&str; 2] = ["mp4", "webm"];

pub async fn index() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "running",
        message: "Media URL resolution API",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn download(
    State(state): State<AppState>,
    Json(request): Json<DownloadRequest>,
) -> Result<Json<DownloadResponse>, ServiceError> {
    let video_id = require_video_id(request.video_id.as_deref())?;
    let preference = QualityPreference::parse(request.quality.as_deref());
    info!(video_id, quality = %preference, "resolving download URL");

    let options = ExtractOptions {
        format: Some(preference.format_spec()),
        quiet: false,
        merge_format: Some("mp4".to_string()),
    };
    let result = state.extractor.extract(&watch_url(video_id), &options).await?;

    let download_url = pick_download_url(&result)
        .ok_or(ServiceError::Extraction)?
        .to_string();
    debug!(video_id, url = %download_url, "resolved download URL");

    Ok(Json(DownloadResponse {
        success: true,
        url: download_url,
        title: result.title.unwrap_or_else(|| "Unknown".to_string()),
        thumbnail: result.thumbnail.unwrap_or_default(),
        duration: result.duration.unwrap_or(0),
        quality: preference.to_string(),
        filesize: result.filesize.unwrap_or(0),
    }))
}

pub async fn info(
    State(state): State<AppState>,
    Json(request): Json<InfoRequest>,
) -> Result<Json<InfoResponse>, ServiceError> {
    let video_id = require_video_id(request.video_id.as_deref())?;
    info!(video_id, "describing video");

    let options = ExtractOptions {
        quiet: true,
        ..Default::default()
    };
    let result = state.extractor.extract(&watch_url(video_id), &options).await?;

    Ok(Json(InfoResponse {
        success: true,
        title: result.title.unwrap_or_else(|| "Unknown".to_string()),
        thumbnail: result.thumbnail.unwrap_or_default(),
        duration: result.duration.unwrap_or(0),
        uploader: result.uploader.unwrap_or_else(|| "Unknown".to_string()),
        formats: list_video_formats(&result.formats),
    }))
}

fn require_video_id(video_id: Option<&str>) -> Result<&str, ServiceError> {
    match video_id {
        Some(id) if !id.trim().is_empty() => Ok(id),
        _ => Err(ServiceError::Validation("videoId is required".to_string())),
    }
}

fn watch_url(video_id: &str) -> String {
    format!("{WATCH_URL_BASE}{video_id}")
}

/// URL priority: direct url, then the first entry of the selected
/// video+audio pair, then the highest-quality formats-list entry
/// (yt-dlp orders formats ascending, so scan in reverse).
fn pick_download_url(result: &ExtractionResult) -> Option<&str> {
    if let Some(url) = nonempty(result.url.as_deref()) {
        return Some(url);
    }
    if let Some(pair) = result.requested_formats.as_deref().filter(|f| !f.is_empty()) {
        return nonempty(pair[0].url.as_deref());
    }
    result
        .formats
        .iter()
        .rev()
        .find_map(|f| nonempty(f.url.as_deref()))
}

fn nonempty(url: Option<&str>) -> Option<&str> {
    url.filter(|u| !u.is_empty())
}

/// Keep streams that carry a video track in a web-playable container,
/// first 10 in the extractor's order.
fn list_video_formats(formats: &[MediaFormat]) -> Vec<FormatSummary> {
    formats
        .iter()
        .filter(|f| f.has_video())
        .filter(|f| LISTABLE_CONTAINERS.contains(&f.ext.as_str()))
        .take(MAX_LISTED_FORMATS)
        .map(FormatSummary::from)
        .collect()
}
