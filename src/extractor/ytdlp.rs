//! yt-dlp wrapper for video extraction
//!
//! Every resolution request shells out to yt-dlp with
//! `--dump-json --no-download` and parses the single JSON document it
//! prints. Nothing is downloaded and no state is shared between calls.

use crate::extractor::models::ExtractionResult;
use crate::extractor::traits::{ExtractOptions, Extractor};
use crate::utils::error::ServiceError;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::{debug, info, warn};

/// Extractor backed by the yt-dlp binary
pub struct YtDlpExtractor {
    ytdlp_path: PathBuf,
}

impl YtDlpExtractor {
    /// Build the extractor, locating yt-dlp unless an explicit path is given.
    ///
    /// A missing binary is not fatal here: the server still starts and
    /// requests fail upstream until yt-dlp is installed.
    pub fn new(override_path: Option<PathBuf>) -> Self {
        let ytdlp_path = override_path.or_else(find_ytdlp).unwrap_or_else(|| {
            warn!("yt-dlp not found; extraction requests will fail until it is installed");
            PathBuf::from("yt-dlp")
        });
        info!("Using yt-dlp at: {}", ytdlp_path.display());
        Self { ytdlp_path }
    }

    /// The yt-dlp binary this extractor invokes
    pub fn ytdlp_path(&self) -> &Path {
        &self.ytdlp_path
    }
}

#[async_trait]
impl Extractor for YtDlpExtractor {
    async fn extract(
        &self,
        url: &str,
        options: &ExtractOptions,
    ) -> Result<ExtractionResult, ServiceError> {
        debug!("Extracting video info for URL: {}", url);

        let mut cmd = Command::new(&self.ytdlp_path);
        cmd.arg("--dump-json")
            .arg("--no-download")
            .arg("--no-playlist");
        if options.quiet {
            cmd.arg("--quiet").arg("--no-warnings");
        }
        if let Some(format) = &options.format {
            cmd.arg("-f").arg(format);
        }
        if let Some(container) = &options.merge_format {
            cmd.arg("--merge-output-format").arg(container);
        }
        cmd.arg(url);

        let output = cmd
            .output()
            .await
            .map_err(|e| ServiceError::Upstream(format!("failed to run yt-dlp: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            warn!("yt-dlp exited with {}: {}", output.status, stderr.trim());
            return Err(ServiceError::Upstream(stderr.trim().to_string()));
        }

        // yt-dlp prints one JSON document per line; a single video gives one line.
        let stdout = String::from_utf8_lossy(&output.stdout);
        let line = stdout
            .lines()
            .find(|l| !l.trim().is_empty())
            .ok_or_else(|| ServiceError::Upstream("yt-dlp produced no output".to_string()))?;

        serde_json::from_str(line)
            .map_err(|e| ServiceError::Upstream(format!("unreadable yt-dlp output: {e}")))
    }
}

/// Find the yt-dlp binary: PATH first, then common install locations.
pub fn find_ytdlp() -> Option<PathBuf> {
    if let Ok(path) = which::which("yt-dlp") {
        return Some(path);
    }

    let common_paths = [
        // macOS Homebrew (Apple Silicon)
        "/opt/homebrew/bin/yt-dlp",
        // macOS Homebrew (Intel)
        "/usr/local/bin/yt-dlp",
        // System
        "/usr/bin/yt-dlp",
    ];
    for path_str in common_paths {
        let path = PathBuf::from(path_str);
        if path.exists() {
            return Some(path);
        }
    }

    // pip user install
    if let Some(home) = dirs::home_dir() {
        let local = home.join(".local/bin/yt-dlp");
        if local.exists() {
            return Some(local);
        }
    }

    None
}
