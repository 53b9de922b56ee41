//! Quality preference and yt-dlp format selection

use std::fmt;

/// Default vertical resolution cap when the client sends no quality
pub const DEFAULT_MAX_HEIGHT: u32 = 720;

/// How to pick streams for a resolution request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityPreference {
    /// Best available video+audio regardless of resolution
    Best,
    /// Best video+audio not exceeding the given vertical resolution
    MaxHeight(u32),
}

impl Default for QualityPreference {
    fn default() -> Self {
        Self::MaxHeight(DEFAULT_MAX_HEIGHT)
    }
}

impl QualityPreference {
    /// Parse the client-supplied quality string.
    ///
    /// Numeric values (with or without a trailing `p`) cap the height;
    /// anything else means best-available. Absent or blank falls back to
    /// the 720p default.
    pub fn parse(quality: Option<&str>) -> Self {
        let Some(raw) = quality else {
            return Self::default();
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::default();
        }
        match trimmed.trim_end_matches(['p', 'P']).parse::<u32>() {
            Ok(height) if height > 0 => Self::MaxHeight(height),
            _ => Self::Best,
        }
    }

    /// The yt-dlp `-f` selector for this preference.
    ///
    /// The alternative chain degrades from split mp4 video plus m4a audio
    /// down to a plain best stream.
    pub fn format_spec(&self) -> String {
        match self {
            Self::Best => "bestvideo[ext=mp4]+bestaudio[ext=m4a]/best[ext=mp4]/best".to_string(),
            Self::MaxHeight(h) => format!(
                "bestvideo[height<={h}][ext=mp4]+bestaudio[ext=m4a]/best[height<={h}][ext=mp4]/best[height<={h}]/best"
            ),
        }
    }
}

impl fmt::Display for QualityPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Best => write!(f, "best"),
            Self::MaxHeight(h) => write!(f, "{h}p"),
        }
    }
}
