//! Data structures for extractor output

use serde::{Deserialize, Serialize};

/// Metadata the extractor reports for a single video.
///
/// Deserialized from `yt-dlp --dump-json` output; unknown fields are
/// ignored and every field yt-dlp may omit carries a default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionResult {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub duration: Option<u64>,
    #[serde(default)]
    pub uploader: Option<String>,
    #[serde(default)]
    pub filesize: Option<u64>,
    /// Direct media URL, present when the extractor resolved a single stream
    #[serde(default)]
    pub url: Option<String>,
    /// Video+audio pair picked by the format selector when split streams won
    #[serde(default)]
    pub requested_formats: Option<Vec<MediaFormat>>,
    /// All known formats, ordered ascending by quality
    #[serde(default)]
    pub formats: Vec<MediaFormat>,
}

/// One concrete stream option (video-only, audio-only, or muxed)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MediaFormat {
    #[serde(default)]
    pub format_id: String,
    #[serde(default)]
    pub ext: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub vcodec: Option<String>,
    #[serde(default)]
    pub acodec: Option<String>,
    #[serde(default)]
    pub format_note: Option<String>,
    #[serde(default)]
    pub filesize: Option<u64>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

impl MediaFormat {
    /// Whether this format carries a video track. yt-dlp reports audio-only
    /// streams with `vcodec: "none"`; a missing codec field counts as video.
    pub fn has_video(&self) -> bool {
        self.vcodec.as_deref() != Some("none")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_ytdlp_dump() {
        let raw = r#"{
            "id": "dQw4w9WgXcQ",
            "title": "Sample",
            "thumbnail": "https://i.ytimg.com/vi/dQw4w9WgXcQ/hq720.jpg",
            "duration": 212,
            "uploader": "Channel",
            "formats": [
                {"format_id": "251", "ext": "webm", "vcodec": "none", "acodec": "opus", "url": "https://cdn.example/audio"},
                {"format_id": "22", "ext": "mp4", "vcodec": "avc1.64001F", "acodec": "mp4a.40.2", "format_note": "720p", "filesize": 1024, "url": "https://cdn.example/muxed"}
            ],
            "extractor": "youtube",
            "webpage_url": "https://www.youtube.com/watch?v=dQw4w9WgXcQ"
        }"#;

        let info: ExtractionResult = serde_json::from_str(raw).expect("parse dump");
        assert_eq!(info.id, "dQw4w9WgXcQ");
        assert_eq!(info.duration, Some(212));
        assert_eq!(info.formats.len(), 2);
        assert!(info.url.is_none());
        assert!(info.requested_formats.is_none());
        assert!(!info.formats[0].has_video());
        assert!(info.formats[1].has_video());
    }

    #[test]
    fn missing_vcodec_counts_as_video() {
        let fmt = MediaFormat {
            format_id: "18".to_string(),
            ext: "mp4".to_string(),
            ..Default::default()
        };
        assert!(fmt.has_video());
    }
}
