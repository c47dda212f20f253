//! yt-dlp backed transcript source.
//!
//! Runs `yt-dlp --dump-json` to resolve a video and enumerate its
//! subtitle tracks, then downloads the selected track over HTTP. Manual
//! subtitles are preferred over automatic captions.

use super::{Extraction, TranscriptSource, VideoMetadata};
use crate::config::ExtractionSettings;
use crate::error::{Result, YtscribeError};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::{debug, info};
use url::Url;

/// YouTube video IDs are exactly 11 URL-safe base64 characters.
static VIDEO_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9_-]{11}$").expect("Invalid video ID regex"));

/// Transcript source backed by the yt-dlp command-line tool.
pub struct YtDlpSource {
    settings: ExtractionSettings,
    http: reqwest::Client,
}

impl YtDlpSource {
    pub fn new(settings: ExtractionSettings) -> Self {
        Self {
            settings,
            http: reqwest::Client::new(),
        }
    }

    /// Resolve video info via yt-dlp.
    async fn fetch_info(&self, video_id: &str) -> Result<Value> {
        let url = format!("https://www.youtube.com/watch?v={}", video_id);
        debug!("Resolving video info for {}", video_id);

        let output = tokio::process::Command::new("yt-dlp")
            .args(["--dump-json", "--no-download", "--no-warnings", &url])
            .output()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    YtscribeError::ToolNotFound("yt-dlp".to_string())
                } else {
                    YtscribeError::Extraction(format!("Failed to run yt-dlp: {}", e))
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(YtscribeError::VideoNotFound(format!(
                "{}: {}",
                video_id,
                stderr.trim()
            )));
        }

        let json_str = String::from_utf8_lossy(&output.stdout);
        serde_json::from_str(&json_str)
            .map_err(|e| YtscribeError::Extraction(format!("Failed to parse yt-dlp output: {}", e)))
    }
}

#[async_trait]
impl TranscriptSource for YtDlpSource {
    async fn fetch(&self, url: &str) -> Result<Extraction> {
        let video_id =
            extract_video_id(url).ok_or_else(|| YtscribeError::InvalidUrl(url.to_string()))?;

        let info = self.fetch_info(&video_id).await?;
        let metadata = parse_metadata(&info);

        let (track_url, manual) = select_track(
            &info,
            &self.settings.preferred_languages,
            &self.settings.subtitle_format,
        )
        .ok_or_else(|| YtscribeError::NoSubtitles(video_id.clone()))?;

        info!(
            video_id = %video_id,
            manual,
            "Downloading {} subtitle track",
            if manual { "manual" } else { "auto-generated" }
        );

        let subtitles = self
            .http
            .get(track_url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(Extraction { subtitles, metadata })
    }
}

/// Extract the 11-character video ID from a URL or bare ID.
///
/// Accepts watch?v= links, youtu.be short links, embed//v//shorts paths,
/// and bare IDs. Scheme-less URLs are retried with https.
pub fn extract_video_id(input: &str) -> Option<String> {
    let input = input.trim();

    if VIDEO_ID.is_match(input) {
        return Some(input.to_string());
    }

    let parsed = Url::parse(input)
        .or_else(|_| Url::parse(&format!("https://{}", input)))
        .ok()?;

    let host = parsed.host_str()?;
    if host != "youtu.be" && host != "youtube.com" && !host.ends_with(".youtube.com") {
        return None;
    }

    // watch URLs carry the ID in the v= query parameter
    if let Some(id) = parsed
        .query_pairs()
        .find(|(k, _)| k == "v")
        .map(|(_, v)| v.into_owned())
    {
        if VIDEO_ID.is_match(&id) {
            return Some(id);
        }
    }

    let segments: Vec<&str> = parsed.path_segments()?.collect();

    let candidate = if host == "youtu.be" {
        segments.first().copied()
    } else {
        match segments.as_slice() {
            ["embed", id] | ["v", id] | ["shorts", id] | ["live", id] => Some(*id),
            _ => None,
        }
    };

    candidate
        .filter(|id| VIDEO_ID.is_match(id))
        .map(|id| id.to_string())
}

/// Pull the metadata fields out of yt-dlp's info JSON. Missing fields
/// stay None so the formatter can omit them.
fn parse_metadata(info: &Value) -> VideoMetadata {
    VideoMetadata {
        title: info["title"].as_str().map(|s| s.to_string()),
        uploader: info["uploader"]
            .as_str()
            .or_else(|| info["channel"].as_str())
            .map(|s| s.to_string()),
        upload_date: info["upload_date"].as_str().map(|s| s.to_string()),
        duration_seconds: info["duration"].as_f64().map(|d| d as u64),
        view_count: info["view_count"].as_u64(),
    }
}

/// Select the subtitle track URL to download.
///
/// Manual subtitles win over automatic captions; within each section the
/// configured languages are tried in order, and within a language the
/// entry matching the configured format (vtt) is taken. Returns the
/// track URL and whether it came from manual subtitles.
fn select_track<'a>(info: &'a Value, languages: &[String], format: &str) -> Option<(&'a str, bool)> {
    for (section, manual) in [("subtitles", true), ("automatic_captions", false)] {
        let tracks = match info.get(section).and_then(|v| v.as_object()) {
            Some(t) => t,
            None => continue,
        };

        for lang in languages {
            let entries = match tracks.get(lang).and_then(|v| v.as_array()) {
                Some(e) => e,
                None => continue,
            };

            for entry in entries {
                if entry["ext"].as_str() == Some(format) {
                    if let Some(track_url) = entry["url"].as_str() {
                        return Some((track_url, manual));
                    }
                }
            }
        }
    }

    None
}
