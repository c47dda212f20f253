//! Error types for ytscribe.

use thiserror::Error;

/// Library-level error type for ytscribe operations.
#[derive(Error, Debug)]
pub enum YtscribeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid YouTube URL or video ID: {0}")]
    InvalidUrl(String),

    #[error("Video not found or unavailable: {0}")]
    VideoNotFound(String),

    #[error("No transcript/subtitles available for this video: {0}")]
    NoSubtitles(String),

    #[error("Transcript extraction failed: {0}")]
    Extraction(String),

    #[error("External tool not found: {0}. Please install it and ensure it's in your PATH.")]
    ToolNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for ytscribe operations.
pub type Result<T> = std::result::Result<T, YtscribeError>;
