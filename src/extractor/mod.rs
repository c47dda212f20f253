//! Transcript extraction.
//!
//! Fetching subtitles and metadata for a video is delegated to an
//! external extractor (yt-dlp in production). The trait seam keeps the
//! request-handling path testable without network access.

pub mod ytdlp;

pub use ytdlp::YtDlpSource;

use crate::error::Result;
use async_trait::async_trait;

/// Metadata for a fetched video. Fields the source doesn't report are None.
#[derive(Debug, Clone, Default)]
pub struct VideoMetadata {
    pub title: Option<String>,
    pub uploader: Option<String>,
    /// Upload date as reported by the source (typically YYYYMMDD).
    pub upload_date: Option<String>,
    pub duration_seconds: Option<u64>,
    pub view_count: Option<u64>,
}

/// A fetched subtitle document plus the video's metadata.
#[derive(Debug, Clone)]
pub struct Extraction {
    /// Raw subtitle document text, untouched by any cleanup.
    pub subtitles: String,
    pub metadata: VideoMetadata,
}

/// Source of subtitle documents and metadata for video references.
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    /// Fetch the subtitle document and metadata for a video URL or ID.
    ///
    /// Fails when the reference doesn't identify a fetchable video or
    /// the video has no subtitles of any kind.
    async fn fetch(&self, url: &str) -> Result<Extraction>;
}
