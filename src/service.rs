//! Request handling.
//!
//! Orchestrates one transcript request: fetch through the extraction
//! source, clean the subtitle document unless raw output was asked for,
//! and assemble the response payload. The payload is the metadata block,
//! a blank line, then the transcript, and is never truncated.

use crate::config::Settings;
use crate::error::Result;
use crate::extractor::{TranscriptSource, VideoMetadata};
use crate::transcript::{clean_subtitles, format_metadata};
use std::sync::Arc;
use tracing::info;

/// A single transcript request.
#[derive(Debug, Clone)]
pub struct TranscriptRequest {
    pub url: String,
    /// Return the raw subtitle document instead of the cleaned
    /// transcript. None falls back to the configured default.
    pub raw: Option<bool>,
}

impl TranscriptRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            raw: None,
        }
    }

    pub fn raw(mut self, raw: bool) -> Self {
        self.raw = Some(raw);
        self
    }
}

/// The pieces of a fulfilled request, before payload assembly.
#[derive(Debug, Clone)]
pub struct TranscriptResponse {
    pub metadata: VideoMetadata,
    pub transcript: String,
}

/// Handles transcript requests against a configured source.
pub struct TranscriptService {
    settings: Settings,
    source: Arc<dyn TranscriptSource>,
}

impl TranscriptService {
    pub fn new(settings: Settings, source: Arc<dyn TranscriptSource>) -> Self {
        Self { settings, source }
    }

    /// Fetch and post-process a transcript, keeping metadata and
    /// transcript separate for callers that render their own layout.
    pub async fn fetch(&self, request: &TranscriptRequest) -> Result<TranscriptResponse> {
        let raw = request.raw.unwrap_or(self.settings.response.raw);
        info!(url = %request.url, raw, "Fetching transcript");

        let extraction = self.source.fetch(&request.url).await?;

        let transcript = if raw {
            extraction.subtitles
        } else {
            clean_subtitles(&extraction.subtitles)
        };

        Ok(TranscriptResponse {
            metadata: extraction.metadata,
            transcript,
        })
    }

    /// Handle one request, returning the complete response payload.
    pub async fn handle(&self, request: TranscriptRequest) -> Result<String> {
        let response = self.fetch(&request).await?;
        let metadata_block = format_metadata(&response.metadata);
        Ok(assemble_payload(&metadata_block, &response.transcript))
    }
}

/// Metadata block first, blank-line separator, then the transcript.
fn assemble_payload(metadata: &str, transcript: &str) -> String {
    if metadata.is_empty() {
        transcript.to_string()
    } else {
        format!("{}\n\n{}", metadata, transcript)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::YtscribeError;
    use crate::extractor::Extraction;
    use async_trait::async_trait;

    const RAW_VTT: &str = "\
WEBVTT
Kind: captions
Language: en

00:00:00.000 --> 00:00:02.000
Hello world

00:00:02.000 --> 00:00:04.000
Hello world

00:00:04.000 --> 00:00:06.000
Goodbye
";

    struct MockSource {
        extraction: Option<Extraction>,
    }

    impl MockSource {
        fn ok() -> Self {
            Self {
                extraction: Some(Extraction {
                    subtitles: RAW_VTT.to_string(),
                    metadata: VideoMetadata {
                        title: Some("Test Video".to_string()),
                        uploader: Some("Test Channel".to_string()),
                        upload_date: Some("20240115".to_string()),
                        duration_seconds: Some(90),
                        view_count: None,
                    },
                }),
            }
        }

        fn failing() -> Self {
            Self { extraction: None }
        }
    }

    #[async_trait]
    impl TranscriptSource for MockSource {
        async fn fetch(&self, url: &str) -> Result<Extraction> {
            match &self.extraction {
                Some(e) => Ok(e.clone()),
                None => Err(YtscribeError::NoSubtitles(url.to_string())),
            }
        }
    }

    fn service(source: MockSource) -> TranscriptService {
        TranscriptService::new(Settings::default(), Arc::new(source))
    }

    #[tokio::test]
    async fn test_payload_layout() {
        let payload = service(MockSource::ok())
            .handle(TranscriptRequest::new("dQw4w9WgXcQ"))
            .await
            .unwrap();

        assert_eq!(
            payload,
            "Title: Test Video\n\
             Uploader: Test Channel\n\
             Upload date: 2024-01-15\n\
             Duration: 1m 30s\n\
             \n\
             Hello world\nGoodbye"
        );
    }

    #[tokio::test]
    async fn test_raw_passthrough_is_byte_identical() {
        let response = service(MockSource::ok())
            .fetch(&TranscriptRequest::new("dQw4w9WgXcQ").raw(true))
            .await
            .unwrap();

        assert_eq!(response.transcript, RAW_VTT);
    }

    #[tokio::test]
    async fn test_configured_raw_default_applies() {
        let mut settings = Settings::default();
        settings.response.raw = true;
        let service = TranscriptService::new(settings, Arc::new(MockSource::ok()));

        let response = service
            .fetch(&TranscriptRequest::new("dQw4w9WgXcQ"))
            .await
            .unwrap();
        assert_eq!(response.transcript, RAW_VTT);

        // An explicit request flag still overrides the default.
        let response = service
            .fetch(&TranscriptRequest::new("dQw4w9WgXcQ").raw(false))
            .await
            .unwrap();
        assert_eq!(response.transcript, "Hello world\nGoodbye");
    }

    #[tokio::test]
    async fn test_source_errors_propagate() {
        let err = service(MockSource::failing())
            .handle(TranscriptRequest::new("dQw4w9WgXcQ"))
            .await
            .unwrap_err();

        assert!(matches!(err, YtscribeError::NoSubtitles(_)));
    }

    #[tokio::test]
    async fn test_empty_metadata_payload_is_transcript_only() {
        let source = MockSource {
            extraction: Some(Extraction {
                subtitles: "Just text".to_string(),
                metadata: VideoMetadata::default(),
            }),
        };

        let payload = service(source)
            .handle(TranscriptRequest::new("dQw4w9WgXcQ"))
            .await
            .unwrap();
        assert_eq!(payload, "Just text");
    }
}
