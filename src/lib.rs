//! ytscribe - YouTube transcripts for AI assistants
//!
//! An MCP (Model Context Protocol) server that fetches YouTube video
//! transcripts and metadata through yt-dlp and returns them as a single
//! text payload, cleaned of subtitle formatting to cut token usage.
//!
//! # Overview
//!
//! ytscribe allows an AI assistant to:
//! - Fetch the transcript of a YouTube video by URL or video ID
//! - Get video metadata (title, uploader, upload date, duration, views)
//! - Request the raw VTT document instead of the cleaned transcript
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Configuration management
//! - `extractor` - Subtitle/metadata extraction via yt-dlp
//! - `transcript` - Subtitle cleanup and metadata formatting
//! - `service` - Request handling (fetch, clean, assemble payload)
//! - `mcp` - MCP server (JSON-RPC 2.0 over stdio)
//! - `cli` - Command-line interface
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use ytscribe::config::Settings;
//! use ytscribe::extractor::ytdlp::YtDlpSource;
//! use ytscribe::service::{TranscriptRequest, TranscriptService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let source = Arc::new(YtDlpSource::new(settings.extraction.clone()));
//!     let service = TranscriptService::new(settings, source);
//!
//!     let payload = service
//!         .handle(TranscriptRequest::new("dQw4w9WgXcQ"))
//!         .await?;
//!     println!("{}", payload);
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod extractor;
pub mod mcp;
pub mod service;
pub mod transcript;

pub use error::{Result, YtscribeError};
