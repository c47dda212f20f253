//! Fetch command implementation.

use crate::cli::{preflight, Output};
use crate::config::Settings;
use crate::extractor::YtDlpSource;
use crate::service::{TranscriptRequest, TranscriptService};
use anyhow::Result;
use std::sync::Arc;

/// Fetch a transcript and print it or write it to a file.
pub async fn run_fetch(
    url: &str,
    raw: bool,
    output: Option<String>,
    settings: Settings,
) -> Result<()> {
    preflight::check_ytdlp()?;

    let source = Arc::new(YtDlpSource::new(settings.extraction.clone()));
    let service = TranscriptService::new(settings, source);

    let mut request = TranscriptRequest::new(url);
    if raw {
        request = request.raw(true);
    }

    let spinner = Output::spinner("Fetching transcript...");
    let result = service.handle(request).await;
    spinner.finish_and_clear();

    let payload = result?;

    match output {
        Some(path) => {
            std::fs::write(&path, &payload)?;
            Output::success(&format!("Wrote transcript to {}", path));
        }
        None => println!("{}", payload),
    }

    Ok(())
}
