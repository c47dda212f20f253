//! Doctor command - verify system requirements and configuration.

use crate::cli::{preflight, Output};
use crate::config::Settings;
use anyhow::Result;

/// Run system checks and print a report.
pub fn run_doctor(settings: &Settings) -> Result<()> {
    Output::header("System requirements");
    match preflight::check_ytdlp() {
        Ok(()) => Output::success("yt-dlp is installed"),
        Err(e) => Output::error(&e.to_string()),
    }

    Output::header("Configuration");
    let config_path = Settings::default_config_path();
    let source = if config_path.exists() {
        config_path.display().to_string()
    } else {
        format!("{} (not present, using defaults)", config_path.display())
    };
    Output::kv("config file", &source);
    Output::kv(
        "preferred languages",
        &settings.extraction.preferred_languages.join(", "),
    );
    Output::kv("subtitle format", &settings.extraction.subtitle_format);
    Output::kv("raw by default", &settings.response.raw.to_string());

    Ok(())
}
