//! Video metadata formatting.

use crate::extractor::VideoMetadata;

/// Render a metadata block with fields in fixed order: title, uploader,
/// upload date, duration, view count. Absent fields are omitted rather
/// than rendered as placeholders.
pub fn format_metadata(meta: &VideoMetadata) -> String {
    let mut lines = Vec::new();

    if let Some(title) = &meta.title {
        lines.push(format!("Title: {}", title));
    }
    if let Some(uploader) = &meta.uploader {
        lines.push(format!("Uploader: {}", uploader));
    }
    if let Some(date) = &meta.upload_date {
        lines.push(format!("Upload date: {}", format_upload_date(date)));
    }
    if let Some(duration) = meta.duration_seconds {
        lines.push(format!("Duration: {}", format_duration(duration)));
    }
    if let Some(views) = meta.view_count {
        lines.push(format!("View count: {}", views));
    }

    lines.join("\n")
}

/// Format duration as a human-readable string.
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let mins = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if hours > 0 {
        format!("{}h {}m {}s", hours, mins, secs)
    } else if mins > 0 {
        format!("{}m {}s", mins, secs)
    } else {
        format!("{}s", secs)
    }
}

/// yt-dlp reports upload dates as YYYYMMDD; render those as YYYY-MM-DD.
/// Anything else passes through untouched.
fn format_upload_date(date: &str) -> String {
    if date.len() == 8 {
        if let Ok(parsed) = chrono::NaiveDate::parse_from_str(date, "%Y%m%d") {
            return parsed.format("%Y-%m-%d").to_string();
        }
    }
    date.to_string()
}
