//! Pre-flight checks before network-bound operations.
//!
//! Validates that yt-dlp is available before starting a fetch that
//! would otherwise fail midway.

use crate::error::{Result, YtscribeError};
use std::process::Command;

/// Check that yt-dlp is installed and runnable.
pub fn check_ytdlp() -> Result<()> {
    check_tool("yt-dlp")
}

/// Check if an external tool is available.
fn check_tool(name: &str) -> Result<()> {
    match Command::new(name).arg("--version").output() {
        Ok(output) if output.status.success() => Ok(()),
        Ok(_) => Err(YtscribeError::ToolNotFound(format!(
            "{} is installed but not working correctly",
            name
        ))),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(YtscribeError::ToolNotFound(name.to_string()))
        }
        Err(e) => Err(YtscribeError::ToolNotFound(format!("{}: {}", name, e))),
    }
}
