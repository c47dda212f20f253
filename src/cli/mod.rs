//! CLI module for ytscribe.

pub mod commands;
mod output;
pub mod preflight;

pub use output::Output;

use clap::{Parser, Subcommand};

/// ytscribe - YouTube transcripts for AI assistants
///
/// Fetches YouTube video transcripts and metadata through yt-dlp, cleans
/// subtitle formatting out of them, and serves them to MCP clients or
/// prints them from the command line.
#[derive(Parser, Debug)]
#[command(name = "ytscribe")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch a video transcript and metadata and print them
    Fetch {
        /// YouTube URL or video ID
        url: String,

        /// Print the raw subtitle document without cleaning
        #[arg(long)]
        raw: bool,

        /// Write the payload to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Start MCP server for AI assistant integration (Claude, etc.)
    Mcp,

    /// Check system requirements and configuration
    Doctor,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,
}
