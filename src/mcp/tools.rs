//! MCP tool and prompt definitions for ytscribe.

use super::protocol::{Prompt, PromptArgument, Tool};
use serde_json::json;

/// Get all available tools.
pub fn get_tools() -> Vec<Tool> {
    vec![Tool {
        name: "get_youtube".to_string(),
        description: "Fetches a YouTube video transcript and metadata. \
            Retrieves full transcripts (subtitles) from YouTube videos along with metadata \
            like title, uploader, and upload date. Automatically cleans up VTT formatting \
            to reduce token usage unless raw format is requested. Returns the complete \
            transcript without truncation."
            .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "url": {
                    "type": "string",
                    "description": "YouTube video URL to fetch transcript from"
                },
                "raw": {
                    "type": "boolean",
                    "description": "Get the raw VTT transcript content without cleaning up timestamps and formatting",
                    "default": false
                }
            },
            "required": ["url"]
        }),
    }]
}

/// Get all available prompts.
pub fn get_prompts() -> Vec<Prompt> {
    vec![Prompt {
        name: "get_youtube".to_string(),
        description: "Fetch a YouTube video transcript and metadata".to_string(),
        arguments: vec![PromptArgument {
            name: "url".to_string(),
            description: "YouTube video URL to fetch".to_string(),
            required: true,
        }],
    }]
}
