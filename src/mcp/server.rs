//! MCP server implementation.

use super::protocol::*;
use super::tools::{get_prompts, get_tools};
use crate::config::Settings;
use crate::extractor::YtDlpSource;
use crate::service::{TranscriptRequest, TranscriptService};
use serde_json::{json, Value};
use std::io::{self, BufRead, Write};
use std::sync::Arc;

const PROTOCOL_VERSION: &str = "2024-11-05";
const SERVER_NAME: &str = "ytscribe";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// MCP server for ytscribe.
pub struct McpServer {
    settings: Settings,
    service: Option<TranscriptService>,
}

impl McpServer {
    /// Create a new MCP server.
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            service: None,
        }
    }

    /// Run the MCP server (reads from stdin, writes to stdout).
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let stdin = io::stdin();
        let mut stdout = io::stdout();

        // Log to stderr so it doesn't interfere with JSON-RPC
        eprintln!("ytscribe MCP server starting...");

        for line in stdin.lock().lines() {
            let line = line?;
            if line.is_empty() {
                continue;
            }

            let request: JsonRpcRequest = match serde_json::from_str(&line) {
                Ok(req) => req,
                Err(e) => {
                    eprintln!("Failed to parse request: {}", e);
                    let response = JsonRpcResponse::error(None, -32700, "Parse error");
                    writeln!(stdout, "{}", serde_json::to_string(&response)?)?;
                    stdout.flush()?;
                    continue;
                }
            };

            let response = self.handle_request(request).await;
            writeln!(stdout, "{}", serde_json::to_string(&response)?)?;
            stdout.flush()?;
        }

        Ok(())
    }

    /// Handle a single JSON-RPC request.
    async fn handle_request(&mut self, request: JsonRpcRequest) -> JsonRpcResponse {
        match request.method.as_str() {
            "initialize" => self.handle_initialize(request.id, request.params),
            "initialized" => {
                // Notification, no response needed but we'll send empty success
                JsonRpcResponse::success(request.id, json!({}))
            }
            "tools/list" => self.handle_tools_list(request.id),
            "tools/call" => self.handle_tools_call(request.id, request.params).await,
            "prompts/list" => self.handle_prompts_list(request.id),
            "prompts/get" => self.handle_prompts_get(request.id, request.params).await,
            _ => JsonRpcResponse::error(
                request.id,
                -32601,
                &format!("Method not found: {}", request.method),
            ),
        }
    }

    /// Handle initialize request.
    fn handle_initialize(&mut self, id: Option<Value>, _params: Option<Value>) -> JsonRpcResponse {
        let source = Arc::new(YtDlpSource::new(self.settings.extraction.clone()));
        self.service = Some(TranscriptService::new(self.settings.clone(), source));
        eprintln!("Transcript service initialized");

        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: ToolsCapability {
                    list_changed: false,
                },
                prompts: PromptsCapability {
                    list_changed: false,
                },
            },
            server_info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: SERVER_VERSION.to_string(),
            },
        };

        JsonRpcResponse::success(id, serde_json::to_value(result).unwrap())
    }

    /// Handle tools/list request.
    fn handle_tools_list(&self, id: Option<Value>) -> JsonRpcResponse {
        let result = ToolsListResult { tools: get_tools() };
        JsonRpcResponse::success(id, serde_json::to_value(result).unwrap())
    }

    /// Handle tools/call request.
    async fn handle_tools_call(
        &self,
        id: Option<Value>,
        params: Option<Value>,
    ) -> JsonRpcResponse {
        let params: ToolCallParams = match params {
            Some(p) => match serde_json::from_value(p) {
                Ok(params) => params,
                Err(e) => {
                    return JsonRpcResponse::error(id, -32602, &format!("Invalid params: {}", e))
                }
            },
            None => return JsonRpcResponse::error(id, -32602, "Missing params"),
        };

        let result = match params.name.as_str() {
            "get_youtube" => self.tool_get_youtube(params.arguments).await,
            _ => ToolCallResult::error(format!("Unknown tool: {}", params.name)),
        };

        JsonRpcResponse::success(id, serde_json::to_value(result).unwrap())
    }

    /// The get_youtube tool: fetch transcript and metadata for a URL.
    async fn tool_get_youtube(&self, args: Option<Value>) -> ToolCallResult {
        let args = match args {
            Some(a) => a,
            None => return ToolCallResult::error("Missing arguments".to_string()),
        };

        let url = match args.get("url").and_then(|v| v.as_str()) {
            Some(u) => u,
            None => return ToolCallResult::error("Missing 'url' argument".to_string()),
        };

        let service = match &self.service {
            Some(s) => s,
            None => return ToolCallResult::error("Server not initialized".to_string()),
        };

        let mut request = TranscriptRequest::new(url);
        request.raw = args.get("raw").and_then(|v| v.as_bool());

        match service.handle(request).await {
            Ok(payload) => ToolCallResult::text(payload),
            Err(e) => ToolCallResult::error(format!("Failed to fetch YouTube transcript: {}", e)),
        }
    }

    /// Handle prompts/list request.
    fn handle_prompts_list(&self, id: Option<Value>) -> JsonRpcResponse {
        let result = PromptsListResult {
            prompts: get_prompts(),
        };
        JsonRpcResponse::success(id, serde_json::to_value(result).unwrap())
    }

    /// Handle prompts/get request.
    async fn handle_prompts_get(
        &self,
        id: Option<Value>,
        params: Option<Value>,
    ) -> JsonRpcResponse {
        let params: PromptGetParams = match params {
            Some(p) => match serde_json::from_value(p) {
                Ok(params) => params,
                Err(e) => {
                    return JsonRpcResponse::error(id, -32602, &format!("Invalid params: {}", e))
                }
            },
            None => return JsonRpcResponse::error(id, -32602, "Missing params"),
        };

        if params.name != "get_youtube" {
            return JsonRpcResponse::error(
                id,
                -32602,
                &format!("Unknown prompt: {}", params.name),
            );
        }

        let url = match params
            .arguments
            .as_ref()
            .and_then(|a| a.get("url"))
            .and_then(|v| v.as_str())
        {
            Some(u) => u.to_string(),
            None => return JsonRpcResponse::error(id, -32602, "URL is required"),
        };

        let service = match &self.service {
            Some(s) => s,
            None => return JsonRpcResponse::error(id, -32000, "Server not initialized"),
        };

        let result = match service.fetch(&TranscriptRequest::new(&url)).await {
            Ok(response) => {
                let title = response
                    .metadata
                    .title
                    .clone()
                    .unwrap_or_else(|| url.clone());

                let mut content = String::new();
                content.push_str(&format!("Video: {}\n", title));
                if let Some(uploader) = &response.metadata.uploader {
                    content.push_str(&format!("Uploader: {}\n", uploader));
                }
                if let Some(date) = &response.metadata.upload_date {
                    content.push_str(&format!("Upload date: {}\n", date));
                }
                content.push_str("\nTranscript:\n");
                content.push_str(&response.transcript);

                GetPromptResult::user_text(format!("YouTube transcript for: {}", title), content)
            }
            Err(e) => GetPromptResult::user_text(
                "Failed to fetch YouTube transcript".to_string(),
                e.to_string(),
            ),
        };

        JsonRpcResponse::success(id, serde_json::to_value(result).unwrap())
    }
}
