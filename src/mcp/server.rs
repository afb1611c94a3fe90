//! MCP server implementation.

use super::protocol::*;
use super::tools::{get_tools, SUMMARIZE_YOUTUBE_VIDEO};
use crate::error::YtsumError;
use crate::summarizer::SummaryClient;
use serde::Serialize;
use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

const PROTOCOL_VERSION: &str = "2024-11-05";
const SERVER_NAME: &str = "youtube-summarizer";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// MCP server exposing the video summarization tool.
pub struct McpServer {
    summarizer: SummaryClient,
}

impl McpServer {
    /// Create a new MCP server.
    pub fn new(summarizer: SummaryClient) -> Self {
        Self { summarizer }
    }

    /// Run the MCP server (reads from stdin, writes to stdout).
    pub async fn run(&self) -> anyhow::Result<()> {
        info!("YouTube Summarizer MCP Server running on stdio");
        self.serve(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
            .await
    }

    /// Serve newline-delimited JSON-RPC messages until `reader` is exhausted.
    pub async fn serve<R, W>(&self, reader: R, mut writer: W) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = reader.lines();

        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let response = match serde_json::from_str::<JsonRpcRequest>(line) {
                Ok(request) => self.handle_request(request).await,
                Err(e) => {
                    warn!("Failed to parse request: {}", e);
                    Some(JsonRpcResponse::error(None, PARSE_ERROR, "Parse error"))
                }
            };

            if let Some(response) = response {
                let mut message = serde_json::to_vec(&response)?;
                message.push(b'\n');
                writer.write_all(&message).await?;
                writer.flush().await?;
            }
        }

        Ok(())
    }

    /// Handle a single JSON-RPC message. Notifications produce no response.
    async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        let id = request.id;
        let is_notification = id.is_none();

        let response = match request.method.as_str() {
            "initialize" => self.handle_initialize(id, request.params),
            "notifications/initialized" | "initialized" => return None,
            "ping" => JsonRpcResponse::success(id, json!({})),
            "tools/list" => self.handle_tools_list(id),
            "tools/call" => self.handle_tools_call(id, request.params).await,
            _ => JsonRpcResponse::error(
                id,
                METHOD_NOT_FOUND,
                &format!("Method not found: {}", request.method),
            ),
        };

        if is_notification {
            debug!("Dropping response to notification {}", request.method);
            None
        } else {
            Some(response)
        }
    }

    /// Handle initialize request.
    fn handle_initialize(&self, id: Option<Value>, params: Option<Value>) -> JsonRpcResponse {
        if let Some(params) = params.and_then(|p| serde_json::from_value::<InitializeParams>(p).ok()) {
            if let Some(client) = &params.client_info {
                info!(
                    "Client connected: {} {} (protocol {})",
                    client.name,
                    client.version.as_deref().unwrap_or("?"),
                    params.protocol_version.as_deref().unwrap_or("?")
                );
            }
        }

        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: ToolsCapability { list_changed: false },
            },
            server_info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: SERVER_VERSION.to_string(),
            },
        };

        respond(id, result)
    }

    /// Handle tools/list request.
    fn handle_tools_list(&self, id: Option<Value>) -> JsonRpcResponse {
        respond(id, ToolsListResult { tools: get_tools() })
    }

    /// Handle tools/call request.
    async fn handle_tools_call(&self, id: Option<Value>, params: Option<Value>) -> JsonRpcResponse {
        let params: ToolCallParams = match params {
            Some(p) => match serde_json::from_value(p) {
                Ok(params) => params,
                Err(e) => {
                    return JsonRpcResponse::error(
                        id,
                        INVALID_PARAMS,
                        &format!("Invalid params: {}", e),
                    )
                }
            },
            None => return JsonRpcResponse::error(id, INVALID_PARAMS, "Missing params"),
        };

        match params.name.as_str() {
            SUMMARIZE_YOUTUBE_VIDEO => {
                let result = self.tool_summarize(params.arguments).await;
                respond(id, result)
            }
            _ => {
                let err = YtsumError::UnknownTool(params.name);
                warn!("{}", err);
                JsonRpcResponse::error(id, INTERNAL_ERROR, &err.to_string())
            }
        }
    }

    /// Summarize tool.
    async fn tool_summarize(&self, args: Option<Value>) -> ToolCallResult {
        let url = args
            .as_ref()
            .and_then(|a| a.get("url"))
            .and_then(Value::as_str)
            .filter(|u| !u.trim().is_empty());

        let Some(url) = url else {
            return ToolCallResult::error("Error: url is required".to_string());
        };

        info!("Summarizing {}", url);
        match self.summarizer.summarize(url).await {
            Ok(result) => ToolCallResult::text(result.render()),
            Err(e) => {
                warn!("Summarization failed for {}: {}", url, e);
                ToolCallResult::error(format!("Error: {}", e))
            }
        }
    }
}

/// Wrap a serializable result in a success response.
fn respond<T: Serialize>(id: Option<Value>, result: T) -> JsonRpcResponse {
    match serde_json::to_value(result) {
        Ok(value) => JsonRpcResponse::success(id, value),
        Err(e) => JsonRpcResponse::error(id, INTERNAL_ERROR, &format!("Serialization failed: {}", e)),
    }
}
