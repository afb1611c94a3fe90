//! MCP command implementation.

use crate::config::Settings;
use crate::mcp::McpServer;
use crate::summarizer::SummaryClient;
use anyhow::Result;

/// Run the MCP server.
pub async fn run_mcp(summarizer_url: Option<String>, settings: Settings) -> Result<()> {
    let endpoint = summarizer_url.unwrap_or(settings.summarizer.webhook_url);
    let server = McpServer::new(SummaryClient::new(&endpoint)?);
    server.run().await
}
