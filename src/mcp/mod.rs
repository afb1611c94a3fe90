//! MCP (Model Context Protocol) server for ytsum.
//!
//! Exposes the `summarize_youtube_video` tool to AI assistants.
//! Implements JSON-RPC 2.0 over stdio.

mod protocol;
mod server;
mod tools;

pub use server::McpServer;
