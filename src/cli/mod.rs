//! CLI module for ytsum.

pub mod commands;
mod output;

pub use output::Output;

use clap::{Parser, Subcommand};

/// ytsum - YouTube transcripts and summaries for AI assistants
///
/// Runs the transcript API used by the summarization workflow, and the MCP
/// server that exposes the workflow as a tool.
#[derive(Parser, Debug)]
#[command(name = "ytsum")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug, -vvv for trace)
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
    /// Start the transcript HTTP API
    Serve {
        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Start MCP server for AI assistant integration (Claude, etc.)
    Mcp {
        /// Summarization webhook URL (overrides config)
        #[arg(long, env = "YTSUM_SUMMARIZER_URL")]
        summarizer_url: Option<String>,
    },

    /// Fetch and print the transcript of a video
    Transcript {
        /// YouTube URL or video ID
        input: String,

        /// Print the API's JSON response instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Check configuration and connectivity
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
