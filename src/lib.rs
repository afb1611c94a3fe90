//! ytsum - YouTube transcripts and summaries for AI assistants
//!
//! Two cooperating services live in this crate:
//!
//! - a transcript API (`ytsum serve`) that fetches a video's captions from
//!   YouTube and flattens them into one word-counted text blob
//! - an MCP server (`ytsum mcp`) exposing a `summarize_youtube_video` tool that
//!   forwards to an external summarization workflow
//!
//! # Architecture
//!
//! - `config` - Configuration management
//! - `platform` - YouTube client capability and its InnerTube implementation
//! - `transcript` - Caption normalization
//! - `api` - HTTP transcript endpoint
//! - `summarizer` - Client for the summarization workflow
//! - `mcp` - Tool server over stdio
//!
//! # Example
//!
//! ```rust,no_run
//! use ytsum::config::Settings;
//! use ytsum::platform::InnertubeClient;
//! use ytsum::transcript::normalize;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let client = InnertubeClient::create(&settings.youtube).await?;
//!
//!     let transcript = normalize(&client, "8jPQjjsBbIc").await?;
//!     println!("{} words", transcript.word_count());
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod mcp;
pub mod platform;
pub mod summarizer;
pub mod transcript;

pub use error::{Result, YtsumError};
