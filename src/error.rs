//! Error types for ytsum.

use thiserror::Error;

/// Library-level error type for ytsum operations.
#[derive(Error, Debug)]
pub enum YtsumError {
    /// A required input was missing or empty.
    #[error("{0}")]
    Validation(String),

    /// The video has no usable caption track.
    #[error("{0}")]
    NoCaptions(String),

    /// The video platform client failed (network, deleted, private, region-locked).
    #[error("{0}")]
    Upstream(String),

    #[error("Summarization workflow failed: {0}")]
    Summarization(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl YtsumError {
    /// Whether this error represents a missing caption track rather than a fault.
    pub fn is_no_captions(&self) -> bool {
        matches!(self, YtsumError::NoCaptions(_))
    }
}

/// Result type alias for ytsum operations.
pub type Result<T> = std::result::Result<T, YtsumError>;
