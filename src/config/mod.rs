//! Configuration module for ytsum.
//!
//! Handles loading and managing application settings.

mod settings;

pub use settings::{
    GeneralSettings, ServerSettings, Settings, SummarizerSettings, YoutubeSettings,
};
