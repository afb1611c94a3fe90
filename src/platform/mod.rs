//! Video platform client abstraction.
//!
//! The transcript pipeline only needs two capabilities from YouTube: resolve a
//! video id to its metadata, then fetch the caption panel for that video. Both
//! are expressed through the [`VideoPlatform`] trait so the pipeline can run
//! against [`InnertubeClient`] in production and a scripted double in tests.

mod handle;
mod innertube;
mod video_id;

#[cfg(test)]
pub(crate) mod testing;

pub use handle::PlatformHandle;
pub use innertube::InnertubeClient;
pub use video_id::extract_video_id;

use crate::error::Result;
use async_trait::async_trait;
use serde::Deserialize;

/// Metadata for a single video, as returned by [`VideoPlatform::get_info`].
#[derive(Debug, Clone, Default)]
pub struct VideoInfo {
    /// Video identifier the info was resolved for.
    pub id: String,
    /// Video title, if the platform reported one.
    pub title: Option<String>,
    /// Opaque token needed to request the caption panel. `None` when the video
    /// exposes no transcript.
    pub transcript_params: Option<String>,
}

/// Raw caption payload: `{transcript:{content:{body:{initial_segments:[..]}}}}`.
///
/// Every level is optional because the platform omits parts of it for videos
/// with disabled or partial captions.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranscriptData {
    pub transcript: Option<TranscriptPanel>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranscriptPanel {
    pub content: Option<TranscriptContent>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranscriptContent {
    pub body: Option<TranscriptBody>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranscriptBody {
    #[serde(default)]
    pub initial_segments: Vec<RawSegment>,
}

/// One caption cue from the initial (non-paginated) caption body.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSegment {
    pub snippet: Snippet,
    /// Offset of the cue from the start of the video, in milliseconds.
    #[serde(default)]
    pub start_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Snippet {
    pub text: String,
}

impl TranscriptData {
    /// Build a well-formed payload from `(text, start_ms)` pairs.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: Into<String>,
    {
        let initial_segments = segments
            .into_iter()
            .map(|(text, start_ms)| RawSegment {
                snippet: Snippet { text: text.into() },
                start_ms,
            })
            .collect();

        Self {
            transcript: Some(TranscriptPanel {
                content: Some(TranscriptContent {
                    body: Some(TranscriptBody { initial_segments }),
                }),
            }),
        }
    }

    /// The initial caption segments, or `None` if any level of the payload is missing.
    pub fn initial_segments(&self) -> Option<&[RawSegment]> {
        self.transcript
            .as_ref()?
            .content
            .as_ref()?
            .body
            .as_ref()
            .map(|b| b.initial_segments.as_slice())
    }
}

/// Capability interface over the YouTube client.
#[async_trait]
pub trait VideoPlatform: Send + Sync {
    /// Resolve metadata for a video.
    async fn get_info(&self, video_id: &str) -> Result<VideoInfo>;

    /// Fetch the caption panel for a video. `Ok(None)` means the video has no
    /// caption track.
    async fn get_transcript(&self, info: &VideoInfo) -> Result<Option<TranscriptData>>;
}
