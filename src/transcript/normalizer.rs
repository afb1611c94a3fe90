//! Caption fetch and flattening.

use super::{CaptionSegment, Transcript};
use crate::error::{Result, YtsumError};
use crate::platform::VideoPlatform;
use std::time::Duration;
use tracing::{debug, instrument};

const NO_TRANSCRIPT: &str = "No transcript available for this video";

/// Fetch and flatten the captions of a video.
///
/// Fails with [`YtsumError::NoCaptions`] when the video has no caption track,
/// the payload is malformed, or its segments hold no words. Any error raised by the
/// platform client is reported as [`YtsumError::Upstream`] with its message
/// kept intact. No retries.
#[instrument(skip(platform))]
pub async fn normalize(platform: &dyn VideoPlatform, video_id: &str) -> Result<Transcript> {
    if video_id.trim().is_empty() {
        return Err(YtsumError::Validation("videoId is required".to_string()));
    }

    let info = platform.get_info(video_id).await.map_err(as_upstream)?;
    let data = platform
        .get_transcript(&info)
        .await
        .map_err(as_upstream)?
        .ok_or_else(no_captions)?;

    let segments: Vec<CaptionSegment> = data
        .initial_segments()
        .ok_or_else(no_captions)?
        .iter()
        .map(|raw| {
            CaptionSegment::new(raw.snippet.text.clone(), Duration::from_millis(raw.start_ms))
        })
        .collect();
    debug!("Received {} caption segments", segments.len());

    Transcript::from_segments(video_id, &segments).ok_or_else(no_captions)
}

fn no_captions() -> YtsumError {
    YtsumError::NoCaptions(NO_TRANSCRIPT.to_string())
}

fn as_upstream(e: YtsumError) -> YtsumError {
    match e {
        YtsumError::NoCaptions(_) | YtsumError::Upstream(_) => e,
        other => YtsumError::Upstream(other.to_string()),
    }
}
