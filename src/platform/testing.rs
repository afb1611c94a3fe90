//! Scripted platform client for tests.

use super::{TranscriptData, VideoInfo, VideoPlatform};
use crate::error::{Result, YtsumError};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

enum Script {
    Transcript(TranscriptData),
    NoTranscript,
    InfoFails(String),
    TranscriptFails(String),
}

/// A [`VideoPlatform`] that replays a fixed outcome and counts calls.
pub struct FakePlatform {
    script: Script,
    info_calls: AtomicUsize,
}

impl FakePlatform {
    fn new(script: Script) -> Self {
        Self {
            script,
            info_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_segments(texts: &[&str]) -> Self {
        let segments = texts
            .iter()
            .enumerate()
            .map(|(i, t)| (t.to_string(), i as u64 * 1000));
        Self::new(Script::Transcript(TranscriptData::from_segments(segments)))
    }

    pub fn with_payload(data: TranscriptData) -> Self {
        Self::new(Script::Transcript(data))
    }

    pub fn without_captions() -> Self {
        Self::new(Script::NoTranscript)
    }

    pub fn failing_info(message: &str) -> Self {
        Self::new(Script::InfoFails(message.to_string()))
    }

    pub fn failing_transcript(message: &str) -> Self {
        Self::new(Script::TranscriptFails(message.to_string()))
    }

    pub fn info_calls(&self) -> usize {
        self.info_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl VideoPlatform for FakePlatform {
    async fn get_info(&self, video_id: &str) -> Result<VideoInfo> {
        self.info_calls.fetch_add(1, Ordering::SeqCst);
        match &self.script {
            Script::InfoFails(msg) => Err(YtsumError::Upstream(msg.clone())),
            _ => Ok(VideoInfo {
                id: video_id.to_string(),
                title: Some("Test Video".to_string()),
                transcript_params: Some("params".to_string()),
            }),
        }
    }

    async fn get_transcript(&self, _info: &VideoInfo) -> Result<Option<TranscriptData>> {
        match &self.script {
            Script::Transcript(data) => Ok(Some(data.clone())),
            Script::NoTranscript => Ok(None),
            Script::TranscriptFails(msg) => Err(YtsumError::Config(msg.clone())),
            Script::InfoFails(_) => unreachable!("get_info already failed"),
        }
    }
}
