//! Transcript normalization.
//!
//! Turns the time-segmented caption payload returned by the platform client
//! into a single text blob with a word count.

mod normalizer;

pub use normalizer::normalize;

use serde::Serialize;
use std::time::Duration;

/// One caption cue, in spoken order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionSegment {
    pub text: String,
    pub start_offset: Duration,
}

impl CaptionSegment {
    pub fn new(text: impl Into<String>, start_offset: Duration) -> Self {
        Self {
            text: text.into(),
            start_offset,
        }
    }
}

/// Flattened transcript of a video.
///
/// Only built from captions that contain at least one word; a video without
/// captions never produces a `Transcript`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transcript {
    video_id: String,
    text: String,
    word_count: usize,
}

impl Transcript {
    /// Join segment texts with single spaces, in order. Returns `None` when
    /// the joined text holds no words.
    pub fn from_segments(video_id: impl Into<String>, segments: &[CaptionSegment]) -> Option<Self> {
        let text = segments
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let word_count = count_words(&text);
        if word_count == 0 {
            return None;
        }

        Some(Self {
            video_id: video_id.into(),
            text,
            word_count,
        })
    }

    pub fn video_id(&self) -> &str {
        &self.video_id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Consume the transcript, returning its text.
    pub fn into_text(self) -> String {
        self.text
    }
}

/// Number of whitespace-delimited tokens.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segments(texts: &[&str]) -> Vec<CaptionSegment> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| CaptionSegment::new(*t, Duration::from_secs(i as u64)))
            .collect()
    }

    #[test]
    fn test_join_preserves_order_and_duplicates() {
        let t = Transcript::from_segments("vid", &segments(&["so", "so", "we begin", "now"])).unwrap();
        assert_eq!(t.text(), "so so we begin now");
        assert_eq!(t.word_count(), 5);
        assert_eq!(t.video_id(), "vid");
    }

    #[test]
    fn test_segment_text_is_not_trimmed() {
        let t = Transcript::from_segments("vid", &segments(&[" [Music] ", "hey\nthere"])).unwrap();
        assert_eq!(t.text(), " [Music]  hey\nthere");
        assert_eq!(t.word_count(), 3);
    }

    #[test]
    fn test_empty_segments_build_nothing() {
        assert!(Transcript::from_segments("vid", &[]).is_none());
    }

    #[test]
    fn test_blank_segments_build_nothing() {
        assert!(Transcript::from_segments("vid", &segments(&[""])).is_none());
        assert!(Transcript::from_segments("vid", &segments(&["", " ", "\n"])).is_none());
    }

    #[test]
    fn test_word_count_matches_whitespace_split() {
        for texts in [
            vec!["Hello", "world"],
            vec!["a  b", "\tc"],
            vec!["", "x"],
            vec!["one"],
        ] {
            let t = Transcript::from_segments("vid", &segments(&texts)).unwrap();
            assert_eq!(t.word_count(), t.text().split_whitespace().count());
        }
    }

    #[test]
    fn test_serializes_camel_case() {
        let t = Transcript::from_segments("abc", &segments(&["Hello", "world"])).unwrap();
        let json = serde_json::to_value(&t).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "videoId": "abc", "text": "Hello world", "wordCount": 2 })
        );
    }
}
