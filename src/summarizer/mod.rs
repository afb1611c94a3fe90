//! Client for the external summarization workflow.
//!
//! The workflow is an opaque webhook: it receives `{ "url": ... }`, fetches the
//! transcript itself, and answers with a [`SummaryResult`].

mod models;

#[cfg(test)]
pub(crate) mod testing;

pub use models::{SummaryBody, SummaryResult, Timestamp};

use crate::error::{Result, YtsumError};
use serde::Serialize;
use tracing::{debug, instrument};
use url::Url;

#[derive(Serialize)]
struct SummaryRequest<'a> {
    url: &'a str,
}

/// HTTP client for the summarization webhook.
#[derive(Clone)]
pub struct SummaryClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl SummaryClient {
    /// Create a client for the given webhook URL.
    pub fn new(endpoint: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint).map_err(|e| {
            YtsumError::Config(format!("Invalid summarizer URL '{}': {}", endpoint, e))
        })?;
        let http = reqwest::Client::builder().build()?;

        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Ask the workflow to summarize a video. Single attempt, no timeout.
    #[instrument(skip(self))]
    pub async fn summarize(&self, video_url: &str) -> Result<SummaryResult> {
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&SummaryRequest { url: video_url })
            .send()
            .await
            .map_err(|e| YtsumError::Summarization(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or(status.as_str());
            return Err(YtsumError::Summarization(reason.to_string()));
        }

        let result: SummaryResult = response
            .json()
            .await
            .map_err(|e| YtsumError::Summarization(format!("invalid response: {}", e)))?;
        debug!(video_id = ?result.video_id(), "Summary received");

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{spawn_collaborator, unreachable_url};
    use super::*;
    use axum::http::StatusCode;
    use serde_json::json;

    #[test]
    fn test_invalid_endpoint_is_config_error() {
        let err = SummaryClient::new("not a url").err().unwrap();
        assert!(matches!(err, YtsumError::Config(_)));
    }

    #[tokio::test]
    async fn test_summarize_success() {
        let endpoint = spawn_collaborator(
            StatusCode::OK,
            json!({ "summary": "X", "videoId": "abc", "wordCount": 1, "timestamp": 0 }),
        )
        .await;
        let client = SummaryClient::new(&endpoint).unwrap();

        let result = client.summarize("https://youtu.be/abc").await.unwrap();
        assert_eq!(result.summary_text(), "X");
        assert_eq!(result.video_id().as_deref(), Some("abc"));
        assert_eq!(result.word_count().as_deref(), Some("1"));
    }

    #[tokio::test]
    async fn test_summarize_accepts_stringified_word_count() {
        let endpoint = spawn_collaborator(
            StatusCode::OK,
            json!({ "summary": "X", "videoId": "abc", "wordCount": "1", "timestamp": 0 }),
        )
        .await;
        let client = SummaryClient::new(&endpoint).unwrap();

        let result = client.summarize("https://youtu.be/abc").await.unwrap();
        assert_eq!(result.word_count().as_deref(), Some("1"));
        assert!(result.render().contains("1 words"));
    }

    #[tokio::test]
    async fn test_summarize_non_success_status() {
        let endpoint = spawn_collaborator(StatusCode::INTERNAL_SERVER_ERROR, json!({})).await;
        let client = SummaryClient::new(&endpoint).unwrap();

        let err = client.summarize("https://youtu.be/abc").await.unwrap_err();
        assert!(matches!(err, YtsumError::Summarization(_)));
        assert_eq!(
            err.to_string(),
            "Summarization workflow failed: Internal Server Error"
        );
    }

    #[tokio::test]
    async fn test_summarize_unreachable() {
        let client = SummaryClient::new(&unreachable_url().await).unwrap();
        let err = client.summarize("https://youtu.be/abc").await.unwrap_err();
        assert!(matches!(err, YtsumError::Summarization(_)));
    }
}
