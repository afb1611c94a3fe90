//! Request handlers for the transcript API.

use super::AppState;
use crate::error::YtsumError;
use crate::transcript::normalize;
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

const FETCH_FAILED_HINT: &str = "Failed to fetch transcript. Video may not have captions.";

// === Request/Response Types ===

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct TranscriptRequest {
    #[serde(default)]
    video_id: Option<String>,
}

impl TranscriptRequest {
    /// Parse a request body, treating anything unreadable as an empty request.
    fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }

    fn video_id(&self) -> Option<&str> {
        self.video_id.as_deref().filter(|id| !id.trim().is_empty())
    }
}

#[derive(Serialize)]
struct StatusResponse {
    status: &'static str,
    message: &'static str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TranscriptResponse {
    success: bool,
    video_id: String,
    transcript: String,
    word_count: usize,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
}

impl ErrorResponse {
    fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

// === Handlers ===

pub(super) async fn status() -> impl IntoResponse {
    Json(StatusResponse {
        status: "running",
        message: "YouTube Transcript API is ready",
    })
}

pub(super) async fn transcript(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let req = TranscriptRequest::from_body(&body);
    let Some(video_id) = req.video_id() else {
        return ErrorResponse {
            error: "videoId is required".to_string(),
            message: None,
        }
        .into_response_with(StatusCode::BAD_REQUEST);
    };

    info!("Fetching transcript for video: {}", video_id);

    let result = match state.platform.get().await {
        Ok(platform) => normalize(platform.as_ref(), video_id).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(transcript) => {
            info!("Successfully fetched {} words", transcript.word_count());
            let word_count = transcript.word_count();
            Json(TranscriptResponse {
                success: true,
                video_id: video_id.to_string(),
                transcript: transcript.into_text(),
                word_count,
            })
            .into_response()
        }
        Err(e) => {
            match &e {
                YtsumError::NoCaptions(_) => info!("No captions for video {}: {}", video_id, e),
                _ => error!("Error fetching transcript for {}: {}", video_id, e),
            }
            ErrorResponse {
                error: e.to_string(),
                message: Some(FETCH_FAILED_HINT),
            }
            .into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::{router, AppState};
    use crate::error::YtsumError;
    use crate::platform::testing::FakePlatform;
    use crate::platform::{PlatformHandle, VideoPlatform};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(platform: Arc<FakePlatform>) -> Router {
        let handle = Arc::new(PlatformHandle::ready(platform));
        router(Arc::new(AppState::new(handle)))
    }

    async fn post_transcript(app: Router, body: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::post("/transcript")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_status() {
        let response = app(Arc::new(FakePlatform::without_captions()))
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "running");
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn test_missing_video_id() {
        let platform = Arc::new(FakePlatform::with_segments(&["Hello"]));
        let (status, body) = post_transcript(app(Arc::clone(&platform)), "{}").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "videoId is required" }));
        assert_eq!(platform.info_calls(), 0);
    }

    #[tokio::test]
    async fn test_empty_or_unreadable_video_id() {
        for body in [r#"{"videoId":""}"#, r#"{"videoId":42}"#, "not json", ""] {
            let platform = Arc::new(FakePlatform::with_segments(&["Hello"]));
            let (status, json) = post_transcript(app(Arc::clone(&platform)), body).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
            assert_eq!(json["error"], "videoId is required");
            assert_eq!(platform.info_calls(), 0);
        }
    }

    #[tokio::test]
    async fn test_success() {
        let platform = Arc::new(FakePlatform::with_segments(&["Hello", "world"]));
        let (status, body) =
            post_transcript(app(platform), r#"{"videoId":"8jPQjjsBbIc"}"#).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "success": true,
                "videoId": "8jPQjjsBbIc",
                "transcript": "Hello world",
                "wordCount": 2
            })
        );
    }

    #[tokio::test]
    async fn test_upstream_failure() {
        let platform = Arc::new(FakePlatform::failing_info("Video unavailable (ERROR)"));
        let (status, body) = post_transcript(app(platform), r#"{"videoId":"gone"}"#).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Video unavailable (ERROR)");
        assert_eq!(body["message"], super::FETCH_FAILED_HINT);
    }

    #[tokio::test]
    async fn test_no_captions_shares_failure_message() {
        let platform = Arc::new(FakePlatform::without_captions());
        let (status, body) = post_transcript(app(platform), r#"{"videoId":"quiet"}"#).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "No transcript available for this video");
        assert_eq!(body["message"], super::FETCH_FAILED_HINT);
    }

    #[tokio::test]
    async fn test_blank_captions_are_a_failure() {
        let platform = Arc::new(FakePlatform::with_segments(&[""]));
        let (status, body) = post_transcript(app(platform), r#"{"videoId":"silent"}"#).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "No transcript available for this video");
        assert_eq!(body["message"], super::FETCH_FAILED_HINT);
        assert!(body.get("transcript").is_none());
    }

    #[tokio::test]
    async fn test_failed_init_reported_per_request() {
        let handle = Arc::new(PlatformHandle::new(|| async {
            Err::<Arc<dyn VideoPlatform>, _>(YtsumError::Config("dns failure".to_string()))
        }));
        let app = router(Arc::new(AppState::new(handle)));

        let (status, body) = post_transcript(app.clone(), r#"{"videoId":"abc"}"#).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().contains("dns failure"));

        // The process keeps serving after a failure.
        let (status, _) = post_transcript(app, "{}").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
