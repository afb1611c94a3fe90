//! YouTube InnerTube client.
//!
//! Talks to the same internal JSON API the YouTube web player uses. Only the
//! three calls the transcript pipeline needs are implemented.

use super::{TranscriptData, VideoInfo, VideoPlatform};
use crate::config::YoutubeSettings;
use crate::error::{Result, YtsumError};
use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::{debug, instrument};

const USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

const TRANSCRIPT_SEGMENTS_PATH: &str = "/actions/0/updateEngagementPanelAction/content/transcriptRenderer/content/transcriptSearchPanelRenderer/body/transcriptSegmentListRenderer/initialSegments";

const TRANSCRIPT_PARAMS_PATH: &str = "/engagementPanelSectionListRenderer/content/continuationItemRenderer/continuationEndpoint/getTranscriptEndpoint/params";

/// InnerTube-backed [`VideoPlatform`].
pub struct InnertubeClient {
    http: reqwest::Client,
    base_url: String,
    context: Value,
}

impl InnertubeClient {
    /// Create a client session.
    ///
    /// Performs one round trip to obtain visitor data, which the transcript
    /// endpoint expects on subsequent calls.
    pub async fn create(settings: &YoutubeSettings) -> Result<Self> {
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

        let mut client = Self {
            http,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            context: json!({
                "client": {
                    "clientName": settings.client_name,
                    "clientVersion": settings.client_version,
                    "hl": settings.hl,
                    "gl": settings.gl,
                }
            }),
        };

        let response = client.post("visitor_id", json!({})).await?;
        match response
            .pointer("/responseContext/visitorData")
            .and_then(Value::as_str)
        {
            Some(visitor_data) => {
                client.context["client"]["visitorData"] = json!(visitor_data);
            }
            None => debug!("InnerTube session created without visitor data"),
        }

        Ok(client)
    }

    /// POST to an InnerTube endpoint with the session context attached.
    async fn post(&self, endpoint: &str, mut body: Value) -> Result<Value> {
        let url = format!("{}/youtubei/v1/{}?prettyPrint=false", self.base_url, endpoint);
        body["context"] = self.context.clone();

        let response = self.http.post(&url).json(&body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(YtsumError::Upstream(format!(
                "InnerTube {} request failed ({}): {}",
                endpoint,
                status,
                api_error_message(&text)
            )));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl VideoPlatform for InnertubeClient {
    #[instrument(skip(self))]
    async fn get_info(&self, video_id: &str) -> Result<VideoInfo> {
        let body = json!({ "videoId": video_id });
        let (player, next) =
            tokio::try_join!(self.post("player", body.clone()), self.post("next", body))?;

        check_playability(&player)?;

        let title = player
            .pointer("/videoDetails/title")
            .and_then(Value::as_str)
            .map(str::to_string);
        let transcript_params = find_transcript_params(&next);
        debug!(has_transcript = transcript_params.is_some(), "Resolved video info");

        Ok(VideoInfo {
            id: video_id.to_string(),
            title,
            transcript_params,
        })
    }

    #[instrument(skip(self, info), fields(video_id = %info.id))]
    async fn get_transcript(&self, info: &VideoInfo) -> Result<Option<TranscriptData>> {
        let Some(params) = info.transcript_params.as_deref() else {
            return Ok(None);
        };

        let response = self
            .post("get_transcript", json!({ "params": params }))
            .await?;
        Ok(parse_transcript_response(&response))
    }
}

/// Fail unless the player response reports the video as playable.
fn check_playability(player: &Value) -> Result<()> {
    let status = player
        .pointer("/playabilityStatus/status")
        .and_then(Value::as_str)
        .unwrap_or("ERROR");

    if status == "OK" {
        return Ok(());
    }

    let reason = player
        .pointer("/playabilityStatus/reason")
        .and_then(Value::as_str)
        .unwrap_or("This video is unavailable");
    Err(YtsumError::Upstream(format!("{} ({})", reason, status)))
}

/// Find the transcript panel token in a `next` response.
fn find_transcript_params(next: &Value) -> Option<String> {
    next.get("engagementPanels")?
        .as_array()?
        .iter()
        .find_map(|panel| panel.pointer(TRANSCRIPT_PARAMS_PATH)?.as_str())
        .map(str::to_string)
}

/// Convert a `get_transcript` response into the caption payload.
///
/// Section headers are skipped; only timed cue renderers become segments.
fn parse_transcript_response(response: &Value) -> Option<TranscriptData> {
    let items = response.pointer(TRANSCRIPT_SEGMENTS_PATH)?.as_array()?;

    let segments = items.iter().filter_map(|item| {
        let renderer = item.get("transcriptSegmentRenderer")?;
        let text = renderer
            .pointer("/snippet/runs")?
            .as_array()?
            .iter()
            .filter_map(|run| run.get("text").and_then(Value::as_str))
            .collect::<String>();
        let start_ms = renderer
            .get("startMs")
            .and_then(Value::as_str)
            .and_then(|s| s.parse().ok())
            .unwrap_or(0);
        Some((text, start_ms))
    });

    Some(TranscriptData::from_segments(segments))
}

/// Pull `error.message` out of an InnerTube error body, falling back to the raw text.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.pointer("/error/message")?.as_str().map(str::to_string))
        .unwrap_or_else(|| body.trim().to_string())
}
