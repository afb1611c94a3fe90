//! Summarization workflow response model.

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::Deserialize;
use serde_json::Value;
use std::fmt::Display;

const NO_SUMMARY: &str = "No summary available";

/// Response body of the summarization workflow.
///
/// `videoId` and `wordCount` are kept as raw JSON: the workflow may send them
/// as numbers or strings, and they are only ever displayed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResult {
    #[serde(default)]
    pub summary: Option<SummaryBody>,
    #[serde(default)]
    pub video_id: Option<Value>,
    #[serde(default)]
    pub word_count: Option<Value>,
    #[serde(default)]
    pub timestamp: Option<Timestamp>,
}

/// The `summary` field: either `{ "content": "..." }` or a bare string.
///
/// The nested form is tried first.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SummaryBody {
    Nested { content: String },
    Text(String),
    Other(Value),
}

impl SummaryBody {
    /// The summary text, if the field holds a non-empty one.
    pub fn text(&self) -> Option<&str> {
        let text = match self {
            SummaryBody::Nested { content } => Some(content.as_str()),
            SummaryBody::Text(text) => Some(text.as_str()),
            SummaryBody::Other(_) => None,
        };
        text.filter(|s| !s.is_empty())
    }
}

/// When the summary was produced: epoch milliseconds or an RFC 3339 string.
/// Anything else is kept and rendered as unknown.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Millis(f64),
    Text(String),
    Other(Value),
}

impl Timestamp {
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            Timestamp::Millis(ms) => DateTime::from_timestamp_millis(*ms as i64),
            Timestamp::Text(s) => DateTime::parse_from_rfc3339(s)
                .map(|dt| dt.with_timezone(&Utc))
                .ok()
                .or_else(|| {
                    s.parse::<f64>()
                        .ok()
                        .and_then(|ms| DateTime::from_timestamp_millis(ms as i64))
                }),
            Timestamp::Other(_) => None,
        }
    }
}

impl SummaryResult {
    pub fn video_id(&self) -> Option<String> {
        self.video_id.as_ref().and_then(display_scalar)
    }

    pub fn word_count(&self) -> Option<String> {
        self.word_count.as_ref().and_then(display_scalar)
    }

    pub fn summary_text(&self) -> &str {
        self.summary
            .as_ref()
            .and_then(SummaryBody::text)
            .unwrap_or(NO_SUMMARY)
    }

    /// Human-readable report, with the timestamp in local time.
    pub fn render(&self) -> String {
        self.render_in(&Local)
    }

    /// Human-readable report, with the timestamp rendered in `tz`.
    pub fn render_in<Tz>(&self, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let video_id = self.video_id().unwrap_or_else(|| "unknown".to_string());
        let word_count = self.word_count().unwrap_or_else(|| "unknown".to_string());
        let analyzed = self
            .timestamp
            .as_ref()
            .and_then(Timestamp::to_datetime)
            .map(|dt| format_date_time(&dt.with_timezone(tz)))
            .unwrap_or_else(|| "unknown".to_string());

        format!(
            "📹 **Video Analysis Complete**\n\n{}\n\n**Video ID:** {}\n**Word Count:** {} words\n**Analyzed:** {}",
            self.summary_text(),
            video_id,
            word_count,
            analyzed
        )
    }
}

/// Display text of a scalar JSON value. Null, arrays and objects have none.
fn display_scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// en-US style `M/D/YYYY, h:mm:ss AM`.
fn format_date_time<Tz>(dt: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    dt.format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}
