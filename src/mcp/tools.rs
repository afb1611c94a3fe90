//! MCP tool definitions for ytsum.

use super::protocol::Tool;
use serde_json::json;

pub const SUMMARIZE_YOUTUBE_VIDEO: &str = "summarize_youtube_video";

/// Get all available tools.
pub fn get_tools() -> Vec<Tool> {
    vec![Tool {
        name: SUMMARIZE_YOUTUBE_VIDEO.to_string(),
        description: "Analyze and summarize a YouTube video. Returns structured insights \
            including summary, key points, action items, and topics. Works with any YouTube URL."
            .to_string(),
        input_schema: json!({
            "type": "object",
            "properties": {
                "url": {
                    "type": "string",
                    "description": "Full YouTube URL (e.g., https://www.youtube.com/watch?v=VIDEO_ID or https://youtu.be/VIDEO_ID)"
                }
            },
            "required": ["url"]
        }),
    }]
}
