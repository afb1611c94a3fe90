//! Transcript command - fetch a transcript from the terminal.

use crate::cli::Output;
use crate::config::Settings;
use crate::platform::{extract_video_id, InnertubeClient};
use crate::transcript::normalize;
use anyhow::{bail, Result};
use serde_json::json;

/// Fetch and print the transcript of a single video.
pub async fn run_transcript(input: &str, as_json: bool, settings: Settings) -> Result<()> {
    let video_id = extract_video_id(input).unwrap_or_else(|| input.trim().to_string());
    if video_id.is_empty() {
        bail!("videoId is required");
    }

    let spinner = Output::spinner("Connecting to YouTube...");
    let client = match InnertubeClient::create(&settings.youtube).await {
        Ok(client) => client,
        Err(e) => {
            spinner.finish_and_clear();
            return Err(e.into());
        }
    };

    spinner.set_message(format!("Fetching transcript for {}...", video_id));
    let result = normalize(&client, &video_id).await;
    spinner.finish_and_clear();

    let transcript = match result {
        Ok(transcript) => transcript,
        Err(e) if e.is_no_captions() => {
            Output::warning(&format!("{} has no captions.", video_id));
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };

    if as_json {
        let body = json!({
            "success": true,
            "videoId": transcript.video_id(),
            "transcript": transcript.text(),
            "wordCount": transcript.word_count(),
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        Output::header(&format!("Transcript: {}", video_id));
        println!();
        println!("{}", transcript.text());
        println!();
        Output::kv("Words", &transcript.word_count().to_string());
    }

    Ok(())
}
