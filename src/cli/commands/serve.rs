//! Transcript API server command.

use crate::api::{router, AppState};
use crate::cli::Output;
use crate::config::Settings;
use crate::platform::PlatformHandle;
use std::sync::Arc;
use tracing::info;

/// Run the transcript HTTP API.
pub async fn run_serve(
    host: Option<String>,
    port: Option<u16>,
    mut settings: Settings,
) -> anyhow::Result<()> {
    if let Some(host) = host {
        settings.server.host = host;
    }
    if let Some(port) = port {
        settings.server.port = port;
    }

    // Client setup starts now; requests that arrive first wait for it.
    let platform = Arc::new(PlatformHandle::innertube(settings.youtube.clone()));
    platform.spawn_init();

    let app = router(Arc::new(AppState::new(platform)));

    let addr = settings.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Transcript API listening on {}", addr);

    Output::header("YouTube Transcript API");
    println!();
    Output::success(&format!("Running on http://{}", addr));
    println!();
    println!("Endpoints:");
    Output::kv("Status", "GET  /");
    Output::kv("Transcript", "POST /transcript");
    println!();
    Output::info(&format!(
        "Test it: curl -X POST http://{}/transcript -H \"Content-Type: application/json\" -d '{{\"videoId\":\"8jPQjjsBbIc\"}}'",
        addr
    ));
    Output::info("Press Ctrl+C to stop the server.");

    axum::serve(listener, app).await?;

    Ok(())
}
