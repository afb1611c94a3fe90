//! Throwaway summarization webhook for tests.

use axum::{http::StatusCode, routing::post, Json, Router};
use serde_json::{json, Value};

/// Serve `body` with `status` for every POST carrying a string `url` field.
/// Returns the webhook URL.
pub async fn spawn_collaborator(status: StatusCode, body: Value) -> String {
    let app = Router::new().route(
        "/webhook/youtube-summary",
        post(move |Json(req): Json<Value>| {
            let body = body.clone();
            async move {
                if req.get("url").and_then(Value::as_str).is_none() {
                    return (
                        StatusCode::UNPROCESSABLE_ENTITY,
                        Json(json!({ "error": "url missing" })),
                    );
                }
                (status, Json(body))
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}/webhook/youtube-summary", addr)
}

/// A URL on a local port nothing is listening on.
pub async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/webhook/youtube-summary", addr)
}
