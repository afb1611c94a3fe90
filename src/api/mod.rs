//! HTTP transcript API.
//!
//! `GET /` reports liveness; `POST /transcript` takes `{ "videoId": ... }` and
//! returns the flattened transcript.

mod handlers;

use crate::platform::PlatformHandle;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Shared application state.
pub struct AppState {
    pub platform: Arc<PlatformHandle>,
}

impl AppState {
    pub fn new(platform: Arc<PlatformHandle>) -> Self {
        Self { platform }
    }
}

/// Build the API router.
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::status))
        .route("/transcript", post(handlers::transcript))
        .layer(cors)
        .with_state(state)
}
