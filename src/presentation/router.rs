use std::path::Path;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    audio_handler, convert_handler, health_handler, voices_handler,
};
use crate::presentation::state::AppState;

/// API routes plus the browser UI, served from `static_dir` for any path no
/// route claims (`/` resolves to `index.html`).
pub fn create_router(state: AppState, max_upload_bytes: usize, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/convert",
            post(convert_handler).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route("/audio/{filename}", get(audio_handler))
        .route("/voices", get(voices_handler))
        .fallback_service(ServeDir::new(static_dir))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
