use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::application::ports::AudioStoreError;
use crate::presentation::state::AppState;

use super::error::error_response;

const AUDIO_CONTENT_TYPE: &str = "audio/mpeg";

#[tracing::instrument(skip(state))]
pub async fn audio_handler(State(state): State<AppState>, Path(file_name): Path<String>) -> Response {
    match state.audio_store.fetch(&file_name).await {
        Ok(audio) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, AUDIO_CONTENT_TYPE)],
            audio,
        )
            .into_response(),
        Err(AudioStoreError::NotFound(_) | AudioStoreError::InvalidName(_)) => {
            tracing::debug!(file_name = %file_name, "Audio not found");
            error_response(StatusCode::NOT_FOUND, "Audio not found")
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to read audio");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}
