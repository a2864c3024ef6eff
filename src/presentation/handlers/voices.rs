use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use crate::domain::LanguageCode;
use crate::presentation::state::AppState;

use super::error::error_response;

#[derive(Debug, Deserialize)]
pub struct VoicesQuery {
    pub lang: Option<String>,
}

/// Catalog voices for the primary subtag of `lang` (`pt-BR` lists every `pt-*` voice).
#[tracing::instrument(skip(state))]
pub async fn voices_handler(State(state): State<AppState>, Query(query): Query<VoicesQuery>) -> Response {
    let Some(language) = query.lang.as_deref().and_then(LanguageCode::parse) else {
        return error_response(StatusCode::BAD_REQUEST, "Query parameter 'lang' is required");
    };

    let voices = state
        .voice_catalog
        .entries_for_language(language.primary_subtag());

    (StatusCode::OK, Json(voices)).into_response()
}
