use std::io::Write;
use std::path::{Path, PathBuf};

use axum::Json;
use axum::body::Bytes;
use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tempfile::NamedTempFile;
use unicode_normalization::UnicodeNormalization;

use crate::application::services::{ConversionError, ConversionRequest, ExtractionError};
use crate::domain::{Document, DocumentFormat, Provenance, VoiceCatalogEntry, VoiceGender};
use crate::presentation::state::AppState;

use super::error::error_response;

const FALLBACK_FILENAME: &str = "document";

#[derive(Serialize)]
pub struct ConvertResponse {
    pub ok: bool,
    pub filename: String,
    pub detected_language: String,
    pub voice: String,
    pub provenance: Provenance,
    pub available_voices: Vec<VoiceCatalogEntry>,
    pub audio_url: String,
}

#[derive(Default)]
struct ConvertForm {
    file: Option<(String, Bytes)>,
    voice: Option<String>,
    preferred_gender: Option<String>,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn convert_handler(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let form = match read_form(&mut multipart).await {
        Ok(form) => form,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read multipart");
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("Failed to read multipart: {}", e),
            );
        }
    };

    let Some((raw_filename, data)) = form.file else {
        tracing::warn!("Convert request with no file");
        return error_response(StatusCode::BAD_REQUEST, "No file uploaded");
    };

    if raw_filename.trim().is_empty() {
        tracing::warn!("Convert request with an empty filename");
        return error_response(StatusCode::BAD_REQUEST, "No file selected");
    }

    let Some((filename, format)) = upload_filename(&raw_filename) else {
        tracing::warn!(filename = %raw_filename, "Unsupported file extension");
        return error_response(
            StatusCode::BAD_REQUEST,
            "Unsupported file type. Upload a .pdf, .docx or .txt file",
        );
    };

    tracing::debug!(filename = %filename, bytes = data.len(), "File data received");

    let size_bytes = data.len() as u64;
    let staged = match stage_upload(state.upload_dir.clone(), format, data).await {
        Ok(staged) => staged,
        Err(e) => {
            tracing::error!(error = %e, "Failed to stage upload");
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to store upload: {}", e),
            );
        }
    };

    let request = ConversionRequest {
        document: Document::new(staged.path().to_path_buf(), filename, format, size_bytes),
        requested_voice: form.voice.filter(|v| !v.trim().is_empty()),
        preferred_gender: form
            .preferred_gender
            .and_then(|g| g.parse::<VoiceGender>().ok()),
    };

    // The staged file is removed when `staged` drops, on success and failure alike.
    let outcome = state.conversion_service.convert(request).await;
    drop(staged);

    match outcome {
        Ok(result) => (
            StatusCode::OK,
            Json(ConvertResponse {
                ok: true,
                filename: result.filename,
                detected_language: result.detected_language.to_string(),
                voice: result.voice.to_string(),
                provenance: result.provenance,
                available_voices: result.available_voices,
                audio_url: result.audio.url,
            }),
        )
            .into_response(),
        Err(ConversionError::Extraction(ExtractionError::UnsupportedFormat(format))) => {
            error_response(
                StatusCode::BAD_REQUEST,
                format!("Unsupported file type: {}", format),
            )
        }
        Err(e) => {
            tracing::error!(error = %e, "Conversion failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

async fn read_form(multipart: &mut Multipart) -> Result<ConvertForm, MultipartError> {
    let mut form = ConvertForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("file") => {
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field.bytes().await?;
                form.file = Some((filename, data));
            }
            Some("voice") => form.voice = Some(field.text().await?),
            Some("preferred_gender") => form.preferred_gender = Some(field.text().await?),
            other => tracing::debug!(field = ?other, "Ignoring unknown multipart field"),
        }
    }

    Ok(form)
}

async fn stage_upload(
    upload_dir: PathBuf,
    format: DocumentFormat,
    data: Bytes,
) -> std::io::Result<NamedTempFile> {
    tokio::task::spawn_blocking(move || write_staged(&upload_dir, format, &data))
        .await
        .map_err(std::io::Error::other)?
}

fn write_staged(upload_dir: &Path, format: DocumentFormat, data: &[u8]) -> std::io::Result<NamedTempFile> {
    std::fs::create_dir_all(upload_dir)?;
    let mut staged = tempfile::Builder::new()
        .prefix("upload-")
        .suffix(&format!(".{}", format.as_extension()))
        .tempfile_in(upload_dir)?;
    staged.write_all(data)?;
    staged.flush()?;
    Ok(staged)
}

/// Resolves the declared format from the name as uploaded, then cleans it.
/// When cleaning leaves no usable stem (a name written entirely in a
/// non-Latin script, for one) the name becomes `document.<ext>`.
pub fn upload_filename(raw: &str) -> Option<(String, DocumentFormat)> {
    let last_component = raw.rsplit(['/', '\\']).next().unwrap_or_default();
    let format = DocumentFormat::from_filename(last_component.trim())?;

    let cleaned = secure_filename(last_component);
    let keeps_stem = matches!(
        cleaned.rsplit_once('.'),
        Some((stem, _)) if !stem.is_empty() && DocumentFormat::from_filename(&cleaned) == Some(format)
    );
    if keeps_stem {
        Some((cleaned, format))
    } else {
        Some((format!("{}.{}", FALLBACK_FILENAME, format.as_extension()), format))
    }
}

/// Reduces a client-supplied name to a safe ASCII file name: keeps the last path
/// component, folds accents, maps whitespace to `_` and drops anything outside
/// `[A-Za-z0-9._-]`. Leading dots and underscores are stripped.
pub fn secure_filename(raw: &str) -> String {
    let last_component = raw.rsplit(['/', '\\']).next().unwrap_or_default();

    let mut cleaned = String::with_capacity(last_component.len());
    for c in last_component.nfkd() {
        if c.is_whitespace() {
            cleaned.push('_');
        } else if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
            cleaned.push(c);
        }
    }

    let trimmed = cleaned.trim_start_matches(['.', '_']);
    if trimmed.is_empty() {
        FALLBACK_FILENAME.to_string()
    } else {
        trimmed.to_string()
    }
}
