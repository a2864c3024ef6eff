use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;

use crate::application::ports::{
    AudioStore, AudioStoreError, SpeechSynthesizer, SynthesisError, VoiceCatalog,
};
use crate::domain::{ConversionResult, Document, DocumentId, VoiceGender};

use super::conversion_config::ConversionConfig;
use super::language_detector::LanguageDetector;
use super::text_extractor::{ExtractionError, TextExtractor};
use super::text_normalizer::normalize;
use super::voice_selector::VoiceSelector;

#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub document: Document,
    pub requested_voice: Option<String>,
    pub preferred_gender: Option<VoiceGender>,
}

/// Runs one document through extraction, normalization, language detection,
/// voice selection, synthesis and audio storage.
pub struct ConversionService {
    extractor: TextExtractor,
    language_detector: LanguageDetector,
    voice_selector: VoiceSelector,
    voice_catalog: Arc<dyn VoiceCatalog>,
    synthesizer: Arc<dyn SpeechSynthesizer>,
    audio_store: Arc<dyn AudioStore>,
    extraction_timeout: Duration,
    synthesis_timeout: Duration,
}

impl ConversionService {
    pub fn new(
        extractor: TextExtractor,
        language_detector: LanguageDetector,
        voice_catalog: Arc<dyn VoiceCatalog>,
        synthesizer: Arc<dyn SpeechSynthesizer>,
        audio_store: Arc<dyn AudioStore>,
        config: &ConversionConfig,
    ) -> Self {
        Self {
            extractor,
            language_detector,
            voice_selector: VoiceSelector::new(config.fallback_voices.clone()),
            voice_catalog,
            synthesizer,
            audio_store,
            extraction_timeout: config.extraction_timeout,
            synthesis_timeout: config.synthesis_timeout,
        }
    }

    #[tracing::instrument(
        skip(self, request),
        fields(
            document_id = %request.document.id.as_uuid(),
            filename = %request.document.filename,
        )
    )]
    pub async fn convert(
        &self,
        request: ConversionRequest,
    ) -> Result<ConversionResult, ConversionError> {
        let started = Instant::now();
        let ConversionRequest {
            document,
            requested_voice,
            preferred_gender,
        } = request;

        let extracted = tokio::time::timeout(
            self.extraction_timeout,
            self.extractor.extract(&document),
        )
        .await
        .map_err(|_| ExtractionError::TimedOut(self.extraction_timeout))??;

        let provenance = extracted.provenance();
        let text = normalize(extracted.content());
        tracing::debug!(
            provenance = %provenance,
            chars = text.as_str().chars().count(),
            "Text extracted and normalized"
        );
        if text.is_empty() {
            tracing::warn!("Normalized text is empty");
        }

        let language = self.language_detector.detect(text.as_str());
        let selected = self.voice_selector.select(
            &language,
            self.voice_catalog.as_ref(),
            requested_voice.as_deref(),
            preferred_gender,
        );
        let available_voices = self
            .voice_catalog
            .entries_for_language(language.primary_subtag());

        let audio = tokio::time::timeout(
            self.synthesis_timeout,
            self.synthesizer.synthesize(text.as_str(), &selected.voice),
        )
        .await
        .map_err(|_| ConversionError::SynthesisTimedOut(self.synthesis_timeout))??;

        let file_name = audio_file_name(document.stem(), Utc::now().timestamp(), &document.id);
        let audio = self.audio_store.save(&file_name, audio).await?;

        let elapsed = started.elapsed();
        tracing::info!(
            elapsed = %format_elapsed(elapsed),
            language = %language,
            voice = %selected.voice,
            provenance = %provenance,
            "Conversion completed"
        );

        Ok(ConversionResult {
            filename: document.filename,
            detected_language: language,
            voice: selected.voice,
            provenance,
            available_voices,
            audio,
            elapsed,
        })
    }
}

/// `<stem>_<unix seconds>_<short document id>.mp3`
pub fn audio_file_name(stem: &str, unix_seconds: i64, id: &DocumentId) -> String {
    format!("{}_{}_{}.mp3", stem, unix_seconds, id.short())
}

/// Seconds with two decimals under a minute, whole minutes and seconds above.
pub fn format_elapsed(elapsed: Duration) -> String {
    let secs = elapsed.as_secs_f64();
    if secs < 60.0 {
        format!("{:.2} s", secs)
    } else {
        let total = elapsed.as_secs();
        format!("{} min {} s", total / 60, total % 60)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConversionError {
    #[error("extraction: {0}")]
    Extraction(#[from] ExtractionError),
    #[error("synthesis: {0}")]
    Synthesis(#[from] SynthesisError),
    #[error("synthesis timed out after {0:?}")]
    SynthesisTimedOut(Duration),
    #[error("storage: {0}")]
    Storage(#[from] AudioStoreError),
}
