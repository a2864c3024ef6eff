use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use narrador::application::ports::{
    AudioStore, AudioStoreError, ContainerParser, LanguageClassifier, LanguageClassifierError,
    ParserError, SpeechSynthesizer, SynthesisError,
};
use narrador::application::services::{
    ConversionConfig, ConversionError, ConversionRequest, ConversionService, ExtractionError,
    LanguageDetector, TextExtractor, audio_file_name, format_elapsed,
};
use narrador::domain::{
    AudioReference, Document, DocumentFormat, DocumentId, Provenance, VoiceCatalogEntry,
    VoiceGender, VoiceId,
};
use narrador::infrastructure::voice::StaticVoiceCatalog;

struct FixedParser(&'static str);

#[async_trait]
impl ContainerParser for FixedParser {
    async fn extract_units(&self, _path: &Path) -> Result<Vec<String>, ParserError> {
        Ok(vec![self.0.to_string()])
    }
}

struct SlowParser;

#[async_trait]
impl ContainerParser for SlowParser {
    async fn extract_units(&self, _path: &Path) -> Result<Vec<String>, ParserError> {
        tokio::time::sleep(Duration::from_secs(5)).await;
        Ok(vec!["late text".to_string()])
    }
}

struct FixedClassifier(&'static str);

impl LanguageClassifier for FixedClassifier {
    fn classify(&self, _text: &str) -> Result<String, LanguageClassifierError> {
        Ok(self.0.to_string())
    }
}

#[derive(Default)]
struct RecordingSynthesizer {
    calls: AtomicUsize,
    last: Mutex<Option<(String, String)>>,
}

#[async_trait]
impl SpeechSynthesizer for RecordingSynthesizer {
    async fn synthesize(&self, text: &str, voice: &VoiceId) -> Result<Vec<u8>, SynthesisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some((text.to_string(), voice.to_string()));
        Ok(vec![0xFF, 0xFB, 0x90, 0x64])
    }
}

struct SlowSynthesizer;

#[async_trait]
impl SpeechSynthesizer for SlowSynthesizer {
    async fn synthesize(&self, _text: &str, _voice: &VoiceId) -> Result<Vec<u8>, SynthesisError> {
        tokio::time::sleep(Duration::from_secs(5)).await;
        Ok(vec![1])
    }
}

struct RejectingSynthesizer;

#[async_trait]
impl SpeechSynthesizer for RejectingSynthesizer {
    async fn synthesize(&self, _text: &str, voice: &VoiceId) -> Result<Vec<u8>, SynthesisError> {
        Err(SynthesisError::VoiceRejected(voice.to_string()))
    }
}

#[derive(Default)]
struct MemoryAudioStore {
    saved: Mutex<Vec<(String, usize)>>,
}

#[async_trait]
impl AudioStore for MemoryAudioStore {
    async fn save(&self, file_name: &str, audio: Vec<u8>) -> Result<AudioReference, AudioStoreError> {
        self.saved
            .lock()
            .unwrap()
            .push((file_name.to_string(), audio.len()));
        Ok(AudioReference::new(file_name))
    }

    async fn fetch(&self, file_name: &str) -> Result<Vec<u8>, AudioStoreError> {
        Err(AudioStoreError::NotFound(file_name.to_string()))
    }
}

fn catalog() -> Arc<StaticVoiceCatalog> {
    Arc::new(StaticVoiceCatalog::new(vec![
        VoiceCatalogEntry::new("en-US-JennyNeural", "en-US", VoiceGender::Female),
        VoiceCatalogEntry::new("en-US-GuyNeural", "en-US", VoiceGender::Male),
        VoiceCatalogEntry::new("pt-BR-FranciscaNeural", "pt-BR", VoiceGender::Female),
    ]))
}

fn build_service(
    text: &'static str,
    language: &'static str,
    synthesizer: Arc<dyn SpeechSynthesizer>,
    store: Arc<dyn AudioStore>,
    config: &ConversionConfig,
) -> ConversionService {
    let extractor = TextExtractor::new(
        vec![(DocumentFormat::Txt, Arc::new(FixedParser(text)) as Arc<dyn ContainerParser>)],
        config,
    );
    let detector = LanguageDetector::new(
        Arc::new(FixedClassifier(language)),
        config.default_language.clone(),
    );
    ConversionService::new(extractor, detector, catalog(), synthesizer, store, config)
}

fn request(filename: &str) -> ConversionRequest {
    ConversionRequest {
        document: Document::new(
            PathBuf::from(filename),
            filename.to_string(),
            DocumentFormat::from_filename(filename).unwrap_or(DocumentFormat::Txt),
            42,
        ),
        requested_voice: None,
        preferred_gender: None,
    }
}

#[tokio::test]
async fn given_text_document_when_converting_then_synthesizes_normalized_text_with_selected_voice() {
    let synthesizer = Arc::new(RecordingSynthesizer::default());
    let store = Arc::new(MemoryAudioStore::default());
    let service = build_service(
        "Hello\n\nworld of exam-\nples",
        "en",
        synthesizer.clone(),
        store.clone(),
        &ConversionConfig::default(),
    );

    let result = service.convert(request("lecture.txt")).await.unwrap();

    assert_eq!(result.filename, "lecture.txt");
    assert_eq!(result.detected_language.as_str(), "en");
    assert_eq!(result.voice.as_str(), "en-US-JennyNeural");
    assert_eq!(result.provenance, Provenance::Native);
    assert_eq!(result.available_voices.len(), 2);
    assert_eq!(synthesizer.calls.load(Ordering::SeqCst), 1);
    assert_eq!(
        synthesizer.last.lock().unwrap().clone(),
        Some((
            "Hello. world of examples".to_string(),
            "en-US-JennyNeural".to_string()
        ))
    );

    let saved = store.saved.lock().unwrap();
    assert_eq!(saved.len(), 1);
    assert!(saved[0].0.starts_with("lecture_"));
    assert!(saved[0].0.ends_with(".mp3"));
    assert_eq!(result.audio.url, format!("/audio/{}", saved[0].0));
}

#[tokio::test]
async fn given_requested_voice_and_gender_when_converting_then_request_is_honoured() {
    let synthesizer = Arc::new(RecordingSynthesizer::default());
    let service = build_service(
        "Some English text",
        "en",
        synthesizer.clone(),
        Arc::new(MemoryAudioStore::default()),
        &ConversionConfig::default(),
    );
    let mut req = request("notes.txt");
    req.preferred_gender = Some(VoiceGender::Male);

    let result = service.convert(req).await.unwrap();

    assert_eq!(result.voice.as_str(), "en-US-GuyNeural");
}

#[tokio::test]
async fn given_language_missing_from_catalog_when_converting_then_uses_fallback_table() {
    let service = build_service(
        "Guten Tag",
        "de",
        Arc::new(RecordingSynthesizer::default()),
        Arc::new(MemoryAudioStore::default()),
        &ConversionConfig::default(),
    );

    let result = service.convert(request("brief.txt")).await.unwrap();

    assert_eq!(result.voice.as_str(), "de-DE-ConradNeural");
    assert!(result.available_voices.is_empty());
}

#[tokio::test]
async fn given_unsupported_format_when_converting_then_extraction_error_and_no_synthesis() {
    let synthesizer = Arc::new(RecordingSynthesizer::default());
    let service = build_service(
        "unused",
        "en",
        synthesizer.clone(),
        Arc::new(MemoryAudioStore::default()),
        &ConversionConfig::default(),
    );

    let result = service.convert(request("scan.pdf")).await;

    assert!(matches!(
        result,
        Err(ConversionError::Extraction(ExtractionError::UnsupportedFormat(_)))
    ));
    assert_eq!(synthesizer.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_synthesizer_rejects_voice_when_converting_then_synthesis_error_surfaces() {
    let store = Arc::new(MemoryAudioStore::default());
    let service = build_service(
        "Olá mundo",
        "pt",
        Arc::new(RejectingSynthesizer),
        store.clone(),
        &ConversionConfig::default(),
    );

    let result = service.convert(request("carta.txt")).await;

    assert!(matches!(
        result,
        Err(ConversionError::Synthesis(SynthesisError::VoiceRejected(_)))
    ));
    assert!(store.saved.lock().unwrap().is_empty());
}

#[tokio::test]
async fn given_slow_synthesizer_when_converting_then_times_out() {
    let config = ConversionConfig {
        synthesis_timeout: Duration::from_millis(50),
        ..ConversionConfig::default()
    };
    let service = build_service(
        "Olá mundo",
        "pt",
        Arc::new(SlowSynthesizer),
        Arc::new(MemoryAudioStore::default()),
        &config,
    );

    let result = service.convert(request("carta.txt")).await;

    assert!(matches!(result, Err(ConversionError::SynthesisTimedOut(_))));
}

#[tokio::test]
async fn given_slow_parser_when_converting_then_extraction_times_out_before_synthesis() {
    let config = ConversionConfig {
        extraction_timeout: Duration::from_millis(20),
        ..ConversionConfig::default()
    };
    let synthesizer = Arc::new(RecordingSynthesizer::default());
    let extractor = TextExtractor::new(
        vec![(DocumentFormat::Txt, Arc::new(SlowParser) as Arc<dyn ContainerParser>)],
        &config,
    );
    let detector = LanguageDetector::new(
        Arc::new(FixedClassifier("en")),
        config.default_language.clone(),
    );
    let service = ConversionService::new(
        extractor,
        detector,
        catalog(),
        synthesizer.clone(),
        Arc::new(MemoryAudioStore::default()),
        &config,
    );

    let result = service.convert(request("huge.txt")).await;

    assert!(matches!(
        result,
        Err(ConversionError::Extraction(ExtractionError::TimedOut(_)))
    ));
    assert_eq!(synthesizer.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn given_same_filename_twice_when_converting_then_audio_names_differ() {
    let store = Arc::new(MemoryAudioStore::default());
    let service = build_service(
        "Same content",
        "en",
        Arc::new(RecordingSynthesizer::default()),
        store.clone(),
        &ConversionConfig::default(),
    );

    let first = service.convert(request("minutes.txt")).await.unwrap();
    let second = service.convert(request("minutes.txt")).await.unwrap();

    assert_ne!(first.audio.file_name, second.audio.file_name);
    assert_eq!(store.saved.lock().unwrap().len(), 2);
}

#[test]
fn given_stem_timestamp_and_id_when_naming_audio_then_joined_with_underscores() {
    let id = DocumentId::new();

    let name = audio_file_name("report", 1_700_000_000, &id);

    assert_eq!(name, format!("report_1700000000_{}.mp3", id.short()));
    assert_eq!(id.short().len(), 8);
    assert!(id.as_uuid().simple().to_string().starts_with(&id.short()));
}

#[test]
fn given_durations_when_formatting_elapsed_then_seconds_or_minutes() {
    assert_eq!(format_elapsed(Duration::from_millis(1500)), "1.50 s");
    assert_eq!(format_elapsed(Duration::from_secs(59)), "59.00 s");
    assert_eq!(format_elapsed(Duration::from_secs(125)), "2 min 5 s");
}
