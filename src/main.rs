use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use narrador::application::ports::{ContainerParser, VoiceCatalog};
use narrador::application::services::{ConversionService, LanguageDetector, TextExtractor};
use narrador::domain::DocumentFormat;
use narrador::infrastructure::language::WhatlangClassifier;
use narrador::infrastructure::observability::{TracingConfig, init_tracing};
use narrador::infrastructure::ocr::{PdfiumRasterizer, TesseractEngine};
use narrador::infrastructure::speech::SpeechSynthesizerFactory;
use narrador::infrastructure::storage::LocalAudioStore;
use narrador::infrastructure::text_processing::{DocxParser, PdfOxideParser, PlainTextParser};
use narrador::infrastructure::voice::{AzureVoiceListClient, StaticVoiceCatalog};
use narrador::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment)?;

    init_tracing(
        &TracingConfig::new(environment.as_str(), settings.logging.json),
        settings.server.port,
    );

    let conversion_config = settings.conversion_config();

    let parsers: Vec<(DocumentFormat, Arc<dyn ContainerParser>)> = vec![
        (DocumentFormat::Pdf, Arc::new(PdfOxideParser::new())),
        (DocumentFormat::Docx, Arc::new(DocxParser)),
        (DocumentFormat::Txt, Arc::new(PlainTextParser)),
    ];
    let mut extractor = TextExtractor::new(parsers, &conversion_config);

    if settings.extraction.ocr_enabled {
        let engine = TesseractEngine::new(
            settings.extraction.tesseract_path.clone(),
            &settings.extraction.ocr_language,
        );
        if !engine.is_available().await {
            tracing::warn!(
                binary = %settings.extraction.tesseract_path.display(),
                "Tesseract not found, scanned PDFs will fail OCR"
            );
        }
        extractor = extractor.with_ocr(
            Arc::new(PdfiumRasterizer::new(settings.extraction.max_ocr_pages)),
            Arc::new(engine),
        );
    } else {
        tracing::info!("OCR fallback disabled");
    }

    let language_detector = LanguageDetector::new(
        Arc::new(WhatlangClassifier::new(settings.language.min_confidence)),
        conversion_config.default_language.clone(),
    );

    let voice_catalog = load_voice_catalog(&settings).await;

    let synthesizer = SpeechSynthesizerFactory::create(
        settings.synthesis.provider.into(),
        settings.synthesis.region.as_deref(),
        settings.synthesis.api_key.as_deref(),
        &settings.synthesis.output_format,
        settings.synthesis.max_chunk_chars,
    )?;

    let audio_store = Arc::new(LocalAudioStore::new(settings.storage.audio_dir.clone())?);
    std::fs::create_dir_all(&settings.storage.upload_dir)?;

    let conversion_service = Arc::new(ConversionService::new(
        extractor,
        language_detector,
        Arc::clone(&voice_catalog),
        synthesizer,
        audio_store.clone(),
        &conversion_config,
    ));

    let state = AppState {
        conversion_service,
        voice_catalog,
        audio_store,
        upload_dir: settings.storage.upload_dir.clone(),
    };

    let router = create_router(
        state,
        settings.storage.max_upload_bytes(),
        &settings.storage.static_dir,
    );

    let host: std::net::IpAddr = settings.server.host.parse()?;
    let addr = SocketAddr::new(host, settings.server.port);
    tracing::info!(environment = %environment, "Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}

/// Local JSON catalog first, then the Azure voice list, else an empty catalog
/// so voice selection falls through to the built-in table.
async fn load_voice_catalog(settings: &Settings) -> Arc<dyn VoiceCatalog> {
    if let Some(path) = &settings.voices.catalog_path {
        match StaticVoiceCatalog::from_json_file(path) {
            Ok(catalog) => {
                tracing::info!(path = %path.display(), voices = catalog.len(), "Voice catalog loaded");
                return Arc::new(catalog);
            }
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "Failed to load voice catalog"),
        }
    }

    if settings.voices.fetch_from_azure {
        if let (Some(region), Some(key)) = (&settings.synthesis.region, &settings.synthesis.api_key) {
            match AzureVoiceListClient::new(region, key).fetch().await {
                Ok(entries) => {
                    let catalog = StaticVoiceCatalog::new(entries);
                    tracing::info!(voices = catalog.len(), "Voice catalog fetched from Azure");
                    return Arc::new(catalog);
                }
                Err(e) => tracing::warn!(error = %e, "Failed to fetch Azure voice list"),
            }
        }
    }

    tracing::warn!("No voice catalog available, using built-in fallback voices");
    Arc::new(StaticVoiceCatalog::empty())
}
