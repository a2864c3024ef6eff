mod conversion_config;
mod conversion_service;
mod language_detector;
mod scan_heuristic;
mod text_extractor;
mod text_normalizer;
mod voice_selector;

pub use conversion_config::{
    ConversionConfig, DEFAULT_EXTRACTION_TIMEOUT, DEFAULT_LANGUAGE, DEFAULT_OCR_DPI,
    DEFAULT_SCAN_THRESHOLD, DEFAULT_SYNTHESIS_TIMEOUT, FallbackVoiceTable,
};
pub use conversion_service::{
    ConversionError, ConversionRequest, ConversionService, audio_file_name, format_elapsed,
};
pub use language_detector::LanguageDetector;
pub use scan_heuristic::ScanHeuristic;
pub use text_extractor::{ExtractionError, TextExtractor};
pub use text_normalizer::normalize;
pub use voice_selector::{SelectedVoice, VoiceSelector, VoiceSource};
