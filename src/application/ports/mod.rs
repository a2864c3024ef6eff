mod audio_store;
mod container_parser;
mod language_classifier;
mod ocr_engine;
mod speech_synthesizer;
mod voice_catalog;

pub use audio_store::{AudioStore, AudioStoreError};
pub use container_parser::{ContainerParser, ParserError};
pub use language_classifier::{LanguageClassifier, LanguageClassifierError};
pub use ocr_engine::{OcrEngine, OcrError, PageRasterizer};
pub use speech_synthesizer::{SpeechSynthesizer, SynthesisError};
pub use voice_catalog::{VoiceCatalog, VoiceCatalogError};
