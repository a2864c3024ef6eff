mod audio_reference;
mod conversion_result;
mod document;
mod extracted_text;
mod language_code;
mod normalized_text;
mod raster_page;
mod voice;

pub use audio_reference::AudioReference;
pub use conversion_result::ConversionResult;
pub use document::{Document, DocumentFormat, DocumentId};
pub use extracted_text::{ExtractedText, Provenance};
pub use language_code::LanguageCode;
pub use normalized_text::NormalizedText;
pub use raster_page::RasterPage;
pub use voice::{VoiceCatalogEntry, VoiceGender, VoiceId};
