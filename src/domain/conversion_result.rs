use std::time::Duration;

use super::{AudioReference, LanguageCode, Provenance, VoiceCatalogEntry, VoiceId};

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    pub filename: String,
    pub detected_language: LanguageCode,
    pub voice: VoiceId,
    pub provenance: Provenance,
    pub available_voices: Vec<VoiceCatalogEntry>,
    pub audio: AudioReference,
    pub elapsed: Duration,
}
