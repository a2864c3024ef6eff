use std::collections::BTreeMap;
use std::time::Duration;

use crate::domain::{LanguageCode, VoiceId};

pub const DEFAULT_SCAN_THRESHOLD: usize = 50;
pub const DEFAULT_OCR_DPI: u32 = 220;
pub const DEFAULT_LANGUAGE: &str = "pt";
pub const DEFAULT_EXTRACTION_TIMEOUT: Duration = Duration::from_secs(300);
pub const DEFAULT_SYNTHESIS_TIMEOUT: Duration = Duration::from_secs(600);

const BUILT_IN_VOICES: [(&str, &str); 7] = [
    ("pt", "pt-BR-AntonioNeural"),
    ("en", "en-US-GuyNeural"),
    ("es", "es-ES-AlvaroNeural"),
    ("fr", "fr-FR-HenriNeural"),
    ("de", "de-DE-ConradNeural"),
    ("it", "it-IT-DiegoNeural"),
    ("ru", "ru-RU-DmitryNeural"),
];
const ABSOLUTE_FALLBACK_LANGUAGE: &str = "pt";

/// Immutable settings shared by the conversion pipeline components.
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    pub scan_threshold: usize,
    pub ocr_dpi: u32,
    pub ocr_language_hint: Option<String>,
    pub default_language: LanguageCode,
    pub fallback_voices: FallbackVoiceTable,
    pub extraction_timeout: Duration,
    pub synthesis_timeout: Duration,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            scan_threshold: DEFAULT_SCAN_THRESHOLD,
            ocr_dpi: DEFAULT_OCR_DPI,
            ocr_language_hint: None,
            default_language: default_language(),
            fallback_voices: FallbackVoiceTable::default(),
            extraction_timeout: DEFAULT_EXTRACTION_TIMEOUT,
            synthesis_timeout: DEFAULT_SYNTHESIS_TIMEOUT,
        }
    }
}

fn default_language() -> LanguageCode {
    LanguageCode::from_static(DEFAULT_LANGUAGE)
}

/// Voice per primary language subtag used when the catalog has nothing to offer.
///
/// The Portuguese entry is always present and doubles as the absolute fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackVoiceTable {
    voices: BTreeMap<String, VoiceId>,
    absolute: VoiceId,
}

impl FallbackVoiceTable {
    /// Built-in table with `overrides` applied on top. Keys are primary subtags.
    pub fn with_overrides<I, K, V>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut voices: BTreeMap<String, VoiceId> = BUILT_IN_VOICES
            .iter()
            .map(|(lang, voice)| (lang.to_string(), VoiceId::new(*voice)))
            .collect();

        for (lang, voice) in overrides {
            let voice: String = voice.into();
            let lang = lang.as_ref().trim().to_lowercase();
            if lang.is_empty() || voice.trim().is_empty() {
                continue;
            }
            voices.insert(lang, VoiceId::new(voice.trim()));
        }

        let absolute = voices
            .get(ABSOLUTE_FALLBACK_LANGUAGE)
            .cloned()
            .unwrap_or_else(|| VoiceId::new(BUILT_IN_VOICES[0].1));

        Self { voices, absolute }
    }

    pub fn get(&self, primary_subtag: &str) -> Option<&VoiceId> {
        self.voices.get(primary_subtag)
    }

    pub fn absolute_fallback(&self) -> &VoiceId {
        &self.absolute
    }
}

impl Default for FallbackVoiceTable {
    fn default() -> Self {
        Self::with_overrides(std::iter::empty::<(&str, String)>())
    }
}
