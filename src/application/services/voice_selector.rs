use std::fmt;

use crate::application::ports::VoiceCatalog;
use crate::domain::{LanguageCode, VoiceGender, VoiceId};

use super::conversion_config::FallbackVoiceTable;

/// Which step of the selection chain produced the voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceSource {
    Requested,
    CatalogDefault,
    FallbackTable,
    AbsoluteFallback,
}

impl VoiceSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoiceSource::Requested => "requested",
            VoiceSource::CatalogDefault => "catalog_default",
            VoiceSource::FallbackTable => "fallback_table",
            VoiceSource::AbsoluteFallback => "absolute_fallback",
        }
    }
}

impl fmt::Display for VoiceSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedVoice {
    pub voice: VoiceId,
    pub source: VoiceSource,
}

/// Resolves the synthesis voice through catalog, built-in table and absolute
/// fallback, in that order. Every lookup uses the primary subtag of the
/// language, so `pt-BR` and `pt` select the same voice.
pub struct VoiceSelector {
    fallback: FallbackVoiceTable,
}

impl VoiceSelector {
    pub fn new(fallback: FallbackVoiceTable) -> Self {
        Self { fallback }
    }

    pub fn select(
        &self,
        language: &LanguageCode,
        catalog: &dyn VoiceCatalog,
        requested_voice: Option<&str>,
        preferred_gender: Option<VoiceGender>,
    ) -> SelectedVoice {
        let primary = language.primary_subtag();

        if let Some(requested) = requested_voice.map(str::trim).filter(|v| !v.is_empty()) {
            let known = catalog
                .entries_for_language(primary)
                .iter()
                .any(|entry| entry.short_name == requested);
            if known {
                return Self::chosen(VoiceId::new(requested), VoiceSource::Requested, language);
            }
            tracing::debug!(
                requested,
                language = %language,
                "Requested voice not in catalog for language, ignoring"
            );
        }

        if let Some(entry) = catalog.default_for(primary, preferred_gender) {
            return Self::chosen(
                VoiceId::new(entry.short_name),
                VoiceSource::CatalogDefault,
                language,
            );
        }

        if let Some(voice) = self.fallback.get(primary) {
            return Self::chosen(voice.clone(), VoiceSource::FallbackTable, language);
        }

        Self::chosen(
            self.fallback.absolute_fallback().clone(),
            VoiceSource::AbsoluteFallback,
            language,
        )
    }

    fn chosen(voice: VoiceId, source: VoiceSource, language: &LanguageCode) -> SelectedVoice {
        tracing::info!(voice = %voice, source = %source, language = %language, "Voice selected");
        SelectedVoice { voice, source }
    }
}
