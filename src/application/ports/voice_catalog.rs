use crate::domain::{VoiceCatalogEntry, VoiceGender};

pub trait VoiceCatalog: Send + Sync {
    /// Entries whose locale speaks the given primary language subtag, in catalog order.
    fn entries_for_language(&self, language: &str) -> Vec<VoiceCatalogEntry>;

    /// The language's default voice: the first entry matching `gender` when one
    /// exists, otherwise the first entry for the language.
    fn default_for(
        &self,
        language: &str,
        gender: Option<VoiceGender>,
    ) -> Option<VoiceCatalogEntry> {
        let mut entries = self.entries_for_language(language);
        if let Some(gender) = gender {
            if let Some(position) = entries.iter().position(|e| e.gender == gender) {
                return Some(entries.swap_remove(position));
            }
        }
        entries.into_iter().next()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum VoiceCatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog data: {0}")]
    InvalidData(String),
    #[error("voice list request failed: {0}")]
    ApiRequestFailed(String),
}
