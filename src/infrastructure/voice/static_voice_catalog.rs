use std::collections::HashSet;
use std::path::Path;

use crate::application::ports::{VoiceCatalog, VoiceCatalogError};
use crate::domain::VoiceCatalogEntry;

/// Voice catalog held in memory, in the order it was loaded.
#[derive(Debug, Clone, Default)]
pub struct StaticVoiceCatalog {
    entries: Vec<VoiceCatalogEntry>,
}

impl StaticVoiceCatalog {
    /// Keeps the first entry for each short name.
    pub fn new(entries: Vec<VoiceCatalogEntry>) -> Self {
        let mut seen = HashSet::new();
        let entries = entries
            .into_iter()
            .filter(|entry| seen.insert(entry.short_name.clone()))
            .collect();
        Self { entries }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses a JSON array of `{"shortName", "locale", "gender"}` objects.
    pub fn from_json_str(json: &str) -> Result<Self, VoiceCatalogError> {
        let entries: Vec<VoiceCatalogEntry> = serde_json::from_str(json)
            .map_err(|e| VoiceCatalogError::InvalidData(e.to_string()))?;
        Ok(Self::new(entries))
    }

    pub fn from_json_file(path: &Path) -> Result<Self, VoiceCatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl VoiceCatalog for StaticVoiceCatalog {
    fn entries_for_language(&self, language: &str) -> Vec<VoiceCatalogEntry> {
        self.entries
            .iter()
            .filter(|entry| entry.speaks(language))
            .cloned()
            .collect()
    }
}
