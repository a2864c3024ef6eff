use std::fmt;

use serde::Serialize;

/// Which tier produced a piece of extracted text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    Native,
    Ocr,
}

impl Provenance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provenance::Native => "native",
            Provenance::Ocr => "ocr",
        }
    }
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    content: String,
    provenance: Provenance,
}

impl ExtractedText {
    pub fn native(content: String) -> Self {
        Self {
            content,
            provenance: Provenance::Native,
        }
    }

    pub fn ocr(content: String) -> Self {
        Self {
            content,
            provenance: Provenance::Ocr,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn provenance(&self) -> Provenance {
        self.provenance
    }
}
