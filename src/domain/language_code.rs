use std::fmt;

use serde::Serialize;

/// A detected language, either a bare primary subtag (`pt`) or a subtag with a
/// region (`pt-BR`). Never empty. The primary subtag is lowercased, the rest
/// keeps the case it was given in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Returns `None` for blank input so an empty code can never exist.
    pub fn parse(raw: &str) -> Option<Self> {
        let code = raw.trim().replace('_', "-");
        if code.is_empty() || code.starts_with('-') {
            return None;
        }
        let code = match code.split_once('-') {
            Some((primary, rest)) => format!("{}-{}", primary.to_lowercase(), rest),
            None => code.to_lowercase(),
        };
        Some(Self(code))
    }

    pub(crate) fn from_static(code: &'static str) -> Self {
        Self(code.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn primary_subtag(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
