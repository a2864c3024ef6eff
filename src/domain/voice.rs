use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VoiceGender {
    Male,
    Female,
    Unknown,
}

impl VoiceGender {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoiceGender::Male => "Male",
            VoiceGender::Female => "Female",
            VoiceGender::Unknown => "Unknown",
        }
    }
}

impl FromStr for VoiceGender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(VoiceGender::Male),
            "female" => Ok(VoiceGender::Female),
            "unknown" | "neutral" => Ok(VoiceGender::Unknown),
            other => Err(format!("Invalid voice gender: {}", other)),
        }
    }
}

impl fmt::Display for VoiceGender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoiceCatalogEntry {
    pub short_name: String,
    pub locale: String,
    #[serde(default = "unknown_gender")]
    pub gender: VoiceGender,
}

fn unknown_gender() -> VoiceGender {
    VoiceGender::Unknown
}

impl VoiceCatalogEntry {
    pub fn new(short_name: impl Into<String>, locale: impl Into<String>, gender: VoiceGender) -> Self {
        Self {
            short_name: short_name.into(),
            locale: locale.into(),
            gender,
        }
    }

    /// Case-insensitive match of the locale's primary subtag (`pt-BR` → `pt`).
    pub fn speaks(&self, primary_subtag: &str) -> bool {
        self.locale
            .split(['-', '_'])
            .next()
            .is_some_and(|lang| lang.eq_ignore_ascii_case(primary_subtag))
    }
}

/// Short name of the voice handed to the synthesizer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct VoiceId(String);

impl VoiceId {
    pub fn new(short_name: impl Into<String>) -> Self {
        Self(short_name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Locale prefix of an Azure-style short name (`pt-BR-AntonioNeural` → `pt-BR`).
    pub fn locale(&self) -> &str {
        match self.0.match_indices('-').nth(1) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }
}

impl fmt::Display for VoiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
