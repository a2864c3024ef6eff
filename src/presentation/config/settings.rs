use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use config::{Config, ConfigError, File};
use serde::Deserialize;

use crate::application::services::{ConversionConfig, FallbackVoiceTable};
use crate::domain::LanguageCode;
use crate::infrastructure::speech::{
    DEFAULT_MAX_CHUNK_CHARS, DEFAULT_OUTPUT_FORMAT, SynthesisProvider,
};

use super::Environment;

const ENV_PREFIX: &str = "APP";
const ENV_SEPARATOR: &str = "__";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub logging: LoggingSettings,
    pub storage: StorageSettings,
    pub extraction: ExtractionSettings,
    pub language: LanguageSettings,
    pub voices: VoiceSettings,
    pub synthesis: SynthesisSettings,
}

impl Settings {
    /// Reads `appsettings.<env>.*` (optional) then `APP_`-prefixed variables,
    /// nested with `__` (`APP_SYNTHESIS__API_KEY`).
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator(ENV_SEPARATOR),
            )
            .build()?
            .try_deserialize()
    }

    pub fn conversion_config(&self) -> ConversionConfig {
        let defaults = ConversionConfig::default();
        let ocr_language_hint = Some(self.extraction.ocr_language.trim())
            .filter(|lang| !lang.is_empty())
            .map(str::to_string);

        ConversionConfig {
            scan_threshold: self.extraction.scan_threshold,
            ocr_dpi: self.extraction.ocr_dpi,
            ocr_language_hint,
            default_language: LanguageCode::parse(&self.language.default_code)
                .unwrap_or(defaults.default_language),
            fallback_voices: FallbackVoiceTable::with_overrides(&self.voices.fallback),
            extraction_timeout: Duration::from_secs(self.extraction.timeout_secs),
            synthesis_timeout: Duration::from_secs(self.synthesis.timeout_secs),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub json: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    pub upload_dir: PathBuf,
    pub audio_dir: PathBuf,
    pub static_dir: PathBuf,
    pub max_upload_mb: usize,
}

impl StorageSettings {
    pub fn max_upload_bytes(&self) -> usize {
        self.max_upload_mb * 1024 * 1024
    }
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            upload_dir: PathBuf::from("uploads"),
            audio_dir: PathBuf::from("static/audio"),
            static_dir: PathBuf::from("static"),
            max_upload_mb: 50,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractionSettings {
    pub scan_threshold: usize,
    pub ocr_enabled: bool,
    pub ocr_dpi: u32,
    pub ocr_language: String,
    pub max_ocr_pages: usize,
    pub tesseract_path: PathBuf,
    pub timeout_secs: u64,
}

impl Default for ExtractionSettings {
    fn default() -> Self {
        let defaults = ConversionConfig::default();
        Self {
            scan_threshold: defaults.scan_threshold,
            ocr_enabled: true,
            ocr_dpi: defaults.ocr_dpi,
            ocr_language: "por+eng".to_string(),
            max_ocr_pages: 200,
            tesseract_path: PathBuf::from("tesseract"),
            timeout_secs: defaults.extraction_timeout.as_secs(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LanguageSettings {
    pub default_code: String,
    pub min_confidence: f64,
}

impl Default for LanguageSettings {
    fn default() -> Self {
        Self {
            default_code: "pt".to_string(),
            min_confidence: 0.0,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VoiceSettings {
    pub catalog_path: Option<PathBuf>,
    pub fetch_from_azure: bool,
    pub fallback: HashMap<String, String>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SynthesisProviderSetting {
    #[default]
    Azure,
    Mock,
}

impl From<SynthesisProviderSetting> for SynthesisProvider {
    fn from(setting: SynthesisProviderSetting) -> Self {
        match setting {
            SynthesisProviderSetting::Azure => SynthesisProvider::Azure,
            SynthesisProviderSetting::Mock => SynthesisProvider::Mock,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SynthesisSettings {
    pub provider: SynthesisProviderSetting,
    pub region: Option<String>,
    pub api_key: Option<String>,
    pub output_format: String,
    pub max_chunk_chars: usize,
    pub timeout_secs: u64,
}

impl Default for SynthesisSettings {
    fn default() -> Self {
        Self {
            provider: SynthesisProviderSetting::default(),
            region: None,
            api_key: None,
            output_format: DEFAULT_OUTPUT_FORMAT.to_string(),
            max_chunk_chars: DEFAULT_MAX_CHUNK_CHARS,
            timeout_secs: ConversionConfig::default().synthesis_timeout.as_secs(),
        }
    }
}
