mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    ExtractionSettings, LanguageSettings, LoggingSettings, ServerSettings, Settings,
    StorageSettings, SynthesisProviderSetting, SynthesisSettings, VoiceSettings,
};
