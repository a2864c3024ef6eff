use async_trait::async_trait;

use crate::domain::VoiceId;

#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Returns the encoded audio (MP3) for `text` spoken by `voice`.
    async fn synthesize(&self, text: &str, voice: &VoiceId) -> Result<Vec<u8>, SynthesisError>;
}

#[derive(Debug, thiserror::Error)]
pub enum SynthesisError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("voice rejected: {0}")]
    VoiceRejected(String),
    #[error("empty audio returned")]
    EmptyAudio,
    #[error("synthesizer configuration invalid: {0}")]
    Configuration(String),
}
