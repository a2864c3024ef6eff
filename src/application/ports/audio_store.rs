use async_trait::async_trait;

use crate::domain::AudioReference;

#[async_trait]
pub trait AudioStore: Send + Sync {
    async fn save(&self, file_name: &str, audio: Vec<u8>) -> Result<AudioReference, AudioStoreError>;

    async fn fetch(&self, file_name: &str) -> Result<Vec<u8>, AudioStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum AudioStoreError {
    #[error("write failed: {0}")]
    WriteFailed(String),
    #[error("audio not found: {0}")]
    NotFound(String),
    #[error("read failed: {0}")]
    ReadFailed(String),
    #[error("invalid audio name: {0}")]
    InvalidName(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
