use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{AudioStore, AudioStoreError};
use crate::domain::AudioReference;

/// Generated audio kept as flat files under one directory.
pub struct LocalAudioStore {
    inner: Arc<LocalFileSystem>,
}

impl LocalAudioStore {
    pub fn new(base_path: PathBuf) -> Result<Self, AudioStoreError> {
        std::fs::create_dir_all(&base_path)?;
        let fs = LocalFileSystem::new_with_prefix(base_path)
            .map_err(|e| AudioStoreError::WriteFailed(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
        })
    }
}

/// Accepts a single path segment only, so names cannot escape the directory.
fn store_path(file_name: &str) -> Result<StorePath, AudioStoreError> {
    let valid = !file_name.is_empty()
        && !file_name.starts_with('.')
        && !file_name.contains(['/', '\\']);
    if !valid {
        return Err(AudioStoreError::InvalidName(file_name.to_string()));
    }
    StorePath::parse(file_name).map_err(|e| AudioStoreError::InvalidName(e.to_string()))
}

#[async_trait]
impl AudioStore for LocalAudioStore {
    async fn save(&self, file_name: &str, audio: Vec<u8>) -> Result<AudioReference, AudioStoreError> {
        let path = store_path(file_name)?;
        let size = audio.len();

        self.inner
            .put(&path, PutPayload::from(audio))
            .await
            .map_err(|e| AudioStoreError::WriteFailed(e.to_string()))?;

        tracing::debug!(file_name, bytes = size, "Audio stored");
        Ok(AudioReference::new(file_name))
    }

    async fn fetch(&self, file_name: &str) -> Result<Vec<u8>, AudioStoreError> {
        let path = store_path(file_name)?;

        let result = self.inner.get(&path).await.map_err(|e| match e {
            object_store::Error::NotFound { .. } => AudioStoreError::NotFound(file_name.to_string()),
            other => AudioStoreError::ReadFailed(other.to_string()),
        })?;

        let bytes = result
            .bytes()
            .await
            .map_err(|e| AudioStoreError::ReadFailed(e.to_string()))?;

        Ok(bytes.to_vec())
    }
}
