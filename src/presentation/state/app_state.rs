use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{AudioStore, VoiceCatalog};
use crate::application::services::ConversionService;

#[derive(Clone)]
pub struct AppState {
    pub conversion_service: Arc<ConversionService>,
    pub voice_catalog: Arc<dyn VoiceCatalog>,
    pub audio_store: Arc<dyn AudioStore>,
    pub upload_dir: PathBuf,
}
