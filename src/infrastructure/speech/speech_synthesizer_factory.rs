use std::sync::Arc;

use crate::application::ports::{SpeechSynthesizer, SynthesisError};

use super::azure_speech_synthesizer::AzureSpeechSynthesizer;
use super::mock_speech_synthesizer::MockSpeechSynthesizer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SynthesisProvider {
    Azure,
    Mock,
}

pub struct SpeechSynthesizerFactory;

impl SpeechSynthesizerFactory {
    pub fn create(
        provider: SynthesisProvider,
        region: Option<&str>,
        api_key: Option<&str>,
        output_format: &str,
        max_chunk_chars: usize,
    ) -> Result<Arc<dyn SpeechSynthesizer>, SynthesisError> {
        match provider {
            SynthesisProvider::Azure => {
                let region = region.filter(|r| !r.is_empty()).ok_or_else(|| {
                    SynthesisError::Configuration("region required for Azure Speech".to_string())
                })?;
                let key = api_key.filter(|k| !k.is_empty()).ok_or_else(|| {
                    SynthesisError::Configuration("API key required for Azure Speech".to_string())
                })?;
                tracing::info!(
                    region,
                    output_format,
                    max_chunk_chars,
                    "Using Azure speech synthesizer"
                );
                Ok(Arc::new(
                    AzureSpeechSynthesizer::new(region, key, output_format)
                        .with_max_chunk_chars(max_chunk_chars),
                ))
            }
            SynthesisProvider::Mock => {
                tracing::warn!("Using mock speech synthesizer, audio will be silent");
                Ok(Arc::new(MockSpeechSynthesizer))
            }
        }
    }
}
