use async_trait::async_trait;

use crate::application::ports::{SpeechSynthesizer, SynthesisError};
use crate::domain::VoiceId;

// MPEG-1 Layer III, 128 kbit/s, 44.1 kHz, no padding: 417 bytes per frame
const FRAME_HEADER: [u8; 4] = [0xFF, 0xFB, 0x90, 0x64];
const FRAME_LEN: usize = 417;

/// Returns one silent MP3 frame for any input. Used for local runs without
/// speech credentials.
pub struct MockSpeechSynthesizer;

#[async_trait]
impl SpeechSynthesizer for MockSpeechSynthesizer {
    async fn synthesize(&self, text: &str, voice: &VoiceId) -> Result<Vec<u8>, SynthesisError> {
        tracing::debug!(voice = %voice, chars = text.len(), "Mock synthesis");
        Ok(silent_frame())
    }
}

pub fn silent_frame() -> Vec<u8> {
    let mut frame = vec![0u8; FRAME_LEN];
    frame[..FRAME_HEADER.len()].copy_from_slice(&FRAME_HEADER);
    frame
}
