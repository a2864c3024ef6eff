mod azure_speech_synthesizer;
mod mock_speech_synthesizer;
mod speech_synthesizer_factory;

pub use azure_speech_synthesizer::{
    AzureSpeechSynthesizer, DEFAULT_MAX_CHUNK_CHARS, DEFAULT_OUTPUT_FORMAT, build_ssml,
    split_into_chunks,
};
pub use mock_speech_synthesizer::{MockSpeechSynthesizer, silent_frame};
pub use speech_synthesizer_factory::{SpeechSynthesizerFactory, SynthesisProvider};
