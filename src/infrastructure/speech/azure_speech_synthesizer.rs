use async_trait::async_trait;
use quick_xml::escape::escape;
use reqwest::StatusCode;

use crate::application::ports::{SpeechSynthesizer, SynthesisError};
use crate::domain::VoiceId;

pub const DEFAULT_OUTPUT_FORMAT: &str = "audio-24khz-48kbitrate-mono-mp3";

/// Characters sent per request. Keeps every request well under the audio
/// length the real-time endpoint accepts.
pub const DEFAULT_MAX_CHUNK_CHARS: usize = 3000;

/// Azure Speech text-to-speech over the REST endpoint, MP3 output.
///
/// Long text is split at sentence boundaries and synthesized one chunk per
/// request; the MP3 frames are concatenated in order.
pub struct AzureSpeechSynthesizer {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    output_format: String,
    max_chunk_chars: usize,
}

impl AzureSpeechSynthesizer {
    pub fn new(region: &str, api_key: &str, output_format: &str) -> Self {
        let base_url = format!("https://{}.tts.speech.microsoft.com", region);
        Self::with_base_url(&base_url, api_key, output_format)
    }

    pub fn with_base_url(base_url: &str, api_key: &str, output_format: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/cognitiveservices/v1", base_url.trim_end_matches('/')),
            api_key: api_key.to_string(),
            output_format: output_format.to_string(),
            max_chunk_chars: DEFAULT_MAX_CHUNK_CHARS,
        }
    }

    pub fn with_max_chunk_chars(mut self, max_chunk_chars: usize) -> Self {
        self.max_chunk_chars = max_chunk_chars.max(1);
        self
    }

    async fn synthesize_chunk(
        &self,
        text: &str,
        voice: &VoiceId,
    ) -> Result<Vec<u8>, SynthesisError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Ocp-Apim-Subscription-Key", &self.api_key)
            .header("Content-Type", "application/ssml+xml")
            .header("X-Microsoft-OutputFormat", &self.output_format)
            .header("User-Agent", "narrador")
            .body(build_ssml(text, voice))
            .send()
            .await
            .map_err(|e| SynthesisError::ApiRequestFailed(format!("request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(match status {
                StatusCode::BAD_REQUEST => SynthesisError::VoiceRejected(format!("{}: {}", voice, body)),
                _ => SynthesisError::ApiRequestFailed(format!("status {}: {}", status, body)),
            });
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| SynthesisError::ApiRequestFailed(format!("body: {}", e)))?;

        if audio.is_empty() {
            return Err(SynthesisError::EmptyAudio);
        }

        Ok(audio.to_vec())
    }
}

/// Wraps `text` in a single-voice SSML document.
pub fn build_ssml(text: &str, voice: &VoiceId) -> String {
    format!(
        "<speak version=\"1.0\" xmlns=\"http://www.w3.org/2001/10/synthesis\" xml:lang=\"{}\"><voice name=\"{}\">{}</voice></speak>",
        escape(voice.locale()),
        escape(voice.as_str()),
        escape(text),
    )
}

/// Splits `text` into chunks of at most `max_chars` characters.
///
/// Sentences are kept whole and packed together while they fit. A sentence
/// longer than the limit is broken between words, and a single word longer
/// than the limit is cut by character. Blank text yields no chunks.
pub fn split_into_chunks(text: &str, max_chars: usize) -> Vec<String> {
    let mut packer = ChunkPacker::new(max_chars.max(1));

    for sentence in sentences(text) {
        if sentence.chars().count() <= packer.max_chars {
            packer.push(sentence);
            continue;
        }
        for word in sentence.split_whitespace() {
            if word.chars().count() <= packer.max_chars {
                packer.push(word);
            } else {
                let chars: Vec<char> = word.chars().collect();
                for piece in chars.chunks(packer.max_chars) {
                    packer.push(&piece.iter().collect::<String>());
                }
            }
        }
    }

    packer.finish()
}

/// Sentence slices, trimmed, split after `.`, `!`, `?` or `…` followed by whitespace.
fn sentences(text: &str) -> Vec<&str> {
    let mut found = Vec::new();
    let mut start = 0;
    let mut after_terminal = false;

    for (i, c) in text.char_indices() {
        if after_terminal && c.is_whitespace() {
            found.push(&text[start..i]);
            start = i;
        }
        after_terminal = matches!(c, '.' | '!' | '?' | '…');
    }
    found.push(&text[start..]);

    found
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

struct ChunkPacker {
    max_chars: usize,
    chunks: Vec<String>,
    current: String,
    current_chars: usize,
}

impl ChunkPacker {
    fn new(max_chars: usize) -> Self {
        Self {
            max_chars,
            chunks: Vec::new(),
            current: String::new(),
            current_chars: 0,
        }
    }

    fn push(&mut self, piece: &str) {
        let piece_chars = piece.chars().count();
        if self.current_chars > 0 && self.current_chars + 1 + piece_chars > self.max_chars {
            self.flush();
        }
        if self.current_chars > 0 {
            self.current.push(' ');
            self.current_chars += 1;
        }
        self.current.push_str(piece);
        self.current_chars += piece_chars;
    }

    fn flush(&mut self) {
        if self.current_chars > 0 {
            self.chunks.push(std::mem::take(&mut self.current));
            self.current_chars = 0;
        }
    }

    fn finish(mut self) -> Vec<String> {
        self.flush();
        self.chunks
    }
}

#[async_trait]
impl SpeechSynthesizer for AzureSpeechSynthesizer {
    #[tracing::instrument(skip(self, text), fields(voice = %voice, chars = text.len()))]
    async fn synthesize(&self, text: &str, voice: &VoiceId) -> Result<Vec<u8>, SynthesisError> {
        let chunks = split_into_chunks(text, self.max_chunk_chars);
        if chunks.is_empty() {
            tracing::warn!("Nothing to synthesize, text is blank");
            return Err(SynthesisError::EmptyAudio);
        }

        let mut audio = Vec::new();
        for (index, chunk) in chunks.iter().enumerate() {
            let part = self.synthesize_chunk(chunk, voice).await?;
            tracing::debug!(
                chunk = index + 1,
                of = chunks.len(),
                bytes = part.len(),
                "Chunk synthesized"
            );
            audio.extend_from_slice(&part);
        }

        tracing::info!(
            chunks = chunks.len(),
            bytes = audio.len(),
            "Azure speech synthesis completed"
        );

        Ok(audio)
    }
}
