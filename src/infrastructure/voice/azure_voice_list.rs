use std::str::FromStr;

use serde::Deserialize;

use crate::application::ports::VoiceCatalogError;
use crate::domain::{VoiceCatalogEntry, VoiceGender};

/// Fetches the neural voice list of an Azure Speech region.
pub struct AzureVoiceListClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl AzureVoiceListClient {
    pub fn new(region: &str, api_key: &str) -> Self {
        let base_url = format!("https://{}.tts.speech.microsoft.com", region);
        Self::with_base_url(&base_url, api_key)
    }

    pub fn with_base_url(base_url: &str, api_key: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!(
                "{}/cognitiveservices/voices/list",
                base_url.trim_end_matches('/')
            ),
            api_key: api_key.to_string(),
        }
    }

    pub async fn fetch(&self) -> Result<Vec<VoiceCatalogEntry>, VoiceCatalogError> {
        tracing::debug!(endpoint = %self.endpoint, "Fetching Azure voice list");

        let response = self
            .client
            .get(&self.endpoint)
            .header("Ocp-Apim-Subscription-Key", &self.api_key)
            .send()
            .await
            .map_err(|e| VoiceCatalogError::ApiRequestFailed(format!("request: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(VoiceCatalogError::ApiRequestFailed(format!(
                "status {}: {}",
                status, body
            )));
        }

        let voices: Vec<AzureVoice> = response
            .json()
            .await
            .map_err(|e| VoiceCatalogError::InvalidData(format!("parse response: {}", e)))?;

        tracing::info!(voices = voices.len(), "Azure voice list fetched");

        Ok(voices.into_iter().map(VoiceCatalogEntry::from).collect())
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct AzureVoice {
    short_name: String,
    locale: String,
    #[serde(default)]
    gender: String,
}

impl From<AzureVoice> for VoiceCatalogEntry {
    fn from(voice: AzureVoice) -> Self {
        let gender = VoiceGender::from_str(&voice.gender).unwrap_or(VoiceGender::Unknown);
        VoiceCatalogEntry::new(voice.short_name, voice.locale, gender)
    }
}
