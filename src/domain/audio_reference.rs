use serde::Serialize;

const AUDIO_ROUTE_PREFIX: &str = "/audio";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AudioReference {
    pub file_name: String,
    pub url: String,
}

impl AudioReference {
    pub fn new(file_name: impl Into<String>) -> Self {
        let file_name = file_name.into();
        let url = format!("{}/{}", AUDIO_ROUTE_PREFIX, file_name);
        Self { file_name, url }
    }
}
