/// Statistical language identification.
pub trait LanguageClassifier: Send + Sync {
    /// Returns a language code such as `pt` or `pt-BR`.
    fn classify(&self, text: &str) -> Result<String, LanguageClassifierError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LanguageClassifierError {
    #[error("no features in text")]
    NoFeatures,
    #[error("detection not reliable: confidence {0:.2}")]
    Unreliable(f64),
    #[error("language has no two-letter code: {0}")]
    Unmapped(String),
}
