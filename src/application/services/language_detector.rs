use std::sync::Arc;

use crate::application::ports::LanguageClassifier;
use crate::domain::LanguageCode;

/// Infers the document language, falling back to a configured default.
pub struct LanguageDetector {
    classifier: Arc<dyn LanguageClassifier>,
    default_code: LanguageCode,
}

impl LanguageDetector {
    pub fn new(classifier: Arc<dyn LanguageClassifier>, default_code: LanguageCode) -> Self {
        Self {
            classifier,
            default_code,
        }
    }

    /// Never fails: classifier errors and unusable codes yield the default.
    pub fn detect(&self, text: &str) -> LanguageCode {
        let raw = match self.classifier.classify(text) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::debug!(
                    error = %e,
                    default = %self.default_code,
                    "Language detection failed, using default"
                );
                return self.default_code.clone();
            }
        };

        match LanguageCode::parse(&raw) {
            Some(code) => {
                tracing::debug!(language = %code, "Language detected");
                code
            }
            None => {
                tracing::debug!(raw = %raw, "Classifier returned an empty code, using default");
                self.default_code.clone()
            }
        }
    }
}
