use isolang::Language;

use crate::application::ports::{LanguageClassifier, LanguageClassifierError};

/// Trigram-based detection with `whatlang`, reported as ISO 639-1 codes.
pub struct WhatlangClassifier {
    min_confidence: f64,
}

impl WhatlangClassifier {
    pub fn new(min_confidence: f64) -> Self {
        Self { min_confidence }
    }
}

impl Default for WhatlangClassifier {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl LanguageClassifier for WhatlangClassifier {
    fn classify(&self, text: &str) -> Result<String, LanguageClassifierError> {
        let info = whatlang::detect(text).ok_or(LanguageClassifierError::NoFeatures)?;

        if info.confidence() < self.min_confidence {
            return Err(LanguageClassifierError::Unreliable(info.confidence()));
        }

        to_two_letter_code(info.lang().code())
    }
}

/// Maps an ISO 639-3 code to ISO 639-1.
pub fn to_two_letter_code(code: &str) -> Result<String, LanguageClassifierError> {
    // whatlang reports Mandarin as a macrolanguage member without a 639-1 code
    if code == "cmn" {
        return Ok("zh".to_string());
    }

    Language::from_639_3(code)
        .and_then(|language| language.to_639_1())
        .map(str::to_string)
        .ok_or_else(|| LanguageClassifierError::Unmapped(code.to_string()))
}
