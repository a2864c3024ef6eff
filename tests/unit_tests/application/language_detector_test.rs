use std::sync::Arc;

use narrador::application::ports::{LanguageClassifier, LanguageClassifierError};
use narrador::application::services::LanguageDetector;
use narrador::domain::LanguageCode;

struct FixedClassifier(&'static str);

impl LanguageClassifier for FixedClassifier {
    fn classify(&self, _text: &str) -> Result<String, LanguageClassifierError> {
        Ok(self.0.to_string())
    }
}

struct FailingClassifier;

impl LanguageClassifier for FailingClassifier {
    fn classify(&self, _text: &str) -> Result<String, LanguageClassifierError> {
        Err(LanguageClassifierError::NoFeatures)
    }
}

fn default_code() -> LanguageCode {
    LanguageCode::parse("pt").unwrap()
}

#[test]
fn given_classifier_result_when_detecting_then_returns_parsed_code() {
    let detector = LanguageDetector::new(Arc::new(FixedClassifier("en")), default_code());

    assert_eq!(detector.detect("Hello there").as_str(), "en");
}

#[test]
fn given_region_qualified_result_when_detecting_then_keeps_region() {
    let detector = LanguageDetector::new(Arc::new(FixedClassifier("pt-BR")), default_code());

    let code = detector.detect("Olá");

    assert_eq!(code.as_str(), "pt-BR");
    assert_eq!(code.primary_subtag(), "pt");
}

#[test]
fn given_classifier_failure_when_detecting_then_returns_default() {
    let detector = LanguageDetector::new(Arc::new(FailingClassifier), default_code());

    assert_eq!(detector.detect("").as_str(), "pt");
}

#[test]
fn given_blank_classifier_result_when_detecting_then_returns_default() {
    let detector = LanguageDetector::new(
        Arc::new(FixedClassifier("  ")),
        LanguageCode::parse("es").unwrap(),
    );

    assert_eq!(detector.detect("???").as_str(), "es");
}
