use narrador::application::ports::{LanguageClassifier, LanguageClassifierError};
use narrador::infrastructure::language::{WhatlangClassifier, to_two_letter_code};

#[test]
fn given_portuguese_prose_when_classifying_then_pt() {
    let classifier = WhatlangClassifier::default();

    let code = classifier
        .classify("O rato roeu a roupa do rei de Roma e a rainha ficou muito zangada com isso.")
        .unwrap();

    assert_eq!(code, "pt");
}

#[test]
fn given_english_prose_when_classifying_then_en() {
    let classifier = WhatlangClassifier::default();

    let code = classifier
        .classify("The quick brown fox jumps over the lazy dog while the farmer watches from the porch.")
        .unwrap();

    assert_eq!(code, "en");
}

#[test]
fn given_text_without_letters_when_classifying_then_no_features() {
    let classifier = WhatlangClassifier::default();

    let result = classifier.classify("12345 !!! ...");

    assert!(matches!(result, Err(LanguageClassifierError::NoFeatures)));
}

#[test]
fn given_unreachable_confidence_when_classifying_then_unreliable() {
    let classifier = WhatlangClassifier::new(1.1);

    let result = classifier.classify("Bonjour tout le monde, comment allez-vous aujourd'hui?");

    assert!(matches!(result, Err(LanguageClassifierError::Unreliable(_))));
}

#[test]
fn given_three_letter_codes_when_mapping_then_two_letter_codes() {
    assert_eq!(to_two_letter_code("por").unwrap(), "pt");
    assert_eq!(to_two_letter_code("deu").unwrap(), "de");
    assert_eq!(to_two_letter_code("cmn").unwrap(), "zh");
    assert!(matches!(
        to_two_letter_code("yue"),
        Err(LanguageClassifierError::Unmapped(_))
    ));
    assert!(matches!(
        to_two_letter_code("qqq"),
        Err(LanguageClassifierError::Unmapped(_))
    ));
}
