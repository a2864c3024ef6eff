mod whatlang_classifier;

pub use whatlang_classifier::{WhatlangClassifier, to_two_letter_code};
