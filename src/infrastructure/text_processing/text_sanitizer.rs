use unicode_normalization::UnicodeNormalization;

/// Folds compatibility characters (ligatures, full-width forms) into their
/// plain equivalents. Whitespace is left for the pipeline normalizer.
pub fn fold_compatibility_chars(raw: &str) -> String {
    raw.nfkc().collect()
}
