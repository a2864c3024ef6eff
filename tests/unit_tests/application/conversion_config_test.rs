use narrador::application::services::{
    ConversionConfig, DEFAULT_OCR_DPI, DEFAULT_SCAN_THRESHOLD, FallbackVoiceTable,
};

#[test]
fn given_default_config_when_built_then_uses_documented_values() {
    let config = ConversionConfig::default();

    assert_eq!(config.scan_threshold, DEFAULT_SCAN_THRESHOLD);
    assert_eq!(config.ocr_dpi, DEFAULT_OCR_DPI);
    assert_eq!(config.default_language.as_str(), "pt");
    for (language, voice) in [
        ("pt", "pt-BR-AntonioNeural"),
        ("en", "en-US-GuyNeural"),
        ("de", "de-DE-ConradNeural"),
    ] {
        assert_eq!(config.fallback_voices.get(language).unwrap().as_str(), voice);
    }
}

#[test]
fn given_override_for_known_language_when_building_table_then_replaces_entry() {
    let table = FallbackVoiceTable::with_overrides([("EN", "en-GB-RyanNeural")]);

    assert_eq!(table.get("en").unwrap().as_str(), "en-GB-RyanNeural");
    assert_eq!(table.get("de").unwrap().as_str(), "de-DE-ConradNeural");
}

#[test]
fn given_portuguese_override_when_building_table_then_absolute_fallback_follows() {
    let table = FallbackVoiceTable::with_overrides([("pt", "pt-PT-DuarteNeural")]);

    assert_eq!(table.absolute_fallback().as_str(), "pt-PT-DuarteNeural");
}

#[test]
fn given_blank_override_when_building_table_then_ignored() {
    let table = FallbackVoiceTable::with_overrides([("pt", "  "), ("", "xx-XX-Voice")]);

    assert_eq!(table.absolute_fallback().as_str(), "pt-BR-AntonioNeural");
    assert!(table.get("").is_none());
}
