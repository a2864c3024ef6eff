use narrador::application::services::{FallbackVoiceTable, VoiceSelector, VoiceSource};
use narrador::domain::{LanguageCode, VoiceCatalogEntry, VoiceGender};
use narrador::infrastructure::voice::StaticVoiceCatalog;

fn portuguese_catalog() -> StaticVoiceCatalog {
    StaticVoiceCatalog::new(vec![
        VoiceCatalogEntry::new("pt-BR-FranciscaNeural", "pt-BR", VoiceGender::Female),
        VoiceCatalogEntry::new("pt-BR-AntonioNeural", "pt-BR", VoiceGender::Male),
        VoiceCatalogEntry::new("pt-PT-RaquelNeural", "pt-PT", VoiceGender::Female),
        VoiceCatalogEntry::new("en-US-JennyNeural", "en-US", VoiceGender::Female),
    ])
}

fn code(raw: &str) -> LanguageCode {
    LanguageCode::parse(raw).unwrap()
}

#[test]
fn given_requested_voice_in_catalog_when_selecting_then_returned_regardless_of_gender() {
    let selector = VoiceSelector::new(FallbackVoiceTable::default());

    let selected = selector.select(
        &code("pt"),
        &portuguese_catalog(),
        Some("pt-PT-RaquelNeural"),
        Some(VoiceGender::Male),
    );

    assert_eq!(selected.voice.as_str(), "pt-PT-RaquelNeural");
    assert_eq!(selected.source, VoiceSource::Requested);
}

#[test]
fn given_requested_voice_of_other_language_when_selecting_then_ignored() {
    let selector = VoiceSelector::new(FallbackVoiceTable::default());

    let selected = selector.select(
        &code("pt"),
        &portuguese_catalog(),
        Some("en-US-JennyNeural"),
        None,
    );

    assert_eq!(selected.voice.as_str(), "pt-BR-FranciscaNeural");
    assert_eq!(selected.source, VoiceSource::CatalogDefault);
}

#[test]
fn given_preferred_gender_when_selecting_then_first_matching_entry() {
    let selector = VoiceSelector::new(FallbackVoiceTable::default());

    let selected = selector.select(
        &code("pt"),
        &portuguese_catalog(),
        None,
        Some(VoiceGender::Male),
    );

    assert_eq!(selected.voice.as_str(), "pt-BR-AntonioNeural");
}

#[test]
fn given_gender_absent_from_catalog_when_selecting_then_first_entry_for_language() {
    let selector = VoiceSelector::new(FallbackVoiceTable::default());

    let selected = selector.select(
        &code("en"),
        &portuguese_catalog(),
        None,
        Some(VoiceGender::Male),
    );

    assert_eq!(selected.voice.as_str(), "en-US-JennyNeural");
}

#[test]
fn given_region_code_when_selecting_then_same_voice_as_bare_code() {
    let selector = VoiceSelector::new(FallbackVoiceTable::default());
    let catalog = portuguese_catalog();

    let regional = selector.select(&code("pt-BR"), &catalog, None, None);
    let bare = selector.select(&code("pt"), &catalog, None, None);

    assert_eq!(regional, bare);
}

#[test]
fn given_empty_catalog_and_german_when_selecting_then_table_voice() {
    let selector = VoiceSelector::new(FallbackVoiceTable::default());

    let selected = selector.select(&code("de"), &StaticVoiceCatalog::empty(), None, None);

    assert_eq!(selected.voice.as_str(), "de-DE-ConradNeural");
    assert_eq!(selected.source, VoiceSource::FallbackTable);
}

#[test]
fn given_empty_catalog_and_unknown_language_when_selecting_then_portuguese_fallback() {
    let selector = VoiceSelector::new(FallbackVoiceTable::default());

    let selected = selector.select(&code("xx"), &StaticVoiceCatalog::empty(), None, None);

    assert_eq!(selected.voice.as_str(), "pt-BR-AntonioNeural");
    assert_eq!(selected.source, VoiceSource::AbsoluteFallback);
}

#[test]
fn given_unknown_requested_voice_and_empty_catalog_when_selecting_then_silently_ignored() {
    let selector = VoiceSelector::new(FallbackVoiceTable::default());

    let selected = selector.select(
        &code("fr-CA"),
        &StaticVoiceCatalog::empty(),
        Some("fr-FR-Nope"),
        None,
    );

    assert_eq!(selected.voice.as_str(), "fr-FR-HenriNeural");
}
