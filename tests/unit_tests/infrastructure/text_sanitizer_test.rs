use narrador::infrastructure::text_processing::fold_compatibility_chars;

#[test]
fn given_ligatures_and_fullwidth_when_folding_then_plain_characters() {
    assert_eq!(fold_compatibility_chars("ﬁle ﬂow"), "file flow");
    assert_eq!(fold_compatibility_chars("ＡＢＣ"), "ABC");
}

#[test]
fn given_accented_text_when_folding_then_accents_kept() {
    assert_eq!(fold_compatibility_chars("ação"), "ação");
}
