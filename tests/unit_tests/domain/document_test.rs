use std::path::PathBuf;

use narrador::domain::{Document, DocumentFormat};

#[test]
fn given_supported_extensions_in_any_case_when_resolving_format_then_matches() {
    assert_eq!(DocumentFormat::from_filename("report.PDF"), Some(DocumentFormat::Pdf));
    assert_eq!(DocumentFormat::from_filename("notes.docx"), Some(DocumentFormat::Docx));
    assert_eq!(DocumentFormat::from_filename("a.b.Txt"), Some(DocumentFormat::Txt));
}

#[test]
fn given_unsupported_or_missing_extension_when_resolving_format_then_none() {
    assert_eq!(DocumentFormat::from_filename("slides.pptx"), None);
    assert_eq!(DocumentFormat::from_filename("README"), None);
    assert_eq!(DocumentFormat::from_filename("archive.pdf.zip"), None);
}

#[test]
fn given_filename_with_extension_when_taking_stem_then_strips_last_extension_only() {
    let document = Document::new(
        PathBuf::from("/tmp/upload-1.pdf"),
        "chapter.one.pdf".to_string(),
        DocumentFormat::Pdf,
        10,
    );

    assert_eq!(document.stem(), "chapter.one");
}

#[test]
fn given_dotfile_name_when_taking_stem_then_keeps_whole_name() {
    let document = Document::new(
        PathBuf::from("/tmp/x.txt"),
        ".txt".to_string(),
        DocumentFormat::Txt,
        0,
    );

    assert_eq!(document.stem(), ".txt");
}

#[test]
fn given_two_documents_when_created_then_ids_differ() {
    let a = Document::new(PathBuf::from("a.txt"), "a.txt".into(), DocumentFormat::Txt, 1);
    let b = Document::new(PathBuf::from("a.txt"), "a.txt".into(), DocumentFormat::Txt, 1);

    assert_ne!(a.id, b.id);
}
