use narrador::application::ports::{ContainerParser, ParserError};
use narrador::infrastructure::text_processing::{PlainTextParser, decode_ignoring_errors};

#[test]
fn given_invalid_utf8_bytes_when_decoding_then_dropped() {
    let bytes = b"caf\xC3\xA9 \xFF\xFEok";

    assert_eq!(decode_ignoring_errors(bytes), "café ok");
}

#[test]
fn given_byte_order_mark_when_decoding_then_stripped() {
    let bytes = "\u{feff}hello".as_bytes();

    assert_eq!(decode_ignoring_errors(bytes), "hello");
}

#[tokio::test]
async fn given_text_file_when_extracting_then_single_unit() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("notes.txt");
    std::fs::write(&path, "line one\nline two").unwrap();

    let units = PlainTextParser.extract_units(&path).await.unwrap();

    assert_eq!(units, vec!["line one\nline two".to_string()]);
}

#[tokio::test]
async fn given_missing_file_when_extracting_then_io_error() {
    let dir = tempfile::TempDir::new().unwrap();

    let result = PlainTextParser
        .extract_units(&dir.path().join("missing.txt"))
        .await;

    assert!(matches!(result, Err(ParserError::Io(_))));
}
