use std::sync::LazyLock;

use regex::Regex;

use crate::domain::NormalizedText;

static HORIZONTAL_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[ \t]+").unwrap());
static PARAGRAPH_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{2,}").unwrap());
static WRAPPED_NEWLINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*\n\s*").unwrap());
static WRAP_HYPHEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-\s+").unwrap());

/// Reflows extracted text into continuous prose for detection and synthesis.
///
/// The rules run in a fixed order: space/tab runs collapse, paragraph breaks
/// become sentence breaks, single line wraps become spaces, then wrap
/// hyphenation is removed. The paragraph rule can leave a double space next to
/// the inserted `". "`, so horizontal runs are collapsed once more before the
/// final trim.
pub fn normalize(text: &str) -> NormalizedText {
    let text = text.replace("\r\n", "\n");
    let text = HORIZONTAL_RUN.replace_all(&text, " ");
    let text = PARAGRAPH_BREAK.replace_all(&text, ". ");
    let text = WRAPPED_NEWLINE.replace_all(&text, " ");
    let text = WRAP_HYPHEN.replace_all(&text, "");
    let text = HORIZONTAL_RUN.replace_all(&text, " ");

    NormalizedText::new(text.trim().to_string())
}
