/// Text with whitespace runs collapsed and line-wrap hyphenation removed.
///
/// Only the normalizer builds values of this type, so holding one means the
/// content contains no `\n`, no run of two space/tab characters and no
/// hyphen followed by whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText(String);

impl NormalizedText {
    pub(crate) fn new(content: String) -> Self {
        Self(content)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
