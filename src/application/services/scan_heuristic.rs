use super::conversion_config::DEFAULT_SCAN_THRESHOLD;

/// Length-based test for a missing text layer.
///
/// Native extraction of a scanned page "succeeds" with next to no text, so
/// anything under `min_chars` non-whitespace characters counts as scanned.
/// Short born-digital pages are misclassified on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanHeuristic {
    min_chars: usize,
}

impl ScanHeuristic {
    pub fn new(min_chars: usize) -> Self {
        Self { min_chars }
    }

    pub fn min_chars(&self) -> usize {
        self.min_chars
    }

    pub fn is_likely_scanned(&self, text: &str) -> bool {
        let visible = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .take(self.min_chars)
            .count();
        visible < self.min_chars
    }
}

impl Default for ScanHeuristic {
    fn default() -> Self {
        Self::new(DEFAULT_SCAN_THRESHOLD)
    }
}
