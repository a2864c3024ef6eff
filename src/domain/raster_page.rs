/// One PDF page rendered to a PNG image for OCR.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterPage {
    pub index: usize,
    pub png: Vec<u8>,
}

impl RasterPage {
    pub fn new(index: usize, png: Vec<u8>) -> Self {
        Self { index, png }
    }
}
