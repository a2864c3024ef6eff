mod pdfium_rasterizer;
mod tesseract_engine;

pub use pdfium_rasterizer::{MAX_PAGES_DUE_TO_RAM_USAGE, PdfiumRasterizer};
pub use tesseract_engine::{DEFAULT_TESSERACT_LANGUAGE, TesseractEngine};
