pub mod pdf;

pub use pdf::{PdfExtractor, TextExtractor};
