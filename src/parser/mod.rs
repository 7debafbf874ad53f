//! PDF extraction module.

mod extractor;
mod options;

pub use extractor::PdfExtractor;
pub use options::{ErrorMode, ExtractOptions};
