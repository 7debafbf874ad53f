//! # pdfpages
//!
//! Extract the text and embedded images of every PDF page, and render the
//! result as JSON or as Markdown with the images inlined as data URIs.
//!
//! ## Quick Start
//!
//! ```no_run
//! use pdfpages::render::{self, JsonFormat, MarkdownOptions};
//!
//! fn main() -> pdfpages::Result<()> {
//!     let data = std::fs::read("report.pdf")?;
//!     let doc = pdfpages::extract_bytes(&data)?;
//!
//!     let json = render::to_json(&doc, JsonFormat::Pretty)?;
//!     let markdown = render::to_markdown(&doc, &MarkdownOptions::default());
//!     println!("{}\n{}", json, markdown);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Output
//!
//! - **JSON**: `{"pages": [{"page_number": 1, "text": "...", "images": ["<base64>"]}]}`
//! - **Markdown**: a `## Page N` section per page with the page text and one
//!   `![Image i](data:image/png;base64,...)` line per image
//!
//! Images are the raw stream bytes stored in the PDF, base64-encoded without
//! decoding or re-encoding.

pub mod convert;
pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use convert::{
    convert_batch, BatchInput, BatchOptions, BatchReport, ConvertOptions, ConvertedFile,
    DocumentConverter, FileFailure, FileOutcome, PdfConverter, JSON_MIME, MARKDOWN_MIME,
};
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_pdf, PdfFormat};
pub use error::{Error, Result};
pub use model::{Document, ImageFilter, Page, PageImage};
pub use parser::{ErrorMode, ExtractOptions, PdfExtractor};
pub use render::{ImageMime, JsonFormat, MarkdownOptions};

use std::io::Read;
use std::path::Path;

/// Extract every page of a PDF held in memory.
///
/// # Example
///
/// ```no_run
/// let data = std::fs::read("report.pdf").unwrap();
/// let doc = pdfpages::extract_bytes(&data).unwrap();
/// println!("Pages: {}", doc.page_count());
/// ```
pub fn extract_bytes(data: &[u8]) -> Result<Document> {
    PdfExtractor::from_bytes(data)?.extract()
}

/// Extract every page of a PDF held in memory, with custom options.
///
/// # Example
///
/// ```no_run
/// use pdfpages::{extract_bytes_with_options, ExtractOptions};
///
/// let data = std::fs::read("report.pdf").unwrap();
/// let options = ExtractOptions::new().lenient().text_only();
/// let doc = extract_bytes_with_options(&data, options).unwrap();
/// ```
pub fn extract_bytes_with_options(data: &[u8], options: ExtractOptions) -> Result<Document> {
    PdfExtractor::from_bytes_with_options(data, options)?.extract()
}

/// Extract every page of a PDF file.
pub fn extract_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    PdfExtractor::open(path)?.extract()
}

/// Extract every page of a PDF file, with custom options.
pub fn extract_file_with_options<P: AsRef<Path>>(
    path: P,
    options: ExtractOptions,
) -> Result<Document> {
    PdfExtractor::open_with_options(path, options)?.extract()
}

/// Extract every page of a PDF read from `reader`.
pub fn extract_reader<R: Read>(reader: R) -> Result<Document> {
    PdfExtractor::from_reader(reader)?.extract()
}

/// Convert one named PDF buffer to its JSON and Markdown renderings.
///
/// # Example
///
/// ```no_run
/// let data = std::fs::read("report.pdf").unwrap();
/// let file = pdfpages::convert_bytes("report.pdf", &data).unwrap();
/// std::fs::write(file.json_filename(), &file.json).unwrap();
/// std::fs::write(file.markdown_filename(), &file.markdown).unwrap();
/// ```
pub fn convert_bytes(filename: &str, data: &[u8]) -> Result<ConvertedFile> {
    PdfConverter::new().convert_bytes(filename, data, &ConvertOptions::default())
}

/// Convert a PDF file to its JSON and Markdown renderings.
pub fn convert_file<P: AsRef<Path>>(path: P) -> Result<ConvertedFile> {
    PdfConverter::new().convert_path(path.as_ref(), &ConvertOptions::default())
}
