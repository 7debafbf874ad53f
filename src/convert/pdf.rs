//! PDF document converter implementation.

use std::path::Path;

use crate::error::{Error, Result};
use crate::model::Document;
use crate::parser::PdfExtractor;
use crate::render::{to_json, to_markdown};

use super::{ConvertOptions, ConvertedFile, DocumentConverter};

/// PDF document converter.
///
/// Extracts the document once, then renders JSON and Markdown from the same
/// [`Document`].
#[derive(Debug, Clone, Default)]
pub struct PdfConverter {
    _private: (),
}

impl PdfConverter {
    /// Create a new PDF converter.
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Render an already extracted document.
    pub fn render(
        &self,
        filename: &str,
        doc: &Document,
        options: &ConvertOptions,
    ) -> Result<ConvertedFile> {
        let json = to_json(doc, options.json_format)?;
        let markdown = to_markdown(doc, &options.markdown);
        Ok(ConvertedFile::new(filename, json, markdown))
    }

    /// Convert a file on disk, using its file name as the display name.
    pub fn convert_path(&self, path: &Path, options: &ConvertOptions) -> Result<ConvertedFile> {
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .ok_or_else(|| {
                Error::Io(std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("{} has no file name", path.display()),
                ))
            })?;

        let extractor = PdfExtractor::open_with_options(path, options.extract.clone())?;
        let doc = extractor.extract()?;
        self.render(&filename, &doc, options)
    }
}

impl DocumentConverter for PdfConverter {
    fn name(&self) -> &str {
        "pdf"
    }

    fn convert_bytes(
        &self,
        filename: &str,
        bytes: &[u8],
        options: &ConvertOptions,
    ) -> Result<ConvertedFile> {
        let extractor = PdfExtractor::from_bytes_with_options(bytes, options.extract.clone())?;
        let doc = extractor.extract()?;
        log::debug!(
            "{}: extracted {} pages, {} images",
            filename,
            doc.page_count(),
            doc.image_count()
        );
        self.render(filename, &doc, options)
    }
}
