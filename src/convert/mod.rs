//! Per-file conversion and batch processing.
//!
//! A conversion turns one named PDF buffer into a [`ConvertedFile`]: the
//! JSON and Markdown renderings plus the file names they should be saved
//! under. [`convert_batch`] runs many conversions and keeps going past
//! individual failures.
//!
//! # Example
//!
//! ```no_run
//! use pdfpages::convert::{convert_batch, BatchInput, BatchOptions, BatchReport};
//!
//! let inputs = vec![BatchInput::from_path("report.pdf")?];
//! let report = BatchReport::from(convert_batch(&inputs, &BatchOptions::default()));
//! for file in &report.converted {
//!     std::fs::write(file.json_filename(), &file.json)?;
//!     std::fs::write(file.markdown_filename(), &file.markdown)?;
//! }
//! for failure in &report.failed {
//!     eprintln!("{}", failure);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod batch;
mod pdf;

pub use batch::{
    convert_batch, convert_batch_with, convert_batch_with_progress, BatchInput, BatchOptions,
    BatchReport, FileFailure, FileOutcome,
};
pub use pdf::PdfConverter;

use crate::error::Result;
use crate::parser::ExtractOptions;
use crate::render::{JsonFormat, MarkdownOptions};

/// MIME type of the JSON rendering.
pub const JSON_MIME: &str = "application/json";

/// MIME type of the Markdown rendering.
pub const MARKDOWN_MIME: &str = "text/markdown";

/// Options for converting one document.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Extraction options
    pub extract: ExtractOptions,

    /// Markdown rendering options
    pub markdown: MarkdownOptions,

    /// JSON layout
    pub json_format: JsonFormat,
}

impl ConvertOptions {
    /// Create new conversion options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set extraction options.
    pub fn with_extract_options(mut self, options: ExtractOptions) -> Self {
        self.extract = options;
        self
    }

    /// Set Markdown options.
    pub fn with_markdown_options(mut self, options: MarkdownOptions) -> Self {
        self.markdown = options;
        self
    }

    /// Set JSON layout.
    pub fn with_json_format(mut self, format: JsonFormat) -> Self {
        self.json_format = format;
        self
    }
}

/// The two renderings of one input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedFile {
    /// Display name of the input file
    pub filename: String,

    /// JSON rendering
    pub json: String,

    /// Markdown rendering
    pub markdown: String,
}

impl ConvertedFile {
    /// Create a converted file.
    pub fn new(filename: impl Into<String>, json: String, markdown: String) -> Self {
        Self {
            filename: filename.into(),
            json,
            markdown,
        }
    }

    /// Input file name with its extension stripped.
    pub fn basename(&self) -> &str {
        basename(&self.filename)
    }

    /// `{basename}.json`
    pub fn json_filename(&self) -> String {
        format!("{}.json", self.basename())
    }

    /// `{basename}.md`
    pub fn markdown_filename(&self) -> String {
        format!("{}.md", self.basename())
    }
}

/// Strip the last extension from a file name.
///
/// Leading dots do not start an extension, so `.profile` is kept whole.
/// Dots in directory components are ignored.
pub fn basename(filename: &str) -> &str {
    let name_start = filename.rfind(['/', '\\']).map_or(0, |i| i + 1);
    let name = &filename[name_start..];

    match name.rfind('.') {
        Some(dot) if name[..dot].chars().any(|c| c != '.') => &filename[..name_start + dot],
        _ => filename,
    }
}

/// Trait for turning one named input buffer into its renderings.
///
/// [`PdfConverter`] is the real implementation; the batch runner accepts any
/// converter so callers can substitute their own.
pub trait DocumentConverter: Send + Sync {
    /// Get the name of this converter.
    fn name(&self) -> &str;

    /// Convert one input buffer.
    fn convert_bytes(
        &self,
        filename: &str,
        bytes: &[u8],
        options: &ConvertOptions,
    ) -> Result<ConvertedFile>;
}
