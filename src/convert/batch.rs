//! Batch conversion with per-file failure isolation.

use std::fmt;
use std::path::Path;

use rayon::prelude::*;

use crate::error::Result;

use super::{ConvertOptions, ConvertedFile, DocumentConverter, PdfConverter};

/// One named input buffer.
#[derive(Debug, Clone)]
pub struct BatchInput {
    /// Display name, used for output names and error reports
    pub filename: String,

    /// Raw file content
    pub bytes: Vec<u8>,
}

impl BatchInput {
    /// Create a batch input.
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            bytes,
        }
    }

    /// Read a file, using its file name as the display name.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self { filename, bytes })
    }
}

/// A file that could not be converted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFailure {
    /// Display name of the failed input
    pub filename: String,

    /// Error message
    pub message: String,
}

impl FileFailure {
    /// Create a failure record.
    pub fn new(filename: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FileFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error processing {}: {}", self.filename, self.message)
    }
}

impl std::error::Error for FileFailure {}

/// Outcome of converting one batch input.
pub type FileOutcome = std::result::Result<ConvertedFile, FileFailure>;

/// Options for a batch run.
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// Options applied to every file
    pub convert: ConvertOptions,

    /// Convert files on the rayon thread pool
    pub parallel: bool,
}

impl BatchOptions {
    /// Create new batch options (sequential).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set per-file conversion options.
    pub fn with_convert_options(mut self, options: ConvertOptions) -> Self {
        self.convert = options;
        self
    }

    /// Enable or disable parallel processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Convert every input as a PDF.
///
/// Outcomes are returned in input order. A failing file yields a
/// [`FileFailure`] and never stops the remaining files.
pub fn convert_batch(inputs: &[BatchInput], options: &BatchOptions) -> Vec<FileOutcome> {
    convert_batch_with(&PdfConverter::new(), inputs, options)
}

/// Convert every input with the given converter.
pub fn convert_batch_with(
    converter: &dyn DocumentConverter,
    inputs: &[BatchInput],
    options: &BatchOptions,
) -> Vec<FileOutcome> {
    convert_batch_with_progress(converter, inputs, options, |_| {})
}

/// Convert every input, calling `on_done` as each file finishes.
///
/// In parallel mode `on_done` runs on worker threads in completion order;
/// the returned outcomes are still in input order.
pub fn convert_batch_with_progress<F>(
    converter: &dyn DocumentConverter,
    inputs: &[BatchInput],
    options: &BatchOptions,
    on_done: F,
) -> Vec<FileOutcome>
where
    F: Fn(&FileOutcome) + Sync,
{
    let run = |input: &BatchInput| {
        let outcome = convert_one(converter, input, &options.convert);
        on_done(&outcome);
        outcome
    };

    let outcomes: Vec<FileOutcome> = if options.parallel {
        inputs.par_iter().map(run).collect()
    } else {
        inputs.iter().map(run).collect()
    };

    let converted = outcomes.iter().filter(|o| o.is_ok()).count();
    log::info!(
        "Converted {}/{} files with {} converter",
        converted,
        outcomes.len(),
        converter.name()
    );

    outcomes
}

fn convert_one(
    converter: &dyn DocumentConverter,
    input: &BatchInput,
    options: &ConvertOptions,
) -> FileOutcome {
    log::debug!("Converting {} ({} bytes)", input.filename, input.bytes.len());

    converter
        .convert_bytes(&input.filename, &input.bytes, options)
        .map_err(|e| {
            let failure = FileFailure::new(&input.filename, e.to_string());
            log::warn!("{}", failure);
            failure
        })
}

/// Batch outcomes split into successes and failures, each in input order.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Successfully converted files
    pub converted: Vec<ConvertedFile>,

    /// Files that failed
    pub failed: Vec<FileFailure>,
}

impl BatchReport {
    /// Total number of inputs.
    pub fn total(&self) -> usize {
        self.converted.len() + self.failed.len()
    }

    /// Check if every input converted.
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

impl From<Vec<FileOutcome>> for BatchReport {
    fn from(outcomes: Vec<FileOutcome>) -> Self {
        let mut report = BatchReport::default();
        for outcome in outcomes {
            match outcome {
                Ok(file) => report.converted.push(file),
                Err(failure) => report.failed.push(failure),
            }
        }
        report
    }
}
