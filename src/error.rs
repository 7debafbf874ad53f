//! Error types for the pdfpages library.

use std::io;
use thiserror::Error;

/// Result type alias for pdfpages operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while extracting or rendering a PDF.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading input files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input does not start with a PDF header.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// The PDF header names a version we do not recognize.
    #[error("Unsupported PDF version: {0}")]
    UnsupportedVersion(String),

    /// The bytes could not be opened as a PDF, or page enumeration failed.
    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    /// The PDF document is encrypted and could not be opened.
    #[error("Document is encrypted")]
    Encrypted,

    /// Error extracting the text of a page.
    #[error("Text extraction error: {0}")]
    TextExtract(String),

    /// Error reading an embedded image stream.
    #[error("Image extraction error: {0}")]
    ImageExtract(String),

    /// Error serializing the extracted document.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Page number is out of range.
    #[error("Page {0} is out of range (document has {1} pages)")]
    PageOutOfRange(u32, u32),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::PdfParse(err.to_string()),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Encoding(format!("JSON serialization error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Encrypted;
        assert_eq!(err.to_string(), "Document is encrypted");

        let err = Error::PageOutOfRange(10, 5);
        assert_eq!(
            err.to_string(),
            "Page 10 is out of range (document has 5 pages)"
        );

        let err = Error::PdfParse("invalid file header".to_string());
        assert_eq!(err.to_string(), "PDF parsing error: invalid file header");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_lopdf_error_conversion() {
        use lopdf::encryption::DecryptionError;

        let err: Error = lopdf::Error::Decryption(DecryptionError::IncorrectPassword).into();
        assert!(matches!(err, Error::Encrypted));

        let err: Error = lopdf::Error::Decryption(DecryptionError::UnsupportedEncryption).into();
        assert!(matches!(err, Error::Encrypted));

        let err: Error = lopdf::Error::IO(io::Error::new(io::ErrorKind::Other, "disk")).into();
        assert!(matches!(err, Error::Io(_)));

        let err: Error = lopdf::Error::ObjectNotFound.into();
        assert!(matches!(err, Error::PdfParse(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Encoding(_)));
        assert!(err.to_string().starts_with("Encoding error: JSON serialization error"));
    }
}
