//! Extraction options.

/// Options for extracting content from a PDF.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// How per-page failures are handled
    pub error_mode: ErrorMode,

    /// Whether to collect embedded images
    pub extract_images: bool,
}

impl ExtractOptions {
    /// Create new extract options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable lenient mode (skip unreadable page text or images).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Enable or disable image extraction.
    pub fn with_images(mut self, extract: bool) -> Self {
        self.extract_images = extract;
        self
    }

    /// Extract text only.
    pub fn text_only(mut self) -> Self {
        self.extract_images = false;
        self
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::Strict,
            extract_images: true,
        }
    }
}

/// Error handling mode for failures inside a single page.
///
/// Failing to open the document is always an error; this only governs text
/// and image extraction once the document is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail the whole document
    #[default]
    Strict,
    /// Log a warning, keep empty text or skip the image, and continue
    Lenient,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_options_builder() {
        let options = ExtractOptions::new().lenient().text_only();

        assert_eq!(options.error_mode, ErrorMode::Lenient);
        assert!(!options.extract_images);

        let options = options.with_error_mode(ErrorMode::Strict).with_images(true);
        assert_eq!(options.error_mode, ErrorMode::Strict);
        assert!(options.extract_images);
    }

    #[test]
    fn test_default_options() {
        let options = ExtractOptions::default();
        assert_eq!(options.error_mode, ErrorMode::Strict);
        assert!(options.extract_images);
    }
}
