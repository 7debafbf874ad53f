//! Page-level types.

use serde::{Deserialize, Serialize};

/// Text and images extracted from a single page.
///
/// Field order is the serialized key order: `page_number`, `text`, `images`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Page number (1-indexed)
    pub page_number: u32,

    /// Plain text as returned by the PDF library, possibly empty
    pub text: String,

    /// Base64-encoded image payloads in discovery order
    pub images: Vec<String>,
}

impl Page {
    /// Create a page.
    pub fn new(page_number: u32, text: impl Into<String>, images: Vec<String>) -> Self {
        Self {
            page_number,
            text: text.into(),
            images,
        }
    }

    /// Number of images on the page.
    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// Check if the page has neither text nor images.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty() && self.images.is_empty()
    }
}
