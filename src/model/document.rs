//! Document-level types.

use super::Page;
use serde::{Deserialize, Serialize};

/// An extracted PDF document: one [`Page`] per source page, in order.
///
/// Page numbers are assigned by [`Document::push_page`], so they always run
/// `1..=page_count()` without gaps. Deserialization rejects any other
/// numbering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDocument")]
pub struct Document {
    pages: Vec<Page>,
}

#[derive(Deserialize)]
struct RawDocument {
    pages: Vec<Page>,
}

impl TryFrom<RawDocument> for Document {
    type Error = String;

    fn try_from(raw: RawDocument) -> Result<Self, Self::Error> {
        for (i, page) in raw.pages.iter().enumerate() {
            let expected = i as u32 + 1;
            if page.page_number != expected {
                return Err(format!(
                    "page {} found where page {} was expected",
                    page.page_number, expected
                ));
            }
        }
        Ok(Self { pages: raw.pages })
    }
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the next page and return its page number.
    pub fn push_page(&mut self, text: impl Into<String>, images: Vec<String>) -> u32 {
        let page_number = self.pages.len() as u32 + 1;
        self.pages.push(Page::new(page_number, text, images));
        page_number
    }

    /// All pages in order.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Get a page by number (1-indexed).
    pub fn get_page(&self, page_number: u32) -> Option<&Page> {
        if page_number == 0 {
            return None;
        }
        self.pages.get((page_number - 1) as usize)
    }

    /// Total number of images across all pages.
    pub fn image_count(&self) -> usize {
        self.pages.iter().map(Page::image_count).sum()
    }

    /// Check if the document has any pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Concatenated text of every page, separated by blank lines.
    pub fn plain_text(&self) -> String {
        self.pages
            .iter()
            .map(|page| page.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Whitespace-separated token count over all page text.
    pub fn word_count(&self) -> usize {
        self.pages
            .iter()
            .map(|page| page.text.split_whitespace().count())
            .sum()
    }
}
