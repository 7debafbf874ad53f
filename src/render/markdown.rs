//! Markdown rendering for extracted documents.
//!
//! Each page becomes a `## Page N` section holding the page text verbatim,
//! followed by its images inlined as base64 data URIs.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::model::{detect_mime_type, Document, Page};

use super::{ImageMime, MarkdownOptions};

const DEFAULT_IMAGE_MIME: &str = "image/png";

/// Base64 characters decoded when sniffing; 24 chars = 18 bytes.
const SNIFF_PREFIX_LEN: usize = 24;

/// Convert a document to Markdown.
pub fn to_markdown(doc: &Document, options: &MarkdownOptions) -> String {
    MarkdownRenderer::new(options.clone()).render(doc)
}

/// Markdown renderer.
pub struct MarkdownRenderer {
    options: MarkdownOptions,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: MarkdownOptions) -> Self {
        Self { options }
    }

    /// Render a document to Markdown.
    pub fn render(&self, doc: &Document) -> String {
        let mut output = String::new();
        for page in doc.pages() {
            self.render_page(&mut output, page);
        }
        output
    }

    fn render_page(&self, output: &mut String, page: &Page) {
        output.push_str(&format!("## Page {}\n\n", page.page_number));
        output.push_str(&page.text);
        output.push_str("\n\n");

        if !self.options.embed_images {
            return;
        }
        for (idx, image) in page.images.iter().enumerate() {
            output.push_str(&format!(
                "![Image {}](data:{};base64,{})\n\n",
                idx + 1,
                self.image_mime(image),
                image
            ));
        }
    }

    fn image_mime(&self, image_base64: &str) -> &'static str {
        match self.options.image_mime {
            ImageMime::Fixed => DEFAULT_IMAGE_MIME,
            ImageMime::Sniffed => sniff_base64_mime(image_base64).unwrap_or(DEFAULT_IMAGE_MIME),
        }
    }
}

/// Detect the MIME type of a base64 payload from its first few bytes.
fn sniff_base64_mime(image_base64: &str) -> Option<&'static str> {
    let prefix = if image_base64.len() > SNIFF_PREFIX_LEN {
        image_base64.get(..SNIFF_PREFIX_LEN)?
    } else {
        image_base64
    };
    let head = STANDARD.decode(prefix).ok()?;
    detect_mime_type(&head)
}
