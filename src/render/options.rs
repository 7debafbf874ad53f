//! Rendering options.

/// How the MIME type of an inlined image data URI is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageMime {
    /// Always `image/png`, whatever the payload actually is
    #[default]
    Fixed,
    /// Detect from the payload's magic bytes, falling back to `image/png`
    Sniffed,
}

/// Options for Markdown rendering.
#[derive(Debug, Clone)]
pub struct MarkdownOptions {
    /// MIME type selection for image data URIs
    pub image_mime: ImageMime,

    /// Emit image lines at all
    pub embed_images: bool,
}

impl MarkdownOptions {
    /// Create new Markdown options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the image MIME mode.
    pub fn with_image_mime(mut self, mode: ImageMime) -> Self {
        self.image_mime = mode;
        self
    }

    /// Detect image MIME types instead of always using `image/png`.
    pub fn sniff_mime(mut self) -> Self {
        self.image_mime = ImageMime::Sniffed;
        self
    }

    /// Enable or disable image lines.
    pub fn with_images(mut self, embed: bool) -> Self {
        self.embed_images = embed;
        self
    }
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self {
            image_mime: ImageMime::Fixed,
            embed_images: true,
        }
    }
}
