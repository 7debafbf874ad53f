//! Raw embedded images as found in a page's resources.

use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Stream filter that determines how an image payload is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageFilter {
    /// No filter: uncompressed samples
    None,
    /// JPEG (`DCTDecode`)
    Dct,
    /// JPEG 2000 (`JPXDecode`)
    Jpx,
    /// zlib/deflate (`FlateDecode`)
    Flate,
    /// CCITT fax (`CCITTFaxDecode`)
    CcittFax,
    /// JBIG2 (`JBIG2Decode`)
    Jbig2,
    /// Any other filter name, or the first filter of a chain
    Other(String),
}

impl ImageFilter {
    /// Map a PDF filter name to a filter.
    pub fn from_name(name: &[u8]) -> Self {
        match name {
            b"DCTDecode" | b"DCT" => ImageFilter::Dct,
            b"JPXDecode" => ImageFilter::Jpx,
            b"FlateDecode" | b"Fl" => ImageFilter::Flate,
            b"CCITTFaxDecode" | b"CCF" => ImageFilter::CcittFax,
            b"JBIG2Decode" => ImageFilter::Jbig2,
            other => ImageFilter::Other(String::from_utf8_lossy(other).to_string()),
        }
    }
}

/// An image XObject found on a page, with its stream bytes untouched.
#[derive(Debug, Clone)]
pub struct PageImage {
    /// Resource name the page uses to draw the image (e.g., "Im0")
    pub name: String,

    /// Object number and generation of the image stream
    pub object_id: (u32, u16),

    /// Raw stream bytes exactly as stored in the file
    pub data: Vec<u8>,

    /// Outermost stream filter
    pub filter: ImageFilter,

    /// Width in pixels
    pub width: Option<u32>,

    /// Height in pixels
    pub height: Option<u32>,

    /// Color space name (e.g., "DeviceRGB", "ICCBased")
    pub color_space: Option<String>,

    /// Bits per component (e.g., 8)
    pub bits_per_component: Option<u8>,
}

impl PageImage {
    /// Create an image with only the required fields set.
    pub fn new(name: impl Into<String>, object_id: (u32, u16), data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            object_id,
            data,
            filter: ImageFilter::None,
            width: None,
            height: None,
            color_space: None,
            bits_per_component: None,
        }
    }

    /// Set the stream filter.
    pub fn with_filter(mut self, filter: ImageFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Set image dimensions.
    pub fn with_dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    /// Set color space.
    pub fn with_color_space(mut self, color_space: impl Into<String>) -> Self {
        self.color_space = Some(color_space.into());
        self
    }

    /// Set bits per component.
    pub fn with_bits_per_component(mut self, bits: u8) -> Self {
        self.bits_per_component = Some(bits);
        self
    }

    /// Size of the raw payload in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Base64 (standard alphabet, padded) of the raw payload.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.data)
    }

    /// Best-effort MIME type: magic bytes first, then the stream filter.
    pub fn mime_type(&self) -> &'static str {
        if let Some(mime) = detect_mime_type(&self.data) {
            return mime;
        }
        match self.filter {
            ImageFilter::Dct => "image/jpeg",
            ImageFilter::Jpx => "image/jp2",
            _ => "application/octet-stream",
        }
    }

    /// File extension matching [`PageImage::mime_type`].
    pub fn extension(&self) -> &'static str {
        match self.mime_type() {
            "image/jpeg" => "jpg",
            "image/png" => "png",
            "image/gif" => "gif",
            "image/tiff" => "tiff",
            "image/bmp" => "bmp",
            "image/webp" => "webp",
            "image/jp2" => "jp2",
            _ => match self.filter {
                ImageFilter::Jbig2 => "jb2",
                ImageFilter::CcittFax => "fax",
                _ => "raw",
            },
        }
    }

    /// File name for writing this image out, e.g. `page3_2.jpg`.
    pub fn suggested_filename(&self, page_number: u32, index: usize) -> String {
        format!("page{}_{}.{}", page_number, index, self.extension())
    }
}

/// Detect an image MIME type from leading magic bytes.
pub fn detect_mime_type(data: &[u8]) -> Option<&'static str> {
    // JPEG: FF D8 FF
    if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
        return Some("image/jpeg");
    }

    // PNG: 89 50 4E 47 0D 0A 1A 0A
    if data.starts_with(&[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]) {
        return Some("image/png");
    }

    if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
        return Some("image/gif");
    }

    // TIFF, little- and big-endian
    if data.starts_with(&[0x49, 0x49, 0x2A, 0x00]) || data.starts_with(&[0x4D, 0x4D, 0x00, 0x2A])
    {
        return Some("image/tiff");
    }

    if data.starts_with(b"BM") && data.len() >= 14 {
        return Some("image/bmp");
    }

    if data.len() >= 12 && data.starts_with(b"RIFF") && &data[8..12] == b"WEBP" {
        return Some("image/webp");
    }

    // JPEG 2000 signature box, or a bare codestream
    if data.starts_with(&[0x00, 0x00, 0x00, 0x0C, 0x6A, 0x50, 0x20, 0x20])
        || data.starts_with(&[0xFF, 0x4F, 0xFF, 0x51])
    {
        return Some("image/jp2");
    }

    None
}
