//! Page text and image extraction using lopdf.

use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

use lopdf::{Dictionary, Document as LopdfDocument, Object, ObjectId, Stream};

use crate::detect::{detect_format_from_bytes, detect_format_from_path};
use crate::error::{Error, Result};
use crate::model::{Document, ImageFilter, PageImage};

use super::options::{ErrorMode, ExtractOptions};

/// Extracts per-page text and embedded images from one PDF.
pub struct PdfExtractor {
    doc: LopdfDocument,
    options: ExtractOptions,
    encrypted: bool,
}

impl PdfExtractor {
    /// Open a PDF file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ExtractOptions::default())
    }

    /// Open a PDF file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ExtractOptions) -> Result<Self> {
        let path = path.as_ref();
        detect_format_from_path(path)?;

        let doc = LopdfDocument::load(path)?;
        Self::with_document(doc, options)
    }

    /// Open a PDF held in memory.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ExtractOptions::default())
    }

    /// Open a PDF held in memory with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ExtractOptions) -> Result<Self> {
        detect_format_from_bytes(data)?;

        let doc = LopdfDocument::load_mem(data)?;
        Self::with_document(doc, options)
    }

    /// Open a PDF from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ExtractOptions::default())
    }

    /// Open a PDF from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(mut reader: R, options: ExtractOptions) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes_with_options(&data, options)
    }

    /// Wrap a loaded document, decrypting it with the empty user password
    /// when it carries an `/Encrypt` dictionary.
    fn with_document(mut doc: LopdfDocument, options: ExtractOptions) -> Result<Self> {
        // decrypt() drops /Encrypt from the trailer
        let encrypted = doc.is_encrypted();
        if encrypted {
            doc.decrypt("").map_err(|e| {
                log::warn!("Cannot decrypt document: {}", e);
                Error::Encrypted
            })?;
            log::debug!("Decrypted document with the empty user password");
        }

        Ok(Self {
            doc,
            options,
            encrypted,
        })
    }

    /// Extract every page, in order, into a [`Document`].
    pub fn extract(&self) -> Result<Document> {
        let mut document = Document::new();

        for (page_number, page_id) in self.doc.get_pages() {
            let text = self.page_text(page_number)?;
            let images = if self.options.extract_images {
                self.collect_images(page_id)?
                    .iter()
                    .map(PageImage::to_base64)
                    .collect()
            } else {
                Vec::new()
            };

            log::debug!(
                "Page {}: {} chars of text, {} images",
                page_number,
                text.len(),
                images.len()
            );

            let assigned = document.push_page(text, images);
            debug_assert_eq!(assigned, page_number);
        }

        Ok(document)
    }

    /// Raw images on one page (1-indexed), without base64 encoding.
    pub fn page_images(&self, page_number: u32) -> Result<Vec<PageImage>> {
        let pages = self.doc.get_pages();
        let page_id = pages
            .get(&page_number)
            .ok_or(Error::PageOutOfRange(page_number, pages.len() as u32))?;
        self.collect_images(*page_id)
    }

    /// Get the number of pages.
    pub fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    /// Check if the source file was encrypted.
    pub fn is_encrypted(&self) -> bool {
        self.encrypted
    }

    /// Get PDF version.
    pub fn version(&self) -> String {
        self.doc.version.to_string()
    }

    /// Plain text of a page in the library's default mode.
    fn page_text(&self, page_number: u32) -> Result<String> {
        match self.doc.extract_text(&[page_number]) {
            Ok(text) => Ok(text),
            Err(e) => {
                let err = Error::TextExtract(format!("Page {}: {}", page_number, e));
                self.recover(err)?;
                Ok(String::new())
            }
        }
    }

    /// In lenient mode, log the error and carry on; otherwise return it.
    fn recover(&self, err: Error) -> Result<()> {
        match self.options.error_mode {
            ErrorMode::Strict => Err(err),
            ErrorMode::Lenient => {
                log::warn!("{}", err);
                Ok(())
            }
        }
    }

    /// Image XObjects reachable from a page, in resource order, each object
    /// reported once.
    fn collect_images(&self, page_id: ObjectId) -> Result<Vec<PageImage>> {
        let mut images = Vec::new();
        let mut seen = HashSet::new();

        if let Some(resources) = self.page_resources(page_id)? {
            self.collect_xobjects(resources, &mut seen, &mut images)?;
        }

        Ok(images)
    }

    /// The page's resource dictionary, inherited through `/Parent` if the
    /// page does not carry its own.
    fn page_resources(&self, page_id: ObjectId) -> Result<Option<&Dictionary>> {
        let mut node_id = page_id;
        let mut visited = HashSet::new();

        while visited.insert(node_id) {
            let node = self.doc.get_dictionary(node_id)?;
            if let Ok(resources) = node.get(b"Resources") {
                return Ok(self.resolve_dict(resources));
            }
            match node.get(b"Parent").and_then(Object::as_reference) {
                Ok(parent) => node_id = parent,
                Err(_) => break,
            }
        }

        Ok(None)
    }

    fn collect_xobjects(
        &self,
        resources: &Dictionary,
        seen: &mut HashSet<ObjectId>,
        images: &mut Vec<PageImage>,
    ) -> Result<()> {
        let Some(xobjects) = resources
            .get(b"XObject")
            .ok()
            .and_then(|obj| self.resolve_dict(obj))
        else {
            return Ok(());
        };

        for (name, obj) in xobjects.iter() {
            let Ok(id) = obj.as_reference() else {
                continue;
            };
            if !seen.insert(id) {
                continue;
            }

            let stream = match self.doc.get_object(id).and_then(Object::as_stream) {
                Ok(stream) => stream,
                Err(e) => {
                    let name = String::from_utf8_lossy(name);
                    self.recover(Error::ImageExtract(format!("XObject {}: {}", name, e)))?;
                    continue;
                }
            };

            match stream.dict.get(b"Subtype").and_then(Object::as_name) {
                Ok(b"Image") => images.push(build_page_image(name, id, stream)),
                Ok(b"Form") => {
                    if let Some(form_resources) = stream
                        .dict
                        .get(b"Resources")
                        .ok()
                        .and_then(|obj| self.resolve_dict(obj))
                    {
                        self.collect_xobjects(form_resources, seen, images)?;
                    }
                }
                _ => {}
            }
        }

        Ok(())
    }

    fn resolve_dict<'a>(&'a self, obj: &'a Object) -> Option<&'a Dictionary> {
        match obj {
            Object::Reference(r) => self.doc.get_dictionary(*r).ok(),
            Object::Dictionary(d) => Some(d),
            _ => None,
        }
    }
}

fn build_page_image(name: &[u8], id: ObjectId, stream: &Stream) -> PageImage {
    let dict = &stream.dict;
    let mut image = PageImage::new(String::from_utf8_lossy(name), id, stream.content.clone())
        .with_filter(stream_filter(dict));

    let width = dict.get(b"Width").and_then(Object::as_i64).ok();
    let height = dict.get(b"Height").and_then(Object::as_i64).ok();
    if let (Some(w), Some(h)) = (width, height) {
        image = image.with_dimensions(w as u32, h as u32);
    }

    if let Ok(bits) = dict.get(b"BitsPerComponent").and_then(Object::as_i64) {
        image = image.with_bits_per_component(bits as u8);
    }

    let color_space = match dict.get(b"ColorSpace") {
        Ok(Object::Name(n)) => Some(String::from_utf8_lossy(n).to_string()),
        Ok(Object::Array(arr)) => arr
            .first()
            .and_then(|o| o.as_name().ok())
            .map(|n| String::from_utf8_lossy(n).to_string()),
        _ => None,
    };
    if let Some(cs) = color_space {
        image = image.with_color_space(cs);
    }

    image
}

/// Outermost filter of a stream: a single name or the first of an array.
fn stream_filter(dict: &Dictionary) -> ImageFilter {
    match dict.get(b"Filter") {
        Ok(Object::Name(name)) => ImageFilter::from_name(name),
        Ok(Object::Array(filters)) => filters
            .first()
            .and_then(|f| f.as_name().ok())
            .map(ImageFilter::from_name)
            .unwrap_or(ImageFilter::None),
        _ => ImageFilter::None,
    }
}
