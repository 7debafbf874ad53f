//! In-memory PDF fixtures for integration tests.

#![allow(dead_code)]

use lopdf::encryption::{decrypt_object, get_encryption_key};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream, StringFormat};

/// A page to build: optional text drawn with Helvetica, plus raw image
/// payloads registered as `/Im0`, `/Im1`, ... in the page resources.
pub struct TestPage {
    pub text: Option<&'static str>,
    pub images: Vec<Vec<u8>>,
}

impl TestPage {
    pub fn text(text: &'static str) -> Self {
        Self {
            text: Some(text),
            images: Vec::new(),
        }
    }

    pub fn blank() -> Self {
        Self {
            text: None,
            images: Vec::new(),
        }
    }

    pub fn with_image(mut self, data: &[u8]) -> Self {
        self.images.push(data.to_vec());
        self
    }
}

pub const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\n\x00\x00\x00\rIHDR";
pub const JPEG_BYTES: &[u8] = b"\xFF\xD8\xFF\xE0\x00\x10JFIF\x00";

fn image_stream(data: &[u8]) -> Stream {
    Stream::new(
        dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => 1i64,
            "Height" => 1i64,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8i64,
        },
        data.to_vec(),
    )
}

fn finish(
    mut doc: Document,
    pages_id: ObjectId,
    kids: Vec<Object>,
    pages_extra: Dictionary,
) -> Document {
    let count = kids.len() as i64;
    let mut pages = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => count,
    };
    for (key, value) in pages_extra.iter() {
        pages.set(key.clone(), value.clone());
    }
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc
}

fn save(mut doc: Document) -> Vec<u8> {
    let mut buf = Vec::new();
    doc.save_to(&mut buf).expect("failed to save test PDF");
    buf
}

/// Build a PDF with one page per [`TestPage`].
pub fn build_pdf(pages: &[TestPage]) -> Vec<u8> {
    save(build_document(pages))
}

fn build_document(pages: &[TestPage]) -> Document {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });

    let mut kids = Vec::new();
    for page in pages {
        let mut content = String::new();
        if let Some(text) = page.text {
            content.push_str(&format!("BT /F1 12 Tf 72 700 Td ({}) Tj ET\n", text));
        }

        let mut xobjects = Dictionary::new();
        for (i, data) in page.images.iter().enumerate() {
            let image_id = doc.add_object(image_stream(data));
            let name = format!("Im{}", i);
            content.push_str(&format!("q 100 0 0 100 72 400 cm /{} Do Q\n", name));
            xobjects.set(name, image_id);
        }

        let content_id = doc.add_object(Stream::new(Dictionary::new(), content.into_bytes()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Contents" => content_id,
            "Resources" => dictionary! {
                "Font" => dictionary! { "F1" => font_id },
                "XObject" => xobjects,
            },
        });
        kids.push(Object::from(page_id));
    }

    finish(doc, pages_id, kids, Dictionary::new())
}

/// Build a PDF whose pages carry no `/Resources`; the page tree node does,
/// with a single image.
pub fn build_pdf_with_inherited_image(page_count: usize, image: &[u8]) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let image_id = doc.add_object(image_stream(image));

    let mut kids = Vec::new();
    for _ in 0..page_count {
        let content_id = doc.add_object(Stream::new(
            Dictionary::new(),
            b"q 100 0 0 100 72 400 cm /Shared Do Q".to_vec(),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Contents" => content_id,
        });
        kids.push(Object::from(page_id));
    }

    let resources = dictionary! {
        "Resources" => dictionary! {
            "XObject" => dictionary! { "Shared" => image_id },
        },
    };
    save(finish(doc, pages_id, kids, resources))
}

fn hex_string(bytes: &[u8]) -> Object {
    Object::String(bytes.to_vec(), StringFormat::Hexadecimal)
}

/// Attach a standard security handler dictionary and a file ID.
fn add_encryption(doc: &mut Document, version: i64, revision: i64, extra: Dictionary) -> ObjectId {
    let mut encrypt = dictionary! {
        "Filter" => "Standard",
        "V" => version,
        "R" => revision,
        "Length" => 40i64,
        "O" => hex_string(&[0x5A; 32]),
        "P" => -44i64,
    };
    for (key, value) in extra.iter() {
        encrypt.set(key.clone(), value.clone());
    }
    let encrypt_id = doc.add_object(encrypt);

    let file_id = hex_string(b"0123456789abcdef");
    doc.trailer.set("Encrypt", encrypt_id);
    doc.trailer.set("ID", vec![file_id.clone(), file_id]);
    encrypt_id
}

/// Build a PDF encrypted with RC4 (revision 2, 40-bit key) that opens with
/// the empty user password. `/U` is omitted, so no password check applies.
pub fn build_encrypted_pdf(pages: &[TestPage]) -> Vec<u8> {
    let mut doc = build_document(pages);
    let encrypt_id = add_encryption(&mut doc, 1, 2, Dictionary::new());
    let key = get_encryption_key(&doc, "", false).expect("failed to derive test key");

    for (&id, obj) in doc.objects.iter_mut() {
        if id == encrypt_id {
            continue;
        }
        // RC4 is symmetric: "decrypting" plaintext encrypts it
        if let Ok(cipher) = decrypt_object(&key, id, &*obj) {
            match obj {
                Object::Stream(stream) => stream.set_content(cipher),
                Object::String(content, _) => *content = cipher,
                _ => {}
            }
        }
    }

    save(doc)
}

/// Build a PDF whose `/U` entry cannot match the empty user password.
pub fn build_password_protected_pdf(pages: &[TestPage]) -> Vec<u8> {
    let mut doc = build_document(pages);
    add_encryption(
        &mut doc,
        1,
        2,
        dictionary! { "U" => hex_string(&[0xA5; 32]) },
    );
    save(doc)
}

/// Build a PDF declaring a security handler revision lopdf cannot decrypt.
pub fn build_unsupported_encryption_pdf(pages: &[TestPage]) -> Vec<u8> {
    let mut doc = build_document(pages);
    add_encryption(&mut doc, 5, 6, Dictionary::new());
    save(doc)
}
