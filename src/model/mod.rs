//! Document model for extracted PDF content.
//!
//! The model is the hand-off point between extraction and rendering: the
//! extractor builds a [`Document`] once, and every renderer reads it without
//! mutating it.

mod document;
mod image;
mod page;

pub use document::Document;
pub use image::{detect_mime_type, ImageFilter, PageImage};
pub use page::Page;
