//! Rendering module for converting extracted documents to JSON and Markdown.
//!
//! Both renderers are pure functions of a [`Document`](crate::model::Document):
//! rendering the same document twice yields identical strings.

mod json;
mod markdown;
mod options;

pub use json::{to_json, JsonFormat};
pub use markdown::{to_markdown, MarkdownRenderer};
pub use options::{ImageMime, MarkdownOptions};
