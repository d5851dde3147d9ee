//! Registry - static section index and content registry.
//!
//! - [`sections`] - section metadata, reading order, id resolution
//! - [`content`] - explicit id -> content provider table, heading extraction
//! - [`docs`] - the content providers themselves (static data)

pub mod content;
pub mod docs;
pub mod sections;

pub use content::{content_for, headings_of, provider};
pub use sections::{
    category, category_of, order_index, resolve_id, section, Category, CATEGORIES,
    DEFAULT_SECTION, SECTIONS, SECTION_ORDER,
};
