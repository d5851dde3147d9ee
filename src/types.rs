//! Core types for zendoc.
//!
//! These types define the foundation everything builds on: section metadata,
//! content blocks, and the color/style primitives the renderer understands.

use bitflags::bitflags;

// =============================================================================
// Color
// =============================================================================

/// RGB color with 8-bit channels.
///
/// Using integers for exact comparison - no floating point epsilon needed.
/// Special value: r=-1 means "terminal default" (let terminal pick).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: i16,
    pub g: i16,
    pub b: i16,
}

impl Rgba {
    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as i16,
            g: g as i16,
            b: b as i16,
        }
    }

    /// Terminal default color (let terminal decide).
    pub const TERMINAL_DEFAULT: Self = Self {
        r: -1,
        g: -1,
        b: -1,
    };

    /// Check if this is the terminal default color.
    #[inline]
    pub const fn is_terminal_default(&self) -> bool {
        self.r == -1
    }
}

bitflags! {
    /// Inline text attributes for rendered spans.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct StyleFlags: u8 {
        const BOLD      = 1 << 0;
        const DIM       = 1 << 1;
        const ITALIC    = 1 << 2;
        const UNDERLINE = 1 << 3;
    }
}

// =============================================================================
// Sections
// =============================================================================

/// One navigable unit of documentation, identified by a stable kebab-case id.
///
/// Sections are defined once as static configuration and never created or
/// destroyed at runtime. The id is the only cross-module join key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
}

/// A heading inside rendered content, used by the table of contents and
/// the scroll tracker. Recomputed whenever the content changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub id: String,
    pub text: String,
    /// Heading depth: 2 or 3.
    pub level: u8,
}

/// Prev/next link derived from the section order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageLink {
    pub id: &'static str,
    pub title: &'static str,
}

/// One element of the breadcrumb path. The last item is the active one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadcrumbItem {
    pub label: String,
    pub active: bool,
}

// =============================================================================
// Content blocks
// =============================================================================

/// Structured content produced by a section's content provider.
///
/// Providers return blocks rather than markup; the renderer decides how each
/// block looks. Headings carry their own ids so the table of contents and
/// deep links work without scanning rendered output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A level-2 or level-3 heading with a unique anchor id.
    Heading {
        id: &'static str,
        text: &'static str,
        level: u8,
    },
    /// A paragraph of body text.
    Paragraph(&'static str),
    /// A fenced code sample with a copy affordance.
    Code {
        id: &'static str,
        lang: &'static str,
        source: &'static str,
    },
    /// A bulleted list.
    List(&'static [&'static str]),
    /// An emphasized callout box.
    Callout {
        title: &'static str,
        body: &'static str,
    },
}

// =============================================================================
// Tests
// =============================================================================
