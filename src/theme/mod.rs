//! Theme System - semantic colors with light and dark presets.
//!
//! Views never hard-code colors; they resolve semantic slots against the
//! preset selected by the app's theme mode. The preference persists as the
//! literal string `"dark"` or `"light"` under the storage key; absence
//! defaults to light.

use crate::types::Rgba;

/// Theme definition with all semantic colors.
///
/// Slots are grouped the way views consume them: accents, text,
/// backgrounds, borders, feedback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Theme name ("light", "dark").
    pub name: &'static str,

    // Accents
    pub primary: Rgba,
    pub secondary: Rgba,

    // Text
    pub text: Rgba,
    pub text_muted: Rgba,

    // Backgrounds
    pub background: Rgba,
    pub surface: Rgba,
    pub hover: Rgba,

    // Borders
    pub border: Rgba,
    pub border_focus: Rgba,

    // Feedback
    pub success: Rgba,
    pub error: Rgba,
}

/// Light preset (default).
pub fn light() -> Theme {
    Theme {
        name: "light",
        primary: Rgba::rgb(0x09, 0x69, 0xda),
        secondary: Rgba::rgb(0x82, 0x50, 0xdf),
        text: Rgba::rgb(0x0d, 0x11, 0x17),
        text_muted: Rgba::rgb(0x65, 0x6d, 0x76),
        background: Rgba::rgb(0xfa, 0xfb, 0xfd),
        surface: Rgba::rgb(0xff, 0xff, 0xff),
        hover: Rgba::rgb(0xf3, 0xf4, 0xf6),
        border: Rgba::rgb(0xd0, 0xd7, 0xde),
        border_focus: Rgba::rgb(0x09, 0x69, 0xda),
        success: Rgba::rgb(0x1a, 0x7f, 0x37),
        error: Rgba::rgb(0xd1, 0x24, 0x2f),
    }
}

/// Dark preset.
pub fn dark() -> Theme {
    Theme {
        name: "dark",
        primary: Rgba::rgb(0x58, 0xa6, 0xff),
        secondary: Rgba::rgb(0xa3, 0x71, 0xf7),
        text: Rgba::rgb(0xe6, 0xed, 0xf3),
        text_muted: Rgba::rgb(0x7d, 0x85, 0x90),
        background: Rgba::rgb(0x0a, 0x0e, 0x1a),
        surface: Rgba::rgb(0x16, 0x1b, 0x22),
        hover: Rgba::rgb(0x21, 0x26, 0x2d),
        border: Rgba::rgb(0x30, 0x36, 0x3d),
        border_focus: Rgba::rgb(0x58, 0xa6, 0xff),
        success: Rgba::rgb(0x3f, 0xb9, 0x50),
        error: Rgba::rgb(0xf8, 0x51, 0x49),
    }
}

/// The preset for a theme mode.
pub fn for_mode(dark_mode: bool) -> Theme {
    if dark_mode { dark() } else { light() }
}

impl Default for Theme {
    fn default() -> Self {
        light()
    }
}

// =============================================================================
// Tests
// =============================================================================
