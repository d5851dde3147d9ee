//! Styled line primitives - the unit the compositor produces and the
//! terminal writer consumes.
//!
//! A frame is a flat `Vec<Line>`; each line is a run of spans with a
//! foreground, background, and attribute flags. Widths are display widths
//! (unicode-width), never byte or char counts.

use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::types::{Rgba, StyleFlags};

/// One styled run of text. Spans never contain newlines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub fg: Rgba,
    pub bg: Rgba,
    pub flags: StyleFlags,
}

impl Span {
    pub fn new(text: impl Into<String>, fg: Rgba, bg: Rgba, flags: StyleFlags) -> Self {
        Self {
            text: text.into(),
            fg,
            bg,
            flags,
        }
    }

    /// Plain span: foreground only, default attributes.
    pub fn plain(text: impl Into<String>, fg: Rgba, bg: Rgba) -> Self {
        Self::new(text, fg, bg, StyleFlags::empty())
    }

    /// Display width in terminal columns.
    pub fn width(&self) -> usize {
        self.text.width()
    }
}

/// One terminal row of spans.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    pub fn push(&mut self, span: Span) {
        self.spans.push(span);
    }

    /// Display width in terminal columns.
    pub fn width(&self) -> usize {
        self.spans.iter().map(Span::width).sum()
    }

    /// Unstyled text of the whole line. Used by tests and the row differ.
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Pad with background-colored spaces out to `width` columns.
    pub fn pad_to(&mut self, width: usize, bg: Rgba) {
        let current = self.width();
        if current < width {
            self.push(Span::plain(" ".repeat(width - current), Rgba::TERMINAL_DEFAULT, bg));
        }
    }
}

// =============================================================================
// Text shaping
// =============================================================================

/// Truncate to at most `width` columns, appending `…` when cut.
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        // Leave one column for the ellipsis.
        if used + w > width.saturating_sub(1) {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Word-wrap `text` into rows of at most `width` columns.
///
/// Breaks on spaces; a word wider than the row is hard-split. Always
/// returns at least one row so empty paragraphs still occupy a line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut row = String::new();
    let mut row_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        let sep = if row_width == 0 { 0 } else { 1 };

        if row_width + sep + word_width <= width {
            if sep == 1 {
                row.push(' ');
            }
            row.push_str(word);
            row_width += sep + word_width;
            continue;
        }

        if row_width > 0 {
            rows.push(std::mem::take(&mut row));
            row_width = 0;
        }

        if word_width <= width {
            row.push_str(word);
            row_width = word_width;
        } else {
            // Hard-split an overlong word.
            for ch in word.chars() {
                let w = ch.width().unwrap_or(0);
                if row_width + w > width {
                    rows.push(std::mem::take(&mut row));
                    row_width = 0;
                }
                row.push(ch);
                row_width += w;
            }
        }
    }

    if row_width > 0 || rows.is_empty() {
        rows.push(row);
    }
    rows
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_width_and_text() {
        let mut line = Line::default();
        line.push(Span::plain("ab", Rgba::rgb(1, 2, 3), Rgba::TERMINAL_DEFAULT));
        line.push(Span::plain("cd", Rgba::rgb(1, 2, 3), Rgba::TERMINAL_DEFAULT));

        assert_eq!(line.width(), 4);
        assert_eq!(line.text(), "abcd");
    }

    #[test]
    fn test_pad_to_fills_remaining_columns() {
        let mut line = Line::new(vec![Span::plain(
            "hi",
            Rgba::rgb(0, 0, 0),
            Rgba::TERMINAL_DEFAULT,
        )]);
        line.pad_to(5, Rgba::rgb(9, 9, 9));
        assert_eq!(line.width(), 5);

        // Already wide enough: no-op.
        line.pad_to(3, Rgba::rgb(9, 9, 9));
        assert_eq!(line.width(), 5);
    }

    #[test]
    fn test_truncate_preserves_short_text() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("exactly ten", 8), "exactly…");
    }

    #[test]
    fn test_wrap_breaks_on_spaces() {
        let rows = wrap("one two three four", 9);
        assert_eq!(rows, vec!["one two", "three", "four"]);
    }

    #[test]
    fn test_wrap_hard_splits_long_words() {
        let rows = wrap("abcdefghij", 4);
        assert_eq!(rows, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_empty_text_is_one_row() {
        assert_eq!(wrap("", 10), vec![String::new()]);
    }
}
