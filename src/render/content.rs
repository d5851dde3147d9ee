//! Content layout - turns a section's blocks into styled lines.
//!
//! Layout is pure: the same blocks, width, and theme always produce the
//! same rows. While laying out it records document-space positions for
//! every heading and the extent of the whole section, which the scroll
//! tracker consumes as its marker sets.

use crate::registry::{content_for, resolve_id};
use crate::state::scroll::{HeadingMark, SectionSpan};
use crate::theme::Theme;
use crate::types::{Block, Rgba, StyleFlags};

use super::line::{truncate, wrap, Line, Span};

/// Narrowest width content is ever laid out at; wrapping below this
/// degenerates into one word per row.
pub const MIN_CONTENT_WIDTH: usize = 16;

/// Hint shown on a code block's header row.
pub const COPY_HINT: &str = "c to copy";

/// Indicator shown after a successful copy.
pub const COPIED_LABEL: &str = "✓ copied";

/// A laid-out section: rows plus the marker sets for scroll tracking.
pub struct ContentLayout {
    pub lines: Vec<Line>,
    pub span: SectionSpan,
    pub headings: Vec<HeadingMark>,
}

/// Lay out the content of `section_id` at `width` columns.
///
/// `copied` is the code block currently showing its copied indicator.
/// Unknown ids fall back to the default section, same as the registry.
pub fn layout_content(
    section_id: &str,
    width: usize,
    theme: &Theme,
    copied: Option<&str>,
) -> ContentLayout {
    let id = resolve_id(section_id);
    let blocks = content_for(id);
    let width = width.max(MIN_CONTENT_WIDTH);
    let bg = theme.background;

    let mut lines: Vec<Line> = Vec::new();
    let mut headings = Vec::new();

    for block in &blocks {
        match block {
            Block::Heading {
                id: anchor,
                text,
                level,
            } => {
                if !lines.is_empty() {
                    lines.push(blank(width, bg));
                }
                headings.push(HeadingMark {
                    id: (*anchor).to_string(),
                    top: lines.len() as i32,
                });
                let (indent, fg) = match *level {
                    2 => ("", theme.primary),
                    _ => ("  ", theme.text),
                };
                let mut line = Line::new(vec![Span::new(
                    format!("{indent}{text}"),
                    fg,
                    bg,
                    StyleFlags::BOLD,
                )]);
                line.pad_to(width, bg);
                lines.push(line);
            }
            Block::Paragraph(text) => {
                for row in wrap(text, width) {
                    let mut line = Line::new(vec![Span::plain(row, theme.text, bg)]);
                    line.pad_to(width, bg);
                    lines.push(line);
                }
                lines.push(blank(width, bg));
            }
            Block::Code { id, lang, source } => {
                lines.push(code_header(id, lang, copied, width, theme));
                for row in source.lines() {
                    let mut line = Line::new(vec![
                        Span::plain("  ", Rgba::TERMINAL_DEFAULT, theme.surface),
                        Span::plain(
                            truncate(row, width.saturating_sub(2)),
                            theme.text,
                            theme.surface,
                        ),
                    ]);
                    line.pad_to(width, theme.surface);
                    lines.push(line);
                }
                lines.push(blank(width, bg));
            }
            Block::List(items) => {
                for item in *items {
                    let rows = wrap(item, width.saturating_sub(2));
                    for (i, row) in rows.into_iter().enumerate() {
                        let bullet = if i == 0 { "• " } else { "  " };
                        let mut line = Line::new(vec![
                            Span::plain(bullet, theme.text_muted, bg),
                            Span::plain(row, theme.text, bg),
                        ]);
                        line.pad_to(width, bg);
                        lines.push(line);
                    }
                }
                lines.push(blank(width, bg));
            }
            Block::Callout { title, body } => {
                let mut head = Line::new(vec![
                    Span::plain("▌ ", theme.border_focus, bg),
                    Span::new(*title, theme.primary, bg, StyleFlags::BOLD),
                ]);
                head.pad_to(width, bg);
                lines.push(head);
                for row in wrap(body, width.saturating_sub(2)) {
                    let mut line = Line::new(vec![
                        Span::plain("▌ ", theme.border_focus, bg),
                        Span::plain(row, theme.text, bg),
                    ]);
                    line.pad_to(width, bg);
                    lines.push(line);
                }
                lines.push(blank(width, bg));
            }
        }
    }

    let span = SectionSpan {
        id: id.to_string(),
        top: 0,
        bottom: (lines.len() as i32).saturating_sub(1).max(0),
    };

    ContentLayout {
        lines,
        span,
        headings,
    }
}

fn blank(width: usize, bg: Rgba) -> Line {
    let mut line = Line::default();
    line.pad_to(width, bg);
    line
}

fn code_header(
    block_id: &str,
    lang: &str,
    copied: Option<&str>,
    width: usize,
    theme: &Theme,
) -> Line {
    let is_copied = copied == Some(block_id);
    let (label, fg) = if is_copied {
        (COPIED_LABEL, theme.success)
    } else {
        (COPY_HINT, theme.text_muted)
    };

    let mut line = Line::new(vec![Span::new(
        format!("  {lang}"),
        theme.text_muted,
        theme.surface,
        StyleFlags::DIM,
    )]);
    let gap = width
        .saturating_sub(line.width())
        .saturating_sub(label.len() + 2);
    line.push(Span::plain(" ".repeat(gap), Rgba::TERMINAL_DEFAULT, theme.surface));
    line.push(Span::plain(label, fg, theme.surface));
    line.pad_to(width, theme.surface);
    line
}

/// The first code block of a section, if any. The copy key targets this.
pub fn first_code_block(section_id: &str) -> Option<(&'static str, &'static str)> {
    content_for(resolve_id(section_id))
        .iter()
        .find_map(|block| match block {
            Block::Code { id, source, .. } => Some((*id, *source)),
            _ => None,
        })
}

// =============================================================================
// Tests
// =============================================================================
