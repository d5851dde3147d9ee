//! Frame composition - derives one full terminal frame from app state.
//!
//! Pure with respect to its inputs: reading the signals happens through
//! the state handles, so running this inside a derived computation makes
//! the frame recompute on exactly the state it read. Layout is a fixed
//! three-pane arrangement: sidebar, content window, and (when the
//! terminal is wide enough) the "On This Page" panel.

use unicode_width::UnicodeWidthStr;

use crate::nav::{breadcrumb, next_page, previous_page, sidebar_rows, toc_rows, SidebarRow};
use crate::nav::{TOC_EMPTY, TOC_TITLE};
use crate::registry::{content_for, headings_of, section};
use crate::search::SearchState;
use crate::state::app::AppState;
use crate::theme::{self, Theme};
use crate::types::{Heading, Rgba, StyleFlags};

use super::content::{layout_content, MIN_CONTENT_WIDTH};
use super::line::{truncate, Line, Span};

/// App title shown in the header.
pub const APP_TITLE: &str = "QuantZen SDK Docs";

/// Sidebar pane width in columns.
pub const SIDEBAR_WIDTH: usize = 26;

/// Sidebar width when collapsed to markers only.
pub const SIDEBAR_COLLAPSED_WIDTH: usize = 4;

/// Sidebar width when the overlay menu is open.
pub const SIDEBAR_OVERLAY_WIDTH: usize = 40;

/// "On This Page" pane width in columns.
pub const TOC_WIDTH: usize = 24;

/// Minimum terminal width at which the TOC pane is shown.
pub const TOC_MIN_WIDTH: usize = 100;

/// Everything the compositor reads besides the reactive state handles.
pub struct FrameInput<'a> {
    pub app: &'a AppState,
    pub search: &'a SearchState,
    pub active_heading: Option<String>,
    pub copied: Option<String>,
    pub scroll_y: i32,
    pub width: u16,
    pub height: u16,
}

/// A composed frame plus the scroll geometry the event loop needs.
pub struct Frame {
    pub lines: Vec<Line>,
    /// Total rows of the laid-out content document.
    pub content_rows: usize,
    /// Rows of the content viewport.
    pub viewport_rows: usize,
    /// Columns of the content pane; scroll marks are laid out at this width.
    pub content_width: usize,
}

/// Compose one frame.
pub fn compose(input: &FrameInput) -> Frame {
    let theme = theme::for_mode(input.app.dark_mode());
    let width = input.width.max(40) as usize;
    let height = input.height.max(10) as usize;

    let mut sidebar_width = if input.app.mobile_menu_open() {
        SIDEBAR_OVERLAY_WIDTH.min(width / 2)
    } else if input.app.sidebar_collapsed() {
        SIDEBAR_COLLAPSED_WIDTH
    } else {
        SIDEBAR_WIDTH
    };
    let show_toc = width >= TOC_MIN_WIDTH;
    let toc_width = if show_toc { TOC_WIDTH } else { 0 };
    // Two 1-column pane separators (one when the TOC is hidden).
    let available = width - toc_width - if show_toc { 2 } else { 1 };
    // Content never drops below its wrap minimum; the sidebar gives way
    // first so rows cannot outgrow the terminal on narrow splits.
    if available.saturating_sub(sidebar_width) < MIN_CONTENT_WIDTH {
        sidebar_width = available
            .saturating_sub(MIN_CONTENT_WIDTH)
            .max(SIDEBAR_COLLAPSED_WIDTH);
    }
    let content_width = available - sidebar_width;
    let viewport_rows = height - 5;

    let active = input.app.resolved_section();
    let layout = layout_content(active, content_width, &theme, input.copied.as_deref());
    let headings = headings_of(&content_for(active));

    let sidebar = sidebar_pane(input.app, sidebar_width, &theme);
    let toc = if show_toc {
        Some(toc_pane(&headings, input.active_heading.as_deref(), toc_width, &theme))
    } else {
        None
    };

    let mut lines = Vec::with_capacity(height);
    lines.push(header_line(input, width, &theme));
    lines.push(breadcrumb_line(active, width, &theme));
    lines.push(rule(width, &theme));

    let results_panel = if input.search.panel_visible() {
        Some(results_pane(input.search, content_width, &theme))
    } else {
        None
    };

    for row in 0..viewport_rows {
        let mut line = Line::default();

        extend_cell(&mut line, sidebar.get(row), sidebar_width, &theme);
        line.push(Span::plain("│", theme.border, theme.background));

        let content_row = match &results_panel {
            Some(panel) => panel.get(row),
            None => layout.lines.get(input.scroll_y.max(0) as usize + row),
        };
        extend_cell(&mut line, content_row, content_width, &theme);

        if let Some(toc) = &toc {
            line.push(Span::plain("│", theme.border, theme.background));
            extend_cell(&mut line, toc.get(row), toc_width, &theme);
        }

        lines.push(line);
    }

    lines.push(rule(width, &theme));
    lines.push(footer_line(
        active,
        input.app.status().as_deref(),
        width,
        &theme,
    ));

    Frame {
        lines,
        content_rows: layout.lines.len(),
        viewport_rows,
        content_width,
    }
}

fn extend_cell(line: &mut Line, cell: Option<&Line>, width: usize, theme: &Theme) {
    match cell {
        Some(row) => {
            line.spans.extend(row.spans.iter().cloned());
            line.pad_to(line.width() + width.saturating_sub(row.width()), theme.background);
        }
        None => line.pad_to(line.width() + width, theme.background),
    }
}

fn rule(width: usize, theme: &Theme) -> Line {
    Line::new(vec![Span::plain(
        "─".repeat(width),
        theme.border,
        theme.background,
    )])
}

// =============================================================================
// Header and footer
// =============================================================================

fn header_line(input: &FrameInput, width: usize, theme: &Theme) -> Line {
    let bg = theme.background;
    let mut line = Line::new(vec![
        Span::plain(" ", Rgba::TERMINAL_DEFAULT, bg),
        Span::new(APP_TITLE, theme.primary, bg, StyleFlags::BOLD),
        Span::plain("  ", Rgba::TERMINAL_DEFAULT, bg),
    ]);

    if input.search.is_focused() {
        line.push(Span::plain("/ ", theme.border_focus, bg));
        line.push(Span::plain(input.search.query(), theme.text, bg));
        line.push(Span::plain("▏", theme.border_focus, bg));
    } else {
        line.push(Span::new(
            "Search docs (ctrl+k)",
            theme.text_muted,
            bg,
            StyleFlags::DIM,
        ));
    }

    let mode = if input.app.dark_mode() { "◐ dark" } else { "◑ light" };
    // Display width, not byte length - the mode glyph is multi-byte.
    let gap = width
        .saturating_sub(line.width())
        .saturating_sub(mode.width() + 1);
    line.push(Span::plain(" ".repeat(gap), Rgba::TERMINAL_DEFAULT, bg));
    line.push(Span::plain(mode, theme.text_muted, bg));
    line.pad_to(width, bg);
    line
}

/// Copyright notice shown opposite the breadcrumb.
pub const COPYRIGHT: &str = "© QuantZen Labs · quantzen.io/docs";

fn breadcrumb_line(active: &str, width: usize, theme: &Theme) -> Line {
    let bg = theme.background;
    let mut line = Line::new(vec![Span::plain(" ", Rgba::TERMINAL_DEFAULT, bg)]);

    for (i, item) in breadcrumb(active).into_iter().enumerate() {
        if i > 0 {
            line.push(Span::plain(" › ", theme.text_muted, bg));
        }
        if item.active {
            line.push(Span::new(item.label, theme.text, bg, StyleFlags::BOLD));
        } else {
            line.push(Span::plain(item.label, theme.text_muted, bg));
        }
    }

    let notice_width = COPYRIGHT.width() + 1;
    if line.width() + notice_width < width {
        let gap = width - line.width() - notice_width;
        line.push(Span::plain(" ".repeat(gap), Rgba::TERMINAL_DEFAULT, bg));
        line.push(Span::new(COPYRIGHT, theme.text_muted, bg, StyleFlags::DIM));
    }

    line.pad_to(width, bg);
    line
}

fn footer_line(active: &str, status: Option<&str>, width: usize, theme: &Theme) -> Line {
    let bg = theme.background;
    let mut line = Line::new(vec![Span::plain(" ", Rgba::TERMINAL_DEFAULT, bg)]);

    if let Some(prev) = previous_page(active) {
        line.push(Span::plain("← ", theme.primary, bg));
        line.push(Span::plain(prev.title, theme.text, bg));
    }

    // A status message displaces the key hints until it is cleared.
    let hints = "↑/↓ scroll  ←/→ page  c copy  t theme  b sidebar  ctrl+c quit";
    let (middle, fg, flags) = match status {
        Some(message) => (message, theme.error, StyleFlags::BOLD),
        None => (hints, theme.text_muted, StyleFlags::DIM),
    };

    let next = next_page(active);
    let right_width = next.as_ref().map_or(0, |n| n.title.width() + 3);
    let mid = width
        .saturating_sub(line.width())
        .saturating_sub(middle.width())
        .saturating_sub(right_width + 1)
        / 2;

    line.push(Span::plain(" ".repeat(mid), Rgba::TERMINAL_DEFAULT, bg));
    line.push(Span::new(
        truncate(middle, width.saturating_sub(line.width())),
        fg,
        bg,
        flags,
    ));

    if let Some(next) = next {
        let gap = width
            .saturating_sub(line.width())
            .saturating_sub(next.title.width() + 3);
        line.push(Span::plain(" ".repeat(gap), Rgba::TERMINAL_DEFAULT, bg));
        line.push(Span::plain(next.title, theme.text, bg));
        line.push(Span::plain(" →", theme.primary, bg));
    }

    line.pad_to(width, bg);
    line
}

// =============================================================================
// Panes
// =============================================================================

fn sidebar_pane(app: &AppState, width: usize, theme: &Theme) -> Vec<Line> {
    let bg = theme.background;
    let markers_only = width <= SIDEBAR_COLLAPSED_WIDTH;

    sidebar_rows(app)
        .into_iter()
        .map(|row| {
            let mut line = match row {
                SidebarRow::Category {
                    label,
                    expanded,
                    highlighted,
                    ..
                } => {
                    let marker = if expanded { "▾ " } else { "▸ " };
                    let fg = if highlighted { theme.primary } else { theme.text };
                    let flags = if highlighted { StyleFlags::BOLD } else { StyleFlags::empty() };
                    let text = if markers_only {
                        marker.trim_end().to_string()
                    } else {
                        format!("{marker}{}", truncate(&label, width - 3))
                    };
                    Line::new(vec![
                        Span::plain(" ", Rgba::TERMINAL_DEFAULT, bg),
                        Span::new(text, fg, bg, flags),
                    ])
                }
                SidebarRow::Child { label, active, .. } => {
                    let (prefix, fg, flags) = if active {
                        ("  › ", theme.primary, StyleFlags::BOLD)
                    } else {
                        ("    ", theme.text_muted, StyleFlags::empty())
                    };
                    Line::new(vec![
                        Span::plain(prefix, fg, bg),
                        Span::new(truncate(&label, width.saturating_sub(4)), fg, bg, flags),
                    ])
                }
            };
            line.pad_to(width, bg);
            line
        })
        .collect()
}

fn toc_pane(
    headings: &[Heading],
    active_heading: Option<&str>,
    width: usize,
    theme: &Theme,
) -> Vec<Line> {
    let bg = theme.background;
    let mut lines = Vec::new();

    let mut title = Line::new(vec![Span::new(
        format!(" {TOC_TITLE}"),
        theme.text,
        bg,
        StyleFlags::BOLD,
    )]);
    title.pad_to(width, bg);
    lines.push(title);

    let rows = toc_rows(headings, active_heading);
    if rows.is_empty() {
        let mut line = Line::new(vec![Span::new(
            format!(" {TOC_EMPTY}"),
            theme.text_muted,
            bg,
            StyleFlags::DIM,
        )]);
        line.pad_to(width, bg);
        lines.push(line);
        return lines;
    }

    for row in rows {
        let indent = if row.level >= 3 { "   " } else { " " };
        let (fg, flags) = if row.active {
            (theme.primary, StyleFlags::BOLD)
        } else {
            (theme.text_muted, StyleFlags::empty())
        };
        let marker = if row.active { "▸ " } else { "" };
        let text = truncate(&format!("{indent}{marker}{}", row.text), width);
        let mut line = Line::new(vec![Span::new(text, fg, bg, flags)]);
        line.pad_to(width, bg);
        lines.push(line);
    }
    lines
}

fn results_pane(search: &SearchState, width: usize, theme: &Theme) -> Vec<Line> {
    let bg = theme.background;
    let results = search.results();
    let mut lines = Vec::new();

    let mut title = Line::new(vec![Span::new(
        " Search results",
        theme.text,
        bg,
        StyleFlags::BOLD,
    )]);
    title.pad_to(width, bg);
    lines.push(title);

    if results.is_empty() {
        let mut line = Line::new(vec![Span::plain(" No matches", theme.text_muted, bg)]);
        line.pad_to(width, bg);
        lines.push(line);
    }

    let cursor = search.cursor();
    for (i, entry) in results.iter().enumerate() {
        let selected = i == cursor;
        let (fg, flags) = if selected {
            (theme.primary, StyleFlags::BOLD)
        } else {
            (theme.text, StyleFlags::empty())
        };
        let marker = if selected { "▸" } else { " " };
        let category = section(entry.id).map(|s| s.category).unwrap_or("");
        let mut line = Line::new(vec![
            Span::new(format!("{marker}{}", entry.title), fg, bg, flags),
            Span::plain(format!("  {category}"), theme.text_muted, bg),
        ]);
        line.pad_to(width, bg);
        lines.push(line);
    }

    let mut hint = Line::new(vec![Span::new(
        " ↑/↓ choose · enter open · esc close",
        theme.text_muted,
        bg,
        StyleFlags::DIM,
    )]);
    hint.pad_to(width, bg);
    lines.push(hint);
    lines
}

// =============================================================================
// Tests
// =============================================================================
