//! Terminal writer - puts composed frames on screen.
//!
//! Rows are rendered to ANSI strings and diffed against the previous
//! frame; only changed rows are rewritten. This keeps redraws cheap when
//! a single signal change touches one pane.

use std::io::{self, Stdout, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::queue;
use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{
    self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::Command;

use crate::types::{Rgba, StyleFlags};

use super::frame::Frame;
use super::line::Line;

/// Owns stdout and the previous frame's rendered rows.
pub struct Screen {
    out: Stdout,
    previous: Vec<String>,
    active: bool,
}

impl Screen {
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            previous: Vec::new(),
            active: false,
        }
    }

    /// Enter fullscreen: raw mode, alternate screen, hidden cursor.
    pub fn enter(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        queue!(self.out, EnterAlternateScreen, Hide, Clear(ClearType::All))?;
        self.out.flush()?;
        self.active = true;
        Ok(())
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn leave(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        queue!(self.out, Show, LeaveAlternateScreen)?;
        self.out.flush()?;
        terminal::disable_raw_mode()
    }

    /// Current terminal size as (width, height).
    pub fn size() -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Draw a frame, rewriting only rows that changed.
    pub fn draw(&mut self, frame: &Frame) -> io::Result<()> {
        let rows: Vec<String> = frame.lines.iter().map(render_line).collect();

        for (y, row) in rows.iter().enumerate() {
            if self.previous.get(y) != Some(row) {
                queue!(
                    self.out,
                    MoveTo(0, y as u16),
                    Clear(ClearType::UntilNewLine),
                    Print(row)
                )?;
            }
        }
        // A shrinking frame leaves stale rows behind.
        for y in rows.len()..self.previous.len() {
            queue!(self.out, MoveTo(0, y as u16), Clear(ClearType::UntilNewLine))?;
        }

        self.out.flush()?;
        self.previous = rows;
        Ok(())
    }

    /// Drop the previous-frame cache, forcing a full rewrite next draw.
    pub fn invalidate(&mut self) {
        self.previous.clear();
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        // Best effort restore.
        let _ = self.leave();
    }
}

// =============================================================================
// ANSI rendering
// =============================================================================

fn to_color(color: Rgba) -> Color {
    if color.is_terminal_default() {
        Color::Reset
    } else {
        Color::Rgb {
            r: color.r as u8,
            g: color.g as u8,
            b: color.b as u8,
        }
    }
}

fn render_line(line: &Line) -> String {
    let mut out = String::new();
    for span in &line.spans {
        let _ = SetForegroundColor(to_color(span.fg)).write_ansi(&mut out);
        let _ = SetBackgroundColor(to_color(span.bg)).write_ansi(&mut out);
        if span.flags.contains(StyleFlags::BOLD) {
            let _ = SetAttribute(Attribute::Bold).write_ansi(&mut out);
        }
        if span.flags.contains(StyleFlags::DIM) {
            let _ = SetAttribute(Attribute::Dim).write_ansi(&mut out);
        }
        if span.flags.contains(StyleFlags::ITALIC) {
            let _ = SetAttribute(Attribute::Italic).write_ansi(&mut out);
        }
        if span.flags.contains(StyleFlags::UNDERLINE) {
            let _ = SetAttribute(Attribute::Underlined).write_ansi(&mut out);
        }
        out.push_str(&span.text);
        let _ = SetAttribute(Attribute::Reset).write_ansi(&mut out);
    }
    let _ = ResetColor.write_ansi(&mut out);
    out
}

// =============================================================================
// Tests
// =============================================================================
