//! Scroll Tracker - maps the scroll position to the section and heading
//! currently being read.
//!
//! Positions are measured in rows from the top of the document; on every
//! scroll tick they are compared against a threshold line, a fixed offset
//! from the top of the viewport. The tick handler is allocation-free and
//! never writes state that has not changed.

use spark_signals::{signal, Signal};

use super::app::AppState;

/// Default threshold line, in rows below the viewport top.
pub const DEFAULT_THRESHOLD: i32 = 3;

/// Document-space extent of one rendered section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSpan {
    pub id: String,
    pub top: i32,
    pub bottom: i32,
}

/// Document-space position of one rendered heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingMark {
    pub id: String,
    pub top: i32,
}

// =============================================================================
// Pure selection
// =============================================================================

/// The section whose box straddles the threshold line.
///
/// `tops` are viewport-relative (document top minus scroll offset). When
/// several spans straddle the line the last one in document order wins.
pub fn current_section(spans: &[SectionSpan], scroll_y: i32, threshold: i32) -> Option<&str> {
    let mut current = None;
    for span in spans {
        let top = span.top - scroll_y;
        let bottom = span.bottom - scroll_y;
        if top <= threshold && bottom >= threshold {
            current = Some(span.id.as_str());
        }
    }
    current
}

/// The deepest heading the reader has scrolled past.
///
/// Walks the marks backward in document order and picks the last one whose
/// top edge sits at or above the threshold line. Above the first heading
/// nothing is selected.
pub fn current_heading(marks: &[HeadingMark], scroll_y: i32, threshold: i32) -> Option<&str> {
    marks
        .iter()
        .rev()
        .find(|mark| mark.top - scroll_y <= threshold)
        .map(|mark| mark.id.as_str())
}

// =============================================================================
// Tracker
// =============================================================================

/// Owns the registered marker sets and the active-heading signal.
///
/// Marker sets must be re-registered via [`ScrollTracker::set_content`]
/// whenever the content pane renders a different section - headings belong
/// to whichever content is currently on screen.
pub struct ScrollTracker {
    threshold: i32,
    sections: Vec<SectionSpan>,
    headings: Vec<HeadingMark>,
    active_heading: Signal<Option<String>>,
}

impl ScrollTracker {
    pub fn new(threshold: i32) -> Self {
        Self {
            threshold,
            sections: Vec::new(),
            headings: Vec::new(),
            active_heading: signal(None),
        }
    }

    /// Replace the registered marker sets after a content change.
    ///
    /// Clears the heading highlight; the next scroll tick recomputes it
    /// against the new marks.
    pub fn set_content(&mut self, sections: Vec<SectionSpan>, headings: Vec<HeadingMark>) {
        self.sections = sections;
        self.headings = headings;
        if self.active_heading.get().is_some() {
            self.active_heading.set(None);
        }
    }

    pub fn active_heading(&self) -> Option<String> {
        self.active_heading.get()
    }

    /// Clone of the active-heading signal for reactive subscribers.
    pub fn heading_signal(&self) -> Signal<Option<String>> {
        self.active_heading.clone()
    }

    /// Scroll tick: synchronize active section and heading with `scroll_y`.
    ///
    /// Each signal is written at most once per tick, and only on change.
    pub fn on_scroll(&self, app: &AppState, scroll_y: i32) {
        if let Some(id) = current_section(&self.sections, scroll_y, self.threshold) {
            if app.active_section() != id {
                app.navigate(id);
            }
        }

        let heading = current_heading(&self.headings, scroll_y, self.threshold)
            .map(str::to_string);
        if self.active_heading.get() != heading {
            self.active_heading.set(heading);
        }
    }
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn span(id: &str, top: i32, bottom: i32) -> SectionSpan {
        SectionSpan { id: id.into(), top, bottom }
    }

    fn mark(id: &str, top: i32) -> HeadingMark {
        HeadingMark { id: id.into(), top }
    }

    #[test]
    fn test_section_straddling_threshold_is_current() {
        let spans = vec![span("a", 0, 100), span("b", 101, 300)];

        assert_eq!(current_section(&spans, 0, 150), Some("b"));
        assert_eq!(current_section(&spans, 0, 50), Some("a"));
    }

    #[test]
    fn test_no_section_straddles() {
        // Scrolled far past everything.
        let spans = vec![span("a", 0, 100)];
        assert_eq!(current_section(&spans, 500, 150), None);
    }

    #[test]
    fn test_last_straddling_section_wins() {
        // Overlapping spans: document order decides.
        let spans = vec![span("a", 0, 200), span("b", 100, 300)];
        assert_eq!(current_section(&spans, 0, 150), Some("b"));
    }

    #[test]
    fn test_heading_selection_at_threshold() {
        // Headings at 100, 400, 800; scrolled so they read -50, 250, 650.
        let marks = vec![mark("h1", 100), mark("h2", 400), mark("h3", 800)];
        let scroll_y = 150;

        // Largest viewport position <= 150 is -50 (the first heading).
        assert_eq!(current_heading(&marks, scroll_y, 150), Some("h1"));

        // Scroll further: second heading crosses the line.
        assert_eq!(current_heading(&marks, 300, 150), Some("h2"));
        assert_eq!(current_heading(&marks, 700, 150), Some("h3"));
    }

    #[test]
    fn test_no_heading_above_first() {
        let marks = vec![mark("h1", 200), mark("h2", 400)];
        assert_eq!(current_heading(&marks, 0, 150), None);
    }

    #[test]
    fn test_tracker_updates_active_section_once() {
        let app = AppState::new();
        let mut tracker = ScrollTracker::new(150);
        tracker.set_content(
            vec![span("introduction", 0, 100), span("installation", 101, 400)],
            vec![],
        );

        tracker.on_scroll(&app, 0);
        assert_eq!(app.active_section(), "introduction");

        tracker.on_scroll(&app, 200);
        assert_eq!(app.active_section(), "installation");

        // Same position again: no change (navigate guards redundant writes).
        tracker.on_scroll(&app, 200);
        assert_eq!(app.active_section(), "installation");
    }

    #[test]
    fn test_tracker_heading_signal() {
        let app = AppState::new();
        let mut tracker = ScrollTracker::new(3);
        tracker.set_content(vec![], vec![mark("setup", 10), mark("usage", 30)]);

        tracker.on_scroll(&app, 0);
        assert_eq!(tracker.active_heading(), None);

        tracker.on_scroll(&app, 12);
        assert_eq!(tracker.active_heading().as_deref(), Some("setup"));

        tracker.on_scroll(&app, 40);
        assert_eq!(tracker.active_heading().as_deref(), Some("usage"));
    }

    #[test]
    fn test_set_content_clears_heading() {
        let app = AppState::new();
        let mut tracker = ScrollTracker::new(3);
        tracker.set_content(vec![], vec![mark("setup", 0)]);

        tracker.on_scroll(&app, 5);
        assert!(tracker.active_heading().is_some());

        // Section switch: new marks, highlight resets.
        tracker.set_content(vec![], vec![mark("other", 100)]);
        assert_eq!(tracker.active_heading(), None);
    }
}
