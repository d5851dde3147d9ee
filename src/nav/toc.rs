//! Table of contents ("On This Page") derivation.
//!
//! Pure view-model: headings of the current content plus the scroll
//! tracker's active heading. An empty heading list is valid - the panel
//! shows its empty state.

use crate::types::Heading;

/// Panel title.
pub const TOC_TITLE: &str = "On This Page";

/// Empty-state row text.
pub const TOC_EMPTY: &str = "No sections found";

/// One renderable TOC row. Level-3 headings render indented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TocRow {
    pub id: String,
    pub text: String,
    pub level: u8,
    pub active: bool,
}

/// Derive TOC rows from the current headings and active heading.
pub fn toc_rows(headings: &[Heading], active_heading: Option<&str>) -> Vec<TocRow> {
    headings
        .iter()
        .map(|h| TocRow {
            id: h.id.clone(),
            text: h.text.clone(),
            level: h.level,
            active: active_heading == Some(h.id.as_str()),
        })
        .collect()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{content_for, headings_of};

    #[test]
    fn test_rows_mirror_headings_in_order() {
        let headings = headings_of(&content_for("wallet-integration"));
        let rows = toc_rows(&headings, Some("step-3"));

        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].id, "step-1");
        assert!(rows[2].active);
        assert_eq!(rows.iter().filter(|r| r.active).count(), 1);
    }

    #[test]
    fn test_no_active_heading() {
        let headings = headings_of(&content_for("faq"));
        let rows = toc_rows(&headings, None);
        assert!(rows.iter().all(|r| !r.active));
    }

    #[test]
    fn test_empty_headings_produce_no_rows() {
        let headings = headings_of(&content_for("installation"));
        assert!(toc_rows(&headings, None).is_empty());
    }
}
