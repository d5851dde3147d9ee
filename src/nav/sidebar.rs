//! Section Navigator - sidebar tree derivation and activation logic.
//!
//! Rendering is elsewhere; this module decides what the navigator shows
//! (rows) and what activating a node does (navigation + expansion).

use crate::registry::sections::{category, section, CATEGORIES};
use crate::state::app::AppState;

/// One renderable navigator row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarRow {
    Category {
        id: &'static str,
        label: &'static str,
        expanded: bool,
        /// Highlighted when it is active itself or owns the active section.
        highlighted: bool,
    },
    Child {
        id: &'static str,
        label: &'static str,
        active: bool,
    },
}

/// Derive the navigator rows for the current state.
///
/// Collapsed (icon-only) mode suppresses children entirely, regardless of
/// expansion state.
pub fn sidebar_rows(app: &AppState) -> Vec<SidebarRow> {
    let active = app.active_section();
    let collapsed = app.sidebar_collapsed();
    let mut rows = Vec::new();

    for cat in CATEGORIES {
        let has_active_child = cat.children.contains(&active.as_str());
        let is_landing_active = cat.landing == Some(active.as_str());
        let expanded = app.is_expanded(cat.id);

        rows.push(SidebarRow::Category {
            id: cat.id,
            label: cat.label,
            expanded,
            highlighted: has_active_child || is_landing_active,
        });

        if collapsed || !expanded {
            continue;
        }

        for child in cat.children {
            let label = section(child).map(|s| s.title).unwrap_or(child);
            rows.push(SidebarRow::Child {
                id: child,
                label,
                active: active == *child,
            });
        }
    }

    rows
}

/// Activate a category node.
///
/// Navigates to the category's landing page when it has one, otherwise to
/// its first child. Expansion toggles on the same activation, but
/// navigation re-expands the owning category, so the net effect of
/// activating a category is that it ends up expanded.
pub fn activate_category(app: &AppState, category_id: &str) {
    let Some(cat) = category(category_id) else {
        return;
    };

    if !cat.children.is_empty() {
        app.toggle_menu(cat.id);
    }

    let target = match cat.landing {
        Some(landing) => landing,
        None => match cat.children.first() {
            Some(first) => first,
            None => cat.id,
        },
    };

    // Landing pages are not children of their category, so the auto-expand
    // in navigate() does not fire for them; pin the expansion here.
    app.navigate(target);
    if cat.landing.is_some() && !cat.children.is_empty() && !app.is_expanded(cat.id) {
        app.expand_menu(cat.id);
    }

    app.close_mobile_menu();
}

/// Activate a leaf section from the navigator.
pub fn activate_section(app: &AppState, section_id: &str) {
    app.navigate(section_id);
    app.close_mobile_menu();
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_without_landing_goes_to_first_child_and_expands() {
        let app = AppState::new();
        assert!(!app.is_expanded("technical"));

        activate_category(&app, "technical");

        assert_eq!(app.active_section(), "how-it-works");
        assert!(app.is_expanded("technical"));
    }

    #[test]
    fn test_category_with_landing_goes_to_landing() {
        let app = AppState::new();
        activate_category(&app, "api-reference");

        assert_eq!(app.active_section(), "api-reference");
        assert!(app.is_expanded("api-reference"));
    }

    #[test]
    fn test_activating_expanded_category_keeps_it_expanded() {
        let app = AppState::new();
        activate_category(&app, "examples");
        assert!(app.is_expanded("examples"));

        // Activate again: toggle collapses, navigation re-expands.
        activate_category(&app, "examples");
        assert!(app.is_expanded("examples"));
        assert_eq!(app.active_section(), "example-metamask");
    }

    #[test]
    fn test_rows_hide_children_when_collapsed_or_unexpanded() {
        let app = AppState::new();
        app.navigate("faq"); // expands "resources"

        let child_count = |rows: &[SidebarRow]| {
            rows.iter()
                .filter(|r| matches!(r, SidebarRow::Child { .. }))
                .count()
        };

        // getting-started (3) + resources (3) are expanded.
        let rows = sidebar_rows(&app);
        assert_eq!(child_count(&rows), 6);

        // Icon-only mode suppresses all children, expansion untouched.
        app.toggle_sidebar();
        let rows = sidebar_rows(&app);
        assert_eq!(child_count(&rows), 0);
        assert!(app.is_expanded("resources"));
    }

    #[test]
    fn test_active_child_highlights_row_and_category() {
        let app = AppState::new();
        app.navigate("dual-signatures");
        let rows = sidebar_rows(&app);

        let cat_highlighted = rows.iter().any(|r| {
            matches!(r, SidebarRow::Category { id: "technical", highlighted: true, .. })
        });
        let child_active = rows.iter().any(|r| {
            matches!(r, SidebarRow::Child { id: "dual-signatures", active: true, .. })
        });

        assert!(cat_highlighted);
        assert!(child_active);
    }

    #[test]
    fn test_landing_page_highlights_its_category() {
        let app = AppState::new();
        app.navigate("api-reference");
        let rows = sidebar_rows(&app);

        assert!(rows.iter().any(|r| {
            matches!(r, SidebarRow::Category { id: "api-reference", highlighted: true, .. })
        }));
    }

    #[test]
    fn test_activation_closes_mobile_menu() {
        let app = AppState::new();
        app.toggle_mobile_menu();
        assert!(app.mobile_menu_open());

        activate_section(&app, "faq");
        assert!(!app.mobile_menu_open());

        app.toggle_mobile_menu();
        activate_category(&app, "examples");
        assert!(!app.mobile_menu_open());
    }

    #[test]
    fn test_unknown_category_is_ignored() {
        let app = AppState::new();
        activate_category(&app, "nonexistent");
        assert_eq!(app.active_section(), "introduction");
    }
}
