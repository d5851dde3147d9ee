//! Breadcrumb derivation - pure function of the active section.
//!
//! Path: fixed root label, the section's category, then its title (marked
//! active). Unknown sections fall back to a placeholder pair rather than
//! erroring.

use crate::registry::sections::section;
use crate::types::BreadcrumbItem;

/// Root label of every breadcrumb path.
pub const ROOT_LABEL: &str = "Documentation";

/// Placeholder shown for ids with no metadata.
const UNKNOWN: (&str, &str) = ("Documentation", "Unknown");

/// Breadcrumb path for the active section.
pub fn breadcrumb(active_id: &str) -> Vec<BreadcrumbItem> {
    let (category, title) = match section(active_id) {
        Some(s) => (s.category, s.title),
        None => UNKNOWN,
    };

    vec![
        BreadcrumbItem { label: ROOT_LABEL.to_string(), active: false },
        BreadcrumbItem { label: category.to_string(), active: false },
        BreadcrumbItem { label: title.to_string(), active: true },
    ]
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_section() {
        let path = breadcrumb("dual-signatures");
        let labels: Vec<_> = path.iter().map(|i| i.label.as_str()).collect();

        assert_eq!(labels, vec!["Documentation", "Technical", "Dual Signatures"]);
        assert!(path[2].active);
        assert!(!path[0].active && !path[1].active);
    }

    #[test]
    fn test_unknown_section_uses_placeholder() {
        let path = breadcrumb("no-such-id");
        let labels: Vec<_> = path.iter().map(|i| i.label.as_str()).collect();

        assert_eq!(labels, vec!["Documentation", "Documentation", "Unknown"]);
    }

    #[test]
    fn test_path_is_always_three_items() {
        for id in crate::registry::SECTION_ORDER {
            assert_eq!(breadcrumb(id).len(), 3);
        }
    }
}
