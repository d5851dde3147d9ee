//! Section Index - static section metadata and linear reading order.
//!
//! Sections are defined once at compile time. The order below drives
//! prev/next navigation; the metadata table drives breadcrumbs and titles.

use crate::types::Section;

/// Section rendered when an unknown id is requested.
pub const DEFAULT_SECTION: &str = "introduction";

/// Fixed linear reading order for prev/next traversal.
///
/// Every id the UI references appears exactly once. `api-reference` is the
/// composite landing page for the API category and sits ahead of its
/// children in the reading order.
pub const SECTION_ORDER: &[&str] = &[
    "introduction",
    "installation",
    "quick-start",
    "wallet-overview",
    "wallet-integration",
    "wallet-features",
    "wallet-examples",
    "dapp-overview",
    "dapp-integration",
    "dapp-verification",
    "how-it-works",
    "dual-signatures",
    "key-management",
    "security",
    "api-reference",
    "core-methods",
    "wallet-adapters",
    "storage-options",
    "configuration",
    "example-metamask",
    "example-phantom",
    "example-custom",
    "faq",
    "troubleshooting",
    "additional-resources",
];

/// Static section metadata: id, display title, category.
pub const SECTIONS: &[Section] = &[
    Section { id: "introduction", title: "Introduction", category: "Getting Started" },
    Section { id: "installation", title: "Installation", category: "Getting Started" },
    Section { id: "quick-start", title: "Quick Start", category: "Getting Started" },
    Section { id: "wallet-overview", title: "Overview", category: "Wallet Providers" },
    Section { id: "wallet-integration", title: "Integration Guide", category: "Wallet Providers" },
    Section { id: "wallet-features", title: "Available Features", category: "Wallet Providers" },
    Section { id: "wallet-examples", title: "Code Examples", category: "Wallet Providers" },
    Section { id: "dapp-overview", title: "Overview", category: "dApp Developers" },
    Section { id: "dapp-integration", title: "Integration Options", category: "dApp Developers" },
    Section { id: "dapp-verification", title: "Verification Tools", category: "dApp Developers" },
    Section { id: "how-it-works", title: "How It Works", category: "Technical" },
    Section { id: "dual-signatures", title: "Dual Signatures", category: "Technical" },
    Section { id: "key-management", title: "Key Management", category: "Technical" },
    Section { id: "security", title: "Security Architecture", category: "Technical" },
    Section { id: "api-reference", title: "API Reference", category: "API Reference" },
    Section { id: "core-methods", title: "Core Methods", category: "API Reference" },
    Section { id: "wallet-adapters", title: "Wallet Adapters", category: "API Reference" },
    Section { id: "storage-options", title: "Storage Options", category: "API Reference" },
    Section { id: "configuration", title: "Configuration", category: "API Reference" },
    Section { id: "example-metamask", title: "MetaMask", category: "Examples" },
    Section { id: "example-phantom", title: "Phantom", category: "Examples" },
    Section { id: "example-custom", title: "Custom Wallet", category: "Examples" },
    Section { id: "faq", title: "FAQ", category: "Resources" },
    Section { id: "troubleshooting", title: "Troubleshooting", category: "Resources" },
    Section { id: "additional-resources", title: "Additional Resources", category: "Resources" },
];

/// A collapsible navigator node grouping related sections.
///
/// `landing` is the standalone page shown when the category itself is
/// activated; categories without one navigate to their first child.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub id: &'static str,
    pub label: &'static str,
    pub landing: Option<&'static str>,
    pub children: &'static [&'static str],
}

/// Navigator tree, in display order.
pub const CATEGORIES: &[Category] = &[
    Category {
        id: "getting-started",
        label: "Getting Started",
        landing: None,
        children: &["introduction", "installation", "quick-start"],
    },
    Category {
        id: "wallet-providers",
        label: "For Wallet Providers",
        landing: None,
        children: &["wallet-overview", "wallet-integration", "wallet-features", "wallet-examples"],
    },
    Category {
        id: "dapp-developers",
        label: "For dApp Developers",
        landing: None,
        children: &["dapp-overview", "dapp-integration", "dapp-verification"],
    },
    Category {
        id: "technical",
        label: "Technical",
        landing: None,
        children: &["how-it-works", "dual-signatures", "key-management", "security"],
    },
    Category {
        id: "api-reference",
        label: "API Reference",
        landing: Some("api-reference"),
        children: &["core-methods", "wallet-adapters", "storage-options", "configuration"],
    },
    Category {
        id: "examples",
        label: "Examples",
        landing: None,
        children: &["example-metamask", "example-phantom", "example-custom"],
    },
    Category {
        id: "resources",
        label: "Resources",
        landing: None,
        children: &["faq", "troubleshooting", "additional-resources"],
    },
];

/// Look up a section by id.
pub fn section(id: &str) -> Option<&'static Section> {
    SECTIONS.iter().find(|s| s.id == id)
}

/// Look up a category by id.
pub fn category(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id == id)
}

/// The category whose children include the given section.
pub fn category_of(section_id: &str) -> Option<&'static Category> {
    CATEGORIES
        .iter()
        .find(|c| c.children.contains(&section_id))
}

/// Position of a section in the reading order, if it is part of it.
pub fn order_index(id: &str) -> Option<usize> {
    SECTION_ORDER.iter().position(|s| *s == id)
}

/// Resolve an id to a known section id, falling back to the default.
pub fn resolve_id(id: &str) -> &'static str {
    section(id).map(|s| s.id).unwrap_or(DEFAULT_SECTION)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_order_has_no_duplicates() {
        let unique: HashSet<_> = SECTION_ORDER.iter().collect();
        assert_eq!(unique.len(), SECTION_ORDER.len());
    }

    #[test]
    fn test_every_ordered_id_has_metadata() {
        for id in SECTION_ORDER {
            assert!(section(id).is_some(), "missing metadata for {id}");
        }
    }

    #[test]
    fn test_default_section_is_known() {
        assert!(section(DEFAULT_SECTION).is_some());
        assert_eq!(order_index(DEFAULT_SECTION), Some(0));
    }

    #[test]
    fn test_lookup() {
        let s = section("dual-signatures").unwrap();
        assert_eq!(s.title, "Dual Signatures");
        assert_eq!(s.category, "Technical");

        assert!(section("not-a-section").is_none());
    }

    #[test]
    fn test_resolve_id_falls_back() {
        assert_eq!(resolve_id("security"), "security");
        assert_eq!(resolve_id("not-a-section"), DEFAULT_SECTION);
    }

    #[test]
    fn test_category_children_are_known_sections() {
        for cat in CATEGORIES {
            assert!(!cat.children.is_empty(), "{} has no children", cat.id);
            for child in cat.children {
                assert!(section(child).is_some(), "unknown child {child}");
            }
            if let Some(landing) = cat.landing {
                assert!(section(landing).is_some(), "unknown landing {landing}");
            }
        }
    }

    #[test]
    fn test_category_of() {
        assert_eq!(category_of("faq").unwrap().id, "resources");
        assert_eq!(category_of("core-methods").unwrap().id, "api-reference");
        // The landing page itself is not a child of its category.
        assert!(category_of("api-reference").is_none());
        assert!(category_of("nope").is_none());
    }
}
