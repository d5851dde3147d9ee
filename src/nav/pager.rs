//! Prev/Next derivation from the section order.
//!
//! Pure lookups: neighbors of the active section's index in
//! [`SECTION_ORDER`]. Boundaries and ids outside the order have no
//! neighbors.

use crate::registry::sections::{order_index, section, SECTION_ORDER};
use crate::types::PageLink;

fn link_at(index: usize) -> Option<PageLink> {
    let id = SECTION_ORDER.get(index)?;
    let meta = section(id)?;
    Some(PageLink { id: meta.id, title: meta.title })
}

/// The section before the given one, if any.
pub fn previous_page(active_id: &str) -> Option<PageLink> {
    let i = order_index(active_id)?;
    if i == 0 {
        return None;
    }
    link_at(i - 1)
}

/// The section after the given one, if any.
pub fn next_page(active_id: &str) -> Option<PageLink> {
    let i = order_index(active_id)?;
    link_at(i + 1)
}

// =============================================================================
// Tests
// =============================================================================
