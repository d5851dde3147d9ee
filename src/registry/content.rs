//! Content Registry - explicit mapping from section id to content provider.
//!
//! The mapping is a static table checked by tests against the section index,
//! not a naming convention. Unknown ids resolve to the introduction so the
//! content pane never renders empty.

use crate::types::{Block, Heading};

use super::docs;
#[cfg(test)]
use super::sections::SECTION_ORDER;

type Provider = fn() -> Vec<Block>;

/// Static id -> provider table. One entry per section in the index.
const PROVIDERS: &[(&str, Provider)] = &[
    ("introduction", docs::introduction),
    ("installation", docs::installation),
    ("quick-start", docs::quick_start),
    ("wallet-overview", docs::wallet_overview),
    ("wallet-integration", docs::wallet_integration),
    ("wallet-features", docs::wallet_features),
    ("wallet-examples", docs::wallet_examples),
    ("dapp-overview", docs::dapp_overview),
    ("dapp-integration", docs::dapp_integration),
    ("dapp-verification", docs::dapp_verification),
    ("how-it-works", docs::how_it_works),
    ("dual-signatures", docs::dual_signatures),
    ("key-management", docs::key_management),
    ("security", docs::security),
    ("api-reference", docs::api_reference),
    ("core-methods", docs::core_methods),
    ("wallet-adapters", docs::wallet_adapters),
    ("storage-options", docs::storage_options),
    ("configuration", docs::configuration),
    ("example-metamask", docs::example_metamask),
    ("example-phantom", docs::example_phantom),
    ("example-custom", docs::example_custom),
    ("faq", docs::faq),
    ("troubleshooting", docs::troubleshooting),
    ("additional-resources", docs::additional_resources),
];

/// Look up the provider for a section id.
pub fn provider(id: &str) -> Option<Provider> {
    PROVIDERS
        .iter()
        .find(|(pid, _)| *pid == id)
        .map(|(_, f)| *f)
}

/// Content blocks for a section.
///
/// Unknown ids silently fall back to the introduction - the content pane
/// must never be empty.
pub fn content_for(id: &str) -> Vec<Block> {
    match provider(id) {
        Some(f) => f(),
        None => docs::introduction(),
    }
}

/// Extract the heading list from rendered content.
///
/// This is the explicit content-change notification: whenever the active
/// section's blocks change, the caller re-derives headings from the blocks
/// instead of scanning rendered output.
pub fn headings_of(blocks: &[Block]) -> Vec<Heading> {
    blocks
        .iter()
        .filter_map(|b| match b {
            Block::Heading { id, text, level } => Some(Heading {
                id: (*id).to_string(),
                text: (*text).to_string(),
                level: *level,
            }),
            _ => None,
        })
        .collect()
}

// =============================================================================
// Tests
// =============================================================================
