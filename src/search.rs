//! Search Index & Filter - client-side substring search over sections.
//!
//! The index is a static keyword table; matching is plain substring work
//! with no ranking. Results keep declaration order and are capped at
//! [`MAX_RESULTS`].
//!
//! Keyword matching direction is `keyword.contains(query)` - a query matches
//! a keyword it is a prefix/infix of ("wall" finds "wallet"), never the other
//! way around. Deliberate; do not symmetrize.

use spark_signals::{signal, Signal};

use crate::state::app::AppState;

/// Maximum number of results surfaced for a query.
pub const MAX_RESULTS: usize = 8;

/// A searchable section: title plus its keyword set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub keywords: &'static [&'static str],
}

/// Static search index, in declaration (= result) order.
pub const SEARCH_ENTRIES: &[SearchEntry] = &[
    SearchEntry { id: "introduction", title: "Introduction", keywords: &["quantzen", "sdk", "getting started", "quantum", "crypto", "blockchain"] },
    SearchEntry { id: "installation", title: "Installation", keywords: &["install", "npm", "setup", "package"] },
    SearchEntry { id: "quick-start", title: "Quick Start", keywords: &["quick", "start", "begin", "tutorial", "guide"] },
    SearchEntry { id: "wallet-overview", title: "Wallet Overview", keywords: &["wallet", "provider", "overview", "integration"] },
    SearchEntry { id: "wallet-integration", title: "Wallet Integration", keywords: &["wallet", "integrate", "connection", "provider"] },
    SearchEntry { id: "wallet-features", title: "Wallet Features", keywords: &["wallet", "features", "functionality", "capabilities"] },
    SearchEntry { id: "wallet-examples", title: "Wallet Examples", keywords: &["wallet", "examples", "code", "samples"] },
    SearchEntry { id: "dapp-overview", title: "dApp Overview", keywords: &["dapp", "application", "developer", "overview"] },
    SearchEntry { id: "dapp-integration", title: "dApp Integration", keywords: &["dapp", "integrate", "developer", "options"] },
    SearchEntry { id: "dapp-verification", title: "dApp Verification", keywords: &["dapp", "verify", "validation", "tools"] },
    SearchEntry { id: "how-it-works", title: "How It Works", keywords: &["technical", "architecture", "mechanism", "process"] },
    SearchEntry { id: "dual-signatures", title: "Dual Signatures", keywords: &["dual", "signature", "security", "crypto"] },
    SearchEntry { id: "key-management", title: "Key Management", keywords: &["key", "management", "storage", "security"] },
    SearchEntry { id: "security", title: "Security Architecture", keywords: &["security", "architecture", "protection", "safety"] },
    SearchEntry { id: "core-methods", title: "Core Methods", keywords: &["api", "methods", "functions", "core"] },
    SearchEntry { id: "wallet-adapters", title: "Wallet Adapters", keywords: &["adapter", "interface", "wallet", "api"] },
    SearchEntry { id: "storage-options", title: "Storage Options", keywords: &["storage", "data", "persistence", "options"] },
    SearchEntry { id: "configuration", title: "Configuration", keywords: &["config", "setup", "options", "settings"] },
    SearchEntry { id: "example-metamask", title: "MetaMask Example", keywords: &["metamask", "example", "sample", "code"] },
    SearchEntry { id: "example-phantom", title: "Phantom Example", keywords: &["phantom", "example", "sample", "code"] },
    SearchEntry { id: "example-custom", title: "Custom Wallet Example", keywords: &["custom", "wallet", "example", "sample"] },
    SearchEntry { id: "faq", title: "FAQ", keywords: &["faq", "questions", "answers", "help"] },
    SearchEntry { id: "troubleshooting", title: "Troubleshooting", keywords: &["troubleshoot", "debug", "issues", "problems"] },
    SearchEntry { id: "additional-resources", title: "Additional Resources", keywords: &["resources", "links", "additional", "extra"] },
];

/// Filter the index with a free-text query.
///
/// An entry matches when the lowercased query is a substring of its
/// lowercased title, of any keyword, or of its id. Empty and whitespace-only
/// queries match nothing.
pub fn filter(query: &str) -> Vec<&'static SearchEntry> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let q = query.to_lowercase();
    SEARCH_ENTRIES
        .iter()
        .filter(|entry| {
            entry.title.to_lowercase().contains(&q)
                || entry.keywords.iter().any(|k| k.contains(&q))
                || entry.id.contains(&q)
        })
        .take(MAX_RESULTS)
        .collect()
}

// =============================================================================
// Reactive search state
// =============================================================================

/// Search box state: the live query and input focus.
///
/// Results are recomputed from the query on read - the index is 24 entries,
/// a pass over it is cheaper than caching.
#[derive(Clone)]
pub struct SearchState {
    query: Signal<String>,
    focused: Signal<bool>,
    cursor: Signal<usize>,
}

impl SearchState {
    pub fn new() -> Self {
        Self {
            query: signal(String::new()),
            focused: signal(false),
            cursor: signal(0),
        }
    }

    pub fn query(&self) -> String {
        self.query.get()
    }

    /// Replace the query. The result cursor snaps back to the top - the
    /// old position is meaningless against a new result set.
    pub fn set_query(&self, query: impl Into<String>) {
        self.query.set(query.into());
        if self.cursor.get() != 0 {
            self.cursor.set(0);
        }
    }

    /// Index of the highlighted result.
    pub fn cursor(&self) -> usize {
        self.cursor.get()
    }

    /// Move the result cursor, clamped to the current result set.
    pub fn move_cursor(&self, delta: i32) {
        let len = self.results().len();
        if len == 0 {
            return;
        }
        let next = (self.cursor.get() as i32 + delta).clamp(0, len as i32 - 1) as usize;
        if next != self.cursor.get() {
            self.cursor.set(next);
        }
    }

    /// Whether the search input currently owns keyboard input.
    pub fn is_focused(&self) -> bool {
        self.focused.get()
    }

    pub fn focus(&self) {
        self.focused.set(true);
    }

    pub fn blur(&self) {
        self.focused.set(false);
    }

    /// Current results for the live query.
    pub fn results(&self) -> Vec<&'static SearchEntry> {
        filter(&self.query.get())
    }

    /// Whether the result panel is visible.
    ///
    /// Visible whenever there are results, and also while a focused box
    /// holds a query with no matches - the panel shows its empty state.
    pub fn panel_visible(&self) -> bool {
        if !self.results().is_empty() {
            return true;
        }
        self.is_focused() && !self.query.get().trim().is_empty()
    }

    /// Pick a result: navigate, clear the query, hide the panel.
    pub fn select(&self, app: &AppState, id: &str) {
        app.navigate(id);
        self.query.set(String::new());
        self.blur();
    }

    /// Submit the query (enter key): navigate to the result under the
    /// cursor, the first match when the cursor was never moved.
    ///
    /// Returns false when there is nothing to navigate to.
    pub fn submit(&self, app: &AppState) -> bool {
        let results = self.results();
        match results.get(self.cursor.get()).or_else(|| results.first()) {
            Some(entry) => {
                self.select(app, entry.id);
                true
            }
            None => false,
        }
    }
}

impl Default for SearchState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_and_whitespace_queries_match_nothing() {
        assert!(filter("").is_empty());
        assert!(filter("   ").is_empty());
        assert!(filter("\t\n").is_empty());
    }

    #[test]
    fn test_title_substring_match() {
        let results = filter("troubl");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "troubleshooting");
    }

    #[test]
    fn test_keyword_direction_is_keyword_contains_query() {
        // "wall" is inside the keyword "wallet", so it matches...
        let ids: Vec<_> = filter("wall").iter().map(|e| e.id).collect();
        assert!(ids.contains(&"wallet-overview"));

        // ...but a query longer than every keyword matches nothing by keyword.
        assert!(filter("wallet-provider-xyz").is_empty());
    }

    #[test]
    fn test_wallet_query_includes_wallet_keyword_sections() {
        let ids: Vec<_> = filter("wallet").iter().map(|e| e.id).collect();
        for expected in ["wallet-overview", "wallet-integration", "wallet-features"] {
            assert!(ids.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn test_id_substring_match() {
        let ids: Vec<_> = filter("dapp-ver").iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["dapp-verification"]);
    }

    #[test]
    fn test_results_capped_and_in_declaration_order() {
        // "a" matches nearly everything; cap applies.
        let results = filter("a");
        assert_eq!(results.len(), MAX_RESULTS);

        let positions: Vec<_> = results
            .iter()
            .map(|r| SEARCH_ENTRIES.iter().position(|e| e.id == r.id).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_filter_is_idempotent() {
        let a: Vec<_> = filter("key").iter().map(|e| e.id).collect();
        let b: Vec<_> = filter("key").iter().map(|e| e.id).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_case_insensitive() {
        let ids: Vec<_> = filter("METAMASK").iter().map(|e| e.id).collect();
        assert!(ids.contains(&"example-metamask"));
    }

    #[test]
    fn test_select_navigates_and_clears() {
        let app = AppState::new();
        let search = SearchState::new();

        search.set_query("phantom");
        assert!(search.panel_visible());

        let id = search.results()[0].id;
        search.select(&app, id);

        assert_eq!(app.active_section(), "example-phantom");
        assert_eq!(search.query(), "");
        assert!(!search.panel_visible());
    }

    #[test]
    fn test_submit_navigates_to_first_match() {
        let app = AppState::new();
        let search = SearchState::new();

        search.set_query("wallet");
        assert!(search.submit(&app));
        assert_eq!(app.active_section(), "wallet-overview");

        search.set_query("zzzz");
        assert!(!search.submit(&app));
        assert_eq!(app.active_section(), "wallet-overview");
    }

    #[test]
    fn test_cursor_moves_within_results_and_clamps() {
        let search = SearchState::new();
        search.set_query("wallet");
        let len = search.results().len();
        assert!(len > 2);

        // Clamped at the top.
        search.move_cursor(-1);
        assert_eq!(search.cursor(), 0);

        search.move_cursor(1);
        search.move_cursor(1);
        assert_eq!(search.cursor(), 2);

        // Clamped at the bottom.
        search.move_cursor(100);
        assert_eq!(search.cursor(), len - 1);
    }

    #[test]
    fn test_cursor_resets_when_query_changes() {
        let search = SearchState::new();
        search.set_query("wallet");
        search.move_cursor(2);
        assert_eq!(search.cursor(), 2);

        search.set_query("walle");
        assert_eq!(search.cursor(), 0);
    }

    #[test]
    fn test_submit_navigates_to_cursor_entry() {
        let app = AppState::new();
        let search = SearchState::new();

        search.set_query("wallet");
        let second = search.results()[1].id;
        search.move_cursor(1);

        assert!(search.submit(&app));
        assert_eq!(app.active_section(), second);
        assert_eq!(search.query(), "");
    }

    #[test]
    fn test_cursor_ignores_empty_results() {
        let search = SearchState::new();
        search.set_query("zzzz");
        search.move_cursor(1);
        assert_eq!(search.cursor(), 0);
    }
}
