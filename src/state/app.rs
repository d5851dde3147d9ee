//! Application state - the single source of truth for the layout shell.
//!
//! One `AppState` is constructed at startup and passed down to every view.
//! Children read through accessors and mutate through methods; nothing here
//! is ambient or thread-local, so tests can build isolated instances.

use spark_signals::{signal, Signal};

use crate::error::DocsError;
use crate::registry::sections::{category_of, resolve_id, DEFAULT_SECTION};
use crate::storage::{Storage, THEME_KEY};

/// Top-level UI state.
///
/// Invariant: `active_section` always resolves to known content - unknown
/// ids are accepted but the content pane falls back to the introduction.
#[derive(Clone)]
pub struct AppState {
    active_section: Signal<String>,
    sidebar_collapsed: Signal<bool>,
    mobile_menu_open: Signal<bool>,
    dark_mode: Signal<bool>,
    expanded_menus: Signal<Vec<String>>,
    status: Signal<Option<String>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            active_section: signal(DEFAULT_SECTION.to_string()),
            sidebar_collapsed: signal(false),
            mobile_menu_open: signal(false),
            dark_mode: signal(false),
            // The first category starts expanded so the navigator is not a
            // wall of closed nodes on first launch.
            expanded_menus: signal(vec!["getting-started".to_string()]),
            status: signal(None),
        }
    }

    /// Build state with the theme preference restored from storage.
    ///
    /// Absent or unreadable preference defaults to light.
    pub fn with_storage(storage: &dyn Storage) -> Self {
        let state = Self::new();
        let dark = storage.get(THEME_KEY).as_deref() == Some("dark");
        state.dark_mode.set(dark);
        state
    }

    // =========================================================================
    // Active section
    // =========================================================================

    pub fn active_section(&self) -> String {
        self.active_section.get()
    }

    /// Navigate to a section.
    ///
    /// Writes the signal only on change, and auto-expands the owning
    /// category so the navigator always shows where the reader is.
    pub fn navigate(&self, id: &str) {
        if self.active_section.get() != id {
            self.active_section.set(id.to_string());
        }
        if let Some(cat) = category_of(id) {
            self.expand_menu(cat.id);
        }
    }

    /// The id content is actually rendered for (fallback applied).
    pub fn resolved_section(&self) -> &'static str {
        resolve_id(&self.active_section.get())
    }

    // =========================================================================
    // Sidebar / overlay menu
    // =========================================================================

    pub fn sidebar_collapsed(&self) -> bool {
        self.sidebar_collapsed.get()
    }

    pub fn toggle_sidebar(&self) {
        self.sidebar_collapsed.set(!self.sidebar_collapsed.get());
    }

    pub fn mobile_menu_open(&self) -> bool {
        self.mobile_menu_open.get()
    }

    pub fn toggle_mobile_menu(&self) {
        self.mobile_menu_open.set(!self.mobile_menu_open.get());
    }

    pub fn close_mobile_menu(&self) {
        if self.mobile_menu_open.get() {
            self.mobile_menu_open.set(false);
        }
    }

    // =========================================================================
    // Menu expansion
    // =========================================================================

    pub fn expanded_menus(&self) -> Vec<String> {
        self.expanded_menus.get()
    }

    pub fn is_expanded(&self, category_id: &str) -> bool {
        self.expanded_menus.get().iter().any(|id| id == category_id)
    }

    /// Expand a category. Idempotent - expansion is monotonic until the
    /// user explicitly collapses it.
    pub fn expand_menu(&self, category_id: &str) {
        let mut menus = self.expanded_menus.get();
        if !menus.iter().any(|id| id == category_id) {
            menus.push(category_id.to_string());
            self.expanded_menus.set(menus);
        }
    }

    /// User-driven expand/collapse toggle.
    pub fn toggle_menu(&self, category_id: &str) {
        let mut menus = self.expanded_menus.get();
        match menus.iter().position(|id| id == category_id) {
            Some(i) => {
                menus.remove(i);
            }
            None => menus.push(category_id.to_string()),
        }
        self.expanded_menus.set(menus);
    }

    // =========================================================================
    // Status line
    // =========================================================================

    /// The current status message, if any. Rendered on the footer in
    /// place of the key hints; failures that must reach the user land here.
    pub fn status(&self) -> Option<String> {
        self.status.get()
    }

    pub fn set_status(&self, message: impl Into<String>) {
        self.status.set(Some(message.into()));
    }

    pub fn clear_status(&self) {
        if self.status.get().is_some() {
            self.status.set(None);
        }
    }

    // =========================================================================
    // Theme
    // =========================================================================

    pub fn dark_mode(&self) -> bool {
        self.dark_mode.get()
    }

    /// Flip the theme and persist the preference.
    pub fn toggle_theme(&self, storage: &dyn Storage) -> Result<(), DocsError> {
        let dark = !self.dark_mode.get();
        self.dark_mode.set(dark);
        storage.set(THEME_KEY, if dark { "dark" } else { "light" })?;
        Ok(())
    }
}

impl Default for AppState {
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
    use crate::storage::MemStorage;

    #[test]
    fn test_initial_state() {
        let app = AppState::new();
        assert_eq!(app.active_section(), DEFAULT_SECTION);
        assert!(!app.sidebar_collapsed());
        assert!(!app.mobile_menu_open());
        assert!(!app.dark_mode());
        assert!(app.is_expanded("getting-started"));
    }

    #[test]
    fn test_navigate_auto_expands_owning_category() {
        let app = AppState::new();
        assert!(!app.is_expanded("technical"));

        app.navigate("dual-signatures");

        assert_eq!(app.active_section(), "dual-signatures");
        assert!(app.is_expanded("technical"));
    }

    #[test]
    fn test_auto_expansion_is_monotonic_until_user_collapses() {
        let app = AppState::new();

        app.navigate("faq");
        assert!(app.is_expanded("resources"));

        // Navigating elsewhere does not collapse it.
        app.navigate("security");
        assert!(app.is_expanded("resources"));

        // Only an explicit toggle collapses.
        app.toggle_menu("resources");
        assert!(!app.is_expanded("resources"));
    }

    #[test]
    fn test_navigate_accepts_unknown_id_with_fallback() {
        let app = AppState::new();
        app.navigate("no-such-section");

        assert_eq!(app.active_section(), "no-such-section");
        assert_eq!(app.resolved_section(), DEFAULT_SECTION);
    }

    #[test]
    fn test_expand_menu_idempotent() {
        let app = AppState::new();
        app.expand_menu("examples");
        app.expand_menu("examples");

        let count = app
            .expanded_menus()
            .iter()
            .filter(|id| id.as_str() == "examples")
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_toggles() {
        let app = AppState::new();

        app.toggle_sidebar();
        assert!(app.sidebar_collapsed());

        app.toggle_mobile_menu();
        assert!(app.mobile_menu_open());
        app.close_mobile_menu();
        assert!(!app.mobile_menu_open());
    }

    #[test]
    fn test_status_set_and_clear() {
        let app = AppState::new();
        assert_eq!(app.status(), None);

        app.set_status("copy failed: clipboard error: denied");
        assert!(app.status().unwrap().contains("denied"));

        app.clear_status();
        assert_eq!(app.status(), None);
    }

    #[test]
    fn test_theme_persists_across_reinit() {
        let storage = MemStorage::new();

        let app = AppState::with_storage(&storage);
        assert!(!app.dark_mode());

        app.toggle_theme(&storage).unwrap();
        assert!(app.dark_mode());

        // Simulated reload: fresh state from the same storage.
        let reloaded = AppState::with_storage(&storage);
        assert!(reloaded.dark_mode());
    }

    #[test]
    fn test_missing_preference_defaults_to_light() {
        let storage = MemStorage::new();
        let app = AppState::with_storage(&storage);
        assert!(!app.dark_mode());
    }
}
