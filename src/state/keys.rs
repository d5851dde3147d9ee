//! Global Keys Module - application-wide keyboard shortcuts.
//!
//! - Ctrl+C: graceful shutdown
//! - Ctrl+K: focus the search input (works regardless of current focus)
//! - Left/Right: previous/next section, unless the search input owns input
//!
//! Handlers are registered on mount and cleaned up on unmount.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::app::AppState;
use super::keyboard;
use crate::nav::pager;
use crate::search::SearchState;

/// Cleanup handle for the global key handlers.
pub struct GlobalKeysHandle {
    cleanups: Vec<Box<dyn FnOnce()>>,
}

impl GlobalKeysHandle {
    /// Deregister all global key handlers.
    pub fn cleanup(mut self) {
        for cleanup in self.cleanups.drain(..) {
            cleanup();
        }
    }
}

/// Register the global shortcuts. Returns a handle for cleanup.
pub fn setup_global_keys(
    app: &AppState,
    search: &SearchState,
    running: Arc<AtomicBool>,
) -> GlobalKeysHandle {
    let mut cleanups: Vec<Box<dyn FnOnce()>> = Vec::new();

    // Ctrl+C - graceful shutdown
    let ctrl_c = keyboard::on(move |event| {
        if event.modifiers.ctrl && event.key == "c" {
            running.store(false, Ordering::SeqCst);
            true
        } else {
            false
        }
    });
    cleanups.push(Box::new(ctrl_c));

    // Ctrl+K - focus search from anywhere
    let search_focus = search.clone();
    let ctrl_k = keyboard::on(move |event| {
        if event.modifiers.ctrl && event.key == "k" {
            search_focus.focus();
            true
        } else {
            false
        }
    });
    cleanups.push(Box::new(ctrl_k));

    // Left/Right - prev/next section when the search box is not capturing
    let app_prev = app.clone();
    let search_prev = search.clone();
    let left = keyboard::on_key("ArrowLeft", move || {
        if search_prev.is_focused() {
            return false;
        }
        if let Some(link) = pager::previous_page(&app_prev.active_section()) {
            app_prev.navigate(link.id);
        }
        true
    });
    cleanups.push(Box::new(left));

    let app_next = app.clone();
    let search_next = search.clone();
    let right = keyboard::on_key("ArrowRight", move || {
        if search_next.is_focused() {
            return false;
        }
        if let Some(link) = pager::next_page(&app_next.active_section()) {
            app_next.navigate(link.id);
        }
        true
    });
    cleanups.push(Box::new(right));

    GlobalKeysHandle { cleanups }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::keyboard::{dispatch, reset_keyboard_state, KeyboardEvent, Modifiers};

    fn setup() {
        reset_keyboard_state();
    }

    #[test]
    fn test_ctrl_c_stops_running() {
        setup();
        let app = AppState::new();
        let search = SearchState::new();
        let running = Arc::new(AtomicBool::new(true));
        let handle = setup_global_keys(&app, &search, running.clone());

        dispatch(KeyboardEvent::with_modifiers("c", Modifiers::ctrl()));
        assert!(!running.load(Ordering::SeqCst));

        handle.cleanup();
    }

    #[test]
    fn test_plain_c_does_not_stop() {
        setup();
        let app = AppState::new();
        let search = SearchState::new();
        let running = Arc::new(AtomicBool::new(true));
        let handle = setup_global_keys(&app, &search, running.clone());

        dispatch(KeyboardEvent::new("c"));
        assert!(running.load(Ordering::SeqCst));

        handle.cleanup();
    }

    #[test]
    fn test_ctrl_k_focuses_search() {
        setup();
        let app = AppState::new();
        let search = SearchState::new();
        let handle = setup_global_keys(&app, &search, Arc::new(AtomicBool::new(true)));

        assert!(!search.is_focused());
        dispatch(KeyboardEvent::with_modifiers("k", Modifiers::ctrl()));
        assert!(search.is_focused());

        handle.cleanup();
    }

    #[test]
    fn test_arrows_navigate_unless_search_focused() {
        setup();
        let app = AppState::new();
        let search = SearchState::new();
        let handle = setup_global_keys(&app, &search, Arc::new(AtomicBool::new(true)));

        dispatch(KeyboardEvent::new("ArrowRight"));
        assert_eq!(app.active_section(), "installation");

        dispatch(KeyboardEvent::new("ArrowLeft"));
        assert_eq!(app.active_section(), "introduction");

        // At the first section there is no previous; stays put.
        dispatch(KeyboardEvent::new("ArrowLeft"));
        assert_eq!(app.active_section(), "introduction");

        search.focus();
        dispatch(KeyboardEvent::new("ArrowRight"));
        assert_eq!(app.active_section(), "introduction");

        handle.cleanup();
    }

    #[test]
    fn test_cleanup_removes_handlers() {
        setup();
        let app = AppState::new();
        let search = SearchState::new();
        let running = Arc::new(AtomicBool::new(true));
        let handle = setup_global_keys(&app, &search, running.clone());
        handle.cleanup();

        dispatch(KeyboardEvent::with_modifiers("c", Modifiers::ctrl()));
        assert!(running.load(Ordering::SeqCst));
    }
}
