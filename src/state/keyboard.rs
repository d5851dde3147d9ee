//! Keyboard Module - keyboard event state and handler registry.
//!
//! State and handler registry for keyboard events. Does NOT own stdin -
//! the app loop translates crossterm events and dispatches here.
//!
//! # API
//!
//! - `on(handler)` - subscribe to all keyboard events
//! - `on_key(key, fn)` - subscribe to a specific key
//! - `dispatch(event)` - route an event, returns true when consumed
//!
//! Handlers return `true` to consume the event and stop propagation.
//! Every subscription returns a cleanup closure; views must call it on
//! teardown so handlers never leak across navigations.

use std::cell::RefCell;
use std::collections::HashMap;

use spark_signals::{signal, Signal};

// =============================================================================
// Types
// =============================================================================

/// Keyboard modifier state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn ctrl() -> Self {
        Self { ctrl: true, ..Self::default() }
    }

    pub fn shift() -> Self {
        Self { shift: true, ..Self::default() }
    }
}

/// A key press.
#[derive(Clone, Debug, PartialEq)]
pub struct KeyboardEvent {
    /// The key pressed (e.g. "a", "Enter", "ArrowUp", "Backspace").
    pub key: String,
    pub modifiers: Modifiers,
}

impl KeyboardEvent {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_modifiers(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
        }
    }

    /// A printable character with no control modifier, suitable for text
    /// input fields.
    pub fn text_char(&self) -> Option<char> {
        if self.modifiers.ctrl || self.modifiers.alt {
            return None;
        }
        let mut chars = self.key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

/// Handler for keyboard events. Return true to consume the event.
pub type KeyHandler = Box<dyn Fn(&KeyboardEvent) -> bool>;

/// Handler for a specific key. Return true to consume the event.
pub type KeySpecificHandler = Box<dyn Fn() -> bool>;

// =============================================================================
// State
// =============================================================================

thread_local! {
    static LAST_EVENT: Signal<Option<KeyboardEvent>> = signal(None);
}

/// The last dispatched event.
pub fn last_event() -> Option<KeyboardEvent> {
    LAST_EVENT.with(|s| s.get())
}

// =============================================================================
// Handler registry
// =============================================================================

struct HandlerRegistry {
    global_handlers: Vec<(usize, KeyHandler)>,
    key_handlers: HashMap<String, Vec<(usize, KeySpecificHandler)>>,
    next_id: usize,
}

impl HandlerRegistry {
    fn new() -> Self {
        Self {
            global_handlers: Vec::new(),
            key_handlers: HashMap::new(),
            next_id: 0,
        }
    }

    fn next_id(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

thread_local! {
    static REGISTRY: RefCell<HandlerRegistry> = RefCell::new(HandlerRegistry::new());
}

// =============================================================================
// Dispatch
// =============================================================================

/// Dispatch a keyboard event to registered handlers.
///
/// Key-specific handlers run before global ones; the first handler that
/// returns true consumes the event.
pub fn dispatch(event: KeyboardEvent) -> bool {
    LAST_EVENT.with(|s| s.set(Some(event.clone())));

    REGISTRY.with(|reg| {
        let reg = reg.borrow();

        if let Some(handlers) = reg.key_handlers.get(&event.key) {
            for (_, handler) in handlers {
                if handler() {
                    return true;
                }
            }
        }

        for (_, handler) in &reg.global_handlers {
            if handler(&event) {
                return true;
            }
        }

        false
    })
}

// =============================================================================
// Subscription
// =============================================================================

/// Subscribe to all keyboard events. Returns a cleanup closure.
pub fn on<F>(handler: F) -> impl FnOnce()
where
    F: Fn(&KeyboardEvent) -> bool + 'static,
{
    let id = REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        let id = reg.next_id();
        reg.global_handlers.push((id, Box::new(handler)));
        id
    });

    move || {
        REGISTRY.with(|reg| {
            let mut reg = reg.borrow_mut();
            reg.global_handlers.retain(|(hid, _)| *hid != id);
        });
    }
}

/// Subscribe to a specific key. Returns a cleanup closure.
pub fn on_key<F>(key: &str, handler: F) -> impl FnOnce()
where
    F: Fn() -> bool + 'static,
{
    let key = key.to_string();
    let id = REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        let id = reg.next_id();
        reg.key_handlers
            .entry(key.clone())
            .or_default()
            .push((id, Box::new(handler)));
        id
    });

    move || {
        REGISTRY.with(|reg| {
            let mut reg = reg.borrow_mut();
            if let Some(handlers) = reg.key_handlers.get_mut(&key) {
                handlers.retain(|(hid, _)| *hid != id);
                if handlers.is_empty() {
                    reg.key_handlers.remove(&key);
                }
            }
        });
    }
}

/// Clear all handlers and state (tests).
pub fn reset_keyboard_state() {
    REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        reg.global_handlers.clear();
        reg.key_handlers.clear();
        reg.next_id = 0;
    });
    LAST_EVENT.with(|s| s.set(None));
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn setup() {
        reset_keyboard_state();
    }

    #[test]
    fn test_dispatch_updates_last_event() {
        setup();
        assert!(last_event().is_none());

        dispatch(KeyboardEvent::new("a"));
        assert_eq!(last_event().unwrap().key, "a");
    }

    #[test]
    fn test_global_handler_and_cleanup() {
        setup();

        let count = Rc::new(Cell::new(0));
        let count_clone = count.clone();
        let cleanup = on(move |_| {
            count_clone.set(count_clone.get() + 1);
            false
        });

        dispatch(KeyboardEvent::new("a"));
        dispatch(KeyboardEvent::new("b"));
        assert_eq!(count.get(), 2);

        cleanup();
        dispatch(KeyboardEvent::new("c"));
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn test_key_specific_handler_runs_first_and_consumes() {
        setup();

        let reached_global = Rc::new(Cell::new(false));
        let reached_clone = reached_global.clone();
        let _g = on(move |_| {
            reached_clone.set(true);
            false
        });

        let _k = on_key("Enter", || true);

        assert!(dispatch(KeyboardEvent::new("Enter")));
        assert!(!reached_global.get());
    }

    #[test]
    fn test_text_char() {
        assert_eq!(KeyboardEvent::new("x").text_char(), Some('x'));
        assert_eq!(KeyboardEvent::new("Enter").text_char(), None);
        assert_eq!(
            KeyboardEvent::with_modifiers("c", Modifiers::ctrl()).text_char(),
            None
        );
    }

    #[test]
    fn test_modifiers() {
        setup();

        let saw_ctrl_k = Rc::new(Cell::new(false));
        let saw_clone = saw_ctrl_k.clone();
        let _c = on(move |event| {
            if event.modifiers.ctrl && event.key == "k" {
                saw_clone.set(true);
                true
            } else {
                false
            }
        });

        dispatch(KeyboardEvent::new("k"));
        assert!(!saw_ctrl_k.get());

        dispatch(KeyboardEvent::with_modifiers("k", Modifiers::ctrl()));
        assert!(saw_ctrl_k.get());
    }
}
