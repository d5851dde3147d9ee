//! State Module - runtime state systems.
//!
//! - **App** - the layout shell's single source of truth (active section,
//!   sidebar, theme mode, menu expansion)
//! - **Scroll** - scroll-position tracking for active section and heading
//! - **Clipboard** - copy-to-clipboard with the auto-reverting indicator
//! - **Keyboard** - event types, dispatch, handler registry
//! - **Keys** - global shortcuts (quit, search focus, prev/next)

pub mod app;
pub mod clipboard;
pub mod keyboard;
pub mod keys;
pub mod scroll;

pub use app::AppState;
pub use clipboard::{BufferClipboard, ClipboardBackend, CopyIndicator, COPIED_REVERT_AFTER};
pub use keyboard::{dispatch, last_event, on, on_key, KeyboardEvent, Modifiers};
pub use keys::{setup_global_keys, GlobalKeysHandle};
pub use scroll::{
    current_heading, current_section, HeadingMark, ScrollTracker, SectionSpan,
    DEFAULT_THRESHOLD,
};
