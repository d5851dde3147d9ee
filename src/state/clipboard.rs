//! Clipboard Module - copy-to-clipboard for code samples.
//!
//! Copying is fire-and-forget: the "copied" indicator only activates after
//! the backend write succeeds, and auto-reverts two seconds later. The
//! revert is polled from the tick loop - no timers or threads.

use std::cell::{Cell, RefCell};
use std::time::{Duration, Instant};

use spark_signals::{signal, Signal};

use crate::error::DocsError;

/// How long the "copied" indicator stays on.
pub const COPIED_REVERT_AFTER: Duration = Duration::from_secs(2);

/// A clipboard destination. Writes may fail (no terminal clipboard, denied
/// access); failures must never be reported as success.
pub trait ClipboardBackend {
    fn write(&self, text: &str) -> Result<(), DocsError>;
}

/// Internal buffer backend - always succeeds, used as the default and as
/// the paste source for tests.
#[derive(Default)]
pub struct BufferClipboard {
    buffer: RefCell<Option<String>>,
}

impl BufferClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently copied text, if any.
    pub fn paste(&self) -> Option<String> {
        self.buffer.borrow().clone()
    }
}

impl ClipboardBackend for BufferClipboard {
    fn write(&self, text: &str) -> Result<(), DocsError> {
        *self.buffer.borrow_mut() = Some(text.to_string());
        Ok(())
    }
}

// =============================================================================
// Copy indicator
// =============================================================================

/// Tracks which code block currently shows its "copied" check mark.
pub struct CopyIndicator {
    copied: Signal<Option<String>>,
    copied_at: Cell<Option<Instant>>,
}

impl CopyIndicator {
    pub fn new() -> Self {
        Self {
            copied: signal(None),
            copied_at: Cell::new(None),
        }
    }

    /// The code block id currently marked as copied.
    pub fn copied_block(&self) -> Option<String> {
        self.copied.get()
    }

    /// Clone of the copied-block signal for reactive subscribers.
    pub fn copied_signal(&self) -> Signal<Option<String>> {
        self.copied.clone()
    }

    /// Copy a code block's source.
    ///
    /// The indicator turns on only when the write resolves without error;
    /// a failed write leaves it untouched and propagates the error.
    pub fn copy_block(
        &self,
        backend: &dyn ClipboardBackend,
        block_id: &str,
        source: &str,
    ) -> Result<(), DocsError> {
        backend.write(source)?;
        self.copied.set(Some(block_id.to_string()));
        self.copied_at.set(Some(Instant::now()));
        Ok(())
    }

    /// Poll from the tick loop: revert the indicator once it has been on
    /// for [`COPIED_REVERT_AFTER`].
    pub fn poll(&self) {
        self.poll_at(Instant::now());
    }

    fn poll_at(&self, now: Instant) {
        if let Some(at) = self.copied_at.get() {
            if now.duration_since(at) >= COPIED_REVERT_AFTER {
                self.copied.set(None);
                self.copied_at.set(None);
            }
        }
    }
}

impl Default for CopyIndicator {
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

    struct FailingClipboard;

    impl ClipboardBackend for FailingClipboard {
        fn write(&self, _text: &str) -> Result<(), DocsError> {
            Err(DocsError::Clipboard("denied".into()))
        }
    }

    #[test]
    fn test_copy_sets_indicator_and_buffer() {
        let backend = BufferClipboard::new();
        let indicator = CopyIndicator::new();

        indicator
            .copy_block(&backend, "npm-install", "npm install @quantzen/sdk")
            .unwrap();

        assert_eq!(indicator.copied_block().as_deref(), Some("npm-install"));
        assert_eq!(backend.paste().as_deref(), Some("npm install @quantzen/sdk"));
    }

    #[test]
    fn test_failed_write_does_not_report_success() {
        let indicator = CopyIndicator::new();
        let result = indicator.copy_block(&FailingClipboard, "npm-install", "text");

        assert!(result.is_err());
        assert_eq!(indicator.copied_block(), None);
    }

    #[test]
    fn test_indicator_reverts_after_two_seconds() {
        let backend = BufferClipboard::new();
        let indicator = CopyIndicator::new();
        indicator.copy_block(&backend, "cfg", "x").unwrap();

        let start = Instant::now();

        // Just before the deadline: still on.
        indicator.poll_at(start + Duration::from_millis(500));
        assert!(indicator.copied_block().is_some());

        // Past the deadline: reverted.
        indicator.poll_at(start + COPIED_REVERT_AFTER + Duration::from_millis(1));
        assert_eq!(indicator.copied_block(), None);
    }

    #[test]
    fn test_recopy_restarts_window() {
        let backend = BufferClipboard::new();
        let indicator = CopyIndicator::new();

        indicator.copy_block(&backend, "a", "one").unwrap();
        indicator.copy_block(&backend, "b", "two").unwrap();

        assert_eq!(indicator.copied_block().as_deref(), Some("b"));
        assert_eq!(backend.paste().as_deref(), Some("two"));
    }
}
