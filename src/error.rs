//! Error types for fallible operations.
//!
//! Only two things can actually fail in this system: persisting the theme
//! preference and writing to the clipboard. Everything else is static,
//! trusted data.

use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum DocsError {
    /// Theme preference could not be read or written.
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Clipboard write was rejected by the backend.
    #[error("clipboard error: {0}")]
    Clipboard(String),
}
