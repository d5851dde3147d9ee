//! Persistent key-value storage for user preferences.
//!
//! Exactly one entry is persisted today: the theme preference under
//! [`THEME_KEY`], as the literal string `"dark"` or `"light"`. The trait
//! exists so tests can swap in an in-memory store.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Storage key for the theme preference.
pub const THEME_KEY: &str = "quantzen-theme";

/// A minimal persistent string store.
pub trait Storage {
    /// Read a value. `None` when the key was never written or is unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Write a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> io::Result<()>;
}

// =============================================================================
// File-backed storage
// =============================================================================

/// One file per key inside a directory, value as the file's contents.
///
/// Read failures degrade to `None` so a corrupt or missing preference file
/// never breaks startup.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Default location: `.zendoc` under the home directory, falling back to
    /// the current directory when no home is resolvable.
    pub fn default_location() -> Self {
        let base = std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(base.join(".zendoc"))
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key))
            .ok()
            .map(|s| s.trim_end().to_string())
    }

    fn set(&self, key: &str, value: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), value)
    }
}

// =============================================================================
// In-memory storage (tests)
// =============================================================================

/// Volatile store used by tests to simulate persistence across "reloads".
#[derive(Default)]
pub struct MemStorage {
    map: RefCell<HashMap<String, String>>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.map.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> io::Result<()> {
        self.map.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mem_storage_roundtrip() {
        let store = MemStorage::new();
        assert!(store.get(THEME_KEY).is_none());

        store.set(THEME_KEY, "dark").unwrap();
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));

        store.set(THEME_KEY, "light").unwrap();
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn test_file_storage_roundtrip() {
        let dir = std::env::temp_dir().join(format!("zendoc-test-{}", std::process::id()));
        let store = FileStorage::new(&dir);

        assert!(store.get(THEME_KEY).is_none());
        store.set(THEME_KEY, "dark").unwrap();
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));

        let _ = fs::remove_dir_all(&dir);
    }
}
