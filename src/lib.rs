//! zendoc - reactive terminal documentation browser for the QuantZen SDK.
//!
//! The whole UI is a function of a handful of signals: the active section,
//! the search query, the scroll position, the theme mode. Content lives in
//! a static registry keyed by section id; navigation, search, breadcrumb,
//! pager, and the table of contents are all pure derivations over that
//! registry plus the app state.
//!
//! # Architecture
//!
//! - [`registry`] - sections, categories, ordering, and content providers
//! - [`state`] - reactive app state, scroll tracking, clipboard, keyboard
//! - [`nav`] - sidebar, breadcrumb, prev/next pager, table of contents
//! - [`search`] - keyword search over the section registry
//! - [`render`] - content layout, frame composition, terminal writer
//! - [`app`] - mount/tick/run lifecycle
//!
//! # Example
//!
//! ```ignore
//! use std::rc::Rc;
//! use zendoc::app::{mount, run};
//! use zendoc::state::clipboard::BufferClipboard;
//! use zendoc::storage::FileStorage;
//!
//! let storage = Rc::new(FileStorage::default_location());
//! let handle = mount(storage, Rc::new(BufferClipboard::new()))?;
//! run(&handle)?;
//! handle.unmount();
//! # Ok::<(), std::io::Error>(())
//! ```

pub mod app;
pub mod error;
pub mod nav;
pub mod registry;
pub mod render;
pub mod search;
pub mod state;
pub mod storage;
pub mod theme;
pub mod types;

pub use app::{mount, run, tick, MountHandle};
pub use error::DocsError;
pub use state::app::AppState;
pub use types::{Block, Heading, PageLink, Rgba, Section, StyleFlags};
