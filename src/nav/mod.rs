//! Navigation derivations - sidebar tree, breadcrumb, prev/next, TOC.
//!
//! Everything here is a pure function of `AppState` plus the static
//! registry; no module owns independent state.

pub mod breadcrumb;
pub mod pager;
pub mod sidebar;
pub mod toc;

pub use breadcrumb::{breadcrumb, ROOT_LABEL};
pub use pager::{next_page, previous_page};
pub use sidebar::{activate_category, activate_section, sidebar_rows, SidebarRow};
pub use toc::{toc_rows, TocRow, TOC_EMPTY, TOC_TITLE};
