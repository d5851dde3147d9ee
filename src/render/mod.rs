//! Rendering - content layout, frame composition, and the terminal writer.

pub mod content;
pub mod frame;
pub mod line;
pub mod screen;

pub use content::{first_code_block, layout_content, ContentLayout};
pub use frame::{compose, Frame, FrameInput, APP_TITLE};
pub use line::{Line, Span};
pub use screen::Screen;
