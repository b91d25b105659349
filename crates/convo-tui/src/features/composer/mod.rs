//! Composer feature slice: the staged message input.

pub mod render;
pub mod state;
pub mod text_buffer;
pub mod update;

pub use state::ComposerState;
pub use text_buffer::{CursorMove, TextBuffer};
