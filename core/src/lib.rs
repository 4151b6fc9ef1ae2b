//! Icon catalogue core: sprite loading, configuration, usage snippets and
//! preview panel state.

pub mod clipboard;
pub mod collate;
pub mod preview;
pub mod snippets;
pub mod sprite;
pub mod types;

pub use sprite::{SpriteError, SpriteSource};
pub use types::IconEntry;
