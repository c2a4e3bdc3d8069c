//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store renderer-agnostic draw commands
//! - provide deterministic ordering (z-index + insertion order)

mod cmd;
mod key;
mod list;
mod rect;
mod z_index;

pub use cmd::DrawCmd;
pub use key::SortKey;
pub use list::{DrawItem, DrawList};
pub use rect::RectCmd;
pub use z_index::ZIndex;
