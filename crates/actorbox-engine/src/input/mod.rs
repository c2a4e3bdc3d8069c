//! Input subsystem.
//!
//! Public API is platform-agnostic and does not expose winit types.
//! `translate` maps winit window events into `InputEvent`s.

pub(crate) mod translate;
mod state;
mod types;

pub use state::InputState;
pub use types::InputEvent;
