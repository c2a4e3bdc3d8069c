//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and the single demo window, paces frames, and
//! wires the window to the GPU layer.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
pub use winit::dpi::LogicalSize;
