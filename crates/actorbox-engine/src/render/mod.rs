//! GPU rendering subsystem.
//!
//! The rect renderer consumes `scene` draw streams and issues GPU commands via wgpu.
//! It owns its GPU resources (pipeline, buffers) and rebuilds them lazily.
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - Vertex shader converts to NDC using a viewport uniform.

mod common;
mod ctx;
mod rect;

pub use ctx::{RenderCtx, RenderTarget};
pub use rect::RectRenderer;
