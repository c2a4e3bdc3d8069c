//! Paint model shared between the demo and the renderer.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//! - the named color palette
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod palette;

pub use color::Color;
pub use palette::lookup;
