use thiserror::Error;

/// Rejected construction or mutation of demo state.
///
/// Every variant is fatal to the run; nothing in the demo catches them.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvalidArgument {
    #[error("position must be finite and non-negative, got ({x}, {y})")]
    NegativePosition { x: f32, y: f32 },

    #[error("size must be positive, got {width}x{height}")]
    NonPositiveSize { width: i32, height: i32 },

    #[error("color {0:?} is not in the palette")]
    UnknownColor(String),
}
