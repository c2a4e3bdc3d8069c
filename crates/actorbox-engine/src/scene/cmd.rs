use super::rect::RectCmd;

/// Renderer-agnostic draw command stream.
///
/// Only solid rectangles exist today; outlines are composed from them.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
}
