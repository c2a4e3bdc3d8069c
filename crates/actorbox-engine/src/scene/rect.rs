use crate::coords::Rect;
use crate::paint::Color;

use super::{DrawCmd, DrawList, ZIndex};

/// Solid rectangle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub color: Color,
}

impl RectCmd {
    #[inline]
    pub fn new(rect: Rect, color: Color) -> Self {
        Self { rect, color }
    }
}

impl DrawList {
    /// Records a solid rectangle draw command.
    #[inline]
    pub fn push_solid_rect(&mut self, z: ZIndex, rect: Rect, color: Color) {
        self.push(z, DrawCmd::Rect(RectCmd::new(rect, color)));
    }
}
