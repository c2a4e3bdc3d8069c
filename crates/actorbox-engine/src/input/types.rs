use crate::coords::Vec2;

/// Platform-agnostic input events emitted by the runtime.
///
/// Only the pointer is tracked; buttons, keys and focus changes are not
/// forwarded.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Pointer moved inside the window, in logical pixels.
    PointerMoved(Vec2),

    /// Pointer left the window surface.
    PointerLeft,
}
