use crate::coords::Vec2;

use super::types::InputEvent;

/// Current input state for the window.
///
/// Pointer position is `Some` only while the cursor is over the window, which
/// is what "the pointer has focus" means to the demo.
#[derive(Debug, Default)]
pub struct InputState {
    /// Pointer position in logical pixels; `None` once the cursor leaves.
    pub pointer_pos: Option<Vec2>,
}

impl InputState {
    pub fn apply_event(&mut self, ev: &InputEvent) {
        match ev {
            InputEvent::PointerMoved(p) => self.pointer_pos = Some(*p),
            InputEvent::PointerLeft => self.pointer_pos = None,
        }
    }

    /// Pointer position while the cursor is over the window.
    #[inline]
    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer_pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pointer_starts_absent() {
        assert_eq!(InputState::default().pointer(), None);
    }

    #[test]
    fn pointer_tracks_moves_and_leave() {
        let mut state = InputState::default();

        state.apply_event(&InputEvent::PointerMoved(Vec2::new(12.0, 34.0)));
        assert_eq!(state.pointer(), Some(Vec2::new(12.0, 34.0)));

        state.apply_event(&InputEvent::PointerMoved(Vec2::new(0.0, 1.0)));
        assert_eq!(state.pointer(), Some(Vec2::new(0.0, 1.0)));

        state.apply_event(&InputEvent::PointerLeft);
        assert_eq!(state.pointer(), None);
    }
}
