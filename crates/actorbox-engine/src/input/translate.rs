use winit::dpi::PhysicalPosition;
use winit::event::WindowEvent;

use crate::coords::Vec2;
use crate::input::InputEvent;

/// Translates a winit `WindowEvent` into an engine `InputEvent`.
///
/// Only cursor motion and the cursor leaving the window are represented;
/// everything else (buttons included) yields `None` and leaves the tracked
/// pointer alone.
pub(crate) fn translate_window_event(scale_factor: f64, event: &WindowEvent) -> Option<InputEvent> {
    match event {
        WindowEvent::CursorMoved { position, .. } => {
            Some(InputEvent::PointerMoved(to_logical(scale_factor, *position)))
        }
        WindowEvent::CursorLeft { .. } => Some(InputEvent::PointerLeft),
        _ => None,
    }
}

fn to_logical(scale: f64, pos: PhysicalPosition<f64>) -> Vec2 {
    let logical = pos.to_logical::<f64>(scale);
    Vec2::new(logical.x as f32, logical.y as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputState;
    use winit::event::{DeviceId, ElementState, MouseButton};

    fn device() -> DeviceId {
        DeviceId::dummy()
    }

    fn feed(state: &mut InputState, event: &WindowEvent) {
        if let Some(ev) = translate_window_event(1.0, event) {
            state.apply_event(&ev);
        }
    }

    #[test]
    fn physical_to_logical_divides_by_scale() {
        let p = to_logical(2.0, PhysicalPosition::new(100.0, 50.0));
        assert_eq!(p, Vec2::new(50.0, 25.0));
    }

    #[test]
    fn cursor_moved_is_scaled() {
        let ev = WindowEvent::CursorMoved {
            device_id: device(),
            position: PhysicalPosition::new(30.0, 60.0),
        };
        assert_eq!(
            translate_window_event(1.5, &ev),
            Some(InputEvent::PointerMoved(Vec2::new(20.0, 40.0)))
        );
    }

    #[test]
    fn mouse_buttons_are_not_translated() {
        let ev = WindowEvent::MouseInput {
            device_id: device(),
            state: ElementState::Pressed,
            button: MouseButton::Left,
        };
        assert_eq!(translate_window_event(1.0, &ev), None);
    }

    #[test]
    fn click_after_cursor_left_keeps_pointer_absent() {
        let mut state = InputState::default();
        feed(&mut state, &WindowEvent::CursorMoved {
            device_id: device(),
            position: PhysicalPosition::new(10.0, 10.0),
        });
        feed(&mut state, &WindowEvent::CursorLeft { device_id: device() });

        for element in [ElementState::Pressed, ElementState::Released] {
            feed(&mut state, &WindowEvent::MouseInput {
                device_id: device(),
                state: element,
                button: MouseButton::Left,
            });
        }
        assert_eq!(state.pointer(), None);
    }

    #[test]
    fn click_before_any_motion_keeps_pointer_absent() {
        let mut state = InputState::default();
        feed(&mut state, &WindowEvent::MouseInput {
            device_id: device(),
            state: ElementState::Released,
            button: MouseButton::Right,
        });
        assert_eq!(state.pointer(), None);
    }
}
