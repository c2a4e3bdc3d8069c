use anyhow::Result;

use crate::input::InputEvent;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Events delivered to the application between frames, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// The user asked to close the window.
    QuitRequested,
    /// Input already applied to the frame's `InputState`.
    Input(InputEvent),
}

/// Application contract implemented by the demo.
pub trait App {
    /// Called for each pending event before the next frame.
    ///
    /// The default ends the run on a quit request.
    fn on_event(&mut self, event: &AppEvent) -> AppControl {
        match event {
            AppEvent::QuitRequested => AppControl::Exit,
            AppEvent::Input(_) => AppControl::Continue,
        }
    }

    /// Called once per paced frame. An error ends the run and is returned
    /// from [`Runtime::run`](crate::window::Runtime::run).
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> Result<AppControl>;

    /// Called when the platform asks for a repaint between paced frames, e.g.
    /// after the window is uncovered. Must not advance app state.
    fn on_redraw(&mut self, _ctx: &mut FrameCtx<'_, '_>) -> Result<()> {
        Ok(())
    }

    /// Called once when the loop stops, before the window and GPU are released.
    fn on_exit(&mut self) {}
}
