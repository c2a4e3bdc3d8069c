use std::time::Instant;

use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App as CoreApp, AppControl, AppEvent, FrameCtx};
use crate::device::{Gpu, GpuInit};
use crate::input::translate::translate_window_event;
use crate::input::InputState;
use crate::time::{FrameClock, FramePacer};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    pub size: LogicalSize<f64>,
    pub resizable: bool,
    /// Frames per second the loop is paced to.
    pub target_fps: u32,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "actorbox".to_string(),
            size: LogicalSize::new(480.0, 360.0),
            resizable: false,
            target_fps: 60,
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window and drives `app` until it exits.
    ///
    /// Returns the first error raised by window/GPU setup or by the app's
    /// frame callback; a quit request ends the run with `Ok(())`.
    pub fn run<A>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()>
    where
        A: 'static + CoreApp,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gpu_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.error.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    input_state: InputState,
    clock: FrameClock,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

struct AppState<A>
where
    A: CoreApp + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,

    entry: Option<WindowEntry>,
    pacer: FramePacer,

    exit_requested: bool,
    error: Option<anyhow::Error>,
}

impl<A> AppState<A>
where
    A: CoreApp + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Self {
        let pacer = FramePacer::new(config.target_fps, Instant::now());
        Self {
            config,
            gpu_init,
            app,
            entry: None,
            pacer,
            exit_requested: false,
            error: None,
        }
    }

    fn request_exit(&mut self, event_loop: &ActiveEventLoop) {
        self.exit_requested = true;
        event_loop.exit();
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        if self.error.is_none() {
            self.error = Some(err);
        }
        self.request_exit(event_loop);
    }

    fn create_window_entry(&self, event_loop: &ActiveEventLoop) -> Result<WindowEntry> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.size)
            .with_resizable(self.config.resizable);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let gpu_init = self.gpu_init.clone();
        WindowEntry::try_new(InputState::default(), FrameClock::new(Instant::now()), window, |w| {
            pollster::block_on(Gpu::new(w, gpu_init)).context("GPU initialization failed")
        })
    }

    fn dispatch(&mut self, event_loop: &ActiveEventLoop, event: AppEvent) {
        if self.app.on_event(&event) == AppControl::Exit {
            log::info!("exit requested by {event:?}");
            self.request_exit(event_loop);
        }
    }

    fn draw_frame(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();
        // A redraw before the deadline came from the platform, not the pacer.
        let due = self.pacer.is_due(now);
        if due {
            self.pacer.advance(now);
        }

        let (app, Some(entry)) = (&mut self.app, self.entry.as_mut()) else {
            return;
        };

        let outcome = entry.with_mut(|fields| {
            let time = if due { fields.clock.tick(now) } else { fields.clock.repeat(now) };
            let mut ctx = FrameCtx {
                window: fields.window,
                gpu: fields.gpu,
                input: fields.input_state,
                time,
            };
            if due {
                app.on_frame(&mut ctx)
            } else {
                app.on_redraw(&mut ctx).map(|()| AppControl::Continue)
            }
        });

        match outcome {
            Ok(AppControl::Continue) => {}
            Ok(AppControl::Exit) => self.request_exit(event_loop),
            Err(err) => self.fail(event_loop, err),
        }
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: CoreApp + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() {
            return;
        }

        match self.create_window_entry(event_loop) {
            Ok(entry) => {
                log::info!(
                    "window {:?} open at {}x{}",
                    self.config.title,
                    self.config.size.width,
                    self.config.size.height
                );
                self.entry = Some(entry);
            }
            Err(err) => self.fail(event_loop, err.context("failed to open the display")),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        // Park until the next tick boundary; that wait is the frame pacing.
        if self.pacer.is_due(Instant::now()) {
            if let Some(entry) = self.entry.as_ref() {
                entry.with_window(|w| w.request_redraw());
            }
            event_loop.set_control_flow(ControlFlow::Wait);
        } else {
            event_loop.set_control_flow(ControlFlow::WaitUntil(self.pacer.deadline()));
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            return;
        }

        let Some(entry) = self.entry.as_mut() else {
            return;
        };

        let input = entry.with_mut(|fields| {
            let ev = translate_window_event(fields.window.scale_factor(), &event)?;
            fields.input_state.apply_event(&ev);
            Some(ev)
        });

        if let Some(ev) = input {
            self.dispatch(event_loop, AppEvent::Input(ev));
        }

        match &event {
            WindowEvent::CloseRequested => self.dispatch(event_loop, AppEvent::QuitRequested),

            WindowEvent::Resized(new_size) => {
                if let Some(entry) = self.entry.as_mut() {
                    entry.with_gpu_mut(|gpu| gpu.resize(*new_size));
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                if let Some(entry) = self.entry.as_mut() {
                    let new_size = entry.with_window(|w| w.inner_size());
                    entry.with_gpu_mut(|gpu| gpu.resize(new_size));
                }
            }

            WindowEvent::RedrawRequested => self.draw_frame(event_loop),

            _ => {}
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.app.on_exit();
        // Releases the surface before the window it borrows.
        self.entry = None;
        log::debug!("display released");
    }
}
