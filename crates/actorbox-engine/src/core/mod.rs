//! Core engine-facing contracts.
//!
//! The stable interface between the runtime (platform loop) and the
//! application: lifecycle callbacks and a per-frame context.

mod app;
mod ctx;

pub use app::{App, AppControl, AppEvent};
pub use ctx::FrameCtx;
