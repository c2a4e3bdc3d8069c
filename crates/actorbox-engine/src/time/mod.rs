//! Time subsystem.
//!
//! Stable, testable frame timing without coupling to the runtime:
//! - `FramePacer` decides when the next frame is due (fixed target rate)
//! - `FrameClock` measures delta time between presented frames

mod frame_clock;
mod pacer;

pub use frame_clock::{FrameClock, FrameTime};
pub use pacer::FramePacer;
