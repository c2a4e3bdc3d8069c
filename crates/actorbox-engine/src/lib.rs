//! actorbox engine crate.
//!
//! Owns the platform + GPU runtime pieces the demo is built on: one fixed-size
//! window, a paced frame loop, pointer input, and an instanced rect renderer.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
