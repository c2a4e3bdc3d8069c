//! actorbox demo: colored outlined rectangles moving in a fixed window.
//!
//! One white actor follows the pointer; three more drift on their own,
//! either at a constant velocity or by a random walk.

pub mod actor;
pub mod app;
pub mod config;
pub mod error;
pub mod movement;
pub mod renderable;
pub mod scene;

pub use actor::{Actor, Size};
pub use app::{DemoApp, Phase};
pub use config::DemoConfig;
pub use error::InvalidArgument;
pub use movement::{MovementPolicy, TickInput};
pub use renderable::{Outline, Renderable};
pub use scene::Scene;
