//! Application systems
//!
//! The simulation, window and renderer, each driven from `main.rs`.

mod render;
mod simulation;
mod window;

pub use render::{RenderError, RenderSystem};
pub use simulation::SimulationSystem;
pub use window::{WindowError, WindowSystem};
