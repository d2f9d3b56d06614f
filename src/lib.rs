//! Random walk simulation
//!
//! Windowed front end for [`randwalk_core`]: configuration, input mapping and
//! the systems that drive the simulation, window and GPU renderer.

pub mod config;
pub mod input;
pub mod systems;
