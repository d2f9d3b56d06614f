//! Walker Rendering Library
//!
//! This crate provides the wgpu-based presentation layer for the random-walk
//! simulation. The simulation in `randwalk_core` never sees a GPU type; it
//! talks to a [`CanvasContainer`] through the `WalkerContainer` trait, and the
//! pipeline reads the canvas back out.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`canvas::CanvasContainer`] - Walker container backing the window surface
//! - [`pipeline::WalkerPipeline`] - Instanced quad pipeline drawing walkers

pub mod context;
pub mod canvas;
pub mod pipeline;

pub use canvas::CanvasContainer;
pub use context::{ContextError, RenderContext};
pub use pipeline::{CanvasUniforms, WalkerInstance, WalkerPipeline};
