//! Rendering pipeline components
//!
//! Walkers are drawn by a single instanced render pipeline.

pub mod types;
pub mod walker_pipeline;

pub use types::{CanvasUniforms, WalkerInstance, INITIAL_INSTANCE_CAPACITY, QUAD_VERTEX_COUNT};
pub use walker_pipeline::WalkerPipeline;
