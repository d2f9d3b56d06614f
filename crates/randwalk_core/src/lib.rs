//! Core types for the randwalk simulation
//!
//! This crate holds simulation state only. Nothing here knows how walkers are
//! drawn; the presentation layer plugs in through [`WalkerContainer`].
//!
//! - [`Walker`] - A particle with a position, an index and travel statistics
//! - [`WalkerCollection`] - Owns walkers, configuration, container and graph sink
//! - [`WalkConfig`] / [`ResetOptions`] - Full and partial configuration
//! - [`WalkModes`] - Border confinement and collision detection toggles
//! - [`StepSource`] - Randomness for steps and spawns ([`RandomSteps`], [`ScriptedSteps`])
//! - [`WalkerContainer`] - Parent for walker visuals ([`MemoryContainer`] is headless)
//! - [`GraphSink`] - Consumer of per-pass samples ([`GraphRecorder`] saves to RON)

mod walker;
mod step;
mod container;
mod options;
mod validation;
mod error;
mod graph;
mod collection;

pub use walker::Walker;
pub use step::{StepSource, RandomSteps, ScriptedSteps};
pub use container::{WalkerContainer, WalkerNode, MemoryContainer};
pub use options::{WalkConfig, ResetOptions, WalkModes, DEFAULT_MAX_COLLISION_RETRIES};
pub use validation::{WalkValidator, ValidationError};
pub use error::WalkError;
pub use graph::{GraphSample, GraphSink, GraphRecorder, NullGraph, GraphLoadError, GraphSaveError};
pub use collection::{WalkerCollection, WalkStats, PassReport};

// Re-export the math types used throughout the public API
pub use randwalk_math::{Rect, Vec2};
