//! Walk simulation system
//!
//! Owns the walker collection and drives it from frames and input actions:
//! - Running and pausing the animation
//! - Single passes
//! - Mode toggles, spawning and clearing

use randwalk_core::{
    GraphRecorder, GraphSaveError, PassReport, RandomSteps, Rect, Vec2, WalkError,
    WalkerCollection,
};
use randwalk_render::CanvasContainer;

use crate::config::AppConfig;

/// Manages the walker collection and its animation
pub struct SimulationSystem {
    collection: WalkerCollection<CanvasContainer, GraphRecorder>,
    running: bool,
    /// Passes left in the current animation run
    remaining: u32,
    passes_per_frame: u32,
}

impl SimulationSystem {
    /// Create the collection for a `width` x `height` surface and spawn walkers
    pub fn new(config: &AppConfig, width: f32, height: f32) -> Result<Self, WalkError> {
        let walk = config.walk_config(width, height);
        let canvas = CanvasContainer::new(Rect::from_size(width, height));
        let graph = GraphRecorder::new(config.graph.capacity);

        let mut collection = WalkerCollection::with_graph(walk, canvas, graph)?
            .with_step_source(RandomSteps::from_seed_option(config.walk.seed));
        collection.create_walkers();

        Ok(Self {
            collection,
            running: false,
            remaining: 0,
            passes_per_frame: config.walk.passes_per_frame.max(1),
        })
    }

    /// The underlying collection
    pub fn collection(&self) -> &WalkerCollection<CanvasContainer, GraphRecorder> {
        &self.collection
    }

    /// The canvas the walkers are laid out on
    pub fn canvas_mut(&mut self) -> &mut CanvasContainer {
        self.collection.container_mut()
    }

    /// Whether the animation is advancing each frame
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Start or pause the animation
    ///
    /// Starting after a finished run begins a fresh run of `number_of_steps`
    /// passes.
    pub fn toggle_running(&mut self) -> bool {
        if self.running {
            self.running = false;
        } else {
            if self.remaining == 0 {
                self.remaining = self.collection.config().number_of_steps;
            }
            self.running = true;
        }
        log::info!(
            "Animation {} ({} passes left)",
            if self.running { "running" } else { "paused" },
            self.remaining
        );
        self.running
    }

    /// Advance the animation by one frame
    ///
    /// Returns the number of passes run.
    pub fn update(&mut self) -> u32 {
        if !self.running {
            return 0;
        }

        let passes = self.passes_per_frame.min(self.remaining);
        for _ in 0..passes {
            self.collection.all_walkers_iteration();
        }
        self.remaining -= passes;

        if self.remaining == 0 {
            self.running = false;
            log::info!(
                "Run finished after {} passes, expected value {:.4}",
                self.collection.stats().passes,
                self.collection.expected_value()
            );
        }
        passes
    }

    /// Run a single pass regardless of the running state
    pub fn step_once(&mut self) -> PassReport {
        self.collection.all_walkers_iteration()
    }

    /// Spawn a walker at a surface position
    pub fn spawn_at(&mut self, cursor: Vec2) -> Option<usize> {
        match self.collection.create_one_walker(cursor) {
            Ok(index) => Some(index),
            Err(e) => {
                log::warn!("Ignoring spawn request: {}", e);
                None
            }
        }
    }

    /// Flip border confinement, returning the new state
    pub fn toggle_borders(&mut self) -> bool {
        let enabled = self.collection.toggle_borders();
        log::info!("Borders {}", on_off(enabled));
        enabled
    }

    /// Flip collision detection, returning the new state
    pub fn toggle_collisions(&mut self) -> bool {
        let enabled = self.collection.toggle_collisions();
        log::info!("Collisions {}", on_off(enabled));
        enabled
    }

    /// Replace all walkers with a fresh set and zero the statistics
    pub fn respawn(&mut self) {
        self.collection.remove_walkers();
        self.collection.reset_statistics();
        self.collection.graph_mut().clear();
        self.collection.create_walkers();
        self.running = false;
        self.remaining = 0;
    }

    /// Remove every walker
    pub fn clear(&mut self) {
        self.collection.remove_walkers();
    }

    /// Follow a surface resize
    ///
    /// Later spawns cover the new surface. The step size keeps the value it
    /// had at startup.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.canvas_mut().set_client_rect(Rect::from_size(width, height));
        if let Err(e) = self.collection.set_container_size(width, height) {
            log::warn!("Keeping previous spawn region: {}", e);
        }
    }

    /// Walker size in pixels
    pub fn walker_size(&self) -> f32 {
        self.collection.unit()
    }

    /// One-line summary for the window title
    pub fn status_line(&self) -> String {
        let stats = self.collection.stats();
        format!(
            "{} walkers | pass {} | E {:.4} | mean {:.4} | borders {} | collisions {}{}",
            self.collection.walker_count(),
            stats.passes,
            self.collection.expected_value(),
            stats.mean_displacement(),
            on_off(self.collection.borders_enabled()),
            on_off(self.collection.collisions_enabled()),
            if self.running { "" } else { " [paused]" }
        )
    }

    /// Write the recorded graph series as RON
    pub fn save_graph(&self, path: &str) -> Result<(), GraphSaveError> {
        self.collection.graph().save(path)?;
        log::info!(
            "Saved {} graph samples to {}",
            self.collection.graph().len(),
            path
        );
        Ok(())
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}
