//! Simulation configuration
//!
//! [`WalkConfig`] holds every construction parameter of a
//! [`WalkerCollection`](crate::WalkerCollection) except the container and the
//! graph sink. [`ResetOptions`] is the partial form used to update a running
//! collection, and [`WalkModes`] carries the two runtime toggles.

use bitflags::bitflags;
use randwalk_math::Vec2;
use serde::{Serialize, Deserialize};

/// Default bound on collision retries per walker per pass
pub const DEFAULT_MAX_COLLISION_RETRIES: u32 = 1_000;

bitflags! {
    /// Runtime toggles for a walker collection
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct WalkModes: u8 {
        /// Confine walkers to the container's client rectangle
        const BORDERS = 1 << 0;
        /// Retry moves that land within one unit of another walker
        const COLLISIONS = 1 << 1;
    }
}

impl WalkModes {
    /// Build modes from the two boolean toggles
    pub fn from_toggles(borders: bool, collisions: bool) -> Self {
        let mut modes = WalkModes::empty();
        modes.set(WalkModes::BORDERS, borders);
        modes.set(WalkModes::COLLISIONS, collisions);
        modes
    }
}

/// Construction parameters for a walker collection
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WalkConfig {
    /// Walkers spawned by `create_walkers`
    pub number_of_walkers: u32,
    /// Horizontal coordinate of the spawn region's upper corner
    pub x_coord_upper_corner: f32,
    /// Vertical coordinate of the spawn region's upper corner
    pub y_coord_upper_corner: f32,
    /// Height of the spawn region's reference container
    pub container_height: f32,
    /// Width of the spawn region's reference container
    pub container_width: f32,
    /// Fraction of the container the spawn distribution spreads over, in (0, 1]
    pub parts_of_screen_used: f32,
    /// Viewport height; one step is `window_height / 100`
    pub window_height: f32,
    /// Passes in a full run; also the divisor of the expected-value accumulator
    pub number_of_steps: u32,
    /// Start with border confinement enabled
    pub toggle_borders: bool,
    /// Start with collision detection enabled
    pub toggle_collisions: bool,
    /// Collision retries per walker per pass before the move is abandoned
    pub max_collision_retries: u32,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            number_of_walkers: 20,
            x_coord_upper_corner: 0.0,
            y_coord_upper_corner: 0.0,
            container_height: 720.0,
            container_width: 1280.0,
            parts_of_screen_used: 1.0,
            window_height: 720.0,
            number_of_steps: 500,
            toggle_borders: true,
            toggle_collisions: false,
            max_collision_retries: DEFAULT_MAX_COLLISION_RETRIES,
        }
    }
}

impl WalkConfig {
    /// Step size and walker size: one hundredth of the viewport height
    #[inline]
    pub fn unit(&self) -> f32 {
        self.window_height / 100.0
    }

    /// Upper corner of the spawn region
    #[inline]
    pub fn spawn_corner(&self) -> Vec2 {
        Vec2::new(self.x_coord_upper_corner, self.y_coord_upper_corner)
    }

    /// Extent of the spawn region
    #[inline]
    pub fn spawn_extent(&self) -> Vec2 {
        Vec2::new(self.container_width, self.container_height) * self.parts_of_screen_used
    }

    /// Initial runtime toggles
    pub fn modes(&self) -> WalkModes {
        WalkModes::from_toggles(self.toggle_borders, self.toggle_collisions)
    }

    /// Builder: set number of walkers
    pub fn with_walkers(mut self, number_of_walkers: u32) -> Self {
        self.number_of_walkers = number_of_walkers;
        self
    }

    /// Builder: set number of steps
    pub fn with_steps(mut self, number_of_steps: u32) -> Self {
        self.number_of_steps = number_of_steps;
        self
    }

    /// Builder: set the reference container size
    pub fn with_container(mut self, width: f32, height: f32) -> Self {
        self.container_width = width;
        self.container_height = height;
        self
    }

    /// Builder: set the spawn corner
    pub fn with_corner(mut self, x: f32, y: f32) -> Self {
        self.x_coord_upper_corner = x;
        self.y_coord_upper_corner = y;
        self
    }

    /// Builder: set the spawn spread factor
    pub fn with_spread(mut self, parts_of_screen_used: f32) -> Self {
        self.parts_of_screen_used = parts_of_screen_used;
        self
    }

    /// Builder: set the viewport height
    pub fn with_window_height(mut self, window_height: f32) -> Self {
        self.window_height = window_height;
        self
    }

    /// Builder: set both toggles
    pub fn with_toggles(mut self, borders: bool, collisions: bool) -> Self {
        self.toggle_borders = borders;
        self.toggle_collisions = collisions;
        self
    }

    /// Builder: set the collision retry bound
    pub fn with_max_collision_retries(mut self, retries: u32) -> Self {
        self.max_collision_retries = retries;
        self
    }

    /// Copy of this config with every truthy field of `options` applied
    ///
    /// A field is truthy when it is `Some` and non-zero (and, for floats,
    /// not NaN). Everything else keeps its current value.
    pub fn merged(&self, options: &ResetOptions) -> WalkConfig {
        let mut next = self.clone();
        if let Some(steps) = options.number_of_steps.filter(|&v| v != 0) {
            next.number_of_steps = steps;
        }
        if let Some(walkers) = options.number_of_walkers.filter(|&v| v != 0) {
            next.number_of_walkers = walkers;
        }
        if let Some(spread) = options.parts_of_screen_used.filter(|&v| truthy(v)) {
            next.parts_of_screen_used = spread;
        }
        if let Some(x) = options.x_coord_upper_corner.filter(|&v| truthy(v)) {
            next.x_coord_upper_corner = x;
        }
        if let Some(y) = options.y_coord_upper_corner.filter(|&v| truthy(v)) {
            next.y_coord_upper_corner = y;
        }
        next
    }
}

fn truthy(value: f32) -> bool {
    value != 0.0 && !value.is_nan()
}

/// A partial configuration update
///
/// Only fields that are present and non-zero are applied; see
/// [`WalkConfig::merged`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResetOptions {
    pub number_of_steps: Option<u32>,
    pub number_of_walkers: Option<u32>,
    pub parts_of_screen_used: Option<f32>,
    pub x_coord_upper_corner: Option<f32>,
    pub y_coord_upper_corner: Option<f32>,
}

impl ResetOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_steps(mut self, number_of_steps: u32) -> Self {
        self.number_of_steps = Some(number_of_steps);
        self
    }

    pub fn with_walkers(mut self, number_of_walkers: u32) -> Self {
        self.number_of_walkers = Some(number_of_walkers);
        self
    }

    pub fn with_spread(mut self, parts_of_screen_used: f32) -> Self {
        self.parts_of_screen_used = Some(parts_of_screen_used);
        self
    }

    pub fn with_corner(mut self, x: f32, y: f32) -> Self {
        self.x_coord_upper_corner = Some(x);
        self.y_coord_upper_corner = Some(y);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_from_window_height() {
        let config = WalkConfig::default().with_window_height(800.0);
        assert_eq!(config.unit(), 8.0);
    }

    #[test]
    fn test_spawn_extent_scales_with_spread() {
        let config = WalkConfig::default()
            .with_container(200.0, 100.0)
            .with_spread(0.5);
        assert_eq!(config.spawn_extent(), Vec2::new(100.0, 50.0));
    }

    #[test]
    fn test_modes_from_toggles() {
        assert_eq!(WalkModes::from_toggles(false, false), WalkModes::empty());
        assert_eq!(WalkModes::from_toggles(true, false), WalkModes::BORDERS);
        assert_eq!(
            WalkModes::from_toggles(true, true),
            WalkModes::BORDERS | WalkModes::COLLISIONS
        );
        let config = WalkConfig::default().with_toggles(false, true);
        assert_eq!(config.modes(), WalkModes::COLLISIONS);
    }

    #[test]
    fn test_merged_applies_present_fields() {
        let config = WalkConfig::default().with_steps(100).with_walkers(10);
        let merged = config.merged(&ResetOptions::new().with_steps(250));
        assert_eq!(merged.number_of_steps, 250);
        assert_eq!(merged.number_of_walkers, 10);
        assert_eq!(merged.parts_of_screen_used, config.parts_of_screen_used);
    }

    #[test]
    fn test_merged_ignores_falsy_fields() {
        let config = WalkConfig::default()
            .with_steps(100)
            .with_corner(15.0, 25.0)
            .with_spread(0.5);
        let options = ResetOptions {
            number_of_steps: Some(0),
            number_of_walkers: None,
            parts_of_screen_used: Some(f32::NAN),
            x_coord_upper_corner: Some(0.0),
            y_coord_upper_corner: Some(40.0),
        };
        let merged = config.merged(&options);
        assert_eq!(merged.number_of_steps, 100);
        assert_eq!(merged.parts_of_screen_used, 0.5);
        assert_eq!(merged.x_coord_upper_corner, 15.0);
        assert_eq!(merged.y_coord_upper_corner, 40.0);
    }

    #[test]
    fn test_reset_options_deserialize_partial() {
        let options: ResetOptions = ron::from_str("(number_of_walkers: Some(12))").unwrap();
        assert_eq!(options.number_of_walkers, Some(12));
        assert_eq!(options.number_of_steps, None);
    }
}
