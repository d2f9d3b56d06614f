//! The walker collection and its step loop
//!
//! A [`WalkerCollection`] owns the walkers, the configuration, the container
//! their visuals live in, the step source and the graph sink. One call to
//! [`all_walkers_iteration`](WalkerCollection::all_walkers_iteration) moves
//! every walker once:
//!
//! 1. Draw (dx, dy) from {-1, 0, 1}² scaled by the unit
//! 2. Apply x then y, reflecting off the client rectangle if borders are on
//! 3. Update the expected-value accumulator
//! 4. If collisions are on and the walker now overlaps another, walk again
//!    from the tentative position, up to `max_collision_retries` times

use randwalk_math::{Rect, Vec2};

use crate::container::{WalkerContainer, WalkerNode};
use crate::error::WalkError;
use crate::graph::{GraphSample, GraphSink, NullGraph};
use crate::options::{ResetOptions, WalkConfig, WalkModes};
use crate::step::{RandomSteps, StepSource};
use crate::validation::WalkValidator;
use crate::walker::Walker;

/// Running statistics of a collection
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct WalkStats {
    /// Completed full passes
    pub passes: u64,
    /// Single-walker moves attempted, retries included
    pub moves: u64,
    /// Collisions detected (each triggers a retry)
    pub collisions: u64,
    /// Moves abandoned after exhausting collision retries
    pub unresolved_collisions: u64,
    /// Random spawns left overlapping another walker after exhausting retries
    pub unplaced_spawns: u64,
    /// Total distance travelled by all walkers
    pub total_distance: f32,
    /// Sum of dx + dy over every move
    pub displacement_sum: f32,
}

impl WalkStats {
    /// Mean of dx + dy over every move so far
    pub fn mean_displacement(&self) -> f32 {
        if self.moves == 0 {
            0.0
        } else {
            self.displacement_sum / self.moves as f32
        }
    }
}

/// Summary of one full pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PassReport {
    /// Walkers moved in this pass
    pub walkers: usize,
    /// Collisions detected in this pass
    pub collisions: u64,
    /// Walkers whose move was abandoned in this pass
    pub unresolved: u64,
}

/// Owns a set of walkers and steps them through a container
pub struct WalkerCollection<C: WalkerContainer, G: GraphSink = NullGraph> {
    config: WalkConfig,
    modes: WalkModes,
    container: C,
    graph: G,
    walkers: Vec<Walker>,
    steps: Box<dyn StepSource>,
    expected_value: f32,
    stats: WalkStats,
}

impl<C: WalkerContainer> WalkerCollection<C, NullGraph> {
    /// Create a collection that discards graph samples
    pub fn new(config: WalkConfig, container: C) -> Result<Self, WalkError> {
        Self::with_graph(config, container, NullGraph)
    }
}

impl<C: WalkerContainer, G: GraphSink> WalkerCollection<C, G> {
    /// Create a collection feeding the given graph sink
    ///
    /// Fails if the configuration does not validate.
    pub fn with_graph(config: WalkConfig, container: C, graph: G) -> Result<Self, WalkError> {
        WalkValidator::validate_or_error(&config)?;
        let modes = config.modes();
        log::debug!(
            "Walker collection: {} walkers, {} steps, unit {:.2}, modes {:?}",
            config.number_of_walkers,
            config.number_of_steps,
            config.unit(),
            modes
        );
        Ok(Self {
            config,
            modes,
            container,
            graph,
            walkers: Vec::new(),
            steps: Box::new(RandomSteps::new()),
            expected_value: 0.0,
            stats: WalkStats::default(),
        })
    }

    /// Builder: replace the step source
    pub fn with_step_source(mut self, steps: impl StepSource + 'static) -> Self {
        self.steps = Box::new(steps);
        self
    }

    // --- Accessors ---

    pub fn config(&self) -> &WalkConfig {
        &self.config
    }

    pub fn modes(&self) -> WalkModes {
        self.modes
    }

    pub fn walkers(&self) -> &[Walker] {
        &self.walkers
    }

    pub fn walker_count(&self) -> usize {
        self.walkers.len()
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    pub fn container_mut(&mut self) -> &mut C {
        &mut self.container
    }

    pub fn graph(&self) -> &G {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut G {
        &mut self.graph
    }

    pub fn stats(&self) -> &WalkStats {
        &self.stats
    }

    /// Step size and walker size
    pub fn unit(&self) -> f32 {
        self.config.unit()
    }

    /// The expected-value accumulator
    ///
    /// Updated every move as `(ev + dx + dy) / number_of_steps`. This is not
    /// a running mean across passes; see [`WalkStats::mean_displacement`] for
    /// that.
    pub fn expected_value(&self) -> f32 {
        self.expected_value
    }

    // --- Toggles ---

    pub fn borders_enabled(&self) -> bool {
        self.modes.contains(WalkModes::BORDERS)
    }

    pub fn collisions_enabled(&self) -> bool {
        self.modes.contains(WalkModes::COLLISIONS)
    }

    pub fn set_toggle_borders(&mut self, enabled: bool) {
        self.modes.set(WalkModes::BORDERS, enabled);
        self.config.toggle_borders = enabled;
    }

    pub fn set_toggle_collisions(&mut self, enabled: bool) {
        self.modes.set(WalkModes::COLLISIONS, enabled);
        self.config.toggle_collisions = enabled;
    }

    /// Flip border confinement, returning the new state
    pub fn toggle_borders(&mut self) -> bool {
        let enabled = !self.borders_enabled();
        self.set_toggle_borders(enabled);
        enabled
    }

    /// Flip collision detection, returning the new state
    pub fn toggle_collisions(&mut self) -> bool {
        let enabled = !self.collisions_enabled();
        self.set_toggle_collisions(enabled);
        enabled
    }

    // --- Configuration ---

    /// Apply the present, non-zero fields of `options`
    ///
    /// The merged configuration is validated first; on failure nothing
    /// changes.
    pub fn reset_values(&mut self, options: &ResetOptions) -> Result<(), WalkError> {
        let next = self.config.merged(options);
        WalkValidator::validate_or_error(&next)?;
        self.config = next;
        log::debug!("Walk configuration reset: {:?}", options);
        Ok(())
    }

    /// Update the reference container size after a resize
    ///
    /// Later random spawns cover the new size. The unit is left alone.
    pub fn set_container_size(&mut self, width: f32, height: f32) -> Result<(), WalkError> {
        let next = self.config.clone().with_container(width, height);
        WalkValidator::validate_or_error(&next)?;
        self.config = next;
        Ok(())
    }

    /// Zero the accumulator and statistics (walkers are kept)
    pub fn reset_statistics(&mut self) {
        self.expected_value = 0.0;
        self.stats = WalkStats::default();
    }

    // --- Walkers ---

    /// Append `number_of_walkers` walkers at random positions
    ///
    /// Positions are drawn uniformly from the spawn region. With borders on
    /// they are clamped into the container; with collisions on a position is
    /// redrawn while it overlaps an existing walker, up to the retry bound.
    ///
    /// Returns how many walkers could not be placed clear of the others.
    /// Those walkers still overlap and stay counted in
    /// [`WalkStats::unplaced_spawns`].
    pub fn create_walkers(&mut self) -> usize {
        let count = self.config.number_of_walkers as usize;
        let mut unplaced = 0;
        for _ in 0..count {
            let (position, clear) = self.random_spawn_position();
            self.push_walker(position);
            if !clear {
                unplaced += 1;
            }
        }
        self.stats.unplaced_spawns += unplaced as u64;

        if unplaced > 0 {
            log::warn!(
                "{} of {} walkers overlap others after {} spawn retries; the container is too crowded",
                unplaced,
                count,
                self.config.max_collision_retries
            );
        }
        log::info!("Created {} walkers ({} total)", count, self.walkers.len());
        unplaced
    }

    /// Append one walker at a pointer location
    ///
    /// With borders on the location is clamped into the container. Returns
    /// the new walker's index.
    pub fn create_one_walker(&mut self, pointer: Vec2) -> Result<usize, WalkError> {
        if !pointer.is_finite() {
            return Err(WalkError::NonFinitePosition {
                x: pointer.x,
                y: pointer.y,
            });
        }
        let position = if self.borders_enabled() {
            self.movable_region().clamp_point(pointer)
        } else {
            pointer
        };
        let index = self.push_walker(position);
        log::debug!("Walker {} placed at ({:.1}, {:.1})", index, position.x, position.y);
        Ok(index)
    }

    /// Remove every walker and every node from the container
    pub fn remove_walkers(&mut self) {
        self.container.remove_all();
        self.walkers.clear();
        log::info!("Cleared all walkers");
    }

    /// Move every walker once
    pub fn all_walkers_iteration(&mut self) -> PassReport {
        let mut report = PassReport {
            walkers: self.walkers.len(),
            ..PassReport::default()
        };

        for k in 0..self.walkers.len() {
            let (collisions, resolved) = self.walk_until_clear(k);
            report.collisions += collisions;
            if !resolved {
                report.unresolved += 1;
            }
        }

        self.stats.passes += 1;
        self.graph.record(GraphSample {
            pass: self.stats.passes,
            expected_value: self.expected_value,
            mean_displacement: self.stats.mean_displacement(),
            collisions: self.stats.collisions,
            walkers: self.walkers.len(),
        });

        log::debug!(
            "Pass {}: {} walkers, {} collisions, {} unresolved, ev {:.4}",
            self.stats.passes,
            report.walkers,
            report.collisions,
            report.unresolved,
            self.expected_value
        );
        report
    }

    /// Run `number_of_steps` full passes back to back
    pub fn run_steps(&mut self) -> PassReport {
        let mut total = PassReport {
            walkers: self.walkers.len(),
            ..PassReport::default()
        };
        for _ in 0..self.config.number_of_steps {
            let report = self.all_walkers_iteration();
            total.collisions += report.collisions;
            total.unresolved += report.unresolved;
        }
        total
    }

    /// Move a single walker, retrying on collision
    ///
    /// Returns `true` if the move settled on a collision-free position.
    pub fn move_walker(&mut self, index: usize) -> Result<bool, WalkError> {
        if index >= self.walkers.len() {
            return Err(WalkError::WalkerOutOfRange {
                index,
                len: self.walkers.len(),
            });
        }
        let (_, resolved) = self.walk_until_clear(index);
        Ok(resolved)
    }

    // --- Internals ---

    /// Region a walker's top-left corner may occupy with borders on
    fn movable_region(&self) -> Rect {
        self.container.client_rect().inset_extent(self.unit())
    }

    fn push_walker(&mut self, position: Vec2) -> usize {
        let index = self.walkers.len();
        self.walkers.push(Walker::new(index, position));
        self.container.append_node(WalkerNode::new(index, position));
        index
    }

    /// A spawn position and whether it is clear of every other walker
    fn random_spawn_position(&mut self) -> (Vec2, bool) {
        let mut position = self.draw_spawn_position();
        if !self.collisions_enabled() {
            return (position, true);
        }
        let mut attempts = 1;
        while self.overlaps_any(position, None) {
            if attempts >= self.config.max_collision_retries {
                return (position, false);
            }
            position = self.draw_spawn_position();
            attempts += 1;
        }
        (position, true)
    }

    fn draw_spawn_position(&mut self) -> Vec2 {
        let u = Vec2::new(self.steps.fraction(), self.steps.fraction());
        let position = self.config.spawn_corner() + self.config.spawn_extent().component_mul(u);
        if self.borders_enabled() {
            self.movable_region().clamp_point(position)
        } else {
            position
        }
    }

    fn overlaps_any(&self, position: Vec2, skip: Option<usize>) -> bool {
        let probe = Walker::new(usize::MAX, position);
        let unit = self.unit();
        self.walkers
            .iter()
            .enumerate()
            .any(|(i, other)| Some(i) != skip && probe.is_near(other, unit))
    }

    /// Step walker `k` until it lands clear or retries run out
    ///
    /// Returns (collisions detected, resolved). An unresolved walker is put
    /// back where it started.
    fn walk_until_clear(&mut self, k: usize) -> (u64, bool) {
        let origin = self.walkers[k].position;
        let mut collisions = 0u64;
        let mut resolved = true;

        while self.one_walker_iteration(k) {
            collisions += 1;
            if collisions >= u64::from(self.config.max_collision_retries) {
                log::warn!(
                    "Walker {} still colliding after {} retries; move abandoned",
                    k,
                    collisions
                );
                self.walkers[k].position = origin;
                self.stats.unresolved_collisions += 1;
                resolved = false;
                break;
            }
        }

        let walker = &mut self.walkers[k];
        walker.commit_move(origin);
        self.stats.total_distance += (walker.position - origin).length();
        let position = walker.position;
        self.container.move_node(k, position);
        (collisions, resolved)
    }

    /// One tentative move of walker `k`; true if it now collides
    fn one_walker_iteration(&mut self, k: usize) -> bool {
        let unit = self.unit();
        let dx = f32::from(self.steps.axis_step()) * unit;
        let dy = f32::from(self.steps.axis_step()) * unit;

        let borders = self.borders_enabled();
        let region = self.movable_region();
        let walker = &mut self.walkers[k];

        let left = if borders {
            confine(walker.left(), dx, region.left, region.right(), unit)
        } else {
            walker.left() + dx
        };
        walker.update_position_x(left);

        let top = if borders {
            confine(walker.top(), dy, region.top, region.bottom(), unit)
        } else {
            walker.top() + dy
        };
        walker.update_position_y(top);

        self.expected_value += dx + dy;
        self.expected_value /= self.config.number_of_steps as f32;
        self.stats.moves += 1;
        self.stats.displacement_sum += dx + dy;

        if self.collisions_enabled() && self.check_collision(k) {
            self.stats.collisions += 1;
            return true;
        }
        false
    }

    fn check_collision(&self, k: usize) -> bool {
        self.overlaps_any(self.walkers[k].position, Some(k))
    }
}

/// Apply `delta` along one axis, reflecting by one unit off `[min, max]`
///
/// `max` is the last position a walker may occupy. Overshooting it lands one
/// unit back from the overshoot; undershooting `min` lands one unit forward.
/// The result is clamped so float error or an undersized region can never
/// push a walker outside.
fn confine(pos: f32, delta: f32, min: f32, max: f32, unit: f32) -> f32 {
    let next = pos + delta;
    let reflected = if next > max {
        next - unit
    } else if next < min {
        next + unit
    } else {
        next
    };
    reflected.clamp(min, max.max(min))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::MemoryContainer;
    use crate::step::ScriptedSteps;

    fn config() -> WalkConfig {
        // unit = 10
        WalkConfig::default()
            .with_window_height(1000.0)
            .with_container(200.0, 200.0)
            .with_walkers(3)
            .with_steps(10)
            .with_toggles(false, false)
    }

    fn collection(config: WalkConfig) -> WalkerCollection<MemoryContainer, Vec<GraphSample>> {
        WalkerCollection::with_graph(
            config,
            MemoryContainer::new(Rect::from_size(200.0, 200.0)),
            Vec::new(),
        )
        .unwrap()
    }

    #[test]
    fn test_confine_inside() {
        assert_eq!(confine(50.0, 10.0, 0.0, 190.0, 10.0), 60.0);
        assert_eq!(confine(50.0, -10.0, 0.0, 190.0, 10.0), 40.0);
    }

    #[test]
    fn test_confine_reflects() {
        // Overshoot the far edge: 190 + 10 = 200 > 190 -> 190
        assert_eq!(confine(190.0, 10.0, 0.0, 190.0, 10.0), 190.0);
        // Undershoot the near edge: 0 - 10 = -10 < 0 -> 0
        assert_eq!(confine(0.0, -10.0, 0.0, 190.0, 10.0), 0.0);
        // Outside and standing still moves one unit inward
        assert_eq!(confine(195.0, 0.0, 0.0, 190.0, 10.0), 185.0);
    }

    #[test]
    fn test_confine_degenerate_region() {
        // max < min collapses to min
        assert_eq!(confine(0.0, 10.0, 0.0, -5.0, 10.0), 0.0);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let result = WalkerCollection::new(
            config().with_walkers(0),
            MemoryContainer::new(Rect::from_size(10.0, 10.0)),
        );
        assert!(matches!(result, Err(WalkError::InvalidConfig(_))));
    }

    #[test]
    fn test_create_walkers_appends_nodes() {
        let mut c = collection(config());
        c.create_walkers();
        assert_eq!(c.walker_count(), 3);
        assert_eq!(c.container().child_count(), 3);
        for (i, w) in c.walkers().iter().enumerate() {
            assert_eq!(w.index, i);
        }
    }

    #[test]
    fn test_indices_follow_array_position() {
        let mut c = collection(config());
        c.create_walkers();
        c.create_walkers();
        let indices: Vec<usize> = c.walkers().iter().map(|w| w.index).collect();
        assert_eq!(indices, (0..6).collect::<Vec<_>>());
    }

    #[test]
    fn test_spawn_uses_corner_and_spread() {
        let cfg = config().with_corner(20.0, 40.0).with_spread(0.5);
        let mut c = collection(cfg)
            .with_step_source(ScriptedSteps::default().with_fractions([0.5, 0.25]));
        c.create_walkers();
        // x = 20 + 0.5 * 200 * 0.5 = 70, y = 40 + 0.25 * 200 * 0.5 = 65
        assert_eq!(c.walkers()[0].position, Vec2::new(70.0, 65.0));
    }

    #[test]
    fn test_spawn_clamped_with_borders() {
        let cfg = config().with_corner(500.0, 500.0).with_toggles(true, false);
        let mut c = collection(cfg);
        c.create_walkers();
        for w in c.walkers() {
            assert!(w.left() <= 190.0 && w.top() <= 190.0);
        }
    }

    #[test]
    fn test_create_one_walker_at_pointer() {
        let mut c = collection(config());
        let index = c.create_one_walker(Vec2::new(33.0, 44.0)).unwrap();
        assert_eq!(index, 0);
        assert_eq!(c.walkers()[0].position, Vec2::new(33.0, 44.0));
        assert_eq!(c.container().nodes()[0].position, Vec2::new(33.0, 44.0));
    }

    #[test]
    fn test_create_one_walker_clamps_with_borders() {
        let mut c = collection(config().with_toggles(true, false));
        c.create_one_walker(Vec2::new(500.0, -20.0)).unwrap();
        assert_eq!(c.walkers()[0].position, Vec2::new(190.0, 0.0));
    }

    #[test]
    fn test_create_one_walker_rejects_nan() {
        let mut c = collection(config());
        let result = c.create_one_walker(Vec2::new(f32::NAN, 0.0));
        assert!(matches!(result, Err(WalkError::NonFinitePosition { .. })));
        assert_eq!(c.walker_count(), 0);
    }

    #[test]
    fn test_iteration_applies_scripted_step() {
        let mut c = collection(config()).with_step_source(ScriptedSteps::new([1, -1]));
        c.create_one_walker(Vec2::new(100.0, 100.0)).unwrap();
        let report = c.all_walkers_iteration();
        assert_eq!(report.walkers, 1);
        assert_eq!(c.walkers()[0].position, Vec2::new(110.0, 90.0));
        assert_eq!(c.container().nodes()[0].position, Vec2::new(110.0, 90.0));
        assert_eq!(c.walkers()[0].moves, 1);
    }

    #[test]
    fn test_expected_value_accumulator() {
        // Every move: dx = dy = +10, number_of_steps = 10
        let mut c = collection(config()).with_step_source(ScriptedSteps::new([1]));
        c.create_one_walker(Vec2::new(0.0, 0.0)).unwrap();

        c.all_walkers_iteration();
        // (0 + 20) / 10 = 2
        assert!((c.expected_value() - 2.0).abs() < 1e-5);

        c.all_walkers_iteration();
        // (2 + 20) / 10 = 2.2
        assert!((c.expected_value() - 2.2).abs() < 1e-5);

        // The true running mean stays at 20
        assert!((c.stats().mean_displacement() - 20.0).abs() < 1e-5);
    }

    #[test]
    fn test_graph_sample_per_pass() {
        let mut c = collection(config()).with_step_source(ScriptedSteps::new([0]));
        c.create_walkers();
        c.all_walkers_iteration();
        c.all_walkers_iteration();
        let samples = c.graph();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].pass, 1);
        assert_eq!(samples[1].pass, 2);
        assert_eq!(samples[1].walkers, 3);
    }

    #[test]
    fn test_run_steps_runs_configured_passes() {
        let mut c = collection(config().with_steps(7));
        c.create_walkers();
        c.run_steps();
        assert_eq!(c.stats().passes, 7);
        assert_eq!(c.graph().len(), 7);
    }

    #[test]
    fn test_collision_retries_until_clear() {
        // Walker 1 sits right of walker 0. Walker 0's first move (+1, 0)
        // lands on it; the retry (-1, 0) steps away.
        let mut c = collection(config().with_toggles(false, true))
            .with_step_source(ScriptedSteps::new([1, 0, -1, 0, 0, 0]));
        c.create_one_walker(Vec2::new(100.0, 100.0)).unwrap();
        c.create_one_walker(Vec2::new(110.0, 100.0)).unwrap();

        let resolved = c.move_walker(0).unwrap();
        assert!(resolved);
        assert_eq!(c.walkers()[0].position, Vec2::new(100.0, 100.0));
        assert_eq!(c.stats().collisions, 1);
    }

    #[test]
    fn test_collision_retry_bound_restores_origin() {
        // Zero steps on a walker that overlaps another: never clears
        let mut c = collection(config().with_toggles(false, true).with_max_collision_retries(5))
            .with_step_source(ScriptedSteps::new([0]));
        c.create_one_walker(Vec2::new(100.0, 100.0)).unwrap();
        c.create_one_walker(Vec2::new(105.0, 100.0)).unwrap();

        let report = c.all_walkers_iteration();
        assert_eq!(report.unresolved, 2);
        assert_eq!(c.stats().unresolved_collisions, 2);
        assert_eq!(c.walkers()[0].position, Vec2::new(100.0, 100.0));
    }

    #[test]
    fn test_crowded_spawn_is_reported() {
        // 60 walkers of size 10 cannot fit apart in a 100x100 box
        let config = config()
            .with_container(100.0, 100.0)
            .with_walkers(60)
            .with_toggles(true, true)
            .with_max_collision_retries(50);
        let mut c = WalkerCollection::new(config, MemoryContainer::new(Rect::from_size(100.0, 100.0)))
            .unwrap()
            .with_step_source(crate::step::RandomSteps::seeded(3));

        let unplaced = c.create_walkers();
        assert!(unplaced > 0);
        assert_eq!(c.stats().unplaced_spawns, unplaced as u64);
        assert_eq!(c.walker_count(), 60);

        let walkers = c.walkers();
        let overlapping = (0..walkers.len())
            .filter(|&i| {
                (0..walkers.len()).any(|j| j != i && walkers[i].is_near(&walkers[j], c.unit()))
            })
            .count();
        assert!(overlapping > 0);
    }

    #[test]
    fn test_spawn_with_room_places_everyone() {
        let mut c = collection(config().with_toggles(true, true).with_walkers(5))
            .with_step_source(crate::step::RandomSteps::seeded(8));
        assert_eq!(c.create_walkers(), 0);
        assert_eq!(c.stats().unplaced_spawns, 0);
    }

    #[test]
    fn test_set_container_size_moves_spawn_region() {
        let mut c = collection(config().with_toggles(false, false).with_walkers(40))
            .with_step_source(crate::step::RandomSteps::seeded(5));
        c.set_container_size(1000.0, 50.0).unwrap();
        assert_eq!(c.config().container_width, 1000.0);
        assert_eq!(c.unit(), 10.0);

        c.create_walkers();
        assert!(c.walkers().iter().any(|w| w.position.x > 200.0));
        assert!(c.walkers().iter().all(|w| w.position.y <= 50.0));

        let result = c.set_container_size(0.0, 50.0);
        assert!(matches!(result, Err(WalkError::InvalidConfig(_))));
        assert_eq!(c.config().container_width, 1000.0);
    }

    #[test]
    fn test_move_walker_out_of_range() {
        let mut c = collection(config());
        let result = c.move_walker(0);
        assert_eq!(result, Err(WalkError::WalkerOutOfRange { index: 0, len: 0 }));
    }

    #[test]
    fn test_toggles() {
        let mut c = collection(config());
        assert!(!c.borders_enabled());
        assert!(c.toggle_borders());
        assert!(c.borders_enabled());
        assert!(c.config().toggle_borders);

        c.set_toggle_collisions(true);
        assert!(c.collisions_enabled());
        assert!(!c.toggle_collisions());
        assert_eq!(c.modes(), WalkModes::BORDERS);
    }

    #[test]
    fn test_reset_values_partial() {
        let mut c = collection(config());
        c.reset_values(&ResetOptions::new().with_walkers(8)).unwrap();
        assert_eq!(c.config().number_of_walkers, 8);
        assert_eq!(c.config().number_of_steps, 10);
    }

    #[test]
    fn test_reset_values_rejects_invalid() {
        let mut c = collection(config());
        let result = c.reset_values(&ResetOptions::new().with_spread(3.0));
        assert!(matches!(result, Err(WalkError::InvalidConfig(_))));
        assert_eq!(c.config().parts_of_screen_used, 1.0);
    }

    #[test]
    fn test_remove_walkers() {
        let mut c = collection(config());
        c.create_walkers();
        c.remove_walkers();
        assert_eq!(c.walker_count(), 0);
        assert_eq!(c.container().child_count(), 0);
    }

    #[test]
    fn test_reset_statistics() {
        let mut c = collection(config()).with_step_source(ScriptedSteps::new([1]));
        c.create_walkers();
        c.all_walkers_iteration();
        assert!(c.expected_value() != 0.0);
        c.reset_statistics();
        assert_eq!(c.expected_value(), 0.0);
        assert_eq!(*c.stats(), WalkStats::default());
        assert_eq!(c.walker_count(), 3);
    }
}
