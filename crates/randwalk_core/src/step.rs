//! Sources of randomness for stepping and spawning
//!
//! The collection draws two kinds of values: a discrete axis step from
//! {-1, 0, 1} for every move, and a fraction in `[0, 1)` for spawn
//! placement. [`RandomSteps`] draws both from a [`SmallRng`]; [`ScriptedSteps`]
//! replays fixed sequences so runs can be reproduced exactly.

use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// A source of walker steps and spawn fractions
pub trait StepSource {
    /// Next discrete step along one axis: -1, 0 or 1
    fn axis_step(&mut self) -> i8;

    /// Next spawn fraction in `[0, 1)`
    fn fraction(&mut self) -> f32;
}

/// Uniform random steps backed by a small, fast PRNG
#[derive(Clone, Debug)]
pub struct RandomSteps {
    rng: SmallRng,
}

impl RandomSteps {
    /// Seed from the operating system
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Deterministic sequence from a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Seeded when a seed is given, OS-seeded otherwise
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::new(),
        }
    }
}

impl Default for RandomSteps {
    fn default() -> Self {
        Self::new()
    }
}

impl StepSource for RandomSteps {
    fn axis_step(&mut self) -> i8 {
        self.rng.random_range(-1i8..=1)
    }

    fn fraction(&mut self) -> f32 {
        self.rng.random::<f32>()
    }
}

/// Replays fixed sequences of steps and fractions, cycling when exhausted
///
/// An empty step script always yields 0 and an empty fraction script always
/// yields 0.5.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSteps {
    steps: VecDeque<i8>,
    fractions: VecDeque<f32>,
}

impl ScriptedSteps {
    /// Create a script from axis steps; values are clamped to {-1, 0, 1}
    pub fn new(steps: impl IntoIterator<Item = i8>) -> Self {
        Self {
            steps: steps.into_iter().map(|s| s.clamp(-1, 1)).collect(),
            fractions: VecDeque::new(),
        }
    }

    /// Set the spawn fractions; values are clamped to `[0, 1)`
    pub fn with_fractions(mut self, fractions: impl IntoIterator<Item = f32>) -> Self {
        self.fractions = fractions
            .into_iter()
            .map(|f| f.clamp(0.0, 1.0 - f32::EPSILON))
            .collect();
        self
    }
}

impl StepSource for ScriptedSteps {
    fn axis_step(&mut self) -> i8 {
        match self.steps.pop_front() {
            Some(step) => {
                self.steps.push_back(step);
                step
            }
            None => 0,
        }
    }

    fn fraction(&mut self) -> f32 {
        match self.fractions.pop_front() {
            Some(fraction) => {
                self.fractions.push_back(fraction);
                fraction
            }
            None => 0.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_steps_range() {
        let mut steps = RandomSteps::seeded(7);
        let mut seen = [false; 3];
        for _ in 0..1000 {
            let s = steps.axis_step();
            assert!((-1..=1).contains(&s));
            seen[(s + 1) as usize] = true;
        }
        assert_eq!(seen, [true, true, true], "all three steps should occur");
    }

    #[test]
    fn test_random_fraction_range() {
        let mut steps = RandomSteps::seeded(11);
        for _ in 0..1000 {
            let f = steps.fraction();
            assert!((0.0..1.0).contains(&f));
        }
    }

    #[test]
    fn test_seeded_is_deterministic() {
        let mut a = RandomSteps::seeded(42);
        let mut b = RandomSteps::seeded(42);
        for _ in 0..64 {
            assert_eq!(a.axis_step(), b.axis_step());
        }
    }

    #[test]
    fn test_scripted_cycles() {
        let mut steps = ScriptedSteps::new([1, -1, 0]);
        let drawn: Vec<i8> = (0..6).map(|_| steps.axis_step()).collect();
        assert_eq!(drawn, vec![1, -1, 0, 1, -1, 0]);
    }

    #[test]
    fn test_scripted_clamps_and_defaults() {
        let mut steps = ScriptedSteps::new([5, -9]);
        assert_eq!(steps.axis_step(), 1);
        assert_eq!(steps.axis_step(), -1);

        let mut empty = ScriptedSteps::default();
        assert_eq!(empty.axis_step(), 0);
        assert_eq!(empty.fraction(), 0.5);

        let mut fractions = ScriptedSteps::default().with_fractions([0.25, 2.0]);
        assert_eq!(fractions.fraction(), 0.25);
        assert!(fractions.fraction() < 1.0);
    }
}
