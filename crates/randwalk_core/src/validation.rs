//! Configuration validation
//!
//! Invalid configuration is rejected up front instead of producing a
//! collection that silently does nothing. [`WalkValidator`] reports every
//! problem it finds, not just the first.

use crate::options::WalkConfig;

/// A problem found in a [`WalkConfig`]
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// `number_of_walkers` is zero
    NoWalkers,
    /// `number_of_steps` is zero (also the accumulator divisor)
    NoSteps,
    /// Spread factor outside (0, 1]
    SpreadOutOfRange(f32),
    /// Viewport height is zero, negative or not finite
    InvalidWindowHeight(f32),
    /// Reference container has no area
    InvalidContainer { width: f32, height: f32 },
    /// Spawn corner has a NaN or infinite coordinate
    NonFiniteCorner { x: f32, y: f32 },
    /// Collision retries must allow at least one attempt
    NoCollisionRetries,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::NoWalkers => write!(f, "Number of walkers must be at least 1"),
            ValidationError::NoSteps => write!(f, "Number of steps must be at least 1"),
            ValidationError::SpreadOutOfRange(v) => {
                write!(f, "Parts of screen used must be in (0, 1], got {}", v)
            }
            ValidationError::InvalidWindowHeight(h) => {
                write!(f, "Window height must be positive and finite, got {}", h)
            }
            ValidationError::InvalidContainer { width, height } => {
                write!(f, "Container must have a positive size, got {}x{}", width, height)
            }
            ValidationError::NonFiniteCorner { x, y } => {
                write!(f, "Spawn corner must be finite, got ({}, {})", x, y)
            }
            ValidationError::NoCollisionRetries => {
                write!(f, "Max collision retries must be at least 1")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validator for walk configuration
pub struct WalkValidator;

impl WalkValidator {
    /// Validate a config, returning all errors found
    pub fn validate(config: &WalkConfig) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if config.number_of_walkers == 0 {
            errors.push(ValidationError::NoWalkers);
        }

        if config.number_of_steps == 0 {
            errors.push(ValidationError::NoSteps);
        }

        // NaN fails both comparisons and lands here too
        let spread = config.parts_of_screen_used;
        if !(spread > 0.0 && spread <= 1.0) {
            errors.push(ValidationError::SpreadOutOfRange(spread));
        }

        let height = config.window_height;
        if !(height.is_finite() && height > 0.0) {
            errors.push(ValidationError::InvalidWindowHeight(height));
        }

        let (width, c_height) = (config.container_width, config.container_height);
        if !(width.is_finite() && c_height.is_finite() && width > 0.0 && c_height > 0.0) {
            errors.push(ValidationError::InvalidContainer {
                width,
                height: c_height,
            });
        }

        if !config.spawn_corner().is_finite() {
            errors.push(ValidationError::NonFiniteCorner {
                x: config.x_coord_upper_corner,
                y: config.y_coord_upper_corner,
            });
        }

        if config.max_collision_retries == 0 {
            errors.push(ValidationError::NoCollisionRetries);
        }

        errors
    }

    /// Validate and return Result (Ok if no errors, Err with all errors)
    pub fn validate_or_error(config: &WalkConfig) -> Result<(), Vec<ValidationError>> {
        let errors = Self::validate(config);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
