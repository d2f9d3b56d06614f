//! Simulation error types

use std::fmt;

use crate::validation::ValidationError;

/// Error type for walker collection operations
#[derive(Debug, Clone, PartialEq)]
pub enum WalkError {
    /// Configuration rejected by the validator
    InvalidConfig(Vec<ValidationError>),
    /// A pointer or spawn position with a NaN or infinite coordinate
    NonFinitePosition { x: f32, y: f32 },
    /// Walker index outside the collection
    WalkerOutOfRange { index: usize, len: usize },
}

impl fmt::Display for WalkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalkError::InvalidConfig(errors) => {
                write!(f, "Invalid walk configuration: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
            WalkError::NonFinitePosition { x, y } => {
                write!(f, "Non-finite walker position: ({}, {})", x, y)
            }
            WalkError::WalkerOutOfRange { index, len } => {
                write!(f, "Walker index {} out of range (collection has {})", index, len)
            }
        }
    }
}

impl std::error::Error for WalkError {}

impl From<Vec<ValidationError>> for WalkError {
    fn from(errors: Vec<ValidationError>) -> Self {
        WalkError::InvalidConfig(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_display_joins_errors() {
        let err = WalkError::InvalidConfig(vec![
            ValidationError::NoWalkers,
            ValidationError::NoSteps,
        ]);
        let msg = err.to_string();
        assert!(msg.starts_with("Invalid walk configuration"));
        assert!(msg.contains("walkers"));
        assert!(msg.contains("; "));
        assert!(msg.contains("steps"));
    }

    #[test]
    fn test_non_finite_display() {
        let err = WalkError::NonFinitePosition { x: f32::NAN, y: 1.0 };
        assert!(err.to_string().contains("NaN"));
    }

    #[test]
    fn test_out_of_range_display() {
        let err = WalkError::WalkerOutOfRange { index: 5, len: 2 };
        assert_eq!(
            err.to_string(),
            "Walker index 5 out of range (collection has 2)"
        );
    }

    #[test]
    fn test_from_validation_errors() {
        let err: WalkError = vec![ValidationError::NoSteps].into();
        match err {
            WalkError::InvalidConfig(errors) => assert_eq!(errors, vec![ValidationError::NoSteps]),
            _ => panic!("Expected InvalidConfig variant"),
        }
    }
}
