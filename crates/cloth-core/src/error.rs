use std::fmt;

use crate::spring::SpringKind;

/// Rejected cloth configuration.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    EmptyGrid { width: usize, height: usize },
    NonPositiveMass(f32),
    NonPositiveTimeStep(f32),
    NonPositiveRestLength { kind: SpringKind, value: f32 },
    NegativeStiffness { kind: SpringKind, value: f32 },
    NegativeRadius(f32),
    /// A parameter holds NaN or infinity.
    NonFinite(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyGrid { width, height } => {
                write!(f, "cloth grid {}x{} has no particles", width, height)
            }
            ConfigError::NonPositiveMass(m) => write!(f, "particle mass must be positive, got {}", m),
            ConfigError::NonPositiveTimeStep(dt) => {
                write!(f, "time step must be positive, got {}", dt)
            }
            ConfigError::NonPositiveRestLength { kind, value } => {
                write!(f, "{:?} rest length must be positive, got {}", kind, value)
            }
            ConfigError::NegativeStiffness { kind, value } => {
                write!(f, "{:?} stiffness must not be negative, got {}", kind, value)
            }
            ConfigError::NegativeRadius(r) => {
                write!(f, "collider radius must not be negative, got {}", r)
            }
            ConfigError::NonFinite(field) => write!(f, "`{}` is not finite", field),
        }
    }
}

impl std::error::Error for ConfigError {}

/// A phase was invoked out of order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateError {
    /// `step_velocity` / `step_position` called before `init`.
    NotInitialized,
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateError::NotInitialized => write!(f, "cloth stepped before init"),
        }
    }
}

impl std::error::Error for StateError {}
