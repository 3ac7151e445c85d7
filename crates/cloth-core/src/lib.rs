//! Mass-spring cloth simulation core.
//!
//! A regular grid of point masses joined by structural, shear and bending
//! springs, advanced by a two-phase explicit integrator: a velocity pass
//! (forces, normals) followed by a position pass (pinning, sphere collision).
//! Each pass reads only the state committed by the previous pass.
pub mod collision;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod forces;
pub mod grid;
pub mod normals;
pub mod particle;
pub mod solver;
pub mod spring;

pub use collision::SphereCollider;
pub use config::{ClothConfig, RestLengths};
pub use error::{ConfigError, StateError};
pub use grid::GridDims;
pub use normals::NormalMode;
pub use particle::ParticleState;
pub use solver::ClothSolver;
pub use spring::SpringKind;
