use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::collision::SphereCollider;
use crate::error::ConfigError;
use crate::grid::GridDims;
use crate::normals::NormalMode;
use crate::spring::SpringKind;

/// Standard gravity used by the default configuration.
pub const GRAVITY: Vec3 = Vec3::new(0.0, -9.8, 0.0);

/// Rest length per [`SpringKind`], indexed by the kind discriminant.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RestLengths(pub [f32; 3]);

impl RestLengths {
    /// Same rest length for every kind. Shear and bend springs of a sheet
    /// laid out at this spacing start compressed.
    pub fn uniform(length: f32) -> Self {
        Self([length; 3])
    }

    /// Lengths matching the geometry of a sheet with the given structural
    /// spacing: `spacing`, `spacing * sqrt(2)`, `2 * spacing`.
    pub fn from_spacing(spacing: f32) -> Self {
        Self([spacing, spacing * std::f32::consts::SQRT_2, spacing * 2.0])
    }

    #[inline]
    pub fn get(&self, kind: SpringKind) -> f32 {
        self.0[kind.index()]
    }
}

/// Cloth simulation parameters. Owned by the host; the solver only reads it
/// during a phase.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClothConfig {
    pub width: usize,
    pub height: usize,
    /// Spring stiffness per [`SpringKind`].
    pub stiffness: [f32; 3],
    pub rest_lengths: RestLengths,
    /// Mass of every particle.
    pub mass: f32,
    /// Linear velocity damping coefficient `Cd`.
    pub damping: f32,
    /// Gravitational acceleration; the force applied is `gravity * mass`.
    pub gravity: Vec3,
    /// Wind velocity `Uf`.
    pub wind: Vec3,
    /// Viscous drag coefficient `Cv` of the wind term.
    pub viscosity: f32,
    pub dt: f32,
    pub collider: Option<SphereCollider>,
    /// World position of particle `(0, 0)` after `init`.
    pub origin: Vec3,
    pub normal_mode: NormalMode,
    /// Springs shorter than this apply no force.
    pub min_spring_length: f32,
}

impl Default for ClothConfig {
    fn default() -> Self {
        Self {
            width: 32,
            height: 32,
            stiffness: [50.0, 25.0, 10.0],
            rest_lengths: RestLengths::from_spacing(0.1),
            mass: 0.01,
            damping: 0.0125,
            gravity: GRAVITY,
            wind: Vec3::ZERO,
            viscosity: 0.1,
            dt: 0.002,
            collider: None,
            origin: Vec3::ZERO,
            normal_mode: NormalMode::FirstValidPair,
            min_spring_length: 1e-6,
        }
    }
}

impl ClothConfig {
    /// Default parameters on a `width x height` grid with the given
    /// structural spacing.
    pub fn new(width: usize, height: usize, spacing: f32) -> Self {
        Self {
            width,
            height,
            rest_lengths: RestLengths::from_spacing(spacing),
            ..Self::default()
        }
    }

    pub fn grid(&self) -> GridDims {
        GridDims::new(self.width, self.height)
    }

    #[inline]
    pub fn stiffness_of(&self, kind: SpringKind) -> f32 {
        self.stiffness[kind.index()]
    }

    /// Sheet spacing used by `init`: the structural rest length.
    #[inline]
    pub fn spacing(&self) -> f32 {
        self.rest_lengths.get(SpringKind::Structural)
    }

    /// Largest stable time step estimate for the explicit integrator,
    /// `sqrt(M / sum(k))`. `f32::INFINITY` when every spring is disabled.
    pub fn critical_time_step(&self) -> f32 {
        let k_sum: f32 = self.stiffness.iter().sum();
        if k_sum <= 0.0 {
            return f32::INFINITY;
        }
        (self.mass / k_sum).sqrt()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyGrid {
                width: self.width,
                height: self.height,
            });
        }
        if !self.mass.is_finite() {
            return Err(ConfigError::NonFinite("mass"));
        }
        if self.mass <= 0.0 {
            return Err(ConfigError::NonPositiveMass(self.mass));
        }
        if !self.dt.is_finite() {
            return Err(ConfigError::NonFinite("dt"));
        }
        if self.dt <= 0.0 {
            return Err(ConfigError::NonPositiveTimeStep(self.dt));
        }
        for kind in SpringKind::ALL {
            let k = self.stiffness_of(kind);
            if !k.is_finite() {
                return Err(ConfigError::NonFinite("stiffness"));
            }
            if k < 0.0 {
                return Err(ConfigError::NegativeStiffness { kind, value: k });
            }
            let rest = self.rest_lengths.get(kind);
            if !rest.is_finite() {
                return Err(ConfigError::NonFinite("rest_lengths"));
            }
            if rest <= 0.0 {
                return Err(ConfigError::NonPositiveRestLength { kind, value: rest });
            }
        }
        if !self.damping.is_finite() {
            return Err(ConfigError::NonFinite("damping"));
        }
        if !self.viscosity.is_finite() {
            return Err(ConfigError::NonFinite("viscosity"));
        }
        if !self.gravity.is_finite() {
            return Err(ConfigError::NonFinite("gravity"));
        }
        if !self.wind.is_finite() {
            return Err(ConfigError::NonFinite("wind"));
        }
        if !self.origin.is_finite() {
            return Err(ConfigError::NonFinite("origin"));
        }
        if !self.min_spring_length.is_finite() {
            return Err(ConfigError::NonFinite("min_spring_length"));
        }
        if let Some(collider) = self.collider {
            if !collider.center.is_finite() || !collider.radius.is_finite() {
                return Err(ConfigError::NonFinite("collider"));
            }
            if collider.radius < 0.0 {
                return Err(ConfigError::NegativeRadius(collider.radius));
            }
        }
        Ok(())
    }
}
