use glam::Vec3;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::collision::SphereCollider;
use crate::config::ClothConfig;
use crate::diagnostics::ClothDiagnostics;
use crate::error::{ConfigError, StateError};
use crate::forces::particle_force;
use crate::grid::GridDims;
use crate::normals::estimate_normal;
use crate::particle::ParticleState;

/// Two-phase explicit cloth integrator.
///
/// The host calls [`init`](Self::init) once, then alternates
/// [`step_velocity`](Self::step_velocity) and
/// [`step_position`](Self::step_position) (or calls [`tick`](Self::tick)).
/// Each phase is a complete pass over the grid; every read inside a pass sees
/// the state committed by the previous pass, never a value written in the
/// same pass.
pub struct ClothSolver {
    config: ClothConfig,
    grid: GridDims,
    particles: ParticleState,
    /// Velocity phase output, swapped into `particles` when the pass ends.
    next_velocity: Vec<Vec3>,
    next_normal: Vec<Vec3>,
    initialized: bool,
    steps: u64,
    reported_non_finite: bool,
}

impl ClothSolver {
    pub fn new(config: ClothConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let critical_dt = config.critical_time_step();
        if config.dt > critical_dt {
            log::warn!(
                "time step {} exceeds the explicit stability estimate {}; the cloth may diverge",
                config.dt,
                critical_dt
            );
        }

        let grid = config.grid();
        let count = grid.len();
        Ok(Self {
            config,
            grid,
            particles: ParticleState::new(count),
            next_velocity: vec![Vec3::ZERO; count],
            next_normal: vec![Vec3::ZERO; count],
            initialized: false,
            steps: 0,
            reported_non_finite: false,
        })
    }

    pub fn config(&self) -> &ClothConfig {
        &self.config
    }

    /// Mutable access for the host to retune parameters between phases.
    ///
    /// The grid is fixed at construction: edits to `width` and `height` are
    /// ignored.
    pub fn config_mut(&mut self) -> &mut ClothConfig {
        &mut self.config
    }

    pub fn set_collider(&mut self, collider: Option<SphereCollider>) {
        self.config.collider = collider;
    }

    pub fn grid(&self) -> &GridDims {
        &self.grid
    }

    pub fn particles(&self) -> &ParticleState {
        &self.particles
    }

    /// Direct state access, e.g. to seed velocities or restore a snapshot.
    pub fn particles_mut(&mut self) -> &mut ParticleState {
        &mut self.particles
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Number of completed position phases since `init`.
    pub fn step_count(&self) -> u64 {
        self.steps
    }

    /// Whether the position phase leaves this particle in place.
    #[inline]
    pub fn is_pinned(&self, index: usize) -> bool {
        self.grid.pinned_corners().contains(&index)
    }

    /// Lay the particles out as a flat sheet in the XZ plane.
    ///
    /// Particle `(x, y)` goes to `origin + (x * L, 0, -y * L)` where `L` is
    /// the structural rest length, with zero velocity and a `+Y` normal.
    pub fn init(&mut self) {
        let spacing = self.config.spacing();
        let origin = self.config.origin;
        for i in 0..self.particles.count {
            let (x, y) = self.grid.coords(i);
            self.particles.position[i] =
                origin + Vec3::new(x as f32 * spacing, 0.0, -(y as f32) * spacing);
            self.particles.velocity[i] = Vec3::ZERO;
            self.particles.normal[i] = Vec3::Y;
        }
        self.initialized = true;
        self.steps = 0;
        self.reported_non_finite = false;

        log::debug!(
            "cloth initialized: {}x{} particles, spacing {}",
            self.grid.width,
            self.grid.height,
            spacing
        );
    }

    /// Velocity phase: integrate forces into velocity and refresh normals for
    /// every particle, pinned ones included.
    pub fn step_velocity(&mut self) -> Result<(), StateError> {
        if !self.initialized {
            return Err(StateError::NotInitialized);
        }

        let config = &self.config;
        let grid = &self.grid;
        let particles = &self.particles;

        #[cfg(feature = "parallel")]
        {
            self.next_velocity
                .par_iter_mut()
                .zip(self.next_normal.par_iter_mut())
                .enumerate()
                .for_each(|(i, (v, n))| {
                    (*v, *n) = velocity_update(config, grid, particles, i);
                });
        }

        #[cfg(not(feature = "parallel"))]
        {
            for (i, (v, n)) in self
                .next_velocity
                .iter_mut()
                .zip(self.next_normal.iter_mut())
                .enumerate()
            {
                (*v, *n) = velocity_update(config, grid, particles, i);
            }
        }

        // Commit the pass.
        std::mem::swap(&mut self.particles.velocity, &mut self.next_velocity);
        std::mem::swap(&mut self.particles.normal, &mut self.next_normal);

        if log::log_enabled!(log::Level::Debug) {
            log::debug!(
                "velocity phase {}: kinetic energy {}",
                self.steps,
                self.particles.kinetic_energy(self.config.mass)
            );
        }
        Ok(())
    }

    /// Position phase: advance every non-pinned particle by its committed
    /// velocity, then resolve sphere penetration.
    pub fn step_position(&mut self) -> Result<(), StateError> {
        if !self.initialized {
            return Err(StateError::NotInitialized);
        }

        let dt = self.config.dt;
        let collider = self.config.collider;
        let pinned = self.grid.pinned_corners();

        #[cfg(feature = "parallel")]
        {
            self.particles
                .position
                .par_iter_mut()
                .zip(self.particles.velocity.par_iter_mut())
                .enumerate()
                .for_each(|(i, (p, v))| {
                    if !pinned.contains(&i) {
                        position_update(p, v, dt, collider.as_ref());
                    }
                });
        }

        #[cfg(not(feature = "parallel"))]
        {
            for (i, (p, v)) in self
                .particles
                .position
                .iter_mut()
                .zip(self.particles.velocity.iter_mut())
                .enumerate()
            {
                if !pinned.contains(&i) {
                    position_update(p, v, dt, collider.as_ref());
                }
            }
        }

        self.steps += 1;

        if !self.reported_non_finite && !self.particles.is_finite() {
            self.reported_non_finite = true;
            log::warn!(
                "cloth state became non-finite after {} steps (dt {}, stability estimate {})",
                self.steps,
                dt,
                self.config.critical_time_step()
            );
        }
        Ok(())
    }

    /// One full simulation tick: velocity phase, then position phase.
    pub fn tick(&mut self) -> Result<(), StateError> {
        self.step_velocity()?;
        self.step_position()
    }

    pub fn diagnostics(&self) -> ClothDiagnostics {
        ClothDiagnostics::measure(&self.config, &self.grid, &self.particles)
    }
}

/// New velocity and normal for particle `i`, computed from the committed
/// state only.
#[inline]
fn velocity_update(
    config: &ClothConfig,
    grid: &GridDims,
    particles: &ParticleState,
    i: usize,
) -> (Vec3, Vec3) {
    let force = particle_force(config, grid, particles, i);
    let velocity = particles.velocity[i] + force / config.mass * config.dt;

    let (x, y) = grid.coords(i);
    let normal = estimate_normal(grid, &particles.position, x, y, config.normal_mode)
        .unwrap_or(particles.normal[i]);

    (velocity, normal)
}

#[inline]
fn position_update(p: &mut Vec3, v: &mut Vec3, dt: f32, collider: Option<&SphereCollider>) {
    *p += *v * dt;
    if let Some(sphere) = collider {
        if let Some((pos, vel)) = sphere.resolve(*p, *v) {
            *p = pos;
            *v = vel;
        }
    }
}
