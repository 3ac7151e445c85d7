use crate::config::ClothConfig;
use crate::grid::GridDims;
use crate::particle::ParticleState;
use crate::spring::{SpringKind, SPRING_OFFSETS};

/// Snapshot of cloth health, for hosts that want to detect divergence.
///
/// The explicit integrator has no internal safeguard against large time steps
/// or stiff springs; instability shows up here as growing energy, runaway
/// stretch, or non-finite state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClothDiagnostics {
    /// Total kinetic energy `sum(0.5 * M * |v|^2)`.
    pub kinetic_energy: f32,
    /// Largest structural spring length divided by its rest length.
    pub max_stretch: f32,
    /// Smallest structural spring length divided by its rest length.
    pub min_stretch: f32,
    /// Signed distance of the closest particle to the collider surface.
    pub collider_clearance: Option<f32>,
    pub is_finite: bool,
    /// Stability estimate for the current parameters.
    pub critical_time_step: f32,
}

impl ClothDiagnostics {
    pub fn measure(config: &ClothConfig, grid: &GridDims, particles: &ParticleState) -> Self {
        let rest = config.rest_lengths.get(SpringKind::Structural);
        let mut max_stretch = 0.0_f32;
        let mut min_stretch = f32::INFINITY;

        for i in 0..particles.count {
            let (x, y) = grid.coords(i);
            // Each structural spring once: only the +x and +y partners.
            for o in SPRING_OFFSETS
                .iter()
                .filter(|o| o.kind == SpringKind::Structural && o.dx >= 0 && o.dy >= 0)
            {
                if let Some(j) = grid.offset(x, y, o.dx, o.dy) {
                    let ratio = (particles.position[i] - particles.position[j]).length() / rest;
                    max_stretch = max_stretch.max(ratio);
                    min_stretch = min_stretch.min(ratio);
                }
            }
        }
        if min_stretch == f32::INFINITY {
            // No structural springs (1x1 grid).
            min_stretch = 1.0;
            max_stretch = 1.0;
        }

        let collider_clearance = config.collider.map(|sphere| {
            particles
                .position
                .iter()
                .map(|&p| sphere.penetration(p))
                .fold(f32::INFINITY, f32::min)
        });

        Self {
            kinetic_energy: particles.kinetic_energy(config.mass),
            max_stretch,
            min_stretch,
            collider_clearance,
            is_finite: particles.is_finite(),
            critical_time_step: config.critical_time_step(),
        }
    }

    /// Finite state with a stable time step for `dt`.
    pub fn is_stable(&self, dt: f32) -> bool {
        self.is_finite && dt <= self.critical_time_step
    }
}
