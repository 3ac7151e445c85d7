use glam::Vec3;

use crate::config::ClothConfig;
use crate::grid::GridDims;
use crate::particle::ParticleState;
use crate::spring::{spring_force, SPRING_OFFSETS};

/// Net force on the particle at `index`, read entirely from the committed
/// state in `particles`:
///
/// - spring forces from every partner in [`SPRING_OFFSETS`] that lies inside
///   the grid
/// - velocity damping `-Cd * v`
/// - gravity `g * M`
/// - wind drag `Cv * dot(n, Uf - v) * n` along the current normal
pub fn particle_force(
    config: &ClothConfig,
    grid: &GridDims,
    particles: &ParticleState,
    index: usize,
) -> Vec3 {
    let (x, y) = grid.coords(index);
    let p = particles.position[index];
    let v = particles.velocity[index];
    let n = particles.normal[index];

    let mut force = spring_sum(config, grid, &particles.position, x, y, p);

    force -= v * config.damping;
    force += config.gravity * config.mass;
    force += n * (config.viscosity * n.dot(config.wind - v));

    force
}

/// Sum of spring forces acting on the particle at `(x, y)` located at `p`.
pub fn spring_sum(
    config: &ClothConfig,
    grid: &GridDims,
    positions: &[Vec3],
    x: usize,
    y: usize,
    p: Vec3,
) -> Vec3 {
    let mut force = Vec3::ZERO;
    for o in SPRING_OFFSETS {
        let Some(j) = grid.offset(x, y, o.dx, o.dy) else {
            continue;
        };
        let k = config.stiffness_of(o.kind);
        if k == 0.0 {
            continue;
        }
        force += spring_force(
            p,
            positions[j],
            k,
            config.rest_lengths.get(o.kind),
            config.min_spring_length,
        );
    }
    force
}
