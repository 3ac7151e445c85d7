use glam::Vec3;

/// SoA particle storage, addressed by the grid's linear index.
///
/// These three arrays are the only mutable simulation state. The solver owns
/// them and hands out shared access between phases.
#[derive(Clone, Debug)]
pub struct ParticleState {
    pub count: usize,
    pub position: Vec<Vec3>,
    pub velocity: Vec<Vec3>,
    /// Unit surface normal, refreshed every velocity phase.
    pub normal: Vec<Vec3>,
}

impl ParticleState {
    pub fn new(count: usize) -> Self {
        Self {
            count,
            position: vec![Vec3::ZERO; count],
            velocity: vec![Vec3::ZERO; count],
            normal: vec![Vec3::ZERO; count],
        }
    }

    /// Total kinetic energy for a uniform per-particle mass.
    pub fn kinetic_energy(&self, mass: f32) -> f32 {
        0.5 * mass * self.velocity.iter().map(|v| v.length_squared()).sum::<f32>()
    }

    /// True when no position or velocity holds NaN or infinity.
    pub fn is_finite(&self) -> bool {
        self.position.iter().all(|p| p.is_finite()) && self.velocity.iter().all(|v| v.is_finite())
    }
}
