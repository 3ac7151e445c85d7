use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Rigid sphere obstacle. The host may move it between steps.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SphereCollider {
    pub center: Vec3,
    pub radius: f32,
}

impl SphereCollider {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Signed distance from `pos` to the sphere surface (negative inside).
    #[inline]
    pub fn penetration(&self, pos: Vec3) -> f32 {
        (pos - self.center).length() - self.radius
    }

    /// Project a penetrating particle back onto the surface.
    ///
    /// The particle is pushed out along the contact normal and the normal
    /// component of its velocity is removed; the tangential component is kept
    /// (frictionless slide, no bounce). Returns `None` when `pos` is outside
    /// the sphere.
    ///
    /// A particle exactly at the center has no defined normal and is pushed
    /// out along `+Y`.
    pub fn resolve(&self, pos: Vec3, vel: Vec3) -> Option<(Vec3, Vec3)> {
        let penetration = self.penetration(pos);
        if penetration >= 0.0 {
            return None;
        }
        let normal = (pos - self.center).try_normalize().unwrap_or(Vec3::Y);
        let pos = pos - normal * penetration;
        let vel = vel - normal * vel.dot(normal);
        Some((pos, vel))
    }
}
