use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Spring category. The discriminant indexes the per-kind stiffness and
/// rest-length arrays of [`ClothConfig`](crate::config::ClothConfig).
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum SpringKind {
    Structural = 0, // axis-aligned neighbors
    Shear = 1,      // diagonal neighbors
    Bend = 2,       // neighbors two cells away
}

impl SpringKind {
    pub const ALL: [SpringKind; 3] = [SpringKind::Structural, SpringKind::Shear, SpringKind::Bend];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A grid offset from a particle to one of its spring partners.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpringOffset {
    pub dx: i32,
    pub dy: i32,
    pub kind: SpringKind,
}

const fn offset(dx: i32, dy: i32, kind: SpringKind) -> SpringOffset {
    SpringOffset { dx, dy, kind }
}

/// The twelve springs attached to every particle. Partners outside the grid
/// are skipped by the caller.
pub const SPRING_OFFSETS: [SpringOffset; 12] = [
    offset(1, 0, SpringKind::Structural),
    offset(-1, 0, SpringKind::Structural),
    offset(0, 1, SpringKind::Structural),
    offset(0, -1, SpringKind::Structural),
    offset(1, 1, SpringKind::Shear),
    offset(1, -1, SpringKind::Shear),
    offset(-1, 1, SpringKind::Shear),
    offset(-1, -1, SpringKind::Shear),
    offset(2, 0, SpringKind::Bend),
    offset(-2, 0, SpringKind::Bend),
    offset(0, 2, SpringKind::Bend),
    offset(0, -2, SpringKind::Bend),
];

/// Hookean spring force exerted on the particle at `p` by the spring joining
/// it to `q`.
///
/// ```text
/// d = p - q
/// F = d * k * (rest / |d| - 1)
/// ```
///
/// The force pulls `p` toward `q` when the spring is stretched past
/// `rest_length` and pushes it away when compressed. When the two ends are
/// closer than `min_length` the direction is undefined and no force is
/// applied.
#[inline]
pub fn spring_force(p: Vec3, q: Vec3, stiffness: f32, rest_length: f32, min_length: f32) -> Vec3 {
    let d = p - q;
    let len = d.length();
    if len <= min_length {
        return Vec3::ZERO;
    }
    d * stiffness * (rest_length / len - 1.0)
}
