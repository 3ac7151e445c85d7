use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::grid::GridDims;

/// How a particle's surface normal is derived from its neighbors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NormalMode {
    /// Use only the first neighbor pair (in [`NORMAL_PAIRS`] order) whose
    /// particles both exist.
    #[default]
    FirstValidPair,
    /// Average the face normals of every neighbor pair that exists.
    Averaged,
}

/// Neighbor pairs scanned counter-clockwise around a particle:
/// right->up, up->left, left->down, down->right.
pub const NORMAL_PAIRS: [((i32, i32), (i32, i32)); 4] = [
    ((1, 0), (0, 1)),
    ((0, 1), (-1, 0)),
    ((-1, 0), (0, -1)),
    ((0, -1), (1, 0)),
];

/// Estimate the unit normal of the particle at `(x, y)` from the positions
/// of its axis-aligned neighbors.
///
/// Returns `None` when no neighbor pair exists (single row or column) or the
/// neighbors are collinear with the particle; callers keep the previous
/// normal in that case.
pub fn estimate_normal(
    grid: &GridDims,
    positions: &[Vec3],
    x: usize,
    y: usize,
    mode: NormalMode,
) -> Option<Vec3> {
    let p = positions[grid.index(x, y)];
    let mut sum = Vec3::ZERO;

    for ((ax, ay), (bx, by)) in NORMAL_PAIRS {
        let (Some(a), Some(b)) = (grid.offset(x, y, ax, ay), grid.offset(x, y, bx, by)) else {
            continue;
        };
        let face = (positions[a] - p).cross(positions[b] - p);
        match mode {
            NormalMode::FirstValidPair => {
                sum = face.try_normalize()?;
                break;
            }
            NormalMode::Averaged => {
                if let Some(n) = face.try_normalize() {
                    sum += n;
                }
            }
        }
    }

    sum.try_normalize()
}
