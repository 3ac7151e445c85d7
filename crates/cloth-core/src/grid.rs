use serde::{Deserialize, Serialize};

/// Dimensions of the cloth particle lattice.
///
/// Particles are addressed either by grid coordinate `(x, y)` or by the
/// row-major linear index `y * width + x` used by the particle buffers.
/// Coordinates are signed so neighbor offsets can step off the edge and be
/// rejected by [`GridDims::is_valid`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridDims {
    pub width: usize,
    pub height: usize,
}

impl GridDims {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Number of particles in the grid.
    #[inline]
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Row-major linear index. The coordinate must be valid.
    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y * self.width + x
    }

    /// Inverse of [`GridDims::index`].
    #[inline]
    pub fn coords(&self, index: usize) -> (usize, usize) {
        (index % self.width, index / self.width)
    }

    #[inline]
    pub fn is_valid(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Index of the particle at `(x + dx, y + dy)`, or `None` when that
    /// coordinate lies outside the grid.
    #[inline]
    pub fn offset(&self, x: usize, y: usize, dx: i32, dy: i32) -> Option<usize> {
        let nx = x as i64 + dx as i64;
        let ny = y as i64 + dy as i64;
        if self.is_valid(nx, ny) {
            Some(ny as usize * self.width + nx as usize)
        } else {
            None
        }
    }

    /// The two corners of the first row, `(0, 0)` and `(width - 1, 0)`.
    ///
    /// Both entries are the same index on a single-column grid.
    pub fn pinned_corners(&self) -> [usize; 2] {
        [0, self.width.saturating_sub(1)]
    }

    /// Triangle list covering every grid quad, two triangles per quad,
    /// wound so the face normal agrees with the particle normals of a
    /// freshly initialized sheet.
    pub fn triangle_indices(&self) -> Vec<u32> {
        if self.width < 2 || self.height < 2 {
            return Vec::new();
        }
        let mut indices = Vec::with_capacity((self.width - 1) * (self.height - 1) * 6);
        for y in 0..self.height - 1 {
            for x in 0..self.width - 1 {
                let i = self.index(x, y) as u32;
                let right = i + 1;
                let up = i + self.width as u32;
                let up_right = up + 1;
                indices.extend_from_slice(&[i, right, up, right, up_right, up]);
            }
        }
        indices
    }
}
