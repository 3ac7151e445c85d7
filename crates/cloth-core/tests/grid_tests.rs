use cloth_core::grid::GridDims;
use cloth_core::spring::SPRING_OFFSETS;
use cloth_core::{ClothConfig, ClothSolver};
use glam::Vec3;

#[test]
fn test_index_coords_bijection() {
    let grid = GridDims::new(7, 5);
    let mut seen = vec![false; grid.len()];

    for y in 0..grid.height {
        for x in 0..grid.width {
            let i = grid.index(x, y);
            assert!(i < grid.len(), "index {i} out of range for ({x},{y})");
            assert!(!seen[i], "index {i} produced twice");
            seen[i] = true;
            assert_eq!(grid.coords(i), (x, y), "coords(index({x},{y}))");
        }
    }
    assert!(seen.iter().all(|&s| s), "every index should be reached");
}

#[test]
fn test_is_valid_bounds() {
    let grid = GridDims::new(4, 3);
    assert!(grid.is_valid(0, 0));
    assert!(grid.is_valid(3, 2));
    assert!(!grid.is_valid(-1, 0));
    assert!(!grid.is_valid(0, -1));
    assert!(!grid.is_valid(4, 0));
    assert!(!grid.is_valid(0, 3));
}

#[test]
fn test_offsets_never_leave_grid() {
    let grid = GridDims::new(4, 3);
    for i in 0..grid.len() {
        let (x, y) = grid.coords(i);
        for o in SPRING_OFFSETS {
            let tx = x as i64 + o.dx as i64;
            let ty = y as i64 + o.dy as i64;
            let inside = tx >= 0 && ty >= 0 && tx < 4 && ty < 3;
            match grid.offset(x, y, o.dx, o.dy) {
                Some(j) => {
                    assert!(inside, "({x},{y}) + ({},{}) should be rejected", o.dx, o.dy);
                    assert_eq!(grid.coords(j), (tx as usize, ty as usize));
                }
                None => assert!(!inside, "({x},{y}) + ({},{}) should be accepted", o.dx, o.dy),
            }
        }
    }
}

#[test]
fn test_boundary_particles_ignore_missing_neighbors() {
    // A sheet at rest, far from the origin, with only springs acting. If a
    // missing neighbor were read as a zero position the edge particles would
    // be yanked toward the origin.
    let mut config = ClothConfig::new(4, 4, 0.5);
    config.origin = Vec3::new(10.0, 3.0, 10.0);
    config.gravity = Vec3::ZERO;
    config.damping = 0.0;
    config.viscosity = 0.0;

    let mut solver = ClothSolver::new(config).unwrap();
    solver.init();
    solver.step_velocity().unwrap();

    for (i, v) in solver.particles().velocity.iter().enumerate() {
        assert!(v.length() < 1e-4, "particle {i} should stay at rest, got velocity {v}");
    }
}

#[test]
fn test_pinned_corners() {
    assert_eq!(GridDims::new(5, 3).pinned_corners(), [0, 4]);
    assert_eq!(GridDims::new(1, 3).pinned_corners(), [0, 0]);
}

#[test]
fn test_triangle_indices_face_up_on_flat_sheet() {
    let mut solver = ClothSolver::new(ClothConfig::new(3, 2, 1.0)).unwrap();
    solver.init();
    let grid = solver.grid();
    let indices = grid.triangle_indices();
    assert_eq!(indices.len(), 2 * 1 * 6, "two quads, two triangles each");

    let pos = &solver.particles().position;
    for tri in indices.chunks(3) {
        let (a, b, c) = (pos[tri[0] as usize], pos[tri[1] as usize], pos[tri[2] as usize]);
        let n = (b - a).cross(c - a).normalize();
        assert!((n - Vec3::Y).length() < 1e-6, "triangle {tri:?} faces {n}");
    }
}

#[test]
fn test_triangle_indices_empty_for_strip() {
    assert!(GridDims::new(1, 5).triangle_indices().is_empty());
    assert!(GridDims::new(5, 1).triangle_indices().is_empty());
}
