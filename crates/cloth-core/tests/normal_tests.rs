use cloth_core::grid::GridDims;
use cloth_core::normals::{estimate_normal, NormalMode};
use glam::Vec3;

fn sheet(grid: &GridDims) -> Vec<Vec3> {
    (0..grid.len())
        .map(|i| {
            let (x, y) = grid.coords(i);
            Vec3::new(x as f32, 0.0, -(y as f32))
        })
        .collect()
}

#[test]
fn test_first_pair_ignores_later_neighbors() {
    // Raise the center's up neighbor. The first pair (right->up) sees the
    // bump; the averaged normal also blends in the flat lower pairs.
    let grid = GridDims::new(3, 3);
    let mut positions = sheet(&grid);
    positions[grid.index(1, 2)].y = 1.0;

    let first = estimate_normal(&grid, &positions, 1, 1, NormalMode::FirstValidPair).unwrap();
    let averaged = estimate_normal(&grid, &positions, 1, 1, NormalMode::Averaged).unwrap();

    let expected_first = Vec3::new(0.0, 1.0, 1.0).normalize();
    assert!((first - expected_first).length() < 1e-6, "first pair normal {first}");
    assert!((averaged.length() - 1.0).abs() < 1e-6);
    assert!(
        averaged.y > first.y,
        "averaged normal should be closer to +Y: {averaged} vs {first}"
    );
}

#[test]
fn test_edge_particles_use_available_pair() {
    // Drop the far corner out of the plane; it has a single valid pair.
    let grid = GridDims::new(3, 3);
    let mut positions = sheet(&grid);
    positions[grid.index(2, 2)].y = -1.0;

    let n = estimate_normal(&grid, &positions, 2, 2, NormalMode::FirstValidPair).unwrap();
    let p = positions[grid.index(2, 2)];
    let left = positions[grid.index(1, 2)];
    let down = positions[grid.index(2, 1)];
    let expected = (left - p).cross(down - p).normalize();
    assert!((n - expected).length() < 1e-6, "corner normal {n}, expected {expected}");
}

#[test]
fn test_collinear_neighbors_give_no_normal() {
    // Fold the right neighbor back onto the up direction so the first
    // pair is degenerate.
    let grid = GridDims::new(2, 2);
    let mut positions = sheet(&grid);
    positions[grid.index(1, 0)] = Vec3::new(0.0, 0.0, -2.0);

    assert!(estimate_normal(&grid, &positions, 0, 0, NormalMode::FirstValidPair).is_none());
}
