use cloth_core::collision::SphereCollider;
use cloth_core::config::ClothConfig;
use cloth_core::ClothSolver;
use glam::Vec3;

#[test]
fn test_fresh_sheet_is_at_rest() {
    let mut config = ClothConfig::new(5, 4, 0.5);
    config.collider = Some(SphereCollider::new(Vec3::new(0.0, -2.0, 0.0), 1.0));
    let mut solver = ClothSolver::new(config).unwrap();
    solver.init();

    let diag = solver.diagnostics();
    assert_eq!(diag.kinetic_energy, 0.0);
    assert!((diag.max_stretch - 1.0).abs() < 1e-5, "max stretch {}", diag.max_stretch);
    assert!((diag.min_stretch - 1.0).abs() < 1e-5, "min stretch {}", diag.min_stretch);
    assert!(diag.is_finite);
    assert!(diag.is_stable(solver.config().dt));

    // The sheet's closest point is (0, 0, 0), one unit above the surface.
    let clearance = diag.collider_clearance.unwrap();
    assert!((clearance - 1.0).abs() < 1e-5, "clearance {clearance}");
}

#[test]
fn test_hanging_sheet_stretches() {
    let mut solver = ClothSolver::new(ClothConfig::new(8, 8, 0.1)).unwrap();
    solver.init();
    for _ in 0..200 {
        solver.tick().unwrap();
    }

    let diag = solver.diagnostics();
    assert!(diag.kinetic_energy > 0.0);
    assert!(diag.max_stretch > 1.0, "gravity should stretch springs near the pins");
    assert!(diag.collider_clearance.is_none());
}

#[test]
fn test_non_finite_state_is_reported() {
    let mut solver = ClothSolver::new(ClothConfig::new(3, 3, 0.1)).unwrap();
    solver.init();
    solver.particles_mut().velocity[4] = Vec3::new(f32::NAN, 0.0, 0.0);

    assert!(!solver.diagnostics().is_finite);
    assert!(!solver.diagnostics().is_stable(solver.config().dt));
}

#[test]
fn test_single_particle_has_unit_stretch() {
    let mut solver = ClothSolver::new(ClothConfig::new(1, 1, 0.1)).unwrap();
    solver.init();
    let diag = solver.diagnostics();
    assert_eq!(diag.max_stretch, 1.0);
    assert_eq!(diag.min_stretch, 1.0);
}
