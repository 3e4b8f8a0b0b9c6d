use sdf::{cube_sdf, Primitive, Vec3, DEFAULT_COLOR};

const EPS: f32 = 1e-6;

fn unit_cube() -> Primitive {
    // Edge length 2, so faces sit at +-1.
    Primitive::cube(Vec3::ZERO, 2.0, DEFAULT_COLOR).unwrap()
}

#[test]
fn sphere_interior_points_match_length_minus_radius() {
    fastrand::seed(7);
    let radius = 2.0;
    let sphere = Primitive::sphere(Vec3::ZERO, radius, DEFAULT_COLOR).unwrap();

    let mut checked = 0;
    while checked < 500 {
        let p = Vec3::new(
            fastrand::f32() * 4.0 - 2.0,
            fastrand::f32() * 4.0 - 2.0,
            fastrand::f32() * 4.0 - 2.0,
        );
        if p.length() >= radius {
            continue;
        }
        let d = sphere.distance(p);
        assert!(d < 0.0, "{p:?} should be inside, got {d}");
        assert!((d - (p.length() - radius)).abs() < EPS);
        checked += 1;
    }
}

#[test]
fn sphere_surface_and_outside() {
    let sphere = Primitive::sphere(Vec3::new(1.0, 2.0, 3.0), 1.5, DEFAULT_COLOR).unwrap();
    assert!(sphere.distance(Vec3::new(2.5, 2.0, 3.0)).abs() < EPS);
    assert!((sphere.distance(Vec3::new(1.0, 6.0, 3.0)) - 2.5).abs() < EPS);
    assert!((sphere.distance(Vec3::new(1.0, 2.0, 3.0)) + 1.5).abs() < EPS);
}

#[test]
fn cube_inside() {
    let cube = unit_cube();
    assert!((cube.distance(Vec3::ZERO) + 1.0).abs() < EPS);
    assert!((cube.distance(Vec3::new(0.5, 0.0, 0.0)) + 0.5).abs() < EPS);
    assert!((cube.distance(Vec3::new(0.2, -0.7, 0.4)) + 0.3).abs() < EPS);
}

#[test]
fn cube_face_edge_and_corner_are_on_surface() {
    let cube = unit_cube();
    for p in [
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(0.0, -1.0, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(-1.0, 0.0, 1.0),
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(-1.0, -1.0, -1.0),
    ] {
        assert!(cube.distance(p).abs() < EPS, "{p:?} -> {}", cube.distance(p));
    }
}

#[test]
fn cube_outside_face_region_is_axis_distance() {
    let cube = unit_cube();
    assert!((cube.distance(Vec3::new(2.0, 0.0, 0.0)) - 1.0).abs() < EPS);
    assert!((cube.distance(Vec3::new(0.3, 0.0, -3.5)) - 2.5).abs() < EPS);
}

#[test]
fn cube_outside_edge_region() {
    let cube = unit_cube();
    let d = cube.distance(Vec3::new(2.0, 2.0, 0.0));
    assert!((d - 2.0_f32.sqrt()).abs() < EPS);
}

#[test]
fn cube_outside_corner_is_euclidean_distance_to_corner() {
    let cube = unit_cube();
    let corner = Vec3::new(1.0, 1.0, 1.0);
    for p in [
        Vec3::new(2.0, 2.0, 2.0),
        Vec3::new(1.5, 3.0, 1.25),
        Vec3::new(4.0, 1.1, 2.0),
    ] {
        let d = cube.distance(p);
        assert!((d - p.distance(corner)).abs() < EPS, "{p:?}: {d}");
    }
    // The sum-of-overshoots form would give 3.0 here.
    assert!((cube.distance(Vec3::new(2.0, 2.0, 2.0)) - 3.0_f32.sqrt()).abs() < EPS);
}

#[test]
fn cube_far_outside() {
    let cube = Primitive::cube(Vec3::new(3.0, 3.0, 5.0), 1.0, DEFAULT_COLOR).unwrap();
    let d = cube.distance(Vec3::new(100.0, 3.0, 5.0));
    assert!((d - 96.5).abs() < 1e-4);
}

#[test]
fn cube_sdf_free_function_matches_primitive() {
    let cube = Primitive::cube(Vec3::new(1.0, -1.0, 2.0), 3.0, DEFAULT_COLOR).unwrap();
    let p = Vec3::new(4.0, 0.5, -1.0);
    let local = p - Vec3::new(1.0, -1.0, 2.0);
    assert_eq!(cube.distance(p).to_bits(), cube_sdf(local, 1.5).to_bits());
}
