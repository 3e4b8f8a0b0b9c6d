use sdf::{Primitive, Scene, SdfError, Vec3, DEFAULT_CAPACITY};

const RED: Vec3 = Vec3::new(1.0, 0.0, 0.0);
const GREEN: Vec3 = Vec3::new(0.0, 1.0, 0.0);
const BLUE: Vec3 = Vec3::new(0.0, 0.0, 1.0);

#[test]
fn nearest_picks_closer_primitive_and_its_color() {
    let a = Primitive::sphere(Vec3::new(-3.0, 0.0, 0.0), 1.0, RED).unwrap();
    let b = Primitive::cube(Vec3::new(3.0, 0.0, 0.0), 1.0, GREEN).unwrap();
    let scene = Scene::from_primitives(DEFAULT_CAPACITY, [a, b]).unwrap();

    let p = Vec3::new(-1.0, 0.5, 0.0);
    let n = scene.nearest(p);
    assert!((n.distance - a.distance(p)).abs() < 1e-6);
    assert_eq!(n.color, RED);
    assert_eq!(n.id.map(|id| id.index()), Some(0));

    let q = Vec3::new(2.0, 0.0, 0.0);
    let n = scene.nearest(q);
    assert!((n.distance - b.distance(q)).abs() < 1e-6);
    assert_eq!(n.color, GREEN);
}

#[test]
fn nearest_is_independent_of_insertion_order_apart_from_ties() {
    let a = Primitive::sphere(Vec3::new(0.0, 0.0, 5.0), 1.0, RED).unwrap();
    let b = Primitive::cube(Vec3::new(3.0, 3.0, 5.0), 1.0, GREEN).unwrap();
    let forward = Scene::from_primitives(4, [a, b]).unwrap();
    let reverse = Scene::from_primitives(4, [b, a]).unwrap();

    fastrand::seed(11);
    for _ in 0..200 {
        let p = Vec3::new(
            fastrand::f32() * 10.0 - 5.0,
            fastrand::f32() * 10.0 - 5.0,
            fastrand::f32() * 10.0,
        );
        let f = forward.nearest(p);
        let r = reverse.nearest(p);
        assert_eq!(f.distance.to_bits(), r.distance.to_bits());
        assert_eq!(f.color, r.color);
    }
}

#[test]
fn exact_tie_keeps_first_inserted() {
    let first = Primitive::sphere(Vec3::new(1.0, 1.0, 1.0), 0.5, RED).unwrap();
    let second = Primitive::sphere(Vec3::new(1.0, 1.0, 1.0), 0.5, BLUE).unwrap();
    let scene = Scene::from_primitives(DEFAULT_CAPACITY, [first, second]).unwrap();

    for _ in 0..100 {
        let n = scene.nearest(Vec3::new(3.0, -2.0, 0.5));
        assert_eq!(n.color, RED);
        assert_eq!(n.id.map(|id| id.index()), Some(0));
    }
}

#[test]
fn overlapping_geometry_reports_deepest_inside() {
    let big = Primitive::sphere(Vec3::ZERO, 2.0, RED).unwrap();
    let small = Primitive::cube(Vec3::ZERO, 1.0, GREEN).unwrap();
    let scene = Scene::from_primitives(DEFAULT_CAPACITY, [small, big]).unwrap();
    let n = scene.nearest(Vec3::ZERO);
    assert!((n.distance + 2.0).abs() < 1e-6);
    assert_eq!(n.color, RED);
}

#[test]
fn capacity_is_enforced() {
    let mut scene = Scene::new();
    for i in 0..DEFAULT_CAPACITY {
        #[allow(clippy::cast_precision_loss)]
        let x = i as f32 * 3.0;
        scene
            .add(Primitive::sphere(Vec3::new(x, 0.0, 0.0), 1.0, RED).unwrap())
            .unwrap();
    }
    assert_eq!(scene.len(), 32);

    let extra = Primitive::cube(Vec3::ZERO, 1.0, GREEN).unwrap();
    assert_eq!(
        scene.add(extra),
        Err(SdfError::CapacityExceeded { capacity: 32 })
    );
    assert_eq!(scene.len(), 32);
    assert!(scene.iter().all(|(_, p)| p.color() == RED));
}

#[test]
fn from_primitives_rejects_overflow() {
    let p = Primitive::sphere(Vec3::ZERO, 1.0, RED).unwrap();
    let err = Scene::from_primitives(2, [p, p, p]).unwrap_err();
    assert_eq!(err, SdfError::CapacityExceeded { capacity: 2 });
}
