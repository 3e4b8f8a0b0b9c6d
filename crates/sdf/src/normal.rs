use crate::{Scene, Vec3};

/// Central-difference estimate of the outward surface normal at `point`.
///
/// Costs six scene evaluations, so callers only invoke it on a hit. A flat
/// gradient (e.g. an empty scene) yields [`Vec3::ZERO`].
#[must_use]
pub fn estimate_normal(point: Vec3, scene: &Scene, epsilon: f32) -> Vec3 {
    let dx = Vec3::new(epsilon, 0.0, 0.0);
    let dy = Vec3::new(0.0, epsilon, 0.0);
    let dz = Vec3::new(0.0, 0.0, epsilon);

    let gradient = Vec3::new(
        difference(scene, point, dx),
        difference(scene, point, dy),
        difference(scene, point, dz),
    );
    gradient.normalize()
}

fn difference(scene: &Scene, point: Vec3, offset: Vec3) -> f32 {
    let forward = scene.distance(point + offset);
    let backward = scene.distance(point - offset);
    let diff = forward - backward;
    // Both samples infinite (no geometry) gives NaN.
    if diff.is_nan() {
        0.0
    } else {
        diff
    }
}
