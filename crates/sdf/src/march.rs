//! # Sphere Tracing
//!
//! [`trace`] walks a ray through a [`Scene`], advancing each step by the
//! scene's distance bound at the current position. Because every primitive's
//! distance is a lower bound on the true distance to its surface, a step can
//! never pass through geometry. [`march`] adds normal estimation and shading
//! on top of [`trace`] and returns one color per ray.
//!
//! A primitive whose distance function overestimates breaks this guarantee
//! and may let rays skip through thin geometry.

use crate::{estimate_normal, shade, Light, PrimitiveId, Scene, Vec3};

/// Color returned for rays that find no surface.
pub const BACKGROUND: Vec3 = Vec3::ZERO;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Expected to be unit length; it is used as-is.
    pub direction: Vec3,
}

impl Ray {
    #[must_use]
    pub const fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    #[must_use]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MarchSettings {
    /// Rays that travel further than this escape.
    pub max_distance: f32,
    /// Hit tolerance, also used as the normal estimation offset.
    pub epsilon: f32,
    pub max_steps: u32,
}

impl Default for MarchSettings {
    fn default() -> Self {
        Self {
            max_distance: 80.0,
            epsilon: 0.001,
            max_steps: 50,
        }
    }
}

/// How a traced ray terminated.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MarchOutcome {
    Hit {
        position: Vec3,
        traveled: f32,
        steps: u32,
        color: Vec3,
        id: PrimitiveId,
    },
    Escaped {
        traveled: f32,
        steps: u32,
    },
    Exhausted {
        traveled: f32,
    },
}

impl MarchOutcome {
    #[must_use]
    pub const fn is_hit(&self) -> bool {
        matches!(self, MarchOutcome::Hit { .. })
    }
}

/// Runs the sphere tracing loop without shading.
#[must_use]
pub fn trace(ray: &Ray, scene: &Scene, settings: &MarchSettings) -> MarchOutcome {
    let mut traveled = 0.0_f32;

    for step in 0..settings.max_steps {
        let position = ray.at(traveled);
        let nearest = scene.nearest(position);

        if nearest.distance < settings.epsilon {
            if let Some(id) = nearest.id {
                return MarchOutcome::Hit {
                    position,
                    traveled,
                    steps: step + 1,
                    color: nearest.color,
                    id,
                };
            }
        }

        traveled += nearest.distance;
        // Also catches an empty scene, whose distance is infinite.
        if traveled > settings.max_distance || traveled.is_nan() {
            return MarchOutcome::Escaped {
                traveled,
                steps: step + 1,
            };
        }
    }

    MarchOutcome::Exhausted { traveled }
}

/// Marches `ray` and returns the shaded color of the first surface hit, or
/// [`BACKGROUND`] if the ray escapes or runs out of steps.
#[must_use]
pub fn march(ray: &Ray, scene: &Scene, light: &Light, settings: &MarchSettings) -> Vec3 {
    match trace(ray, scene, settings) {
        MarchOutcome::Hit {
            position, color, ..
        } => {
            let normal = estimate_normal(position, scene, settings.epsilon);
            shade(position, normal, color, light)
        }
        MarchOutcome::Escaped { .. } | MarchOutcome::Exhausted { .. } => BACKGROUND,
    }
}
