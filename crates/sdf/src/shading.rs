use crate::Vec3;

/// Point light with a flat ambient term.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Light {
    pub position: Vec3,
    pub color: Vec3,
    pub ambient: Vec3,
}

impl Default for Light {
    fn default() -> Self {
        Self {
            position: Vec3::new(5.0, 5.0, -5.0),
            color: Vec3::ONE,
            ambient: Vec3::splat(0.2),
        }
    }
}

/// Lambertian diffuse plus ambient. The result is linear light and is not
/// clamped.
#[must_use]
pub fn shade(point: Vec3, normal: Vec3, color: Vec3, light: &Light) -> Vec3 {
    let light_dir = (light.position - point).normalize();
    let diffuse_intensity = normal.dot(light_dir).max(0.0);
    let diffuse = color * diffuse_intensity * light.color;
    let ambient = color * light.ambient;
    diffuse + ambient
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facing_light_gets_full_diffuse() {
        let light = Light {
            position: Vec3::new(0.0, 10.0, 0.0),
            color: Vec3::ONE,
            ambient: Vec3::ZERO,
        };
        let c = shade(Vec3::ZERO, Vec3::Y, Vec3::new(0.5, 0.25, 1.0), &light);
        assert!((c.x - 0.5).abs() < 1e-6);
        assert!((c.y - 0.25).abs() < 1e-6);
        assert!((c.z - 1.0).abs() < 1e-6);
    }

    #[test]
    fn facing_away_gets_ambient_only() {
        let light = Light::default();
        let color = Vec3::new(1.0, 0.0, 0.0);
        let c = shade(Vec3::ZERO, -light.position.normalize(), color, &light);
        assert!((c.x - 0.2).abs() < 1e-6);
        assert!(c.y.abs() < 1e-6);
    }

    #[test]
    fn result_is_not_clamped() {
        let light = Light {
            position: Vec3::new(0.0, 1.0, 0.0),
            color: Vec3::splat(3.0),
            ambient: Vec3::splat(1.0),
        };
        let c = shade(Vec3::ZERO, Vec3::Y, Vec3::ONE, &light);
        assert!((c.x - 4.0).abs() < 1e-6);
    }
}
