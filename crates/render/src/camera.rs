//! Pinhole camera that turns pixel coordinates into marching rays
//!
//! The camera looks down +Z when `yaw` and `pitch` are zero. Pixels map to
//! normalized device coordinates in `[-1, 1]`, and the camera-space ray is
//! `normalize(uv.x * aspect, uv.y, 1)` rotated by the camera orientation.

use glam::{Quat, Vec2, Vec3};
use sdf::Ray;

/// Largest pitch magnitude, straight up or down.
pub const MAX_PITCH: f32 = std::f32::consts::FRAC_PI_2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Camera {
    /// Camera position
    pub eye: Vec3,
    /// Horizontal rotation about +Y, radians
    pub yaw: f32,
    /// Vertical rotation about +X, radians; positive looks down
    pub pitch: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

impl Camera {
    #[must_use]
    pub const fn new(eye: Vec3) -> Self {
        Self {
            eye,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    #[must_use]
    pub fn orientation(&self) -> Quat {
        Quat::from_rotation_y(self.yaw) * Quat::from_rotation_x(self.pitch)
    }

    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.orientation() * Vec3::Z
    }

    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.orientation() * Vec3::X
    }

    /// Same camera with an absolute orientation; pitch is clamped.
    #[must_use]
    pub fn looking(mut self, yaw: f32, pitch: f32) -> Self {
        self.yaw = yaw;
        self.pitch = pitch.clamp(-MAX_PITCH, MAX_PITCH);
        self
    }

    /// Applies a look delta and clamps pitch to prevent the view flipping.
    pub fn look(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch = (self.pitch + delta_pitch).clamp(-MAX_PITCH, MAX_PITCH);
    }

    /// Moves along the view direction, the view's right vector and world up.
    pub fn translate(&mut self, forward: f32, right: f32, up: f32) {
        self.eye += self.forward() * forward + self.right() * right + Vec3::Y * up;
    }

    /// Unit world-space direction through normalized device coordinate `uv`.
    #[must_use]
    pub fn ray_direction(&self, uv: Vec2, aspect: f32) -> sdf::Vec3 {
        let local = sdf::Vec3::new(uv.x * aspect, uv.y, 1.0).normalize();
        to_sdf(self.orientation() * Vec3::from_array(local.to_array()))
    }

    #[must_use]
    pub fn ray_for_pixel(&self, x: u32, y: u32, width: u32, height: u32) -> Ray {
        #[allow(clippy::cast_precision_loss)]
        let aspect = width as f32 / height as f32;
        Ray::new(
            to_sdf(self.eye),
            self.ray_direction(pixel_to_uv(x, y, width, height), aspect),
        )
    }
}

/// Maps pixel `(x, y)` of a `width x height` image to `[-1, 1]`, with +y up.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn pixel_to_uv(x: u32, y: u32, width: u32, height: u32) -> Vec2 {
    let inv_width = 2.0 / width as f32;
    let inv_height = 2.0 / height as f32;
    Vec2::new(x as f32 * inv_width - 1.0, 1.0 - y as f32 * inv_height)
}

#[must_use]
pub fn to_sdf(v: Vec3) -> sdf::Vec3 {
    sdf::Vec3::new(v.x, v.y, v.z)
}
