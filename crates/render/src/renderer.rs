//! CPU frame renderer
//!
//! Every pixel is an independent [`sdf::march`] call against a read-only
//! scene, so rows are evaluated in parallel with rayon and written into
//! disjoint slices of the [`Framebuffer`]. [`render_frame_serial`] walks the
//! same rows on the calling thread and produces an identical image.

use std::time::Instant;

use rayon::prelude::*;
use sdf::{march, Light, MarchSettings, Scene, Vec3};

use crate::camera::Camera;
use crate::framebuffer::Framebuffer;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderSettings {
    pub width: u32,
    pub height: u32,
    pub march: MarchSettings,
    /// Divides the resolution for quick previews; 1 renders at full size.
    pub preview_scale: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 300,
            height: 300,
            march: MarchSettings::default(),
            preview_scale: 1,
        }
    }
}

impl RenderSettings {
    /// Output resolution after applying `preview_scale`, never below 1x1.
    #[must_use]
    pub fn resolution(&self) -> (u32, u32) {
        let scale = self.preview_scale.max(1);
        ((self.width / scale).max(1), (self.height / scale).max(1))
    }

    #[must_use]
    pub fn preview(mut self, scale: u32) -> Self {
        self.preview_scale = scale;
        self
    }
}

/// Renders one frame using all rayon worker threads.
#[must_use]
pub fn render_frame(
    scene: &Scene,
    camera: &Camera,
    light: &Light,
    settings: &RenderSettings,
) -> Framebuffer {
    let (width, height) = settings.resolution();
    let mut frame = Framebuffer::new(width, height);
    frame
        .pixels_mut()
        .par_chunks_mut(width as usize)
        .enumerate()
        .for_each(|(y, row)| {
            render_row(row, y, width, height, scene, camera, light, &settings.march);
        });
    frame
}

/// Renders one frame on the calling thread.
#[must_use]
pub fn render_frame_serial(
    scene: &Scene,
    camera: &Camera,
    light: &Light,
    settings: &RenderSettings,
) -> Framebuffer {
    let (width, height) = settings.resolution();
    let mut frame = Framebuffer::new(width, height);
    frame
        .pixels_mut()
        .chunks_mut(width as usize)
        .enumerate()
        .for_each(|(y, row)| {
            render_row(row, y, width, height, scene, camera, light, &settings.march);
        });
    frame
}

#[allow(clippy::too_many_arguments, clippy::cast_possible_truncation)]
fn render_row(
    row: &mut [Vec3],
    y: usize,
    width: u32,
    height: u32,
    scene: &Scene,
    camera: &Camera,
    light: &Light,
    march_settings: &MarchSettings,
) {
    for (x, pixel) in row.iter_mut().enumerate() {
        let ray = camera.ray_for_pixel(x as u32, y as u32, width, height);
        *pixel = march(&ray, scene, light, march_settings);
    }
}

/// Stateful wrapper that renders frames and keeps simple timing statistics.
pub struct Renderer {
    pub settings: RenderSettings,
    pub parallel: bool,
    frames_rendered: u64,
}

impl Renderer {
    #[must_use]
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            parallel: true,
            frames_rendered: 0,
        }
    }

    #[must_use]
    pub const fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    pub fn render(&mut self, scene: &Scene, camera: &Camera, light: &Light) -> Framebuffer {
        let start = Instant::now();
        let frame = if self.parallel {
            render_frame(scene, camera, light, &self.settings)
        } else {
            render_frame_serial(scene, camera, light, &self.settings)
        };
        self.frames_rendered += 1;
        tracing::debug!(
            frame = self.frames_rendered,
            width = frame.width(),
            height = frame.height(),
            primitives = scene.len(),
            elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
            "frame rendered"
        );
        frame
    }
}
