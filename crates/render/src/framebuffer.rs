//! Linear color image produced by a render pass
//!
//! Pixels hold unclamped linear light straight from the marcher. Clamping to
//! displayable 8-bit values happens only when the image leaves the renderer
//! ([`Framebuffer::to_rgb8`], [`Framebuffer::save_png`]).

use std::path::Path;

use anyhow::{Context, Result};
use image::{ImageFormat, RgbImage};
use sdf::{Vec3, BACKGROUND};

#[derive(Clone, Debug, PartialEq)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    pixels: Vec<Vec3>,
}

impl Framebuffer {
    /// Creates a `width x height` image cleared to the background color.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![BACKGROUND; width as usize * height as usize],
        }
    }

    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Row-major pixels, top row first.
    #[must_use]
    pub fn pixels(&self) -> &[Vec3] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Vec3] {
        &mut self.pixels
    }

    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<Vec3> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Raw interleaved RGB channel data.
    #[must_use]
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Number of pixels that differ from the background color.
    #[must_use]
    pub fn covered_pixels(&self) -> usize {
        self.pixels.iter().filter(|p| **p != BACKGROUND).count()
    }

    /// Clamps every channel to `[0, 1]` and quantizes to 8 bits.
    ///
    /// # Errors
    ///
    /// Fails only if the pixel buffer does not match the image dimensions.
    pub fn to_rgb8(&self) -> Result<RgbImage> {
        let bytes = self.as_floats().iter().map(|&c| to_u8(c)).collect();
        RgbImage::from_raw(self.width, self.height, bytes)
            .context("framebuffer size does not match its dimensions")
    }

    /// Writes the clamped image as a PNG.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be encoded or written.
    pub fn save_png(&self, path: &Path) -> Result<()> {
        self.to_rgb8()?
            .save_with_format(path, ImageFormat::Png)
            .with_context(|| format!("failed to write {}", path.display()))
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(channel: f32) -> u8 {
    // NaN saturates to 0 in the cast.
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}
