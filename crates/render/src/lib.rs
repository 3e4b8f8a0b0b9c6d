#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # CPU Renderer
//!
//! Turns an [`sdf::Scene`] into images. A [`Camera`] generates one ray per
//! pixel, [`render_frame`] marches the rays in parallel into a linear
//! [`Framebuffer`], and [`SceneStore`] publishes scene snapshots so that a
//! frame always renders against a single scene generation even while a
//! control channel keeps adding primitives.

pub mod camera;
pub mod framebuffer;
pub mod renderer;
pub mod store;

pub use camera::{pixel_to_uv, Camera};
pub use framebuffer::Framebuffer;
pub use renderer::{render_frame, render_frame_serial, RenderSettings, Renderer};
pub use store::{SceneSnapshot, SceneStore, DEFAULT_BLEND_STRENGTH};
