#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! # SDF Ray Marching Core
//!
//! CPU evaluation of signed distance field scenes: primitive distance
//! functions, nearest-wins scene composition, central-difference normals,
//! Lambert-plus-ambient shading and the sphere tracing loop that ties them
//! together.
//!
//! ## Key Components
//!
//! -   **Vectors:** [`Vec3`] in the [`types`] module is the value type for
//!     points, directions and linear RGB colors.
//! -   **Primitives:** [`Primitive`] wraps a closed [`Shape`] enum (sphere or
//!     axis-aligned cube) with a position and color.
//! -   **Scenes:** [`Scene`] composes primitive distance fields and reports
//!     the nearest surface together with its color.
//! -   **Marching:** [`march`] traces a [`Ray`] through a scene and returns a
//!     shaded color, or [`BACKGROUND`] when nothing is hit.
//!
//! Nothing on the per-ray path returns an error: invalid primitives are
//! rejected when they are built, and a full scene refuses new primitives
//! when they are added.
//!
//! ## Usage
//!
//! ```rust
//! use sdf::{march, Light, MarchSettings, Primitive, Ray, Scene, Vec3};
//!
//! let mut scene = Scene::new();
//! scene.add(Primitive::sphere(Vec3::new(0.0, 0.0, 5.0), 1.0, Vec3::X)?)?;
//!
//! let ray = Ray::new(Vec3::ZERO, Vec3::Z);
//! let color = march(&ray, &scene, &Light::default(), &MarchSettings::default());
//! assert!(color.x > 0.0);
//! # Ok::<(), sdf::SdfError>(())
//! ```

pub mod error;
pub mod march;
pub mod normal;
pub mod scene;
pub mod shading;
pub mod shapes;
pub mod types;

pub use error::SdfError;
pub use march::{march, trace, MarchOutcome, MarchSettings, Ray, BACKGROUND};
pub use normal::estimate_normal;
pub use scene::{Nearest, PrimitiveId, Scene, DEFAULT_CAPACITY};
pub use shading::{shade, Light};
pub use shapes::{cube_sdf, sphere_sdf, Primitive, PrimitiveKind, Shape, DEFAULT_COLOR};
pub use types::Vec3;
