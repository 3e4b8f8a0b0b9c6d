//! # Marcher
//!
//! A CPU ray marcher for scenes built from signed distance fields.
//!
//! ## Overview
//!
//! Every pixel casts one ray from a pinhole camera and sphere-traces it
//! through a scene of spheres and axis-aligned cubes. A ray that reaches a
//! surface is shaded with a single point light (Lambert diffuse plus a flat
//! ambient term); a ray that runs past the far limit stays black.
//!
//! ### The Crates
//!
//! -   **`marcher`:** The crate you are currently viewing. It hosts the
//!     command line binary, which renders a scene once or keeps rendering it
//!     while control messages arrive on stdin and the scene file is edited.
//! -   **[`sdf`]:** Vectors, primitive distance functions, scene
//!     composition, normals, shading and the marching loop itself.
//! -   **[`render`]:** The camera, the parallel frame renderer, PNG output
//!     and the snapshot store that lets the scene change between frames.
//! -   **[`control`]:** JSON scene descriptions and the `command:value`
//!     control messages.
//!
//! ## Getting Started
//!
//! ```text
//! marcher render --out frame.png
//! marcher render --scene scene.json --out frame.png --width 640 --height 480
//! echo "add_primitive:1,-2,0,6,1" | marcher interactive --out live.png
//! ```
//!
//! Set `RUST_LOG=debug` to see per-frame timings.

pub use control;
pub use render;
pub use sdf;
