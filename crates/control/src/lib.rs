#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! Scene configuration and live control for the ray marcher.
//!
//! [`SceneFile`] is the JSON description a scene starts from; [`Command`]
//! parses the `command:value` messages that change it while frames are
//! being rendered.

pub mod command;
pub mod error;
pub mod scene_file;

pub use command::Command;
pub use error::ControlError;
pub use scene_file::{PrimitiveDef, SceneConfig, SceneFile};
