//! JSON scene descriptions
//!
//! Every section is optional and falls back to the stock setup: camera at
//! the origin looking down +Z, a white light at (5, 5, -5) with 0.2 ambient,
//! a 300x300 frame and room for 32 primitives.

use std::fs;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use render::{Camera, RenderSettings, DEFAULT_BLEND_STRENGTH};
use sdf::{Light, MarchSettings, Primitive, Scene, DEFAULT_CAPACITY, DEFAULT_COLOR};
use serde::Deserialize;
use tracing::info;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SceneFile {
    pub capacity: usize,
    pub primitives: Vec<PrimitiveDef>,
    pub light: LightDef,
    pub camera: CameraDef,
    pub march: MarchDef,
    pub render: RenderDef,
}

impl Default for SceneFile {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            primitives: Vec::new(),
            light: LightDef::default(),
            camera: CameraDef::default(),
            march: MarchDef::default(),
            render: RenderDef::default(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "shape")]
pub enum PrimitiveDef {
    #[serde(rename = "sphere")]
    Sphere {
        position: [f32; 3],
        radius: f32,
        #[serde(default = "default_color")]
        color: [f32; 3],
        #[serde(default = "default_blend_strength")]
        blend_strength: f32,
    },
    #[serde(rename = "cube")]
    Cube {
        position: [f32; 3],
        /// Edge length
        size: f32,
        #[serde(default = "default_color")]
        color: [f32; 3],
        #[serde(default = "default_blend_strength")]
        blend_strength: f32,
    },
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LightDef {
    pub position: [f32; 3],
    pub color: [f32; 3],
    pub ambient: [f32; 3],
}

impl Default for LightDef {
    fn default() -> Self {
        let light = Light::default();
        Self {
            position: light.position.to_array(),
            color: light.color.to_array(),
            ambient: light.ambient.to_array(),
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct CameraDef {
    pub position: [f32; 3],
    pub yaw: f32,
    pub pitch: f32,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MarchDef {
    pub max_distance: f32,
    pub epsilon: f32,
    pub max_steps: u32,
}

impl Default for MarchDef {
    fn default() -> Self {
        let march = MarchSettings::default();
        Self {
            max_distance: march.max_distance,
            epsilon: march.epsilon,
            max_steps: march.max_steps,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct RenderDef {
    pub width: u32,
    pub height: u32,
    pub preview_scale: u32,
}

impl Default for RenderDef {
    fn default() -> Self {
        let render = RenderSettings::default();
        Self {
            width: render.width,
            height: render.height,
            preview_scale: render.preview_scale,
        }
    }
}

fn default_color() -> [f32; 3] {
    DEFAULT_COLOR.to_array()
}

fn default_blend_strength() -> f32 {
    DEFAULT_BLEND_STRENGTH
}

/// A scene file resolved into the values the renderer works with.
#[derive(Debug, Clone)]
pub struct SceneConfig {
    pub scene: Scene,
    pub light: Light,
    pub camera: Camera,
    pub settings: RenderSettings,
}

impl SceneConfig {
    /// Red unit sphere at (0, 0, 5) and a green unit cube at (3, 3, 5).
    ///
    /// # Errors
    ///
    /// Never fails in practice; the primitives are statically valid.
    pub fn demo() -> Result<Self> {
        SceneFile::from_json(DEMO_SCENE)?.build()
    }
}

const DEMO_SCENE: &str = r#"{
    "primitives": [
        { "shape": "sphere", "position": [0, 0, 5], "radius": 1, "color": [1, 0, 0] },
        { "shape": "cube", "position": [3, 3, 5], "size": 1, "color": [0, 1, 0] }
    ]
}"#;

impl SceneFile {
    /// # Errors
    ///
    /// Returns an error if `json` is not a valid scene description.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("invalid scene description")
    }

    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read scene file {}", path.display()))?;
        let file = Self::from_json(&json)
            .with_context(|| format!("failed to parse scene file {}", path.display()))?;
        info!(
            path = %path.display(),
            primitives = file.primitives.len(),
            "scene file loaded"
        );
        Ok(file)
    }

    /// Validates every primitive and builds the scene, light, camera and
    /// render settings.
    ///
    /// # Errors
    ///
    /// Returns an error naming the offending primitive if one has a
    /// non-positive size, if there are more primitives than `capacity`, or
    /// if `epsilon` or `max_distance` is not a positive finite number.
    pub fn build(&self) -> Result<SceneConfig> {
        let primitives = self
            .primitives
            .iter()
            .enumerate()
            .map(|(index, def)| {
                def.to_primitive()
                    .with_context(|| format!("primitive #{index} is invalid"))
            })
            .collect::<Result<Vec<_>>>()?;
        let scene = Scene::from_primitives(self.capacity, primitives)?;

        let camera = Camera {
            eye: glam::Vec3::from_array(self.camera.position),
            ..Camera::default()
        }
        .looking(self.camera.yaw, self.camera.pitch);

        Ok(SceneConfig {
            scene,
            light: Light {
                position: self.light.position.into(),
                color: self.light.color.into(),
                ambient: self.light.ambient.into(),
            },
            camera,
            settings: RenderSettings {
                width: self.render.width,
                height: self.render.height,
                march: self.march.to_settings()?,
                preview_scale: self.render.preview_scale,
            },
        })
    }
}

impl MarchDef {
    fn to_settings(&self) -> Result<MarchSettings> {
        ensure!(
            self.epsilon.is_finite() && self.epsilon > 0.0,
            "march epsilon must be positive and finite, got {}",
            self.epsilon
        );
        ensure!(
            self.max_distance.is_finite() && self.max_distance > 0.0,
            "march max_distance must be positive and finite, got {}",
            self.max_distance
        );
        Ok(MarchSettings {
            max_distance: self.max_distance,
            epsilon: self.epsilon,
            max_steps: self.max_steps,
        })
    }
}

impl PrimitiveDef {
    fn to_primitive(&self) -> Result<Primitive, sdf::SdfError> {
        let primitive = match *self {
            Self::Sphere {
                position,
                radius,
                color,
                blend_strength,
            } => Primitive::sphere(position.into(), radius, color.into())?
                .with_blend_strength(blend_strength),
            Self::Cube {
                position,
                size,
                color,
                blend_strength,
            } => Primitive::cube(position.into(), size, color.into())?
                .with_blend_strength(blend_strength),
        };
        Ok(primitive)
    }
}
