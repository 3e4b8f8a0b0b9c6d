//! Scene publication for concurrent readers
//!
//! The live scene is an immutable [`SceneSnapshot`] behind an `Arc`. Readers
//! take the lock only long enough to clone the pointer, then render from
//! their snapshot for the whole frame. Writers copy the current scene, apply
//! the change, and swap in a new snapshot with the next generation number,
//! so a frame in flight never sees a half-applied mutation.

use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use sdf::{Primitive, PrimitiveId, PrimitiveKind, Scene, SdfError, Vec3};
use tracing::{info, warn};

/// Blend strength a fresh store stamps on new primitives.
pub const DEFAULT_BLEND_STRENGTH: f32 = 2.0;

#[derive(Debug)]
pub struct SceneSnapshot {
    /// Incremented on every published change.
    pub generation: u64,
    pub scene: Scene,
}

pub struct SceneStore {
    current: RwLock<Arc<SceneSnapshot>>,
    blend_strength: Mutex<f32>,
}

impl SceneStore {
    #[must_use]
    pub fn new(scene: Scene) -> Self {
        Self {
            current: RwLock::new(Arc::new(SceneSnapshot {
                generation: 0,
                scene,
            })),
            blend_strength: Mutex::new(DEFAULT_BLEND_STRENGTH),
        }
    }

    /// The scene as of now. Later mutations do not affect the returned snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<SceneSnapshot> {
        self.current.read().clone()
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.current.read().generation
    }

    /// Blend strength stamped onto primitives added through the store.
    #[must_use]
    pub fn blend_strength(&self) -> f32 {
        *self.blend_strength.lock()
    }

    pub fn set_blend_strength(&self, value: f32) {
        *self.blend_strength.lock() = value;
        info!(blend_strength = value, "blend strength updated");
    }

    /// Builds and appends a primitive, publishing a new generation.
    ///
    /// A full scene is left untouched and the rejection is logged.
    ///
    /// # Errors
    ///
    /// Returns [`SdfError::InvalidPrimitive`] for a bad size and
    /// [`SdfError::CapacityExceeded`] when the scene is full.
    pub fn add_primitive(
        &self,
        kind: PrimitiveKind,
        position: Vec3,
        size_or_radius: f32,
        color: Vec3,
    ) -> Result<PrimitiveId, SdfError> {
        let primitive = Primitive::new(kind, position, size_or_radius, color)?
            .with_blend_strength(self.blend_strength());
        self.add(primitive)
    }

    /// Appends an already built primitive.
    ///
    /// # Errors
    ///
    /// Returns [`SdfError::CapacityExceeded`] when the scene is full.
    pub fn add(&self, primitive: Primitive) -> Result<PrimitiveId, SdfError> {
        let mut current = self.current.write();
        let mut scene = current.scene.clone();
        let id = match scene.add(primitive) {
            Ok(id) => id,
            Err(err) => {
                warn!(kind = %primitive.kind(), "primitive ignored: {err}");
                return Err(err);
            }
        };
        let generation = current.generation + 1;
        *current = Arc::new(SceneSnapshot { generation, scene });
        info!(generation, id = id.index(), kind = %primitive.kind(), "primitive added");
        Ok(id)
    }

    /// Publishes a whole new scene and returns its generation.
    #[must_use]
    pub fn replace(&self, scene: Scene) -> u64 {
        let mut current = self.current.write();
        let generation = current.generation + 1;
        info!(generation, primitives = scene.len(), "scene replaced");
        *current = Arc::new(SceneSnapshot { generation, scene });
        generation
    }
}
