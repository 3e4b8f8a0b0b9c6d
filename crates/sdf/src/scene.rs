//! # Scene Composition
//!
//! A [`Scene`] owns an ordered arena of [`Primitive`]s and composes their
//! distance fields with a nearest-wins minimum. Primitives receive a stable
//! [`PrimitiveId`] when they enter the arena; the id is their slot in the
//! backing store and is never reused.

use crate::{Primitive, SdfError, Vec3, BACKGROUND};

/// Maximum number of live primitives a scene accepts by default.
pub const DEFAULT_CAPACITY: usize = 32;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PrimitiveId(u32);

impl PrimitiveId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Result of evaluating the composed distance field at a point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Nearest {
    pub distance: f32,
    pub color: Vec3,
    /// `None` only for an empty scene.
    pub id: Option<PrimitiveId>,
}

#[derive(Clone, Debug)]
pub struct Scene {
    primitives: Vec<Primitive>,
    capacity: usize,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            // The limit may be arbitrarily large; only the default is preallocated.
            primitives: Vec::with_capacity(capacity.min(DEFAULT_CAPACITY)),
            capacity,
        }
    }

    /// Builds a scene from `primitives` in iteration order.
    ///
    /// # Errors
    ///
    /// Returns [`SdfError::CapacityExceeded`] if more than `capacity` primitives are supplied.
    pub fn from_primitives<I>(capacity: usize, primitives: I) -> Result<Self, SdfError>
    where
        I: IntoIterator<Item = Primitive>,
    {
        let mut scene = Self::with_capacity(capacity);
        for primitive in primitives {
            scene.add(primitive)?;
        }
        Ok(scene)
    }

    /// Appends a primitive and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`SdfError::CapacityExceeded`] when the scene is full; the scene
    /// is left unchanged.
    pub fn add(&mut self, primitive: Primitive) -> Result<PrimitiveId, SdfError> {
        if self.primitives.len() >= self.capacity {
            return Err(SdfError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        #[allow(clippy::cast_possible_truncation)]
        let id = PrimitiveId(self.primitives.len() as u32);
        self.primitives.push(primitive);
        tracing::debug!(id = id.index(), kind = %primitive.kind(), "primitive added");
        Ok(id)
    }

    #[must_use]
    pub fn get(&self, id: PrimitiveId) -> Option<&Primitive> {
        self.primitives.get(id.index())
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn iter(&self) -> impl Iterator<Item = (PrimitiveId, &Primitive)> {
        self.primitives
            .iter()
            .enumerate()
            .map(|(i, p)| (PrimitiveId(i as u32), p))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.primitives.len() >= self.capacity
    }

    /// Minimum signed distance over all primitives, with the color of the
    /// primitive that achieves it. Exact ties keep the earliest primitive.
    #[must_use]
    pub fn nearest(&self, point: Vec3) -> Nearest {
        let mut best = Nearest {
            distance: f32::INFINITY,
            color: BACKGROUND,
            id: None,
        };
        for (id, primitive) in self.iter() {
            let distance = primitive.distance(point);
            if distance < best.distance {
                best = Nearest {
                    distance,
                    color: primitive.color(),
                    id: Some(id),
                };
            }
        }
        best
    }

    #[must_use]
    pub fn distance(&self, point: Vec3) -> f32 {
        self.nearest(point).distance
    }
}
