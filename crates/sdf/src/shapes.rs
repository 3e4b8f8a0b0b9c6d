use std::fmt;

use crate::{SdfError, Vec3};

/// Material color given to primitives that do not specify one.
pub const DEFAULT_COLOR: Vec3 = Vec3::new(1.0, 0.0, 0.0);

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Sphere,
    Cube,
}

impl PrimitiveKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Sphere => "sphere",
            PrimitiveKind::Cube => "cube",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Shape {
    Sphere { radius: f32 },
    /// Axis-aligned cube; `half_size` is half of the edge length.
    Cube { half_size: f32 },
}

impl Shape {
    #[must_use]
    pub const fn kind(&self) -> PrimitiveKind {
        match self {
            Shape::Sphere { .. } => PrimitiveKind::Sphere,
            Shape::Cube { .. } => PrimitiveKind::Cube,
        }
    }

    /// Signed distance from `local`, a point relative to the shape center.
    #[must_use]
    pub fn sdf(&self, local: Vec3) -> f32 {
        match *self {
            Shape::Sphere { radius } => sphere_sdf(local, radius),
            Shape::Cube { half_size } => cube_sdf(local, half_size),
        }
    }
}

#[must_use]
pub fn sphere_sdf(local: Vec3, radius: f32) -> f32 {
    local.length() - radius
}

/// Exact box distance: Euclidean distance outside, largest axis overlap inside.
#[must_use]
pub fn cube_sdf(local: Vec3, half_size: f32) -> f32 {
    let d = local.abs() - Vec3::splat(half_size);
    let outside = d.max(Vec3::ZERO).length();
    let inside = d.max_element().min(0.0);
    outside + inside
}

/// A positioned, colored shape. Construction validates the size so the
/// distance function never sees a degenerate primitive.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Primitive {
    position: Vec3,
    color: Vec3,
    blend_strength: f32,
    shape: Shape,
}

impl Primitive {
    /// # Errors
    ///
    /// Returns [`SdfError::InvalidPrimitive`] if `radius` is not a positive finite number.
    pub fn sphere(position: Vec3, radius: f32, color: Vec3) -> Result<Self, SdfError> {
        validate(PrimitiveKind::Sphere, "radius", radius)?;
        Ok(Self::from_shape(position, color, Shape::Sphere { radius }))
    }

    /// `size` is the full edge length of the cube.
    ///
    /// # Errors
    ///
    /// Returns [`SdfError::InvalidPrimitive`] if `size` is not a positive finite number.
    pub fn cube(position: Vec3, size: f32, color: Vec3) -> Result<Self, SdfError> {
        validate(PrimitiveKind::Cube, "size", size)?;
        Ok(Self::from_shape(position, color, Shape::Cube { half_size: size / 2.0 }))
    }

    /// Builds a primitive of `kind`; `size_or_radius` is a radius for spheres
    /// and an edge length for cubes.
    ///
    /// # Errors
    ///
    /// Returns [`SdfError::InvalidPrimitive`] for a non-positive or non-finite size.
    pub fn new(
        kind: PrimitiveKind,
        position: Vec3,
        size_or_radius: f32,
        color: Vec3,
    ) -> Result<Self, SdfError> {
        match kind {
            PrimitiveKind::Sphere => Self::sphere(position, size_or_radius, color),
            PrimitiveKind::Cube => Self::cube(position, size_or_radius, color),
        }
    }

    const fn from_shape(position: Vec3, color: Vec3, shape: Shape) -> Self {
        Self {
            position,
            color,
            blend_strength: 0.0,
            shape,
        }
    }

    /// Stores a smooth-union strength. The distance function does not use it.
    #[must_use]
    pub fn with_blend_strength(mut self, blend_strength: f32) -> Self {
        self.blend_strength = blend_strength;
        self
    }

    #[must_use]
    pub const fn position(&self) -> Vec3 {
        self.position
    }

    #[must_use]
    pub const fn color(&self) -> Vec3 {
        self.color
    }

    #[must_use]
    pub const fn blend_strength(&self) -> f32 {
        self.blend_strength
    }

    #[must_use]
    pub const fn shape(&self) -> Shape {
        self.shape
    }

    #[must_use]
    pub const fn kind(&self) -> PrimitiveKind {
        self.shape.kind()
    }

    /// Signed distance from `point` to the surface: negative inside, zero on
    /// the surface, positive outside.
    #[must_use]
    pub fn distance(&self, point: Vec3) -> f32 {
        self.shape.sdf(point - self.position)
    }
}

fn validate(kind: PrimitiveKind, field: &'static str, value: f32) -> Result<(), SdfError> {
    if value.is_finite() && value > 0.0 {
        return Ok(());
    }
    Err(SdfError::InvalidPrimitive {
        kind: kind.name(),
        field,
        value,
    })
}
