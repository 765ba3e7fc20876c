//! Primitives tie shapes to materials and compose into aggregates.
//!
//! Every query threads one `&mut Ray` through the whole traversal. An
//! accepted hit lowers `ray.t_max`, so later candidates can only win by
//! being closer and the last accepted hit is the nearest one.

use std::sync::Arc;

use crate::{Material, Shape};
use glint_math::{Ray, Vec3};

/// Record of a ray-primitive intersection.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    /// Point of intersection
    pub position: Vec3,
    /// Unit surface normal as reported by the shape (not flipped toward the ray)
    pub normal: Vec3,
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// The primitive that was hit
    pub primitive: &'a GeometricPrimitive,
}

impl<'a> Hit<'a> {
    /// Material of the primitive that was hit.
    #[inline]
    pub fn material(&self) -> &'a Material {
        self.primitive.material()
    }
}

/// A single shape with a shared material handle.
#[derive(Debug, Clone)]
pub struct GeometricPrimitive {
    shape: Shape,
    material: Arc<Material>,
}

impl GeometricPrimitive {
    pub fn new(shape: impl Into<Shape>, material: Arc<Material>) -> Self {
        Self {
            shape: shape.into(),
            material,
        }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Intersect and fill in surface data. Narrows `ray.t_max` on success.
    pub fn intersect(&self, ray: &mut Ray) -> Option<Hit<'_>> {
        let t = self.shape.intersect(ray)?;
        ray.narrow(t);

        let position = ray.at(t);
        Some(Hit {
            position,
            normal: self.shape.normal_at(position),
            t,
            primitive: self,
        })
    }

    /// Visibility-only query. Narrows `ray.t_max` on success.
    pub fn intersects(&self, ray: &mut Ray) -> bool {
        match self.shape.intersect(ray) {
            Some(t) => {
                ray.narrow(t);
                true
            }
            None => false,
        }
    }
}

/// An unordered flat list of primitives with no material of its own.
#[derive(Debug, Clone, Default)]
pub struct LoosePrimitives {
    primitives: Vec<Primitive>,
}

impl LoosePrimitives {
    /// Create a new empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a primitive to the list.
    pub fn push(&mut self, primitive: impl Into<Primitive>) {
        self.primitives.push(primitive.into());
    }

    /// Get the number of direct members.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Primitive> {
        self.primitives.iter()
    }

    /// Nearest hit among all members.
    pub fn intersect(&self, ray: &mut Ray) -> Option<Hit<'_>> {
        let mut nearest = None;
        for primitive in &self.primitives {
            if let Some(hit) = primitive.intersect(ray) {
                nearest = Some(hit);
            }
        }
        nearest
    }

    /// True if any member accepts the ray.
    pub fn intersects(&self, ray: &mut Ray) -> bool {
        self.primitives.iter().any(|p| p.intersects(ray))
    }
}

impl FromIterator<Primitive> for LoosePrimitives {
    fn from_iter<I: IntoIterator<Item = Primitive>>(iter: I) -> Self {
        Self {
            primitives: iter.into_iter().collect(),
        }
    }
}

/// Anything that can sit in the scene hierarchy.
#[derive(Debug, Clone)]
pub enum Primitive {
    Geometric(GeometricPrimitive),
    Loose(LoosePrimitives),
}

impl Primitive {
    /// Intersect and fill in surface data for the nearest hit.
    #[inline]
    pub fn intersect(&self, ray: &mut Ray) -> Option<Hit<'_>> {
        match self {
            Primitive::Geometric(p) => p.intersect(ray),
            Primitive::Loose(list) => list.intersect(ray),
        }
    }

    /// Visibility-only query.
    #[inline]
    pub fn intersects(&self, ray: &mut Ray) -> bool {
        match self {
            Primitive::Geometric(p) => p.intersects(ray),
            Primitive::Loose(list) => list.intersects(ray),
        }
    }

    /// Material of a geometric primitive; aggregates have none.
    pub fn material(&self) -> Option<&Material> {
        match self {
            Primitive::Geometric(p) => Some(p.material()),
            Primitive::Loose(_) => None,
        }
    }
}

impl From<GeometricPrimitive> for Primitive {
    fn from(primitive: GeometricPrimitive) -> Self {
        Primitive::Geometric(primitive)
    }
}

impl From<LoosePrimitives> for Primitive {
    fn from(list: LoosePrimitives) -> Self {
        Primitive::Loose(list)
    }
}
