//! Infinite plane shape.

use glint_math::{Ray, Vec3};

/// Rays whose direction is this close to perpendicular to the normal
/// are treated as parallel to the plane.
const PARALLEL_EPSILON: f32 = 1e-6;

/// An infinite plane in implicit form `dot(P, normal) = d`.
///
/// The reported normal is always `normal`, regardless of which side the
/// ray arrives from. Hits on the back side therefore see a normal facing
/// away from the viewer; the shading code treats those as unlit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    normal: Vec3,
    d: f32,
}

impl Plane {
    /// Create a new plane. `normal` is expected to be unit length.
    pub fn new(normal: Vec3, d: f32) -> Self {
        Self { normal, d }
    }

    pub fn normal(&self) -> Vec3 {
        self.normal
    }

    pub fn d(&self) -> f32 {
        self.d
    }

    /// Parametric hit distance in `(0, ray.t_max)`.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let denom = ray.direction().dot(self.normal);
        if denom.abs() <= PARALLEL_EPSILON {
            return None;
        }

        let t = -(ray.origin().dot(self.normal) - self.d) / denom;
        ray.interval().surrounds(t).then_some(t)
    }
}
