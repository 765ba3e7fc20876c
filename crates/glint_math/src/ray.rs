use crate::{Interval, Vec3};

/// A ray in 3D space with origin, direction, and a far bound.
///
/// `t_max` is the nearest accepted hit distance so far. Intersection
/// routines only accept `0 < t < t_max` and lower the bound on success,
/// so a single traversal can only ever move it closer to the origin.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Direction vector (not normalized by the ray itself)
    pub direction: Vec3,
    pub t_max: f32,
}

impl Ray {
    /// Create a new unbounded ray.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction,
            t_max: f32::INFINITY,
        }
    }

    /// Create a ray that only accepts hits closer than `t_max`.
    pub fn with_max(origin: Vec3, direction: Vec3, t_max: f32) -> Self {
        Self {
            origin,
            direction,
            t_max,
        }
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// The open interval of acceptable hit distances, `(0, t_max)`.
    #[inline]
    pub fn interval(&self) -> Interval {
        Interval::new(0.0, self.t_max)
    }

    /// Lower the far bound to `t`. Never raises it.
    #[inline]
    pub fn narrow(&mut self, t: f32) {
        self.t_max = self.t_max.min(t);
    }
}
