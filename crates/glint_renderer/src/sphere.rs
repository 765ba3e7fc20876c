//! Sphere shape for ray tracing.

use glint_math::{Ray, Vec3};

/// A sphere given by center and radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
}

impl Sphere {
    /// Create a new sphere. Negative radii are clamped to zero.
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Nearest parametric hit distance in `(0, ray.t_max)`.
    ///
    /// Solves `|O + tD - C|^2 = r^2` with the cancellation-free `q` form.
    /// When the near root is behind the origin (origin inside the sphere)
    /// the far root is used instead.
    pub fn intersect(&self, ray: &Ray) -> Option<f32> {
        let l = ray.origin() - self.center;
        let a = ray.direction().length_squared();
        let b = 2.0 * ray.direction().dot(l);
        let c = l.length_squared() - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let t = if discriminant == 0.0 {
            // Tangent ray, single root
            -0.5 * b / a
        } else {
            let sqrtd = discriminant.sqrt();
            let q = if b > 0.0 {
                -0.5 * (b + sqrtd)
            } else {
                -0.5 * (b - sqrtd)
            };

            let (mut t0, mut t1) = (q / a, c / q);
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }
            if t0 <= 0.0 {
                t1
            } else {
                t0
            }
        };

        ray.interval().surrounds(t).then_some(t)
    }

    /// Outward unit normal at a point on the surface.
    #[inline]
    pub fn normal_at(&self, p: Vec3) -> Vec3 {
        (p - self.center).normalize()
    }
}
