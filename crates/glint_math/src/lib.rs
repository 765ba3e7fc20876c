// Re-export glam for convenience
pub use glam::*;

// Glint math types
mod frame;
mod interval;
mod ray;

pub use frame::{orthonormal_basis, reflect, to_world};
pub use interval::Interval;
pub use ray::Ray;

/// Linear interpolation between two scalars.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    (1.0 - t) * a + t * b
}

/// Linear interpolation between two vectors (component-wise).
#[inline]
pub fn lerp3(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    (1.0 - t) * a + t * b
}
