//! Point lights.

use crate::Color;
use glint_math::Vec3;

/// An isotropic point light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub position: Vec3,
    /// Radiant intensity per channel
    pub color: Color,
    /// Scalar multiplier applied on top of `color`
    pub strength: f32,
}

impl Light {
    /// Create a light with unit strength.
    pub fn new(position: Vec3, color: Color) -> Self {
        Self {
            position,
            color,
            strength: 1.0,
        }
    }

    /// Builder method to set strength.
    pub fn with_strength(mut self, strength: f32) -> Self {
        self.strength = strength;
        self
    }

    /// Incident radiance at squared distance `distance_sq` (inverse-square falloff).
    #[inline]
    pub fn radiance_at(&self, distance_sq: f32) -> Color {
        self.color * (self.strength / distance_sq)
    }
}
