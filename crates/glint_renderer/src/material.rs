//! Surface material parameters for the Disney shading model.

use glint_math::Vec3;

/// Color type alias (linear RGB, typically 0-1 for albedo)
pub type Color = Vec3;

/// A metal/roughness surface description.
///
/// Owned by whoever builds the scene; primitives only hold a shared handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// Base color (albedo for dielectrics, reflectance for metals)
    pub color: Color,

    /// Roughness: 0 = smooth/glossy, 1 = rough/diffuse
    pub roughness: f32,

    /// Metalness: 0 = dielectric, 1 = metal
    pub metalness: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            color: Color::new(0.8, 0.8, 0.8),
            roughness: 0.5,
            metalness: 0.0,
        }
    }
}

impl Material {
    /// Create a material. Roughness and metalness are clamped to [0, 1].
    pub fn new(color: Color, roughness: f32, metalness: f32) -> Self {
        Self {
            color,
            roughness: roughness.clamp(0.0, 1.0),
            metalness: metalness.clamp(0.0, 1.0),
        }
    }

    /// Create a fully rough dielectric.
    pub fn diffuse(color: Color) -> Self {
        Self::new(color, 1.0, 0.0)
    }

    /// Create a metallic material.
    pub fn metal(color: Color, roughness: f32) -> Self {
        Self::new(color, roughness, 1.0)
    }

    /// Builder method to set roughness.
    pub fn with_roughness(mut self, roughness: f32) -> Self {
        self.roughness = roughness.clamp(0.0, 1.0);
        self
    }

    /// Builder method to set metalness.
    pub fn with_metalness(mut self, metalness: f32) -> Self {
        self.metalness = metalness.clamp(0.0, 1.0);
        self
    }
}
