//! Read-only view of everything a render needs to look at.

use crate::{Color, Hit, Light, Material, Primitive};
use glint_math::{Ray, Vec3};

/// Borrowed scene description.
///
/// The scene does not own its primitives, lights, or sky material; the
/// caller keeps them alive for at least as long as the render runs.
#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    aggregate: &'a Primitive,
    lights: &'a [Light],
    sky: Option<&'a Material>,
}

impl<'a> Scene<'a> {
    /// Create a scene with a black background.
    pub fn new(aggregate: &'a Primitive, lights: &'a [Light]) -> Self {
        Self {
            aggregate,
            lights,
            sky: None,
        }
    }

    /// Set the material seen by rays that escape the scene.
    pub fn with_sky(mut self, sky: &'a Material) -> Self {
        self.sky = Some(sky);
        self
    }

    pub fn lights(&self) -> &'a [Light] {
        self.lights
    }

    pub fn sky(&self) -> Option<&'a Material> {
        self.sky
    }

    /// Radiance of the background. Black when no sky is configured.
    pub fn background(&self) -> Color {
        self.sky.map_or(Color::ZERO, |sky| sky.color)
    }

    /// Nearest hit along the ray. Narrows `ray.t_max`.
    #[inline]
    pub fn intersect(&self, ray: &mut Ray) -> Option<Hit<'a>> {
        self.aggregate.intersect(ray)
    }

    /// True if anything blocks the segment between `from` and `to`.
    ///
    /// The shadow ray is bounded by the distance to `to`, so geometry
    /// behind the target never occludes it.
    pub fn occluded(&self, from: Vec3, to: Vec3) -> bool {
        let offset = to - from;
        let distance = offset.length();
        if distance <= 0.0 {
            return false;
        }
        let mut shadow_ray = Ray::with_max(from, offset / distance, distance);
        self.aggregate.intersects(&mut shadow_ray)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GeometricPrimitive, LoosePrimitives, Sphere};
    use std::sync::Arc;

    fn single_sphere() -> Primitive {
        let mut list = LoosePrimitives::new();
        list.push(GeometricPrimitive::new(
            Sphere::new(Vec3::new(0.0, 0.0, -3.0), 0.5),
            Arc::new(Material::diffuse(Color::X)),
        ));
        list.into()
    }

    #[test]
    fn test_background_defaults_to_black() {
        let root = single_sphere();
        let scene = Scene::new(&root, &[]);
        assert_eq!(scene.background(), Color::ZERO);

        let sky = Material::diffuse(Color::new(0.0, 0.2, 0.5));
        let scene = scene.with_sky(&sky);
        assert_eq!(scene.background(), Color::new(0.0, 0.2, 0.5));
    }

    #[test]
    fn test_scene_intersect() {
        let root = single_sphere();
        let scene = Scene::new(&root, &[]);

        let mut ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let hit = scene.intersect(&mut ray).unwrap();
        assert!((hit.position.z + 2.5).abs() < 1e-5);
    }

    #[test]
    fn test_occlusion_is_bounded_by_target() {
        let root = single_sphere();
        let scene = Scene::new(&root, &[]);

        // Sphere sits between the two points
        assert!(scene.occluded(Vec3::ZERO, Vec3::new(0.0, 0.0, -6.0)));

        // Sphere lies beyond the target
        assert!(!scene.occluded(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0)));

        // Nothing in the way
        assert!(!scene.occluded(Vec3::ZERO, Vec3::new(0.0, 5.0, 0.0)));
    }
}
