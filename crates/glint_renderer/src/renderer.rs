//! Core path tracing integrator.
//!
//! Implements Monte Carlo path tracing with:
//! - Direct lighting from every point light through shadow rays
//! - GGX importance-sampled indirect bounces
//! - A fixed bounce count per sample (no Russian roulette)

use crate::disney::{disney_brdf, sample_ggx};
use crate::sampler::{gen_f32, PixelSampler};
use crate::tonemap::to_u8;
use crate::{Camera, Color, Hit, RenderConfig, RenderError, RenderResult, Scene, TileResult};
use glint_math::{Ray, Vec3};
use rand::RngCore;

/// Shadow rays start this far above the surface along the normal.
const SHADOW_EPSILON: f32 = 1e-5;

/// Bounce rays start this far along their new direction.
const BOUNCE_EPSILON: f32 = 1e-4;

/// Radiance reflected towards `v` from all unoccluded point lights.
pub fn direct_lighting(scene: &Scene, hit: &Hit, v: Vec3) -> Color {
    let material = hit.material();
    let shadow_origin = hit.position + hit.normal * SHADOW_EPSILON;

    let mut radiance = Color::ZERO;
    for light in scene.lights() {
        let to_light = light.position - hit.position;
        let distance_sq = to_light.length_squared();
        if distance_sq <= 0.0 {
            continue;
        }

        let l = to_light / distance_sq.sqrt();
        let reflectance = disney_brdf(hit.normal, l, v, material);
        // Light behind the surface or viewer below it: nothing to occlude
        if reflectance == Color::ZERO {
            continue;
        }

        if scene.occluded(shadow_origin, light.position) {
            continue;
        }

        radiance += reflectance * light.radiance_at(distance_sq);
    }
    radiance
}

/// Trace one light path starting with `ray` and return its radiance.
///
/// Each iteration is one path segment: intersect, add direct light, pick
/// the next direction. A miss adds the background and ends the path. A
/// rejected bounce sample zeroes the throughput, after which nothing more
/// can be added, so the path ends there too.
pub fn trace_path(scene: &Scene, mut ray: Ray, max_bounces: u32, rng: &mut dyn RngCore) -> Color {
    let mut radiance = Color::ZERO;
    let mut throughput = Color::ONE;

    for _ in 0..max_bounces {
        let Some(hit) = scene.intersect(&mut ray) else {
            radiance += throughput * scene.background();
            break;
        };

        let wo = -ray.direction();
        radiance += throughput * direct_lighting(scene, &hit, wo);

        let sample = sample_ggx(hit.normal, wo, hit.material(), gen_f32(rng), gen_f32(rng));
        if sample.is_rejected() {
            break;
        }
        throughput *= sample.weight;

        ray = Ray::new(hit.position + sample.wi * BOUNCE_EPSILON, sample.wi);
    }

    radiance
}

/// Render a single pixel with multi-sampling. Returns linear radiance.
pub fn render_pixel(
    scene: &Scene,
    camera: &Camera,
    x: u32,
    y: u32,
    config: &RenderConfig,
    sampler: &mut PixelSampler,
    rng: &mut dyn RngCore,
) -> Color {
    sampler.start_pixel(rng);

    let mut pixel_color = Color::ZERO;
    for i in 0..config.samples_per_pixel {
        let (jx, jy) = sampler.offset(i);
        let ray = camera.ray(x as f32 + jx, y as f32 + jy, config.width, config.height);
        pixel_color += trace_path(scene, ray, config.max_bounces, rng);
    }

    // Average the samples
    pixel_color / config.samples_per_pixel as f32
}

/// Final image: row-major, top to bottom, RGB interleaved, sRGB-encoded
/// values in [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub data: Vec<f32>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0.0; width as usize * height as usize * 3],
        }
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 3
    }

    /// Get the encoded pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> [f32; 3] {
        let i = self.offset(x, y);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    /// Copy a rendered tile into place.
    pub fn write_tile(&mut self, result: &TileResult) -> RenderResult<()> {
        let tile = &result.tile;
        let row_len = tile.width as usize * 3;
        let expected = row_len * tile.height as usize;
        if result.pixels.len() != expected {
            return Err(RenderError::TileBufferMismatch {
                index: tile.index,
                expected,
                actual: result.pixels.len(),
            });
        }

        for (row, src) in result.pixels.chunks_exact(row_len).enumerate() {
            let start = self.offset(tile.x, tile.y + row as u32);
            self.data[start..start + row_len].copy_from_slice(src);
        }
        Ok(())
    }

    /// Convert to 8-bit RGB bytes (for display or saving).
    pub fn to_rgb8(&self) -> Vec<u8> {
        self.data.iter().map(|&v| to_u8(v)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GeometricPrimitive, Jitter, Light, LoosePrimitives, Material, Plane, Primitive, Sphere, Tile};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::Arc;

    fn reference_world() -> Primitive {
        let mut list = LoosePrimitives::new();
        list.push(GeometricPrimitive::new(
            Sphere::new(Vec3::new(0.0, 0.0, -3.0), 0.5),
            Arc::new(Material::new(Color::new(1.0, 0.0, 0.0), 0.1, 0.0)),
        ));
        list.push(GeometricPrimitive::new(
            Plane::new(Vec3::Y, -0.5),
            Arc::new(Material::new(Color::new(0.0, 0.43, 0.0), 1.0, 0.0)),
        ));
        list.into()
    }

    fn forward_hit<'a>(scene: &Scene<'a>) -> Hit<'a> {
        let mut ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        scene.intersect(&mut ray).unwrap()
    }

    #[test]
    fn test_miss_returns_background() {
        let world = reference_world();
        let sky = Material::diffuse(Color::new(0.0, 0.2, 0.5));
        let scene = Scene::new(&world, &[]).with_sky(&sky);
        let mut rng = StdRng::seed_from_u64(42);

        let up = Ray::new(Vec3::ZERO, Vec3::Y);
        assert_eq!(trace_path(&scene, up, 10, &mut rng), Color::new(0.0, 0.2, 0.5));

        // No sky configured: black
        let scene = Scene::new(&world, &[]);
        assert_eq!(trace_path(&scene, up, 10, &mut rng), Color::ZERO);
    }

    #[test]
    fn test_unoccluded_light_contributes() {
        let world = reference_world();
        let lights = [Light::new(Vec3::new(-1.5, 1.0, 3.0), Color::splat(5.0))];
        let scene = Scene::new(&world, &lights);

        let hit = forward_hit(&scene);
        let direct = direct_lighting(&scene, &hit, Vec3::Z);
        assert!(direct.min_element() >= 0.0);
        assert!(direct.x > 0.0, "red sphere should reflect red light: {direct:?}");
    }

    #[test]
    fn test_direct_lighting_non_negative_everywhere() {
        let world = reference_world();
        let lights = [
            Light::new(Vec3::new(-1.5, 1.0, 3.0), Color::splat(5.0)),
            Light::new(Vec3::new(2.0, 4.0, -3.0), Color::new(1.0, 0.5, 0.2)).with_strength(3.0),
            Light::new(Vec3::new(0.0, -3.0, -3.0), Color::ONE),
        ];
        let scene = Scene::new(&world, &lights);
        let camera = Camera::default();

        for y in 0..12 {
            for x in 0..16 {
                let mut ray = camera.ray(x as f32 + 0.5, y as f32 + 0.5, 16, 12);
                if let Some(hit) = scene.intersect(&mut ray) {
                    let direct = direct_lighting(&scene, &hit, -ray.direction());
                    assert!(direct.min_element() >= 0.0, "pixel ({x}, {y}): {direct:?}");
                }
            }
        }
    }

    #[test]
    fn test_occluded_light_contributes_nothing() {
        let world = reference_world();
        // Ground point behind the sphere, light on the far side of the sphere center
        let ground = Vec3::new(0.0, -0.5, -4.0);
        let lights = [Light::new(Vec3::new(0.0, 1.5, 0.0), Color::splat(100.0))];
        let scene = Scene::new(&world, &lights);

        let mut ray = Ray::new(ground + Vec3::Y, -Vec3::Y);
        let hit = scene.intersect(&mut ray).unwrap();
        assert!((hit.position - ground).length() < 1e-5);
        assert_eq!(direct_lighting(&scene, &hit, Vec3::Y), Color::ZERO);

        // Same point lit from a clear direction
        let lights = [Light::new(Vec3::new(0.0, 1.5, -8.0), Color::splat(100.0))];
        let scene = Scene::new(&world, &lights);
        assert!(direct_lighting(&scene, &hit, Vec3::Y).y > 0.0);
    }

    #[test]
    fn test_light_below_surface_contributes_nothing() {
        let world = reference_world();
        let lights = [Light::new(Vec3::new(0.0, 0.0, -6.0), Color::splat(100.0))];
        let scene = Scene::new(&world, &lights);

        // Front of the sphere faces away from a light behind it
        let hit = forward_hit(&scene);
        assert_eq!(direct_lighting(&scene, &hit, Vec3::Z), Color::ZERO);
    }

    #[test]
    fn test_single_bounce_is_direct_only() {
        let world = reference_world();
        let lights = [Light::new(Vec3::new(-1.5, 1.0, 3.0), Color::splat(5.0))];
        let sky = Material::diffuse(Color::ONE);
        let scene = Scene::new(&world, &lights).with_sky(&sky);
        let mut rng = StdRng::seed_from_u64(1);

        let hit = forward_hit(&scene);
        let expected = direct_lighting(&scene, &hit, Vec3::Z);

        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(trace_path(&scene, ray, 1, &mut rng), expected);
    }

    #[test]
    fn test_render_pixel() {
        let world = reference_world();
        let lights = [Light::new(Vec3::new(-1.5, 1.0, 3.0), Color::splat(5.0))];
        let sky = Material::diffuse(Color::new(0.0, 0.2, 0.5));
        let scene = Scene::new(&world, &lights).with_sky(&sky);
        let camera = Camera::default();
        let config = RenderConfig::new(10, 10).with_quality(4, 5);

        let mut rng = StdRng::seed_from_u64(42);
        let mut sampler = PixelSampler::new(Jitter::Halton);

        // Render center pixel (should hit the sphere)
        let color = render_pixel(&scene, &camera, 5, 5, &config, &mut sampler, &mut rng);
        assert!(color.x > 0.0);
        assert!(color.is_finite());
    }

    #[test]
    fn test_write_tile() {
        let mut image = ImageBuffer::new(4, 3);
        let tile = Tile::new(1, 1, 2, 2, 0);
        let pixels: Vec<f32> = (0..12).map(|i| i as f32 / 12.0).collect();

        image
            .write_tile(&TileResult::new(tile, pixels.clone()))
            .unwrap();

        assert_eq!(image.get(0, 0), [0.0; 3]);
        assert_eq!(image.get(1, 1), [pixels[0], pixels[1], pixels[2]]);
        assert_eq!(image.get(2, 1), [pixels[3], pixels[4], pixels[5]]);
        assert_eq!(image.get(1, 2), [pixels[6], pixels[7], pixels[8]]);
        assert_eq!(image.get(2, 2), [pixels[9], pixels[10], pixels[11]]);
        assert_eq!(image.get(3, 2), [0.0; 3]);
    }

    #[test]
    fn test_write_tile_size_mismatch() {
        let mut image = ImageBuffer::new(4, 4);
        let tile = Tile::new(0, 0, 2, 2, 7);
        let err = image
            .write_tile(&TileResult::new(tile, vec![0.0; 5]))
            .unwrap_err();

        assert!(matches!(
            err,
            RenderError::TileBufferMismatch { index: 7, expected: 12, actual: 5 }
        ));
    }

    #[test]
    fn test_to_rgb8() {
        let mut image = ImageBuffer::new(1, 1);
        image.data.copy_from_slice(&[0.0, 0.5, 1.0]);
        assert_eq!(image.to_rgb8(), vec![0, 128, 255]);
    }
}
