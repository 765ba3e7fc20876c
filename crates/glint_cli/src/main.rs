//! Glint - reference scene renderer.
//!
//! Renders a red sphere resting on a green ground plane under a single
//! point light and writes the result to disk. The output format follows
//! the file extension (PPM by default).
//!
//! Usage: `glint [OUTPUT]`

use anyhow::{Context, Result};
use glint_math::Vec3;
use glint_renderer::{
    render, Camera, Color, GeometricPrimitive, ImageBuffer, Light, LoosePrimitives, Material,
    Plane, Primitive, RenderConfig, Scene, Sphere,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;

const DEFAULT_OUTPUT: &str = "glint.ppm";

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Starting Glint");

    let output = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let world = build_scene();
    let lights = [Light::new(Vec3::new(-1.5, 1.0, 3.0), Color::splat(5.0)).with_strength(40.0)];
    let sky = Material::diffuse(Color::new(0.0, 0.2, 0.5));
    let scene = Scene::new(&world, &lights).with_sky(&sky);

    let camera = Camera::new(Vec3::ZERO, 37.8);
    let config = RenderConfig::new(640, 360);

    let image = render(&scene, &camera, &config).context("Render failed")?;
    save(&image, &output)?;

    log::info!("Saved to {}", output.display());
    Ok(())
}

fn build_scene() -> Primitive {
    let mut objects = LoosePrimitives::new();

    // Red glossy sphere
    objects.push(GeometricPrimitive::new(
        Sphere::new(Vec3::new(0.0, 0.0, -3.0), 0.5),
        Arc::new(Material::new(Color::new(1.0, 0.0, 0.0), 0.1, 0.0)),
    ));

    // Ground
    objects.push(GeometricPrimitive::new(
        Plane::new(Vec3::Y, -0.5),
        Arc::new(Material::new(Color::new(0.0, 0.43, 0.0), 1.0, 0.0)),
    ));

    log::info!("Scene built with {} primitives", objects.len());
    objects.into()
}

fn save(image: &ImageBuffer, path: &Path) -> Result<()> {
    let rgb = image::RgbImage::from_raw(image.width, image.height, image.to_rgb8())
        .context("Image buffer size does not match its dimensions")?;
    rgb.save(path)
        .with_context(|| format!("Failed to write {}", path.display()))
}
