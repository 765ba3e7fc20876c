//! Glint - CPU Path Tracing
//!
//! A Monte Carlo path tracer for spheres and planes lit by point lights.
//! Surfaces use a Disney-style metal/roughness BRDF; indirect bounces are
//! importance sampled from the GGX lobe. The image is split into tiles
//! rendered by a fixed pool of workers, then tone mapped and sRGB-encoded.

mod camera;
mod config;
mod disney;
mod error;
mod light;
mod material;
mod plane;
mod primitive;
mod renderer;
mod sampler;
mod scene;
mod scheduler;
mod shape;
mod sphere;
mod tile;
mod tonemap;

pub use camera::Camera;
pub use config::{RenderConfig, DEFAULT_TILE_SIZE};
pub use disney::{disney_brdf, sample_ggx, BounceSample, MIN_ROUGHNESS};
pub use error::{RenderError, RenderResult};
pub use light::Light;
pub use material::{Color, Material};
pub use plane::Plane;
pub use primitive::{GeometricPrimitive, Hit, LoosePrimitives, Primitive};
pub use renderer::{direct_lighting, render_pixel, trace_path, ImageBuffer};
pub use sampler::{Jitter, PixelSampler};
pub use scene::Scene;
pub use scheduler::{render, render_with_cancel, CancelToken, TileQueue};
pub use shape::Shape;
pub use sphere::Sphere;
pub use tile::{generate_tiles, render_tile, Tile, TileOrder, TileResult};
pub use tonemap::{encode, linear_to_srgb, reinhard, to_u8};

/// Re-export Vec3 and common math types from glint_math
pub use glint_math::{Interval, Ray, Vec3};
