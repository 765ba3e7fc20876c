//! Render configuration.

use crate::{Camera, Jitter, RenderError, RenderResult, TileOrder};

/// Default tile edge length in pixels.
pub const DEFAULT_TILE_SIZE: u32 = 32;

/// Everything the core needs to know besides the scene and camera.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    /// Samples per pixel
    pub samples_per_pixel: u32,
    /// Path segments traced per sample
    pub max_bounces: u32,
    pub tile_width: u32,
    pub tile_height: u32,
    /// Worker count; 0 uses the available hardware parallelism
    pub threads: usize,
    /// Base seed; worker `i` seeds its generator with `seed + i`
    pub seed: u64,
    /// Sub-pixel sample placement
    pub jitter: Jitter,
    /// Order in which tiles are handed out
    pub tile_order: TileOrder,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 360,
            samples_per_pixel: 64,
            max_bounces: 10,
            tile_width: DEFAULT_TILE_SIZE,
            tile_height: DEFAULT_TILE_SIZE,
            threads: 0,
            seed: 0,
            jitter: Jitter::Halton,
            tile_order: TileOrder::Spiral,
        }
    }
}

impl RenderConfig {
    /// Create a default configuration for the given resolution.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    /// Set quality settings.
    pub fn with_quality(mut self, samples_per_pixel: u32, max_bounces: u32) -> Self {
        self.samples_per_pixel = samples_per_pixel;
        self.max_bounces = max_bounces;
        self
    }

    /// Set tile dimensions.
    pub fn with_tile_size(mut self, tile_width: u32, tile_height: u32) -> Self {
        self.tile_width = tile_width;
        self.tile_height = tile_height;
        self
    }

    /// Set the worker count (0 = automatic).
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_jitter(mut self, jitter: Jitter) -> Self {
        self.jitter = jitter;
        self
    }

    pub fn with_tile_order(mut self, tile_order: TileOrder) -> Self {
        self.tile_order = tile_order;
        self
    }

    /// Number of workers a render will actually spawn.
    pub fn worker_count(&self) -> usize {
        if self.threads > 0 {
            self.threads
        } else {
            std::thread::available_parallelism().map_or(1, |n| n.get())
        }
    }

    /// Reject configurations that cannot produce an image.
    pub fn validate(&self) -> RenderResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.tile_width == 0 || self.tile_height == 0 {
            return Err(RenderError::InvalidTileSize {
                width: self.tile_width,
                height: self.tile_height,
            });
        }
        if self.samples_per_pixel == 0 {
            return Err(RenderError::InvalidSampleCount);
        }
        if self.max_bounces == 0 {
            return Err(RenderError::InvalidBounceCount);
        }
        Ok(())
    }

    /// Validate this configuration together with the camera it will drive.
    pub fn validate_with(&self, camera: &Camera) -> RenderResult<()> {
        self.validate()?;
        let fov = camera.fov_degrees();
        if !(fov > 0.0 && fov < 180.0) {
            return Err(RenderError::InvalidFieldOfView(fov));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_math::Vec3;

    #[test]
    fn test_default_is_valid() {
        assert!(RenderConfig::default().validate().is_ok());
        assert!(RenderConfig::default()
            .validate_with(&Camera::default())
            .is_ok());
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        let err = RenderConfig::new(0, 10).validate().unwrap_err();
        assert!(matches!(err, RenderError::InvalidDimensions { width: 0, height: 10 }));
    }

    #[test]
    fn test_zero_tile_size_rejected() {
        let config = RenderConfig::new(64, 64).with_tile_size(16, 0);
        assert!(matches!(
            config.validate(),
            Err(RenderError::InvalidTileSize { width: 16, height: 0 })
        ));
    }

    #[test]
    fn test_zero_samples_and_bounces_rejected() {
        let config = RenderConfig::new(8, 8).with_quality(0, 4);
        assert!(matches!(config.validate(), Err(RenderError::InvalidSampleCount)));

        let config = RenderConfig::new(8, 8).with_quality(4, 0);
        assert!(matches!(config.validate(), Err(RenderError::InvalidBounceCount)));
    }

    #[test]
    fn test_bad_fov_rejected() {
        let config = RenderConfig::new(8, 8);
        for fov in [0.0, 180.0, -10.0, f32::NAN] {
            let camera = Camera::new(Vec3::ZERO, fov);
            assert!(matches!(
                config.validate_with(&camera),
                Err(RenderError::InvalidFieldOfView(_))
            ));
        }
    }

    #[test]
    fn test_worker_count() {
        assert_eq!(RenderConfig::default().with_threads(3).worker_count(), 3);
        assert!(RenderConfig::default().worker_count() >= 1);
    }
}
