//! Pinhole camera for primary ray generation.

use glint_math::{Ray, Vec3};

/// A pinhole camera looking down -Z with +Y up.
///
/// The film plane sits at `z = -1` in camera space. Its half height is
/// `tan(fov / 2)` and its half width is that times the aspect ratio.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    origin: Vec3,
    /// Vertical field of view in degrees
    fov_degrees: f32,
    /// Width / height; derived from the image when not set
    aspect: Option<f32>,
    tan_half_fov: f32,
}

impl Camera {
    /// Create a camera at `origin` with a vertical field of view in degrees.
    pub fn new(origin: Vec3, fov_degrees: f32) -> Self {
        Self {
            origin,
            fov_degrees,
            aspect: None,
            tan_half_fov: (fov_degrees.to_radians() / 2.0).tan(),
        }
    }

    /// Override the aspect ratio instead of using the image's.
    pub fn with_aspect(mut self, aspect: f32) -> Self {
        self.aspect = Some(aspect);
        self
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    pub fn fov_degrees(&self) -> f32 {
        self.fov_degrees
    }

    /// Aspect ratio used for an image of the given size.
    pub fn aspect(&self, width: u32, height: u32) -> f32 {
        self.aspect.unwrap_or(width as f32 / height as f32)
    }

    /// Generate a normalized primary ray through film position `(px, py)`,
    /// measured in pixels from the top-left corner of the image.
    ///
    /// `(x + 0.5, y + 0.5)` is the center of pixel `(x, y)`.
    pub fn ray(&self, px: f32, py: f32, width: u32, height: u32) -> Ray {
        let film_h = self.tan_half_fov;
        let film_w = film_h * self.aspect(width, height);

        let film_x = (2.0 * px / width as f32 - 1.0) * film_w;
        let film_y = (1.0 - 2.0 * py / height as f32) * film_h;

        let direction = Vec3::new(film_x, film_y, -1.0).normalize();
        Ray::new(self.origin, direction)
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, 37.8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_ray_looks_down_negative_z() {
        let camera = Camera::new(Vec3::ZERO, 90.0);
        let ray = camera.ray(50.0, 50.0, 100, 100);

        assert!((ray.direction() - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-6);
        assert_eq!(ray.origin(), Vec3::ZERO);
    }

    #[test]
    fn test_corner_rays() {
        // 90 degree fov: film half height is 1
        let camera = Camera::new(Vec3::ZERO, 90.0);

        let top_left = camera.ray(0.0, 0.0, 100, 100);
        let expected = Vec3::new(-1.0, 1.0, -1.0).normalize();
        assert!((top_left.direction() - expected).length() < 1e-5);

        let bottom_right = camera.ray(100.0, 100.0, 100, 100);
        let expected = Vec3::new(1.0, -1.0, -1.0).normalize();
        assert!((bottom_right.direction() - expected).length() < 1e-5);
    }

    #[test]
    fn test_aspect_from_image() {
        let camera = Camera::new(Vec3::ZERO, 90.0);
        assert_eq!(camera.aspect(200, 100), 2.0);

        let ray = camera.ray(200.0, 50.0, 200, 100);
        let expected = Vec3::new(2.0, 0.0, -1.0).normalize();
        assert!((ray.direction() - expected).length() < 1e-5);

        let forced = camera.with_aspect(1.0);
        assert_eq!(forced.aspect(200, 100), 1.0);
    }

    #[test]
    fn test_rays_are_normalized() {
        let camera = Camera::new(Vec3::new(1.0, 2.0, 3.0), 37.8);
        for (x, y) in [(0.0, 0.0), (13.5, 7.25), (63.0, 31.0)] {
            let ray = camera.ray(x, y, 64, 32);
            assert!((ray.direction().length() - 1.0).abs() < 1e-5);
        }
    }
}
