//! Sub-pixel sample positions.

use rand::{Rng, RngCore};

/// Generate a uniform f32 in [0, 1) from a type-erased generator.
#[inline]
pub(crate) fn gen_f32(rng: &mut dyn RngCore) -> f32 {
    rng.gen()
}

/// How primary rays are placed inside a pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Jitter {
    /// Every sample goes through the pixel center.
    Center,
    /// Halton (2, 3) points, rotated per pixel.
    #[default]
    Halton,
}

/// Produces the 2D sub-pixel offsets for one pixel's samples.
///
/// Every pixel walks the same Halton sequence, shifted by a random
/// toroidal offset (Cranley-Patterson rotation) so neighbouring pixels
/// do not share identical sample patterns.
#[derive(Debug, Clone, Copy)]
pub struct PixelSampler {
    jitter: Jitter,
    rotation: (f32, f32),
}

impl PixelSampler {
    pub fn new(jitter: Jitter) -> Self {
        Self {
            jitter,
            rotation: (0.0, 0.0),
        }
    }

    /// Draw a fresh rotation for the next pixel.
    pub fn start_pixel(&mut self, rng: &mut dyn RngCore) {
        if self.jitter == Jitter::Halton {
            self.rotation = (gen_f32(rng), gen_f32(rng));
        }
    }

    /// Offset of sample `index` inside the pixel, in [0, 1)^2.
    pub fn offset(&self, index: u32) -> (f32, f32) {
        match self.jitter {
            Jitter::Center => (0.5, 0.5),
            Jitter::Halton => {
                let (rx, ry) = self.rotation;
                (
                    (halton(index, 2) + rx).fract(),
                    (halton(index, 3) + ry).fract(),
                )
            }
        }
    }
}

/// Radical inverse of `index + 1` in the given base.
fn halton(index: u32, base: u32) -> f32 {
    let mut i = index + 1; // start at 1
    let mut f = 1.0;
    let mut r = 0.0;
    let b = base as f64;
    while i > 0 {
        f /= b;
        r += f * (i % base) as f64;
        i /= base;
    }
    r as f32
}
