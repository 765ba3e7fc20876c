//! Display transform: Reinhard tone mapping and sRGB encoding.

use crate::Color;
use glint_math::Interval;

/// Reinhard operator, `c / (c + 1)` per channel.
#[inline]
pub fn reinhard(color: Color) -> Color {
    color / (color + Color::ONE)
}

/// sRGB transfer function for a linear value in [0, 1].
#[inline]
pub fn linear_to_srgb(linear: f32) -> f32 {
    if linear <= 0.0031308 {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

/// Tone map and sRGB-encode a linear radiance value into [0, 1].
pub fn encode(color: Color) -> Color {
    let mapped = reinhard(color.max(Color::ZERO));
    Color::new(
        Interval::UNIT.clamp(linear_to_srgb(mapped.x)),
        Interval::UNIT.clamp(linear_to_srgb(mapped.y)),
        Interval::UNIT.clamp(linear_to_srgb(mapped.z)),
    )
}

/// Quantize an encoded channel value to 8 bits.
#[inline]
pub fn to_u8(encoded: f32) -> u8 {
    (Interval::UNIT.clamp(encoded) * 255.0 + 0.5) as u8
}
