//! Disney-style metal/roughness BRDF and GGX importance sampling.
//!
//! Based on Burley, "Physically Based Shading at Disney" (2012). Only the
//! diffuse and primary specular lobes are modelled.

use crate::{Color, Material};
use glint_math::{lerp, lerp3, reflect, to_world, Vec3};
use std::f32::consts::{FRAC_1_PI, PI};

/// Roughness floor; keeps the GGX lobe from collapsing to a delta.
pub const MIN_ROUGHNESS: f32 = 1e-3;

/// Normal-incidence reflectance of dielectrics (4%).
const DIELECTRIC_F0: f32 = 0.04;

/// Evaluate the BRDF times the clamped cosine for light arriving from `l`
/// and leaving towards `v`. All vectors are unit length.
///
/// Returns black when either direction is below the surface, so every
/// component of the result is non-negative.
pub fn disney_brdf(n: Vec3, l: Vec3, v: Vec3, material: &Material) -> Color {
    let n_dot_l = n.dot(l);
    let n_dot_v = n.dot(v);
    if n_dot_l <= 0.0 || n_dot_v <= 0.0 {
        return Color::ZERO;
    }

    let roughness = material.roughness.max(MIN_ROUGHNESS);

    let h = (l + v).normalize();
    let l_dot_h = l.dot(h);
    let n_dot_h = n.dot(h);

    // Fresnel-weighted diffuse (Burley 2012)
    let fl = schlick_weight(n_dot_l);
    let fv = schlick_weight(n_dot_v);
    let fd90 = 0.5 + 2.0 * roughness * l_dot_h * l_dot_h;
    let fd = lerp(1.0, fd90, fl) * lerp(1.0, fd90, fv);
    let diffuse = FRAC_1_PI * fd * (1.0 - material.metalness) * material.color;

    // GGX specular
    let alpha = roughness * roughness;
    let ds = gtr2(n_dot_h, alpha);
    let fs = lerp3(fresnel_0(material), Color::ONE, schlick_weight(l_dot_h));
    let alpha_g = (0.5 + 0.5 * roughness) * (0.5 + 0.5 * roughness);
    let gs = smith_g_ggx(n_dot_l, alpha_g) * smith_g_ggx(n_dot_v, alpha_g);

    (diffuse + gs * ds * fs) * n_dot_l.min(1.0)
}

/// Result of importance sampling the specular lobe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BounceSample {
    /// New incoming direction (meaningless when rejected)
    pub wi: Vec3,
    /// Throughput multiplier `F * G * |wo.h| / (n.wo * n.h)`; zero when rejected
    pub weight: Color,
}

impl BounceSample {
    fn rejected(wi: Vec3) -> Self {
        Self {
            wi,
            weight: Color::ZERO,
        }
    }

    /// True if the sample carries no energy.
    pub fn is_rejected(&self) -> bool {
        self.weight == Color::ZERO
    }
}

/// Sample a GGX half vector around `n` from two uniform numbers in [0, 1)
/// and reflect `wo` (unit, pointing away from the surface) about it.
///
/// The returned weight already divides out the sampling pdf, so the
/// integrator multiplies it straight into the path throughput. Samples
/// that end up below the surface, or whose half vector faces away from
/// `wi`, come back with zero weight.
pub fn sample_ggx(n: Vec3, wo: Vec3, material: &Material, e0: f32, e1: f32) -> BounceSample {
    let roughness = material.roughness.max(MIN_ROUGHNESS);
    let a = roughness * roughness;
    let a2 = a * a;

    // theta = acos(sqrt((1 - e0) / ((a2 - 1) e0 + 1)))
    let cos_theta = ((1.0 - e0) / ((a2 - 1.0) * e0 + 1.0)).sqrt();
    let sin_theta = (1.0 - cos_theta * cos_theta).max(0.0).sqrt();
    let phi = 2.0 * PI * e1;

    let h_local = Vec3::new(sin_theta * phi.cos(), sin_theta * phi.sin(), cos_theta);
    let h = to_world(h_local, n);
    let wi = reflect(-wo, h);

    let n_dot_wi = n.dot(wi);
    let wi_dot_h = wi.dot(h);
    if n_dot_wi <= 0.0 || wi_dot_h <= 0.0 {
        return BounceSample::rejected(wi);
    }

    let n_dot_wo = n.dot(wo);
    let denom = n_dot_wo * n.dot(h);
    if denom <= 0.0 {
        return BounceSample::rejected(wi);
    }

    let f = lerp3(fresnel_0(material), Color::ONE, schlick_weight(wi_dot_h));
    let g = smith_ggx_masking_shadowing(n_dot_wi, n_dot_wo, a2);
    let weight = wo.dot(h).abs() / denom;

    BounceSample {
        wi,
        weight: f * (g * weight),
    }
}

/// Fresnel reflectance at normal incidence.
#[inline]
fn fresnel_0(material: &Material) -> Color {
    lerp3(Color::splat(DIELECTRIC_F0), material.color, material.metalness)
}

/// Schlick weight `(1 - cos_theta)^5`.
#[inline]
pub fn schlick_weight(cos_theta: f32) -> f32 {
    let x = (1.0 - cos_theta).clamp(0.0, 1.0);
    let x2 = x * x;
    x2 * x2 * x
}

/// GTR2 / GGX normal distribution.
#[inline]
pub fn gtr2(n_dot_h: f32, alpha: f32) -> f32 {
    let a2 = alpha * alpha;
    let t = 1.0 + (a2 - 1.0) * n_dot_h * n_dot_h;
    a2 / (PI * t * t)
}

/// Separable Smith G1 for GGX with the `1 / (2 n.v)` factor folded in.
#[inline]
pub fn smith_g_ggx(n_dot_v: f32, alpha_g: f32) -> f32 {
    let a = alpha_g * alpha_g;
    let b = n_dot_v * n_dot_v;
    1.0 / (n_dot_v + (a + b - a * b).sqrt())
}

/// Height-correlated Smith masking-shadowing for GGX.
#[inline]
pub fn smith_ggx_masking_shadowing(n_dot_l: f32, n_dot_v: f32, a2: f32) -> f32 {
    let denom_a = n_dot_v * (a2 + (1.0 - a2) * n_dot_l * n_dot_l).sqrt();
    let denom_b = n_dot_l * (a2 + (1.0 - a2) * n_dot_v * n_dot_v).sqrt();
    2.0 * n_dot_l * n_dot_v / (denom_a + denom_b)
}
