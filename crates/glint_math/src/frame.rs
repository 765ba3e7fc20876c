//! Local shading frames built around a surface normal.

use crate::Vec3;

/// Build an orthonormal basis `(tangent, bitangent)` around a unit normal.
///
/// Branchless construction from Duff et al., "Building an Orthonormal
/// Basis, Revisited" (JCGT 2017). `tangent × bitangent == n`.
pub fn orthonormal_basis(n: Vec3) -> (Vec3, Vec3) {
    let sign = if n.z >= 0.0 { 1.0 } else { -1.0 };
    let a = -1.0 / (sign + n.z);
    let b = n.x * n.y * a;

    let tangent = Vec3::new(1.0 + sign * n.x * n.x * a, sign * b, -sign * n.x);
    let bitangent = Vec3::new(b, sign + n.y * n.y * a, -n.y);

    (tangent, bitangent)
}

/// Map a vector from the z-up frame around `n` into world space.
#[inline]
pub fn to_world(local: Vec3, n: Vec3) -> Vec3 {
    let (tangent, bitangent) = orthonormal_basis(n);
    local.x * tangent + local.y * bitangent + local.z * n
}

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}
