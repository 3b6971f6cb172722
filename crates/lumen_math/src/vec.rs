//! Vector helpers that glam does not provide.

use crate::{MathError, MathResult, Vec3};

/// Per-component threshold below which a vector counts as zero.
pub const NEAR_ZERO_EPSILON: f64 = 1e-8;

/// Normalize a vector.
///
/// The input must have non-zero length. Debug builds assert this; release
/// builds follow IEEE arithmetic and produce NaN components.
#[inline]
pub fn unit_vector(v: Vec3) -> Vec3 {
    debug_assert!(
        v.length_squared() > 0.0,
        "unit_vector called on a zero-length vector"
    );
    v / v.length()
}

/// Normalize a vector, failing instead of producing NaN.
pub fn try_unit_vector(v: Vec3) -> MathResult<Vec3> {
    v.try_normalize().ok_or(MathError::DegenerateVector)
}

/// Returns true if every component is within `NEAR_ZERO_EPSILON` of zero.
#[inline]
pub fn near_zero(v: Vec3) -> bool {
    v.x.abs() < NEAR_ZERO_EPSILON && v.y.abs() < NEAR_ZERO_EPSILON && v.z.abs() < NEAR_ZERO_EPSILON
}

/// Reflect a vector about a normal.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract a unit vector through a surface with unit normal `n`.
///
/// `etai_over_etat` is the ratio of refractive indices on the incident and
/// transmitted sides.
#[inline]
pub fn refract(uv: Vec3, n: Vec3, etai_over_etat: f64) -> Vec3 {
    let cos_theta = (-uv).dot(n).min(1.0);
    let r_out_perp = etai_over_etat * (uv + cos_theta * n);
    let r_out_parallel = -(1.0 - r_out_perp.length_squared()).abs().sqrt() * n;
    r_out_perp + r_out_parallel
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_vector_length() {
        let samples = [
            Vec3::new(3.0, 4.0, 0.0),
            Vec3::new(-1e-3, 2e-3, 5e-4),
            Vec3::new(1e6, -2e6, 3e6),
            Vec3::new(0.0, 0.0, -7.0),
        ];
        for v in samples {
            assert!((unit_vector(v).length() - 1.0).abs() < 1e-9, "v = {v:?}");
        }
    }

    #[test]
    fn test_try_unit_vector() {
        assert_eq!(try_unit_vector(Vec3::ZERO), Err(MathError::DegenerateVector));
        assert_eq!(try_unit_vector(Vec3::new(0.0, 2.0, 0.0)), Ok(Vec3::Y));
    }

    #[test]
    fn test_near_zero() {
        assert!(near_zero(Vec3::ZERO));
        assert!(near_zero(Vec3::new(1e-9, -1e-9, 0.0)));
        assert!(!near_zero(Vec3::new(1e-9, 1e-7, 0.0)));
    }

    #[test]
    fn test_reflect() {
        let v = Vec3::new(1.0, -1.0, 0.0);
        assert_eq!(reflect(v, Vec3::Y), Vec3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_refract_straight_through() {
        // Normal incidence does not bend regardless of the ratio
        let out = refract(-Vec3::Z, Vec3::Z, 1.0 / 1.5);
        assert!((out - (-Vec3::Z)).length() < 1e-12);
    }

    #[test]
    fn test_refract_identity_ratio() {
        let uv = unit_vector(Vec3::new(1.0, -1.0, 0.0));
        let out = refract(uv, Vec3::Y, 1.0);
        assert!((out - uv).length() < 1e-12);
    }
}
