//! Glint math types.
//!
//! Everything is double precision. Directions, positions and colors all share
//! glam's `DVec3`; the aliases only document intent at the call site.

// Re-export glam for convenience
pub use glam::{dvec3, DVec3};

mod interval;
mod ray;
pub use interval::Interval;
pub use ray::Ray;

/// A free direction in 3D space.
pub type Vec3 = DVec3;

/// An affine position in 3D space.
pub type Point3 = DVec3;

/// Linear RGB color, components nominally in [0, 1] but never clamped
/// until final pixel conversion.
pub type Color = DVec3;

/// Minimum ray parameter accepted as a forward intersection.
///
/// Every "in front of the ray" test goes through this constant, which keeps
/// secondary rays spawned on a surface from hitting that same surface.
pub const EPSILON: f64 = 1e-6;

/// Mirror `v` about the unit normal `n`.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract the unit direction `d` through a surface with unit normal `n`.
///
/// `n` must face the incoming ray (`d · n <= 0`) and `eta` is the ratio of
/// refraction indices (incident over transmitted). Returns `None` on total
/// internal reflection.
pub fn refract(d: Vec3, n: Vec3, eta: f64) -> Option<Vec3> {
    let cos_i = (-d.dot(n)).min(1.0);
    let k = 1.0 - eta * eta * (1.0 - cos_i * cos_i);
    if k < 0.0 {
        return None;
    }
    Some((eta * d + (eta * cos_i - k.sqrt()) * n).normalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(a * b, Vec3::new(4.0, 10.0, 18.0));
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
    }

    #[test]
    fn test_point_distance() {
        let p = Point3::new(1.0, 1.0, 1.0);
        let q = Point3::new(2.0, 3.0, 1.0);
        assert_eq!(p.distance_squared(q), 5.0);
        assert_eq!(q - p, Vec3::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn test_reflect() {
        let v = Vec3::new(1.0, -1.0, 0.0);
        assert_eq!(reflect(v, Vec3::Y), Vec3::new(1.0, 1.0, 0.0));

        // Grazing vector is unchanged
        assert_eq!(reflect(Vec3::X, Vec3::Y), Vec3::X);
    }

    #[test]
    fn test_refract_straight_through() {
        let d = Vec3::new(0.0, -1.0, 0.0);
        let t = refract(d, Vec3::Y, 1.0 / 1.5).unwrap();
        assert!(t.abs_diff_eq(d, 1e-12));
    }

    #[test]
    fn test_refract_bends_towards_normal() {
        let d = Vec3::new(1.0, -1.0, 0.0).normalize();
        let t = refract(d, Vec3::Y, 1.0 / 1.5).unwrap();

        // Snell: sin(theta_t) = eta * sin(theta_i)
        let sin_i = d.x;
        assert_relative_eq!(t.x, sin_i / 1.5, epsilon = 1e-12);
        assert_relative_eq!(t.length(), 1.0, epsilon = 1e-12);
        assert!(t.y < 0.0);
    }

    #[test]
    fn test_total_internal_reflection() {
        // Leaving glass at 60 degrees exceeds the ~41.8 degree critical angle
        let d = Vec3::new(60f64.to_radians().sin(), -60f64.to_radians().cos(), 0.0);
        assert!(refract(d, Vec3::Y, 1.5).is_none());
    }
}
