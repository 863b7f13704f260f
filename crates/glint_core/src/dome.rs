//! Hemispherical dome: a sphere cut in half by a plane through its center.
//!
//! The dome is a closed solid. Its boundary is the spherical cap on the
//! positive side of the cutting plane plus the flat base disk, whose outward
//! normal is the negated cut normal.

use glint_math::{Interval, Point3, Ray, Vec3, EPSILON};
use serde::{Deserialize, Serialize};

use crate::hittable::{Hittable, ShapeHit};
use crate::Sphere;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dome {
    center: Point3,
    radius: f64,
    cut_normal: Vec3,
}

impl Dome {
    /// Create a dome whose cap lies on the side `cut_normal` points to.
    pub fn new(center: Point3, radius: f64, cut_normal: Vec3) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
            cut_normal: cut_normal.normalize_or_zero(),
        }
    }

    pub fn center(&self) -> Point3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn cut_normal(&self) -> Vec3 {
        self.cut_normal.normalize_or_zero()
    }

    /// Nearest forward hit on the spherical cap, outward normal.
    fn cap_hit(&self, ray: &Ray, n: Vec3) -> Option<(f64, Vec3)> {
        let sphere = Sphere::new(self.center, self.radius);
        let (t0, t1) = sphere.roots(ray)?;

        [t0, t1]
            .into_iter()
            .filter(|t| Interval::FORWARD.contains(*t))
            .map(|t| (t, ray.at(t)))
            .find(|(_, p)| (*p - self.center).dot(n) >= 0.0)
            .map(|(t, p)| (t, sphere.normal_at(p)))
    }

    /// Forward hit on the base disk, outward normal.
    fn base_hit(&self, ray: &Ray, n: Vec3) -> Option<(f64, Vec3)> {
        let denom = n.dot(ray.direction());
        if denom.abs() < EPSILON {
            return None;
        }

        let t = (self.center - ray.origin()).dot(n) / denom;
        if !Interval::FORWARD.contains(t) {
            return None;
        }

        let p = ray.at(t);
        (p.distance_squared(self.center) <= self.radius * self.radius).then_some((t, -n))
    }
}

impl Hittable for Dome {
    fn intersect(&self, ray: &Ray) -> Option<ShapeHit> {
        let n = self.cut_normal();
        if ray.is_degenerate() || n == Vec3::ZERO || self.radius == 0.0 {
            return None;
        }

        let (t, outward) = match (self.cap_hit(ray, n), self.base_hit(ray, n)) {
            (Some(cap), Some(base)) => {
                if cap.0 <= base.0 {
                    cap
                } else {
                    base
                }
            }
            (Some(hit), None) | (None, Some(hit)) => hit,
            (None, None) => return None,
        };

        // Leaving a closed convex solid means the ray started inside it
        let is_inside = outward.dot(ray.direction()) > 0.0;
        Some(ShapeHit {
            t,
            normal: if is_inside { -outward } else { outward },
            is_inside,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn dome() -> Dome {
        Dome::new(Point3::ZERO, 1.0, Vec3::Y)
    }

    #[test]
    fn test_hit_cap_from_above() {
        let ray = Ray::new(Point3::new(0.0, 5.0, 0.0), -Vec3::Y);
        let hit = dome().intersect(&ray).unwrap();

        assert_relative_eq!(hit.t, 4.0, epsilon = 1e-12);
        assert!(hit.normal.abs_diff_eq(Vec3::Y, 1e-12));
        assert!(!hit.is_inside);
    }

    #[test]
    fn test_hit_base_from_below() {
        let ray = Ray::new(Point3::new(0.2, -5.0, 0.1), Vec3::Y);
        let hit = dome().intersect(&ray).unwrap();

        assert_relative_eq!(hit.t, 5.0, epsilon = 1e-12);
        assert_eq!(hit.normal, -Vec3::Y);
        assert!(!hit.is_inside);
    }

    #[test]
    fn test_cut_half_is_empty() {
        // Passes through where the lower half of the full sphere would be
        let ray = Ray::new(Point3::new(-5.0, -0.5, 0.0), Vec3::X);
        assert!(dome().intersect(&ray).is_none());

        let sphere = Sphere::new(Point3::ZERO, 1.0);
        assert!(sphere.intersect(&ray).is_some());
    }

    #[test]
    fn test_side_ray_hits_upper_half() {
        let ray = Ray::new(Point3::new(-5.0, 0.5, 0.0), Vec3::X);
        let hit = dome().intersect(&ray).unwrap();
        let p = ray.at(hit.t);

        assert_relative_eq!(p.length(), 1.0, epsilon = 1e-12);
        assert!(p.x < 0.0);
        assert!(hit.normal.abs_diff_eq(p, 1e-12));
    }

    #[test]
    fn test_origin_inside_dome() {
        let origin = Point3::new(0.0, 0.3, 0.0);

        // Exits through the cap
        let ray = Ray::new(origin, Vec3::X);
        let hit = dome().intersect(&ray).unwrap();
        assert!(hit.is_inside);
        assert!(hit.normal.dot(ray.direction()) < 0.0);

        // Exits through the base
        let ray = Ray::new(origin, -Vec3::Y);
        let hit = dome().intersect(&ray).unwrap();
        assert!(hit.is_inside);
        assert_relative_eq!(hit.t, 0.3, epsilon = 1e-12);
        assert_eq!(hit.normal, Vec3::Y);
    }

    #[test]
    fn test_base_outside_radius_misses() {
        let ray = Ray::new(Point3::new(2.0, -5.0, 0.0), Vec3::Y);
        assert!(dome().intersect(&ray).is_none());
    }
}
