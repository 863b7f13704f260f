//! Infinite plane primitive.

use glint_math::{Interval, Point3, Ray, Vec3, EPSILON};
use serde::{Deserialize, Serialize};

use crate::hittable::{Hittable, ShapeHit};

/// An infinite plane through `point` with the given normal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    normal: Vec3,
    point: Point3,
}

impl Plane {
    /// Create a new plane. The normal is normalized on construction.
    pub fn new(normal: Vec3, point: Point3) -> Self {
        Self {
            normal: normal.normalize_or_zero(),
            point,
        }
    }

    /// Unit normal of the plane (zero if it was built from a zero vector).
    pub fn normal(&self) -> Vec3 {
        // Deserialized planes skip the constructor
        self.normal.normalize_or_zero()
    }

    pub fn point(&self) -> Point3 {
        self.point
    }
}

impl Hittable for Plane {
    fn intersect(&self, ray: &Ray) -> Option<ShapeHit> {
        let n = self.normal();
        if ray.is_degenerate() || n == Vec3::ZERO {
            return None;
        }

        // Parallel rays never reach the plane
        let denom = n.dot(ray.direction());
        if denom.abs() < EPSILON {
            return None;
        }

        let t = (self.point - ray.origin()).dot(n) / denom;
        if !Interval::FORWARD.contains(t) {
            return None;
        }

        // A plane has no inside; report the side facing the ray
        let normal = if denom > 0.0 { -n } else { n };
        Some(ShapeHit {
            t,
            normal,
            is_inside: false,
        })
    }
}
