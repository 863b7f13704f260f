//! Sphere primitive for ray tracing.

use glint_math::{Interval, Point3, Ray, Vec3};
use serde::{Deserialize, Serialize};

use crate::hittable::{Hittable, ShapeHit};

/// A sphere given by its center and radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    center: Point3,
    radius: f64,
}

impl Sphere {
    /// Create a new sphere. Negative radii are clamped to zero.
    pub fn new(center: Point3, radius: f64) -> Self {
        Self {
            center,
            radius: radius.max(0.0),
        }
    }

    pub fn center(&self) -> Point3 {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Outward unit normal at a point on the sphere.
    #[inline]
    pub fn normal_at(&self, p: Point3) -> Vec3 {
        (p - self.center).normalize()
    }

    /// Both real roots `t0 <= t1` of the ray/sphere quadratic, if any.
    ///
    /// The ray direction is unit length, so the quadratic is
    /// `t^2 + b t + c = 0`. The second root is recovered from the product
    /// `t0 * t1 = c` to avoid cancellation when `b` dominates.
    pub(crate) fn roots(&self, ray: &Ray) -> Option<(f64, f64)> {
        let oc = ray.origin() - self.center;
        let b = 2.0 * ray.direction().dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - 4.0 * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let q = if b < 0.0 {
            -0.5 * (b - sqrtd)
        } else {
            -0.5 * (b + sqrtd)
        };
        if q == 0.0 {
            return Some((0.0, 0.0));
        }

        let (r0, r1) = (q, c / q);
        Some((r0.min(r1), r0.max(r1)))
    }
}

impl Hittable for Sphere {
    fn intersect(&self, ray: &Ray) -> Option<ShapeHit> {
        if ray.is_degenerate() || self.radius == 0.0 {
            return None;
        }

        let (t0, t1) = self.roots(ray)?;

        // Entirely behind the ray
        if !Interval::FORWARD.contains(t1) {
            return None;
        }

        // Only the far root is in front: the origin is inside the sphere
        if !Interval::FORWARD.contains(t0) {
            return Some(ShapeHit {
                t: t1,
                normal: -self.normal_at(ray.at(t1)),
                is_inside: true,
            });
        }

        Some(ShapeHit {
            t: t0,
            normal: self.normal_at(ray.at(t0)),
            is_inside: false,
        })
    }
}
