//! Hittable trait and hit records for ray-surface intersection.

use std::cmp::Ordering;

use glint_math::{Point3, Ray, Vec3};

use crate::Surface;

/// Geometric result of intersecting a ray with a bare shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeHit {
    /// Ray parameter of the intersection, always `>= EPSILON`
    pub t: f64,
    /// Unit surface normal; outward unless the ray started inside the shape
    pub normal: Vec3,
    /// Whether the ray origin lies inside the shape
    pub is_inside: bool,
}

/// Capability shared by every shape variant.
pub trait Hittable: Send + Sync {
    /// Nearest intersection in front of the ray, if any.
    ///
    /// Implementations never report a parameter below `EPSILON`, and treat
    /// degenerate rays or parallel configurations as a miss.
    fn intersect(&self, ray: &Ray) -> Option<ShapeHit>;
}

/// Record of a ray hitting a surface of the scene.
///
/// Created per intersection test and consumed right away by shading.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    /// Parameter t where the intersection occurs
    pub t: f64,
    /// Unit surface normal at the intersection
    pub normal: Vec3,
    /// The surface that was hit
    pub surface: &'a Surface,
    /// Whether the ray travelled inside the shape
    pub is_inside: bool,
}

impl<'a> Hit<'a> {
    /// Bind a shape-level hit to the surface that produced it.
    pub fn new(shape_hit: ShapeHit, surface: &'a Surface) -> Self {
        Self {
            t: shape_hit.t,
            normal: shape_hit.normal,
            surface,
            is_inside: shape_hit.is_inside,
        }
    }

    /// The intersection point along `ray`.
    #[inline]
    pub fn point(&self, ray: &Ray) -> Point3 {
        ray.at(self.t)
    }
}

impl PartialEq for Hit<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.t == other.t
    }
}

impl PartialOrd for Hit<'_> {
    /// Hits order by distance, nearest first.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.t.partial_cmp(&other.t)
    }
}
