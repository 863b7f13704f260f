//! Closed set of shape variants.

use glint_math::{Point3, Ray, Vec3};
use serde::{Deserialize, Serialize};

use crate::hittable::{Hittable, ShapeHit};
use crate::{Dome, Plane, Sphere};

/// Any shape a surface can be built from.
///
/// Serialized as `{"type": "Sphere", "data": {...}}` so a field typed only
/// as `Shape` round-trips to its concrete variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Shape {
    Sphere(Sphere),
    Plane(Plane),
    Dome(Dome),
}

impl Shape {
    /// Stable variant tag, identical to the serialized discriminator.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Sphere(_) => "Sphere",
            Shape::Plane(_) => "Plane",
            Shape::Dome(_) => "Dome",
        }
    }

    /// Check the geometry that constructors would have normalized.
    pub fn validate(&self) -> Result<(), String> {
        match self {
            Shape::Sphere(sphere) => check_ball(sphere.center(), sphere.radius()),
            Shape::Plane(plane) => {
                check_point(plane.point())?;
                check_direction("plane normal", plane.normal())
            }
            Shape::Dome(dome) => {
                check_ball(dome.center(), dome.radius())?;
                check_direction("cut normal", dome.cut_normal())
            }
        }
    }
}

fn check_point(p: Point3) -> Result<(), String> {
    if p.is_finite() {
        Ok(())
    } else {
        Err(format!("position must be finite, got {}", p))
    }
}

fn check_ball(center: Point3, radius: f64) -> Result<(), String> {
    check_point(center)?;
    if radius.is_finite() && radius >= 0.0 {
        Ok(())
    } else {
        Err(format!("radius must be non-negative, got {}", radius))
    }
}

fn check_direction(name: &str, v: Vec3) -> Result<(), String> {
    if v != Vec3::ZERO && v.is_finite() {
        Ok(())
    } else {
        Err(format!("{} must be a non-zero vector", name))
    }
}

impl Hittable for Shape {
    fn intersect(&self, ray: &Ray) -> Option<ShapeHit> {
        match self {
            Shape::Sphere(sphere) => sphere.intersect(ray),
            Shape::Plane(plane) => plane.intersect(ray),
            Shape::Dome(dome) => dome.intersect(ray),
        }
    }
}

impl From<Sphere> for Shape {
    fn from(sphere: Sphere) -> Self {
        Shape::Sphere(sphere)
    }
}

impl From<Plane> for Shape {
    fn from(plane: Plane) -> Self {
        Shape::Plane(plane)
    }
}

impl From<Dome> for Shape {
    fn from(dome: Dome) -> Self {
        Shape::Dome(dome)
    }
}
