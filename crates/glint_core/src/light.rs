//! Light sources.
//!
//! Lights are queried per hit point: each one builds the ray from the point
//! towards itself, reports its intensity at that point, and decides whether
//! a given surface blocks that ray.

use glint_math::{Color, Interval, Point3, Ray, Vec3};
use serde::{Deserialize, Serialize};

use crate::{CutoffSpotlight, Surface};

/// Capability shared by every light variant.
pub trait LightSource: Send + Sync {
    /// Ray from `point` towards the light.
    fn ray_to_light(&self, point: Point3) -> Ray;

    /// Light intensity arriving at `point` along `ray_to_light`.
    fn intensity(&self, point: Point3, ray_to_light: &Ray) -> Color;

    /// Whether `surface` blocks `ray_to_light` before it reaches the light.
    fn is_occluded_by(&self, surface: &Surface, ray_to_light: &Ray) -> bool;
}

/// A light infinitely far away, shining along `direction`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectionalLight {
    direction: Vec3,
    intensity: Color,
}

impl DirectionalLight {
    pub fn new(direction: Vec3, intensity: Color) -> Self {
        Self {
            direction: direction.normalize_or_zero(),
            intensity,
        }
    }

    pub fn direction(&self) -> Vec3 {
        self.direction
    }
}

impl LightSource for DirectionalLight {
    fn ray_to_light(&self, point: Point3) -> Ray {
        Ray::new(point, -self.direction)
    }

    fn intensity(&self, _point: Point3, _ray_to_light: &Ray) -> Color {
        self.intensity
    }

    fn is_occluded_by(&self, surface: &Surface, ray_to_light: &Ray) -> bool {
        surface.intersect(ray_to_light).is_some()
    }
}

/// An omnidirectional light at a position, attenuated with distance as
/// `I / (kc + kl * d + kq * d^2)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointLight {
    position: Point3,
    intensity: Color,
    kq: f64,
    kl: f64,
    kc: f64,
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            position: Point3::ZERO,
            intensity: Color::ONE,
            kq: 0.01,
            kl: 0.0,
            kc: 1.0,
        }
    }
}

impl PointLight {
    pub fn new(position: Point3, intensity: Color) -> Self {
        Self {
            position,
            intensity,
            ..Default::default()
        }
    }

    /// Set the quadratic, linear and constant decay factors.
    pub fn with_decay(mut self, kq: f64, kl: f64, kc: f64) -> Self {
        self.kq = kq;
        self.kl = kl;
        self.kc = kc;
        self
    }

    pub fn position(&self) -> Point3 {
        self.position
    }
}

impl LightSource for PointLight {
    fn ray_to_light(&self, point: Point3) -> Ray {
        Ray::through(point, self.position)
    }

    fn intensity(&self, point: Point3, _ray_to_light: &Ray) -> Color {
        let d = point.distance(self.position);
        self.intensity / (self.kc + self.kl * d + self.kq * d * d)
    }

    fn is_occluded_by(&self, surface: &Surface, ray_to_light: &Ray) -> bool {
        let reach = Interval::forward_until(ray_to_light.origin().distance(self.position));
        surface
            .intersect(ray_to_light)
            .is_some_and(|hit| reach.surrounds(hit.t))
    }
}

/// Any light source of a scene.
///
/// Serialized as `{"type": "Point", "data": {...}}` so a field typed only
/// as `Light` round-trips to its concrete variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Light {
    Directional(DirectionalLight),
    Point(PointLight),
    Spotlight(CutoffSpotlight),
}

impl Light {
    /// Stable variant tag, identical to the serialized discriminator.
    pub fn kind(&self) -> &'static str {
        match self {
            Light::Directional(_) => "Directional",
            Light::Point(_) => "Point",
            Light::Spotlight(_) => "Spotlight",
        }
    }

    fn source(&self) -> &dyn LightSource {
        match self {
            Light::Directional(light) => light,
            Light::Point(light) => light,
            Light::Spotlight(light) => light,
        }
    }
}

impl LightSource for Light {
    fn ray_to_light(&self, point: Point3) -> Ray {
        self.source().ray_to_light(point)
    }

    fn intensity(&self, point: Point3, ray_to_light: &Ray) -> Color {
        self.source().intensity(point, ray_to_light)
    }

    fn is_occluded_by(&self, surface: &Surface, ray_to_light: &Ray) -> bool {
        self.source().is_occluded_by(surface, ray_to_light)
    }
}

impl From<DirectionalLight> for Light {
    fn from(light: DirectionalLight) -> Self {
        Light::Directional(light)
    }
}

impl From<PointLight> for Light {
    fn from(light: PointLight) -> Self {
        Light::Point(light)
    }
}

impl From<CutoffSpotlight> for Light {
    fn from(light: CutoffSpotlight) -> Self {
        Light::Spotlight(light)
    }
}
