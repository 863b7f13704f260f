//! Point light restricted to a cone.

use glint_math::{Color, Point3, Ray, Vec3, EPSILON};
use serde::{Deserialize, Serialize};

use crate::light::{LightSource, PointLight};
use crate::Surface;

/// A point light that only shines inside a cone around `direction`.
///
/// Inside the cone the inherited point-light intensity is scaled by
/// `cos(gamma)`, the cosine between the light's facing direction and the
/// direction from the light to the lit point. Outside the half-angle
/// `cutoff_angle` (degrees) the light contributes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CutoffSpotlight {
    light: PointLight,
    direction: Vec3,
    cutoff_angle: f64,
}

impl Default for CutoffSpotlight {
    fn default() -> Self {
        Self {
            light: PointLight::default(),
            direction: -Vec3::Y,
            cutoff_angle: 45.0,
        }
    }
}

impl CutoffSpotlight {
    pub fn new(position: Point3, direction: Vec3, cutoff_angle: f64, intensity: Color) -> Self {
        Self {
            light: PointLight::new(position, intensity),
            direction: direction.normalize_or_zero(),
            cutoff_angle,
        }
    }

    /// Set the quadratic, linear and constant decay factors.
    pub fn with_decay(mut self, kq: f64, kl: f64, kc: f64) -> Self {
        self.light = self.light.with_decay(kq, kl, kc);
        self
    }

    pub fn position(&self) -> Point3 {
        self.light.position()
    }

    pub fn cutoff_angle(&self) -> f64 {
        self.cutoff_angle
    }

    /// Cosine of the angle between the light's facing direction and the
    /// path from the light to the origin of `ray_to_light`.
    pub fn cos_gamma(&self, ray_to_light: &Ray) -> f64 {
        let facing = -self.direction.normalize_or_zero();
        ray_to_light.direction().dot(facing).clamp(-1.0, 1.0)
    }
}

impl LightSource for CutoffSpotlight {
    fn ray_to_light(&self, point: Point3) -> Ray {
        self.light.ray_to_light(point)
    }

    fn intensity(&self, point: Point3, ray_to_light: &Ray) -> Color {
        let cos_gamma = self.cos_gamma(ray_to_light);
        if cos_gamma < EPSILON || cos_gamma <= self.cutoff_angle.to_radians().cos() + EPSILON {
            return Color::ZERO;
        }

        self.light.intensity(point, ray_to_light) * cos_gamma
    }

    fn is_occluded_by(&self, surface: &Surface, ray_to_light: &Ray) -> bool {
        // Points behind the light plane are never lit
        self.cos_gamma(ray_to_light) < EPSILON || self.light.is_occluded_by(surface, ray_to_light)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Material, Sphere};

    fn spotlight() -> CutoffSpotlight {
        CutoffSpotlight::new(Point3::new(0.0, 4.0, 0.0), -Vec3::Y, 30.0, Color::ONE)
    }

    /// Point on the ground at `angle` degrees off the spotlight axis.
    fn ground_point(angle: f64) -> Point3 {
        Point3::new(4.0 * angle.to_radians().tan(), 0.0, 0.0)
    }

    #[test]
    fn test_full_intensity_on_axis() {
        let light = spotlight();
        let p = Point3::ZERO;
        let ray = light.ray_to_light(p);

        assert_eq!(light.cos_gamma(&ray), 1.0);
        let i = light.intensity(p, &ray);
        assert!(i.min_element() > 0.0);

        // Equal to the bare point light on axis
        let bare = PointLight::new(Point3::new(0.0, 4.0, 0.0), Color::ONE);
        assert!(i.abs_diff_eq(bare.intensity(p, &ray), 1e-12));
    }

    #[test]
    fn test_zero_at_and_beyond_cutoff() {
        let light = spotlight();
        for angle in [30.001, 31.0, 45.0, 80.0] {
            let p = ground_point(angle);
            let ray = light.ray_to_light(p);
            assert_eq!(light.intensity(p, &ray), Color::ZERO, "angle {angle}");
        }
    }

    #[test]
    fn test_zero_exactly_on_cutoff_cone() {
        for cutoff in [10.0, 30.0, 45.0, 60.0] {
            let light = CutoffSpotlight::new(Point3::new(0.0, 4.0, 0.0), -Vec3::Y, cutoff, Color::ONE);
            let p = ground_point(cutoff);
            let ray = light.ray_to_light(p);
            assert_eq!(light.intensity(p, &ray), Color::ZERO, "cutoff {cutoff}");
        }
    }

    #[test]
    fn test_falloff_inside_cone() {
        let light = spotlight();
        let near_axis = ground_point(5.0);
        let near_edge = ground_point(28.0);

        let a = light.intensity(near_axis, &light.ray_to_light(near_axis));
        let b = light.intensity(near_edge, &light.ray_to_light(near_edge));
        assert!(b.x > 0.0);
        assert!(a.x > b.x);
    }

    #[test]
    fn test_behind_light_is_dark_and_occluded() {
        let light = spotlight();
        let p = Point3::new(0.0, 8.0, 0.0);
        let ray = light.ray_to_light(p);
        let far_away = Surface::new(Sphere::new(Point3::new(100.0, 0.0, 0.0), 1.0), Material::default());

        assert_eq!(light.intensity(p, &ray), Color::ZERO);
        assert!(light.is_occluded_by(&far_away, &ray));
    }

    #[test]
    fn test_surface_between_point_and_light() {
        let light = spotlight();
        let ray = light.ray_to_light(Point3::ZERO);
        let blocker = Surface::new(Sphere::new(Point3::new(0.0, 2.0, 0.0), 0.5), Material::default());
        assert!(light.is_occluded_by(&blocker, &ray));
    }
}
