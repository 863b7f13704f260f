//! Recursive Whitted-style shading.
//!
//! For every ray the tracer finds the nearest surface, adds the ambient
//! term, adds a shadow-tested diffuse + specular term per light, and then
//! recurses into mirror-reflected and refracted rays until the scene's
//! recursion limit is reached.

use glint_core::{Hit, Light, LightSource, PinholeCamera, Scene};
use glint_math::{reflect, refract, Color, Point3, Ray};

/// Shading algorithm over a frozen scene.
///
/// Borrowing the scene immutably is what lets every render worker share
/// one tracer.
#[derive(Debug, Clone, Copy)]
pub struct Tracer<'a> {
    scene: &'a Scene,
}

impl<'a> Tracer<'a> {
    pub fn new(scene: &'a Scene) -> Self {
        Self { scene }
    }

    /// Compute the color seen along `ray` at recursion depth `depth`.
    ///
    /// The result is linear and unclamped.
    pub fn shade(&self, ray: &Ray, depth: u32) -> Color {
        if depth >= self.scene.max_recursion_level() {
            return Color::ZERO;
        }

        let Some(hit) = self.find_nearest_hit(ray) else {
            return self.scene.background_color();
        };

        let point = hit.point(ray);
        let material = hit.surface.material();

        let mut color = material.ka * self.scene.ambient();
        for light in self.scene.lights() {
            color += self.light_contribution(ray, &hit, point, light);
        }

        if self.scene.render_reflections() && material.reflection_intensity > 0.0 {
            let reflected = Ray::new(point, reflect(ray.direction(), hit.normal));
            color += self.shade(&reflected, depth + 1) * material.reflection_intensity;
        }

        if self.scene.render_refractions() && material.is_transparent && material.refraction_intensity > 0.0 {
            let refracted = Ray::new(point, Self::refracted_direction(ray, &hit));
            color += self.shade(&refracted, depth + 1) * material.refraction_intensity;
        }

        color
    }

    /// Nearest hit across all surfaces, by linear scan.
    pub fn find_nearest_hit(&self, ray: &Ray) -> Option<Hit<'a>> {
        self.scene
            .surfaces()
            .iter()
            .filter_map(|surface| surface.intersect(ray))
            .min_by(|a, b| a.t.total_cmp(&b.t))
    }

    /// Whether any surface blocks `ray_to_light` from reaching `light`.
    pub fn is_occluded(&self, light: &Light, ray_to_light: &Ray) -> bool {
        self.scene
            .surfaces()
            .iter()
            .any(|surface| light.is_occluded_by(surface, ray_to_light))
    }

    /// Diffuse and specular light reaching the viewer from one light.
    ///
    /// Negative cosines clamp to zero before the light intensity is applied,
    /// so surfaces facing away from a light receive nothing from it.
    pub fn light_contribution(&self, ray: &Ray, hit: &Hit<'_>, point: Point3, light: &Light) -> Color {
        let ray_to_light = light.ray_to_light(point);
        if self.is_occluded(light, &ray_to_light) {
            return Color::ZERO;
        }

        let material = hit.surface.material();
        let l = ray_to_light.direction();
        let intensity = light.intensity(point, &ray_to_light);

        let diffuse = material.kd * hit.normal.dot(l).max(0.0);

        let highlight = reflect(-l, hit.normal).dot(-ray.direction()).max(0.0);
        let exponent = i32::try_from(material.shininess).unwrap_or(i32::MAX);
        let specular = material.ks * highlight.powi(exponent);

        (diffuse + specular) * intensity
    }

    /// Direction of the refracted ray, falling back to the mirror direction
    /// on total internal reflection.
    fn refracted_direction(ray: &Ray, hit: &Hit<'_>) -> glint_math::Vec3 {
        let index = hit.surface.material().refraction_index;
        let eta = if hit.is_inside { index } else { 1.0 / index };

        refract(ray.direction(), hit.normal, eta).unwrap_or_else(|| reflect(ray.direction(), hit.normal))
    }

    /// Average color of a pixel over its `factor` x `factor` sub-samples.
    ///
    /// `camera` must already have its resolution initialized.
    pub fn render_pixel(&self, camera: &PinholeCamera, x: u32, y: u32) -> Color {
        let factor = self.scene.anti_aliasing_factor().max(1);
        let origin = camera.position();

        let mut pixel_color = Color::ZERO;
        for sub_y in 0..factor {
            for sub_x in 0..factor {
                let target = camera.transform_subpixel(x, y, sub_x, sub_y, factor);
                pixel_color += self.shade(&Ray::through(origin, target), 0);
            }
        }

        pixel_color / (factor * factor) as f64
    }
}
