//! Parallel render scheduler.
//!
//! Every call to [`render`] builds its own rayon pool, shades one task per
//! pixel against the frozen scene and assembles the results in row-major
//! order. The pool is dropped before `render` returns.

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::thread;
use std::time::Instant;

use glint_core::Scene;
use glint_math::{Color, Interval};
use rayon::prelude::*;

use crate::error::{RenderError, RenderResult};
use crate::progress::RenderLog;
use crate::tracer::Tracer;

/// Render configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Horizontal field of view in degrees
    pub view_angle: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 500,
            height: 500,
            view_angle: 90.0,
        }
    }
}

impl RenderConfig {
    pub fn new(width: u32, height: u32, view_angle: f64) -> Self {
        Self {
            width,
            height,
            view_angle,
        }
    }

    /// Reject configurations that cannot produce an image.
    pub fn validate(&self) -> RenderResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(RenderError::InvalidResolution {
                width: self.width,
                height: self.height,
            });
        }
        if !(self.view_angle > 0.0 && self.view_angle < 180.0) {
            return Err(RenderError::InvalidViewAngle(self.view_angle));
        }
        Ok(())
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Convert a linear color to 8-bit RGB, clamping each channel to [0, 1].
pub fn color_to_rgb(color: Color) -> [u8; 3] {
    let channel = |c: f64| (255.0 * Interval::UNIT.clamp(c)) as u8;
    [channel(color.x), channel(color.y), channel(color.z)]
}

/// Rendered 8-bit RGB image, stored row by row from the top-left pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<[u8; 3]>,
}

impl ImageBuffer {
    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> [u8; 3] {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Copy into an `image` crate buffer for encoding.
    pub fn to_image(&self) -> image::RgbImage {
        image::RgbImage::from_fn(self.width, self.height, |x, y| image::Rgb(self.get(x, y)))
    }

    /// Encode the image; the format follows the file extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> RenderResult<()> {
        let path = path.as_ref();
        self.to_image().save(path)?;
        log::info!("Saved {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }
}

/// Number of workers for a render pool.
fn worker_count() -> usize {
    let available = thread::available_parallelism().map(|n| n.get()).unwrap_or(1);
    available.max(2)
}

/// Describe a panic payload.
fn panic_reason(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "pixel task panicked".to_string()
    }
}

/// Shade one pixel, turning panics and non-finite colors into errors.
fn shade_pixel(tracer: &Tracer<'_>, camera: &glint_core::PinholeCamera, x: u32, y: u32) -> RenderResult<[u8; 3]> {
    let color = panic::catch_unwind(AssertUnwindSafe(|| tracer.render_pixel(camera, x, y)))
        .map_err(|payload| RenderError::Pixel {
            x,
            y,
            reason: panic_reason(payload),
        })?;

    if !color.is_finite() {
        return Err(RenderError::Pixel {
            x,
            y,
            reason: format!("non-finite color {}", color),
        });
    }

    Ok(color_to_rgb(color))
}

/// Render `scene` at the configured resolution.
///
/// Blocks until every pixel has been shaded. If any pixel fails, the first
/// failure in row-major order is returned once all tasks have finished and
/// no image is produced.
pub fn render(scene: &Scene, config: &RenderConfig, log: &dyn RenderLog) -> RenderResult<ImageBuffer> {
    config.validate()?;

    let mut camera = *scene.camera().ok_or(RenderError::MissingCamera)?;
    camera.init_resolution(config.height, config.width, config.view_angle);

    let threads = worker_count();
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("glint-render-{}", i))
        .build()?;
    log.log(&format!("Initialized render pool with {} threads", threads));

    let factor = scene.anti_aliasing_factor().max(1) as usize;
    let rays = config.pixel_count() * factor * factor;
    log.log(&format!(
        "Shooting {} rays ({}x{} pixels, {}x{} samples each)",
        rays, config.width, config.height, factor, factor
    ));

    let start = Instant::now();
    let tracer = Tracer::new(scene);
    let width = config.width as usize;

    let results: Vec<RenderResult<[u8; 3]>> = pool.install(|| {
        (0..config.pixel_count())
            .into_par_iter()
            .map(|index| {
                let x = (index % width) as u32;
                let y = (index / width) as u32;
                shade_pixel(&tracer, &camera, x, y)
            })
            .collect()
    });
    drop(pool);

    let pixels = results.into_iter().collect::<RenderResult<Vec<_>>>()?;
    log.log(&format!("Render finished in {:.2?}", start.elapsed()));

    Ok(ImageBuffer {
        width: config.width,
        height: config.height,
        pixels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use glint_core::{DirectionalLight, Material, PointLight, Sphere, Surface};
    use glint_math::{Point3, Vec3};
    use std::cell::RefCell;

    fn red_sphere_scene() -> Scene {
        let red = Material::default().with_coefficients(
            Color::new(0.8, 0.05, 0.05),
            Color::new(0.7, 0.1, 0.1),
            Color::splat(0.5),
        );

        Scene::builder()
            .with_camera(Point3::new(0.0, 0.0, 5.0), -Vec3::Z, Vec3::Y, 1.0)
            .add_surface(Surface::new(Sphere::new(Point3::ZERO, 1.0), red))
            .add_light(DirectionalLight::new(Vec3::new(-1.0, -1.0, -1.0), Color::ONE))
            .build()
            .unwrap()
    }

    fn quiet(_: &str) {}

    #[test]
    fn test_color_to_rgb_clamps() {
        assert_eq!(color_to_rgb(Color::new(0.0, 0.5, 1.0)), [0, 127, 255]);
        assert_eq!(color_to_rgb(Color::new(-2.0, 7.0, 0.2)), [0, 255, 51]);
    }

    #[test]
    fn test_render_sphere() {
        let scene = red_sphere_scene();
        let image = render(&scene, &RenderConfig::new(50, 50, 60.0), &quiet).unwrap();

        assert_eq!(image.pixels.len(), 2500);

        let background = color_to_rgb(scene.background_color());
        assert_eq!(background, [0, 127, 255]);
        for (x, y) in [(0, 0), (49, 0), (0, 49), (49, 49)] {
            assert_eq!(image.get(x, y), background);
        }

        let center = image.get(25, 25);
        assert_ne!(center, background);
        assert!(center[0] > center[1] && center[0] > center[2]);

        // The unit sphere five units away covers pixels closer than ~8.84
        // pixel widths to the center at this field of view
        let is_sphere = |x: u32, y: u32| image.get(x, y) != background;
        for y in 0..50 {
            for x in 0..50 {
                let r = ((x as f64 - 25.0).powi(2) + (y as f64 - 25.0).powi(2)).sqrt();
                if r <= 8.5 {
                    assert!(is_sphere(x, y), "({x}, {y}) inside the disk");
                } else if r >= 9.2 {
                    assert!(!is_sphere(x, y), "({x}, {y}) outside the disk");
                }
            }
        }

        // Coverage is mirror-symmetric about the center pixel
        for y in 1..50 {
            for x in 1..50 {
                assert_eq!(is_sphere(x, y), is_sphere(50 - x, y), "({x}, {y}) left/right");
                assert_eq!(is_sphere(x, y), is_sphere(x, 50 - y), "({x}, {y}) up/down");
            }
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let scene = red_sphere_scene();
        let config = RenderConfig::new(20, 12, 75.0);

        let a = render(&scene, &config, &quiet).unwrap();
        let b = render(&scene, &config, &quiet).unwrap();
        assert_eq!(a, b);
        assert_eq!((a.width, a.height), (20, 12));
    }

    #[test]
    fn test_image_conversion() {
        let image = render(&red_sphere_scene(), &RenderConfig::new(8, 6, 60.0), &quiet).unwrap();
        let rgb = image.to_image();

        assert_eq!(rgb.dimensions(), (8, 6));
        assert_eq!(rgb.get_pixel(7, 5).0, image.get(7, 5));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let scene = red_sphere_scene();

        let err = render(&scene, &RenderConfig::new(0, 10, 60.0), &quiet).unwrap_err();
        assert!(matches!(err, RenderError::InvalidResolution { width: 0, height: 10 }));

        for angle in [0.0, -5.0, 180.0, f64::NAN] {
            let err = render(&scene, &RenderConfig::new(10, 10, angle), &quiet).unwrap_err();
            assert!(matches!(err, RenderError::InvalidViewAngle(_)));
        }
    }

    #[test]
    fn test_missing_camera() {
        let scene = Scene::builder().build().unwrap();
        let err = render(&scene, &RenderConfig::default(), &quiet).unwrap_err();
        assert!(matches!(err, RenderError::MissingCamera));
    }

    #[test]
    fn test_non_finite_pixel_fails_render() {
        // No decay at all divides the light's intensity by zero
        let scene = Scene::builder()
            .with_camera(Point3::new(0.0, 0.0, 5.0), -Vec3::Z, Vec3::Y, 1.0)
            .add_surface(Surface::new(Sphere::new(Point3::ZERO, 1.0), Material::default()))
            .add_light(PointLight::new(Point3::new(0.0, 0.0, 5.0), Color::ONE).with_decay(0.0, 0.0, 0.0))
            .build()
            .unwrap();

        let err = render(&scene, &RenderConfig::new(10, 10, 60.0), &quiet).unwrap_err();
        assert!(matches!(err, RenderError::Pixel { .. }));
    }

    #[test]
    fn test_progress_messages() {
        let messages = RefCell::new(Vec::new());
        let sink = |message: &str| messages.borrow_mut().push(message.to_string());

        render(&red_sphere_scene(), &RenderConfig::new(4, 4, 60.0), &sink).unwrap();

        let messages = messages.into_inner();
        assert_eq!(messages.len(), 3);
        assert!(messages[0].starts_with("Initialized render pool with"));
        assert!(messages[1].starts_with("Shooting 16 rays"));
        assert!(messages[2].starts_with("Render finished"));
    }
}
