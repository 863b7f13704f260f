//! Built-in example scenes.
//!
//! Scenes that scatter random materials take the random generator from the
//! caller, so a fixed seed always reproduces the same image.

use glint_math::{Color, Point3, Vec3};
use rand::Rng;

use crate::error::{SceneError, SceneResult};
use crate::{CutoffSpotlight, DirectionalLight, Dome, Material, Plane, Scene, SceneBuilder, Sphere, Surface};

/// Names accepted by [`preset`].
pub const PRESET_NAMES: [&str; 5] = ["scene1", "scene2", "scene3", "scene4", "scene5"];

/// Build a preset scene by name.
pub fn preset<R: Rng + ?Sized>(name: &str, rng: &mut R) -> SceneResult<Scene> {
    match name {
        "scene1" => scene1(),
        "scene2" => scene2(rng),
        "scene3" => scene3(rng),
        "scene4" => scene4(rng),
        "scene5" => scene5(rng),
        _ => Err(SceneError::UnknownPreset(name.to_string())),
    }
}

/// A single red sphere under a directional light.
pub fn scene1() -> SceneResult<Scene> {
    let material = Material::default()
        .with_coefficients(Color::new(0.8, 0.05, 0.05), Color::ZERO, Color::splat(0.9))
        .with_shininess(10);

    Scene::builder()
        .with_name("scene1")
        .with_ambient(Color::ONE)
        .with_camera(Point3::new(4.0, 4.0, 1.5), Vec3::new(-1.0, -1.0, -0.3), Vec3::Z, 3.0)
        .add_light(DirectionalLight::new(Vec3::new(-1.0, -1.0, -1.0), Color::splat(0.9)))
        .add_surface(Surface::new(Sphere::new(Point3::ZERO, 1.0), material))
        .with_anti_aliasing_factor(1)
        .with_refractions(true)
        .with_reflections(true)
        .with_max_recursion_level(3)
        .build()
}

/// Camera, metal floor and triangle of spheres shared by scenes 2 and 3.
fn pool_table<R: Rng + ?Sized>(name: &str, rng: &mut R) -> SceneBuilder {
    let mut builder = Scene::builder()
        .with_name(name)
        .with_ambient(Color::ONE)
        .with_camera(Point3::new(0.0, 2.0, 6.0), Vec3::new(0.0, -0.1, -1.0), Vec3::Y, 2.0)
        .with_anti_aliasing_factor(1)
        .with_refractions(true)
        .with_reflections(true)
        .with_max_recursion_level(6)
        .add_surface(Surface::new(
            Plane::new(Vec3::Y, Point3::new(0.0, -1.0, 0.0)),
            Material::metal(),
        ));

    // Rows of spheres racked like a pool game
    for depth in 0..4 {
        for width in -depth..=depth {
            let center = Point3::new(width as f64, 0.0, -(depth as f64));
            builder = builder.add_surface(Surface::new(Sphere::new(center, 0.5), Material::random(rng)));
        }
    }

    builder
}

/// Racked spheres on a mirror floor, lit by a directional light.
pub fn scene2<R: Rng + ?Sized>(rng: &mut R) -> SceneResult<Scene> {
    pool_table("scene2", rng)
        .with_ambient(Color::splat(0.4))
        .add_light(DirectionalLight::new(Vec3::new(0.5, -0.5, 0.0), Color::splat(0.7)))
        .build()
}

/// Racked spheres under three colored spotlights.
pub fn scene3<R: Rng + ?Sized>(rng: &mut R) -> SceneResult<Scene> {
    pool_table("scene3", rng)
        .add_light(CutoffSpotlight::new(
            Point3::new(4.0, 4.0, -3.0),
            -Vec3::Y,
            45.0,
            Color::new(1.0, 0.6, 0.6),
        ))
        .add_light(CutoffSpotlight::new(
            Point3::new(-4.0, 4.0, -3.0),
            -Vec3::Y,
            30.0,
            Color::new(0.6, 1.0, 0.6),
        ))
        .add_light(CutoffSpotlight::new(
            Point3::new(0.0, 4.0, 0.0),
            -Vec3::Y,
            30.0,
            Color::new(0.6, 0.6, 1.0),
        ))
        .add_light(DirectionalLight::new(Vec3::new(0.5, -0.5, 0.0), Color::splat(0.2)))
        .build()
}

/// Two domes facing apart, like a sphere split in half.
pub fn scene4<R: Rng + ?Sized>(rng: &mut R) -> SceneResult<Scene> {
    let material = Material::random(rng);

    Scene::builder()
        .with_name("scene4")
        .with_ambient(Color::ONE)
        .with_camera(Point3::new(0.0, 2.0, 6.0), Vec3::new(0.0, -0.1, -1.0), Vec3::Y, 2.0)
        .with_anti_aliasing_factor(1)
        .with_refractions(true)
        .with_reflections(true)
        .with_max_recursion_level(6)
        .add_surface(Surface::new(Dome::new(Point3::new(2.0, 0.0, -10.0), 5.0, Vec3::X), material))
        .add_surface(Surface::new(Dome::new(Point3::new(-2.0, 0.0, -10.0), 5.0, -Vec3::X), material))
        .add_light(CutoffSpotlight::new(
            Point3::new(0.0, 6.0, -10.0),
            -Vec3::Y,
            75.0,
            Color::splat(0.5),
        ))
        .build()
}

/// A field of random spheres between a metal floor and a tilted glass plane.
pub fn scene5<R: Rng + ?Sized>(rng: &mut R) -> SceneResult<Scene> {
    let background = Color::new(rng.gen(), rng.gen(), rng.gen());

    let mut builder = Scene::builder()
        .with_name("scene5")
        .with_camera(Point3::new(4.0, 2.0, 6.0), Vec3::new(0.0, -0.4, -1.0), Vec3::Y, 15.0)
        .with_anti_aliasing_factor(1)
        .with_ambient(Color::splat(0.5))
        .with_refractions(false)
        .with_reflections(true)
        .with_max_recursion_level(9)
        .with_background(background)
        .add_surface(Surface::new(
            Plane::new(Vec3::Y, Point3::new(0.0, -1.0, 0.0)),
            Material::metal(),
        ))
        .add_surface(Surface::new(
            Plane::new(Vec3::new(4.0, 20.0, 0.0), Point3::new(0.0, -2.0, 10.0)),
            Material::glass(false),
        ));

    for _ in 0..35 {
        let center = Point3::new(rng.gen_range(0..=5) as f64, 0.0, rng.gen_range(0..=5) as f64);
        let radius = rng.gen_range(0.1..0.8);
        builder = builder.add_surface(Surface::new(Sphere::new(center, radius), Material::random(rng)));
    }

    builder
        .add_light(DirectionalLight::new(Vec3::new(0.5, -0.5, 0.0), Color::splat(0.7)))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_all_presets_build() {
        let mut rng = StdRng::seed_from_u64(1);
        for name in PRESET_NAMES {
            let scene = preset(name, &mut rng).unwrap();
            assert_eq!(scene.name(), name);
            assert!(scene.camera().is_some());
            assert!(!scene.surfaces().is_empty());
            assert!(!scene.lights().is_empty());
        }
    }

    #[test]
    fn test_unknown_preset() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = preset("scene9", &mut rng).unwrap_err();
        assert!(matches!(err, SceneError::UnknownPreset(name) if name == "scene9"));
    }

    #[test]
    fn test_pool_table_layout() {
        let scene = scene2(&mut StdRng::seed_from_u64(3)).unwrap();
        // Floor plus 1 + 3 + 5 + 7 spheres
        assert_eq!(scene.surfaces().len(), 17);
        assert_eq!(scene.ambient(), Color::splat(0.4));
        assert_eq!(scene.max_recursion_level(), 6);
    }

    #[test]
    fn test_seed_reproduces_scene() {
        let a = scene5(&mut StdRng::seed_from_u64(9)).unwrap();
        let b = scene5(&mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.surfaces().len(), 37);
    }
}
