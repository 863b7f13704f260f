//! Glint Core - scene model for the Glint ray tracer.
//!
//! This crate provides:
//!
//! - **Shapes**: `Sphere`, `Plane`, `Dome`, unified by the `Shape` enum and
//!   the `Hittable` trait
//! - **Lights**: directional, point and cutoff spotlight, unified by the
//!   `Light` enum and the `LightSource` trait
//! - **Scene**: camera, surfaces, lights and render parameters, with JSON
//!   serialization and a handful of preset scenes
//!
//! # Example
//!
//! ```ignore
//! use glint_core::{Scene, Surface, Sphere, Material, DirectionalLight};
//!
//! let scene = Scene::builder()
//!     .with_camera(Point3::new(0.0, 0.0, 5.0), -Vec3::Z, Vec3::Y, 1.0)
//!     .add_surface(Surface::new(Sphere::new(Point3::ZERO, 1.0), Material::default()))
//!     .add_light(DirectionalLight::new(-Vec3::Y, Color::ONE))
//!     .build()?;
//! println!("{}", scene.to_json()?);
//! ```

mod camera;
mod dome;
pub mod error;
mod hittable;
mod light;
mod material;
mod plane;
pub mod scene;
pub mod scenes;
mod shape;
mod sphere;
mod spotlight;
mod surface;

// Re-export commonly used types
pub use camera::PinholeCamera;
pub use dome::Dome;
pub use error::{SceneError, SceneResult};
pub use hittable::{Hit, Hittable, ShapeHit};
pub use light::{DirectionalLight, Light, LightSource, PointLight};
pub use material::Material;
pub use plane::Plane;
pub use scene::{Scene, SceneBuilder};
pub use shape::Shape;
pub use sphere::Sphere;
pub use spotlight::CutoffSpotlight;
pub use surface::Surface;
