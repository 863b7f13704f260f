//! Example: Load and inspect a scene, either a preset or a JSON file.
//!
//! Run with: cargo run --example inspect_scene -- scene3
//!       or: cargo run --example inspect_scene -- my_scene.json

use std::env;

use glint_core::{scenes, Hittable, Scene};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        println!("Usage: inspect_scene <preset-name | path-to-json>");
        println!("\nPresets: {}", scenes::PRESET_NAMES.join(", "));
        return;
    }

    let source = &args[1];
    let result = if source.ends_with(".json") {
        Scene::load(source)
    } else {
        scenes::preset(source, &mut StdRng::seed_from_u64(0))
    };

    match result {
        Ok(scene) => {
            println!("\n=== Scene: {} ===", scene);

            if let Some(camera) = scene.camera() {
                let p = camera.position();
                let t = camera.towards();
                println!(
                    "Camera at ({:.2}, {:.2}, {:.2}) looking ({:.2}, {:.2}, {:.2})",
                    p.x, p.y, p.z, t.x, t.y, t.z
                );
            }

            println!("\n--- Surfaces ---");
            for (i, surface) in scene.surfaces().iter().enumerate() {
                let m = surface.material();
                println!(
                    "  [{}] {} - shininess {}, reflection {:.2}, transparent {}",
                    i,
                    surface.shape().kind(),
                    m.shininess,
                    m.reflection_intensity,
                    m.is_transparent
                );
            }

            println!("\n--- Lights ---");
            for (i, light) in scene.lights().iter().enumerate() {
                println!("  [{}] {}", i, light.kind());
            }

            // Quick sanity probe straight down the camera axis
            if let Some(camera) = scene.camera() {
                let ray = glint_math::Ray::new(camera.position(), camera.towards());
                let nearest = scene
                    .surfaces()
                    .iter()
                    .filter_map(|s| s.shape().intersect(&ray).map(|hit| (hit.t, s.shape().kind())))
                    .min_by(|a, b| a.0.total_cmp(&b.0));
                match nearest {
                    Some((t, kind)) => println!("\nCamera axis hits a {} at t = {:.3}", kind, t),
                    None => println!("\nCamera axis hits nothing"),
                }
            }
        }
        Err(e) => {
            eprintln!("Error loading scene: {}", e);
        }
    }
}
