//! Simple ray tracer example.
//!
//! Renders one of the preset scenes and saves it as a PNG.
//!
//! Run with: cargo run --release --example simple_render -- scene3 scene3.png

use std::env;

use glint_core::scenes;
use glint_renderer::{render, LogProgress, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    let name = args.get(1).map(String::as_str).unwrap_or("scene2");
    let filename = args.get(2).map(String::as_str).unwrap_or("output.png");

    println!("Glint Ray Tracer - Simple Example");
    println!("=================================");

    let start = std::time::Instant::now();
    let scene = match scenes::preset(name, &mut StdRng::seed_from_u64(42)) {
        Ok(scene) => scene,
        Err(e) => {
            eprintln!("Failed to build scene: {}", e);
            return;
        }
    };
    println!("Scene {} built in {:?}", scene, start.elapsed());

    let config = RenderConfig::new(800, 450, 60.0);
    println!("Rendering {}x{}...", config.width, config.height);

    let start = std::time::Instant::now();
    let image = match render(&scene, &config, &LogProgress) {
        Ok(image) => image,
        Err(e) => {
            eprintln!("Render failed: {}", e);
            return;
        }
    };
    println!("Rendered in {:?}", start.elapsed());

    match image.save(filename) {
        Ok(()) => println!("Saved to {}", filename),
        Err(e) => eprintln!("Failed to save image: {}", e),
    }
}
