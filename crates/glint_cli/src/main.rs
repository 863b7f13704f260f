use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use glint_core::{scenes, Scene};
use glint_renderer::{render, LogProgress, RenderConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Render a scene with the Glint ray tracer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Built-in scene to render
    #[arg(short, long, default_value = "scene1", conflicts_with = "input")]
    scene: String,

    /// Scene description to load instead of a built-in scene
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long, default_value_t = 500)]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 500)]
    height: u32,

    /// Horizontal field of view in degrees
    #[arg(long, default_value_t = 90.0)]
    view_angle: f64,

    /// Seed for scenes with random materials
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Where to write the rendered image
    #[arg(short, long, default_value = "render.png")]
    output: PathBuf,

    /// Also write the scene description as JSON
    #[arg(long)]
    dump: Option<PathBuf>,

    /// List the built-in scenes and exit
    #[arg(long)]
    list: bool,
}

impl Args {
    fn render_config(&self) -> RenderConfig {
        RenderConfig::new(self.width, self.height, self.view_angle)
    }

    fn load_scene(&self) -> Result<Scene> {
        match &self.input {
            Some(path) => Scene::load(path).with_context(|| format!("Failed to load scene from {}", path.display())),
            None => scenes::preset(&self.scene, &mut StdRng::seed_from_u64(self.seed))
                .with_context(|| format!("Failed to build scene '{}'", self.scene)),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.list {
        for name in scenes::PRESET_NAMES {
            println!("{}", name);
        }
        return Ok(());
    }

    let scene = args.load_scene()?;
    log::info!("Rendering {}", scene);

    if let Some(path) = &args.dump {
        scene
            .save(path)
            .with_context(|| format!("Failed to write scene to {}", path.display()))?;
    }

    let start = Instant::now();
    let image = render(&scene, &args.render_config(), &LogProgress).context("Render failed")?;
    log::info!("Rendered {}x{} in {:.2?}", image.width, image.height, start.elapsed());

    image
        .save(&args.output)
        .with_context(|| format!("Failed to write image to {}", args.output.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["glint"]).unwrap();
        assert_eq!(args.scene, "scene1");
        assert_eq!(args.render_config(), RenderConfig::default());
        assert_eq!(args.output, PathBuf::from("render.png"));
        assert!(args.input.is_none());
        assert!(!args.list);
    }

    #[test]
    fn test_render_flags() {
        let args = Args::try_parse_from([
            "glint",
            "--scene",
            "scene3",
            "--width",
            "320",
            "--height",
            "200",
            "--view-angle",
            "60",
            "--seed",
            "7",
        ])
        .unwrap();

        assert_eq!(args.render_config(), RenderConfig::new(320, 200, 60.0));
        let scene = args.load_scene().unwrap();
        assert_eq!(scene.name(), "scene3");
    }

    #[test]
    fn test_scene_and_input_conflict() {
        let result = Args::try_parse_from(["glint", "--scene", "scene2", "--input", "room.json"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_preset_reports_name() {
        let args = Args::try_parse_from(["glint", "--scene", "attic"]).unwrap();
        let err = args.load_scene().unwrap_err();
        assert!(format!("{:#}", err).contains("attic"));
    }
}
