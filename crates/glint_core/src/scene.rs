//! Scene description consumed by the renderer.
//!
//! A [`Scene`] is assembled once through [`SceneBuilder`] (or loaded from
//! JSON) and is read-only afterwards, so render workers can share it freely.

use std::fmt;
use std::fs;
use std::path::Path;

use glint_math::{Color, Point3, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::{SceneError, SceneResult};
use crate::{Light, PinholeCamera, Surface};

/// Camera, lights, surfaces and render parameters of a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scene {
    name: String,
    camera: Option<PinholeCamera>,
    ambient: Color,
    background_color: Color,
    lights: Vec<Light>,
    surfaces: Vec<Surface>,
    max_recursion_level: u32,
    anti_aliasing_factor: u32,
    render_reflections: bool,
    render_refractions: bool,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            name: "scene".to_string(),
            camera: None,
            ambient: Color::ONE,
            background_color: Color::new(0.0, 0.5, 1.0), // blue sky
            lights: Vec::new(),
            surfaces: Vec::new(),
            max_recursion_level: 1,
            anti_aliasing_factor: 1,
            render_reflections: false,
            render_refractions: false,
        }
    }
}

impl Scene {
    /// Start building a scene from the defaults.
    pub fn builder() -> SceneBuilder {
        SceneBuilder::default()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn camera(&self) -> Option<&PinholeCamera> {
        self.camera.as_ref()
    }

    pub fn ambient(&self) -> Color {
        self.ambient
    }

    pub fn background_color(&self) -> Color {
        self.background_color
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn surfaces(&self) -> &[Surface] {
        &self.surfaces
    }

    pub fn max_recursion_level(&self) -> u32 {
        self.max_recursion_level
    }

    pub fn anti_aliasing_factor(&self) -> u32 {
        self.anti_aliasing_factor
    }

    pub fn render_reflections(&self) -> bool {
        self.render_reflections
    }

    pub fn render_refractions(&self) -> bool {
        self.render_refractions
    }

    /// Check the render parameters and every surface.
    pub fn validate(&self) -> SceneResult<()> {
        if self.max_recursion_level < 1 {
            return Err(SceneError::InvalidRecursionLevel(self.max_recursion_level));
        }
        if self.anti_aliasing_factor < 1 {
            return Err(SceneError::InvalidAntiAliasingFactor(self.anti_aliasing_factor));
        }
        for (index, surface) in self.surfaces.iter().enumerate() {
            surface
                .validate()
                .map_err(|reason| SceneError::InvalidSurface { index, reason })?;
        }
        Ok(())
    }

    /// Parse and validate a scene from JSON.
    pub fn from_json(json: &str) -> SceneResult<Self> {
        let scene: Scene = serde_json::from_str(json)?;
        scene.validate()?;
        Ok(scene)
    }

    /// Serialize the scene to pretty-printed JSON.
    pub fn to_json(&self) -> SceneResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a scene from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> SceneResult<Self> {
        let path = path.as_ref();
        let scene = Self::from_json(&fs::read_to_string(path)?)?;
        log::info!(
            "Loaded scene '{}' from {}: {} surfaces, {} lights",
            scene.name,
            path.display(),
            scene.surfaces.len(),
            scene.lights.len()
        );
        Ok(scene)
    }

    /// Write the scene to a JSON file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> SceneResult<()> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?)?;
        log::info!("Saved scene '{}' to {}", self.name, path.display());
        Ok(())
    }
}

impl fmt::Display for Scene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} surfaces, {} lights, recursion {}, anti-aliasing {}x",
            self.name,
            self.surfaces.len(),
            self.lights.len(),
            self.max_recursion_level,
            self.anti_aliasing_factor
        )
    }
}

/// Builder for [`Scene`].
///
/// Every setter consumes and returns the builder; [`SceneBuilder::build`]
/// validates the parameters and freezes the scene.
#[derive(Debug, Clone, Default)]
pub struct SceneBuilder {
    scene: Scene,
}

impl SceneBuilder {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.scene.name = name.into();
        self
    }

    /// Place a pinhole camera.
    pub fn with_camera(mut self, position: Point3, towards: Vec3, up: Vec3, distance_to_plane: f64) -> Self {
        self.scene.camera = Some(PinholeCamera::new(position, towards, up, distance_to_plane));
        self
    }

    pub fn with_ambient(mut self, ambient: Color) -> Self {
        self.scene.ambient = ambient;
        self
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.scene.background_color = color;
        self
    }

    pub fn with_max_recursion_level(mut self, level: u32) -> Self {
        self.scene.max_recursion_level = level;
        self
    }

    /// Sub-samples per pixel axis.
    pub fn with_anti_aliasing_factor(mut self, factor: u32) -> Self {
        self.scene.anti_aliasing_factor = factor;
        self
    }

    pub fn with_reflections(mut self, enabled: bool) -> Self {
        self.scene.render_reflections = enabled;
        self
    }

    pub fn with_refractions(mut self, enabled: bool) -> Self {
        self.scene.render_refractions = enabled;
        self
    }

    pub fn add_light(mut self, light: impl Into<Light>) -> Self {
        self.scene.lights.push(light.into());
        self
    }

    pub fn add_surface(mut self, surface: Surface) -> Self {
        self.scene.surfaces.push(surface);
        self
    }

    /// Validate and freeze the scene.
    pub fn build(self) -> SceneResult<Scene> {
        self.scene.validate()?;
        Ok(self.scene)
    }
}
