//! Glint Renderer - recursive Whitted-style ray tracing on the CPU.
//!
//! The [`Tracer`] shades single rays against a frozen [`glint_core::Scene`]
//! with ambient, diffuse, specular, shadow, reflection and refraction
//! terms. [`render`] fans one task per pixel out over a rayon pool and
//! assembles an 8-bit [`ImageBuffer`].

pub mod error;
mod progress;
mod renderer;
mod tracer;

pub use error::{RenderError, RenderResult};
pub use progress::{LogProgress, RenderLog};
pub use renderer::{color_to_rgb, render, ImageBuffer, RenderConfig};
pub use tracer::Tracer;

/// Re-export common math types from glint_math
pub use glint_math::{Color, Interval, Point3, Ray, Vec3};
