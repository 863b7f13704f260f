//! A shape bound to its material: the unit of intersection testing.

use glint_math::Ray;
use serde::{Deserialize, Serialize};

use crate::hittable::{Hit, Hittable};
use crate::{Material, Shape};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    shape: Shape,
    material: Material,
}

impl Surface {
    pub fn new(shape: impl Into<Shape>, material: Material) -> Self {
        Self {
            shape: shape.into(),
            material,
        }
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    /// Check both the shape and the material.
    pub fn validate(&self) -> Result<(), String> {
        self.shape.validate()?;
        self.material.validate()
    }

    /// Intersect the underlying shape and tag the hit with this surface.
    pub fn intersect(&self, ray: &Ray) -> Option<Hit<'_>> {
        self.shape.intersect(ray).map(|hit| Hit::new(hit, self))
    }
}
