//! Phong-style surface materials.

use glint_math::{Color, Interval};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Reflectance description of a surface.
///
/// All coefficient colors are expected in [0, 1]. A material is immutable
/// once attached to a surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    /// Ambient reflectance
    pub ka: Color,
    /// Diffuse reflectance
    pub kd: Color,
    /// Specular reflectance
    pub ks: Color,
    /// Phong exponent of the specular highlight
    pub shininess: u32,
    /// Weight of the mirror-reflected ray, in [0, 1]
    pub reflection_intensity: f64,
    /// Whether refracted rays are traced through this surface
    pub is_transparent: bool,
    /// Weight of the refracted ray
    pub refraction_intensity: f64,
    /// Index of refraction of the material (air is 1.0)
    pub refraction_index: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ka: Color::splat(0.1),
            kd: Color::splat(0.7),
            ks: Color::splat(0.7),
            shininess: 10,
            reflection_intensity: 0.0,
            is_transparent: false,
            refraction_intensity: 0.0,
            refraction_index: 1.5,
        }
    }
}

impl Material {
    /// Set the ambient, diffuse and specular coefficients.
    pub fn with_coefficients(mut self, ka: Color, kd: Color, ks: Color) -> Self {
        self.ka = ka;
        self.kd = kd;
        self.ks = ks;
        self
    }

    /// Set the specular exponent. Zero is bumped to one.
    pub fn with_shininess(mut self, shininess: u32) -> Self {
        self.shininess = shininess.max(1);
        self
    }

    /// Set the weight of mirror reflections.
    pub fn with_reflection(mut self, intensity: f64) -> Self {
        self.reflection_intensity = intensity.clamp(0.0, 1.0);
        self
    }

    /// Make the material transparent with the given refraction weight and index.
    pub fn with_refraction(mut self, intensity: f64, index: f64) -> Self {
        self.is_transparent = true;
        self.refraction_intensity = intensity.max(0.0);
        self.refraction_index = index;
        self
    }

    /// Polished grey metal with a strong mirror component.
    pub fn metal() -> Self {
        Self::default()
            .with_coefficients(Color::splat(0.1), Color::splat(0.3), Color::splat(0.9))
            .with_shininess(30)
            .with_reflection(0.6)
    }

    /// Glass-like material. When `transparent` is false the surface only
    /// reflects, which keeps scenes cheap when refraction is disabled.
    pub fn glass(transparent: bool) -> Self {
        let glass = Self::default()
            .with_coefficients(Color::splat(0.05), Color::splat(0.1), Color::splat(1.0))
            .with_shininess(60)
            .with_reflection(0.3);

        if transparent {
            glass.with_refraction(0.7, 1.5)
        } else {
            glass
        }
    }

    /// A random opaque material, mildly reflective.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let kd = Color::new(rng.gen(), rng.gen(), rng.gen());
        Self::default()
            .with_coefficients(kd * 0.2, kd, Color::splat(rng.gen_range(0.3..1.0)))
            .with_shininess(rng.gen_range(5..=50))
            .with_reflection(rng.gen_range(0.0..0.4))
    }

    /// Check the ranges the builder methods enforce.
    ///
    /// Materials read from JSON bypass those methods, so scenes re-check
    /// every material before they are handed to a renderer.
    pub fn validate(&self) -> Result<(), String> {
        for (name, k) in [("ka", self.ka), ("kd", self.kd), ("ks", self.ks)] {
            if !(Interval::UNIT.contains(k.min_element()) && Interval::UNIT.contains(k.max_element())) {
                return Err(format!("{} components must lie in [0, 1], got {}", name, k));
            }
        }
        if self.shininess < 1 {
            return Err("shininess must be at least 1".to_string());
        }
        if !Interval::UNIT.contains(self.reflection_intensity) {
            return Err(format!(
                "reflection intensity must lie in [0, 1], got {}",
                self.reflection_intensity
            ));
        }
        if !(self.refraction_intensity.is_finite() && self.refraction_intensity >= 0.0) {
            return Err(format!(
                "refraction intensity must be non-negative, got {}",
                self.refraction_intensity
            ));
        }
        if !(self.refraction_index.is_finite() && self.refraction_index > 0.0) {
            return Err(format!("refraction index must be positive, got {}", self.refraction_index));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_is_opaque() {
        let m = Material::default();
        assert!(!m.is_transparent);
        assert_eq!(m.reflection_intensity, 0.0);
        assert!(m.shininess >= 1);
    }

    #[test]
    fn test_presets() {
        assert!(Material::metal().reflection_intensity > 0.0);
        assert!(Material::glass(true).is_transparent);
        assert!(!Material::glass(false).is_transparent);
        assert!(Material::glass(true).refraction_intensity > 0.0);
    }

    #[test]
    fn test_builder_clamps() {
        let m = Material::default().with_shininess(0).with_reflection(4.0);
        assert_eq!(m.shininess, 1);
        assert_eq!(m.reflection_intensity, 1.0);
    }

    #[test]
    fn test_random_material_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..32 {
            let m = Material::random(&mut rng);
            for c in [m.ka, m.kd, m.ks] {
                assert!(c.min_element() >= 0.0 && c.max_element() <= 1.0);
            }
            assert!((5..=50).contains(&m.shininess));
            assert!((0.0..=1.0).contains(&m.reflection_intensity));
            assert!(!m.is_transparent);
        }
    }

    #[test]
    fn test_validate() {
        assert!(Material::default().validate().is_ok());
        assert!(Material::metal().validate().is_ok());
        assert!(Material::glass(true).validate().is_ok());

        let flat = Material {
            shininess: 0,
            ..Material::default()
        };
        assert!(flat.validate().unwrap_err().contains("shininess"));

        let bright = Material::default().with_coefficients(Color::ZERO, Color::splat(1.5), Color::ZERO);
        assert!(bright.validate().unwrap_err().starts_with("kd"));

        let negative = Material {
            reflection_intensity: -0.5,
            ..Material::default()
        };
        assert!(negative.validate().is_err());

        let nan = Material {
            ks: Color::new(0.5, f64::NAN, 0.5),
            ..Material::default()
        };
        assert!(nan.validate().is_err());

        let vacuum = Material {
            refraction_index: 0.0,
            ..Material::default()
        };
        assert!(vacuum.validate().is_err());
    }

    #[test]
    fn test_random_material_is_reproducible() {
        let a = Material::random(&mut StdRng::seed_from_u64(42));
        let b = Material::random(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
