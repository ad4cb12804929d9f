//! Surface material for local shading.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Color type alias (RGB values typically 0-1, x = red, y = green, z = blue)
pub type Color = DVec3;

/// Blinn-Phong surface parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Material {
    /// Base colour before any light is added
    pub ambient: Color,
    /// Diffuse reflectance, scaled by `max(0, N·L)` per light
    pub diffuse: Color,
    /// Specular reflectance, scaled by `max(0, N·H)^spec_power` per light
    pub specular: Color,
    /// Specular exponent
    pub spec_power: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            ambient: Color::splat(0.1),
            diffuse: Color::splat(0.5),
            specular: Color::splat(0.5),
            spec_power: 20.0,
        }
    }
}

impl Material {
    /// Create a material from all four parameters.
    pub fn new(ambient: Color, diffuse: Color, specular: Color, spec_power: f64) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
            spec_power,
        }
    }

    /// Material with only an ambient colour (no diffuse or specular response).
    pub fn flat(ambient: Color) -> Self {
        Self {
            ambient,
            diffuse: Color::ZERO,
            specular: Color::ZERO,
            spec_power: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_material() {
        let m = Material::flat(Color::new(0.2, 0.4, 0.6));
        assert_eq!(m.ambient, Color::new(0.2, 0.4, 0.6));
        assert_eq!(m.diffuse, Color::ZERO);
        assert_eq!(m.specular, Color::ZERO);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let m: Material = serde_json::from_str(r#"{ "spec_power": 64.0 }"#).unwrap();
        assert_eq!(m.spec_power, 64.0);
        assert_eq!(m.ambient, Material::default().ambient);
    }
}
