use glam::DVec3;
use serde::{Deserialize, Serialize};
use tinyray_math::Vector4;

use crate::Color;

/// A point light. Read-only while tracing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Light {
    pub position: DVec3,
    #[serde(default = "white")]
    pub color: Color,
}

fn white() -> Color {
    Color::ONE
}

impl Light {
    pub fn new(position: DVec3, color: Color) -> Self {
        Self { position, color }
    }

    /// Position as a homogeneous point.
    pub fn position_point(&self) -> Vector4 {
        Vector4::from_point(self.position)
    }
}
