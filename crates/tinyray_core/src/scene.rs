//! Scene description for TinyRay.
//!
//! A renderer-agnostic description of everything a trace needs: camera, the
//! metric size of the view plane, background colour, lights and primitives.
//! Descriptions are plain data; the renderer builds its own scene from one.

use std::path::Path;

use glam::DVec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Color, Light, Material};

/// Errors that can occur while loading or validating a scene description.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid primitive {index}: {reason}")]
    InvalidPrimitive { index: usize, reason: String },

    #[error("Invalid view: {0}")]
    InvalidView(String),
}

pub type SceneResult<T> = Result<T, SceneError>;

/// Camera placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraDesc {
    pub position: DVec3,
    pub look_at: DVec3,
    #[serde(default = "default_up")]
    pub up: DVec3,
    #[serde(default = "default_focal_length")]
    pub focal_length: f64,
}

fn default_up() -> DVec3 {
    DVec3::Y
}

fn default_focal_length() -> f64 {
    1.0
}

impl Default for CameraDesc {
    fn default() -> Self {
        Self {
            position: DVec3::new(0.0, 0.0, 10.0),
            look_at: DVec3::ZERO,
            up: default_up(),
            focal_length: default_focal_length(),
        }
    }
}

/// Geometry of a primitive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShapeDesc {
    Sphere { centre: DVec3, radius: f64 },
    /// Counter-clockwise as seen from the side that can be hit.
    Triangle { vertices: [DVec3; 3] },
    /// Points `p` with `normal · p + offset = 0`.
    Plane { normal: DVec3, offset: f64 },
    /// Axis-aligned box.
    Box { min: DVec3, max: DVec3 },
}

impl ShapeDesc {
    /// Check the geometry is usable; `index` is only used for the error.
    pub fn validate(&self, index: usize) -> SceneResult<()> {
        let invalid = |reason: &str| {
            Err(SceneError::InvalidPrimitive {
                index,
                reason: reason.to_string(),
            })
        };

        match *self {
            ShapeDesc::Sphere { centre, radius } => {
                if !centre.is_finite() || !(radius.is_finite() && radius > 0.0) {
                    return invalid("sphere radius must be positive and finite");
                }
            }
            ShapeDesc::Triangle { vertices: [v0, v1, v2] } => {
                let (e1, e2) = (v1 - v0, v2 - v0);
                // relative to the edge lengths so small triangles pass
                let area_sq = e1.cross(e2).length_squared();
                if !(area_sq > f64::EPSILON * e1.length_squared() * e2.length_squared()) {
                    return invalid("triangle vertices are collinear");
                }
            }
            ShapeDesc::Plane { normal, offset } => {
                if !offset.is_finite() || normal.length_squared() <= f64::EPSILON {
                    return invalid("plane normal must be non-zero");
                }
            }
            ShapeDesc::Box { min, max } => {
                if !min.cmplt(max).all() {
                    return invalid("box min must be below max on every axis");
                }
            }
        }
        Ok(())
    }

    /// Type name for logging.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ShapeDesc::Sphere { .. } => "sphere",
            ShapeDesc::Triangle { .. } => "triangle",
            ShapeDesc::Plane { .. } => "plane",
            ShapeDesc::Box { .. } => "box",
        }
    }
}

/// A shape with its material.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PrimitiveDesc {
    #[serde(flatten)]
    pub shape: ShapeDesc,
    #[serde(default)]
    pub material: Material,
    /// Override whether hits spawn reflection/refraction rays.
    /// Defaults to the shape's own behaviour (spheres and boxes only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_rays: Option<bool>,
}

impl PrimitiveDesc {
    pub fn new(shape: ShapeDesc, material: Material) -> Self {
        Self {
            shape,
            material,
            secondary_rays: None,
        }
    }
}

/// Complete scene description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDescription {
    #[serde(default)]
    pub camera: CameraDesc,
    /// Metric width of the view plane
    pub view_width: f64,
    /// Metric height of the view plane
    pub view_height: f64,
    #[serde(default)]
    pub background: Color,
    #[serde(default)]
    pub lights: Vec<Light>,
    #[serde(default)]
    pub primitives: Vec<PrimitiveDesc>,
}

impl SceneDescription {
    /// Check the view plane, camera and every primitive.
    pub fn validate(&self) -> SceneResult<()> {
        if !(self.view_width > 0.0 && self.view_height > 0.0) {
            return Err(SceneError::InvalidView(format!(
                "view plane must have positive extent, got {} x {}",
                self.view_width, self.view_height
            )));
        }
        if !(self.camera.focal_length > 0.0) {
            return Err(SceneError::InvalidView(format!(
                "focal length must be positive, got {}",
                self.camera.focal_length
            )));
        }
        let view = self.camera.look_at - self.camera.position;
        if view.cross(self.camera.up).length_squared() <= f64::EPSILON {
            return Err(SceneError::InvalidView(
                "camera up vector must not be parallel to the view direction".to_string(),
            ));
        }

        for (index, primitive) in self.primitives.iter().enumerate() {
            primitive.shape.validate(index)?;
        }
        Ok(())
    }
}

impl Default for SceneDescription {
    /// Built-in scene: checkered floor, two spheres, a triangle, a box, two lights.
    fn default() -> Self {
        let shiny = |ambient: Color, diffuse: Color| {
            Material::new(ambient, diffuse, Color::splat(0.8), 40.0)
        };

        Self {
            camera: CameraDesc::default(),
            view_width: 1.6,
            view_height: 1.2,
            background: Color::new(0.6, 0.7, 0.9),
            lights: vec![
                Light::new(DVec3::new(5.0, 8.0, 10.0), Color::ONE),
                Light::new(DVec3::new(-8.0, 5.0, 5.0), Color::new(0.6, 0.6, 0.8)),
            ],
            primitives: vec![
                PrimitiveDesc::new(
                    ShapeDesc::Plane {
                        normal: DVec3::Y,
                        offset: 2.0,
                    },
                    Material::default(),
                ),
                PrimitiveDesc::new(
                    ShapeDesc::Sphere {
                        centre: DVec3::new(-2.5, 0.0, 0.0),
                        radius: 1.5,
                    },
                    shiny(Color::new(0.2, 0.05, 0.05), Color::new(0.8, 0.2, 0.2)),
                ),
                PrimitiveDesc::new(
                    ShapeDesc::Sphere {
                        centre: DVec3::new(2.5, 0.5, -2.0),
                        radius: 2.0,
                    },
                    shiny(Color::new(0.05, 0.05, 0.2), Color::new(0.2, 0.3, 0.9)),
                ),
                PrimitiveDesc::new(
                    ShapeDesc::Triangle {
                        vertices: [
                            DVec3::new(-1.5, -2.0, -4.0),
                            DVec3::new(1.5, -2.0, -4.0),
                            DVec3::new(0.0, 2.0, -4.0),
                        ],
                    },
                    Material::new(
                        Color::new(0.05, 0.15, 0.05),
                        Color::new(0.2, 0.8, 0.2),
                        Color::splat(0.3),
                        10.0,
                    ),
                ),
                PrimitiveDesc::new(
                    ShapeDesc::Box {
                        min: DVec3::new(-0.75, -2.0, 1.5),
                        max: DVec3::new(0.75, -0.5, 3.0),
                    },
                    shiny(Color::new(0.15, 0.15, 0.05), Color::new(0.8, 0.8, 0.2)),
                ),
            ],
        }
    }
}

/// Load a scene description from a JSON file and validate it.
pub fn load_scene_json(path: impl AsRef<Path>) -> SceneResult<SceneDescription> {
    let path = path.as_ref();
    log::info!("Loading scene from {}", path.display());
    let contents = std::fs::read_to_string(path)?;
    load_scene_json_from_string(&contents)
}

/// Parse and validate a scene description from a JSON string.
pub fn load_scene_json_from_string(json: &str) -> SceneResult<SceneDescription> {
    let description: SceneDescription = serde_json::from_str(json)?;
    description.validate()?;
    log::debug!(
        "Scene description: {} primitives, {} lights",
        description.primitives.len(),
        description.lights.len()
    );
    Ok(description)
}
