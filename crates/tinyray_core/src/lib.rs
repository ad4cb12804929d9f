//! TinyRay Core - scene description types.
//!
//! This crate provides:
//!
//! - **Surface data**: `Material`, `Light`, `Color`
//! - **Scene description**: renderer-agnostic primitives, camera and view
//!   plane, loadable from JSON
//!
//! # Example
//!
//! ```ignore
//! use tinyray_core::load_scene_json;
//!
//! let description = load_scene_json("scene.json")?;
//! println!("Loaded {} primitives, {} lights",
//!     description.primitives.len(),
//!     description.lights.len());
//! ```

pub mod light;
pub mod material;
pub mod scene;

// Re-export commonly used types
pub use light::Light;
pub use material::{Color, Material};
pub use scene::{
    load_scene_json, load_scene_json_from_string, CameraDesc, PrimitiveDesc, SceneDescription,
    SceneError, SceneResult, ShapeDesc,
};
