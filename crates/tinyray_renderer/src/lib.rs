//! TinyRay renderer - recursive ray tracing on the CPU.
//!
//! One primary ray per pixel, nearest-hit search over every primitive,
//! Blinn-Phong local shading and recursive reflection/refraction rays up to a
//! fixed trace level. Single-threaded and brute force by design.

mod hittable;
mod sphere;
mod triangle;
mod plane;
mod aabox;
mod primitive;
mod scene;
mod renderer;
mod image_buffer;
mod error;

pub use hittable::{HitResult, Intersect, SurfaceHit};
pub use sphere::Sphere;
pub use triangle::Triangle;
pub use plane::Plane;
pub use aabox::AxisBox;
pub use primitive::{checker_color, Primitive, PrimitiveId, PrimitiveKind, Shape};
pub use scene::{Scene, SHADOW_EPSILON};
pub use renderer::{
    RayTracer, RenderConfig, TraceFlags, ViewPlane, DEFAULT_TRACE_LEVEL, REFRACTION_N1,
    REFRACTION_N2,
};
pub use image_buffer::{color_to_rgba, ImageBuffer, PixelSink};
pub use error::{RenderError, RenderResult};

/// Re-export math and scene data types
pub use tinyray_core::{Color, Light, Material, SceneDescription};
pub use tinyray_math::{Camera, Ray, Vector4, FARFAR_AWAY};
