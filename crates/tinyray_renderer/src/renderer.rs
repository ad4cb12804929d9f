//! Recursive ray tracer.
//!
//! Casts one primary ray per pixel, shades the nearest hit with Blinn-Phong
//! and folds in reflection and refraction rays until the trace level runs
//! out.

use std::cell::Cell;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tinyray_core::Color;
use tinyray_math::{Ray, Vector4};

use crate::hittable::HitResult;
use crate::{checker_color, PixelSink, Primitive, Scene};

/// Default recursion budget for primary rays.
pub const DEFAULT_TRACE_LEVEL: u32 = 5;

/// Refractive index on the incoming side.
pub const REFRACTION_N1: f64 = 0.5;
/// Refractive index on the outgoing side.
pub const REFRACTION_N2: f64 = 0.2;

/// Which parts of the shading model are evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceFlags {
    /// Start local shading from the material ambient colour (black otherwise)
    pub ambient: bool,
    /// Add per-light diffuse and specular terms
    pub diffuse_and_spec: bool,
    /// Drop the contribution of occluded lights
    pub shadow: bool,
    /// Trace mirror rays from sphere and box hits
    pub reflection: bool,
    /// Trace refracted rays from sphere and box hits
    pub refraction: bool,
}

impl Default for TraceFlags {
    fn default() -> Self {
        Self {
            ambient: true,
            diffuse_and_spec: true,
            shadow: true,
            reflection: true,
            refraction: true,
        }
    }
}

/// Render configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Recursion budget for primary rays
    pub trace_level: u32,
    pub flags: TraceFlags,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            trace_level: DEFAULT_TRACE_LEVEL,
            flags: TraceFlags::default(),
        }
    }
}

/// Maps pixels onto the camera's view plane.
///
/// Row 0 is the bottom edge of the plane, column 0 the left edge.
#[derive(Debug, Clone, Copy)]
pub struct ViewPlane {
    eye: Vector4,
    start: Vector4,
    row_step: Vector4,
    col_step: Vector4,
}

impl ViewPlane {
    pub fn new(scene: &Scene, width: u32, height: u32) -> Self {
        let camera = scene.camera();
        let up = camera.up_vector();
        let right = camera.right_vector();
        let scene_width = scene.scene_width();
        let scene_height = scene.scene_height();

        let pixel_dx = scene_width / f64::from(width);
        let pixel_dy = scene_height / f64::from(height);
        let start = camera.view_centre() - (right * scene_width + up * scene_height) * 0.5;

        Self {
            eye: camera.position(),
            start,
            row_step: up * pixel_dy,
            col_step: right * pixel_dx,
        }
    }

    /// Centre of pixel `(row, col)` on the view plane.
    pub fn sample_point(&self, row: u32, col: u32) -> Vector4 {
        self.start
            + self.row_step * (f64::from(row) + 0.5)
            + self.col_step * (f64::from(col) + 0.5)
    }

    /// Perspective ray from the eye through the pixel centre.
    pub fn primary_ray(&self, row: u32, col: u32) -> Ray {
        let direction = (self.sample_point(row, col) - self.eye).normalised();
        Ray::new(self.eye, direction)
    }
}

/// Single-threaded recursive ray tracer.
///
/// A tracer renders once; further calls to [`RayTracer::do_ray_trace`] are
/// no-ops until [`RayTracer::reset`].
#[derive(Debug)]
pub struct RayTracer {
    width: u32,
    height: u32,
    trace_level: u32,
    flags: TraceFlags,
    render_count: u32,
    rays_cast: Cell<u64>,
}

impl RayTracer {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            trace_level: config.trace_level,
            flags: config.flags,
            render_count: 0,
            rays_cast: Cell::new(0),
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn trace_level(&self) -> u32 {
        self.trace_level
    }

    pub fn set_trace_level(&mut self, trace_level: u32) {
        self.trace_level = trace_level;
    }

    #[inline]
    pub fn flags(&self) -> TraceFlags {
        self.flags
    }

    pub fn set_flags(&mut self, flags: TraceFlags) {
        self.flags = flags;
    }

    /// True once a full image has been traced.
    #[inline]
    pub fn has_rendered(&self) -> bool {
        self.render_count > 0
    }

    /// Allow the next [`RayTracer::do_ray_trace`] to render again.
    pub fn reset(&mut self) {
        self.render_count = 0;
    }

    /// Scene queries issued by [`RayTracer::trace_scene`] since the last
    /// render started.
    #[inline]
    pub fn rays_cast(&self) -> u64 {
        self.rays_cast.get()
    }

    /// Trace every pixel of `scene` into `sink`, in raster order.
    ///
    /// Returns `false` without touching the sink if this tracer has already
    /// rendered.
    pub fn do_ray_trace<S: PixelSink + ?Sized>(&mut self, scene: &Scene, sink: &mut S) -> bool {
        if self.has_rendered() {
            log::warn!("Scene already traced; call reset() to render again");
            return false;
        }

        log::info!(
            "Trace start: {}x{} pixels, trace level {}, flags {:?}",
            self.width,
            self.height,
            self.trace_level,
            self.flags
        );
        let start_time = Instant::now();
        self.rays_cast.set(0);

        let view = ViewPlane::new(scene, self.width, self.height);
        let background = scene.background();

        for row in 0..self.height {
            for col in 0..self.width {
                let ray = view.primary_ray(row, col);
                let color = self.trace_scene(scene, &ray, background, self.trace_level, false);
                sink.put_pixel(row, col, color);
            }
            sink.finish_row(row);
            log::debug!("Row {}/{} done", row + 1, self.height);
        }

        self.render_count += 1;
        log::info!(
            "Trace done in {:.2?}, {} rays cast",
            start_time.elapsed(),
            self.rays_cast()
        );
        true
    }

    /// Colour seen along `ray`.
    ///
    /// `color` is returned unchanged when `depth` is zero or nothing is hit.
    /// Shadow-ray traces shade locally and spawn nothing further.
    pub fn trace_scene(
        &self,
        scene: &Scene,
        ray: &Ray,
        color: Color,
        depth: u32,
        shadow_ray: bool,
    ) -> Color {
        if depth == 0 {
            return color;
        }

        self.rays_cast.set(self.rays_cast.get() + 1);
        let hit = scene.intersect_by_ray(ray, shadow_ray);
        let Some(id) = hit.primitive else {
            return color;
        };

        let primitive = scene.primitive(id);
        let mut out = self.calculate_lighting(scene, ray, primitive, &hit, shadow_ray);
        if shadow_ray || !primitive.supports_secondary_rays() {
            return out;
        }

        let depth = depth - 1;

        if self.flags.reflection {
            let reflected = Ray::new(hit.point, reflect(ray.direction(), hit.normal));
            out *= self.trace_scene(scene, &reflected, color, depth, false);
        }

        if self.flags.refraction {
            let refracted = Ray::new(hit.point, refract(ray.direction(), hit.normal));
            out *= self.trace_scene(scene, &refracted, color, depth, false);
        }

        out
    }

    /// Blinn-Phong shading at a hit, viewed from the ray origin.
    fn calculate_lighting(
        &self,
        scene: &Scene,
        ray: &Ray,
        primitive: &Primitive,
        hit: &HitResult,
        shadow_ray: bool,
    ) -> Color {
        let material = primitive.material();

        let mut out = if self.flags.ambient {
            material.ambient
        } else {
            Color::ZERO
        };
        if primitive.is_checkered() {
            out = checker_color(hit.point);
        }

        if !self.flags.diffuse_and_spec {
            return out;
        }

        let test_shadows = self.flags.shadow && !shadow_ray;
        let view_dir = (ray.origin() - hit.point).normalised();

        for light in scene.lights() {
            let light_pos = light.position_point();
            if test_shadows && scene.is_occluded(hit.point, light_pos) {
                continue;
            }

            // green takes the light's blue and blue its green
            let intensity = Color::new(light.color.x, light.color.z, light.color.y);

            let light_dir = (light_pos - hit.point).normalised();
            let theta = light_dir.dot(&hit.normal).max(0.0);
            out += material.diffuse * intensity * theta;

            let half = (view_dir + light_dir).normalised();
            let spec = hit.normal.dot(&half).max(0.0).powf(material.spec_power);
            out += material.specular * intensity * spec;
        }

        out
    }
}

/// Mirror `direction` about `normal`.
fn reflect(direction: Vector4, normal: Vector4) -> Vector4 {
    let c = -normal.dot(&direction);
    direction + normal * (c * 2.0)
}

/// Bend `direction` through the surface with ratio `REFRACTION_N1 / REFRACTION_N2`.
///
/// The fixed ratio is above 1, so the square root is of a negative number
/// and the result is NaN; such a ray hits nothing.
fn refract(direction: Vector4, normal: Vector4) -> Vector4 {
    let n = REFRACTION_N1 / REFRACTION_N2;
    let c = -normal.dot(&direction);
    let c2 = (1.0 - n * n).sqrt() * (1.0 - c * c);
    direction * n + normal * (c - c2 * n)
}
