//! Scene consumed by the tracer.
//!
//! Owns the primitives and lights for one render. Hit results refer back to
//! primitives through [`PrimitiveId`] handles.

use std::path::Path;

use tinyray_core::{load_scene_json, Color, Light, SceneDescription, SceneError};
use tinyray_math::{Camera, Ray, Vector4};

use crate::hittable::{HitResult, Intersect};
use crate::{Primitive, PrimitiveId, RenderResult};

/// Shadow-ray hits at or below this distance are the surface the ray leaves.
pub const SHADOW_EPSILON: f64 = 1.0e-6;

pub struct Scene {
    camera: Camera,
    scene_width: f64,
    scene_height: f64,
    background: Color,
    lights: Vec<Light>,
    primitives: Vec<Primitive>,
}

impl Scene {
    /// Create an empty scene. `scene_width` and `scene_height` are the metric
    /// size of the view plane, not pixels.
    pub fn new(camera: Camera, scene_width: f64, scene_height: f64, background: Color) -> Self {
        Self {
            camera,
            scene_width,
            scene_height,
            background,
            lights: Vec::new(),
            primitives: Vec::new(),
        }
    }

    /// Validate a description and build a scene from it.
    pub fn from_description(description: &SceneDescription) -> Result<Self, SceneError> {
        description.validate()?;

        let cam = &description.camera;
        let camera = Camera::look_at(cam.position, cam.look_at, cam.up, cam.focal_length);
        let mut scene = Scene::new(
            camera,
            description.view_width,
            description.view_height,
            description.background,
        );

        for primitive in &description.primitives {
            let id = scene.add_primitive(Primitive::from(primitive));
            log::trace!("Primitive {}: {}", id.index(), primitive.shape.kind_name());
        }
        for light in &description.lights {
            scene.add_light(*light);
        }

        log::debug!(
            "Built scene: {} primitives, {} lights, view plane {} x {}",
            scene.primitives.len(),
            scene.lights.len(),
            scene.scene_width,
            scene.scene_height
        );
        Ok(scene)
    }

    /// Load a JSON scene description from disk and build it.
    pub fn from_json_file(path: impl AsRef<Path>) -> RenderResult<Self> {
        let description = load_scene_json(path)?;
        Ok(Self::from_description(&description)?)
    }

    /// Add a primitive and return its handle.
    pub fn add_primitive(&mut self, primitive: Primitive) -> PrimitiveId {
        let id = PrimitiveId::new(self.primitives.len());
        self.primitives.push(primitive);
        id
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    #[inline]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    #[inline]
    pub fn scene_width(&self) -> f64 {
        self.scene_width
    }

    #[inline]
    pub fn scene_height(&self) -> f64 {
        self.scene_height
    }

    #[inline]
    pub fn background(&self) -> Color {
        self.background
    }

    #[inline]
    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    #[inline]
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Look up a primitive by handle.
    ///
    /// Handles come from this scene's own hit results, so the index is
    /// always in range.
    #[inline]
    pub fn primitive(&self, id: PrimitiveId) -> &Primitive {
        &self.primitives[id.index()]
    }

    /// Nearest hit across all primitives, or [`HitResult::NONE`].
    ///
    /// Shadow rays start on a surface, so hits closer than
    /// [`SHADOW_EPSILON`] are ignored for them.
    pub fn intersect_by_ray(&self, ray: &Ray, shadow_ray: bool) -> HitResult {
        let min_t = if shadow_ray { SHADOW_EPSILON } else { 0.0 };
        let mut closest = HitResult::NONE;

        for (index, primitive) in self.primitives.iter().enumerate() {
            if let Some(hit) = primitive.intersect_by_ray(ray) {
                if hit.t > min_t && hit.t < closest.t {
                    closest = HitResult::new(hit, PrimitiveId::new(index));
                }
            }
        }

        closest
    }

    /// True when something lies between `point` and `light_position`.
    pub fn is_occluded(&self, point: Vector4, light_position: Vector4) -> bool {
        let to_light = light_position - point;
        let distance = to_light.length();
        let shadow_ray = Ray::new(point, to_light.normalised());

        let hit = self.intersect_by_ray(&shadow_ray, true);
        hit.is_hit() && hit.t < distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Plane, Sphere, Triangle};
    use glam::DVec3;
    use tinyray_core::Material;

    fn empty_scene() -> Scene {
        Scene::new(Camera::default(), 1.6, 1.2, Color::new(0.1, 0.2, 0.3))
    }

    fn down_z(x: f64, y: f64) -> Ray {
        Ray::new(Vector4::point(x, y, 10.0), Vector4::direction(0.0, 0.0, -1.0))
    }

    #[test]
    fn test_empty_scene_misses() {
        let scene = empty_scene();
        assert_eq!(scene.intersect_by_ray(&down_z(0.0, 0.0), false), HitResult::NONE);
    }

    #[test]
    fn test_nearest_hit_wins() {
        let mut scene = empty_scene();
        scene.add_primitive(Primitive::sphere(
            Sphere::new(DVec3::new(0.0, 0.0, -5.0), 1.0),
            Material::default(),
        ));
        let near = scene.add_primitive(Primitive::sphere(
            Sphere::new(DVec3::new(0.0, 0.0, 0.0), 1.0),
            Material::default(),
        ));

        let hit = scene.intersect_by_ray(&down_z(0.0, 0.0), false);
        assert_eq!(hit.primitive, Some(near));
        assert!((hit.t - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_handles_index_primitives() {
        let mut scene = empty_scene();
        let id = scene.add_primitive(Primitive::triangle(
            Triangle::new(DVec3::new(-1.0, -1.0, 0.0), DVec3::new(1.0, -1.0, 0.0), DVec3::Y),
            Material::flat(Color::X),
        ));

        let hit = scene.intersect_by_ray(&down_z(0.0, 0.0), false);
        let primitive = scene.primitive(hit.primitive.expect("should hit"));
        assert_eq!(hit.primitive, Some(id));
        assert_eq!(primitive.material().ambient, Color::X);
    }

    #[test]
    fn test_occlusion() {
        let mut scene = empty_scene();
        scene.add_primitive(Primitive::sphere(
            Sphere::new(DVec3::new(0.0, 5.0, 0.0), 1.0),
            Material::default(),
        ));

        let point = Vector4::point(0.0, 0.0, 0.0);
        assert!(scene.is_occluded(point, Vector4::point(0.0, 10.0, 0.0)));
        // light in front of the occluder
        assert!(!scene.is_occluded(point, Vector4::point(0.0, 3.0, 0.0)));
        // light off to the side
        assert!(!scene.is_occluded(point, Vector4::point(10.0, 0.0, 0.0)));
    }

    #[test]
    fn test_shadow_ray_ignores_own_surface() {
        let mut scene = empty_scene();
        scene.add_primitive(Primitive::plane(Plane::new(DVec3::Y, 0.0), Material::default()));

        let on_surface = Ray::new(Vector4::point(0.0, 1e-9, 0.0), Vector4::direction(0.0, -1.0, 0.0));
        assert!(scene.intersect_by_ray(&on_surface, false).is_hit());
        assert!(!scene.intersect_by_ray(&on_surface, true).is_hit());
    }

    #[test]
    fn test_from_description() {
        let description = SceneDescription::default();
        let scene = Scene::from_description(&description).unwrap();

        assert_eq!(scene.primitives().len(), description.primitives.len());
        assert_eq!(scene.lights().len(), description.lights.len());
        assert_eq!(scene.background(), description.background);
        assert_eq!(scene.scene_width(), 1.6);
        assert_eq!(scene.camera().position(), Vector4::point(0.0, 0.0, 10.0));
    }

    #[test]
    fn test_from_json_file() {
        let path = std::env::temp_dir().join("tinyray_renderer_scene_test.json");
        let json = serde_json::to_string(&SceneDescription::default()).unwrap();
        std::fs::write(&path, json).unwrap();

        let scene = Scene::from_json_file(&path).unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(scene.primitives().len(), SceneDescription::default().primitives.len());

        let missing = Scene::from_json_file("/definitely/not/here/scene.json");
        assert!(matches!(missing, Err(crate::RenderError::Scene(SceneError::Io(_)))));
    }

    #[test]
    fn test_from_invalid_description() {
        let description = SceneDescription {
            view_width: -1.0,
            ..SceneDescription::default()
        };
        assert!(Scene::from_description(&description).is_err());
    }
}
