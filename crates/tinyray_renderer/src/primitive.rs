//! Primitives: a shape, its material and the capabilities the tracer checks.

use tinyray_core::{Color, Material, PrimitiveDesc, ShapeDesc};
use tinyray_math::{Ray, Vector4};

use crate::hittable::{Intersect, SurfaceHit};
use crate::{AxisBox, Plane, Sphere, Triangle};

/// Handle of a primitive inside a [`crate::Scene`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrimitiveId(usize);

impl PrimitiveId {
    #[inline]
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Shape variant tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    Sphere,
    Triangle,
    Plane,
    Box,
}

/// Geometry of a primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Sphere(Sphere),
    Triangle(Triangle),
    Plane(Plane),
    Box(AxisBox),
}

impl Shape {
    pub fn kind(&self) -> PrimitiveKind {
        match self {
            Shape::Sphere(_) => PrimitiveKind::Sphere,
            Shape::Triangle(_) => PrimitiveKind::Triangle,
            Shape::Plane(_) => PrimitiveKind::Plane,
            Shape::Box(_) => PrimitiveKind::Box,
        }
    }
}

impl From<&ShapeDesc> for Shape {
    fn from(desc: &ShapeDesc) -> Self {
        match *desc {
            ShapeDesc::Sphere { centre, radius } => Shape::Sphere(Sphere::new(centre, radius)),
            ShapeDesc::Triangle { vertices: [v0, v1, v2] } => {
                Shape::Triangle(Triangle::new(v0, v1, v2))
            }
            ShapeDesc::Plane { normal, offset } => Shape::Plane(Plane::new(normal, offset)),
            ShapeDesc::Box { min, max } => Shape::Box(AxisBox::new(min, max)),
        }
    }
}

impl Intersect for Shape {
    fn intersect_by_ray(&self, ray: &Ray) -> Option<SurfaceHit> {
        match self {
            Shape::Sphere(s) => s.intersect_by_ray(ray),
            Shape::Triangle(t) => t.intersect_by_ray(ray),
            Shape::Plane(p) => p.intersect_by_ray(ray),
            Shape::Box(b) => b.intersect_by_ray(ray),
        }
    }
}

/// A shape with a material.
///
/// `secondary_rays` decides whether hits spawn reflection and refraction
/// rays; `checkered` replaces the surface colour with the checker pattern.
/// Both default from the shape: spheres and boxes reflect and refract,
/// planes are checkered.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    shape: Shape,
    material: Material,
    secondary_rays: bool,
    checkered: bool,
}

impl Primitive {
    pub fn new(shape: Shape, material: Material) -> Self {
        let kind = shape.kind();
        Self {
            shape,
            material,
            secondary_rays: matches!(kind, PrimitiveKind::Sphere | PrimitiveKind::Box),
            checkered: kind == PrimitiveKind::Plane,
        }
    }

    pub fn sphere(sphere: Sphere, material: Material) -> Self {
        Self::new(Shape::Sphere(sphere), material)
    }

    pub fn triangle(triangle: Triangle, material: Material) -> Self {
        Self::new(Shape::Triangle(triangle), material)
    }

    pub fn plane(plane: Plane, material: Material) -> Self {
        Self::new(Shape::Plane(plane), material)
    }

    pub fn axis_box(axis_box: AxisBox, material: Material) -> Self {
        Self::new(Shape::Box(axis_box), material)
    }

    /// Override whether hits spawn reflection/refraction rays.
    pub fn with_secondary_rays(mut self, enabled: bool) -> Self {
        self.secondary_rays = enabled;
        self
    }

    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    #[inline]
    pub fn kind(&self) -> PrimitiveKind {
        self.shape.kind()
    }

    #[inline]
    pub fn material(&self) -> &Material {
        &self.material
    }

    #[inline]
    pub fn supports_secondary_rays(&self) -> bool {
        self.secondary_rays
    }

    #[inline]
    pub fn is_checkered(&self) -> bool {
        self.checkered
    }
}

impl From<&PrimitiveDesc> for Primitive {
    fn from(desc: &PrimitiveDesc) -> Self {
        let primitive = Primitive::new(Shape::from(&desc.shape), desc.material);
        match desc.secondary_rays {
            Some(enabled) => primitive.with_secondary_rays(enabled),
            None => primitive,
        }
    }
}

impl Intersect for Primitive {
    #[inline]
    fn intersect_by_ray(&self, ray: &Ray) -> Option<SurfaceHit> {
        self.shape.intersect_by_ray(ray)
    }
}

/// Checker pattern with 2-unit tiles.
///
/// The halved coordinates are truncated toward zero, so the tile straddling
/// each axis origin is twice as wide on the negative side.
pub fn checker_color(point: Vector4) -> Color {
    let dx = (point.x() / 2.0) as i32;
    let dy = (point.y() / 2.0) as i32;
    let dz = (point.z() / 2.0) as i32;

    if dx % 2 != 0 || dy % 2 != 0 || dz % 2 != 0 {
        Color::ONE
    } else {
        Color::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    #[test]
    fn test_checker_parity() {
        assert_eq!(checker_color(Vector4::point(3.0, 1.0, 0.0)), Color::ONE);
        assert_eq!(checker_color(Vector4::point(0.0, 0.0, 0.0)), Color::ZERO);
        assert_eq!(checker_color(Vector4::point(4.5, 0.0, 4.5)), Color::ZERO);
        assert_eq!(checker_color(Vector4::point(0.0, -2.0, 1.9)), Color::ONE);
    }

    #[test]
    fn test_checker_truncates_toward_zero() {
        // -1.5 / 2 truncates to 0, same tile as +1.5
        assert_eq!(checker_color(Vector4::point(-1.5, 0.0, 0.0)), Color::ZERO);
        assert_eq!(checker_color(Vector4::point(1.5, 0.0, 0.0)), Color::ZERO);
        // -2.5 / 2 truncates to -1, odd
        assert_eq!(checker_color(Vector4::point(-2.5, 0.0, 0.0)), Color::ONE);
    }

    #[test]
    fn test_default_capabilities() {
        let m = Material::default();
        let sphere = Primitive::sphere(Sphere::new(DVec3::ZERO, 1.0), m);
        let tri = Primitive::triangle(Triangle::new(DVec3::ZERO, DVec3::X, DVec3::Y), m);
        let plane = Primitive::plane(Plane::new(DVec3::Y, 0.0), m);
        let cube = Primitive::axis_box(AxisBox::new(DVec3::ZERO, DVec3::ONE), m);

        assert!(sphere.supports_secondary_rays());
        assert!(cube.supports_secondary_rays());
        assert!(!tri.supports_secondary_rays());
        assert!(!plane.supports_secondary_rays());

        assert!(plane.is_checkered());
        assert!(!sphere.is_checkered());
        assert_eq!(cube.kind(), PrimitiveKind::Box);
    }

    #[test]
    fn test_from_description_override() {
        let desc = PrimitiveDesc {
            shape: ShapeDesc::Triangle {
                vertices: [DVec3::ZERO, DVec3::X, DVec3::Y],
            },
            material: Material::default(),
            secondary_rays: Some(true),
        };
        let primitive = Primitive::from(&desc);
        assert_eq!(primitive.kind(), PrimitiveKind::Triangle);
        assert!(primitive.supports_secondary_rays());
    }
}
