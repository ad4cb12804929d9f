//! Triangle primitive for ray tracing.
//!
//! Inside/outside is decided with three edge half-space tests against the
//! point one unit along the ray, then the plane parameter is solved from the
//! precomputed face normal. Triangles are one-sided: only rays seeing the
//! vertices counter-clockwise can hit.

use glam::DVec3;
use tinyray_math::{Ray, Vector4};

use crate::hittable::{Intersect, SurfaceHit};

/// A triangle primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    vertices: [Vector4; 3],
    /// Normalised `(v1 - v0) × (v2 - v0)`, fourth component included
    normal: Vector4,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    pub fn new(v0: DVec3, v1: DVec3, v2: DVec3) -> Self {
        let vertices = [v0, v1, v2].map(Vector4::from_point);
        let normal = (vertices[1] - vertices[0])
            .cross(&(vertices[2] - vertices[0]))
            .normalised();

        Self { vertices, normal }
    }

    #[inline]
    pub fn vertices(&self) -> [Vector4; 3] {
        self.vertices
    }

    #[inline]
    pub fn normal(&self) -> Vector4 {
        self.normal
    }

    /// Centroid of the three vertices.
    pub fn centroid(&self) -> Vector4 {
        (self.vertices[0] + self.vertices[1] + self.vertices[2]) * (1.0 / 3.0)
    }
}

impl Intersect for Triangle {
    fn intersect_by_ray(&self, ray: &Ray) -> Option<SurfaceHit> {
        let start = ray.origin();
        let direction = ray.direction();
        let p = start + direction;
        let d = -self.vertices[0].dot(&self.normal);

        let [v0, v1, v2] = self.vertices.map(|v| v - p);
        let edge_normals = [
            v1.cross(&v0).normalised(),
            v2.cross(&v1).normalised(),
            v0.cross(&v2).normalised(),
        ];

        for n in &edge_normals {
            let offset = -start.dot(n);
            if p.dot(n) + offset < 0.0 {
                return None;
            }
        }

        // Parallel rays give a non-finite t and fall out here.
        let t = -(start.dot(&self.normal) + d) / direction.dot(&self.normal);
        if !Ray::FORWARD.surrounds(t) {
            return None;
        }

        Some(SurfaceHit {
            normal: self.normal,
            point: ray.at(t),
            t,
        })
    }
}
