//! Infinite plane primitive.

use glam::DVec3;
use tinyray_math::{Ray, Vector4};

use crate::hittable::{Intersect, SurfaceHit};

/// Points `p` with `normal · p + offset = 0`. Hit from either side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    normal: Vector4,
    offset: f64,
}

impl Plane {
    /// Create a plane; `normal` is normalised and `offset` scaled to match.
    pub fn new(normal: DVec3, offset: f64) -> Self {
        let length = normal.length();
        Self {
            normal: Vector4::from_direction(normal / length),
            offset: offset / length,
        }
    }

    #[inline]
    pub fn normal(&self) -> Vector4 {
        self.normal
    }

    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }
}

impl Intersect for Plane {
    fn intersect_by_ray(&self, ray: &Ray) -> Option<SurfaceHit> {
        // normal has w = 0, so the origin's w drops out
        let t = -(ray.origin().dot(&self.normal) + self.offset) / ray.direction().dot(&self.normal);

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
