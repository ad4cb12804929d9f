//! Axis-aligned box primitive.

use glam::DVec3;
use tinyray_math::{Interval, Ray, Vector4};

use crate::hittable::{Intersect, SurfaceHit};

/// A solid axis-aligned box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBox {
    min: DVec3,
    max: DVec3,
}

impl AxisBox {
    /// Create a box from two opposite corners.
    pub fn new(a: DVec3, b: DVec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    #[inline]
    pub fn min(&self) -> DVec3 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> DVec3 {
        self.max
    }
}

impl Intersect for AxisBox {
    /// Slab test. The entry face gives the normal; a ray starting inside the
    /// box has its entry behind the origin and does not hit.
    fn intersect_by_ray(&self, ray: &Ray) -> Option<SurfaceHit> {
        let origin = ray.origin().xyz();
        let direction = ray.direction().xyz();

        let mut ray_t = Interval::UNIVERSE;
        let mut entry_normal = DVec3::ZERO;

        for axis in 0..3 {
            let adinv = 1.0 / direction[axis];
            let mut t0 = (self.min[axis] - origin[axis]) * adinv;
            let mut t1 = (self.max[axis] - origin[axis]) * adinv;
            let mut outward = -1.0;
            if adinv < 0.0 {
                std::mem::swap(&mut t0, &mut t1);
                outward = 1.0;
            }

            if t0 > ray_t.min {
                ray_t.min = t0;
                entry_normal = DVec3::ZERO;
                entry_normal[axis] = outward;
            }
            if t1 < ray_t.max {
                ray_t.max = t1;
            }
            if ray_t.max <= ray_t.min {
                return None;
            }
        }

        let t = ray_t.min;
        if !Ray::FORWARD.surrounds(t) {
            return None;
        }

        Some(SurfaceHit {
            normal: Vector4::from_direction(entry_normal),
            point: ray.at(t),
            t,
        })
    }
}
