//! Sphere primitive for ray tracing.

use glam::DVec3;
use tinyray_math::{Ray, Vector4};

use crate::hittable::{Intersect, SurfaceHit};

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    centre: Vector4,
    radius: f64,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(centre: DVec3, radius: f64) -> Self {
        Self {
            centre: Vector4::from_point(centre),
            radius,
        }
    }

    #[inline]
    pub fn centre(&self) -> Vector4 {
        self.centre
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Discriminant of `|O + tD - C|² = r²`, as `(D·(O-C))² - (D·D)((O-C)·(O-C) - r²)`.
    ///
    /// Negative: miss. Zero: tangent. Positive: two crossings.
    pub fn discriminant(&self, ray: &Ray) -> f64 {
        let direction = ray.direction();
        let s_minus_c = ray.origin() - self.centre;
        let b = direction.dot(&s_minus_c);
        let a = direction.dot(&direction);
        b * b - a * (s_minus_c.dot(&s_minus_c) - self.radius * self.radius)
    }
}

impl Intersect for Sphere {
    /// Takes the smaller root as the entry point. When that root is behind
    /// the origin (the ray starts inside the sphere) there is no hit.
    fn intersect_by_ray(&self, ray: &Ray) -> Option<SurfaceHit> {
        let direction = ray.direction();
        let s_minus_c = ray.origin() - self.centre;
        let b = direction.dot(&s_minus_c);
        let a = direction.dot(&direction);
        let det = self.discriminant(ray);

        let t = if det > 0.0 {
            let sqrt_det = det.sqrt();
            let t_pos = (-b + sqrt_det) / a;
            let t_neg = (-b - sqrt_det) / a;
            if t_pos < t_neg {
                t_pos
            } else {
                t_neg
            }
        } else if det == 0.0 {
            -b / a
        } else {
            // negative or NaN
            return None;
        };

        if !Ray::FORWARD.surrounds(t) {
            return None;
        }

        let point = ray.at(t);
        Some(SurfaceHit {
            normal: (point - self.centre).normalised(),
            point,
            t,
        })
    }
}
