//! Intersection protocol shared by every primitive shape.

use tinyray_math::{Ray, Vector4, FARFAR_AWAY};

use crate::PrimitiveId;

/// Geometric result of a single shape intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceHit {
    /// Surface normal at the intersection
    pub normal: Vector4,
    /// Point of intersection
    pub point: Vector4,
    /// Ray parameter, always inside `(0, FARFAR_AWAY)`
    pub t: f64,
}

/// Result of a scene intersection query.
///
/// `primitive` is a handle into the scene's primitive list; `None` marks the
/// "no hit" sentinel and the other fields are then meaningless.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitResult {
    pub normal: Vector4,
    pub point: Vector4,
    pub t: f64,
    pub primitive: Option<PrimitiveId>,
}

impl HitResult {
    /// The "no hit" sentinel.
    pub const NONE: HitResult = HitResult {
        normal: Vector4::ZERO,
        point: Vector4::ZERO,
        t: FARFAR_AWAY,
        primitive: None,
    };

    /// Attach a primitive handle to a shape hit.
    pub fn new(hit: SurfaceHit, primitive: PrimitiveId) -> Self {
        Self {
            normal: hit.normal,
            point: hit.point,
            t: hit.t,
            primitive: Some(primitive),
        }
    }

    /// True unless this is the sentinel.
    #[inline]
    pub fn is_hit(&self) -> bool {
        self.primitive.is_some()
    }
}

impl Default for HitResult {
    fn default() -> Self {
        Self::NONE
    }
}

/// Trait for shapes that can be hit by rays.
pub trait Intersect {
    /// Nearest forward intersection, or `None`.
    ///
    /// Implementations only return hits with `t` strictly inside
    /// `(0, FARFAR_AWAY)`.
    fn intersect_by_ray(&self, ray: &Ray) -> Option<SurfaceHit>;
}
