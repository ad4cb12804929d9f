use crate::{Interval, Vector4};

/// Far bound for ray parameters; intersections at or beyond it are ignored.
pub const FARFAR_AWAY: f64 = 1_000_000.0;

/// A ray with an origin point and a direction.
///
/// The direction is expected to be unit length but the type does not enforce
/// it; callers normalise before constructing. Rays are immutable once built.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    origin: Vector4,
    direction: Vector4,
}

impl Ray {
    /// Parameters accepted as a forward intersection: strictly inside `(0, FARFAR_AWAY)`.
    pub const FORWARD: Interval = Interval {
        min: 0.0,
        max: FARFAR_AWAY,
    };

    /// Create a new ray.
    #[inline]
    pub fn new(origin: Vector4, direction: Vector4) -> Self {
        Self { origin, direction }
    }

    /// Get the origin point of the ray.
    #[inline]
    pub fn origin(&self) -> Vector4 {
        self.origin
    }

    /// Get the direction vector of the ray.
    #[inline]
    pub fn direction(&self) -> Vector4 {
        self.direction
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + direction * t
    #[inline]
    pub fn at(&self, t: f64) -> Vector4 {
        self.origin + self.direction * t
    }
}
