//! Homogeneous 4-component vector.
//!
//! `Vector4` is used both for points (`w = 1`) and directions (`w = 0`).
//! Every operation treats the fourth component as an ordinary term: the dot
//! product, length and normalisation all include `w`. The difference of two
//! points is therefore a direction, and rays built from point differences
//! behave like plain 3D vectors.

use std::ops::{Add, Index, IndexMut, Mul, Sub};

use glam::{DVec3, DVec4};

/// Lengths at or below this are treated as zero by [`Vector4::normalise`].
pub const NORMALISE_EPSILON: f64 = 1.0e-8;

/// A homogeneous `(x, y, z, w)` vector of doubles.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Vector4(DVec4);

impl Vector4 {
    /// All four components zero.
    pub const ZERO: Vector4 = Vector4(DVec4::ZERO);

    /// Create a vector from all four components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self(DVec4::new(x, y, z, w))
    }

    /// Create a point (`w = 1`).
    #[inline]
    pub const fn point(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 1.0)
    }

    /// Create a direction (`w = 0`).
    #[inline]
    pub const fn direction(x: f64, y: f64, z: f64) -> Self {
        Self::new(x, y, z, 0.0)
    }

    /// Point from a 3D position.
    #[inline]
    pub fn from_point(p: DVec3) -> Self {
        Self(p.extend(1.0))
    }

    /// Direction from a 3D vector.
    #[inline]
    pub fn from_direction(d: DVec3) -> Self {
        Self(d.extend(0.0))
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.0.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.0.y
    }

    #[inline]
    pub fn z(&self) -> f64 {
        self.0.z
    }

    #[inline]
    pub fn w(&self) -> f64 {
        self.0.w
    }

    /// The spatial part, dropping `w`.
    #[inline]
    pub fn xyz(&self) -> DVec3 {
        self.0.truncate()
    }

    /// Dot product over all four components.
    #[inline]
    pub fn dot(&self, rhs: &Vector4) -> f64 {
        self.0.dot(rhs.0)
    }

    /// 3D cross product of the spatial parts. The result always has `w = 1`.
    #[inline]
    pub fn cross(&self, rhs: &Vector4) -> Vector4 {
        Self::from_point(self.xyz().cross(rhs.xyz()))
    }

    /// Euclidean length over all four components.
    #[inline]
    pub fn length(&self) -> f64 {
        self.0.length()
    }

    /// Squared length over all four components.
    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.0.length_squared()
    }

    /// Scale this vector to unit length in place and return the result.
    ///
    /// Vectors with length at or below [`NORMALISE_EPSILON`] are left as they are.
    pub fn normalise(&mut self) -> Vector4 {
        let length = self.length();
        if length > NORMALISE_EPSILON {
            self.0 *= 1.0 / length;
        }
        *self
    }

    /// Normalised copy; see [`Vector4::normalise`].
    #[inline]
    pub fn normalised(mut self) -> Vector4 {
        self.normalise()
    }

    /// Divide `x`, `y`, `z` by `w` and reset `w` to 1.
    ///
    /// No check is made for `w = 0`; the result then holds `inf`/`nan`.
    pub fn to_inhomogeneous(&self) -> Vector4 {
        let inv_w = 1.0 / self.0.w;
        Self::point(self.0.x * inv_w, self.0.y * inv_w, self.0.z * inv_w)
    }

    /// True when every component is finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl From<DVec4> for Vector4 {
    fn from(v: DVec4) -> Self {
        Self(v)
    }
}

impl From<Vector4> for DVec4 {
    fn from(v: Vector4) -> Self {
        v.0
    }
}

impl Add for Vector4 {
    type Output = Vector4;

    #[inline]
    fn add(self, rhs: Vector4) -> Vector4 {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Vector4 {
    type Output = Vector4;

    #[inline]
    fn sub(self, rhs: Vector4) -> Vector4 {
        Self(self.0 - rhs.0)
    }
}

/// Component-wise product.
impl Mul for Vector4 {
    type Output = Vector4;

    #[inline]
    fn mul(self, rhs: Vector4) -> Vector4 {
        Self(self.0 * rhs.0)
    }
}

impl Mul<f64> for Vector4 {
    type Output = Vector4;

    #[inline]
    fn mul(self, scale: f64) -> Vector4 {
        Self(self.0 * scale)
    }
}

impl Index<usize> for Vector4 {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.0[i]
    }
}

impl IndexMut<usize> for Vector4 {
    fn index_mut(&mut self, i: usize) -> &mut f64 {
        &mut self.0[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_component_ops() {
        let a = Vector4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vector4::new(5.0, 6.0, 7.0, 8.0);

        assert_eq!(a + b, Vector4::new(6.0, 8.0, 10.0, 12.0));
        assert_eq!(b - a, Vector4::new(4.0, 4.0, 4.0, 4.0));
        assert_eq!(a * b, Vector4::new(5.0, 12.0, 21.0, 32.0));
        assert_eq!(a * 2.0, Vector4::new(2.0, 4.0, 6.0, 8.0));
    }

    #[test]
    fn test_dot_includes_w() {
        let a = Vector4::point(1.0, 2.0, 3.0);
        let b = Vector4::point(4.0, 5.0, 6.0);
        // 4 + 10 + 18 + 1
        assert_eq!(a.dot(&b), 33.0);

        let d = Vector4::direction(4.0, 5.0, 6.0);
        assert_eq!(a.dot(&d), 32.0);
    }

    #[test]
    fn test_cross_forces_w_one() {
        let x = Vector4::direction(1.0, 0.0, 0.0);
        let y = Vector4::direction(0.0, 1.0, 0.0);
        assert_eq!(x.cross(&y), Vector4::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(y.cross(&x), Vector4::new(0.0, 0.0, -1.0, 1.0));
    }

    #[test]
    fn test_length_includes_w() {
        let p = Vector4::point(2.0, 0.0, 0.0);
        assert_eq!(p.length_squared(), 5.0);
        assert!((p.length() - 5.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_normalise_unit_length() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..1000 {
            let mut v = Vector4::new(
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-100.0..100.0),
                rng.gen_range(-1.0..1.0),
            );
            if v.length() <= NORMALISE_EPSILON {
                continue;
            }
            let returned = v.normalise();
            assert_eq!(returned, v);
            assert!((v.length() - 1.0).abs() < 1e-6, "length {}", v.length());
        }
    }

    #[test]
    fn test_normalise_tiny_vector_unchanged() {
        let mut rng = StdRng::seed_from_u64(11);

        for _ in 0..1000 {
            let original = Vector4::new(
                rng.gen_range(-4e-9..4e-9),
                rng.gen_range(-4e-9..4e-9),
                rng.gen_range(-4e-9..4e-9),
                rng.gen_range(-4e-9..4e-9),
            );
            // max length is 8e-9
            let mut v = original;
            assert_eq!(v.normalise(), original);
            assert_eq!(v, original);
        }

        let mut zero = Vector4::ZERO;
        assert_eq!(zero.normalise(), Vector4::ZERO);
    }

    #[test]
    fn test_to_inhomogeneous() {
        let v = Vector4::new(2.0, 4.0, 6.0, 2.0);
        assert_eq!(v.to_inhomogeneous(), Vector4::point(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_to_inhomogeneous_zero_w_is_not_finite() {
        let v = Vector4::direction(1.0, 0.0, -1.0);
        let h = v.to_inhomogeneous();
        assert!(h.x().is_infinite());
        assert!(h.y().is_nan());
        assert!(h.z().is_infinite());
        assert_eq!(h.w(), 1.0);
        assert!(!h.is_finite());
    }

    #[test]
    fn test_index() {
        let mut v = Vector4::point(1.0, 2.0, 3.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[3], 1.0);
        v[1] = 9.0;
        assert_eq!(v.y(), 9.0);
    }
}
