//! TinyRay math types.
//!
//! Homogeneous vectors, rays, parametric intervals and the view-plane camera
//! shared by the scene description and the tracer.

// Re-export glam for convenience
pub use glam::*;

mod vector;
mod ray;
mod interval;
mod camera;

pub use vector::{Vector4, NORMALISE_EPSILON};
pub use ray::{Ray, FARFAR_AWAY};
pub use interval::Interval;
pub use camera::Camera;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_and_direction() {
        let p = Vector4::point(1.0, 2.0, 3.0);
        let d = Vector4::direction(1.0, 2.0, 3.0);
        assert_eq!(p.w(), 1.0);
        assert_eq!(d.w(), 0.0);
        assert_eq!(p - p, Vector4::ZERO);
    }

    #[test]
    fn test_point_difference_is_direction() {
        let a = Vector4::point(4.0, 5.0, 6.0);
        let b = Vector4::point(1.0, 2.0, 3.0);
        assert_eq!(a - b, Vector4::direction(3.0, 3.0, 3.0));
    }
}
