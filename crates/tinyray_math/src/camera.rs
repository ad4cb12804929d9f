use glam::DVec3;

use crate::Vector4;

/// Pinhole camera with an explicit view plane.
///
/// The view plane is centred on `view_centre`, `focal_length` in front of the
/// eye along `view`. `right` and `up` span the plane. All basis vectors are
/// unit directions (`w = 0`); `position` and `view_centre` are points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    position: Vector4,
    up: Vector4,
    right: Vector4,
    view: Vector4,
    view_centre: Vector4,
    focal_length: f64,
}

impl Camera {
    /// Create a camera at `position` looking towards `target`.
    ///
    /// `up_hint` only needs to be roughly perpendicular to the view direction;
    /// the returned basis is orthonormal.
    pub fn look_at(position: DVec3, target: DVec3, up_hint: DVec3, focal_length: f64) -> Self {
        let view = (target - position).normalize();
        let right = view.cross(up_hint).normalize();
        let up = right.cross(view);

        Self {
            position: Vector4::from_point(position),
            up: Vector4::from_direction(up),
            right: Vector4::from_direction(right),
            view: Vector4::from_direction(view),
            view_centre: Vector4::from_point(position + view * focal_length),
            focal_length,
        }
    }

    /// Eye position.
    #[inline]
    pub fn position(&self) -> Vector4 {
        self.position
    }

    #[inline]
    pub fn up_vector(&self) -> Vector4 {
        self.up
    }

    #[inline]
    pub fn right_vector(&self) -> Vector4 {
        self.right
    }

    #[inline]
    pub fn view_vector(&self) -> Vector4 {
        self.view
    }

    /// Centre of the view plane.
    #[inline]
    pub fn view_centre(&self) -> Vector4 {
        self.view_centre
    }

    /// Distance from the eye to the view plane.
    #[inline]
    pub fn focal_length(&self) -> f64 {
        self.focal_length
    }
}

impl Default for Camera {
    /// Eye at `(0, 0, 10)` looking at the origin, +Y up, focal length 1.
    fn default() -> Self {
        Self::look_at(DVec3::new(0.0, 0.0, 10.0), DVec3::ZERO, DVec3::Y, 1.0)
    }
}
