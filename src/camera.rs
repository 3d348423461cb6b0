//! Look-at camera for the transform pipeline.
//!
//! # Coordinate System
//!
//! Uses a **right-handed** basis derived from eye/center/up:
//! - back: from the look-at center toward the eye
//! - right: up × back
//! - up: back × right (re-orthogonalized)
//!
//! The projection is a single-term perspective approximation: an identity
//! matrix whose (3, 2) entry encodes the perspective divisor −zoom/focus.
//! It is not a full frustum projection and performs no clipping.

use crate::math::matrix::Matrix;
use crate::math::vec3::Vec3;

/// A camera positioned at `eye`, looking at `center`, with `up` as the
/// roll hint.
///
/// `eye − center` and `up` must not be parallel; a degenerate basis is a
/// caller bug and fails an assertion in [`Camera::view`].
#[derive(Debug, Clone)]
pub struct Camera {
    pub eye: Vec3,
    pub center: Vec3,
    pub up: Vec3,
    zoom: f32,
    focus: f32,
}

const DEFAULT_ZOOM: f32 = 1.0;
const DEFAULT_FOCUS: f32 = 4.0;

impl Camera {
    /// Creates a camera with the default zoom (1.0) and focal distance (4.0).
    pub fn new(eye: Vec3, center: Vec3, up: Vec3) -> Self {
        Self {
            eye,
            center,
            up,
            zoom: DEFAULT_ZOOM,
            focus: DEFAULT_FOCUS,
        }
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn focus(&self) -> f32 {
        self.focus
    }

    /// Multiplies the zoom factor in place.
    ///
    /// No bounds are enforced: a zero or negative factor produces a
    /// degenerate projection.
    pub fn change_zoom(&mut self, factor: f32) {
        self.zoom *= factor;
    }

    /// Computes the view matrix.
    ///
    /// Derives the orthonormal camera basis and assembles
    /// rotation-by-basis-rows composed with translation by −eye.
    pub fn view(&self) -> Matrix {
        let back = (self.eye - self.center).normalize();
        let cross = self.up.cross(back);
        assert!(
            cross.magnitude() > f32::EPSILON,
            "camera up vector is parallel to the view direction"
        );
        let right = cross.normalize();
        let up = back.cross(right).normalize();

        let mut rotation = Matrix::identity(4);
        for (row, axis) in [right, up, back].into_iter().enumerate() {
            rotation.set(row, 0, axis.x);
            rotation.set(row, 1, axis.y);
            rotation.set(row, 2, axis.z);
        }

        let mut translation = Matrix::identity(4);
        translation.set(0, 3, -self.eye.x);
        translation.set(1, 3, -self.eye.y);
        translation.set(2, 3, -self.eye.z);

        rotation * translation
    }

    /// Computes the projection matrix: identity with entry (3, 2) set to
    /// −zoom/focus.
    pub fn projection(&self) -> Matrix {
        let mut p = Matrix::identity(4);
        p.set(3, 2, -self.zoom / self.focus);
        p
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::matrix::{embed, project};
    use approx::assert_relative_eq;

    #[test]
    fn view_maps_center_onto_negative_z_axis() {
        let camera = Camera::new(Vec3::new(0.0, 0.0, 3.0), Vec3::ZERO, Vec3::UP);
        let center = project(&(camera.view() * embed(Vec3::ZERO)));
        assert_relative_eq!(center.x, 0.0, epsilon = 1e-6);
        assert_relative_eq!(center.y, 0.0, epsilon = 1e-6);
        // The basis looks down -z, so the center sits 3 units in front
        assert_relative_eq!(center.z, -3.0, epsilon = 1e-6);
    }

    #[test]
    fn view_keeps_eye_at_origin() {
        let camera = Camera::new(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO, Vec3::UP);
        let eye = project(&(camera.view() * embed(camera.eye)));
        assert_relative_eq!(eye.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(eye.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(eye.z, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn projection_encodes_perspective_divisor() {
        let mut camera = Camera::new(Vec3::new(0.0, 0.0, 1.0), Vec3::ZERO, Vec3::UP);
        assert_relative_eq!(camera.projection().get(3, 2), -1.0 / 4.0);

        camera.change_zoom(2.0);
        assert_relative_eq!(camera.projection().get(3, 2), -2.0 / 4.0);
    }

    #[test]
    fn change_zoom_compounds() {
        let mut camera = Camera::new(Vec3::new(0.0, 0.0, 1.0), Vec3::ZERO, Vec3::UP);
        camera.change_zoom(2.0);
        camera.change_zoom(0.5);
        assert_relative_eq!(camera.zoom(), 1.0);
    }

    #[test]
    #[should_panic(expected = "parallel")]
    fn degenerate_basis_is_rejected() {
        let camera = Camera::new(Vec3::new(0.0, 1.0, 0.0), Vec3::ZERO, Vec3::UP);
        let _ = camera.view();
    }
}
