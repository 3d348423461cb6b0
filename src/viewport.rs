//! Viewport transform: clip cube to pixel rectangle.

use crate::math::matrix::Matrix;

/// Depth values after the viewport transform land in [0, DEPTH_SCALE].
pub const DEPTH_SCALE: f32 = 255.0;

/// Builds a matrix mapping the [-1, 1] cube into the pixel rectangle of
/// width `w`, height `h` anchored at `(x, y)`, with depth scaled into
/// [0, [`DEPTH_SCALE`]].
pub fn viewport(x: i32, y: i32, w: i32, h: i32) -> Matrix {
    let mut m = Matrix::identity(4);
    m.set(0, 3, x as f32 + w as f32 / 2.0);
    m.set(1, 3, y as f32 + h as f32 / 2.0);
    m.set(2, 3, DEPTH_SCALE / 2.0);

    m.set(0, 0, w as f32 / 2.0);
    m.set(1, 1, h as f32 / 2.0);
    m.set(2, 2, DEPTH_SCALE / 2.0);

    m
}
