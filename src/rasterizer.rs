//! Barycentric triangle rasterization.
//!
//! # Algorithm Overview
//!
//! 1. Compute the triangle's screen-space bounding box, clamped to the
//!    framebuffer
//! 2. For every integer pixel in the box, solve for barycentric coordinates
//!    with a 2D cross-product construction
//! 3. A pixel is covered iff all three coordinates are ≥ 0 (edges inclusive)
//! 4. Interpolate depth and UV as barycentric-weighted sums, depth-test,
//!    sample the texture, and modulate by the face's light intensity
//!
//! Pixels are sampled at integer coordinates, so a triangle whose vertices
//! sit on integer positions covers exactly the lattice points inside it,
//! edges included. Adjacent triangles sharing an edge both claim the shared
//! pixels; the depth test decides which write survives.

use crate::colors;
use crate::framebuffer::Framebuffer;
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;

/// Cross products with a z-magnitude at or below this are treated as
/// degenerate (edge-on triangle).
const DEGENERACY_THRESHOLD: f32 = 1e-2;

/// Barycentric coordinates of point `p` relative to triangle `abc`,
/// solved in the 2D screen plane.
///
/// The weights returned correspond to vertices a, b, c in order and sum
/// to 1 for a non-degenerate triangle. When the triangle is degenerate or
/// edge-on, a sentinel with a negative first component is returned so the
/// caller's coverage test rejects the pixel.
pub fn barycentric(a: Vec3, b: Vec3, c: Vec3, p: Vec3) -> Vec3 {
    let sx = Vec3::new(c.x - a.x, b.x - a.x, a.x - p.x);
    let sy = Vec3::new(c.y - a.y, b.y - a.y, a.y - p.y);
    let u = sx.cross(sy);

    if u.z.abs() > DEGENERACY_THRESHOLD {
        Vec3::new(1.0 - (u.x + u.y) / u.z, u.y / u.z, u.x / u.z)
    } else {
        Vec3::new(-1.0, 1.0, 1.0)
    }
}

/// Fills a screen-space triangle into the framebuffer.
///
/// `points` carry integer-rounded x/y and a depth per vertex; `uvs` are the
/// matching texture coordinates in the same vertex order. `intensity` scales
/// the sampled texel per channel (the caller culls faces with intensity ≤ 0
/// before getting here). `sample` is the texture collaborator: any
/// `Fn(Vec2) -> u32`, e.g. [`crate::model::Model::sample_diffuse`].
pub fn fill_triangle<S>(
    points: [Vec3; 3],
    uvs: [Vec2; 3],
    intensity: f32,
    sample: S,
    fb: &mut Framebuffer,
) where
    S: Fn(Vec2) -> u32,
{
    let [p0, p1, p2] = points;

    // Bounding box clamped to the framebuffer; a triangle entirely outside
    // produces an empty pixel range.
    let min_x = p0.x.min(p1.x).min(p2.x).max(0.0) as i32;
    let min_y = p0.y.min(p1.y).min(p2.y).max(0.0) as i32;
    let max_x = p0.x.max(p1.x).max(p2.x).min(fb.width() as f32 - 1.0) as i32;
    let max_y = p0.y.max(p1.y).max(p2.y).min(fb.height() as f32 - 1.0) as i32;

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let p = Vec3::new(x as f32, y as f32, 0.0);
            let bc = barycentric(p0, p1, p2, p);
            if bc.x < 0.0 || bc.y < 0.0 || bc.z < 0.0 {
                continue;
            }

            let depth = p0.z * bc.x + p1.z * bc.y + p2.z * bc.z;
            let uv = uvs[0] * bc.x + uvs[1] * bc.y + uvs[2] * bc.z;
            let color = colors::scale(sample(uv), intensity);
            fb.set_pixel_with_depth(x, y, depth, color);
        }
    }
}
