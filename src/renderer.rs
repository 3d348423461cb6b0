//! Mesh rendering pipeline.
//!
//! Walks every face of a model through the full transform chain
//! (embed → viewport·projection·view → perspective divide → integer
//! rounding), computes a flat per-face light intensity, culls back-facing
//! and unlit faces, and hands surviving faces to the rasterizer.

use tracing::debug;

use crate::camera::Camera;
use crate::framebuffer::Framebuffer;
use crate::math::matrix::{embed, project};
use crate::math::vec3::Vec3;
use crate::model::Model;
use crate::rasterizer;
use crate::viewport::viewport;

/// Renders `model` into a freshly allocated framebuffer of the given size.
///
/// The geometry lands in the centered sub-rectangle covering 3/4 of each
/// framebuffer dimension.
pub fn render_mesh(
    model: &Model,
    camera: &Camera,
    light_dir: Vec3,
    width: u32,
    height: u32,
) -> Framebuffer {
    let mut fb = Framebuffer::new(width, height);
    render_mesh_into(model, camera, light_dir, &mut fb);
    fb
}

/// Renders `model` into an existing framebuffer.
///
/// Faces are processed in mesh order; overlaps are resolved per pixel by
/// the depth test, so later faces only overwrite where they are strictly
/// closer. A model with no faces leaves the framebuffer untouched.
pub fn render_mesh_into(model: &Model, camera: &Camera, light_dir: Vec3, fb: &mut Framebuffer) {
    let w = fb.width() as i32;
    let h = fb.height() as i32;
    let transform = viewport(w / 8, h / 8, w * 3 / 4, h * 3 / 4) * camera.projection() * camera.view();

    let mut drawn = 0usize;
    for i in 0..model.face_count() {
        let face = model.face_vertex_indices(i);
        let face_uv = model.face_uv_indices(i);

        let mut screen = [Vec3::ZERO; 3];
        let mut world = [Vec3::ZERO; 3];
        for j in 0..3 {
            let v = model.vertex(face[j]);
            world[j] = v;

            let clip = &transform * &embed(v);
            let s = project(&clip);
            screen[j] = Vec3::new(s.x.round(), s.y.round(), s.z.round());
        }

        let normal = (world[2] - world[0]).cross(world[1] - world[0]).normalize();
        let intensity = normal.dot(light_dir);
        if intensity <= 0.0 {
            continue;
        }

        let uvs = [
            model.uv(face_uv[0]),
            model.uv(face_uv[1]),
            model.uv(face_uv[2]),
        ];
        rasterizer::fill_triangle(screen, uvs, intensity, |uv| model.sample_diffuse(uv), fb);
        drawn += 1;
    }

    debug!(faces = model.face_count(), drawn, "mesh pass complete");
}
