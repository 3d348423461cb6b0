//! A CPU-based software renderer.
//!
//! This crate implements a complete software rendering pipeline with no GPU
//! involvement: a homogeneous-coordinate transform chain
//! (model → view → projection → viewport) feeding a z-buffered, texture-mapped
//! triangle rasterizer, plus an independent implicit-surface renderer that
//! sphere-traces a signed-distance-field scene. Output goes to an in-memory
//! framebuffer that can be saved as a TGA image.
//!
//! # Quick Start
//!
//! ```ignore
//! use softrast::prelude::*;
//!
//! let model = Model::from_obj("obj/head.obj")?;
//! let camera = Camera::new(Vec3::new(0.0, 0.0, 1.0), Vec3::ZERO, Vec3::UP);
//! let fb = render_mesh(&model, &camera, Vec3::new(0.0, 0.0, -1.0), 1000, 1000);
//! fb.save_tga("output.tga")?;
//! ```

pub mod camera;
pub mod colors;
pub mod framebuffer;
pub mod math;
pub mod model;
pub mod rasterizer;
pub mod raymarch;
pub mod renderer;
pub mod texture;
pub mod viewport;

// Re-export commonly needed types at crate root for convenience
pub use camera::Camera;
pub use framebuffer::Framebuffer;
pub use model::{LoadError, Model};
pub use renderer::{render_mesh, render_mesh_into};

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use softrast::prelude::*;
/// ```
pub mod prelude {
    // Camera
    pub use crate::camera::Camera;

    // Math
    pub use crate::math::matrix::{embed, project, Matrix};
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;

    // Mesh + texture collaborators
    pub use crate::model::{LoadError, Model};
    pub use crate::texture::Texture;

    // Rendering
    pub use crate::framebuffer::Framebuffer;
    pub use crate::raymarch::{render_implicit_scene, render_scene, tank_scene, Primitive, Scene};
    pub use crate::renderer::{render_mesh, render_mesh_into};
    pub use crate::viewport::viewport;
}
