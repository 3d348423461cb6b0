//! OBJ mesh provider.
//!
//! A [`Model`] owns the vertex positions, UV coordinates, and per-face index
//! lists the renderer consumes, plus an optional diffuse texture. Loading
//! goes through `tobj`; the texture is looked up next to the OBJ file using
//! the `<stem>_diffuse.tga` naming convention.

use std::fmt;
use std::path::Path;

use tracing::{info, warn};

use crate::colors;
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::texture::Texture;

/// Diffuse color reported when no texture is present. Opaque white keeps
/// the lighting intensity visible in the rendered output.
const DEFAULT_DIFFUSE: u32 = colors::WHITE;

/// Error raised while constructing a [`Model`] from disk.
#[derive(Debug)]
pub enum LoadError {
    /// The OBJ file could not be read or parsed.
    Obj(tobj::LoadError),
    /// A diffuse texture file exists but could not be decoded.
    Image(image::ImageError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Obj(e) => write!(f, "failed to load OBJ: {e}"),
            LoadError::Image(e) => write!(f, "failed to decode texture: {e}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoadError::Obj(e) => Some(e),
            LoadError::Image(e) => Some(e),
        }
    }
}

impl From<tobj::LoadError> for LoadError {
    fn from(e: tobj::LoadError) -> Self {
        LoadError::Obj(e)
    }
}

impl From<image::ImageError> for LoadError {
    fn from(e: image::ImageError) -> Self {
        LoadError::Image(e)
    }
}

/// A triangle mesh with positions, UVs, parallel per-face index triples,
/// and an optional diffuse texture.
pub struct Model {
    positions: Vec<Vec3>,
    texcoords: Vec<Vec2>,
    faces: Vec<[usize; 3]>,
    uv_faces: Vec<[usize; 3]>,
    diffuse: Option<Texture>,
}

impl Model {
    /// Loads a model from an OBJ file.
    ///
    /// All meshes in the file are merged into one index space. A diffuse
    /// texture named `<stem>_diffuse.tga` is loaded if present next to the
    /// OBJ; a missing texture is not an error ([`Model::sample_diffuse`]
    /// falls back to a default color), but an unreadable one is.
    pub fn from_obj<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let (meshes, _materials) = tobj::load_obj(
            path,
            &tobj::LoadOptions {
                triangulate: true,
                single_index: false,
                ..Default::default()
            },
        )?;

        let mut positions = Vec::new();
        let mut texcoords = Vec::new();
        let mut faces = Vec::new();
        let mut uv_faces = Vec::new();

        for mesh in meshes.into_iter().map(|m| m.mesh) {
            let vertex_base = positions.len();
            let uv_base = texcoords.len();

            positions.extend(
                mesh.positions
                    .chunks_exact(3)
                    .map(|p| Vec3::new(p[0], p[1], p[2])),
            );
            texcoords.extend(mesh.texcoords.chunks_exact(2).map(|t| Vec2::new(t[0], t[1])));

            faces.extend(mesh.indices.chunks_exact(3).map(|f| {
                [
                    vertex_base + f[0] as usize,
                    vertex_base + f[1] as usize,
                    vertex_base + f[2] as usize,
                ]
            }));

            if mesh.texcoord_indices.len() == mesh.indices.len() {
                uv_faces.extend(mesh.texcoord_indices.chunks_exact(3).map(|f| {
                    [
                        uv_base + f[0] as usize,
                        uv_base + f[1] as usize,
                        uv_base + f[2] as usize,
                    ]
                }));
            } else {
                // Mesh without texture coordinates: point every corner at a
                // single placeholder UV so the face lists stay parallel.
                let placeholder = texcoords.len();
                texcoords.push(Vec2::ZERO);
                uv_faces.extend(
                    mesh.indices
                        .chunks_exact(3)
                        .map(|_| [placeholder, placeholder, placeholder]),
                );
            }
        }

        info!(
            vertices = positions.len(),
            faces = faces.len(),
            uvs = texcoords.len(),
            "loaded OBJ model"
        );

        let diffuse = Self::load_diffuse(path)?;

        Ok(Self {
            positions,
            texcoords,
            faces,
            uv_faces,
            diffuse,
        })
    }

    /// Builds a model directly from its parts.
    ///
    /// The two face lists must be parallel: `faces[i]` and `uv_faces[i]`
    /// describe the same triangle.
    pub fn from_parts(
        positions: Vec<Vec3>,
        texcoords: Vec<Vec2>,
        faces: Vec<[usize; 3]>,
        uv_faces: Vec<[usize; 3]>,
        diffuse: Option<Texture>,
    ) -> Self {
        assert_eq!(
            faces.len(),
            uv_faces.len(),
            "face and UV-face lists must be parallel"
        );
        Self {
            positions,
            texcoords,
            faces,
            uv_faces,
            diffuse,
        }
    }

    fn load_diffuse(obj_path: &Path) -> Result<Option<Texture>, image::ImageError> {
        let Some(stem) = obj_path.file_stem() else {
            return Ok(None);
        };
        let tex_path = obj_path.with_file_name(format!("{}_diffuse.tga", stem.to_string_lossy()));
        if !tex_path.exists() {
            warn!(path = %tex_path.display(), "no diffuse texture found, using default color");
            return Ok(None);
        }
        Ok(Some(Texture::from_file(tex_path)?))
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn vertex(&self, i: usize) -> Vec3 {
        self.positions[i]
    }

    pub fn uv(&self, i: usize) -> Vec2 {
        self.texcoords[i]
    }

    /// The vertex indices of face `i`, in winding order.
    pub fn face_vertex_indices(&self, i: usize) -> [usize; 3] {
        self.faces[i]
    }

    /// The UV indices of face `i`, parallel to [`Model::face_vertex_indices`].
    pub fn face_uv_indices(&self, i: usize) -> [usize; 3] {
        self.uv_faces[i]
    }

    /// Samples the diffuse texture at `uv`, or returns the default diffuse
    /// color when no texture is loaded.
    pub fn sample_diffuse(&self, uv: Vec2) -> u32 {
        match &self.diffuse {
            Some(texture) => texture.sample(uv.x, uv.y),
            None => DEFAULT_DIFFUSE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_triangle() -> Model {
        Model::from_parts(
            vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, 1.0, 0.0),
            ],
            vec![Vec2::ZERO],
            vec![[0, 1, 2]],
            vec![[0, 0, 0]],
            None,
        )
    }

    #[test]
    fn from_parts_exposes_counts_and_indices() {
        let model = unit_triangle();
        assert_eq!(model.vertex_count(), 3);
        assert_eq!(model.face_count(), 1);
        assert_eq!(model.face_vertex_indices(0), [0, 1, 2]);
        assert_eq!(model.face_uv_indices(0), [0, 0, 0]);
        assert_eq!(model.vertex(1), Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn untextured_model_reports_default_diffuse() {
        let model = unit_triangle();
        assert_eq!(model.sample_diffuse(Vec2::new(0.5, 0.5)), DEFAULT_DIFFUSE);
    }

    #[test]
    fn textured_model_samples_its_texture() {
        let model = Model::from_parts(
            vec![Vec3::ZERO],
            vec![Vec2::ZERO],
            vec![],
            vec![],
            Some(Texture::solid(colors::RED)),
        );
        assert_eq!(model.sample_diffuse(Vec2::new(0.25, 0.75)), colors::RED);
    }

    #[test]
    #[should_panic(expected = "parallel")]
    fn mismatched_face_lists_are_rejected() {
        let _ = Model::from_parts(vec![Vec3::ZERO], vec![Vec2::ZERO], vec![[0, 0, 0]], vec![], None);
    }
}
