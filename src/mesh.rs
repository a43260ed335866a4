//! Renderer-ready triangle mesh data.
//!
//! One [`TriangleMesh`] holds the geometry of a single (shape, material)
//! partition: parallel position/normal/texcoord arrays indexed by the
//! triangle list, plus exactly one diffuse color and optionally one diffuse
//! texture handle.

use cgmath::{Vector2, Vector3};

use crate::texture::TextureId;

/// Triangle mesh with deduplicated vertex attributes.
///
/// Invariants maintained by the loader:
/// - `normals` is empty or exactly `positions.len()` long; same for
///   `texcoords` — the arrays are never ragged.
/// - every index in `indices` is `< positions.len()`.
/// - `diffuse` is always set; `diffuse_texture` is `Some` only when the
///   mesh's material named a texture that decoded successfully.
#[derive(Debug, Clone)]
pub struct TriangleMesh {
    pub positions: Vec<Vector3<f32>>,
    pub normals: Vec<Vector3<f32>>,
    pub texcoords: Vec<Vector2<f32>>,
    pub indices: Vec<[u32; 3]>,
    pub diffuse: Vector3<f32>,
    pub diffuse_texture: Option<TextureId>,
}

impl TriangleMesh {
    /// Creates an empty mesh with a neutral grey diffuse.
    pub fn new() -> Self {
        TriangleMesh {
            positions: Vec::new(),
            normals: Vec::new(),
            texcoords: Vec::new(),
            indices: Vec::new(),
            diffuse: Vector3::new(0.8, 0.8, 0.8),
            diffuse_texture: None,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len()
    }
}

impl Default for TriangleMesh {
    fn default() -> Self {
        Self::new()
    }
}
