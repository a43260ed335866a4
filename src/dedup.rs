//! Per-partition vertex deduplication.

use std::collections::HashMap;

use cgmath::{Vector2, Vector3, Zero};

use crate::attributes::{Corner, Shape};
use crate::error::LoadError;
use crate::mesh::TriangleMesh;

/// Collapses identical corner identities to one local vertex while building
/// a [`TriangleMesh`]'s parallel attribute arrays.
///
/// One deduplicator serves exactly one (shape, material) partition; corner
/// identities from different partitions never meet because the map is
/// discarded with the deduplicator once the mesh is finished.
pub struct VertexDeduplicator<'a> {
    shape: &'a Shape,
    known: HashMap<Corner, u32>,
    mesh: TriangleMesh,
}

impl<'a> VertexDeduplicator<'a> {
    pub fn new(shape: &'a Shape) -> Self {
        VertexDeduplicator {
            shape,
            known: HashMap::new(),
            mesh: TriangleMesh::new(),
        }
    }

    /// Returns the local vertex index for `corner`, inserting it first if it
    /// has not been seen in this partition.
    ///
    /// A fresh insertion appends the referenced position, then keeps the
    /// normal and texcoord arrays exactly vertex-count long whenever they
    /// are non-empty; vertices without an explicit normal or texcoord are
    /// padded with the zero vector. Any source index outside its table
    /// yields [`LoadError::IndexOutOfRange`].
    pub fn insert(&mut self, corner: Corner) -> Result<u32, LoadError> {
        if let Some(&id) = self.known.get(&corner) {
            return Ok(id);
        }

        let position = fetch("position", &self.shape.positions, corner.position)?;
        let normal = corner
            .normal
            .map(|i| fetch("normal", &self.shape.normals, i))
            .transpose()?;
        let texcoord = corner
            .texcoord
            .map(|i| fetch("texcoord", &self.shape.texcoords, i))
            .transpose()?;

        let id = self.mesh.positions.len() as u32;
        self.known.insert(corner, id);
        self.mesh.positions.push(position);
        let count = self.mesh.positions.len();

        if let Some(normal) = normal {
            self.mesh.normals.resize(count - 1, Vector3::zero());
            self.mesh.normals.push(normal);
        }
        if let Some(texcoord) = texcoord {
            self.mesh.texcoords.resize(count - 1, Vector2::zero());
            self.mesh.texcoords.push(texcoord);
        }
        // Keep non-empty attribute arrays exactly vertex-count long even
        // when this corner lacks the attribute.
        if !self.mesh.normals.is_empty() {
            self.mesh.normals.resize(count, Vector3::zero());
        }
        if !self.mesh.texcoords.is_empty() {
            self.mesh.texcoords.resize(count, Vector2::zero());
        }

        Ok(id)
    }

    pub fn add_triangle(&mut self, indices: [u32; 3]) {
        self.mesh.indices.push(indices);
    }

    pub fn vertex_count(&self) -> usize {
        self.mesh.vertex_count()
    }

    /// Finalizes the partition's mesh, discarding the identity map.
    pub fn finish(self) -> TriangleMesh {
        self.mesh
    }
}

fn fetch<T: Copy>(what: &'static str, table: &[T], index: u32) -> Result<T, LoadError> {
    table
        .get(index as usize)
        .copied()
        .ok_or(LoadError::IndexOutOfRange {
            what,
            index: index as usize,
            len: table.len(),
        })
}
