//! Material-driven partitioning of one shape into triangle meshes.

use cgmath::Vector3;
use rand::Rng;

use crate::attributes::{MaterialDesc, Shape};
use crate::dedup::VertexDeduplicator;
use crate::error::LoadError;
use crate::mesh::TriangleMesh;

/// One non-empty per-material mesh, plus the texture path its material
/// named (empty when there is none) for the assembler to resolve.
pub struct PartitionedMesh {
    pub mesh: TriangleMesh,
    pub diffuse_texture: String,
}

/// Splits `shape` into one mesh per distinct material id, in discovery
/// order over the shape's faces.
///
/// Each partition gets a fresh [`VertexDeduplicator`] and keeps only its own
/// faces, in original face order. A material id reads its diffuse color from
/// `materials` (out-of-table ids are [`LoadError::IndexOutOfRange`]); faces
/// without a material draw a pseudo-random color from `rng`. Partitions that
/// end up with zero vertices are discarded.
pub fn partition_shape(
    shape: &Shape,
    materials: &[MaterialDesc],
    rng: &mut impl Rng,
) -> Result<Vec<PartitionedMesh>, LoadError> {
    let mut material_ids: Vec<Option<usize>> = Vec::new();
    for face in &shape.faces {
        if !material_ids.contains(&face.material_id) {
            material_ids.push(face.material_id);
        }
    }

    let mut partitions = Vec::new();
    for material_id in material_ids {
        let mut dedup = VertexDeduplicator::new(shape);
        for face in shape.faces.iter().filter(|f| f.material_id == material_id) {
            let triangle = [
                dedup.insert(face.corners[0])?,
                dedup.insert(face.corners[1])?,
                dedup.insert(face.corners[2])?,
            ];
            dedup.add_triangle(triangle);
        }
        if dedup.vertex_count() == 0 {
            continue;
        }

        let mut mesh = dedup.finish();
        let diffuse_texture = match material_id {
            Some(id) => {
                let material = materials.get(id).ok_or(LoadError::IndexOutOfRange {
                    what: "material",
                    index: id,
                    len: materials.len(),
                })?;
                mesh.diffuse = material.diffuse;
                material.diffuse_texture.clone()
            }
            None => {
                mesh.diffuse = random_color(rng);
                String::new()
            }
        };
        partitions.push(PartitionedMesh {
            mesh,
            diffuse_texture,
        });
    }
    Ok(partitions)
}

fn random_color(rng: &mut impl Rng) -> Vector3<f32> {
    Vector3::new(
        rng.random_range(0.0..1.0),
        rng.random_range(0.0..1.0),
        rng.random_range(0.0..1.0),
    )
}
