//! Parser-facing data model and the `tobj` adapter.
//!
//! The OBJ text syntax itself is the parser collaborator's business; this
//! module lowers its output — flat attribute arrays plus per-corner index
//! triples — into the typed shapes the partitioner consumes.

use cgmath::{Vector2, Vector3};

/// Identity of one polygon corner: the (position, normal, texcoord) index
/// triple from the source file. Two corners with equal triples are the same
/// vertex; comparison is exact, never geometric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Corner {
    pub position: u32,
    pub normal: Option<u32>,
    pub texcoord: Option<u32>,
}

/// One triangulated face: a corner triple and the material it was drawn
/// with (`None` = no material).
#[derive(Debug, Clone, Copy)]
pub struct Face {
    pub corners: [Corner; 3],
    pub material_id: Option<usize>,
}

/// One shape with its attribute tables and ordered face list.
#[derive(Debug, Default)]
pub struct Shape {
    pub name: String,
    pub positions: Vec<Vector3<f32>>,
    pub normals: Vec<Vector3<f32>>,
    pub texcoords: Vec<Vector2<f32>>,
    pub faces: Vec<Face>,
}

/// Material entry as the parser reports it. An empty `diffuse_texture`
/// means the material names no texture.
#[derive(Debug, Clone)]
pub struct MaterialDesc {
    pub name: String,
    pub diffuse: Vector3<f32>,
    pub diffuse_texture: String,
}

/// The parser collaborator's full output for one scene file.
#[derive(Debug, Default)]
pub struct ParsedObj {
    pub shapes: Vec<Shape>,
    pub materials: Vec<MaterialDesc>,
}

/// Lowers `tobj` output into the crate's data model.
///
/// `tobj` splits models whenever the active material changes, so every face
/// of one model carries that model's material id.
pub fn from_tobj(models: Vec<tobj::Model>, materials: Vec<tobj::Material>) -> ParsedObj {
    let shapes = models.into_iter().map(lower_model).collect();
    let materials = materials.into_iter().map(lower_material).collect();
    ParsedObj { shapes, materials }
}

fn lower_model(model: tobj::Model) -> Shape {
    let mesh = model.mesh;
    let material_id = mesh.material_id;

    let mut faces = Vec::with_capacity(mesh.indices.len() / 3);
    for (face, positions) in mesh.indices.chunks_exact(3).enumerate() {
        let corner = |k: usize| Corner {
            position: positions[k],
            normal: mesh.normal_indices.get(face * 3 + k).copied(),
            texcoord: mesh.texcoord_indices.get(face * 3 + k).copied(),
        };
        faces.push(Face {
            corners: [corner(0), corner(1), corner(2)],
            material_id,
        });
    }

    Shape {
        name: model.name,
        positions: to_vec3(&mesh.positions),
        normals: to_vec3(&mesh.normals),
        texcoords: to_vec2(&mesh.texcoords),
        faces,
    }
}

fn lower_material(material: tobj::Material) -> MaterialDesc {
    let diffuse = material
        .diffuse
        .map(|d| Vector3::new(d[0], d[1], d[2]))
        .unwrap_or_else(|| Vector3::new(0.8, 0.8, 0.8));
    MaterialDesc {
        name: material.name,
        diffuse,
        diffuse_texture: material.diffuse_texture.unwrap_or_default(),
    }
}

fn to_vec3(flat: &[f32]) -> Vec<Vector3<f32>> {
    flat.chunks_exact(3)
        .map(|c| Vector3::new(c[0], c[1], c[2]))
        .collect()
}

fn to_vec2(flat: &[f32]) -> Vec<Vector2<f32>> {
    flat.chunks_exact(2)
        .map(|c| Vector2::new(c[0], c[1]))
        .collect()
}
