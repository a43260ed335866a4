//! Scene assembly: parser → partitioner → texture loader → [`Model`].

use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::attributes;
use crate::bounds::Aabb;
use crate::error::LoadError;
use crate::mesh::TriangleMesh;
use crate::partition::partition_shape;
use crate::texture::{Texture, TextureLoader};

/// Seed for the fallback colors of material-less faces. `load_obj` always
/// uses this one so repeated loads of the same file color identically; use
/// [`load_obj_with_seed`] to pick your own sequence.
const FALLBACK_COLOR_SEED: u64 = 0x0b1ec7;

/// A fully assembled scene: the sole interface downstream render stages
/// depend on.
///
/// The model exclusively owns its meshes and textures. It is never mutated
/// after the load call returns, so concurrent reads are safe.
#[derive(Debug)]
pub struct Model {
    pub meshes: Vec<TriangleMesh>,
    pub textures: Vec<Texture>,
    pub bounds: Aabb,
}

/// Loads the OBJ scene at `path` into a [`Model`].
///
/// The material search directory is derived from `path` (its parent
/// directory; empty when the path has no separator), never supplied
/// separately. Unreadable files yield [`LoadError::Io`] and malformed ones
/// [`LoadError::Parse`]; both abort the load with no partial model. Texture
/// problems never abort — the affected mesh just keeps its diffuse color.
pub fn load_obj(path: impl AsRef<Path>) -> Result<Model, LoadError> {
    load_obj_with_seed(path, FALLBACK_COLOR_SEED)
}

/// Same as [`load_obj`], with a caller-chosen seed for the pseudo-random
/// colors assigned to material-less faces.
pub fn load_obj_with_seed(path: impl AsRef<Path>, color_seed: u64) -> Result<Model, LoadError> {
    let path = path.as_ref();
    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));

    let (models, materials) = tobj::load_obj(
        path,
        &tobj::LoadOptions {
            triangulate: true,
            single_index: false,
            ..Default::default()
        },
    )
    .map_err(|err| lower_load_error(path, err))?;

    let materials = materials.unwrap_or_else(|err| {
        log::warn!("no usable MTL companion for {}: {err}", path.display());
        Vec::new()
    });

    let parsed = attributes::from_tobj(models, materials);
    log::info!(
        "parsed {}: {} shapes, {} materials",
        path.display(),
        parsed.shapes.len(),
        parsed.materials.len()
    );

    let mut rng = StdRng::seed_from_u64(color_seed);
    let mut texture_loader = TextureLoader::new();
    let mut meshes = Vec::new();
    for shape in &parsed.shapes {
        for partition in partition_shape(shape, &parsed.materials, &mut rng)? {
            let mut mesh = partition.mesh;
            if !partition.diffuse_texture.is_empty() {
                mesh.diffuse_texture = texture_loader.load(&partition.diffuse_texture, base_dir);
            }
            meshes.push(mesh);
        }
    }

    let mut bounds = Aabb::empty();
    for mesh in &meshes {
        for &position in &mesh.positions {
            bounds.extend(position);
        }
    }

    log::info!("assembled {} meshes from {}", meshes.len(), path.display());
    Ok(Model {
        meshes,
        textures: texture_loader.into_textures(),
        bounds,
    })
}

fn lower_load_error(path: &Path, err: tobj::LoadError) -> LoadError {
    let path = path.display().to_string();
    match err {
        tobj::LoadError::OpenFileFailed | tobj::LoadError::ReadError => LoadError::Io {
            path,
            message: err.to_string(),
        },
        other => LoadError::Parse {
            path,
            message: other.to_string(),
        },
    }
}
