//! # obj-import
//!
//! Imports a Wavefront OBJ scene and converts it into renderer-ready
//! geometry: per-material triangle meshes with deduplicated vertex
//! attributes, decoded diffuse textures, and a model-wide bounding box.
//!
//! ## Pipeline
//!
//! - **Parsing** is delegated to `tobj`, which triangulates faces and
//!   yields flat attribute arrays plus per-corner index triples.
//! - **Partitioning** ([`partition`]) groups each shape's faces by material
//!   id, one mesh per distinct id.
//! - **Deduplication** ([`dedup`]) collapses identical (position, normal,
//!   texcoord) index triples to one vertex per partition.
//! - **Textures** ([`texture`]) are decoded lazily, cached by raw path, and
//!   flipped into the expected row order; failures are non-fatal.
//! - **Assembly** ([`loader`]) folds the bounding box over every vertex and
//!   hands back an immutable [`Model`].
//!
//! ## Usage
//!
//! ```no_run
//! let model = obj_import::load_obj("scenes/sponza.obj")?;
//! for mesh in &model.meshes {
//!     println!("{} triangles", mesh.triangle_count());
//! }
//! # Ok::<(), obj_import::LoadError>(())
//! ```

pub mod attributes;
pub mod bounds;
pub mod dedup;
pub mod error;
pub mod loader;
pub mod mesh;
pub mod partition;
pub mod texture;

// Re-export the main types for convenience
pub use bounds::Aabb;
pub use error::LoadError;
pub use loader::{load_obj, load_obj_with_seed, Model};
pub use mesh::TriangleMesh;
pub use texture::{Texture, TextureId};
