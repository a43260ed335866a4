//! Failure taxonomy for scene import.

use thiserror::Error;

/// Errors that abort a scene load.
///
/// Every variant is fatal: the caller either receives a complete [`Model`]
/// or one of these, never a partially built scene. Texture decode problems
/// are deliberately absent — they are non-fatal, scoped to one mesh, and
/// surface as a missing texture handle plus a logged diagnostic.
///
/// [`Model`]: crate::loader::Model
#[derive(Debug, Error)]
pub enum LoadError {
    /// The scene file could not be opened or read.
    #[error("could not read OBJ file `{path}`: {message}")]
    Io { path: String, message: String },

    /// The parser rejected the scene file; `message` carries its diagnostic.
    #[error("could not parse OBJ file `{path}`: {message}")]
    Parse { path: String, message: String },

    /// A face referenced an attribute or material index beyond its table.
    #[error("{what} index {index} out of range (table holds {len})")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },
}
