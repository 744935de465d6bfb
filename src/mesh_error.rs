//! MeshError: unified error type for polymesh public APIs
//!
//! Every fallible operation reports through this type. Errors are raised
//! before any mutation is committed, so a returned `Err` always means the
//! store is exactly as it was before the call.

use thiserror::Error;

use crate::topology::edge::EdgeKey;
use crate::topology::key::{FaceKey, VertexKey};

/// Why a face loop was rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DegenerateFace {
    /// The loop is shorter than the face kind allows.
    #[error("loop has {found} vertices, at least {min} required")]
    TooFewVertices { found: usize, min: usize },
    /// A vertex key appears more than once in the loop.
    #[error("vertex {0} appears more than once in the loop")]
    RepeatedVertex(VertexKey),
}

/// Unified error type for polymesh operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// A query or deletion referenced a vertex key the store does not hold.
    #[error("vertex {0} not found")]
    VertexNotFound(VertexKey),
    /// A query or deletion referenced a face key the store does not hold.
    #[error("face {0} not found")]
    FaceNotFound(FaceKey),
    /// `add_face`/`add_line` was given an invalid loop.
    #[error("degenerate face: {0}")]
    DegenerateFace(#[from] DegenerateFace),
    /// Adding the face would make `edge` incident to a third face.
    #[error("non-manifold edge {edge}: already incident to faces {} and {}", .faces[0], .faces[1])]
    NonManifold { edge: EdgeKey, faces: [FaceKey; 2] },
    /// A construction loop referenced a coordinate index past the end.
    #[error("vertex index {index} out of range for {len} coordinates")]
    VertexIndexOutOfRange { index: usize, len: usize },
    /// A cached entity count disagrees with the registry.
    #[error("{entity} count mismatch: recorded {recorded}, found {found}")]
    CountMismatch {
        entity: &'static str,
        recorded: usize,
        found: usize,
    },
    /// The adjacency index and the face registry disagree.
    #[error("adjacency index inconsistent: {0}")]
    IncidenceMismatch(String),
}

impl MeshError {
    /// `true` for the two "key not found" variants.
    pub fn is_key_not_found(&self) -> bool {
        matches!(self, Self::VertexNotFound(_) | Self::FaceNotFound(_))
    }
}
