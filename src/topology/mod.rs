//! Top-level module for mesh topology.
//!
//! This module provides the connectivity store and everything that reads it:
//! - strong keys for vertices and faces, canonical undirected edges
//! - [`PolyMesh`], the arena-backed store with manifold-checked mutation
//! - the incrementally maintained adjacency index
//! - lazy traversal (vertices, faces, edges) and one-ring queries
//! - boundary edges and loops, invariant validation
//!
//! Most users will construct a [`PolyMesh`] and use its inherent methods;
//! the submodules hold the iterator and helper types those methods return.

pub(crate) mod _debug_invariants;
pub mod adjacency;
pub mod boundary;
pub mod cache;
pub mod edge;
pub mod face;
pub mod key;
pub mod mesh;
pub mod traversal;
pub mod validation;

pub use adjacency::EdgeFaces;
pub use cache::InvalidateCache;
pub use edge::EdgeKey;
pub use face::FaceKind;
pub use key::{FaceKey, VertexKey};
pub use mesh::PolyMesh;
pub use traversal::{Edges, Faces, VertexRing, Vertices};

#[cfg(test)]
mod tests;
