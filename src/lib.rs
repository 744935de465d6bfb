#![cfg_attr(docsrs, feature(doc_cfg))]
//! # polymesh
//!
//! polymesh is a polygonal mesh library with arbitrary vertex valence and
//! non-triangular faces. It keeps a manifold connectivity store under
//! incremental mutation, answers topological queries (adjacency, vertex rings,
//! boundary loops) without reallocating the store, and derives new meshes from
//! existing ones, notably the topological dual.
//!
//! ## Features
//! - [`PolyMesh`](topology::PolyMesh): arena-backed store with stable,
//!   never-reused integer keys and manifold-checked `add_face`
//! - Lazy enumeration of vertices, faces and edges; ordered one-rings
//! - Boundary edges, boundary loops, Euler characteristic
//! - [`build_dual`](algs::dual_graph::build_dual): face → vertex,
//!   shared edge → edge
//! - CSR adjacency export for partitioners and solvers ([`mesh_graph`])
//! - Indexed face set import/export with serde ([`io::MeshData`])
//!
//! ## Cargo features
//! - `strict-invariants` / `check-invariants`: run the full invariant check
//!   after every mutation in release builds too (always on with
//!   `debug_assertions`).
//! - `rayon`: compute dual vertex positions in parallel.
//!
//! ## Usage
//! ```rust
//! use polymesh::prelude::*;
//!
//! let data = MeshData::new(
//!     vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]],
//!     vec![vec![0, 1, 2], vec![0, 2, 3]],
//! );
//! let mesh = PolyMesh::try_from(&data).unwrap();
//! assert_eq!(mesh.edge_count(), 5);
//! assert_eq!(mesh.boundary_loops().len(), 1);
//!
//! let dual = build_dual(&mesh);
//! assert_eq!(dual.vertex_count(), 2);
//! assert_eq!(dual.edge_count(), 1);
//! ```

pub mod algs;
pub mod debug_invariants;
pub mod geometry;
pub mod io;
pub mod mesh_error;
pub mod mesh_graph;
pub mod topology;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::dual_graph::{
        BoundaryEdgeHandling, DualMesh, DualOpts, build_dual, build_dual_with_opts,
    };
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::geometry::Point3;
    pub use crate::io::MeshData;
    pub use crate::mesh_error::{DegenerateFace, MeshError};
    pub use crate::mesh_graph::{MeshGraph, face_adjacency_graph, vertex_adjacency_graph};
    pub use crate::topology::{
        EdgeKey, FaceKey, FaceKind, InvalidateCache, PolyMesh, VertexKey, VertexRing,
    };
}
