//! Algorithms that derive new meshes from an existing one.

pub mod dual_graph;

pub use dual_graph::{BoundaryEdgeHandling, DualMesh, DualOpts, build_dual, build_dual_with_opts};
