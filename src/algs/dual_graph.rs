//! Build the topological *dual graph* of a mesh.
//
// Each *face* becomes a vertex placed at the face centroid; an undirected edge
// joins two dual vertices whenever their faces share an interior edge. Dual
// edges are stored as line elements, so the result is itself a `PolyMesh`
// queryable with the usual traversal API.
//
// Boundary edges (one incident face) have no face on the far side and are
// skipped, so the dual of an open mesh is open at its boundary. Nothing is
// synthesized there; the number of skipped edges is reported instead.
//
// The dual graph is **simple**: two faces sharing several edges are joined by
// one dual edge, and no dual edge is a loop.

use std::collections::HashSet;

use hashbrown::HashMap as FastMap;

use crate::geometry::Point3;
use crate::topology::edge::EdgeKey;
use crate::topology::key::{FaceKey, VertexKey};
use crate::topology::mesh::PolyMesh;

/// What to do when boundary edges are skipped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoundaryEdgeHandling {
    /// Skip silently; the count is still reported.
    #[default]
    Ignore,
    /// Skip and emit a `log::warn!` with the count.
    Warn,
}

/// Options for [`build_dual_with_opts`].
#[derive(Clone, Copy, Debug, Default)]
pub struct DualOpts {
    pub boundary: BoundaryEdgeHandling,
}

/// A dual graph together with its construction report.
#[derive(Clone, Debug)]
pub struct DualMesh {
    /// The dual: one vertex per input face, one line element per adjacent
    /// face pair.
    pub mesh: PolyMesh,
    /// Input face → dual vertex, in input face order.
    pub face_to_vertex: Vec<(FaceKey, VertexKey)>,
    /// Input edges bordering a single face; they produce no dual edge.
    pub skipped_boundary_edges: usize,
    /// Interior edges whose face pair was already joined by an earlier edge.
    pub merged_parallel_edges: usize,
}

impl DualMesh {
    /// Dual vertex standing for input face `f`.
    pub fn dual_vertex(&self, f: FaceKey) -> Option<VertexKey> {
        self.face_to_vertex
            .iter()
            .find_map(|&(g, v)| (g == f).then_some(v))
    }
}

/// Build the dual graph of `mesh` with default options.
///
/// Each face becomes a dual vertex at its centroid. Each pair of faces that
/// shares at least one interior edge becomes exactly one dual edge, so the
/// dual has one edge per interior edge only while no two faces share more
/// than one edge. Faces sharing several edges are joined once and the extra
/// shared edges are counted in [`DualMesh::merged_parallel_edges`]. A second
/// line element between the same two dual vertices would be a duplicate face
/// on one edge, which the two-faces-per-edge rule does not allow once a pair
/// shares three or more edges. Boundary edges produce no dual edge.
///
/// # Example
/// ```rust
/// use polymesh::prelude::*;
///
/// let mut m = PolyMesh::new();
/// let a = m.add_vertex([0.0, 0.0, 0.0]);
/// let b = m.add_vertex([1.0, 0.0, 0.0]);
/// let c = m.add_vertex([1.0, 1.0, 0.0]);
/// let d = m.add_vertex([0.0, 1.0, 0.0]);
/// m.add_face([a, b, c, d]).unwrap();
///
/// let dual = build_dual(&m);
/// assert_eq!(dual.vertex_count(), 1);
/// assert_eq!(dual.edges().count(), 0);
/// ```
pub fn build_dual(mesh: &PolyMesh) -> PolyMesh {
    build_dual_inner(mesh, DualOpts::default()).mesh
}

/// Same as [`build_dual`] but also returns the face map and skip counts.
pub fn build_dual_with_opts(mesh: &PolyMesh, opts: DualOpts) -> DualMesh {
    build_dual_inner(mesh, opts)
}

// ---------------------------------------------------------------------------
// internal routine
// ---------------------------------------------------------------------------
fn build_dual_inner(mesh: &PolyMesh, opts: DualOpts) -> DualMesh {
    let faces: Vec<FaceKey> = mesh.faces().collect();

    // 1. one dual vertex per face, at the centroid
    let centroids = face_centroids(mesh, &faces);
    let mut dual = PolyMesh::with_capacity(faces.len(), mesh.edge_count());
    let mut face_to_vertex = Vec::with_capacity(faces.len());
    let mut vertex_of: FastMap<FaceKey, VertexKey> = FastMap::with_capacity(faces.len());
    for (&f, c) in faces.iter().zip(centroids) {
        let dv = dual.add_vertex(c);
        face_to_vertex.push((f, dv));
        vertex_of.insert(f, dv);
    }

    // 2. one dual edge per adjacent face pair, in edge enumeration order
    let mut joined: HashSet<EdgeKey> = HashSet::new();
    let mut skipped_boundary_edges = 0usize;
    let mut merged_parallel_edges = 0usize;
    for (u, v) in mesh.edges() {
        let Some(ef) = mesh.edge_entry(u, v) else {
            continue;
        };
        let Some(second) = ef.second() else {
            skipped_boundary_edges += 1;
            continue;
        };
        let (Some(&a), Some(&b)) = (vertex_of.get(&ef.first()), vertex_of.get(&second)) else {
            continue;
        };
        if joined.insert(EdgeKey::new(a, b)) {
            dual.insert_line_unchecked(a, b);
        } else {
            merged_parallel_edges += 1;
        }
    }

    // 3. report
    if skipped_boundary_edges > 0 && opts.boundary == BoundaryEdgeHandling::Warn {
        log::warn!(
            "dual graph is open: skipped {skipped_boundary_edges} boundary edge(s) with no opposite face"
        );
    }
    log::debug!(
        "built dual graph: {} vertices, {} edges ({} boundary edges skipped, {} parallel edges merged)",
        dual.vertex_count(),
        dual.edge_count(),
        skipped_boundary_edges,
        merged_parallel_edges
    );

    DualMesh {
        mesh: dual,
        face_to_vertex,
        skipped_boundary_edges,
        merged_parallel_edges,
    }
}

/// Centroid of every face in `faces`, in the same order.
#[cfg(not(feature = "rayon"))]
fn face_centroids(mesh: &PolyMesh, faces: &[FaceKey]) -> Vec<Point3> {
    faces.iter().map(|&f| centroid_or_origin(mesh, f)).collect()
}

/// Centroid of every face in `faces`, in the same order.
#[cfg(feature = "rayon")]
fn face_centroids(mesh: &PolyMesh, faces: &[FaceKey]) -> Vec<Point3> {
    use rayon::prelude::*;
    faces
        .par_iter()
        .map(|&f| centroid_or_origin(mesh, f))
        .collect()
}

#[inline]
fn centroid_or_origin(mesh: &PolyMesh, f: FaceKey) -> Point3 {
    // `f` comes from `mesh.faces()`, so the lookup cannot miss.
    mesh.face_centroid(f).unwrap_or_default()
}
