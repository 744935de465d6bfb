//! Mesh graph exports for vertex and face adjacency in CSR form.
//!
//! These flatten the store's key-based adjacency into compact index arrays
//! (`xadj`/`adjncy`), the layout graph partitioners and sparse solvers expect.
//! Index `i` refers to `order[i]`; `order` is the mesh's enumeration order.

use hashbrown::HashMap as FastMap;

use crate::mesh_error::MeshError;
use crate::topology::key::{FaceKey, VertexKey};
use crate::topology::mesh::PolyMesh;

/// CSR-style adjacency graph over mesh entities of type `K`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeshGraph<K> {
    /// CSR offsets into `adjncy` for each node; `len() == order.len() + 1`.
    pub xadj: Vec<usize>,
    /// CSR adjacency list (indices into `order`).
    pub adjncy: Vec<usize>,
    /// Entity ordering that defines node indices.
    pub order: Vec<K>,
}

impl<K: Copy> MeshGraph<K> {
    /// Return the neighbor index slice for node `i`.
    #[inline]
    pub fn neighbors(&self, i: usize) -> &[usize] {
        &self.adjncy[self.xadj[i]..self.xadj[i + 1]]
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    /// Number of undirected edges (each appears twice in `adjncy`).
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.adjncy.len() / 2
    }

    /// Neighbors of node `i` as entity keys.
    pub fn neighbor_keys(&self, i: usize) -> impl Iterator<Item = K> + '_ {
        self.neighbors(i).iter().map(|&j| self.order[j])
    }
}

/// Vertex-to-vertex graph. Each row lists neighbors in ring order, as
/// returned by [`PolyMesh::vertex_neighbors`].
pub fn vertex_adjacency_graph(mesh: &PolyMesh) -> Result<MeshGraph<VertexKey>, MeshError> {
    let order: Vec<VertexKey> = mesh.vertices().collect();
    build_csr(order, |v| mesh.vertex_neighbors(v))
}

/// Face-to-face graph: two faces are adjacent when they share an edge.
pub fn face_adjacency_graph(mesh: &PolyMesh) -> Result<MeshGraph<FaceKey>, MeshError> {
    let order: Vec<FaceKey> = mesh.faces().collect();
    build_csr(order, |f| mesh.face_neighbors(f))
}

fn build_csr<K, F>(order: Vec<K>, mut neighbors: F) -> Result<MeshGraph<K>, MeshError>
where
    K: Copy + Eq + std::hash::Hash,
    F: FnMut(K) -> Result<Vec<K>, MeshError>,
{
    let index: FastMap<K, usize> = order.iter().enumerate().map(|(i, &k)| (k, i)).collect();

    let mut xadj = Vec::with_capacity(order.len() + 1);
    let mut adjncy = Vec::new();
    xadj.push(0);
    for &k in &order {
        adjncy.extend(neighbors(k)?.into_iter().filter_map(|n| index.get(&n).copied()));
        xadj.push(adjncy.len());
    }
    log::trace!(
        "built CSR graph: {} nodes, {} adjacency entries",
        order.len(),
        adjncy.len()
    );
    Ok(MeshGraph { xadj, adjncy, order })
}
