//! Boundary queries.
//!
//! A boundary edge borders exactly one face. Boundary loops chain the
//! boundary edges of polygons in the winding direction of the faces they
//! border, crossing over where adjacent faces are wound inconsistently; they
//! are computed once and cached until the next mutation.

use std::collections::HashSet;

use hashbrown::HashMap as FastMap;

use super::edge::EdgeKey;
use super::face::FaceKind;
use super::key::VertexKey;
use super::mesh::PolyMesh;
use crate::mesh_error::MeshError;

/// Cached boundary loops of a mesh.
#[derive(Clone, Debug, Default)]
pub struct BoundaryCache {
    loops: Vec<Vec<VertexKey>>,
}

impl BoundaryCache {
    fn compute(mesh: &PolyMesh) -> Self {
        // Boundary edges as directed by their single polygon, in face order.
        let mut halfedges: Vec<(VertexKey, VertexKey)> = Vec::new();
        let mut incident: FastMap<VertexKey, Vec<usize>> = FastMap::new();
        for slot in mesh.face_slots().iter().flatten() {
            if slot.kind != FaceKind::Polygon {
                continue;
            }
            for (u, v) in slot.directed_edges() {
                if mesh.edge_entry(u, v).is_some_and(|ef| ef.is_boundary()) {
                    let i = halfedges.len();
                    halfedges.push((u, v));
                    incident.entry(u).or_default().push(i);
                    incident.entry(v).or_default().push(i);
                }
            }
        }

        // At each vertex prefer an edge leaving it in winding direction; fall
        // back to any unused boundary edge where neighbouring faces disagree
        // on orientation.
        let next_edge = |cur: VertexKey, used: &HashSet<EdgeKey>| -> Option<VertexKey> {
            let candidates = incident.get(&cur)?;
            let unused = |&&i: &&usize| !used.contains(&EdgeKey::from(halfedges[i]));
            let pick = candidates
                .iter()
                .filter(unused)
                .find(|&&i| halfedges[i].0 == cur)
                .or_else(|| candidates.iter().find(unused))?;
            let (a, b) = halfedges[*pick];
            Some(if a == cur { b } else { a })
        };

        let mut used: HashSet<EdgeKey> = HashSet::with_capacity(halfedges.len());
        let mut loops = Vec::new();
        for &(start, first) in &halfedges {
            if !used.insert(EdgeKey::new(start, first)) {
                continue;
            }
            let mut lp = vec![start];
            let mut cur = first;
            while cur != start {
                lp.push(cur);
                match next_edge(cur, &used) {
                    Some(w) => {
                        used.insert(EdgeKey::new(cur, w));
                        cur = w;
                    }
                    None => break,
                }
            }
            loops.push(lp);
        }
        log::trace!("computed {} boundary loop(s)", loops.len());
        Self { loops }
    }
}

impl PolyMesh {
    /// Boundary loops, each a closed sequence of vertex keys (first vertex
    /// not repeated at the end).
    pub fn boundary_loops(&self) -> &[Vec<VertexKey>] {
        &self.boundary.get_or_init(|| BoundaryCache::compute(self)).loops
    }

    /// Edges bordering exactly one face, in `edges()` order.
    pub fn boundary_edges(&self) -> impl Iterator<Item = (VertexKey, VertexKey)> + '_ {
        self.edges()
            .filter(|&(u, v)| self.edge_entry(u, v).is_some_and(|ef| ef.is_boundary()))
    }

    /// `true` if `{u, v}` is an edge of the mesh bordering a single face.
    pub fn is_edge_on_boundary(&self, u: VertexKey, v: VertexKey) -> Result<bool, MeshError> {
        self.vertex_slot(u)?;
        self.vertex_slot(v)?;
        Ok(self.edge_entry(u, v).is_some_and(|ef| ef.is_boundary()))
    }

    /// `true` if `v` lies on a boundary edge of some polygon.
    pub fn is_vertex_on_boundary(&self, v: VertexKey) -> Result<bool, MeshError> {
        self.vertex_slot(v)?;
        for &f in self.adjacency.faces_of(v) {
            let face = self.face(f)?;
            if face.kind != FaceKind::Polygon {
                continue;
            }
            if let Some((prev, next)) = face.corner(v) {
                for w in [prev, next] {
                    if self.edge_entry(v, w).is_some_and(|ef| ef.is_boundary()) {
                        return Ok(true);
                    }
                }
            }
        }
        Ok(false)
    }

    /// `true` if the mesh has faces and no edge borders a single face.
    pub fn is_closed(&self) -> bool {
        self.face_count() > 0 && self.adjacency.edges().all(|(_, ef)| ef.is_interior())
    }

    /// `V - E + F`.
    pub fn euler_characteristic(&self) -> i64 {
        self.vertex_count() as i64 - self.edge_count() as i64 + self.face_count() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_quads() -> PolyMesh {
        // 3---4---5
        // |   |   |
        // 0---1---2
        let mut m = PolyMesh::new();
        let v: Vec<_> = [[0., 0.], [1., 0.], [2., 0.], [0., 1.], [1., 1.], [2., 1.]]
            .iter()
            .map(|&[x, y]| m.add_vertex([x, y, 0.0]))
            .collect();
        m.add_face([v[0], v[1], v[4], v[3]]).unwrap();
        m.add_face([v[1], v[2], v[5], v[4]]).unwrap();
        m
    }

    #[test]
    fn strip_has_one_loop_of_six() {
        let m = two_quads();
        let loops = m.boundary_loops();
        assert_eq!(loops.len(), 1);
        let raw: Vec<u64> = loops[0].iter().map(|v| v.get()).collect();
        assert_eq!(raw, vec![0, 1, 2, 5, 4, 3]);
        assert_eq!(m.boundary_edges().count(), 6);
        assert!(!m.is_closed());
    }

    #[test]
    fn shared_edge_is_interior() {
        let m = two_quads();
        let (v1, v4) = (VertexKey::new(1), VertexKey::new(4));
        assert!(!m.is_edge_on_boundary(v1, v4).unwrap());
        assert!(m.is_vertex_on_boundary(v1).unwrap());
    }

    #[test]
    fn cache_is_invalidated_by_mutation() {
        let mut m = two_quads();
        assert_eq!(m.boundary_loops()[0].len(), 6);
        m.delete_face(crate::topology::key::FaceKey::new(1)).unwrap();
        assert_eq!(m.boundary_loops()[0].len(), 4);
    }

    #[test]
    fn mixed_winding_still_closes_one_loop() {
        // [0, 1, 2] and [1, 2, 3] traverse their shared edge the same way.
        let mut m = PolyMesh::new();
        let v: Vec<_> = [[0., 0.], [1., 0.], [0., 1.], [1., 1.]]
            .iter()
            .map(|&[x, y]| m.add_vertex([x, y, 0.0]))
            .collect();
        m.add_face([v[0], v[1], v[2]]).unwrap();
        m.add_face([v[1], v[2], v[3]]).unwrap();

        let loops = m.boundary_loops();
        assert_eq!(loops.len(), 1);
        let raw: Vec<u64> = loops[0].iter().map(|v| v.get()).collect();
        assert_eq!(raw, vec![0, 1, 3, 2]);
        assert_eq!(m.boundary_edges().count(), 4);
    }

    #[test]
    fn isolated_vertex_is_not_on_boundary() {
        let mut m = PolyMesh::new();
        let v = m.add_vertex([0.0, 0.0, 0.0]);
        assert!(!m.is_vertex_on_boundary(v).unwrap());
        assert!(m.boundary_loops().is_empty());
    }
}
