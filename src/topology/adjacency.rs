//! Incrementally maintained incidence index.
//!
//! Two maps are kept in lockstep with the face registry of a
//! [`PolyMesh`](super::mesh::PolyMesh):
//!
//! * `edges`: canonical undirected edge → the (at most two) faces using it;
//! * `vertex_faces`: vertex → incident faces, in registration order.
//!
//! Ring ordering around a vertex is not stored; it is derived from
//! `vertex_faces` on query.

use hashbrown::HashMap as FastMap;

use super::edge::EdgeKey;
use super::face::Face;
use super::key::{FaceKey, VertexKey};
use crate::mesh_error::MeshError;

/// Faces incident to one undirected edge. Never more than two.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EdgeFaces {
    first: FaceKey,
    second: Option<FaceKey>,
}

impl EdgeFaces {
    #[inline]
    fn single(f: FaceKey) -> Self {
        Self {
            first: f,
            second: None,
        }
    }

    /// Number of incident faces (1 or 2).
    #[inline]
    pub fn len(&self) -> usize {
        1 + usize::from(self.second.is_some())
    }

    #[inline]
    pub fn is_boundary(&self) -> bool {
        self.second.is_none()
    }

    #[inline]
    pub fn is_interior(&self) -> bool {
        self.second.is_some()
    }

    #[inline]
    pub fn first(&self) -> FaceKey {
        self.first
    }

    #[inline]
    pub fn second(&self) -> Option<FaceKey> {
        self.second
    }

    /// Incident faces in registration order.
    pub fn iter(&self) -> impl Iterator<Item = FaceKey> + '_ {
        std::iter::once(self.first).chain(self.second)
    }

    #[inline]
    pub fn contains(&self, f: FaceKey) -> bool {
        self.first == f || self.second == Some(f)
    }

    /// The face across the edge from `f`.
    #[inline]
    pub fn other(&self, f: FaceKey) -> Option<FaceKey> {
        if self.first == f {
            self.second
        } else if self.second == Some(f) {
            Some(self.first)
        } else {
            None
        }
    }

    /// Drops `f`; returns `true` when no face is left.
    fn remove(&mut self, f: FaceKey) -> bool {
        if self.second == Some(f) {
            self.second = None;
            false
        } else if self.first == f {
            match self.second.take() {
                Some(s) => {
                    self.first = s;
                    false
                }
                None => true,
            }
        } else {
            false
        }
    }
}

#[derive(Clone, Debug, Default)]
pub(crate) struct AdjacencyIndex {
    edges: FastMap<EdgeKey, EdgeFaces>,
    vertex_faces: FastMap<VertexKey, Vec<FaceKey>>,
}

impl AdjacencyIndex {
    #[inline]
    pub(crate) fn edge_count(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub(crate) fn edge(&self, e: EdgeKey) -> Option<&EdgeFaces> {
        self.edges.get(&e)
    }

    pub(crate) fn edges(&self) -> impl Iterator<Item = (&EdgeKey, &EdgeFaces)> {
        self.edges.iter()
    }

    #[inline]
    pub(crate) fn faces_of(&self, v: VertexKey) -> &[FaceKey] {
        self.vertex_faces.get(&v).map_or(&[], Vec::as_slice)
    }

    pub(crate) fn vertex_entries(&self) -> impl Iterator<Item = (&VertexKey, &Vec<FaceKey>)> {
        self.vertex_faces.iter()
    }

    pub(crate) fn insert_vertex(&mut self, v: VertexKey) {
        self.vertex_faces.entry(v).or_default();
    }

    /// Drops the (already face-free) entry of `v`.
    pub(crate) fn remove_vertex(&mut self, v: VertexKey) {
        let left = self.vertex_faces.remove(&v);
        debug_assert!(
            left.is_none_or(|faces| faces.is_empty()),
            "vertex {v} removed while faces still reference it"
        );
    }

    /// Rejects `face` if any of its edges already carries two faces.
    ///
    /// Read-only; callers run this before [`register`](Self::register).
    pub(crate) fn check_manifold(&self, face: &Face) -> Result<(), MeshError> {
        for (u, v) in face.directed_edges() {
            let edge = EdgeKey::new(u, v);
            if let Some(EdgeFaces {
                first,
                second: Some(second),
            }) = self.edges.get(&edge)
            {
                return Err(MeshError::NonManifold {
                    edge,
                    faces: [*first, *second],
                });
            }
        }
        Ok(())
    }

    /// Records `key` on every vertex and edge of `face`.
    pub(crate) fn register(&mut self, key: FaceKey, face: &Face) {
        for &v in face.vertices() {
            self.vertex_faces.entry(v).or_default().push(key);
        }
        for (u, v) in face.directed_edges() {
            let edge = EdgeKey::new(u, v);
            match self.edges.get_mut(&edge) {
                Some(slot) => {
                    debug_assert!(slot.second.is_none(), "edge {edge} over-subscribed");
                    slot.second = Some(key);
                }
                None => {
                    self.edges.insert(edge, EdgeFaces::single(key));
                }
            }
        }
    }

    /// Removes every trace of `key`; edges left without faces disappear.
    pub(crate) fn unregister(&mut self, key: FaceKey, face: &Face) {
        for &v in face.vertices() {
            if let Some(faces) = self.vertex_faces.get_mut(&v) {
                faces.retain(|&f| f != key);
            }
        }
        for (u, v) in face.directed_edges() {
            let edge = EdgeKey::new(u, v);
            if let Some(slot) = self.edges.get_mut(&edge) {
                if slot.remove(key) {
                    self.edges.remove(&edge);
                }
            }
        }
    }
}
