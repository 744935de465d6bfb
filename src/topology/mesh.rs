//! The topology store: [`PolyMesh`].
//!
//! Vertices and faces live in two arenas indexed by their keys. A key is the
//! arena slot it was allocated in; slots are only ever appended, so keys are
//! monotonic and a deleted key is never handed out again. All relations
//! between entities are stored as keys in the
//! [`AdjacencyIndex`](super::adjacency::AdjacencyIndex), never as references.
//!
//! Every mutator validates fully before writing anything, so a returned `Err`
//! leaves the store untouched.

use once_cell::sync::OnceCell;

use super::_debug_invariants::debug_invariants;
use super::adjacency::{AdjacencyIndex, EdgeFaces};
use super::boundary::BoundaryCache;
use super::cache::InvalidateCache;
use super::edge::EdgeKey;
use super::face::{Face, FaceKind};
use super::key::{FaceKey, VertexKey};
use crate::geometry::Point3;
use crate::mesh_error::{DegenerateFace, MeshError};

/// A polygonal mesh with arbitrary valence and face degree.
///
/// # Example
/// ```rust
/// use polymesh::prelude::*;
///
/// let mut mesh = PolyMesh::new();
/// let a = mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));
/// let b = mesh.add_vertex(Point3::new(1.0, 0.0, 0.0));
/// let c = mesh.add_vertex(Point3::new(0.0, 1.0, 0.0));
/// let f = mesh.add_face([a, b, c]).unwrap();
/// assert_eq!(mesh.face_vertices(f).unwrap(), &[a, b, c]);
/// assert_eq!(mesh.edges().count(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PolyMesh {
    vertices: Vec<Option<Point3>>,
    faces: Vec<Option<Face>>,
    live_vertices: usize,
    live_faces: usize,
    pub(crate) adjacency: AdjacencyIndex,
    /// Boundary loops, computed on first request.
    pub(crate) boundary: OnceCell<BoundaryCache>,
}

impl PolyMesh {
    /// Creates a new, empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty mesh with room for `vertices` and `faces` entries.
    pub fn with_capacity(vertices: usize, faces: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            faces: Vec::with_capacity(faces),
            ..Self::default()
        }
    }

    // ---------------------------------------------------------------------
    // counts & membership
    // ---------------------------------------------------------------------

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.live_vertices
    }

    /// Number of faces, line elements included.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.live_faces
    }

    /// Number of distinct undirected edges.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.adjacency.edge_count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live_vertices == 0
    }

    #[inline]
    pub fn has_vertex(&self, v: VertexKey) -> bool {
        matches!(self.vertices.get(v.index()), Some(Some(_)))
    }

    #[inline]
    pub fn has_face(&self, f: FaceKey) -> bool {
        matches!(self.faces.get(f.index()), Some(Some(_)))
    }

    /// `true` when some face uses the undirected edge `{u, v}`.
    #[inline]
    pub fn has_edge(&self, u: VertexKey, v: VertexKey) -> bool {
        self.adjacency.edge(EdgeKey::new(u, v)).is_some()
    }

    /// The key the next `add_vertex` will return.
    #[inline]
    pub fn next_vertex_key(&self) -> VertexKey {
        VertexKey::from_index(self.vertices.len())
    }

    /// The key the next `add_face`/`add_line` will return.
    #[inline]
    pub fn next_face_key(&self) -> FaceKey {
        FaceKey::from_index(self.faces.len())
    }

    // ---------------------------------------------------------------------
    // vertex data
    // ---------------------------------------------------------------------

    pub fn vertex_coordinate(&self, v: VertexKey) -> Result<Point3, MeshError> {
        self.vertex_slot(v).copied()
    }

    /// Moves a vertex. Topology is unaffected.
    pub fn set_vertex_coordinate(&mut self, v: VertexKey, p: Point3) -> Result<(), MeshError> {
        match self.vertices.get_mut(v.index()) {
            Some(Some(slot)) => {
                *slot = p;
                Ok(())
            }
            _ => Err(MeshError::VertexNotFound(v)),
        }
    }

    pub fn face_kind(&self, f: FaceKey) -> Result<FaceKind, MeshError> {
        Ok(self.face(f)?.kind)
    }

    // ---------------------------------------------------------------------
    // mutation
    // ---------------------------------------------------------------------

    /// Adds a vertex at `p` and returns its key. Never fails.
    pub fn add_vertex(&mut self, p: impl Into<Point3>) -> VertexKey {
        let key = self.next_vertex_key();
        self.vertices.push(Some(p.into()));
        self.live_vertices += 1;
        self.adjacency.insert_vertex(key);
        key
    }

    /// Adds a polygon bounded by `loop_` (in winding order).
    ///
    /// # Errors
    /// - [`MeshError::DegenerateFace`] for fewer than 3 keys or a repeated key;
    /// - [`MeshError::VertexNotFound`] if a key is not a live vertex;
    /// - [`MeshError::NonManifold`] if an edge of the loop already borders two
    ///   faces.
    pub fn add_face<I>(&mut self, loop_: I) -> Result<FaceKey, MeshError>
    where
        I: IntoIterator<Item = VertexKey>,
    {
        self.insert_face(FaceKind::Polygon, loop_.into_iter().collect())
    }

    /// Adds an explicit line element between `u` and `v`.
    ///
    /// Line elements are how edge-only graphs (such as a dual graph) are
    /// represented. They count as faces for keys, `faces()` and
    /// `face_count()`, and contribute a single edge.
    pub fn add_line(&mut self, u: VertexKey, v: VertexKey) -> Result<FaceKey, MeshError> {
        self.insert_face(FaceKind::Line, vec![u, v])
    }

    /// Deletes `f`, leaving its vertices in place.
    pub fn delete_face(&mut self, f: FaceKey) -> Result<(), MeshError> {
        let face = self
            .faces
            .get_mut(f.index())
            .and_then(Option::take)
            .ok_or(MeshError::FaceNotFound(f))?;
        self.adjacency.unregister(f, &face);
        self.live_faces -= 1;
        self.invalidate_cache();
        log::trace!("deleted face {f} ({} vertices)", face.loop_.len());
        debug_invariants!(self);
        Ok(())
    }

    /// Deletes `v` together with every face that references it.
    pub fn delete_vertex(&mut self, v: VertexKey) -> Result<(), MeshError> {
        if !self.has_vertex(v) {
            return Err(MeshError::VertexNotFound(v));
        }
        let doomed: Vec<FaceKey> = self.adjacency.faces_of(v).to_vec();
        if !doomed.is_empty() {
            log::debug!("deleting vertex {v} cascades to {} face(s)", doomed.len());
        }
        for f in doomed {
            self.delete_face(f)?;
        }
        self.vertices[v.index()] = None;
        self.live_vertices -= 1;
        self.adjacency.remove_vertex(v);
        self.invalidate_cache();
        debug_invariants!(self);
        Ok(())
    }

    // ---------------------------------------------------------------------
    // internal access
    // ---------------------------------------------------------------------

    #[inline]
    pub(crate) fn vertex_slot(&self, v: VertexKey) -> Result<&Point3, MeshError> {
        match self.vertices.get(v.index()) {
            Some(Some(p)) => Ok(p),
            _ => Err(MeshError::VertexNotFound(v)),
        }
    }

    #[inline]
    pub(crate) fn face(&self, f: FaceKey) -> Result<&Face, MeshError> {
        match self.faces.get(f.index()) {
            Some(Some(face)) => Ok(face),
            _ => Err(MeshError::FaceNotFound(f)),
        }
    }

    #[inline]
    pub(crate) fn vertex_slots(&self) -> &[Option<Point3>] {
        &self.vertices
    }

    #[inline]
    pub(crate) fn face_slots(&self) -> &[Option<Face>] {
        &self.faces
    }

    #[inline]
    pub(crate) fn edge_entry(&self, u: VertexKey, v: VertexKey) -> Option<&EdgeFaces> {
        self.adjacency.edge(EdgeKey::new(u, v))
    }

    /// Checks a candidate loop without touching the store.
    fn validate_face(&self, face: &Face) -> Result<(), MeshError> {
        let min = face.kind.min_len();
        let found = face.loop_.len();
        if found < min {
            return Err(DegenerateFace::TooFewVertices { found, min }.into());
        }
        for (i, &v) in face.loop_.iter().enumerate() {
            if face.loop_[..i].contains(&v) {
                return Err(DegenerateFace::RepeatedVertex(v).into());
            }
        }
        for &v in &face.loop_ {
            if !self.has_vertex(v) {
                return Err(MeshError::VertexNotFound(v));
            }
        }
        self.adjacency.check_manifold(face)
    }

    fn insert_face(&mut self, kind: FaceKind, loop_: Vec<VertexKey>) -> Result<FaceKey, MeshError> {
        let face = Face { kind, loop_ };
        self.validate_face(&face)?;
        Ok(self.commit_face(face))
    }

    /// Registers a line element whose validity the caller has established.
    pub(crate) fn insert_line_unchecked(&mut self, u: VertexKey, v: VertexKey) -> FaceKey {
        let face = Face {
            kind: FaceKind::Line,
            loop_: vec![u, v],
        };
        debug_assert!(self.validate_face(&face).is_ok(), "invalid line {u}-{v}");
        self.commit_face(face)
    }

    fn commit_face(&mut self, face: Face) -> FaceKey {
        let key = self.next_face_key();
        self.adjacency.register(key, &face);
        log::trace!("registered {:?} {key} with {} vertices", face.kind, face.loop_.len());
        self.faces.push(Some(face));
        self.live_faces += 1;
        self.invalidate_cache();
        debug_invariants!(self);
        key
    }
}

impl InvalidateCache for PolyMesh {
    #[inline]
    fn invalidate_cache(&mut self) {
        self.boundary.take();
    }
}
