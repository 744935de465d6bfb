//! Read-only traversal over a [`PolyMesh`].
//!
//! The enumerators ([`Vertices`], [`Faces`], [`Edges`]) are lazy, finite and
//! restartable: every call returns a fresh iterator borrowing the mesh, so the
//! borrow checker rules out mutation while one is alive.
//!
//! Ring queries (`vertex_neighbors`, `vertex_faces`) order the one-ring of a
//! vertex following face winding. With counter-clockwise faces the ring runs
//! clockwise around the vertex: from a face `f = (.., p, v, n, ..)` the walk
//! continues to the face across edge `{v, n}`, which holds `n` as its
//! predecessor of `v`. A boundary vertex's ring starts at the boundary.

use std::collections::HashSet;
use std::iter::{Enumerate, FusedIterator};
use std::slice;

use hashbrown::HashMap as FastMap;

use super::edge::EdgeKey;
use super::face::{Face, FaceKind};
use super::key::{FaceKey, VertexKey};
use super::mesh::PolyMesh;
use crate::geometry::{Point3, centroid};
use crate::mesh_error::MeshError;

/// Vertex keys in insertion order. See [`PolyMesh::vertices`].
#[derive(Clone, Debug)]
pub struct Vertices<'a> {
    slots: Enumerate<slice::Iter<'a, Option<Point3>>>,
}

impl Iterator for Vertices<'_> {
    type Item = VertexKey;

    fn next(&mut self) -> Option<VertexKey> {
        self.slots
            .find_map(|(i, slot)| slot.as_ref().map(|_| VertexKey::from_index(i)))
    }
}

impl FusedIterator for Vertices<'_> {}

/// Face keys in insertion order. See [`PolyMesh::faces`].
#[derive(Clone, Debug)]
pub struct Faces<'a> {
    slots: Enumerate<slice::Iter<'a, Option<Face>>>,
}

impl Iterator for Faces<'_> {
    type Item = FaceKey;

    fn next(&mut self) -> Option<FaceKey> {
        self.slots
            .find_map(|(i, slot)| slot.as_ref().map(|_| FaceKey::from_index(i)))
    }
}

impl FusedIterator for Faces<'_> {}

/// Undirected edges, each exactly once, as canonical `(min, max)` pairs.
///
/// Walks face loops in face order; a seen-set keyed by the canonical pair
/// drops repeats, so the first face to mention an edge decides its position.
#[derive(Clone, Debug)]
pub struct Edges<'a> {
    faces: Enumerate<slice::Iter<'a, Option<Face>>>,
    current: Option<&'a Face>,
    pos: usize,
    seen: HashSet<EdgeKey>,
}

impl<'a> Edges<'a> {
    fn next_directed(&mut self) -> Option<(VertexKey, VertexKey)> {
        loop {
            if let Some(face) = self.current {
                let lp = face.vertices();
                let n_edges = match face.kind {
                    FaceKind::Polygon => lp.len(),
                    FaceKind::Line => 1,
                };
                if self.pos < n_edges {
                    let i = self.pos;
                    self.pos += 1;
                    return Some((lp[i], lp[(i + 1) % lp.len()]));
                }
            }
            let (_, face) = self.faces.find(|(_, slot)| slot.is_some())?;
            self.current = face.as_ref();
            self.pos = 0;
        }
    }
}

impl Iterator for Edges<'_> {
    type Item = (VertexKey, VertexKey);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((u, v)) = self.next_directed() {
            let e = EdgeKey::new(u, v);
            if self.seen.insert(e) {
                return Some(e.vertices());
            }
        }
        None
    }
}

impl FusedIterator for Edges<'_> {}

/// One corner of a polygon at the ring's centre vertex.
#[derive(Copy, Clone, Debug)]
struct Corner {
    face: FaceKey,
    prev: VertexKey,
    next: VertexKey,
}

impl Corner {
    /// The rim vertex of this corner other than `w`.
    fn opposite(self, w: VertexKey) -> VertexKey {
        if w == self.prev { self.next } else { self.prev }
    }
}

/// Ordered one-ring of a vertex.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VertexRing {
    /// Neighbouring vertices in ring order.
    pub neighbors: Vec<VertexKey>,
    /// Incident faces in the same ring order.
    pub faces: Vec<FaceKey>,
}

impl PolyMesh {
    /// Lazily enumerates vertex keys in insertion order.
    pub fn vertices(&self) -> Vertices<'_> {
        Vertices {
            slots: self.vertex_slots().iter().enumerate(),
        }
    }

    /// Lazily enumerates face keys (line elements included) in insertion order.
    pub fn faces(&self) -> Faces<'_> {
        Faces {
            slots: self.face_slots().iter().enumerate(),
        }
    }

    /// Lazily enumerates every undirected edge once, as `(min, max)`.
    pub fn edges(&self) -> Edges<'_> {
        Edges {
            faces: self.face_slots().iter().enumerate(),
            current: None,
            pos: 0,
            seen: HashSet::with_capacity(self.edge_count()),
        }
    }

    /// The stored loop of `f`, in winding order.
    pub fn face_vertices(&self, f: FaceKey) -> Result<&[VertexKey], MeshError> {
        Ok(self.face(f)?.vertices())
    }

    /// Number of vertices in the loop of `f`.
    pub fn face_degree(&self, f: FaceKey) -> Result<usize, MeshError> {
        Ok(self.face(f)?.vertices().len())
    }

    /// Centroid of the loop coordinates of `f`.
    pub fn face_centroid(&self, f: FaceKey) -> Result<Point3, MeshError> {
        let face = self.face(f)?;
        let mut pts = Vec::with_capacity(face.vertices().len());
        for &v in face.vertices() {
            pts.push(*self.vertex_slot(v)?);
        }
        centroid(pts)
            .ok_or_else(|| MeshError::IncidenceMismatch(format!("face {f} has an empty loop")))
    }

    /// Neighbours of `v` in ring order.
    pub fn vertex_neighbors(&self, v: VertexKey) -> Result<Vec<VertexKey>, MeshError> {
        Ok(self.vertex_ring(v)?.neighbors)
    }

    /// Faces incident to `v`, ordered like [`vertex_neighbors`](Self::vertex_neighbors).
    pub fn vertex_faces(&self, v: VertexKey) -> Result<Vec<FaceKey>, MeshError> {
        Ok(self.vertex_ring(v)?.faces)
    }

    /// Number of edges incident to `v`.
    pub fn vertex_degree(&self, v: VertexKey) -> Result<usize, MeshError> {
        Ok(self.vertex_ring(v)?.neighbors.len())
    }

    /// Faces on the undirected edge `{u, v}`, in registration order; empty if
    /// no face uses the edge.
    pub fn edge_faces(&self, u: VertexKey, v: VertexKey) -> Result<Vec<FaceKey>, MeshError> {
        self.vertex_slot(u)?;
        self.vertex_slot(v)?;
        Ok(self
            .edge_entry(u, v)
            .map(|ef| ef.iter().collect())
            .unwrap_or_default())
    }

    /// Faces sharing an edge with `f`, in loop order of the shared edges.
    pub fn face_neighbors(&self, f: FaceKey) -> Result<Vec<FaceKey>, MeshError> {
        let face = self.face(f)?;
        let mut out = Vec::new();
        for (u, v) in face.directed_edges() {
            if let Some(g) = self.edge_entry(u, v).and_then(|ef| ef.other(f)) {
                if !out.contains(&g) {
                    out.push(g);
                }
            }
        }
        Ok(out)
    }

    /// One-ring of `v`: neighbours and faces in matching ring order.
    ///
    /// Polygon corners are chained into fans across the edges they share,
    /// following winding where neighbouring faces agree and flipping the
    /// corner where they do not. Open fans start at their boundary end; a
    /// closed fan starts at the earliest-registered incident face. When the
    /// corners form several fans, they follow one another in the order of
    /// their first registered face. Line-element neighbours come last.
    pub fn vertex_ring(&self, v: VertexKey) -> Result<VertexRing, MeshError> {
        self.vertex_slot(v)?;
        let incident = self.adjacency.faces_of(v);

        let mut corners: Vec<Corner> = Vec::with_capacity(incident.len());
        let mut lines: Vec<(FaceKey, VertexKey)> = Vec::new();
        for &f in incident {
            let face = self.face(f)?;
            match face.kind {
                FaceKind::Polygon => {
                    if let Some((prev, next)) = face.corner(v) {
                        corners.push(Corner { face: f, prev, next });
                    }
                }
                FaceKind::Line => {
                    if let Some(&w) = face.vertices().iter().find(|&&w| w != v) {
                        lines.push((f, w));
                    }
                }
            }
        }

        // Corners sharing a rim vertex `w` share the edge `{v, w}`; there are
        // at most two of them.
        let mut by_rim: FastMap<VertexKey, Vec<usize>> = FastMap::with_capacity(corners.len());
        for (i, c) in corners.iter().enumerate() {
            by_rim.entry(c.prev).or_default().push(i);
            by_rim.entry(c.next).or_default().push(i);
        }
        let across = |i: usize, w: VertexKey| {
            by_rim
                .get(&w)
                .and_then(|cs| cs.iter().copied().find(|&j| j != i))
        };

        let mut ring = VertexRing::default();
        let mut seen: HashSet<VertexKey> = HashSet::with_capacity(corners.len() + lines.len());
        let mut push_neighbor = |ring: &mut VertexRing, w: VertexKey| {
            if seen.insert(w) {
                ring.neighbors.push(w);
            }
        };

        let mut visited = vec![false; corners.len()];
        for seed in 0..corners.len() {
            if visited[seed] {
                continue;
            }
            // Rewind to the start of this fan. `(start, entry)` is the corner
            // the walk begins at and the rim vertex it enters through.
            let mut start = seed;
            let mut entry = corners[seed].prev;
            for _ in 0..corners.len() {
                match across(start, entry) {
                    Some(p) if p == seed => {
                        // Closed fan: keep the earliest face as the start.
                        start = seed;
                        entry = corners[seed].prev;
                        break;
                    }
                    Some(p) if !visited[p] => {
                        entry = corners[p].opposite(entry);
                        start = p;
                    }
                    _ => break,
                }
            }

            push_neighbor(&mut ring, entry);
            let mut cur = start;
            let mut exit = corners[start].opposite(entry);
            loop {
                visited[cur] = true;
                ring.faces.push(corners[cur].face);
                push_neighbor(&mut ring, exit);
                match across(cur, exit) {
                    Some(n) if !visited[n] => {
                        exit = corners[n].opposite(exit);
                        cur = n;
                    }
                    _ => break,
                }
            }
        }

        for (f, w) in lines {
            ring.faces.push(f);
            push_neighbor(&mut ring, w);
        }
        Ok(ring)
    }
}
