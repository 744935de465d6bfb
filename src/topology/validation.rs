//! Full structural validation of a [`PolyMesh`].
//!
//! The checks mirror the store's invariants:
//! 1. face registry and adjacency index reference exactly the same faces, and
//!    every loop vertex is live;
//! 2. no edge carries more than two faces;
//! 3. live counts match the arenas;
//! 4. polygon loops have ≥ 3 distinct keys, line elements exactly 2.
//!
//! [`DebugInvariants::debug_assert_invariants`] runs this after every mutation
//! in debug builds and with the `strict-invariants`/`check-invariants`
//! features.

use std::collections::HashSet;

use super::_debug_invariants::{count_pairs, inv_assert};
use super::edge::EdgeKey;
use super::face::FaceKind;
use super::key::{FaceKey, VertexKey};
use super::mesh::PolyMesh;
use crate::debug_invariants::DebugInvariants;
use crate::mesh_error::{DegenerateFace, MeshError};

/// Validate every structural invariant; returns the first violation.
pub fn validate_mesh(mesh: &PolyMesh) -> Result<(), MeshError> {
    let live_vertices = mesh.vertex_slots().iter().flatten().count();
    if live_vertices != mesh.vertex_count() {
        return Err(MeshError::CountMismatch {
            entity: "vertex",
            recorded: mesh.vertex_count(),
            found: live_vertices,
        });
    }
    let live_faces = mesh.face_slots().iter().flatten().count();
    if live_faces != mesh.face_count() {
        return Err(MeshError::CountMismatch {
            entity: "face",
            recorded: mesh.face_count(),
            found: live_faces,
        });
    }

    // Face loops: shape, liveness of vertices, back-references.
    for f in mesh.faces() {
        let face = mesh.face(f)?;
        let lp = face.vertices();
        let min = face.kind.min_len();
        if lp.len() < min || (face.kind == FaceKind::Line && lp.len() != 2) {
            return Err(DegenerateFace::TooFewVertices {
                found: lp.len(),
                min,
            }
            .into());
        }
        let mut distinct = HashSet::with_capacity(lp.len());
        for &v in lp {
            if !distinct.insert(v) {
                return Err(DegenerateFace::RepeatedVertex(v).into());
            }
            if !mesh.has_vertex(v) {
                return Err(MeshError::IncidenceMismatch(format!(
                    "face {f} references missing vertex {v}"
                )));
            }
            if !mesh.adjacency.faces_of(v).contains(&f) {
                return Err(MeshError::IncidenceMismatch(format!(
                    "vertex {v} does not list incident face {f}"
                )));
            }
        }
        for (u, v) in face.directed_edges() {
            if !mesh.edge_entry(u, v).is_some_and(|ef| ef.contains(f)) {
                return Err(MeshError::IncidenceMismatch(format!(
                    "edge {} does not list incident face {f}",
                    EdgeKey::new(u, v)
                )));
            }
        }
    }

    // Vertex entries only name live vertices and faces that use them.
    for (&v, faces) in mesh.adjacency.vertex_entries() {
        if !mesh.has_vertex(v) {
            return Err(MeshError::IncidenceMismatch(format!(
                "adjacency entry for deleted vertex {v}"
            )));
        }
        for &f in faces {
            check_face_uses_vertex(mesh, f, v)?;
        }
    }

    // Edge entries agree with a recount from the loops.
    let recount = count_pairs(
        mesh.face_slots()
            .iter()
            .flatten()
            .flat_map(|face| face.directed_edges().map(|(u, v)| EdgeKey::new(u, v).vertices())),
    );
    if recount.len() != mesh.edge_count() {
        return Err(MeshError::CountMismatch {
            entity: "edge",
            recorded: mesh.edge_count(),
            found: recount.len(),
        });
    }
    for (&(u, v), &n) in &recount {
        let Some(ef) = mesh.edge_entry(u, v) else {
            return Err(MeshError::IncidenceMismatch(format!(
                "edge {} missing from index",
                EdgeKey::new(u, v)
            )));
        };
        if n as usize != ef.len() {
            return Err(MeshError::IncidenceMismatch(format!(
                "edge {} has {n} loop occurrences but {} indexed faces",
                EdgeKey::new(u, v),
                ef.len()
            )));
        }
    }
    Ok(())
}

fn check_face_uses_vertex(mesh: &PolyMesh, f: FaceKey, v: VertexKey) -> Result<(), MeshError> {
    match mesh.face(f) {
        Ok(face) if face.vertices().contains(&v) => Ok(()),
        Ok(_) => Err(MeshError::IncidenceMismatch(format!(
            "vertex {v} lists face {f}, which does not use it"
        ))),
        Err(_) => Err(MeshError::IncidenceMismatch(format!(
            "vertex {v} lists deleted face {f}"
        ))),
    }
}

impl DebugInvariants for PolyMesh {
    fn debug_assert_invariants(&self) {
        let res = self.validate_invariants();
        inv_assert!(res.is_ok(), "[invariants] PolyMesh: {:?}", res);
    }

    fn validate_invariants(&self) -> Result<(), MeshError> {
        validate_mesh(self)
    }
}
