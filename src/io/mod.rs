//! Interchange surface: building a [`PolyMesh`] from plain arrays and
//! exporting it back.
//!
//! The exchange format is the usual "indexed face set": a coordinate list plus
//! one index loop per face. Indices are 0-based positions in the coordinate
//! list, not vertex keys, so exported data has no holes even after deletions.
//! Format parsers and rendering adapters live outside this crate and talk to
//! it through [`MeshData`].

use serde::{Deserialize, Serialize};

use crate::debug_invariants::DebugInvariants;
use crate::geometry::Point3;
use crate::mesh_error::MeshError;
use crate::topology::face::FaceKind;
use crate::topology::key::VertexKey;
use crate::topology::mesh::PolyMesh;

/// Indexed face set: coordinates plus per-face index loops.
///
/// A loop of length 2 denotes a line element (see [`PolyMesh::add_line`]).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshData {
    pub vertices: Vec<[f64; 3]>,
    pub faces: Vec<Vec<usize>>,
}

impl MeshData {
    pub fn new(vertices: Vec<[f64; 3]>, faces: Vec<Vec<usize>>) -> Self {
        Self { vertices, faces }
    }
}

impl PolyMesh {
    /// Builds a mesh from coordinates and index loops.
    ///
    /// Vertex `i` receives key `i`; face `j` receives key `j`. Loops of length
    /// 2 become line elements, anything else goes through
    /// [`add_face`](PolyMesh::add_face) and its checks.
    ///
    /// # Errors
    /// [`MeshError::VertexIndexOutOfRange`] for an index past the coordinate
    /// list, or any error `add_face`/`add_line` would raise. Nothing is
    /// returned on failure; there is no partially built mesh.
    pub fn from_vertices_and_faces(
        vertices: &[[f64; 3]],
        faces: &[Vec<usize>],
    ) -> Result<Self, MeshError> {
        let mut mesh = PolyMesh::with_capacity(vertices.len(), faces.len());
        let keys: Vec<VertexKey> = vertices.iter().map(|&p| mesh.add_vertex(p)).collect();

        for loop_ in faces {
            let mapped = loop_
                .iter()
                .map(|&i| {
                    keys.get(i).copied().ok_or(MeshError::VertexIndexOutOfRange {
                        index: i,
                        len: keys.len(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            if mapped.len() == 2 {
                mesh.add_line(mapped[0], mapped[1])?;
            } else {
                mesh.add_face(mapped)?;
            }
        }

        log::debug!(
            "built mesh from arrays: {} vertices, {} faces, {} edges",
            mesh.vertex_count(),
            mesh.face_count(),
            mesh.edge_count()
        );
        crate::debug_invariants!(mesh.validate_invariants(), "from_vertices_and_faces");
        Ok(mesh)
    }

    /// Exports live vertices and faces as an indexed face set.
    ///
    /// Vertices are renumbered densely in key order; faces keep key order.
    pub fn to_vertices_and_faces(&self) -> MeshData {
        let mut index = vec![usize::MAX; self.vertex_slots().len()];
        let mut vertices = Vec::with_capacity(self.vertex_count());
        for (slot, p) in self.vertex_slots().iter().enumerate() {
            if let Some(p) = p {
                index[slot] = vertices.len();
                vertices.push(p.to_array());
            }
        }

        let faces = self
            .face_slots()
            .iter()
            .flatten()
            .map(|face| face.vertices().iter().map(|v| index[v.index()]).collect())
            .collect();

        MeshData { vertices, faces }
    }

    /// Live vertex coordinates as one flat `[x0, y0, z0, x1, ...]` buffer,
    /// in key order. Matches the vertex numbering of
    /// [`to_vertices_and_faces`](PolyMesh::to_vertices_and_faces).
    pub fn coordinate_buffer(&self) -> Vec<f64> {
        let points: Vec<Point3> = self.vertex_slots().iter().flatten().copied().collect();
        bytemuck::cast_slice::<Point3, f64>(&points).to_vec()
    }

    /// Number of line elements among the faces.
    pub fn line_count(&self) -> usize {
        self.face_slots()
            .iter()
            .flatten()
            .filter(|f| f.kind == FaceKind::Line)
            .count()
    }
}

impl TryFrom<&MeshData> for PolyMesh {
    type Error = MeshError;

    fn try_from(data: &MeshData) -> Result<Self, Self::Error> {
        PolyMesh::from_vertices_and_faces(&data.vertices, &data.faces)
    }
}

impl From<&PolyMesh> for MeshData {
    fn from(mesh: &PolyMesh) -> Self {
        mesh.to_vertices_and_faces()
    }
}
