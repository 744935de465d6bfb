use super::quad_grid;
use crate::geometry::Point3;
use crate::mesh_error::MeshError;
use crate::topology::{EdgeKey, FaceKey, PolyMesh, VertexKey};

fn v(i: u64) -> VertexKey {
    VertexKey::new(i)
}

#[test]
fn third_face_on_edge_is_rejected_and_store_unchanged() {
    let mut m = PolyMesh::new();
    let a = m.add_vertex([0.0, 0.0, 0.0]);
    let b = m.add_vertex([1.0, 0.0, 0.0]);
    let c = m.add_vertex([0.0, 1.0, 0.0]);
    let d = m.add_vertex([0.0, -1.0, 0.0]);
    let e = m.add_vertex([0.0, 0.0, 1.0]);
    let f0 = m.add_face([a, b, c]).unwrap();
    let f1 = m.add_face([b, a, d]).unwrap();

    let before_edges = m.edge_count();
    let next = m.next_face_key();
    let err = m.add_face([a, b, e]).unwrap_err();
    assert_eq!(
        err,
        MeshError::NonManifold {
            edge: EdgeKey::new(a, b),
            faces: [f0, f1],
        }
    );
    assert_eq!(m.face_count(), 2);
    assert_eq!(m.edge_count(), before_edges);
    assert_eq!(m.next_face_key(), next);
    assert!(!m.has_edge(a, e));
    assert!(m.vertex_neighbors(e).unwrap().is_empty());
}

#[test]
fn delete_vertex_cascades_to_incident_faces() {
    // 3x3 grid, centre block vertex (1, 1) touches faces 0, 1, 3, 4.
    let mut m = quad_grid(3, 3);
    let centre = v(5);
    assert_eq!(m.vertex_faces(centre).unwrap().len(), 4);
    m.delete_vertex(centre).unwrap();

    assert_eq!(m.face_count(), 5);
    assert!(!m.has_vertex(centre));
    for f in m.faces() {
        assert!(!m.face_vertices(f).unwrap().contains(&centre));
    }
    for (a, b) in m.edges() {
        assert!(a != centre && b != centre);
    }
    assert_eq!(m.delete_vertex(centre), Err(MeshError::VertexNotFound(centre)));
}

#[test]
fn deleted_keys_are_never_reissued() {
    let mut m = PolyMesh::new();
    let a = m.add_vertex([0.0, 0.0, 0.0]);
    let b = m.add_vertex([1.0, 0.0, 0.0]);
    let c = m.add_vertex([0.0, 1.0, 0.0]);
    let f = m.add_face([a, b, c]).unwrap();
    m.delete_face(f).unwrap();
    m.delete_vertex(c).unwrap();

    let c2 = m.add_vertex([0.0, 2.0, 0.0]);
    assert_ne!(c2, c);
    assert_eq!(c2, v(3));
    let f2 = m.add_face([a, b, c2]).unwrap();
    assert_ne!(f2, f);
    assert_eq!(f2, FaceKey::new(1));
    assert_eq!(m.vertices().collect::<Vec<_>>(), vec![a, b, c2]);
}

#[test]
fn coordinates_round_trip_exactly() {
    let mut m = PolyMesh::new();
    let pts = [
        Point3::new(0.1, 0.2, 0.3),
        Point3::new(-1e300, 5e-324, f64::MAX),
        Point3::new(1.0 / 3.0, 2.0 / 3.0, -0.0),
    ];
    let keys: Vec<_> = pts.iter().map(|&p| m.add_vertex(p)).collect();
    for (k, p) in keys.iter().zip(pts) {
        assert_eq!(m.vertex_coordinate(*k).unwrap(), p);
    }
}

#[test]
fn queries_on_missing_keys_fail() {
    let m = quad_grid(1, 1);
    let (gv, gf) = (v(100), FaceKey::new(100));
    assert_eq!(m.vertex_coordinate(gv), Err(MeshError::VertexNotFound(gv)));
    assert_eq!(m.face_vertices(gf), Err(MeshError::FaceNotFound(gf)));
    assert_eq!(m.vertex_neighbors(gv), Err(MeshError::VertexNotFound(gv)));
    assert_eq!(m.vertex_faces(gv), Err(MeshError::VertexNotFound(gv)));
    assert!(m.face_neighbors(gf).unwrap_err().is_key_not_found());
}

#[test]
fn grid_counts_and_euler() {
    let m = quad_grid(3, 2);
    assert_eq!(m.vertex_count(), 12);
    assert_eq!(m.face_count(), 6);
    assert_eq!(m.edge_count(), 17);
    assert_eq!(m.edges().count(), 17);
    assert_eq!(m.euler_characteristic(), 1);
}

#[test]
fn interior_vertex_ring_of_grid() {
    // 2x2 grid: centre vertex 4 with neighbours 1, 3, 5, 7.
    let m = quad_grid(2, 2);
    let ring = m.vertex_ring(v(4)).unwrap();
    assert_eq!(ring.faces, vec![FaceKey::new(0), FaceKey::new(2), FaceKey::new(3), FaceKey::new(1)]);
    assert_eq!(ring.neighbors, vec![v(1), v(3), v(7), v(5)]);
    assert!(!m.is_vertex_on_boundary(v(4)).unwrap());
    assert_eq!(m.vertex_degree(v(4)).unwrap(), 4);
}

#[test]
fn face_neighbors_and_edge_faces() {
    let m = quad_grid(2, 2);
    assert_eq!(
        m.face_neighbors(FaceKey::new(0)).unwrap(),
        vec![FaceKey::new(1), FaceKey::new(2)]
    );
    assert_eq!(
        m.edge_faces(v(1), v(4)).unwrap(),
        vec![FaceKey::new(0), FaceKey::new(1)]
    );
    assert!(m.edge_faces(v(0), v(8)).unwrap().is_empty());
}

#[test]
fn edges_are_canonical_and_in_face_order() {
    let m = quad_grid(2, 1);
    let edges: Vec<(u64, u64)> = m.edges().map(|(a, b)| (a.get(), b.get())).collect();
    assert_eq!(
        edges,
        vec![(0, 1), (1, 4), (3, 4), (0, 3), (1, 2), (2, 5), (4, 5)]
    );
}
