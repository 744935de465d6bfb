#![allow(dead_code)]
use polymesh::prelude::*;

pub fn vk(u: u64) -> VertexKey {
    VertexKey::new(u)
}

pub fn fk(u: u64) -> FaceKey {
    FaceKey::new(u)
}

/// `w x h` grid of unit quads in the z = 0 plane, counter-clockwise faces.
/// Vertex `(i, j)` has key `j * (w + 1) + i`, face `(i, j)` has key `j * w + i`.
pub fn grid(w: usize, h: usize) -> PolyMesh {
    let vertices = (0..=h)
        .flat_map(|j| (0..=w).map(move |i| [i as f64, j as f64, 0.0]))
        .collect::<Vec<_>>();
    let k = |i: usize, j: usize| j * (w + 1) + i;
    let faces = (0..h)
        .flat_map(|j| (0..w).map(move |i| vec![k(i, j), k(i + 1, j), k(i + 1, j + 1), k(i, j + 1)]))
        .collect::<Vec<_>>();
    PolyMesh::from_vertices_and_faces(&vertices, &faces).unwrap()
}

/// Unit cube with outward-facing quads. Vertex `i` sits at
/// `(i & 1, (i >> 1) & 1, (i >> 2) & 1)`.
/// Faces: bottom, top, front (y = 0), back, left (x = 0), right.
pub fn cube() -> PolyMesh {
    let vertices: Vec<[f64; 3]> = (0..8u32)
        .map(|i| [(i & 1) as f64, ((i >> 1) & 1) as f64, ((i >> 2) & 1) as f64])
        .collect();
    let faces = vec![
        vec![0, 2, 3, 1],
        vec![4, 5, 7, 6],
        vec![0, 1, 5, 4],
        vec![2, 6, 7, 3],
        vec![0, 4, 6, 2],
        vec![1, 3, 7, 5],
    ];
    PolyMesh::from_vertices_and_faces(&vertices, &faces).unwrap()
}

/// Two triangles sharing the edge `{1, 2}`.
pub fn two_triangles() -> PolyMesh {
    PolyMesh::from_vertices_and_faces(
        &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0]],
        &[vec![0, 1, 2], vec![2, 1, 3]],
    )
    .unwrap()
}

/// Two triangles `[0, 1, 2]` and `[1, 2, 3]` whose shared edge `{1, 2}` is
/// traversed in the same direction by both faces.
pub fn mixed_winding_triangles() -> PolyMesh {
    PolyMesh::from_vertices_and_faces(
        &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [1.0, 1.0, 0.0]],
        &[vec![0, 1, 2], vec![1, 2, 3]],
    )
    .unwrap()
}

/// `n` triangles around vertex 0; closed when `closed`, otherwise the fan
/// misses the wedge between rim vertices `n` and 1.
pub fn fan(n: usize, closed: bool) -> PolyMesh {
    let mut vertices = vec![[0.0, 0.0, 0.0]];
    for i in 0..n {
        let t = i as f64 / n as f64 * std::f64::consts::TAU;
        vertices.push([t.cos(), t.sin(), 0.0]);
    }
    let count = if closed { n } else { n - 1 };
    let faces: Vec<Vec<usize>> = (0..count)
        .map(|i| vec![0, 1 + i, 1 + (i + 1) % n])
        .collect();
    PolyMesh::from_vertices_and_faces(&vertices, &faces).unwrap()
}

/// Assert vec is a permutation of another vec (order-agnostic).
pub fn assert_permutation<T: Ord + Copy + std::fmt::Debug>(got: &[T], want: &[T]) {
    let mut a = got.to_vec();
    a.sort_unstable();
    let mut b = want.to_vec();
    b.sort_unstable();
    assert_eq!(a, b, "not a permutation\n got={:?}\nwant={:?}", got, want);
}

/// Checks that `ring` is consistently ordered: face `i` contains neighbours
/// `i` and `i + 1` (cyclically when the ring is closed).
pub fn assert_ring_consistent(mesh: &PolyMesh, v: VertexKey) {
    let ring = mesh.vertex_ring(v).unwrap();
    let n = ring.neighbors.len();
    let closed = ring.faces.len() == n;
    assert!(closed || ring.faces.len() + 1 == n, "ring of {v}: {ring:?}");
    for (i, &f) in ring.faces.iter().enumerate() {
        let loop_ = mesh.face_vertices(f).unwrap();
        let a = ring.neighbors[i];
        let b = ring.neighbors[(i + 1) % n];
        assert!(
            loop_.contains(&v) && loop_.contains(&a) && loop_.contains(&b),
            "face {f} of ring {v} should hold {a} and {b}: {loop_:?}"
        );
    }
}
