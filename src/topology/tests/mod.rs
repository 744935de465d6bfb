mod store_tests;

use crate::geometry::Point3;
use crate::topology::{PolyMesh, VertexKey};

/// `w x h` grid of unit quads in the z = 0 plane, counter-clockwise faces.
/// Vertex `(i, j)` has key `j * (w + 1) + i`.
pub(crate) fn quad_grid(w: usize, h: usize) -> PolyMesh {
    let mut m = PolyMesh::with_capacity((w + 1) * (h + 1), w * h);
    for j in 0..=h {
        for i in 0..=w {
            m.add_vertex(Point3::new(i as f64, j as f64, 0.0));
        }
    }
    let key = |i: usize, j: usize| VertexKey::new((j * (w + 1) + i) as u64);
    for j in 0..h {
        for i in 0..w {
            m.add_face([key(i, j), key(i + 1, j), key(i + 1, j + 1), key(i, j + 1)])
                .unwrap();
        }
    }
    m
}
