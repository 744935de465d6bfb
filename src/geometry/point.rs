//! Vertex coordinates.

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// A 3-component coordinate.
///
/// `repr(C)` with three `f64` fields and no padding, so a `&[Point3]` can be
/// reinterpreted as a flat `&[f64]` of `xyz` triples.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Planar projection, as used by 2D plotting adapters.
    #[inline]
    pub fn xy(self) -> [f64; 2] {
        [self.x, self.y]
    }

    #[inline]
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f64; 3]> for Point3 {
    #[inline]
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<Point3> for [f64; 3] {
    #[inline]
    fn from(p: Point3) -> Self {
        p.to_array()
    }
}

/// Arithmetic mean of `points`, or `None` when the iterator is empty.
pub fn centroid<I>(points: I) -> Option<Point3>
where
    I: IntoIterator<Item = Point3>,
{
    let mut n = 0usize;
    let mut sum = Point3::default();
    for p in points {
        sum.x += p.x;
        sum.y += p.y;
        sum.z += p.z;
        n += 1;
    }
    if n == 0 {
        return None;
    }
    let inv = 1.0 / n as f64;
    Some(Point3::new(sum.x * inv, sum.y * inv, sum.z * inv))
}
