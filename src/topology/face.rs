//! Face records stored in the topology arena.

use itertools::{Either, Itertools};
use serde::{Deserialize, Serialize};

use super::key::VertexKey;

/// What a face record represents.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaceKind {
    /// A closed polygon with at least three corners.
    Polygon,
    /// An explicit two-vertex line element; contributes exactly one edge.
    Line,
}

impl FaceKind {
    /// Smallest loop length accepted for this kind.
    #[inline]
    pub fn min_len(self) -> usize {
        match self {
            FaceKind::Polygon => 3,
            FaceKind::Line => 2,
        }
    }
}

/// A face: its kind and its boundary loop in winding order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Face {
    pub(crate) kind: FaceKind,
    pub(crate) loop_: Vec<VertexKey>,
}

impl Face {
    #[inline]
    pub(crate) fn vertices(&self) -> &[VertexKey] {
        &self.loop_
    }

    /// Directed edges of the loop: cyclic for polygons, the single segment
    /// for a line element.
    pub(crate) fn directed_edges(
        &self,
    ) -> impl Iterator<Item = (VertexKey, VertexKey)> + '_ {
        let it = self.loop_.iter().copied();
        match self.kind {
            FaceKind::Polygon => Either::Left(it.circular_tuple_windows()),
            FaceKind::Line => Either::Right(it.tuple_windows()),
        }
    }

    /// `(prev, next)` around `v` in a polygon loop.
    pub(crate) fn corner(&self, v: VertexKey) -> Option<(VertexKey, VertexKey)> {
        let n = self.loop_.len();
        let i = self.loop_.iter().position(|&w| w == v)?;
        Some((self.loop_[(i + n - 1) % n], self.loop_[(i + 1) % n]))
    }
}
