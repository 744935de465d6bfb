//! Canonical undirected edges.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::key::VertexKey;

/// An undirected edge `{u, v}` stored as `(min, max)`.
///
/// Two directed edges `(u, v)` and `(v, u)` map to the same `EdgeKey`, which is
/// what the adjacency index and the edge enumerator use to avoid
/// double-counting.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeKey {
    lo: VertexKey,
    hi: VertexKey,
}

impl EdgeKey {
    /// Canonicalizes the pair `(u, v)`.
    #[inline]
    pub fn new(u: VertexKey, v: VertexKey) -> Self {
        if u <= v {
            Self { lo: u, hi: v }
        } else {
            Self { lo: v, hi: u }
        }
    }

    /// The smaller endpoint.
    #[inline]
    pub fn lo(self) -> VertexKey {
        self.lo
    }

    /// The larger endpoint.
    #[inline]
    pub fn hi(self) -> VertexKey {
        self.hi
    }

    /// Both endpoints in canonical order.
    #[inline]
    pub fn vertices(self) -> (VertexKey, VertexKey) {
        (self.lo, self.hi)
    }

    #[inline]
    pub fn contains(self, v: VertexKey) -> bool {
        self.lo == v || self.hi == v
    }

    /// The endpoint opposite `v`, if `v` is an endpoint.
    #[inline]
    pub fn other(self, v: VertexKey) -> Option<VertexKey> {
        if v == self.lo {
            Some(self.hi)
        } else if v == self.hi {
            Some(self.lo)
        } else {
            None
        }
    }
}

impl From<(VertexKey, VertexKey)> for EdgeKey {
    #[inline]
    fn from((u, v): (VertexKey, VertexKey)) -> Self {
        Self::new(u, v)
    }
}

impl fmt::Debug for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EdgeKey({}, {})", self.lo, self.hi)
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.lo, self.hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(i: u64) -> VertexKey {
        VertexKey::new(i)
    }

    #[test]
    fn both_directions_canonicalize_identically() {
        assert_eq!(EdgeKey::new(v(5), v(2)), EdgeKey::new(v(2), v(5)));
        assert_eq!(EdgeKey::new(v(5), v(2)).vertices(), (v(2), v(5)));
    }

    #[test]
    fn other_endpoint() {
        let e = EdgeKey::new(v(1), v(3));
        assert_eq!(e.other(v(1)), Some(v(3)));
        assert_eq!(e.other(v(3)), Some(v(1)));
        assert_eq!(e.other(v(2)), None);
        assert!(e.contains(v(3)));
    }

    #[test]
    fn display_forms() {
        let e = EdgeKey::new(v(4), v(0));
        assert_eq!(format!("{e}"), "{0, 4}");
        assert_eq!(format!("{e:?}"), "EdgeKey(0, 4)");
    }
}
