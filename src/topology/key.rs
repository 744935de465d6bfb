//! `VertexKey` / `FaceKey`: strong, zero-cost handles for mesh entities.
//!
//! Every vertex and face of a [`PolyMesh`](crate::topology::mesh::PolyMesh) is
//! addressed by an opaque integer key. Keys are assigned monotonically by the
//! owning store, starting at 0, and are never handed out twice by the same
//! store even after the entity they named has been deleted.
//!
//! Both key types:
//! - are `repr(transparent)` over `u64`, so slices of keys can be handed to
//!   rendering or FFI layers without copying (they are `bytemuck::Pod`);
//! - serialize as bare integers;
//! - print as the raw integer with `Display` and as `VertexKey(n)` with `Debug`.

use std::fmt;

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

macro_rules! entity_key {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Pod, Zeroable, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        #[repr(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Wraps a raw key value.
            #[inline]
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            /// Returns the raw key value.
            #[inline]
            pub const fn get(self) -> u64 {
                self.0
            }

            /// Arena slot addressed by this key. Keys that do not fit in
            /// `usize` map to `usize::MAX`, a slot no arena can hold.
            #[inline]
            pub(crate) fn index(self) -> usize {
                usize::try_from(self.0).unwrap_or(usize::MAX)
            }

            #[inline]
            pub(crate) const fn from_index(index: usize) -> Self {
                Self(index as u64)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.0).finish()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$name> for u64 {
            #[inline]
            fn from(key: $name) -> u64 {
                key.0
            }
        }
    };
}

entity_key!(
    /// Key of a vertex inside one [`PolyMesh`](crate::topology::mesh::PolyMesh).
    VertexKey
);

entity_key!(
    /// Key of a face (polygon or line element) inside one
    /// [`PolyMesh`](crate::topology::mesh::PolyMesh).
    FaceKey
);
