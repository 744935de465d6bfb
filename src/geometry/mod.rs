//! Geometry primitives used by the topology store and the dual builder.
//!
//! The crate only carries the geometry the dual construction needs: plain
//! coordinates and centroids.

pub mod point;

pub use point::{Point3, centroid};
