//! Cache invalidation shared by structures that memoize derived topology.

/// Anything that caches derived topology (boundary loops, …) implements this.
pub trait InvalidateCache {
    /// Invalidate *all* internal caches so future queries recompute correctly.
    fn invalidate_cache(&mut self);
}
