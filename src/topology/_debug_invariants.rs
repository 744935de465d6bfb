use std::collections::HashMap;

/// `inv_assert` fires in debug builds and whenever the `strict-invariants`
/// or `check-invariants` feature is enabled; it compiles to a no-op otherwise.
#[cfg(any(
    debug_assertions,
    feature = "strict-invariants",
    feature = "check-invariants"
))]
macro_rules! inv_assert {
    ($($tt:tt)*) => { assert!($($tt)*); };
}
#[cfg(not(any(
    debug_assertions,
    feature = "strict-invariants",
    feature = "check-invariants"
)))]
macro_rules! inv_assert {
    ($($tt:tt)*) => {
        ()
    };
}
pub(crate) use inv_assert;

/// Multiset of pairs, e.g. canonical edges recounted from face loops.
#[inline]
pub(crate) fn count_pairs<P: Copy + Eq + std::hash::Hash>(
    it: impl IntoIterator<Item = (P, P)>,
) -> HashMap<(P, P), u32> {
    let mut m = HashMap::new();
    for e in it {
        *m.entry(e).or_insert(0) += 1;
    }
    m
}

#[cfg(any(
    debug_assertions,
    feature = "strict-invariants",
    feature = "check-invariants"
))]
macro_rules! debug_invariants {
    ($s:expr) => {
        $crate::debug_invariants::DebugInvariants::debug_assert_invariants($s);
    };
}

#[cfg(not(any(
    debug_assertions,
    feature = "strict-invariants",
    feature = "check-invariants"
)))]
macro_rules! debug_invariants {
    ($s:expr) => {
        ()
    };
}

pub(crate) use debug_invariants;
