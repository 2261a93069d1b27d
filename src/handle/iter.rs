// Copyright the graph contributors.
// Licensed under the Apache License, Version 2.0 (see LICENSE).

use super::Handle;

/// A handle keyed by a monotonically increasing "birth index" assigned on insertion into an
/// ordered (`BTreeMap`) node container.
///
/// Rather than wrapping a raw container iterator (which has no stable, comparable, hashable
/// identity of its own in Rust), the birth index itself is the key a handle carries, giving it
/// the ordering/hash contract `Handle` requires.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct IterHandle(u64);

impl IterHandle {
    pub(crate) const NULL: u64 = u64::MAX;

    pub(crate) fn new(birth: u64) -> Self {
        debug_assert!(birth != Self::NULL, "birth index collides with the null sentinel");
        IterHandle(birth)
    }

    pub(crate) fn birth(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Debug for IterHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_null() {
            write!(f, "IterHandle(null)")
        } else {
            write!(f, "IterHandle({})", self.0)
        }
    }
}

impl Handle for IterHandle {
    fn null() -> Self {
        IterHandle(Self::NULL)
    }
}
