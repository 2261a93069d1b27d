// Copyright the graph contributors.
// Licensed under the Apache License, Version 2.0 (see LICENSE).

use super::{DenseHandle, Handle};

/// A dense `u32` handle; `u32::MAX` is reserved as the null value.
///
/// Backs the "stable" and "atomic" storage representations, whose indices are never recycled and
/// are assigned densely (by plain counter or by atomic fetch-add).
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct IntegerHandle(u32);

impl IntegerHandle {
    pub(crate) const NULL: u32 = u32::MAX;

    pub(crate) fn new(index: u32) -> Self {
        debug_assert!(index != Self::NULL, "index collides with the null sentinel");
        IntegerHandle(index)
    }
}

impl std::fmt::Debug for IntegerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_null() {
            write!(f, "IntegerHandle(null)")
        } else {
            write!(f, "IntegerHandle({})", self.0)
        }
    }
}

impl Handle for IntegerHandle {
    fn null() -> Self {
        IntegerHandle(Self::NULL)
    }
}

impl DenseHandle for IntegerHandle {
    fn index(&self) -> usize {
        self.0 as usize
    }

    fn from_index(index: usize) -> Self {
        IntegerHandle::new(index as u32)
    }
}
