// Copyright the graph contributors.
// Licensed under the Apache License, Version 2.0 (see LICENSE).

//! Concrete storage representations: edge lists and adjacency lists in iterator-handle,
//! integer-handle ("stable"), and lock-free atomic flavours, plus a supplemental pointer-handle
//! representation.

pub mod adjacency_list;
pub mod atomic_adjacency_list;
pub mod atomic_vec;
pub mod contiguous_atomic_adjacency_list;
pub mod edge_list;
pub mod stable_adjacency_list;
pub mod stable_bi_adjacency_list;
pub mod stable_edge_list;
pub mod stable_node_list;

use crate::handle::Handle;
use crate::side::Tracker;

/// The read-only operations any graph — an owning representation or a non-owning view — provides.
///
/// Split from [`Storage`] so that views (reverse, subforest/subtree, tensor product), which borrow
/// rather than own their vertex/edge storage, can implement this without also promising
/// insertion.
pub trait GraphCore {
    type Vert: Handle;
    type Edge: Handle;

    fn order(&self) -> usize;
    fn size(&self) -> usize;
    fn null_vert(&self) -> Self::Vert {
        Self::Vert::null()
    }
    fn null_edge(&self) -> Self::Edge {
        Self::Edge::null()
    }
    fn verts(&self) -> Box<dyn Iterator<Item = Self::Vert> + '_>;
    fn edges(&self) -> Box<dyn Iterator<Item = Self::Edge> + '_>;
    fn tail(&self, e: Self::Edge) -> Self::Vert;
    fn head(&self, e: Self::Edge) -> Self::Vert;
}

/// Implemented by representations that own their vertex/edge storage and can grow.
pub trait Storage: GraphCore {
    fn insert_vert(&mut self) -> Self::Vert;
    fn insert_edge(&mut self, tail: Self::Vert, head: Self::Vert) -> Self::Edge;

    fn vert_tracker(&self) -> &Tracker<Self::Vert>;
    fn edge_tracker(&self) -> &Tracker<Self::Edge>;
}

/// Implemented by any graph (owning or view) exposing outgoing adjacency.
pub trait HasOutEdges: GraphCore {
    fn out_edges(&self, v: Self::Vert) -> Box<dyn Iterator<Item = Self::Edge> + '_>;
    fn out_degree(&self, v: Self::Vert) -> usize {
        self.out_edges(v).count()
    }
}

/// Implemented by any graph (owning or view) exposing incoming adjacency.
pub trait HasInEdges: GraphCore {
    fn in_edges(&self, v: Self::Vert) -> Box<dyn Iterator<Item = Self::Edge> + '_>;
    fn in_degree(&self, v: Self::Vert) -> usize {
        self.in_edges(v).count()
    }
}

/// Implemented by representations supporting removal (the "iterator handle" family).
pub trait SupportsErase: Storage {
    /// A representation that tracks only one adjacency direction rejects erasing `v` while a
    /// live edge has `v` as its cokey endpoint (the untracked side can't be fixed up), removing
    /// `v`'s own key edges on success. A representation tracking both directions has no
    /// untracked side to protect and instead removes every edge incident to `v` before removing
    /// `v` itself, deduplicating self-loops.
    fn erase_vert(&mut self, v: Self::Vert) -> crate::error::GraphResult<()>;
    fn erase_edge(&mut self, e: Self::Edge);
    fn clear(&mut self);
}

/// Implemented by representations supporting lock-free concurrent growth.
pub trait AtomicInsert: Storage {
    fn atomic_insert_vert(&self) -> Self::Vert;
    fn atomic_insert_edge(&self, tail: Self::Vert, head: Self::Vert) -> Self::Edge;
    /// May under-count in the presence of concurrent inserters; never over-counts a committed
    /// insert as absent.
    fn conservative_order(&self) -> usize {
        self.order()
    }
    fn conservative_size(&self) -> usize {
        self.size()
    }
}
