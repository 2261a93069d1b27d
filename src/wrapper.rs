// Copyright the graph contributors.
// Licensed under the Apache License, Version 2.0 (see LICENSE).

//! The generic façade over any storage representation. Out/in/bidirectional capability surfaces
//! are expressed as separate `impl` blocks gated on marker traits rather than multiple
//! inheritance.

use rand::Rng;

use crate::error::{GraphError, GraphResult};
use crate::handle::{DenseHandle, Handle};
use crate::path::Path;
use crate::storage::{GraphCore, HasInEdges, HasOutEdges, Storage, SupportsErase};
use crate::views::reverse::Reverse;
use crate::views::subforest::{InSubforest, InSubtree, OutSubforest, OutSubtree};

/// Uniform façade over a storage representation `S`.
///
/// Read-only operations are bounded on [`GraphCore`] so they're available on borrowing views
/// (reverse, subforest/subtree) as well as owning storage; only insertion needs the stronger
/// [`Storage`] bound. Operations available only for capable representations are added by separate
/// `impl` blocks below, gated on `S: HasOutEdges` / `S: HasInEdges`.
pub struct Graph<S> {
    pub(crate) storage: S,
}

impl<S: Storage> Graph<S> {
    pub fn new(storage: S) -> Self {
        Graph { storage }
    }

    pub fn insert_vert(&mut self) -> S::Vert {
        self.storage.insert_vert()
    }

    pub fn insert_edge(&mut self, tail: S::Vert, head: S::Vert) -> S::Edge {
        self.storage.insert_edge(tail, head)
    }
}

impl<S: SupportsErase> Graph<S> {
    pub fn erase_vert(&mut self, v: S::Vert) -> GraphResult<()> {
        self.storage.erase_vert(v)
    }

    pub fn erase_edge(&mut self, e: S::Edge) {
        self.storage.erase_edge(e)
    }

    pub fn clear(&mut self) {
        self.storage.clear()
    }
}

impl<S: GraphCore> Graph<S> {
    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn order(&self) -> usize {
        self.storage.order()
    }

    pub fn size(&self) -> usize {
        self.storage.size()
    }

    pub fn null_vert(&self) -> S::Vert {
        self.storage.null_vert()
    }

    pub fn null_edge(&self) -> S::Edge {
        self.storage.null_edge()
    }

    pub fn verts(&self) -> Box<dyn Iterator<Item = S::Vert> + '_> {
        self.storage.verts()
    }

    pub fn edges(&self) -> Box<dyn Iterator<Item = S::Edge> + '_> {
        self.storage.edges()
    }

    pub fn tail(&self, e: S::Edge) -> S::Vert {
        self.storage.tail(e)
    }

    pub fn head(&self, e: S::Edge) -> S::Vert {
        self.storage.head(e)
    }

    /// Reservoir-samples a uniformly random live vertex.
    ///
    /// None of the representations here are simultaneously an `ExactSizeIterator` and
    /// randomly-indexable, so reservoir sampling is the one implementation used for every
    /// representation (see DESIGN.md for the tradeoff against a representation-specific
    /// O(1) random-access fast path).
    pub fn random_vert<R: Rng>(&self, rng: &mut R) -> GraphResult<S::Vert> {
        sample_one(self.verts(), rng)
    }

    pub fn random_edge<R: Rng>(&self, rng: &mut R) -> GraphResult<S::Edge> {
        sample_one(self.edges(), rng)
    }

    pub fn reverse_view(&self) -> Graph<Reverse<'_, S>> {
        Graph::new(Reverse::new(&self.storage))
    }

    pub fn path(&self, source: S::Vert, edges: Vec<S::Edge>) -> GraphResult<Path<S>> {
        Path::new(&self.storage, source, edges)
    }

    pub fn null_path(&self) -> Path<S> {
        Path::null()
    }

    pub fn concatenate_paths(&self, p: Path<S>, q: Path<S>) -> GraphResult<Path<S>> {
        p.concatenate(&self.storage, q)
    }

    pub fn all_pairs_shortest_paths<D, W, C, Cb>(
        &self,
        weight: W,
        compare: C,
        combine: Cb,
        zero: D,
        inf: D,
    ) -> GraphResult<Vec<(S::Vert, Vec<(S::Vert, D)>)>>
    where
        D: Clone,
        W: FnMut(S::Edge) -> D,
        C: FnMut(&D, &D) -> bool,
        Cb: FnMut(&D, &D) -> D,
    {
        crate::algo::floyd_warshall::floyd_warshall(&self.storage, weight, compare, combine, zero, inf)
    }
}

fn sample_one<H: Handle, R: Rng>(mut iter: Box<dyn Iterator<Item = H> + '_>, rng: &mut R) -> GraphResult<H> {
    let mut chosen = None;
    let mut seen = 0u64;
    while let Some(item) = iter.next() {
        seen += 1;
        if rng.random_range(0..seen) == 0 {
            chosen = Some(item);
        }
    }
    chosen.ok_or(GraphError::PreconditionUnmet("sampling from an empty set"))
}

impl<S: GraphCore + HasOutEdges> Graph<S> {
    pub fn out_edges(&self, v: S::Vert) -> Box<dyn Iterator<Item = S::Edge> + '_> {
        self.storage.out_edges(v)
    }

    pub fn out_degree(&self, v: S::Vert) -> usize {
        self.storage.out_degree(v)
    }

    pub fn out_subforest(&self) -> Graph<OutSubforest<'_, S>> {
        Graph::new(OutSubforest::new(&self.storage))
    }

    pub fn out_subtree(&self, root: S::Vert) -> Graph<OutSubtree<'_, S>> {
        Graph::new(OutSubtree::new(&self.storage, root))
    }

    pub fn shortest_paths_from<D, W, C, Cb>(
        &self,
        source: S::Vert,
        weight: W,
        compare: C,
        combine: Cb,
        zero: D,
        inf: D,
    ) -> GraphResult<(Graph<InSubtree<'_, S>>, Vec<(S::Vert, D)>)>
    where
        D: Clone,
        W: FnMut(S::Edge) -> D,
        C: FnMut(&D, &D) -> bool,
        Cb: FnMut(&D, &D) -> D,
    {
        crate::algo::dijkstra::dijkstra_out(&self.storage, source, weight, compare, combine, zero, inf)
    }

    pub fn minimum_tree_reachable_from<D, W, C>(
        &self,
        source: S::Vert,
        weight: W,
        compare: C,
    ) -> Graph<InSubtree<'_, S>>
    where
        D: Clone,
        W: FnMut(S::Edge) -> D,
        C: FnMut(&D, &D) -> bool,
    {
        crate::algo::prim::prim_out(&self.storage, source, weight, compare)
    }
}

impl<S: GraphCore + HasInEdges> Graph<S> {
    pub fn in_edges(&self, v: S::Vert) -> Box<dyn Iterator<Item = S::Edge> + '_> {
        self.storage.in_edges(v)
    }

    pub fn in_degree(&self, v: S::Vert) -> usize {
        self.storage.in_degree(v)
    }

    pub fn in_subforest(&self) -> Graph<InSubforest<'_, S>> {
        Graph::new(InSubforest::new(&self.storage))
    }

    pub fn in_subtree(&self, root: S::Vert) -> Graph<InSubtree<'_, S>> {
        Graph::new(InSubtree::new(&self.storage, root))
    }

    pub fn shortest_paths_to<D, W, C, Cb>(
        &self,
        target: S::Vert,
        weight: W,
        compare: C,
        combine: Cb,
        zero: D,
        inf: D,
    ) -> GraphResult<(Graph<OutSubtree<'_, S>>, Vec<(S::Vert, D)>)>
    where
        D: Clone,
        W: FnMut(S::Edge) -> D,
        C: FnMut(&D, &D) -> bool,
        Cb: FnMut(&D, &D) -> D,
    {
        crate::algo::dijkstra::dijkstra_in(&self.storage, target, weight, compare, combine, zero, inf)
    }

    pub fn minimum_tree_reaching_to<D, W, C>(
        &self,
        target: S::Vert,
        weight: W,
        compare: C,
    ) -> Graph<OutSubtree<'_, S>>
    where
        D: Clone,
        W: FnMut(S::Edge) -> D,
        C: FnMut(&D, &D) -> bool,
    {
        crate::algo::prim::prim_in(&self.storage, target, weight, compare)
    }
}

impl<S: GraphCore + HasOutEdges + HasInEdges> Graph<S> {
    pub fn shortest_path<D, W, C, Cb>(
        &self,
        s: S::Vert,
        t: S::Vert,
        weight: W,
        compare: C,
        combine: Cb,
        zero: D,
        inf: D,
    ) -> GraphResult<Path<S>>
    where
        D: Clone,
        W: FnMut(S::Edge) -> D,
        C: FnMut(&D, &D) -> bool,
        Cb: FnMut(&D, &D) -> D,
    {
        crate::algo::bidirectional::shortest_path(&self.storage, s, t, weight, compare, combine, zero, inf)
    }
}

impl<S: GraphCore + HasOutEdges + HasInEdges + Sync> Graph<S>
where
    S::Vert: Send + DenseHandle,
    S::Edge: Send,
{
    /// Two-thread bidirectional search: a forward search from `s` and a backward search from `t`
    /// run concurrently and rendezvous when an edge settled by one side lands on a vertex closed
    /// by the other. Once both threads finish, the rendezvous scan walks every vertex in the
    /// storage and keeps the one with the least combined distance among those closed on both
    /// sides (see DESIGN.md).
    ///
    /// Requires a dense vertex handle so each side's closed-set signal can be a plain
    /// `Vec<AtomicBool>` indexed by `S::Vert::index()`; representations without a dense handle use
    /// [`Graph::shortest_path`] instead.
    pub fn parallel_shortest_path<D, W, C, Cb>(
        &self,
        s: S::Vert,
        t: S::Vert,
        weight: W,
        compare: C,
        combine: Cb,
        zero: D,
        inf: D,
    ) -> GraphResult<Path<S>>
    where
        D: Clone + Send,
        W: Fn(S::Edge) -> D + Sync,
        C: Fn(&D, &D) -> bool + Sync,
        Cb: Fn(&D, &D) -> D + Sync,
    {
        crate::algo::parallel_bidirectional::parallel_shortest_path(
            &self.storage,
            s,
            t,
            weight,
            compare,
            combine,
            zero,
            inf,
        )
    }
}
