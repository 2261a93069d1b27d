// Copyright the graph contributors.
// Licensed under the Apache License, Version 2.0 (see LICENSE).

//! Prim's minimum reachable/reaching tree, lazy variant: stale heap entries are
//! discarded on pop rather than decrease-keyed.

use crate::side::{EphemeralHashSet, SideSet};
use crate::storage::{GraphCore, HasInEdges, HasOutEdges};
use crate::views::subforest::{InSubtree, OutSubtree};
use crate::wrapper::Graph;

use super::heap::CompareHeap;

/// Grows a minimum tree reachable from `source` via outgoing adjacency.
pub fn prim_out<'a, S, D, W, C>(storage: &'a S, source: S::Vert, mut weight: W, mut compare: C) -> Graph<InSubtree<'a, S>>
where
    S: GraphCore + HasOutEdges,
    D: Clone,
    W: FnMut(S::Edge) -> D,
    C: FnMut(&D, &D) -> bool,
{
    let mut tree = InSubtree::new(storage, source);
    let mut closed: EphemeralHashSet<S::Vert> = EphemeralHashSet::new();
    closed.insert(source);

    let mut heap = CompareHeap::new(|a: &(D, S::Edge, S::Vert), b: &(D, S::Edge, S::Vert)| compare(&a.0, &b.0));
    for e in storage.out_edges(source) {
        let u = storage.head(e);
        heap.push((weight(e), e, u));
    }

    while let Some((_, e, u)) = heap.pop() {
        if closed.contains(u) {
            continue;
        }
        closed.insert(u);
        tree.set_key_edge(u, e);
        for e2 in storage.out_edges(u) {
            let w = storage.head(e2);
            if !closed.contains(w) {
                heap.push((weight(e2), e2, w));
            }
        }
    }

    Graph::new(tree)
}

/// Symmetric to [`prim_out`]: grows a minimum tree reaching `target` via incoming adjacency.
pub fn prim_in<'a, S, D, W, C>(storage: &'a S, target: S::Vert, mut weight: W, mut compare: C) -> Graph<OutSubtree<'a, S>>
where
    S: GraphCore + HasInEdges,
    D: Clone,
    W: FnMut(S::Edge) -> D,
    C: FnMut(&D, &D) -> bool,
{
    let mut tree = OutSubtree::new(storage, target);
    let mut closed: EphemeralHashSet<S::Vert> = EphemeralHashSet::new();
    closed.insert(target);

    let mut heap = CompareHeap::new(|a: &(D, S::Edge, S::Vert), b: &(D, S::Edge, S::Vert)| compare(&a.0, &b.0));
    for e in storage.in_edges(target) {
        let u = storage.tail(e);
        heap.push((weight(e), e, u));
    }

    while let Some((_, e, u)) = heap.pop() {
        if closed.contains(u) {
            continue;
        }
        closed.insert(u);
        tree.set_key_edge(u, e);
        for e2 in storage.in_edges(u) {
            let w = storage.tail(e2);
            if !closed.contains(w) {
                heap.push((weight(e2), e2, w));
            }
        }
    }

    Graph::new(tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::adjacency_list::BiAdjacencyList;
    use crate::storage::Storage;

    #[test]
    fn prim_picks_the_cheaper_edge_into_each_vertex() {
        let mut g = BiAdjacencyList::new();
        let a = g.insert_vert();
        let b = g.insert_vert();
        let c = g.insert_vert();
        let e_ac_expensive = g.insert_edge(a, c);
        let e_ab = g.insert_edge(a, b);
        let e_bc_cheap = g.insert_edge(b, c);
        let mut weights = std::collections::HashMap::new();
        weights.insert(e_ac_expensive, 10u32);
        weights.insert(e_ab, 1u32);
        weights.insert(e_bc_cheap, 1u32);

        let tree = prim_out(&g, a, |e| weights[&e], |x: &u32, y: &u32| x < y);
        let path = tree.storage().path_from_root_to(c).unwrap();
        assert_eq!(path.edges(), &[e_ab, e_bc_cheap]);
    }
}
