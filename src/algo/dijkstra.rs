// Copyright the graph contributors.
// Licensed under the Apache License, Version 2.0 (see LICENSE).

//! Single-source (out-flavour) / single-target (in-flavour) shortest paths via Dijkstra's
//! algorithm, driven by a runtime `compare`/`combine` pair rather than `Ord`/`Add`.

use crate::error::GraphResult;
use crate::side::{EphemeralHashMap, SideMap};
use crate::storage::{GraphCore, HasInEdges, HasOutEdges};
use crate::views::subforest::{InSubtree, OutSubtree};
use crate::wrapper::Graph;

use super::heap::CompareHeap;

/// Runs Dijkstra from `source` over `storage`'s outgoing adjacency. Returns an in-subtree rooted
/// at `source` (tree edges point toward the source) plus every vertex's shortest distance.
pub fn dijkstra_out<'a, S, D, W, C, Cb>(
    storage: &'a S,
    source: S::Vert,
    mut weight: W,
    mut compare: C,
    mut combine: Cb,
    zero: D,
    inf: D,
) -> GraphResult<(Graph<InSubtree<'a, S>>, Vec<(S::Vert, D)>)>
where
    S: GraphCore + HasOutEdges,
    D: Clone,
    W: FnMut(S::Edge) -> D,
    C: FnMut(&D, &D) -> bool,
    Cb: FnMut(&D, &D) -> D,
{
    let mut tree = InSubtree::new(storage, source);
    let mut dist: EphemeralHashMap<S::Vert, D> = EphemeralHashMap::new(inf.clone());
    let mut closed: EphemeralHashMap<S::Vert, bool> = EphemeralHashMap::new(false);
    dist.assign(source, zero.clone());

    let mut heap = CompareHeap::new(|a: &(D, S::Vert), b: &(D, S::Vert)| compare(&a.0, &b.0));
    heap.push((zero, source));

    while let Some((d, v)) = heap.pop() {
        if closed.get(v) {
            continue;
        }
        closed.assign(v, true);
        for e in storage.out_edges(v) {
            let u = storage.head(e);
            let c = combine(&d, &weight(e));
            crate::check_precondition!(!compare(&c, &d), "edges must have non-negative weights");
            if compare(&c, &dist.get(u)) {
                dist.assign(u, c.clone());
                tree.set_key_edge(u, e);
                heap.push((c, u));
            }
        }
    }

    let distances = storage.verts().map(|v| (v, dist.get(v))).collect();
    Ok((Graph::new(tree), distances))
}

/// Symmetric to [`dijkstra_out`]: runs over incoming adjacency toward `target`, returning an
/// out-subtree rooted at `target`.
pub fn dijkstra_in<'a, S, D, W, C, Cb>(
    storage: &'a S,
    target: S::Vert,
    mut weight: W,
    mut compare: C,
    mut combine: Cb,
    zero: D,
    inf: D,
) -> GraphResult<(Graph<OutSubtree<'a, S>>, Vec<(S::Vert, D)>)>
where
    S: GraphCore + HasInEdges,
    D: Clone,
    W: FnMut(S::Edge) -> D,
    C: FnMut(&D, &D) -> bool,
    Cb: FnMut(&D, &D) -> D,
{
    let mut tree = OutSubtree::new(storage, target);
    let mut dist: EphemeralHashMap<S::Vert, D> = EphemeralHashMap::new(inf.clone());
    let mut closed: EphemeralHashMap<S::Vert, bool> = EphemeralHashMap::new(false);
    dist.assign(target, zero.clone());

    let mut heap = CompareHeap::new(|a: &(D, S::Vert), b: &(D, S::Vert)| compare(&a.0, &b.0));
    heap.push((zero, target));

    while let Some((d, v)) = heap.pop() {
        if closed.get(v) {
            continue;
        }
        closed.assign(v, true);
        for e in storage.in_edges(v) {
            let u = storage.tail(e);
            let c = combine(&d, &weight(e));
            crate::check_precondition!(!compare(&c, &d), "edges must have non-negative weights");
            if compare(&c, &dist.get(u)) {
                dist.assign(u, c.clone());
                tree.set_key_edge(u, e);
                heap.push((c, u));
            }
        }
    }

    let distances = storage.verts().map(|v| (v, dist.get(v))).collect();
    Ok((Graph::new(tree), distances))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::adjacency_list::AdjacencyListOut;
    use crate::storage::Storage;

    #[test]
    fn shortest_distance_along_cheaper_path() {
        let mut g = AdjacencyListOut::new();
        let a = g.insert_vert();
        let b = g.insert_vert();
        let c = g.insert_vert();
        let e_ac = g.insert_edge(a, c);
        let e_ab = g.insert_edge(a, b);
        let e_bc = g.insert_edge(b, c);
        let mut weights = std::collections::HashMap::new();
        weights.insert(e_ac, 10u32);
        weights.insert(e_ab, 1u32);
        weights.insert(e_bc, 1u32);

        let (tree, distances) = dijkstra_out(&g, a, |e| weights[&e], |x, y| x < y, |x, y| x + y, 0u32, u32::MAX).unwrap();
        let dist_c = distances.iter().find(|(v, _)| *v == c).unwrap().1;
        assert_eq!(dist_c, 2);
        let path = tree.storage().path_from_root_to(c).unwrap();
        assert_eq!(path.edges(), &[e_ab, e_bc]);
    }
}
