// Copyright the graph contributors.
// Licensed under the Apache License, Version 2.0 (see LICENSE).

//! Sequential bidirectional Dijkstra. Forward search runs from `s` over outgoing
//! adjacency, backward search from `t` over incoming adjacency; at each step the side with the
//! smaller queue is expanded (forward on ties).

use crate::error::{GraphError, GraphResult};
use crate::path::Path;
use crate::side::{EphemeralHashMap, EphemeralHashSet, SideMap, SideSet};
use crate::storage::{GraphCore, HasInEdges, HasOutEdges};
use crate::views::subforest::{InSubtree, OutSubtree};

use super::heap::CompareHeap;

pub fn shortest_path<S, D, W, C, Cb>(
    storage: &S,
    s: S::Vert,
    t: S::Vert,
    mut weight: W,
    mut compare: C,
    mut combine: Cb,
    zero: D,
    inf: D,
) -> GraphResult<Path<S>>
where
    S: GraphCore + HasOutEdges + HasInEdges,
    D: Clone,
    W: FnMut(S::Edge) -> D,
    C: FnMut(&D, &D) -> bool,
    Cb: FnMut(&D, &D) -> D,
{
    let mut tree_s = InSubtree::new(storage, s);
    let mut tree_t = OutSubtree::new(storage, t);
    let mut dist_s: EphemeralHashMap<S::Vert, D> = EphemeralHashMap::new(inf.clone());
    let mut dist_t: EphemeralHashMap<S::Vert, D> = EphemeralHashMap::new(inf.clone());
    let mut closed_s: EphemeralHashSet<S::Vert> = EphemeralHashSet::new();
    let mut closed_t: EphemeralHashSet<S::Vert> = EphemeralHashSet::new();
    dist_s.assign(s, zero.clone());
    dist_t.assign(t, zero.clone());

    let mut heap_s = CompareHeap::new(|a: &(D, S::Vert), b: &(D, S::Vert)| compare(&a.0, &b.0));
    let mut heap_t = CompareHeap::new(|a: &(D, S::Vert), b: &(D, S::Vert)| compare(&a.0, &b.0));
    heap_s.push((zero.clone(), s));
    heap_t.push((zero, t));

    let mut rendezvous_signalled = false;
    while !heap_s.is_empty() && !heap_t.is_empty() {
        let expand_forward = heap_s.len() <= heap_t.len();
        if expand_forward {
            let (d, v) = heap_s.pop().unwrap();
            if closed_s.contains(v) {
                continue;
            }
            closed_s.insert(v);
            if closed_t.contains(v) {
                rendezvous_signalled = true;
                break;
            }
            for e in storage.out_edges(v) {
                let u = storage.head(e);
                let c = combine(&d, &weight(e));
                crate::check_precondition!(!compare(&c, &d), "edges must have non-negative weights");
                if compare(&c, &dist_s.get(u)) {
                    dist_s.assign(u, c.clone());
                    tree_s.set_key_edge(u, e);
                    heap_s.push((c, u));
                }
            }
        } else {
            let (d, v) = heap_t.pop().unwrap();
            if closed_t.contains(v) {
                continue;
            }
            closed_t.insert(v);
            if closed_s.contains(v) {
                rendezvous_signalled = true;
                break;
            }
            for e in storage.in_edges(v) {
                let u = storage.tail(e);
                let c = combine(&d, &weight(e));
                crate::check_precondition!(!compare(&c, &d), "edges must have non-negative weights");
                if compare(&c, &dist_t.get(u)) {
                    dist_t.assign(u, c.clone());
                    tree_t.set_key_edge(u, e);
                    heap_t.push((c, u));
                }
            }
        }
    }

    if !rendezvous_signalled {
        return Ok(Path::null());
    }

    let mut best: Option<(S::Vert, D)> = None;
    for v in closed_s.iter().copied() {
        if !closed_t.contains(v) {
            continue;
        }
        let total = combine(&dist_s.get(v), &dist_t.get(v));
        best = Some(match best {
            None => (v, total),
            Some((bv, bd)) => {
                if compare(&total, &bd) {
                    (v, total)
                } else {
                    (bv, bd)
                }
            }
        });
    }
    let (rendezvous, _) = best.ok_or(GraphError::PreconditionUnmet("no rendezvous vertex despite signalled termination"))?;

    let forward_path = tree_s.path_from_root_to(rendezvous)?;
    let backward_path = tree_t.path_to_root_from(rendezvous)?;
    let mut edges = forward_path.edges().to_vec();
    edges.extend(backward_path.edges().iter().copied());
    Path::new(storage, s, edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::adjacency_list::BiAdjacencyList;
    use crate::storage::Storage;

    #[test]
    fn finds_the_cheap_route_through_the_middle() {
        let mut g = BiAdjacencyList::new();
        let a = g.insert_vert();
        let b = g.insert_vert();
        let c = g.insert_vert();
        let d = g.insert_vert();
        let e_ac = g.insert_edge(a, c);
        let e_ab = g.insert_edge(a, b);
        let e_bd = g.insert_edge(b, d);
        let e_cd = g.insert_edge(c, d);
        let mut w = std::collections::HashMap::new();
        w.insert(e_ac, 10u32);
        w.insert(e_ab, 1u32);
        w.insert(e_bd, 1u32);
        w.insert(e_cd, 1u32);

        let path = shortest_path(&g, a, d, |e| w[&e], |x: &u32, y: &u32| x < y, |x: &u32, y: &u32| x + y, 0u32, u32::MAX).unwrap();
        assert_eq!(path.edges(), &[e_ab, e_bd]);
    }

    #[test]
    fn disconnected_pair_returns_null_path() {
        let mut g = BiAdjacencyList::new();
        let a = g.insert_vert();
        let b = g.insert_vert();
        let path = shortest_path(&g, a, b, |_| 1u32, |x: &u32, y: &u32| x < y, |x: &u32, y: &u32| x + y, 0u32, u32::MAX).unwrap();
        assert!(path.is_null());
    }
}
