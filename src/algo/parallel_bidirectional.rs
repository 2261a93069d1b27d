// Copyright the graph contributors.
// Licensed under the Apache License, Version 2.0 (see LICENSE).

//! Two-thread bidirectional Dijkstra. The forward and backward searches run as two
//! scoped threads, each closing vertices into its own dense `Vec<AtomicBool>` signal that the
//! other thread reads to detect a rendezvous without locking.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{GraphError, GraphResult};
use crate::handle::DenseHandle;
use crate::path::Path;
use crate::side::{EphemeralHashMap, SideMap};
use crate::storage::{GraphCore, HasInEdges, HasOutEdges};
use crate::views::subforest::{InSubtree, OutSubtree};

use super::heap::CompareHeap;

pub fn parallel_shortest_path<S, D, W, C, Cb>(
    storage: &S,
    s: S::Vert,
    t: S::Vert,
    weight: W,
    compare: C,
    combine: Cb,
    zero: D,
    inf: D,
) -> GraphResult<Path<S>>
where
    S: GraphCore + HasOutEdges + HasInEdges + Sync,
    S::Vert: Send + DenseHandle,
    S::Edge: Send,
    D: Clone + Send,
    W: Fn(S::Edge) -> D + Sync,
    C: Fn(&D, &D) -> bool + Sync,
    Cb: Fn(&D, &D) -> D + Sync,
{
    let n = storage.order();
    let closed_s: Vec<AtomicBool> = (0..n).map(|_| AtomicBool::new(false)).collect();
    let closed_t: Vec<AtomicBool> = (0..n).map(|_| AtomicBool::new(false)).collect();
    let done_s = AtomicBool::new(false);
    let done_t = AtomicBool::new(false);

    let mut tree_s = InSubtree::new(storage, s);
    let mut tree_t = OutSubtree::new(storage, t);

    let (dist_s_result, dist_t_result) = std::thread::scope(|scope| {
        let weight = &weight;
        let compare = &compare;
        let combine = &combine;
        let closed_s_ref = &closed_s;
        let closed_t_ref = &closed_t;
        let done_s_ref = &done_s;
        let done_t_ref = &done_t;
        let zero_fwd = zero.clone();
        let inf_fwd = inf.clone();
        let zero_bwd = zero.clone();
        let inf_bwd = inf.clone();

        let forward = scope.spawn(move || -> GraphResult<EphemeralHashMap<S::Vert, D>> {
            let mut dist: EphemeralHashMap<S::Vert, D> = EphemeralHashMap::new(inf_fwd.clone());
            dist.assign(s, zero_fwd.clone());
            let mut heap = CompareHeap::new(|a: &(D, S::Vert), b: &(D, S::Vert)| compare(&a.0, &b.0));
            heap.push((zero_fwd, s));
            loop {
                if done_t_ref.load(Ordering::Acquire) {
                    break;
                }
                let Some((d, v)) = heap.pop() else {
                    done_s_ref.store(true, Ordering::Release);
                    break;
                };
                let idx = v.index();
                if closed_s_ref[idx].load(Ordering::Acquire) {
                    continue;
                }
                closed_s_ref[idx].store(true, Ordering::Release);
                if closed_t_ref[idx].load(Ordering::Acquire) {
                    done_s_ref.store(true, Ordering::Release);
                    break;
                }
                for e in storage.out_edges(v) {
                    let u = storage.head(e);
                    let c = combine(&d, &weight(e));
                    crate::check_precondition!(!compare(&c, &d), "edges must have non-negative weights");
                    if compare(&c, &dist.get(u)) {
                        dist.assign(u, c.clone());
                        tree_s.set_key_edge(u, e);
                        heap.push((c, u));
                    }
                }
            }
            Ok(dist)
        });

        let backward = scope.spawn(move || -> GraphResult<EphemeralHashMap<S::Vert, D>> {
            let mut dist: EphemeralHashMap<S::Vert, D> = EphemeralHashMap::new(inf_bwd.clone());
            dist.assign(t, zero_bwd.clone());
            let mut heap = CompareHeap::new(|a: &(D, S::Vert), b: &(D, S::Vert)| compare(&a.0, &b.0));
            heap.push((zero_bwd, t));
            loop {
                if done_s_ref.load(Ordering::Acquire) {
                    break;
                }
                let Some((d, v)) = heap.pop() else {
                    done_t_ref.store(true, Ordering::Release);
                    break;
                };
                let idx = v.index();
                if closed_t_ref[idx].load(Ordering::Acquire) {
                    continue;
                }
                closed_t_ref[idx].store(true, Ordering::Release);
                if closed_s_ref[idx].load(Ordering::Acquire) {
                    done_t_ref.store(true, Ordering::Release);
                    break;
                }
                for e in storage.in_edges(v) {
                    let u = storage.tail(e);
                    let c = combine(&d, &weight(e));
                    crate::check_precondition!(!compare(&c, &d), "edges must have non-negative weights");
                    if compare(&c, &dist.get(u)) {
                        dist.assign(u, c.clone());
                        tree_t.set_key_edge(u, e);
                        heap.push((c, u));
                    }
                }
            }
            Ok(dist)
        });

        let forward_result = forward.join();
        let backward_result = backward.join();
        (forward_result, backward_result)
    });

    // The forward thread's panic always wins if both panicked, matching single-threaded Dijkstra's
    // forward-first tie-break.
    let dist_s = match dist_s_result {
        Ok(r) => r?,
        Err(panic) => std::panic::resume_unwind(panic),
    };
    let dist_t = match dist_t_result {
        Ok(r) => r?,
        Err(panic) => std::panic::resume_unwind(panic),
    };

    let mut rendezvous: Option<(S::Vert, D)> = None;
    for v in storage.verts() {
        let idx = v.index();
        if !closed_s[idx].load(Ordering::Relaxed) || !closed_t[idx].load(Ordering::Relaxed) {
            continue;
        }
        let total = combine(&dist_s.get(v), &dist_t.get(v));
        rendezvous = Some(match rendezvous {
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
    let Some((rendezvous, _)) = rendezvous else {
        return Ok(Path::null());
    };

    let forward_path = tree_s.path_from_root_to(rendezvous)?;
    let backward_path = tree_t.path_to_root_from(rendezvous)?;
    let mut edges = forward_path.edges().to_vec();
    edges.extend(backward_path.edges().iter().copied());
    Path::new(storage, s, edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::stable_bi_adjacency_list::StableBiAdjacencyList;
    use crate::storage::Storage;

    #[test]
    fn matches_the_sequential_shortest_path() {
        let mut g = StableBiAdjacencyList::new();
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

        let path = parallel_shortest_path(&g, a, d, |e| w[&e], |x: &u32, y: &u32| x < y, |x: &u32, y: &u32| x + y, 0u32, u32::MAX).unwrap();
        assert_eq!(path.edges(), &[e_ab, e_bd]);
    }

    #[test]
    fn disconnected_pair_returns_null_path() {
        let mut g = StableBiAdjacencyList::new();
        let a = g.insert_vert();
        let b = g.insert_vert();
        let path = parallel_shortest_path(&g, a, b, |_| 1u32, |x: &u32, y: &u32| x < y, |x: &u32, y: &u32| x + y, 0u32, u32::MAX).unwrap();
        assert!(path.is_null());
    }
}
