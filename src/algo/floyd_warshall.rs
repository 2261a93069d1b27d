// Copyright the graph contributors.
// Licensed under the Apache License, Version 2.0 (see LICENSE).

//! All-pairs shortest paths via Floyd-Warshall: a dense `order() x order()` distance
//! matrix relaxed through every vertex as an intermediate hop. Needs only `edges`/`tail`/`head`,
//! so it runs over any [`GraphCore`] representation, not just ones with out/in adjacency.

use crate::error::GraphResult;
use crate::side::{EphemeralHashMap, SideMap};
use crate::storage::GraphCore;

pub fn floyd_warshall<S, D, W, C, Cb>(
    storage: &S,
    mut weight: W,
    mut compare: C,
    mut combine: Cb,
    zero: D,
    inf: D,
) -> GraphResult<Vec<(S::Vert, Vec<(S::Vert, D)>)>>
where
    S: GraphCore,
    D: Clone,
    W: FnMut(S::Edge) -> D,
    C: FnMut(&D, &D) -> bool,
    Cb: FnMut(&D, &D) -> D,
{
    let verts: Vec<S::Vert> = storage.verts().collect();
    let n = verts.len();
    let mut index: EphemeralHashMap<S::Vert, usize> = EphemeralHashMap::new(usize::MAX);
    for (i, &v) in verts.iter().enumerate() {
        index.assign(v, i);
    }

    let mut dist = vec![inf.clone(); n * n];
    for i in 0..n {
        dist[i * n + i] = zero.clone();
    }
    for e in storage.edges() {
        let i = index.get(storage.tail(e));
        let j = index.get(storage.head(e));
        let w = weight(e);
        if compare(&w, &dist[i * n + j]) {
            dist[i * n + j] = w;
        }
    }

    for k in 0..n {
        for i in 0..n {
            if i == k {
                continue;
            }
            let d_ik = dist[i * n + k].clone();
            for j in 0..n {
                if j == k || j == i {
                    continue;
                }
                let through_k = combine(&d_ik, &dist[k * n + j]);
                if compare(&through_k, &dist[i * n + j]) {
                    dist[i * n + j] = through_k;
                }
            }
        }
    }

    Ok(verts
        .iter()
        .enumerate()
        .map(|(i, &source)| {
            let row = verts.iter().enumerate().map(|(j, &target)| (target, dist[i * n + j].clone())).collect();
            (source, row)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::adjacency_list::AdjacencyListOut;
    use crate::storage::Storage;

    #[test]
    fn relaxes_through_an_intermediate_vertex() {
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

        let all = floyd_warshall(&g, |e| weights[&e], |x: &u32, y: &u32| x < y, |x: &u32, y: &u32| x + y, 0u32, u32::MAX).unwrap();
        let from_a = &all.iter().find(|(v, _)| *v == a).unwrap().1;
        let dist_c = from_a.iter().find(|(v, _)| *v == c).unwrap().1;
        assert_eq!(dist_c, 2);
    }

    #[test]
    fn unreachable_pair_stays_at_infinity() {
        let mut g = AdjacencyListOut::new();
        let a = g.insert_vert();
        let b = g.insert_vert();
        let all = floyd_warshall(&g, |_| 1u32, |x: &u32, y: &u32| x < y, |x: &u32, y: &u32| x + y, 0u32, u32::MAX).unwrap();
        let from_a = &all.iter().find(|(v, _)| *v == a).unwrap().1;
        let dist_b = from_a.iter().find(|(v, _)| *v == b).unwrap().1;
        assert_eq!(dist_b, u32::MAX);
    }
}
