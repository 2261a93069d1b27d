// Copyright the graph contributors.
// Licensed under the Apache License, Version 2.0 (see LICENSE).

use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

use digraph::handle::DenseHandle;
use digraph::storage::contiguous_atomic_adjacency_list::ContiguousAtomicAdjacencyList;
use digraph::storage::GraphCore;

const THREADS: usize = 8;
const VERT_CAPACITY: usize = 1000;
const EDGE_CAPACITY: usize = 10_000;

#[test]
fn concurrent_atomic_insertion_fills_reserved_capacity_with_distinct_indices() {
    let g = Arc::new(ContiguousAtomicAdjacencyList::with_capacity(VERT_CAPACITY, EDGE_CAPACITY));

    let mut handles = Vec::new();
    for _ in 0..THREADS {
        let g = Arc::clone(&g);
        handles.push(thread::spawn(move || {
            let mut inserted = Vec::new();
            while let Ok(v) = g.try_atomic_insert_vert() {
                inserted.push(v);
            }
            inserted
        }));
    }
    let mut all_verts = Vec::new();
    for h in handles {
        all_verts.extend(h.join().unwrap());
    }
    assert_eq!(g.order(), VERT_CAPACITY);
    assert_eq!(all_verts.len(), VERT_CAPACITY);
    let vert_indices: HashSet<usize> = all_verts.iter().map(DenseHandle::index).collect();
    assert_eq!(vert_indices, (0..VERT_CAPACITY).collect());

    let verts: Vec<_> = g.verts().collect();
    let mut handles = Vec::new();
    for t in 0..THREADS {
        let g = Arc::clone(&g);
        let verts = verts.clone();
        handles.push(thread::spawn(move || {
            let mut inserted = Vec::new();
            let mut i = t;
            while let Ok(e) = g.try_atomic_insert_edge(verts[i % verts.len()], verts[(i + 1) % verts.len()]) {
                inserted.push(e);
                i += THREADS;
            }
            inserted
        }));
    }
    let mut all_edges = Vec::new();
    for h in handles {
        all_edges.extend(h.join().unwrap());
    }
    assert_eq!(g.size(), EDGE_CAPACITY);
    assert_eq!(all_edges.len(), EDGE_CAPACITY);
    let edge_indices: HashSet<usize> = all_edges.iter().map(DenseHandle::index).collect();
    assert_eq!(edge_indices, (0..EDGE_CAPACITY).collect());
}
