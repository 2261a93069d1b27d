// Copyright the graph contributors.
// Licensed under the Apache License, Version 2.0 (see LICENSE).

use std::collections::HashMap;

use rand::Rng;

use digraph::storage::adjacency_list::AdjacencyListOut;
use digraph::storage::Storage;
use digraph::wrapper::Graph;

#[test]
fn dijkstra_tree_edges_are_tight_and_non_tree_edges_relax() {
    let mut rng = rand::rng();
    let mut storage = AdjacencyListOut::new();
    let verts: Vec<_> = (0..8).map(|_| storage.insert_vert()).collect();

    let mut weights = HashMap::new();
    let mut edges = Vec::new();
    for _ in 0..32 {
        let tail = verts[rng.random_range(0..verts.len())];
        let head = verts[rng.random_range(0..verts.len())];
        let e = storage.insert_edge(tail, head);
        weights.insert(e, 1.0 + rng.random::<f64>());
        edges.push(e);
    }

    let g = Graph::new(storage);
    let s = verts[rng.random_range(0..verts.len())];
    let (tree, distances) = g
        .shortest_paths_from(s, |e| weights[&e], |x: &f64, y: &f64| x < y, |x: &f64, y: &f64| x + y, 0.0, f64::INFINITY)
        .unwrap();

    let dist_of = |v| distances.iter().find(|(w, _)| *w == v).unwrap().1;
    assert_eq!(dist_of(s), 0.0);

    for &v in &verts {
        if let Some(tree_edge) = tree.in_edges(v).next() {
            let tail = g.tail(tree_edge);
            let expected = dist_of(tail) + weights[&tree_edge];
            assert!((dist_of(v) - expected).abs() < 1e-9);
        }
    }

    for &e in &edges {
        let tail = g.tail(e);
        let head = g.head(e);
        let d_tail = dist_of(tail);
        if d_tail.is_finite() {
            assert!(dist_of(head) <= d_tail + weights[&e] + 1e-9);
        }
    }
}
