// Copyright the graph contributors.
// Licensed under the Apache License, Version 2.0 (see LICENSE).

use rand::seq::SliceRandom;
use rand::Rng;

use digraph::side::{PersistentHashSet, SideSet};
use digraph::storage::adjacency_list::AdjacencyListOut;
use digraph::storage::{GraphCore, HasOutEdges, Storage, SupportsErase};

#[test]
fn persistent_vertex_set_shrinks_as_vertices_are_erased() {
    let mut rng = rand::rng();
    let mut g = AdjacencyListOut::new();
    let verts: Vec<_> = (0..20).map(|_| g.insert_vert()).collect();

    let mut edges = Vec::new();
    for _ in 0..100 {
        let tail = verts[rng.random_range(0..verts.len())];
        let head = verts[rng.random_range(0..verts.len())];
        edges.push(g.insert_edge(tail, head));
    }

    let mut live_set = PersistentHashSet::new(g.vert_tracker());
    for &v in &verts {
        live_set.insert(v);
    }
    assert_eq!(live_set.len(), 20);

    let mut shuffled_edges = edges.clone();
    shuffled_edges.shuffle(&mut rng);
    for e in shuffled_edges {
        g.erase_edge(e);
        assert_eq!(g.verts().count(), g.order());
        assert_eq!(g.edges().count(), g.size());
    }
    assert_eq!(g.size(), 0);

    let mut shuffled_verts = verts.clone();
    shuffled_verts.shuffle(&mut rng);
    for v in shuffled_verts {
        g.erase_vert(v).unwrap();
        assert_eq!(g.out_degree(v), 0);
    }

    assert_eq!(g.order(), 0);
    assert_eq!(live_set.len(), 0);
}
