// Copyright the graph contributors.
// Licensed under the Apache License, Version 2.0 (see LICENSE).

use rand::Rng;

use digraph::storage::stable_adjacency_list::StableAdjacencyList;
use digraph::storage::Storage;
use digraph::wrapper::Graph;

#[test]
fn floyd_warshall_matches_per_source_dijkstra_with_unit_weights() {
    let mut rng = rand::rng();
    let mut storage = StableAdjacencyList::new();
    let verts: Vec<_> = (0..20).map(|_| storage.insert_vert()).collect();
    for _ in 0..80 {
        let tail = verts[rng.random_range(0..verts.len())];
        let head = verts[rng.random_range(0..verts.len())];
        storage.insert_edge(tail, head);
    }

    let g = Graph::new(storage);
    let all_pairs = g
        .all_pairs_shortest_paths(|_| 1u32, |x: &u32, y: &u32| x < y, |x: &u32, y: &u32| x + y, 0u32, u32::MAX)
        .unwrap();

    for &s in &verts {
        let (_, from_dijkstra) = g
            .shortest_paths_from(s, |_| 1u32, |x: &u32, y: &u32| x < y, |x: &u32, y: &u32| x + y, 0u32, u32::MAX)
            .unwrap();
        let from_floyd_warshall = &all_pairs.iter().find(|(v, _)| *v == s).unwrap().1;

        for &t in &verts {
            let dijkstra_dist = from_dijkstra.iter().find(|(v, _)| *v == t).unwrap().1;
            let floyd_warshall_dist = from_floyd_warshall.iter().find(|(v, _)| *v == t).unwrap().1;
            assert_eq!(dijkstra_dist, floyd_warshall_dist);
        }
    }
}
