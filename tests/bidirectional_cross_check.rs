// Copyright the graph contributors.
// Licensed under the Apache License, Version 2.0 (see LICENSE).

use std::collections::HashMap;

use rand::Rng;

use digraph::storage::stable_bi_adjacency_list::StableBiAdjacencyList;
use digraph::storage::Storage;
use digraph::wrapper::Graph;

const ORDER: usize = 20;
const TOLERANCE_FACTOR: f64 = 0.001;

#[test]
fn shortest_path_parallel_shortest_path_and_shortest_paths_from_agree() {
    let mut rng = rand::rng();
    let mut storage = StableBiAdjacencyList::new();
    let verts: Vec<_> = (0..ORDER).map(|_| storage.insert_vert()).collect();

    let mut weights = HashMap::new();
    for _ in 0..100 {
        let tail = verts[rng.random_range(0..verts.len())];
        let head = verts[rng.random_range(0..verts.len())];
        let e = storage.insert_edge(tail, head);
        weights.insert(e, 0.001 + rng.random::<f64>() * 0.999);
    }

    let g = Graph::new(storage);
    let tolerance = TOLERANCE_FACTOR * ORDER as f64;

    for &s in &verts {
        let (_, distances) = g
            .shortest_paths_from(
                s,
                |e| weights[&e],
                |x: &f64, y: &f64| x < y,
                |x: &f64, y: &f64| x + y,
                0.0,
                f64::INFINITY,
            )
            .unwrap();
        let dijkstra_dist = |t| distances.iter().find(|(v, _)| *v == t).unwrap().1;

        for &t in &verts {
            let sequential = g
                .shortest_path(s, t, |e| weights[&e], |x: &f64, y: &f64| x < y, |x: &f64, y: &f64| x + y, 0.0, f64::INFINITY)
                .unwrap();
            let parallel = g
                .parallel_shortest_path(
                    s,
                    t,
                    |e| weights[&e],
                    |x: &f64, y: &f64| x < y,
                    |x: &f64, y: &f64| x + y,
                    0.0,
                    f64::INFINITY,
                )
                .unwrap();
            let from_dijkstra = dijkstra_dist(t);

            let seq_found = !sequential.is_null() || s == t;
            let par_found = !parallel.is_null() || s == t;
            let dij_found = from_dijkstra.is_finite();
            assert_eq!(seq_found, dij_found, "shortest_path disagreed with shortest_paths_from on reachability");
            assert_eq!(par_found, dij_found, "parallel_shortest_path disagreed with shortest_paths_from on reachability");

            if dij_found {
                let seq_total = sequential.total(|e| weights[&e], |a, b| a + b, 0.0);
                let par_total = parallel.total(|e| weights[&e], |a, b| a + b, 0.0);
                assert!((seq_total - from_dijkstra).abs() <= tolerance);
                assert!((par_total - from_dijkstra).abs() <= tolerance);
            }
        }
    }
}
