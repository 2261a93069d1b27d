// Copyright the graph contributors.
// Licensed under the Apache License, Version 2.0 (see LICENSE).

use std::collections::HashMap;

use rand::Rng;

use digraph::handle::DenseHandle;
use digraph::storage::stable_adjacency_list::StableAdjacencyList;
use digraph::storage::Storage;
use digraph::wrapper::Graph;

/// Simulates the read/write side of a vertex-indexed distance map the way an external
/// serializer would see it: dense `u32` indices paired with values, independent of any
/// handle type.
fn write_distance_map(distances: &[(digraph::handle::IntegerHandle, f64)]) -> Vec<(u32, f64)> {
    distances.iter().map(|&(v, d)| (v.index() as u32, d)).collect()
}

fn read_distance_map(serialized: &[(u32, f64)]) -> HashMap<u32, f64> {
    serialized.iter().copied().collect()
}

#[test]
fn distance_map_survives_a_serialize_deserialize_round_trip() {
    let mut rng = rand::rng();
    let mut storage = StableAdjacencyList::new();
    let verts: Vec<_> = (0..10).map(|_| storage.insert_vert()).collect();
    let mut weights = HashMap::new();
    for _ in 0..30 {
        let tail = verts[rng.random_range(0..verts.len())];
        let head = verts[rng.random_range(0..verts.len())];
        let e = storage.insert_edge(tail, head);
        weights.insert(e, 1.0 + rng.random::<f64>());
    }

    let g = Graph::new(storage);
    let source = verts[0];
    let (_, distances) = g
        .shortest_paths_from(
            source,
            |e| weights[&e],
            |x: &f64, y: &f64| x < y,
            |x: &f64, y: &f64| x + y,
            0.0,
            f64::INFINITY,
        )
        .unwrap();

    let serialized = write_distance_map(&distances);
    let round_tripped = read_distance_map(&serialized);

    assert_eq!(round_tripped.len(), distances.len());
    for (v, d) in &distances {
        let via_round_trip = round_tripped[&(v.index() as u32)];
        assert_eq!(via_round_trip, *d);
    }
}
