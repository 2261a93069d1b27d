// Copyright the graph contributors.
// Licensed under the Apache License, Version 2.0 (see LICENSE).

//! Graph algorithms: single-source/-target Dijkstra, Prim, sequential and parallel
//! bidirectional Dijkstra, and Floyd–Warshall all-pairs shortest paths.

pub mod bidirectional;
pub mod dijkstra;
pub mod floyd_warshall;
pub mod heap;
pub mod parallel_bidirectional;
pub mod prim;
