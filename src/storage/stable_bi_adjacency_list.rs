// Copyright the graph contributors.
// Licensed under the Apache License, Version 2.0 (see LICENSE).

//! A dense-handle bidirectional adjacency list: the `StableAdjacencyList` layout extended with an
//! incoming-adjacency side table, since the parallel bidirectional search needs a representation
//! that is simultaneously `DenseHandle` (for its `Vec<AtomicBool>` closed-set signal) and capable
//! of both `HasOutEdges` and `HasInEdges`.

use crate::handle::{DenseHandle, Handle, IntegerHandle};
use crate::side::Tracker;

use super::{GraphCore, HasInEdges, HasOutEdges, Storage};

struct EdgeData {
    tail: IntegerHandle,
    head: IntegerHandle,
}

/// A growable, dense-integer-handle adjacency list with both directions maintained per vertex.
/// No erase; indices are never recycled.
pub struct StableBiAdjacencyList {
    out: Vec<Vec<u32>>,
    r#in: Vec<Vec<u32>>,
    edges: Vec<EdgeData>,
    vert_tracker: Tracker<IntegerHandle>,
    edge_tracker: Tracker<IntegerHandle>,
}

impl StableBiAdjacencyList {
    pub fn new() -> Self {
        StableBiAdjacencyList {
            out: Vec::new(),
            r#in: Vec::new(),
            edges: Vec::new(),
            vert_tracker: Tracker::new(),
            edge_tracker: Tracker::new(),
        }
    }
}

impl Default for StableBiAdjacencyList {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphCore for StableBiAdjacencyList {
    type Vert = IntegerHandle;
    type Edge = IntegerHandle;

    fn order(&self) -> usize {
        self.out.len()
    }

    fn size(&self) -> usize {
        self.edges.len()
    }

    fn verts(&self) -> Box<dyn Iterator<Item = Self::Vert> + '_> {
        Box::new((0..self.out.len()).map(IntegerHandle::from_index))
    }

    fn edges(&self) -> Box<dyn Iterator<Item = Self::Edge> + '_> {
        Box::new((0..self.edges.len()).map(IntegerHandle::from_index))
    }

    fn tail(&self, e: Self::Edge) -> Self::Vert {
        self.edges.get(e.index()).map(|d| d.tail).unwrap_or(IntegerHandle::null())
    }

    fn head(&self, e: Self::Edge) -> Self::Vert {
        self.edges.get(e.index()).map(|d| d.head).unwrap_or(IntegerHandle::null())
    }
}

impl Storage for StableBiAdjacencyList {
    fn insert_vert(&mut self) -> Self::Vert {
        let h = IntegerHandle::from_index(self.out.len());
        self.out.push(Vec::new());
        self.r#in.push(Vec::new());
        h
    }

    fn insert_edge(&mut self, tail: Self::Vert, head: Self::Vert) -> Self::Edge {
        let h = IntegerHandle::from_index(self.edges.len());
        self.edges.push(EdgeData { tail, head });
        self.out[tail.index()].push(h.index() as u32);
        self.r#in[head.index()].push(h.index() as u32);
        h
    }

    fn vert_tracker(&self) -> &Tracker<Self::Vert> {
        &self.vert_tracker
    }

    fn edge_tracker(&self) -> &Tracker<Self::Edge> {
        &self.edge_tracker
    }
}

impl HasOutEdges for StableBiAdjacencyList {
    fn out_edges(&self, v: Self::Vert) -> Box<dyn Iterator<Item = Self::Edge> + '_> {
        Box::new(self.out[v.index()].iter().map(|&i| IntegerHandle::from_index(i as usize)))
    }
}

impl HasInEdges for StableBiAdjacencyList {
    fn in_edges(&self, v: Self::Vert) -> Box<dyn Iterator<Item = Self::Edge> + '_> {
        Box::new(self.r#in[v.index()].iter().map(|&i| IntegerHandle::from_index(i as usize)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_directions_track_degree() {
        let mut g = StableBiAdjacencyList::new();
        let a = g.insert_vert();
        let b = g.insert_vert();
        g.insert_edge(a, b);
        g.insert_edge(a, b);
        assert_eq!(g.out_degree(a), 2);
        assert_eq!(g.in_degree(b), 2);
        assert_eq!(g.out_degree(b), 0);
        assert_eq!(g.in_degree(a), 0);
    }
}
