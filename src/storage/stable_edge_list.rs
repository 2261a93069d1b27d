// Copyright the graph contributors.
// Licensed under the Apache License, Version 2.0 (see LICENSE).

use crate::handle::{DenseHandle, Handle, IntegerHandle};
use crate::side::Tracker;

use super::{GraphCore, Storage};

struct EdgeData {
    tail: IntegerHandle,
    head: IntegerHandle,
}

/// A flat, append-only vertex/edge list keyed by dense integer handles. No erase; indices are
/// never recycled, so handles remain valid (and comparable by index) for the life of the graph.
pub struct StableEdgeList {
    order: usize,
    edges: Vec<EdgeData>,
    vert_tracker: Tracker<IntegerHandle>,
    edge_tracker: Tracker<IntegerHandle>,
}

impl StableEdgeList {
    pub fn new() -> Self {
        StableEdgeList {
            order: 0,
            edges: Vec::new(),
            vert_tracker: Tracker::new(),
            edge_tracker: Tracker::new(),
        }
    }
}

impl Default for StableEdgeList {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphCore for StableEdgeList {
    type Vert = IntegerHandle;
    type Edge = IntegerHandle;

    fn order(&self) -> usize {
        self.order
    }

    fn size(&self) -> usize {
        self.edges.len()
    }

    fn verts(&self) -> Box<dyn Iterator<Item = Self::Vert> + '_> {
        Box::new((0..self.order).map(IntegerHandle::from_index))
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

impl Storage for StableEdgeList {
    fn insert_vert(&mut self) -> Self::Vert {
        let h = IntegerHandle::from_index(self.order);
        self.order += 1;
        h
    }

    fn insert_edge(&mut self, tail: Self::Vert, head: Self::Vert) -> Self::Edge {
        let h = IntegerHandle::from_index(self.edges.len());
        self.edges.push(EdgeData { tail, head });
        h
    }

    fn vert_tracker(&self) -> &Tracker<Self::Vert> {
        &self.vert_tracker
    }

    fn edge_tracker(&self) -> &Tracker<Self::Edge> {
        &self.edge_tracker
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_never_recycled() {
        let mut g = StableEdgeList::new();
        let a = g.insert_vert();
        let b = g.insert_vert();
        let e1 = g.insert_edge(a, b);
        let e2 = g.insert_edge(b, a);
        assert_ne!(e1, e2);
        assert_eq!(g.order(), 2);
        assert_eq!(g.size(), 2);
    }
}
