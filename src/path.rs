// Copyright the graph contributors.
// Licensed under the Apache License, Version 2.0 (see LICENSE).

//! An ordered chain of edges with an explicit source.

use crate::error::GraphResult;
use crate::handle::Handle;
use crate::storage::GraphCore;

/// A sequence of edges `e1..en` with an explicit source `s`, such that `tail(e1)=s` and
/// `head(ei)=tail(ei+1)`. A null path has a null source; a trivial path has no edges.
#[derive(Clone, Debug)]
pub struct Path<S: GraphCore> {
    source: S::Vert,
    edges: Vec<S::Edge>,
}

impl<S: GraphCore> Path<S> {
    pub fn null() -> Self {
        Path {
            source: S::Vert::null(),
            edges: Vec::new(),
        }
    }

    pub fn trivial(source: S::Vert) -> Self {
        Path { source, edges: Vec::new() }
    }

    /// Builds a path from a source and an edge sequence, validating that each edge's tail matches
    /// the running vertex via a `PreconditionUnmet` check.
    pub fn new(storage: &S, source: S::Vert, edges: Vec<S::Edge>) -> GraphResult<Self> {
        let mut running = source;
        for &e in &edges {
            crate::check_precondition!(storage.tail(e) == running, "path edges must be adjacent");
            running = storage.head(e);
        }
        Ok(Path { source, edges })
    }

    pub fn is_null(&self) -> bool {
        self.source.is_null()
    }

    pub fn is_trivial_or_null(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn source(&self) -> S::Vert {
        self.source
    }

    pub fn target(&self, storage: &S) -> S::Vert {
        match self.edges.last() {
            Some(&e) => storage.head(e),
            None => self.source,
        }
    }

    pub fn edges(&self) -> &[S::Edge] {
        &self.edges
    }

    pub fn total<D>(&self, mut weight: impl FnMut(S::Edge) -> D, mut combine: impl FnMut(D, D) -> D, zero: D) -> D {
        self.edges.iter().fold(zero, |acc, &e| combine(acc, weight(e)))
    }

    /// Appends `other`'s edges after `self`'s; requires `target(self) == other.source()`.
    pub fn concatenate(mut self, storage: &S, other: Path<S>) -> GraphResult<Self> {
        crate::check_precondition!(
            self.target(storage) == other.source,
            "paths must share an endpoint to be concatenated"
        );
        self.edges.extend(other.edges);
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::adjacency_list::AdjacencyListOut;

    #[test]
    fn trivial_path_targets_its_source() {
        let mut g = AdjacencyListOut::new();
        let a = g.insert_vert();
        let p: Path<AdjacencyListOut> = Path::trivial(a);
        assert!(p.is_trivial_or_null());
        assert_eq!(p.target(&g), a);
    }

    #[test]
    fn non_adjacent_edges_are_rejected() {
        let mut g = AdjacencyListOut::new();
        let a = g.insert_vert();
        let b = g.insert_vert();
        let c = g.insert_vert();
        let e1 = g.insert_edge(a, b);
        let e2 = g.insert_edge(c, a);
        assert!(Path::new(&g, a, vec![e1, e2]).is_err());
    }

    #[test]
    fn concatenation_requires_matching_endpoint() {
        let mut g = AdjacencyListOut::new();
        let a = g.insert_vert();
        let b = g.insert_vert();
        let c = g.insert_vert();
        let e1 = g.insert_edge(a, b);
        let e2 = g.insert_edge(c, a);
        let p1 = Path::new(&g, a, vec![e1]).unwrap();
        let p2 = Path::new(&g, c, vec![e2]).unwrap();
        assert!(p1.concatenate(&g, p2).is_err());
    }
}
