// Copyright the graph contributors.
// Licensed under the Apache License, Version 2.0 (see LICENSE).

//! Subforest/subtree views: an ephemeral `vert -> key edge` side map over a borrowed graph,
//! used both directly and as the tree result handed back by the shortest-path algorithms. Out- and
//! in-flavour differ only in which endpoint of an edge keys it and which endpoint is its cokey.

use crate::error::GraphResult;
use crate::handle::Handle;
use crate::path::Path;
use crate::side::{EphemeralHashMap, EphemeralHashSet, SideMap, SideSet};
use crate::storage::{GraphCore, HasInEdges, HasOutEdges};

/// Walks `v`'s key-edge chain via `cokey`, checking for cycles; returns the collected edges (in
/// walk order) and the vertex the walk stopped at (a root when the chain runs out).
fn walk<S: GraphCore>(
    key_edge: &EphemeralHashMap<S::Vert, S::Edge>,
    cokey: impl Fn(S::Edge) -> S::Vert,
    start: S::Vert,
) -> GraphResult<(Vec<S::Edge>, S::Vert)> {
    let mut edges = Vec::new();
    let mut seen = EphemeralHashSet::new();
    let mut current = start;
    loop {
        let e = key_edge.get(current);
        if e.is_null() {
            break;
        }
        crate::check_precondition!(seen.insert(e), "cyclic key-edge chain in subforest");
        edges.push(e);
        current = cokey(e);
    }
    Ok((edges, current))
}

macro_rules! subforest_core {
    ($ty:ident) => {
        impl<'a, S: GraphCore> GraphCore for $ty<'a, S> {
            type Vert = S::Vert;
            type Edge = S::Edge;

            fn order(&self) -> usize {
                self.storage.order()
            }

            fn size(&self) -> usize {
                self.count
            }

            fn verts(&self) -> Box<dyn Iterator<Item = Self::Vert> + '_> {
                self.storage.verts()
            }

            fn edges(&self) -> Box<dyn Iterator<Item = Self::Edge> + '_> {
                Box::new(self.storage.verts().filter_map(move |v| {
                    let e = self.key_edge.get(v);
                    if e.is_null() {
                        None
                    } else {
                        Some(e)
                    }
                }))
            }

            fn tail(&self, e: Self::Edge) -> Self::Vert {
                self.storage.tail(e)
            }

            fn head(&self, e: Self::Edge) -> Self::Vert {
                self.storage.head(e)
            }
        }
    };
}

/// Out-flavour: each vertex's key edge is the one edge whose *tail* is that vertex, so
/// `path_to_root_from(v)` walks away from `v` toward a root with no key edge.
pub struct OutSubforest<'a, S: GraphCore> {
    storage: &'a S,
    key_edge: EphemeralHashMap<S::Vert, S::Edge>,
    count: usize,
}

impl<'a, S: GraphCore> OutSubforest<'a, S> {
    pub fn new(storage: &'a S) -> Self {
        OutSubforest {
            storage,
            key_edge: EphemeralHashMap::new(S::Edge::null()),
            count: 0,
        }
    }

    pub(crate) fn set_key_edge(&mut self, v: S::Vert, e: S::Edge) {
        if self.key_edge.get(v).is_null() {
            self.count += 1;
        }
        self.key_edge.assign(v, e);
    }

    pub fn out_edge_or_null(&self, v: S::Vert) -> S::Edge {
        self.key_edge.get(v)
    }

    pub fn path_to_root_from(&self, v: S::Vert) -> GraphResult<Path<Self>> {
        let (edges, _root) = walk::<S>(&self.key_edge, |e| self.storage.head(e), v)?;
        Path::new(self, v, edges)
    }
}

subforest_core!(OutSubforest);

impl<'a, S: GraphCore> HasOutEdges for OutSubforest<'a, S> {
    fn out_edges(&self, v: Self::Vert) -> Box<dyn Iterator<Item = Self::Edge> + '_> {
        let e = self.key_edge.get(v);
        if e.is_null() {
            Box::new(std::iter::empty())
        } else {
            Box::new(std::iter::once(e))
        }
    }
}

/// In-flavour: each vertex's key edge is the one edge whose *head* is that vertex.
pub struct InSubforest<'a, S: GraphCore> {
    storage: &'a S,
    key_edge: EphemeralHashMap<S::Vert, S::Edge>,
    count: usize,
}

impl<'a, S: GraphCore> InSubforest<'a, S> {
    pub fn new(storage: &'a S) -> Self {
        InSubforest {
            storage,
            key_edge: EphemeralHashMap::new(S::Edge::null()),
            count: 0,
        }
    }

    pub(crate) fn set_key_edge(&mut self, v: S::Vert, e: S::Edge) {
        if self.key_edge.get(v).is_null() {
            self.count += 1;
        }
        self.key_edge.assign(v, e);
    }

    pub fn in_edge_or_null(&self, v: S::Vert) -> S::Edge {
        self.key_edge.get(v)
    }

    pub fn path_from_root_to(&self, v: S::Vert) -> GraphResult<Path<Self>> {
        let (mut edges, root) = walk::<S>(&self.key_edge, |e| self.storage.tail(e), v)?;
        edges.reverse();
        Path::new(self, root, edges)
    }
}

subforest_core!(InSubforest);

impl<'a, S: GraphCore> HasInEdges for InSubforest<'a, S> {
    fn in_edges(&self, v: Self::Vert) -> Box<dyn Iterator<Item = Self::Edge> + '_> {
        let e = self.key_edge.get(v);
        if e.is_null() {
            Box::new(std::iter::empty())
        } else {
            Box::new(std::iter::once(e))
        }
    }
}

/// Out-flavour subforest with an explicit, distinguished root.
pub struct OutSubtree<'a, S: GraphCore> {
    forest: OutSubforest<'a, S>,
    root: S::Vert,
}

impl<'a, S: GraphCore> OutSubtree<'a, S> {
    pub fn new(storage: &'a S, root: S::Vert) -> Self {
        OutSubtree { forest: OutSubforest::new(storage), root }
    }

    pub(crate) fn set_key_edge(&mut self, v: S::Vert, e: S::Edge) {
        self.forest.set_key_edge(v, e);
    }

    pub fn root(&self) -> S::Vert {
        self.root
    }

    pub fn is_root(&self, v: S::Vert) -> bool {
        v == self.root
    }

    pub fn in_tree(&self, v: S::Vert) -> bool {
        v == self.root || !self.forest.out_edge_or_null(v).is_null()
    }

    pub fn path_to_root_from(&self, v: S::Vert) -> GraphResult<Path<Self>> {
        let (edges, reached) = walk::<S>(&self.forest.key_edge, |e| self.forest.storage.head(e), v)?;
        if reached != self.root {
            return Ok(Path::null());
        }
        Path::new(self, v, edges)
    }
}

impl<'a, S: GraphCore> GraphCore for OutSubtree<'a, S> {
    type Vert = S::Vert;
    type Edge = S::Edge;

    fn order(&self) -> usize {
        self.forest.order()
    }

    fn size(&self) -> usize {
        self.forest.size()
    }

    fn verts(&self) -> Box<dyn Iterator<Item = Self::Vert> + '_> {
        self.forest.verts()
    }

    fn edges(&self) -> Box<dyn Iterator<Item = Self::Edge> + '_> {
        self.forest.edges()
    }

    fn tail(&self, e: Self::Edge) -> Self::Vert {
        self.forest.tail(e)
    }

    fn head(&self, e: Self::Edge) -> Self::Vert {
        self.forest.head(e)
    }
}

impl<'a, S: GraphCore> HasOutEdges for OutSubtree<'a, S> {
    fn out_edges(&self, v: Self::Vert) -> Box<dyn Iterator<Item = Self::Edge> + '_> {
        self.forest.out_edges(v)
    }
}

/// In-flavour subforest with an explicit, distinguished root.
pub struct InSubtree<'a, S: GraphCore> {
    forest: InSubforest<'a, S>,
    root: S::Vert,
}

impl<'a, S: GraphCore> InSubtree<'a, S> {
    pub fn new(storage: &'a S, root: S::Vert) -> Self {
        InSubtree { forest: InSubforest::new(storage), root }
    }

    pub(crate) fn set_key_edge(&mut self, v: S::Vert, e: S::Edge) {
        self.forest.set_key_edge(v, e);
    }

    pub fn root(&self) -> S::Vert {
        self.root
    }

    pub fn is_root(&self, v: S::Vert) -> bool {
        v == self.root
    }

    pub fn in_tree(&self, v: S::Vert) -> bool {
        v == self.root || !self.forest.in_edge_or_null(v).is_null()
    }

    pub fn path_from_root_to(&self, v: S::Vert) -> GraphResult<Path<Self>> {
        let (mut edges, reached) = walk::<S>(&self.forest.key_edge, |e| self.forest.storage.tail(e), v)?;
        if reached != self.root {
            return Ok(Path::null());
        }
        edges.reverse();
        Path::new(self, self.root, edges)
    }
}

impl<'a, S: GraphCore> GraphCore for InSubtree<'a, S> {
    type Vert = S::Vert;
    type Edge = S::Edge;

    fn order(&self) -> usize {
        self.forest.order()
    }

    fn size(&self) -> usize {
        self.forest.size()
    }

    fn verts(&self) -> Box<dyn Iterator<Item = Self::Vert> + '_> {
        self.forest.verts()
    }

    fn edges(&self) -> Box<dyn Iterator<Item = Self::Edge> + '_> {
        self.forest.edges()
    }

    fn tail(&self, e: Self::Edge) -> Self::Vert {
        self.forest.tail(e)
    }

    fn head(&self, e: Self::Edge) -> Self::Vert {
        self.forest.head(e)
    }
}

impl<'a, S: GraphCore> HasInEdges for InSubtree<'a, S> {
    fn in_edges(&self, v: Self::Vert) -> Box<dyn Iterator<Item = Self::Edge> + '_> {
        self.forest.in_edges(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::adjacency_list::AdjacencyListOut;
    use crate::storage::Storage;

    #[test]
    fn out_subforest_path_walks_to_root() {
        let mut g = AdjacencyListOut::new();
        let a = g.insert_vert();
        let b = g.insert_vert();
        let c = g.insert_vert();
        let e1 = g.insert_edge(a, b);
        let e2 = g.insert_edge(b, c);
        let mut forest = OutSubforest::new(&g);
        forest.set_key_edge(a, e1);
        forest.set_key_edge(b, e2);
        let path = forest.path_to_root_from(a).unwrap();
        assert_eq!(path.edges(), &[e1, e2]);
        assert_eq!(path.target(&forest), c);
    }

    #[test]
    fn subtree_path_is_null_when_not_rooted() {
        let mut g = AdjacencyListOut::new();
        let a = g.insert_vert();
        let b = g.insert_vert();
        let c = g.insert_vert();
        let e1 = g.insert_edge(a, b);
        let mut tree = OutSubtree::new(&g, c);
        tree.set_key_edge(a, e1);
        let path = tree.path_to_root_from(a).unwrap();
        assert!(path.is_null());
    }
}
