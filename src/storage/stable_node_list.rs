// Copyright the graph contributors.
// Licensed under the Apache License, Version 2.0 (see LICENSE).

//! Supplemental representation exercising the pointer handle family end to end: vertices and
//! edges are individually heap-allocated and never relocated, so a raw pointer into the arena is
//! a stable, comparable identity for the life of the graph. No erasure; out-flavour and
//! in-flavour only, no bidirectional variant.

use crate::handle::{Handle, PointerHandle};
use crate::side::Tracker;

use super::{GraphCore, HasInEdges, HasOutEdges, Storage};

struct VertNode {
    out: Vec<*const EdgeNode>,
}

struct EdgeNode {
    tail: *const VertNode,
    head: *const VertNode,
}

struct InVertNode {
    r#in: Vec<*const InEdgeNode>,
}

struct InEdgeNode {
    tail: *const InVertNode,
    head: *const InVertNode,
}

/// Out-flavour stable node list: each vertex owns its own out-adjacency list of edge pointers.
pub struct StableOutNodeList {
    verts: Vec<Box<VertNode>>,
    edges: Vec<Box<EdgeNode>>,
    vert_tracker: Tracker<PointerHandle<VertNode>>,
    edge_tracker: Tracker<PointerHandle<EdgeNode>>,
}

impl StableOutNodeList {
    pub fn new() -> Self {
        StableOutNodeList {
            verts: Vec::new(),
            edges: Vec::new(),
            vert_tracker: Tracker::new(),
            edge_tracker: Tracker::new(),
        }
    }
}

impl Default for StableOutNodeList {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphCore for StableOutNodeList {
    type Vert = PointerHandle<VertNode>;
    type Edge = PointerHandle<EdgeNode>;

    fn order(&self) -> usize {
        self.verts.len()
    }

    fn size(&self) -> usize {
        self.edges.len()
    }

    fn verts(&self) -> Box<dyn Iterator<Item = Self::Vert> + '_> {
        Box::new(self.verts.iter().map(|v| PointerHandle::from_ptr(v.as_ref() as *const VertNode)))
    }

    fn edges(&self) -> Box<dyn Iterator<Item = Self::Edge> + '_> {
        Box::new(self.edges.iter().map(|e| PointerHandle::from_ptr(e.as_ref() as *const EdgeNode)))
    }

    fn tail(&self, e: Self::Edge) -> Self::Vert {
        if e.is_null() {
            return PointerHandle::null();
        }
        // Safety: `e` was produced by `insert_edge` on this arena and nodes are never relocated.
        let node = unsafe { e.as_ref() };
        PointerHandle::from_ptr(node.tail)
    }

    fn head(&self, e: Self::Edge) -> Self::Vert {
        if e.is_null() {
            return PointerHandle::null();
        }
        let node = unsafe { e.as_ref() };
        PointerHandle::from_ptr(node.head)
    }
}

impl Storage for StableOutNodeList {
    fn insert_vert(&mut self) -> Self::Vert {
        self.verts.push(Box::new(VertNode { out: Vec::new() }));
        let ptr = self.verts.last().unwrap().as_ref() as *const VertNode;
        PointerHandle::from_ptr(ptr)
    }

    fn insert_edge(&mut self, tail: Self::Vert, head: Self::Vert) -> Self::Edge {
        let edge = Box::new(EdgeNode {
            tail: tail.as_ptr(),
            head: head.as_ptr(),
        });
        self.edges.push(edge);
        let edge_ptr = self.edges.last().unwrap().as_ref() as *const EdgeNode;
        // Safety: `tail` was produced by `insert_vert` on this arena.
        let tail_node = unsafe { &mut *(tail.as_ptr() as *mut VertNode) };
        tail_node.out.push(edge_ptr);
        PointerHandle::from_ptr(edge_ptr)
    }

    fn vert_tracker(&self) -> &Tracker<Self::Vert> {
        &self.vert_tracker
    }

    fn edge_tracker(&self) -> &Tracker<Self::Edge> {
        &self.edge_tracker
    }
}

impl HasOutEdges for StableOutNodeList {
    fn out_edges(&self, v: Self::Vert) -> Box<dyn Iterator<Item = Self::Edge> + '_> {
        if v.is_null() {
            return Box::new(std::iter::empty());
        }
        let node = unsafe { v.as_ref() };
        Box::new(node.out.iter().map(|&e| PointerHandle::from_ptr(e)))
    }
}

/// In-flavour stable node list: each vertex owns its own in-adjacency list of edge pointers.
pub struct StableInNodeList {
    verts: Vec<Box<InVertNode>>,
    edges: Vec<Box<InEdgeNode>>,
    vert_tracker: Tracker<PointerHandle<InVertNode>>,
    edge_tracker: Tracker<PointerHandle<InEdgeNode>>,
}

impl StableInNodeList {
    pub fn new() -> Self {
        StableInNodeList {
            verts: Vec::new(),
            edges: Vec::new(),
            vert_tracker: Tracker::new(),
            edge_tracker: Tracker::new(),
        }
    }
}

impl Default for StableInNodeList {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphCore for StableInNodeList {
    type Vert = PointerHandle<InVertNode>;
    type Edge = PointerHandle<InEdgeNode>;

    fn order(&self) -> usize {
        self.verts.len()
    }

    fn size(&self) -> usize {
        self.edges.len()
    }

    fn verts(&self) -> Box<dyn Iterator<Item = Self::Vert> + '_> {
        Box::new(self.verts.iter().map(|v| PointerHandle::from_ptr(v.as_ref() as *const InVertNode)))
    }

    fn edges(&self) -> Box<dyn Iterator<Item = Self::Edge> + '_> {
        Box::new(self.edges.iter().map(|e| PointerHandle::from_ptr(e.as_ref() as *const InEdgeNode)))
    }

    fn tail(&self, e: Self::Edge) -> Self::Vert {
        if e.is_null() {
            return PointerHandle::null();
        }
        let node = unsafe { e.as_ref() };
        PointerHandle::from_ptr(node.tail)
    }

    fn head(&self, e: Self::Edge) -> Self::Vert {
        if e.is_null() {
            return PointerHandle::null();
        }
        let node = unsafe { e.as_ref() };
        PointerHandle::from_ptr(node.head)
    }
}

impl Storage for StableInNodeList {
    fn insert_vert(&mut self) -> Self::Vert {
        self.verts.push(Box::new(InVertNode { r#in: Vec::new() }));
        let ptr = self.verts.last().unwrap().as_ref() as *const InVertNode;
        PointerHandle::from_ptr(ptr)
    }

    fn insert_edge(&mut self, tail: Self::Vert, head: Self::Vert) -> Self::Edge {
        let edge = Box::new(InEdgeNode {
            tail: tail.as_ptr(),
            head: head.as_ptr(),
        });
        self.edges.push(edge);
        let edge_ptr = self.edges.last().unwrap().as_ref() as *const InEdgeNode;
        // Safety: `head` was produced by `insert_vert` on this arena.
        let head_node = unsafe { &mut *(head.as_ptr() as *mut InVertNode) };
        head_node.r#in.push(edge_ptr);
        PointerHandle::from_ptr(edge_ptr)
    }

    fn vert_tracker(&self) -> &Tracker<Self::Vert> {
        &self.vert_tracker
    }

    fn edge_tracker(&self) -> &Tracker<Self::Edge> {
        &self.edge_tracker
    }
}

impl HasInEdges for StableInNodeList {
    fn in_edges(&self, v: Self::Vert) -> Box<dyn Iterator<Item = Self::Edge> + '_> {
        if v.is_null() {
            return Box::new(std::iter::empty());
        }
        let node = unsafe { v.as_ref() };
        Box::new(node.r#in.iter().map(|&e| PointerHandle::from_ptr(e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn addresses_stay_valid_across_growth() {
        let mut g = StableOutNodeList::new();
        let a = g.insert_vert();
        for _ in 0..64 {
            g.insert_vert();
        }
        let b = g.insert_vert();
        let e = g.insert_edge(a, b);
        assert_eq!(g.tail(e), a);
        assert_eq!(g.head(e), b);
        assert_eq!(g.out_degree(a), 1);
    }

    #[test]
    fn in_flavour_tracks_incoming_edges() {
        let mut g = StableInNodeList::new();
        let a = g.insert_vert();
        let b = g.insert_vert();
        let e = g.insert_edge(a, b);
        assert_eq!(g.tail(e), a);
        assert_eq!(g.head(e), b);
        assert_eq!(g.in_degree(b), 1);
        assert_eq!(g.in_degree(a), 0);
    }
}
