// Copyright the graph contributors.
// Licensed under the Apache License, Version 2.0 (see LICENSE).

use std::collections::BTreeMap;

use crate::handle::{Handle, IterHandle};
use crate::side::Tracker;

use super::{GraphCore, Storage, SupportsErase};

struct EdgeData {
    tail: IterHandle,
    head: IterHandle,
}

/// The simplest representation: a flat, order-independent set of vertices and a flat set of
/// edges, each keyed by an iterator (birth-index) handle. No adjacency traversal.
pub struct EdgeList {
    verts: BTreeMap<u64, ()>,
    edges: BTreeMap<u64, EdgeData>,
    next_vert_birth: u64,
    next_edge_birth: u64,
    vert_tracker: Tracker<IterHandle>,
    edge_tracker: Tracker<IterHandle>,
}

impl EdgeList {
    pub fn new() -> Self {
        EdgeList {
            verts: BTreeMap::new(),
            edges: BTreeMap::new(),
            next_vert_birth: 0,
            next_edge_birth: 0,
            vert_tracker: Tracker::new(),
            edge_tracker: Tracker::new(),
        }
    }
}

impl Default for EdgeList {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphCore for EdgeList {
    type Vert = IterHandle;
    type Edge = IterHandle;

    fn order(&self) -> usize {
        self.verts.len()
    }

    fn size(&self) -> usize {
        self.edges.len()
    }

    fn verts(&self) -> Box<dyn Iterator<Item = Self::Vert> + '_> {
        Box::new(self.verts.keys().map(|&b| IterHandle::new(b)))
    }

    fn edges(&self) -> Box<dyn Iterator<Item = Self::Edge> + '_> {
        Box::new(self.edges.keys().map(|&b| IterHandle::new(b)))
    }

    fn tail(&self, e: Self::Edge) -> Self::Vert {
        self.edges.get(&e.birth()).map(|d| d.tail).unwrap_or(IterHandle::null())
    }

    fn head(&self, e: Self::Edge) -> Self::Vert {
        self.edges.get(&e.birth()).map(|d| d.head).unwrap_or(IterHandle::null())
    }
}

impl Storage for EdgeList {
    fn insert_vert(&mut self) -> Self::Vert {
        let birth = self.next_vert_birth;
        self.next_vert_birth += 1;
        self.verts.insert(birth, ());
        log::trace!("edge_list: inserted vert {birth}");
        IterHandle::new(birth)
    }

    fn insert_edge(&mut self, tail: Self::Vert, head: Self::Vert) -> Self::Edge {
        let birth = self.next_edge_birth;
        self.next_edge_birth += 1;
        self.edges.insert(birth, EdgeData { tail, head });
        log::trace!("edge_list: inserted edge {birth}");
        IterHandle::new(birth)
    }

    fn vert_tracker(&self) -> &Tracker<Self::Vert> {
        &self.vert_tracker
    }

    fn edge_tracker(&self) -> &Tracker<Self::Edge> {
        &self.edge_tracker
    }
}

impl SupportsErase for EdgeList {
    fn erase_vert(&mut self, v: Self::Vert) -> crate::error::GraphResult<()> {
        crate::check_precondition!(
            !self.edges.values().any(|d| d.tail == v || d.head == v),
            "erasing a vertex with remaining incident edges"
        );
        self.verts.remove(&v.birth());
        self.vert_tracker.broadcast_erase(v);
        Ok(())
    }

    fn erase_edge(&mut self, e: Self::Edge) {
        self.edges.remove(&e.birth());
        self.edge_tracker.broadcast_erase(e);
    }

    fn clear(&mut self) {
        self.verts.clear();
        self.edges.clear();
        self.vert_tracker.broadcast_clear();
        self.edge_tracker.broadcast_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_read_back() {
        let mut g = EdgeList::new();
        let a = g.insert_vert();
        let b = g.insert_vert();
        let e = g.insert_edge(a, b);
        assert_eq!(g.order(), 2);
        assert_eq!(g.size(), 1);
        assert_eq!(g.tail(e), a);
        assert_eq!(g.head(e), b);
    }

    #[test]
    fn erase_vert_with_incident_edge_is_rejected() {
        let mut g = EdgeList::new();
        let a = g.insert_vert();
        let b = g.insert_vert();
        g.insert_edge(a, b);
        assert!(g.erase_vert(a).is_err());
    }

    #[test]
    fn erase_edge_then_vert_succeeds() {
        let mut g = EdgeList::new();
        let a = g.insert_vert();
        let b = g.insert_vert();
        let e = g.insert_edge(a, b);
        g.erase_edge(e);
        assert!(g.erase_vert(a).is_ok());
        assert!(g.erase_vert(b).is_ok());
        assert_eq!(g.order(), 0);
        assert_eq!(g.size(), 0);
    }
}
