// Copyright the graph contributors.
// Licensed under the Apache License, Version 2.0 (see LICENSE).

use std::collections::BTreeMap;

use crate::handle::{Handle, IterHandle};
use crate::side::Tracker;

use super::{GraphCore, HasInEdges, HasOutEdges, Storage, SupportsErase};

struct EdgeData {
    tail: IterHandle,
    head: IterHandle,
}

struct VertData {
    out: Vec<u64>,
    r#in: Vec<u64>,
}

impl VertData {
    fn new() -> Self {
        VertData { out: Vec::new(), r#in: Vec::new() }
    }
}

/// Shared core for the three adjacency-list flavours (out-only, in-only, bidirectional). All
/// three use iterator handles and support erase; the flavour only changes which adjacency lists
/// are maintained and exposed.
struct Core {
    verts: BTreeMap<u64, VertData>,
    edges: BTreeMap<u64, EdgeData>,
    next_vert_birth: u64,
    next_edge_birth: u64,
    vert_tracker: Tracker<IterHandle>,
    edge_tracker: Tracker<IterHandle>,
    track_out: bool,
    track_in: bool,
}

impl Core {
    fn new(track_out: bool, track_in: bool) -> Self {
        Core {
            verts: BTreeMap::new(),
            edges: BTreeMap::new(),
            next_vert_birth: 0,
            next_edge_birth: 0,
            vert_tracker: Tracker::new(),
            edge_tracker: Tracker::new(),
            track_out,
            track_in,
        }
    }

    fn insert_vert(&mut self) -> IterHandle {
        let birth = self.next_vert_birth;
        self.next_vert_birth += 1;
        self.verts.insert(birth, VertData::new());
        IterHandle::new(birth)
    }

    fn insert_edge(&mut self, tail: IterHandle, head: IterHandle) -> IterHandle {
        let birth = self.next_edge_birth;
        self.next_edge_birth += 1;
        self.edges.insert(birth, EdgeData { tail, head });
        if self.track_out {
            if let Some(v) = self.verts.get_mut(&tail.birth()) {
                v.out.push(birth);
            }
        }
        if self.track_in {
            if let Some(v) = self.verts.get_mut(&head.birth()) {
                v.r#in.push(birth);
            }
        }
        IterHandle::new(birth)
    }

    fn erase_edge(&mut self, e: IterHandle) {
        if let Some(data) = self.edges.remove(&e.birth()) {
            if self.track_out {
                if let Some(v) = self.verts.get_mut(&data.tail.birth()) {
                    v.out.retain(|&b| b != e.birth());
                }
            }
            if self.track_in {
                if let Some(v) = self.verts.get_mut(&data.head.birth()) {
                    v.r#in.retain(|&b| b != e.birth());
                }
            }
        }
        self.edge_tracker.broadcast_erase(e);
    }

    /// Single-direction erase: `v`'s key side is whichever of `out`/`in` this `Core` tracks.
    /// Rejects if a live edge has `v` as its cokey (the untracked endpoint) unless `v` is also
    /// that edge's key (a self-loop, which is `v`'s own to remove). Mirrors the original
    /// `Adjacency_list::erase_vert` precondition. On success, removes `v`'s own key edges before
    /// removing `v`.
    fn erase_vert(&mut self, v: IterHandle) -> crate::error::GraphResult<()> {
        for data in self.edges.values() {
            let (key, cokey) = if self.track_out { (data.tail, data.head) } else { (data.head, data.tail) };
            crate::check_precondition!(cokey != v || key == v, "bad edge adjacent to vertex");
        }
        let key_edges: Vec<u64> = self
            .verts
            .get(&v.birth())
            .map(|d| if self.track_out { d.out.clone() } else { d.r#in.clone() })
            .unwrap_or_default();
        for birth in key_edges {
            self.erase_edge(IterHandle::new(birth));
        }
        self.verts.remove(&v.birth());
        self.vert_tracker.broadcast_erase(v);
        Ok(())
    }

    /// Bidirectional erase: removes every edge incident to `v` (out and in), deduplicating
    /// self-loops so each is erased exactly once, then removes `v`. Mirrors the original
    /// `Bi_adjacency_list::erase_vert` drain.
    fn erase_vert_bidirectional(&mut self, v: IterHandle) -> crate::error::GraphResult<()> {
        let (out_edges, in_edges) = self
            .verts
            .get(&v.birth())
            .map(|d| (d.out.clone(), d.r#in.clone()))
            .unwrap_or_default();
        let mut erased = std::collections::BTreeSet::new();
        for birth in out_edges.into_iter().chain(in_edges) {
            if erased.insert(birth) {
                self.erase_edge(IterHandle::new(birth));
            }
        }
        self.verts.remove(&v.birth());
        self.vert_tracker.broadcast_erase(v);
        Ok(())
    }

    fn clear(&mut self) {
        self.verts.clear();
        self.edges.clear();
        self.vert_tracker.broadcast_clear();
        self.edge_tracker.broadcast_clear();
    }
}

macro_rules! impl_core_storage {
    ($ty:ident) => {
        impl GraphCore for $ty {
            type Vert = IterHandle;
            type Edge = IterHandle;

            fn order(&self) -> usize {
                self.core.verts.len()
            }
            fn size(&self) -> usize {
                self.core.edges.len()
            }
            fn verts(&self) -> Box<dyn Iterator<Item = Self::Vert> + '_> {
                Box::new(self.core.verts.keys().map(|&b| IterHandle::new(b)))
            }
            fn edges(&self) -> Box<dyn Iterator<Item = Self::Edge> + '_> {
                Box::new(self.core.edges.keys().map(|&b| IterHandle::new(b)))
            }
            fn tail(&self, e: Self::Edge) -> Self::Vert {
                self.core.edges.get(&e.birth()).map(|d| d.tail).unwrap_or(IterHandle::null())
            }
            fn head(&self, e: Self::Edge) -> Self::Vert {
                self.core.edges.get(&e.birth()).map(|d| d.head).unwrap_or(IterHandle::null())
            }
        }
        impl Storage for $ty {
            fn insert_vert(&mut self) -> Self::Vert {
                self.core.insert_vert()
            }
            fn insert_edge(&mut self, tail: Self::Vert, head: Self::Vert) -> Self::Edge {
                self.core.insert_edge(tail, head)
            }
            fn vert_tracker(&self) -> &Tracker<Self::Vert> {
                &self.core.vert_tracker
            }
            fn edge_tracker(&self) -> &Tracker<Self::Edge> {
                &self.core.edge_tracker
            }
        }
    };
}

/// Generates the single-direction `SupportsErase` impl (out-only or in-only), which rejects
/// erasing a vertex with a live edge on its untracked cokey side.
macro_rules! impl_single_direction_erase {
    ($ty:ident) => {
        impl SupportsErase for $ty {
            fn erase_vert(&mut self, v: Self::Vert) -> crate::error::GraphResult<()> {
                self.core.erase_vert(v)
            }
            fn erase_edge(&mut self, e: Self::Edge) {
                self.core.erase_edge(e)
            }
            fn clear(&mut self) {
                self.core.clear()
            }
        }
    };
}

/// Adjacency list with only outgoing adjacency maintained.
pub struct AdjacencyListOut {
    core: Core,
}

impl AdjacencyListOut {
    pub fn new() -> Self {
        AdjacencyListOut { core: Core::new(true, false) }
    }
}
impl Default for AdjacencyListOut {
    fn default() -> Self {
        Self::new()
    }
}
impl_core_storage!(AdjacencyListOut);
impl_single_direction_erase!(AdjacencyListOut);
impl HasOutEdges for AdjacencyListOut {
    fn out_edges(&self, v: Self::Vert) -> Box<dyn Iterator<Item = Self::Edge> + '_> {
        match self.core.verts.get(&v.birth()) {
            Some(d) => Box::new(d.out.iter().map(|&b| IterHandle::new(b))),
            None => Box::new(std::iter::empty()),
        }
    }
}

/// Adjacency list with only incoming adjacency maintained.
pub struct AdjacencyListIn {
    core: Core,
}

impl AdjacencyListIn {
    pub fn new() -> Self {
        AdjacencyListIn { core: Core::new(false, true) }
    }
}
impl Default for AdjacencyListIn {
    fn default() -> Self {
        Self::new()
    }
}
impl_core_storage!(AdjacencyListIn);
impl_single_direction_erase!(AdjacencyListIn);
impl HasInEdges for AdjacencyListIn {
    fn in_edges(&self, v: Self::Vert) -> Box<dyn Iterator<Item = Self::Edge> + '_> {
        match self.core.verts.get(&v.birth()) {
            Some(d) => Box::new(d.r#in.iter().map(|&b| IterHandle::new(b))),
            None => Box::new(std::iter::empty()),
        }
    }
}

/// Adjacency list maintaining both directions.
pub struct BiAdjacencyList {
    core: Core,
}

impl BiAdjacencyList {
    pub fn new() -> Self {
        BiAdjacencyList { core: Core::new(true, true) }
    }
}
impl Default for BiAdjacencyList {
    fn default() -> Self {
        Self::new()
    }
}
impl_core_storage!(BiAdjacencyList);
impl SupportsErase for BiAdjacencyList {
    fn erase_vert(&mut self, v: Self::Vert) -> crate::error::GraphResult<()> {
        self.core.erase_vert_bidirectional(v)
    }
    fn erase_edge(&mut self, e: Self::Edge) {
        self.core.erase_edge(e)
    }
    fn clear(&mut self) {
        self.core.clear()
    }
}
impl HasOutEdges for BiAdjacencyList {
    fn out_edges(&self, v: Self::Vert) -> Box<dyn Iterator<Item = Self::Edge> + '_> {
        match self.core.verts.get(&v.birth()) {
            Some(d) => Box::new(d.out.iter().map(|&b| IterHandle::new(b))),
            None => Box::new(std::iter::empty()),
        }
    }
}
impl HasInEdges for BiAdjacencyList {
    fn in_edges(&self, v: Self::Vert) -> Box<dyn Iterator<Item = Self::Edge> + '_> {
        match self.core.verts.get(&v.birth()) {
            Some(d) => Box::new(d.r#in.iter().map(|&b| IterHandle::new(b))),
            None => Box::new(std::iter::empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_adjacency_tracks_degree() {
        let mut g = AdjacencyListOut::new();
        let a = g.insert_vert();
        let b = g.insert_vert();
        let c = g.insert_vert();
        g.insert_edge(a, b);
        g.insert_edge(a, c);
        assert_eq!(g.out_degree(a), 2);
        assert_eq!(g.out_degree(b), 0);
    }

    #[test]
    fn bi_adjacency_both_directions() {
        let mut g = BiAdjacencyList::new();
        let a = g.insert_vert();
        let b = g.insert_vert();
        let e = g.insert_edge(a, b);
        assert_eq!(g.out_edges(a).collect::<Vec<_>>(), vec![e]);
        assert_eq!(g.in_edges(b).collect::<Vec<_>>(), vec![e]);
        g.erase_edge(e);
        assert_eq!(g.out_degree(a), 0);
        assert_eq!(g.in_degree(b), 0);
    }

    #[test]
    fn bi_adjacency_erase_vert_removes_incident_edges() {
        let mut g = BiAdjacencyList::new();
        let a = g.insert_vert();
        let b = g.insert_vert();
        let c = g.insert_vert();
        g.insert_edge(a, b);
        g.insert_edge(c, a);
        let self_loop = g.insert_edge(a, a);

        g.erase_vert(a).unwrap();

        assert_eq!(g.order(), 2);
        assert_eq!(g.size(), 0);
        assert_eq!(g.in_degree(b), 0);
        assert_eq!(g.out_degree(c), 0);
        assert!(g.tail(self_loop).is_null());
    }

    #[test]
    fn out_only_erase_vert_rejects_dangling_incoming_edge() {
        let mut g = AdjacencyListOut::new();
        let a = g.insert_vert();
        let b = g.insert_vert();
        g.insert_edge(a, b);
        assert!(g.erase_vert(b).is_err());
        g.erase_vert(a).unwrap();
        assert_eq!(g.order(), 1);
    }

    #[test]
    fn out_only_erase_vert_removes_own_out_edges() {
        let mut g = AdjacencyListOut::new();
        let a = g.insert_vert();
        let b = g.insert_vert();
        g.insert_edge(a, b);
        g.erase_vert(a).unwrap();
        assert_eq!(g.order(), 1);
        assert_eq!(g.size(), 0);
    }
}
