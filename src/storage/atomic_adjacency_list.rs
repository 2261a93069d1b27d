// Copyright the graph contributors.
// Licensed under the Apache License, Version 2.0 (see LICENSE).

use crate::handle::{DenseHandle, Handle, IntegerHandle};
use crate::side::Tracker;

use super::atomic_vec::AtomicSegVec;
use super::{AtomicInsert, GraphCore, HasOutEdges, Storage};

struct EdgeData {
    tail: IntegerHandle,
    head: IntegerHandle,
}

struct VertSlot {
    out: AtomicSegVec<u32>,
}

/// Lock-free adjacency list with outgoing adjacency. Vertex and edge indices are assigned by
/// atomic fetch-add (via [`AtomicSegVec`]); no pre-reservation is required, and no erasure is
/// supported.
pub struct AtomicAdjacencyList {
    verts: AtomicSegVec<VertSlot>,
    edges: AtomicSegVec<EdgeData>,
    vert_tracker: Tracker<IntegerHandle>,
    edge_tracker: Tracker<IntegerHandle>,
}

impl AtomicAdjacencyList {
    pub fn new() -> Self {
        AtomicAdjacencyList {
            verts: AtomicSegVec::new(),
            edges: AtomicSegVec::new(),
            vert_tracker: Tracker::new(),
            edge_tracker: Tracker::new(),
        }
    }
}

impl Default for AtomicAdjacencyList {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphCore for AtomicAdjacencyList {
    type Vert = IntegerHandle;
    type Edge = IntegerHandle;

    fn order(&self) -> usize {
        self.verts.conservative_len()
    }

    fn size(&self) -> usize {
        self.edges.conservative_len()
    }

    fn verts(&self) -> Box<dyn Iterator<Item = Self::Vert> + '_> {
        Box::new((0..self.verts.claimed_len()).map(IntegerHandle::from_index))
    }

    fn edges(&self) -> Box<dyn Iterator<Item = Self::Edge> + '_> {
        Box::new((0..self.edges.claimed_len()).map(IntegerHandle::from_index))
    }

    fn tail(&self, e: Self::Edge) -> Self::Vert {
        self.edges.get(e.index()).map(|d| d.tail).unwrap_or(IntegerHandle::null())
    }

    fn head(&self, e: Self::Edge) -> Self::Vert {
        self.edges.get(e.index()).map(|d| d.head).unwrap_or(IntegerHandle::null())
    }
}

impl Storage for AtomicAdjacencyList {
    fn insert_vert(&mut self) -> Self::Vert {
        self.atomic_insert_vert()
    }

    fn insert_edge(&mut self, tail: Self::Vert, head: Self::Vert) -> Self::Edge {
        self.atomic_insert_edge(tail, head)
    }

    fn vert_tracker(&self) -> &Tracker<Self::Vert> {
        &self.vert_tracker
    }

    fn edge_tracker(&self) -> &Tracker<Self::Edge> {
        &self.edge_tracker
    }
}

impl HasOutEdges for AtomicAdjacencyList {
    fn out_edges(&self, v: Self::Vert) -> Box<dyn Iterator<Item = Self::Edge> + '_> {
        match self.verts.get(v.index()) {
            Some(slot) => Box::new(
                (0..slot.out.claimed_len()).filter_map(|i| slot.out.get(i).map(|&e| IntegerHandle::from_index(e as usize))),
            ),
            None => Box::new(std::iter::empty()),
        }
    }
}

impl AtomicInsert for AtomicAdjacencyList {
    fn atomic_insert_vert(&self) -> Self::Vert {
        let index = self
            .verts
            .push(VertSlot { out: AtomicSegVec::new() })
            .expect("growing AtomicSegVec never rejects a push");
        log::trace!("atomic_adjacency_list: inserted vert {index}");
        IntegerHandle::from_index(index)
    }

    fn atomic_insert_edge(&self, tail: Self::Vert, head: Self::Vert) -> Self::Edge {
        let index = self
            .edges
            .push(EdgeData { tail, head })
            .expect("growing AtomicSegVec never rejects a push");
        if let Some(slot) = self.verts.get(tail.index()) {
            slot.out.push(index as u32).expect("growing AtomicSegVec never rejects a push");
        }
        log::trace!("atomic_adjacency_list: inserted edge {index}");
        IntegerHandle::from_index(index)
    }

    fn conservative_order(&self) -> usize {
        self.verts.conservative_len()
    }

    fn conservative_size(&self) -> usize {
        self.edges.conservative_len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn concurrent_inserts_are_all_observed_after_join() {
        let g = Arc::new(AtomicAdjacencyList::new());
        let verts: Vec<IntegerHandle> = (0..16).map(|_| g.atomic_insert_vert()).collect();
        let mut handles = Vec::new();
        for t in 0..8 {
            let g = Arc::clone(&g);
            let verts = verts.clone();
            handles.push(thread::spawn(move || {
                for i in 0..50 {
                    g.atomic_insert_edge(verts[t], verts[(t + i) % verts.len()]);
                }
            }));
        }
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(g.order(), 16);
        assert_eq!(g.size(), 400);
    }
}
