// Copyright the graph contributors.
// Licensed under the Apache License, Version 2.0 (see LICENSE).

use crate::error::GraphResult;
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

/// Lock-free adjacency list requiring vertex and edge capacity to be pre-reserved at construction.
/// In exchange, dense side maps sized to that capacity (e.g. `Vec<AtomicBool>` closed-flags used by
/// the parallel bidirectional search) are safe to index concurrently without further
/// synchronisation, since the backing storage never relocates.
pub struct ContiguousAtomicAdjacencyList {
    verts: AtomicSegVec<VertSlot>,
    edges: AtomicSegVec<EdgeData>,
    vert_tracker: Tracker<IntegerHandle>,
    edge_tracker: Tracker<IntegerHandle>,
}

impl ContiguousAtomicAdjacencyList {
    pub fn with_capacity(vert_capacity: usize, edge_capacity: usize) -> Self {
        ContiguousAtomicAdjacencyList {
            verts: AtomicSegVec::with_capacity(vert_capacity),
            edges: AtomicSegVec::with_capacity(edge_capacity),
            vert_tracker: Tracker::new(),
            edge_tracker: Tracker::new(),
        }
    }

    pub fn try_atomic_insert_vert(&self) -> GraphResult<IntegerHandle> {
        let index = self.verts.push(VertSlot { out: AtomicSegVec::new() })?;
        Ok(IntegerHandle::from_index(index))
    }

    pub fn try_atomic_insert_edge(&self, tail: IntegerHandle, head: IntegerHandle) -> GraphResult<IntegerHandle> {
        let index = self.edges.push(EdgeData { tail, head })?;
        if let Some(slot) = self.verts.get(tail.index()) {
            slot.out.push(index as u32)?;
        }
        Ok(IntegerHandle::from_index(index))
    }
}

impl GraphCore for ContiguousAtomicAdjacencyList {
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

impl Storage for ContiguousAtomicAdjacencyList {
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

impl HasOutEdges for ContiguousAtomicAdjacencyList {
    fn out_edges(&self, v: Self::Vert) -> Box<dyn Iterator<Item = Self::Edge> + '_> {
        match self.verts.get(v.index()) {
            Some(slot) => Box::new(
                (0..slot.out.claimed_len()).filter_map(|i| slot.out.get(i).map(|&e| IntegerHandle::from_index(e as usize))),
            ),
            None => Box::new(std::iter::empty()),
        }
    }
}

impl AtomicInsert for ContiguousAtomicAdjacencyList {
    fn atomic_insert_vert(&self) -> Self::Vert {
        self.try_atomic_insert_vert().expect("vertex capacity exceeded; reserve more up front")
    }

    fn atomic_insert_edge(&self, tail: Self::Vert, head: Self::Vert) -> Self::Edge {
        self.try_atomic_insert_edge(tail, head)
            .expect("edge capacity exceeded; reserve more up front")
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
    fn pre_reserved_capacity_respected_under_concurrency() {
        let g = Arc::new(ContiguousAtomicAdjacencyList::with_capacity(1000, 10_000));
        let mut handles = Vec::new();
        for _ in 0..8 {
            let g = Arc::clone(&g);
            handles.push(thread::spawn(move || {
                while g.try_atomic_insert_vert().is_ok() {}
            }));
        }
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(g.order(), 1000);

        let verts: Vec<IntegerHandle> = (0..g.verts.claimed_len()).map(IntegerHandle::from_index).collect();
        let mut handles = Vec::new();
        for t in 0..8 {
            let g = Arc::clone(&g);
            let verts = verts.clone();
            handles.push(thread::spawn(move || {
                let mut count = 0;
                while g.try_atomic_insert_edge(verts[t], verts[(t + count) % verts.len()]).is_ok() {
                    count += 1;
                }
            }));
        }
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(g.size(), 10_000);
    }

    #[test]
    fn exceeding_capacity_is_a_precondition_error() {
        let g = ContiguousAtomicAdjacencyList::with_capacity(1, 0);
        assert!(g.try_atomic_insert_vert().is_ok());
        assert!(g.try_atomic_insert_vert().is_err());
    }
}
