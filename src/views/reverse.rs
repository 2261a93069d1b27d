// Copyright the graph contributors.
// Licensed under the Apache License, Version 2.0 (see LICENSE).

//! A read-only view with `tail`/`head` swapped and the Out/In capability swapped.

use crate::storage::{GraphCore, HasInEdges, HasOutEdges};

pub struct Reverse<'a, S> {
    storage: &'a S,
}

impl<'a, S> Reverse<'a, S> {
    pub fn new(storage: &'a S) -> Self {
        Reverse { storage }
    }
}

impl<'a, S: GraphCore> GraphCore for Reverse<'a, S> {
    type Vert = S::Vert;
    type Edge = S::Edge;

    fn order(&self) -> usize {
        self.storage.order()
    }

    fn size(&self) -> usize {
        self.storage.size()
    }

    fn verts(&self) -> Box<dyn Iterator<Item = Self::Vert> + '_> {
        self.storage.verts()
    }

    fn edges(&self) -> Box<dyn Iterator<Item = Self::Edge> + '_> {
        self.storage.edges()
    }

    fn tail(&self, e: Self::Edge) -> Self::Vert {
        self.storage.head(e)
    }

    fn head(&self, e: Self::Edge) -> Self::Vert {
        self.storage.tail(e)
    }
}

impl<'a, S: GraphCore + HasInEdges> HasOutEdges for Reverse<'a, S> {
    fn out_edges(&self, v: Self::Vert) -> Box<dyn Iterator<Item = Self::Edge> + '_> {
        self.storage.in_edges(v)
    }
}

impl<'a, S: GraphCore + HasOutEdges> HasInEdges for Reverse<'a, S> {
    fn in_edges(&self, v: Self::Vert) -> Box<dyn Iterator<Item = Self::Edge> + '_> {
        self.storage.out_edges(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::adjacency_list::BiAdjacencyList;

    #[test]
    fn swaps_tail_and_head_and_direction() {
        let mut g = BiAdjacencyList::new();
        let a = g.insert_vert();
        let b = g.insert_vert();
        let e = g.insert_edge(a, b);
        let rev = Reverse::new(&g);
        assert_eq!(rev.tail(e), b);
        assert_eq!(rev.head(e), a);
        assert_eq!(rev.out_edges(b).collect::<Vec<_>>(), vec![e]);
        assert_eq!(rev.in_edges(a).collect::<Vec<_>>(), vec![e]);
    }
}
