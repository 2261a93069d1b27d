// Copyright the graph contributors.
// Licensed under the Apache License, Version 2.0 (see LICENSE).

//! Tensor-product views: vertices/edges are tuples across `k` factor graphs. Rust has no
//! variadic generics, so fixed arities 2–4 are distinct types (`Tensor2`..`Tensor4`), and the
//! arbitrary-`k` case is [`TensorN`], a const-generic array of `N` same-typed factors — an array
//! rather than a `Vec` of factors, since a `Vec`-keyed handle could not be `Copy` (see DESIGN.md).

use crate::handle::Handle;
use crate::storage::{GraphCore, HasInEdges, HasOutEdges};

pub struct Tensor2<'a, A, B> {
    a: &'a A,
    b: &'a B,
}

impl<'a, A, B> Tensor2<'a, A, B> {
    pub fn new(a: &'a A, b: &'a B) -> Self {
        Tensor2 { a, b }
    }
}

impl<'a, A: GraphCore, B: GraphCore> GraphCore for Tensor2<'a, A, B> {
    type Vert = (A::Vert, B::Vert);
    type Edge = (A::Edge, B::Edge);

    fn order(&self) -> usize {
        self.a.order() * self.b.order()
    }

    fn size(&self) -> usize {
        self.a.size() * self.b.size()
    }

    fn verts(&self) -> Box<dyn Iterator<Item = Self::Vert> + '_> {
        let bs: Vec<B::Vert> = self.b.verts().collect();
        Box::new(self.a.verts().flat_map(move |va| {
            let bs = bs.clone();
            bs.into_iter().map(move |vb| (va, vb))
        }))
    }

    fn edges(&self) -> Box<dyn Iterator<Item = Self::Edge> + '_> {
        let bs: Vec<B::Edge> = self.b.edges().collect();
        Box::new(self.a.edges().flat_map(move |ea| {
            let bs = bs.clone();
            bs.into_iter().map(move |eb| (ea, eb))
        }))
    }

    fn tail(&self, e: Self::Edge) -> Self::Vert {
        (self.a.tail(e.0), self.b.tail(e.1))
    }

    fn head(&self, e: Self::Edge) -> Self::Vert {
        (self.a.head(e.0), self.b.head(e.1))
    }
}

impl<'a, A: GraphCore + HasOutEdges, B: GraphCore + HasOutEdges> HasOutEdges for Tensor2<'a, A, B> {
    fn out_edges(&self, v: Self::Vert) -> Box<dyn Iterator<Item = Self::Edge> + '_> {
        let bs: Vec<B::Edge> = self.b.out_edges(v.1).collect();
        Box::new(self.a.out_edges(v.0).flat_map(move |ea| {
            let bs = bs.clone();
            bs.into_iter().map(move |eb| (ea, eb))
        }))
    }
}

impl<'a, A: GraphCore + HasInEdges, B: GraphCore + HasInEdges> HasInEdges for Tensor2<'a, A, B> {
    fn in_edges(&self, v: Self::Vert) -> Box<dyn Iterator<Item = Self::Edge> + '_> {
        let bs: Vec<B::Edge> = self.b.in_edges(v.1).collect();
        Box::new(self.a.in_edges(v.0).flat_map(move |ea| {
            let bs = bs.clone();
            bs.into_iter().map(move |eb| (ea, eb))
        }))
    }
}

pub struct Tensor3<'a, A, B, C> {
    a: &'a A,
    b: &'a B,
    c: &'a C,
}

impl<'a, A, B, C> Tensor3<'a, A, B, C> {
    pub fn new(a: &'a A, b: &'a B, c: &'a C) -> Self {
        Tensor3 { a, b, c }
    }
}

impl<'a, A: GraphCore, B: GraphCore, C: GraphCore> GraphCore for Tensor3<'a, A, B, C> {
    type Vert = (A::Vert, B::Vert, C::Vert);
    type Edge = (A::Edge, B::Edge, C::Edge);

    fn order(&self) -> usize {
        self.a.order() * self.b.order() * self.c.order()
    }

    fn size(&self) -> usize {
        self.a.size() * self.b.size() * self.c.size()
    }

    fn verts(&self) -> Box<dyn Iterator<Item = Self::Vert> + '_> {
        let bs: Vec<B::Vert> = self.b.verts().collect();
        let cs: Vec<C::Vert> = self.c.verts().collect();
        Box::new(self.a.verts().flat_map(move |va| {
            let bs = bs.clone();
            let cs = cs.clone();
            bs.into_iter().flat_map(move |vb| {
                let cs = cs.clone();
                cs.into_iter().map(move |vc| (va, vb, vc))
            })
        }))
    }

    fn edges(&self) -> Box<dyn Iterator<Item = Self::Edge> + '_> {
        let bs: Vec<B::Edge> = self.b.edges().collect();
        let cs: Vec<C::Edge> = self.c.edges().collect();
        Box::new(self.a.edges().flat_map(move |ea| {
            let bs = bs.clone();
            let cs = cs.clone();
            bs.into_iter().flat_map(move |eb| {
                let cs = cs.clone();
                cs.into_iter().map(move |ec| (ea, eb, ec))
            })
        }))
    }

    fn tail(&self, e: Self::Edge) -> Self::Vert {
        (self.a.tail(e.0), self.b.tail(e.1), self.c.tail(e.2))
    }

    fn head(&self, e: Self::Edge) -> Self::Vert {
        (self.a.head(e.0), self.b.head(e.1), self.c.head(e.2))
    }
}

impl<'a, A: GraphCore + HasOutEdges, B: GraphCore + HasOutEdges, C: GraphCore + HasOutEdges> HasOutEdges
    for Tensor3<'a, A, B, C>
{
    fn out_edges(&self, v: Self::Vert) -> Box<dyn Iterator<Item = Self::Edge> + '_> {
        let bs: Vec<B::Edge> = self.b.out_edges(v.1).collect();
        let cs: Vec<C::Edge> = self.c.out_edges(v.2).collect();
        Box::new(self.a.out_edges(v.0).flat_map(move |ea| {
            let bs = bs.clone();
            let cs = cs.clone();
            bs.into_iter().flat_map(move |eb| {
                let cs = cs.clone();
                cs.into_iter().map(move |ec| (ea, eb, ec))
            })
        }))
    }
}

impl<'a, A: GraphCore + HasInEdges, B: GraphCore + HasInEdges, C: GraphCore + HasInEdges> HasInEdges
    for Tensor3<'a, A, B, C>
{
    fn in_edges(&self, v: Self::Vert) -> Box<dyn Iterator<Item = Self::Edge> + '_> {
        let bs: Vec<B::Edge> = self.b.in_edges(v.1).collect();
        let cs: Vec<C::Edge> = self.c.in_edges(v.2).collect();
        Box::new(self.a.in_edges(v.0).flat_map(move |ea| {
            let bs = bs.clone();
            let cs = cs.clone();
            bs.into_iter().flat_map(move |eb| {
                let cs = cs.clone();
                cs.into_iter().map(move |ec| (ea, eb, ec))
            })
        }))
    }
}

pub struct Tensor4<'a, A, B, C, D> {
    a: &'a A,
    b: &'a B,
    c: &'a C,
    d: &'a D,
}

impl<'a, A, B, C, D> Tensor4<'a, A, B, C, D> {
    pub fn new(a: &'a A, b: &'a B, c: &'a C, d: &'a D) -> Self {
        Tensor4 { a, b, c, d }
    }
}

impl<'a, A: GraphCore, B: GraphCore, C: GraphCore, D: GraphCore> GraphCore for Tensor4<'a, A, B, C, D> {
    type Vert = (A::Vert, B::Vert, C::Vert, D::Vert);
    type Edge = (A::Edge, B::Edge, C::Edge, D::Edge);

    fn order(&self) -> usize {
        self.a.order() * self.b.order() * self.c.order() * self.d.order()
    }

    fn size(&self) -> usize {
        self.a.size() * self.b.size() * self.c.size() * self.d.size()
    }

    fn verts(&self) -> Box<dyn Iterator<Item = Self::Vert> + '_> {
        let bs: Vec<B::Vert> = self.b.verts().collect();
        let cs: Vec<C::Vert> = self.c.verts().collect();
        let ds: Vec<D::Vert> = self.d.verts().collect();
        Box::new(self.a.verts().flat_map(move |va| {
            let bs = bs.clone();
            let cs = cs.clone();
            let ds = ds.clone();
            bs.into_iter().flat_map(move |vb| {
                let cs = cs.clone();
                let ds = ds.clone();
                cs.into_iter().flat_map(move |vc| {
                    let ds = ds.clone();
                    ds.into_iter().map(move |vd| (va, vb, vc, vd))
                })
            })
        }))
    }

    fn edges(&self) -> Box<dyn Iterator<Item = Self::Edge> + '_> {
        let bs: Vec<B::Edge> = self.b.edges().collect();
        let cs: Vec<C::Edge> = self.c.edges().collect();
        let ds: Vec<D::Edge> = self.d.edges().collect();
        Box::new(self.a.edges().flat_map(move |ea| {
            let bs = bs.clone();
            let cs = cs.clone();
            let ds = ds.clone();
            bs.into_iter().flat_map(move |eb| {
                let cs = cs.clone();
                let ds = ds.clone();
                cs.into_iter().flat_map(move |ec| {
                    let ds = ds.clone();
                    ds.into_iter().map(move |ed| (ea, eb, ec, ed))
                })
            })
        }))
    }

    fn tail(&self, e: Self::Edge) -> Self::Vert {
        (self.a.tail(e.0), self.b.tail(e.1), self.c.tail(e.2), self.d.tail(e.3))
    }

    fn head(&self, e: Self::Edge) -> Self::Vert {
        (self.a.head(e.0), self.b.head(e.1), self.c.head(e.2), self.d.head(e.3))
    }
}

impl<'a, A: GraphCore + HasOutEdges, B: GraphCore + HasOutEdges, C: GraphCore + HasOutEdges, D: GraphCore + HasOutEdges>
    HasOutEdges for Tensor4<'a, A, B, C, D>
{
    fn out_edges(&self, v: Self::Vert) -> Box<dyn Iterator<Item = Self::Edge> + '_> {
        let bs: Vec<B::Edge> = self.b.out_edges(v.1).collect();
        let cs: Vec<C::Edge> = self.c.out_edges(v.2).collect();
        let ds: Vec<D::Edge> = self.d.out_edges(v.3).collect();
        Box::new(self.a.out_edges(v.0).flat_map(move |ea| {
            let bs = bs.clone();
            let cs = cs.clone();
            let ds = ds.clone();
            bs.into_iter().flat_map(move |eb| {
                let cs = cs.clone();
                let ds = ds.clone();
                cs.into_iter().flat_map(move |ec| {
                    let ds = ds.clone();
                    ds.into_iter().map(move |ed| (ea, eb, ec, ed))
                })
            })
        }))
    }
}

impl<'a, A: GraphCore + HasInEdges, B: GraphCore + HasInEdges, C: GraphCore + HasInEdges, D: GraphCore + HasInEdges>
    HasInEdges for Tensor4<'a, A, B, C, D>
{
    fn in_edges(&self, v: Self::Vert) -> Box<dyn Iterator<Item = Self::Edge> + '_> {
        let bs: Vec<B::Edge> = self.b.in_edges(v.1).collect();
        let cs: Vec<C::Edge> = self.c.in_edges(v.2).collect();
        let ds: Vec<D::Edge> = self.d.in_edges(v.3).collect();
        Box::new(self.a.in_edges(v.0).flat_map(move |ea| {
            let bs = bs.clone();
            let cs = cs.clone();
            let ds = ds.clone();
            bs.into_iter().flat_map(move |eb| {
                let cs = cs.clone();
                let ds = ds.clone();
                cs.into_iter().flat_map(move |ec| {
                    let ds = ds.clone();
                    ds.into_iter().map(move |ed| (ea, eb, ec, ed))
                })
            })
        }))
    }
}

/// Homogeneous tensor product of `N` same-typed factor graphs.
pub struct TensorN<'a, G, const N: usize> {
    graphs: [&'a G; N],
}

impl<'a, G, const N: usize> TensorN<'a, G, N> {
    pub fn new(graphs: [&'a G; N]) -> Self {
        TensorN { graphs }
    }
}

impl<'a, G: GraphCore, const N: usize> GraphCore for TensorN<'a, G, N> {
    type Vert = [G::Vert; N];
    type Edge = [G::Edge; N];

    fn order(&self) -> usize {
        self.graphs.iter().map(|g| g.order()).product()
    }

    fn size(&self) -> usize {
        self.graphs.iter().map(|g| g.size()).product()
    }

    fn verts(&self) -> Box<dyn Iterator<Item = Self::Vert> + '_> {
        Box::new(cartesian_product(self.graphs.iter().map(|g| g.verts().collect::<Vec<_>>()).collect()))
    }

    fn edges(&self) -> Box<dyn Iterator<Item = Self::Edge> + '_> {
        Box::new(cartesian_product(self.graphs.iter().map(|g| g.edges().collect::<Vec<_>>()).collect()))
    }

    fn tail(&self, e: Self::Edge) -> Self::Vert {
        let mut out = [G::Vert::null(); N];
        for (i, g) in self.graphs.iter().enumerate() {
            out[i] = g.tail(e[i]);
        }
        out
    }

    fn head(&self, e: Self::Edge) -> Self::Vert {
        let mut out = [G::Vert::null(); N];
        for (i, g) in self.graphs.iter().enumerate() {
            out[i] = g.head(e[i]);
        }
        out
    }
}

impl<'a, G: GraphCore + HasOutEdges, const N: usize> HasOutEdges for TensorN<'a, G, N> {
    fn out_edges(&self, v: Self::Vert) -> Box<dyn Iterator<Item = Self::Edge> + '_> {
        Box::new(cartesian_product(
            self.graphs.iter().zip(v).map(|(g, vi)| g.out_edges(vi).collect::<Vec<_>>()).collect(),
        ))
    }
}

impl<'a, G: GraphCore + HasInEdges, const N: usize> HasInEdges for TensorN<'a, G, N> {
    fn in_edges(&self, v: Self::Vert) -> Box<dyn Iterator<Item = Self::Edge> + '_> {
        Box::new(cartesian_product(
            self.graphs.iter().zip(v).map(|(g, vi)| g.in_edges(vi).collect::<Vec<_>>()).collect(),
        ))
    }
}

/// Eagerly materialises the Cartesian product of `N` same-length-type component lists into
/// fixed-size-`N` array tuples.
fn cartesian_product<T: Copy, const N: usize>(components: Vec<Vec<T>>) -> impl Iterator<Item = [T; N]> {
    let mut combos: Vec<Vec<T>> = vec![Vec::new()];
    for values in &components {
        let mut next = Vec::with_capacity(combos.len() * values.len());
        for combo in &combos {
            for &v in values {
                let mut c = combo.clone();
                c.push(v);
                next.push(c);
            }
        }
        combos = next;
    }
    combos.into_iter().map(|c| {
        let mut out = [c[0]; N];
        out[..].copy_from_slice(&c);
        out
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::adjacency_list::AdjacencyListOut;
    use crate::storage::Storage;

    #[test]
    fn tensor2_order_and_size_multiply() {
        let mut g1 = AdjacencyListOut::new();
        let a1 = g1.insert_vert();
        let b1 = g1.insert_vert();
        g1.insert_edge(a1, b1);

        let mut g2 = AdjacencyListOut::new();
        let a2 = g2.insert_vert();
        let b2 = g2.insert_vert();
        let c2 = g2.insert_vert();
        g2.insert_edge(a2, b2);
        g2.insert_edge(b2, c2);

        let t = Tensor2::new(&g1, &g2);
        assert_eq!(t.order(), 2 * 3);
        assert_eq!(t.size(), 1 * 2);
        assert_eq!(t.tail((g1.edges().next().unwrap(), g2.edges().next().unwrap())), (a1, a2));
    }

    #[test]
    fn tensor_n_order_multiplies_across_factors() {
        let mut g1 = AdjacencyListOut::new();
        g1.insert_vert();
        g1.insert_vert();
        let mut g2 = AdjacencyListOut::new();
        g2.insert_vert();
        g2.insert_vert();
        g2.insert_vert();
        let t = TensorN::new([&g1, &g2]);
        assert_eq!(t.order(), 6);
    }
}
