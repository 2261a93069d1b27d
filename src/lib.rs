// Copyright the graph contributors.
// Licensed under the Apache License, Version 2.0 (see LICENSE).

#![deny(warnings)]
// Enable all clippy lints except for many of the pedantic ones. It's a shame this needs to be
// copied and pasted across crates, but there doesn't appear to be a way to include inner
// attributes from a common source.
#![deny(
    clippy::all,
    clippy::default_trait_access,
    clippy::expl_impl_clone_on_copy,
    clippy::if_not_else,
    clippy::needless_continue,
    clippy::unseparated_literal_suffix,
    clippy::used_underscore_binding
)]
// It is often more clear to show that nothing is being moved.
#![allow(clippy::match_ref_pats)]
// Subjective style.
#![allow(clippy::len_without_is_empty, clippy::redundant_field_names, clippy::too_many_arguments)]
// Default isn't as big a deal as people seem to think it is.
#![allow(clippy::new_without_default, clippy::new_ret_no_self)]

//! A generic directed-graph library: one storage-agnostic façade (`Graph<S>`) over a choice of
//! concrete representations (edge lists, adjacency lists, lock-free atomic variants, a pointer-arena
//! variant), plus read-only views (reverse, subforest/subtree, tensor product) and a shared set of
//! shortest-path/minimum-tree algorithms that work against any representation offering the
//! capability they need.
//!
//! Every fallible operation returns [`error::GraphResult`]; by default a violated precondition
//! (an out-of-graph handle, a non-adjacency-respecting path, a negative edge weight) surfaces as
//! `Err(GraphError::PreconditionUnmet)`. Building with the `unchecked` feature compiles those
//! checks out entirely for callers who have already validated their inputs and want to skip the
//! redundant work.

pub mod algo;
pub mod error;
pub mod handle;
pub mod path;
pub mod side;
pub mod storage;
pub mod views;
pub mod wrapper;

pub use error::{GraphError, GraphResult};
pub use handle::{DenseHandle, Handle, IntegerHandle, IterHandle, PointerHandle};
pub use path::Path;
pub use wrapper::Graph;
