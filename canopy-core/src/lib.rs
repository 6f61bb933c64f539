//! Canopy core library.
//!
//! Computes minimum-weight spanning trees (and forests, when the input is
//! disconnected) over weighted undirected graphs, consumed read-only through
//! the [`Graph`] capability trait. Two interchangeable strategies are
//! provided: a sorted-edge scan ([`kruskal_spanning_forest`]) and cut
//! growth ([`prim_spanning_forest`]), selected at construction time via
//! [`Canopy`] and both returning a [`SpanningForest`] of equal total weight.

mod canopy;
mod error;
mod graph;
mod mst;
mod result;
mod union_find;

pub use crate::{
    canopy::{Canopy, MstStrategy},
    error::{MstError, MstErrorCode, Result},
    graph::Graph,
    mst::{kruskal_spanning_forest, prim_spanning_forest},
    result::SpanningForest,
    union_find::DisjointSet,
};
