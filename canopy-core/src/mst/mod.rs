//! Minimum spanning tree and forest construction.
//!
//! Two interchangeable strategies over the [`Graph`](crate::Graph)
//! capability set: a sorted-edge scan driving a union-find cycle test, and
//! cut growth driving a lazy-deletion frontier. Both return a
//! [`SpanningForest`](crate::SpanningForest) and, for any input graph,
//! produce forests of equal total weight; the selected edge sets may differ
//! where equal weights leave more than one minimum forest.

mod kruskal;
mod prim;

pub use kruskal::kruskal_spanning_forest;
pub use prim::prim_spanning_forest;

#[cfg(test)]
mod property;
