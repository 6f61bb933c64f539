//! Read-only graph access for spanning-forest computation.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use crate::error::{MstError, Result};

/// Abstraction over a weighted undirected graph.
///
/// The spanning-forest strategies consume a graph exclusively through this
/// trait and never mutate it. Parallel edges between the same endpoint pair
/// and self-loops are both permitted; weights may carry any sign. The only
/// ordering requirement is that [`Graph::vertices`] enumerates in a stable
/// order for a given graph instance, which makes repeated computations over
/// that instance reproducible.
///
/// # Examples
/// ```
/// use canopy_core::{Graph, kruskal_spanning_forest};
///
/// /// Triangle with one heavy edge, edges addressed by index.
/// struct Triangle;
///
/// impl Graph for Triangle {
///     type Vertex = u32;
///     type Edge = usize;
///
///     fn vertices(&self) -> Vec<u32> {
///         vec![0, 1, 2]
///     }
///
///     fn edges(&self) -> Vec<usize> {
///         vec![0, 1, 2]
///     }
///
///     fn endpoints(&self, edge: &usize) -> (u32, u32) {
///         [(0, 1), (1, 2), (0, 2)][*edge]
///     }
///
///     fn edge_weight(&self, edge: &usize) -> f64 {
///         [1.0, 2.0, 9.0][*edge]
///     }
///
///     fn incident_edges(&self, vertex: u32) -> Vec<usize> {
///         self.edges()
///             .into_iter()
///             .filter(|edge| {
///                 let (a, b) = self.endpoints(edge);
///                 a == vertex || b == vertex
///             })
///             .collect()
///     }
/// }
///
/// let forest = kruskal_spanning_forest(&Triangle)?;
/// assert_eq!(forest.edges(), &[0, 1]);
/// assert_eq!(forest.total_weight(), 3.0);
/// # Ok::<(), canopy_core::MstError>(())
/// ```
pub trait Graph {
    /// Opaque vertex identity; used as a map key by the strategies.
    type Vertex: Copy + Eq + Hash + Ord + fmt::Debug;
    /// Edge handle carried through into the selected forest.
    type Edge: Clone;

    /// Enumerates every vertex. The order may be arbitrary but must be
    /// stable for a given graph instance.
    fn vertices(&self) -> Vec<Self::Vertex>;

    /// Enumerates every edge, parallel edges and self-loops included.
    fn edges(&self) -> Vec<Self::Edge>;

    /// Returns the edge's two endpoints. Both endpoints of a self-loop are
    /// equal.
    fn endpoints(&self, edge: &Self::Edge) -> (Self::Vertex, Self::Vertex);

    /// Returns the edge's weight. The strategies are weight-sign-agnostic
    /// and require only that every weight is finite.
    fn edge_weight(&self, edge: &Self::Edge) -> f64;

    /// Enumerates the edges incident to `vertex`, self-loops included.
    /// Every edge returned here must also appear in [`Graph::edges`].
    fn incident_edges(&self, vertex: Self::Vertex) -> Vec<Self::Edge>;
}

/// Resolves an edge to `(source, target, weight)`, rejecting endpoints the
/// graph does not enumerate and non-finite weights.
pub(crate) fn resolve_edge<G: Graph>(
    graph: &G,
    edge: &G::Edge,
    vertices: &HashSet<G::Vertex>,
) -> Result<(G::Vertex, G::Vertex, f64)> {
    let (source, target) = graph.endpoints(edge);
    if !vertices.contains(&source) {
        return Err(unknown_endpoint(source));
    }
    if !vertices.contains(&target) {
        return Err(unknown_endpoint(target));
    }
    let weight = graph.edge_weight(edge);
    if !weight.is_finite() {
        return Err(MstError::NonFiniteWeight {
            source: render(source),
            target: render(target),
        });
    }
    Ok((source, target, weight))
}

fn unknown_endpoint<V: fmt::Debug>(vertex: V) -> MstError {
    MstError::UnknownEndpoint {
        vertex: render(vertex),
    }
}

fn render<V: fmt::Debug>(vertex: V) -> Arc<str> {
    Arc::from(format!("{vertex:?}"))
}
