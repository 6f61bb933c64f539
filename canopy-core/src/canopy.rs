//! Spanning-forest orchestration and strategy selection.

use tracing::{info, instrument};

use crate::{
    error::Result,
    graph::Graph,
    mst::{kruskal_spanning_forest, prim_spanning_forest},
    result::SpanningForest,
};

/// Selects which algorithm [`Canopy::spanning_forest`] runs.
///
/// `Auto` resolves deterministically: it maps to the sorted-edge strategy,
/// so behaviour stays stable across builds and runs. Both strategies
/// produce forests of equal total weight for any input graph; only the
/// selected edge sets may differ where equal weights leave more than one
/// minimum forest.
///
/// # Examples
/// ```
/// use canopy_core::MstStrategy;
///
/// let strategy = MstStrategy::Auto;
/// assert!(matches!(strategy, MstStrategy::Auto));
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum MstStrategy {
    /// Let the library pick; currently the sorted-edge strategy.
    #[default]
    Auto,
    /// Sorted-edge scan with a union-find cycle test.
    Kruskal,
    /// Cut growth with a lazy-deletion frontier.
    Prim,
}

/// Entry point for computing spanning forests.
///
/// Each call allocates fresh working state and runs to completion
/// synchronously; no state is shared between calls, so one instance may be
/// used for any number of computations, including concurrently over graphs
/// that are not mutated while a computation is in flight.
///
/// # Examples
/// ```
/// use canopy_core::{Canopy, Graph, MstStrategy};
///
/// struct Path;
///
/// impl Graph for Path {
///     type Vertex = u8;
///     type Edge = (u8, u8);
///
///     fn vertices(&self) -> Vec<u8> {
///         vec![0, 1, 2]
///     }
///
///     fn edges(&self) -> Vec<(u8, u8)> {
///         vec![(0, 1), (1, 2)]
///     }
///
///     fn endpoints(&self, edge: &(u8, u8)) -> (u8, u8) {
///         *edge
///     }
///
///     fn edge_weight(&self, edge: &(u8, u8)) -> f64 {
///         f64::from(edge.0 + edge.1)
///     }
///
///     fn incident_edges(&self, vertex: u8) -> Vec<(u8, u8)> {
///         self.edges()
///             .into_iter()
///             .filter(|&(a, b)| a == vertex || b == vertex)
///             .collect()
///     }
/// }
///
/// let canopy = Canopy::with_strategy(MstStrategy::Prim);
/// let forest = canopy.spanning_forest(&Path)?;
/// assert!(forest.is_tree());
/// assert_eq!(forest.total_weight(), 4.0);
/// # Ok::<(), canopy_core::MstError>(())
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Canopy {
    strategy: MstStrategy,
}

impl Canopy {
    /// Creates an instance using [`MstStrategy::Auto`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an instance running the given strategy.
    #[must_use]
    pub fn with_strategy(strategy: MstStrategy) -> Self {
        Self { strategy }
    }

    /// Returns the configured strategy.
    #[must_use]
    pub fn strategy(&self) -> MstStrategy {
        self.strategy
    }

    /// Computes a minimum spanning forest of `graph` with the configured
    /// strategy.
    ///
    /// An empty graph, or one without edges, yields an empty zero-weight
    /// forest rather than an error.
    ///
    /// # Errors
    /// Returns [`MstError::UnknownEndpoint`](crate::MstError::UnknownEndpoint)
    /// when an edge references a vertex missing from [`Graph::vertices`],
    /// and [`MstError::NonFiniteWeight`](crate::MstError::NonFiniteWeight)
    /// when an edge weight is NaN or infinite.
    pub fn spanning_forest<G: Graph>(&self, graph: &G) -> Result<SpanningForest<G::Edge>> {
        let vertices = graph.vertices().len();
        let edges = graph.edges().len();
        self.spanning_forest_with_counts(graph, vertices, edges)
    }

    #[instrument(
        name = "canopy.spanning_forest",
        err,
        skip(self, graph),
        fields(
            strategy = ?self.strategy,
            vertices = vertices,
            edges = edges,
        ),
    )]
    fn spanning_forest_with_counts<G: Graph>(
        &self,
        graph: &G,
        vertices: usize,
        edges: usize,
    ) -> Result<SpanningForest<G::Edge>> {
        let forest = match self.strategy {
            MstStrategy::Auto | MstStrategy::Kruskal => kruskal_spanning_forest(graph),
            MstStrategy::Prim => prim_spanning_forest(graph),
        }?;
        info!(
            selected = forest.edge_count(),
            components = forest.component_count(),
            total_weight = forest.total_weight(),
            "spanning forest computed"
        );
        Ok(forest)
    }
}
