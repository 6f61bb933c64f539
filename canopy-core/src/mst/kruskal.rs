//! Sorted-edge spanning-forest strategy.

use std::collections::HashSet;

use tracing::debug;

use crate::{
    error::Result,
    graph::{Graph, resolve_edge},
    result::SpanningForest,
    union_find::DisjointSet,
};

/// Computes a minimum spanning forest by scanning all edges in ascending
/// weight order and accepting each edge that does not close a cycle.
///
/// Equal-weight edges are processed in input order (the sort is stable), so
/// repeated runs over the same graph instance select identical edge sets.
/// Self-loops can never be accepted because their endpoints already share a
/// component, and of parallel edges at most one survives per endpoint pair.
/// Disconnected input yields a forest with one tree per component;
/// vertices never unified with anything remain isolated and contribute no
/// edges.
///
/// # Errors
/// Returns [`MstError::UnknownEndpoint`](crate::MstError::UnknownEndpoint)
/// when an edge references a vertex missing from [`Graph::vertices`], and
/// [`MstError::NonFiniteWeight`](crate::MstError::NonFiniteWeight) when an
/// edge weight is NaN or infinite. Validation runs before any edge is
/// selected.
pub fn kruskal_spanning_forest<G: Graph>(graph: &G) -> Result<SpanningForest<G::Edge>> {
    let vertices = graph.vertices();
    let known: HashSet<G::Vertex> = vertices.iter().copied().collect();

    let mut components = DisjointSet::with_capacity(vertices.len());
    for &vertex in &vertices {
        components.insert(vertex);
    }

    let mut candidates = Vec::new();
    for edge in graph.edges() {
        let (source, target, weight) = resolve_edge(graph, &edge, &known)?;
        candidates.push(Candidate {
            source,
            target,
            weight,
            edge,
        });
    }
    // Stable sort: equal weights keep their input iteration order.
    candidates.sort_by(|left, right| left.weight.total_cmp(&right.weight));

    let mut selected = Vec::with_capacity(vertices.len().saturating_sub(1));
    let mut total_weight = 0.0_f64;
    let mut component_count = vertices.len();

    for candidate in candidates {
        if component_count == 1 {
            break;
        }
        if components.union(candidate.source, candidate.target) {
            total_weight += candidate.weight;
            selected.push(candidate.edge);
            component_count -= 1;
        }
    }

    debug!(
        selected = selected.len(),
        components = component_count,
        "sorted-edge scan complete"
    );

    Ok(SpanningForest::new(selected, total_weight, component_count))
}

struct Candidate<V, E> {
    source: V,
    target: V,
    weight: f64,
    edge: E,
}
