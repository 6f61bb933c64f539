//! Cut-growth spanning-forest strategy.

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};

use tracing::debug;

use crate::{
    error::Result,
    graph::{Graph, resolve_edge},
    result::SpanningForest,
};

/// Computes a minimum spanning forest by growing one tree per connected
/// component, always extending the current tree with the minimum-weight
/// edge crossing the cut between visited and unvisited vertices.
///
/// The frontier is a binary min-heap ordered by weight with insertion
/// sequence as tiebreak, so equal-weight extraction is deterministic.
/// Entries whose far endpoint was reached through a cheaper edge are
/// discarded lazily on extraction rather than deleted in place; each edge
/// enters the frontier at most twice. Self-loops never survive (their far
/// endpoint is already visited) and of parallel edges only the lightest
/// one extracted while its endpoint is still unvisited is accepted.
///
/// # Errors
/// Returns [`MstError::UnknownEndpoint`](crate::MstError::UnknownEndpoint)
/// when an edge references a vertex missing from [`Graph::vertices`], and
/// [`MstError::NonFiniteWeight`](crate::MstError::NonFiniteWeight) when an
/// edge weight is NaN or infinite. The whole edge set is validated before
/// the traversal starts, so a malformed graph is rejected identically by
/// both strategies regardless of which edges the traversal would reach.
pub fn prim_spanning_forest<G: Graph>(graph: &G) -> Result<SpanningForest<G::Edge>> {
    let vertices = graph.vertices();
    let known: HashSet<G::Vertex> = vertices.iter().copied().collect();

    for edge in graph.edges() {
        resolve_edge(graph, &edge, &known)?;
    }

    let mut visited: HashSet<G::Vertex> = HashSet::with_capacity(vertices.len());
    let mut frontier: BinaryHeap<Reverse<FrontierEdge<G::Vertex, G::Edge>>> = BinaryHeap::new();
    let mut selected = Vec::with_capacity(vertices.len().saturating_sub(1));
    let mut total_weight = 0.0_f64;
    let mut component_count = 0_usize;
    let mut sequence = 0_u64;

    for &root in &vertices {
        if visited.contains(&root) {
            continue;
        }
        component_count += 1;
        visited.insert(root);
        enqueue_incident(graph, root, &visited, &mut frontier, &mut sequence);

        while let Some(Reverse(crossing)) = frontier.pop() {
            if !visited.insert(crossing.target) {
                // Stale entry: the far endpoint was reached through a
                // cheaper edge after this one was enqueued.
                continue;
            }
            total_weight += crossing.weight;
            selected.push(crossing.edge);
            enqueue_incident(graph, crossing.target, &visited, &mut frontier, &mut sequence);
        }
    }

    debug!(
        selected = selected.len(),
        components = component_count,
        "cut growth complete"
    );

    Ok(SpanningForest::new(selected, total_weight, component_count))
}

fn enqueue_incident<G: Graph>(
    graph: &G,
    vertex: G::Vertex,
    visited: &HashSet<G::Vertex>,
    frontier: &mut BinaryHeap<Reverse<FrontierEdge<G::Vertex, G::Edge>>>,
    sequence: &mut u64,
) {
    for edge in graph.incident_edges(vertex) {
        let (source, target) = graph.endpoints(&edge);
        let far = if source == vertex { target } else { source };
        if visited.contains(&far) {
            continue;
        }
        frontier.push(Reverse(FrontierEdge {
            weight: graph.edge_weight(&edge),
            sequence: *sequence,
            target: far,
            edge,
        }));
        *sequence += 1;
    }
}

/// Candidate edge crossing the current cut, ordered by weight with
/// insertion sequence as tiebreak.
struct FrontierEdge<V, E> {
    weight: f64,
    sequence: u64,
    target: V,
    edge: E,
}

impl<V, E> FrontierEdge<V, E> {
    fn compare(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

impl<V, E> PartialEq for FrontierEdge<V, E> {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl<V, E> Eq for FrontierEdge<V, E> {}

impl<V, E> Ord for FrontierEdge<V, E> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl<V, E> PartialOrd for FrontierEdge<V, E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}
