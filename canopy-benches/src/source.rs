//! Synthetic graph generation for benchmarks.

use canopy_core::Graph;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Parameters for G(n, p) generation.
#[derive(Clone, Copy, Debug)]
pub struct SyntheticConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Independent probability of each vertex pair being connected.
    pub edge_probability: f64,
    /// Seed for the weight and topology draws.
    pub seed: u64,
}

/// Random undirected graph over dense integer vertices, with adjacency
/// lists precomputed so the cut-growth strategy is not dominated by edge
/// scans.
#[derive(Clone, Debug)]
pub struct SyntheticGraph {
    vertex_count: usize,
    edges: Vec<(usize, usize, f64)>,
    incident: Vec<Vec<usize>>,
}

impl SyntheticGraph {
    /// Generates a G(n, p) instance with independently drawn positive
    /// weights. The same configuration always yields the same graph.
    #[must_use]
    pub fn generate(config: &SyntheticConfig) -> Self {
        let mut rng = SmallRng::seed_from_u64(config.seed);
        let mut edges = Vec::new();
        let mut incident = vec![Vec::new(); config.vertex_count];
        for i in 0..config.vertex_count {
            for j in (i + 1)..config.vertex_count {
                if rng.gen_bool(config.edge_probability) {
                    let index = edges.len();
                    edges.push((i, j, rng.gen_range(0.001_f64..1.0)));
                    incident[i].push(index);
                    incident[j].push(index);
                }
            }
        }
        Self {
            vertex_count: config.vertex_count,
            edges,
            incident,
        }
    }

    /// Returns the number of generated edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl Graph for SyntheticGraph {
    type Vertex = usize;
    type Edge = usize;

    fn vertices(&self) -> Vec<usize> {
        (0..self.vertex_count).collect()
    }

    fn edges(&self) -> Vec<usize> {
        (0..self.edges.len()).collect()
    }

    fn endpoints(&self, edge: &usize) -> (usize, usize) {
        let (source, target, _) = self.edges[*edge];
        (source, target)
    }

    fn edge_weight(&self, edge: &usize) -> f64 {
        self.edges[*edge].2
    }

    fn incident_edges(&self, vertex: usize) -> Vec<usize> {
        self.incident[vertex].clone()
    }
}
