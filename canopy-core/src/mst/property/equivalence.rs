//! Property 1: cross-strategy equivalence.
//!
//! For any generated graph, the sorted-edge and cut-growth strategies must
//! produce forests with the same total weight, the same edge count, and the
//! same component count. This is the central correctness contract: the two
//! algorithms share no code beyond edge validation, so agreement across
//! arbitrary inputs is strong evidence both are minimum.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use super::helpers::{both_forests, expect_close};
use super::types::GraphFixture;

/// Runs the cross-strategy equivalence property for the given fixture.
pub(super) fn run_cross_strategy_equivalence(fixture: &GraphFixture) -> TestCaseResult {
    let (kruskal, prim) = both_forests(fixture)?;

    expect_close(
        kruskal.total_weight(),
        prim.total_weight(),
        "total weight mismatch",
        fixture,
    )?;

    if kruskal.edge_count() != prim.edge_count() {
        return Err(TestCaseError::fail(format!(
            "edge count mismatch: sorted-edge={}, cut-growth={} \
             (distribution={:?}, nodes={}, edges={})",
            kruskal.edge_count(),
            prim.edge_count(),
            fixture.distribution,
            fixture.node_count,
            fixture.edges.len(),
        )));
    }

    if kruskal.component_count() != prim.component_count() {
        return Err(TestCaseError::fail(format!(
            "component count mismatch: sorted-edge={}, cut-growth={} \
             (distribution={:?}, nodes={}, edges={})",
            kruskal.component_count(),
            prim.component_count(),
            fixture.distribution,
            fixture.node_count,
            fixture.edges.len(),
        )));
    }

    Ok(())
}
