//! Property-based conformance suite for the spanning-forest strategies.
//!
//! Verifies the two strategies against each other (the central
//! cross-equivalence contract), validates structural invariants
//! (acyclicity, edge count, self-loop exclusion), and checks invariance
//! under relabeling and self-loop injection as well as determinism across
//! repeated runs, over graph topologies with varied weight distributions.

mod equivalence;
