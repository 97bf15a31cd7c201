//! morphvec Test Infrastructure
//!
//! This crate holds the integration tests for morphvec:
//!
//! - Scenarios: hand-built region graphs with known vectors
//! - Properties: proptest over random connected and disconnected graphs
//! - **Determinism**: repeated vectorization must be bit-identical
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p morphvec-tests
//!
//! # With traversal logging
//! RUST_LOG=morphvec_core=trace cargo test -p morphvec-tests -- --nocapture
//! ```

pub mod determinism;
pub mod fixtures;

// Re-export commonly used items
pub use determinism::{assert_deterministic, verify_determinism, DeterminismResult, DiffInfo};

/// Installs a `tracing` subscriber driven by `RUST_LOG`.
///
/// Safe to call from every test; only the first call installs anything.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
