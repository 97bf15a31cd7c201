//! Determinism verification for vectorization.
//!
//! Embeddings are only comparable across images if the same graph always
//! produces the same vector, bit for bit. These helpers run a vectorization
//! several times and report the first element that differs.

use std::fmt;

use morphvec_core::vector_fingerprint;

/// Result of a determinism verification.
#[derive(Debug, Clone)]
pub struct DeterminismResult {
    /// Whether all runs produced identical output.
    pub is_deterministic: bool,
    /// Number of runs performed.
    pub runs: usize,
    /// Length of the reference vector.
    pub len: usize,
    /// Fingerprint of the reference vector.
    pub fingerprint: String,
    /// If non-deterministic, information about the first difference found.
    pub diff_info: Option<DiffInfo>,
}

/// The first differing element between two runs.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffInfo {
    /// Element index; equals the shorter length when only lengths differ.
    pub index: usize,
    /// Value from the first run, if it has one at `index`.
    pub expected: Option<f64>,
    /// Value from the differing run, if it has one at `index`.
    pub actual: Option<f64>,
    /// Which run (0-indexed) produced the differing output.
    pub run_index: usize,
}

impl fmt::Display for DiffInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Difference at element {}: expected {:?}, got {:?} (run {})",
            self.index, self.expected, self.actual, self.run_index
        )
    }
}

impl DeterminismResult {
    /// Panic with a detailed message if not deterministic.
    pub fn assert_deterministic(&self) {
        if let Some(diff) = &self.diff_info {
            panic!(
                "Non-deterministic output detected!\n\
                 Runs: {}\n\
                 Length: {}\n\
                 Fingerprint: {}\n\
                 {}",
                self.runs, self.len, self.fingerprint, diff
            );
        }
    }
}

/// Run vectorization N times and verify all outputs are bit-identical.
///
/// # Arguments
///
/// * `vectorize_fn` - Produces a vector on each call
/// * `runs` - Number of runs (minimum 2)
pub fn verify_determinism<F>(vectorize_fn: F, runs: usize) -> DeterminismResult
where
    F: Fn() -> Vec<f64>,
{
    assert!(runs >= 2, "Must run at least 2 times to verify determinism");

    let reference = vectorize_fn();
    let fingerprint = vector_fingerprint(&reference);

    for run_index in 1..runs {
        let output = vectorize_fn();
        if let Some(diff) = find_first_difference(&reference, &output, run_index) {
            return DeterminismResult {
                is_deterministic: false,
                runs,
                len: reference.len(),
                fingerprint,
                diff_info: Some(diff),
            };
        }
    }

    DeterminismResult {
        is_deterministic: true,
        runs,
        len: reference.len(),
        fingerprint,
        diff_info: None,
    }
}

/// Verify determinism and panic on failure.
pub fn assert_deterministic<F>(vectorize_fn: F, runs: usize)
where
    F: Fn() -> Vec<f64>,
{
    verify_determinism(vectorize_fn, runs).assert_deterministic();
}

/// Find the first element whose bits differ, or the first missing element.
pub(crate) fn find_first_difference(
    expected: &[f64],
    actual: &[f64],
    run_index: usize,
) -> Option<DiffInfo> {
    for (index, (&e, &a)) in expected.iter().zip(actual.iter()).enumerate() {
        if e.to_bits() != a.to_bits() {
            return Some(DiffInfo {
                index,
                expected: Some(e),
                actual: Some(a),
                run_index,
            });
        }
    }

    if expected.len() != actual.len() {
        let index = expected.len().min(actual.len());
        return Some(DiffInfo {
            index,
            expected: expected.get(index).copied(),
            actual: actual.get(index).copied(),
            run_index,
        });
    }

    None
}
