//! Benchmark harness
//!
//! Runs each requested kernel against an independent deep copy of the same
//! input, sequentially and in request order on the calling thread, and
//! measures wall-clock time around the sort call only. Sequential execution
//! is a correctness requirement: concurrent runs would contend for the CPU
//! and skew the comparison.

use crate::kernels::{sort, Algorithm};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::time::Instant;

/// One measured run: algorithm and elapsed wall-clock milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimingEntry {
    algorithm: Algorithm,
    millis: f64,
}

impl TimingEntry {
    /// The algorithm that was measured
    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Elapsed wall-clock time in milliseconds (non-negative)
    #[must_use]
    pub const fn millis(&self) -> f64 {
        self.millis
    }
}

/// Result of one benchmark run: per-algorithm timings plus derived
/// fastest/slowest labels
///
/// Entries preserve request order. Fastest and slowest are decided by a
/// single linear scan with strict `<` / `>` comparisons, so ties resolve to
/// the algorithm evaluated first. The value is immutable and owned by the
/// caller; the harness keeps no state between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingResult {
    entries: Vec<TimingEntry>,
    fastest: Option<Algorithm>,
    slowest: Option<Algorithm>,
}

impl TimingResult {
    /// Measured entries, one per requested algorithm, in request order
    #[must_use]
    pub fn entries(&self) -> &[TimingEntry] {
        &self.entries
    }

    /// Elapsed milliseconds for one algorithm, if it was requested
    #[must_use]
    pub fn millis_for(&self, algorithm: Algorithm) -> Option<f64> {
        self.entries
            .iter()
            .find(|e| e.algorithm == algorithm)
            .map(TimingEntry::millis)
    }

    /// Algorithm with the minimum measured time (`None` for an empty run)
    #[must_use]
    pub const fn fastest(&self) -> Option<Algorithm> {
        self.fastest
    }

    /// Algorithm with the maximum measured time (`None` for an empty run)
    #[must_use]
    pub const fn slowest(&self) -> Option<Algorithm> {
        self.slowest
    }

    /// Render the plain-text performance report
    ///
    /// One `{algo} Sort: {ms:.3} ms` line per entry, then a `BEST ALGORITHM`
    /// summary when at least one algorithm ran.
    #[must_use]
    pub fn report(&self) -> String {
        let mut out = String::from("PERFORMANCE REPORT\n");
        for entry in &self.entries {
            let _ = writeln!(out, "{} Sort: {:.3} ms", entry.algorithm, entry.millis);
        }
        if let Some(best) = self.fastest {
            // fastest is always present in entries
            let millis = self.millis_for(best).unwrap_or_default();
            let _ = write!(out, "\nBEST ALGORITHM: {best} SORT in {millis:.3} ms");
        }
        out
    }
}

/// Benchmark every requested algorithm against independent copies of `values`
///
/// Each run sorts its own deep copy, so no kernel's in-place mutation can
/// affect another's input; the copy itself is taken outside the measured
/// window. Algorithms are never reordered or dropped, and an empty input is
/// valid (every kernel no-ops, times record whatever near-zero duration was
/// measured).
///
/// # Example
/// ```
/// use sortbench::bench::compare_all;
/// use sortbench::kernels::Algorithm;
///
/// let result = compare_all(&[5.0, 3.0, 8.0, 1.0, 9.0, 2.0], &Algorithm::ALL);
/// assert_eq!(result.entries().len(), 5);
/// assert!(result.fastest().is_some());
/// ```
#[must_use]
pub fn compare_all(values: &[f64], algorithms: &[Algorithm]) -> TimingResult {
    let mut entries = Vec::with_capacity(algorithms.len());
    let mut fastest: Option<(Algorithm, f64)> = None;
    let mut slowest: Option<(Algorithm, f64)> = None;

    for &algorithm in algorithms {
        let mut copy = values.to_vec();
        let start = Instant::now();
        sort(&mut copy, algorithm);
        let millis = start.elapsed().as_secs_f64() * 1_000.0;
        tracing::debug!(%algorithm, millis, len = values.len(), "measured sort");

        if fastest.map_or(true, |(_, best)| millis < best) {
            fastest = Some((algorithm, millis));
        }
        if slowest.map_or(true, |(_, worst)| millis > worst) {
            slowest = Some((algorithm, millis));
        }
        entries.push(TimingEntry { algorithm, millis });
    }

    TimingResult {
        entries,
        fastest: fastest.map(|(a, _)| a),
        slowest: slowest.map(|(a, _)| a),
    }
}
