//! Trace recorder
//!
//! Traced twins of the five sort kernels: identical comparison and movement
//! logic, plus a [`StepRecord`] emitted at each algorithm checkpoint. The
//! final traced state is always identical to the untraced kernel's output;
//! the step sequence only adds observational information.
//!
//! ## Checkpoints
//!
//! - Insertion: after each outer pass — `"Pass {i}"`
//! - Shell: after each inner placement — `"Gap {gap}"`
//! - Merge: after each subrange merge — `"Merge {l}-{r}"`
//! - Quick: after each partition, before recursing — `"Pivot {p}"`
//! - Heap: after the initial build — `"Build Heap"` — then `"Extract"` after
//!   each max-extraction and re-heapify
//!
//! The recorder places no limit on sequence length or step count; callers
//! wanting a human-readable trace truncate the input themselves (the
//! reference front-end uses an 8-element prefix).

use crate::kernels::{merge, partition, sift_down, Algorithm};
use serde::{Deserialize, Serialize};

/// A labeled snapshot of the sequence at one algorithm checkpoint
///
/// The snapshot is a deep copy taken at the instant of recording: later
/// mutation of the live sequence never changes a previously emitted record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    label: String,
    snapshot: Vec<f64>,
}

impl StepRecord {
    /// Create a record, copying the current sequence state
    #[must_use]
    pub fn new(label: impl Into<String>, snapshot: &[f64]) -> Self {
        Self {
            label: label.into(),
            snapshot: snapshot.to_vec(),
        }
    }

    /// Checkpoint label, e.g. `"Pivot 2"`
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Sequence state at the checkpoint
    #[must_use]
    pub fn snapshot(&self) -> &[f64] {
        &self.snapshot
    }
}

/// Ordered sink for step records during one traced run
#[derive(Debug, Default)]
struct Tracer {
    steps: Vec<StepRecord>,
}

impl Tracer {
    fn record(&mut self, label: impl Into<String>, snapshot: &[f64]) {
        self.steps.push(StepRecord::new(label, snapshot));
    }
}

/// Sort a copy of `values` with the selected algorithm, recording a snapshot
/// at each checkpoint
///
/// Returns the sorted sequence together with the ordered step records. The
/// caller's slice is never mutated.
///
/// # Example
/// ```
/// use sortbench::trace::trace_sort;
/// use sortbench::kernels::Algorithm;
///
/// let (sorted, steps) = trace_sort(&[5.0, 3.0, 8.0, 1.0], Algorithm::Quick);
/// assert_eq!(sorted, vec![1.0, 3.0, 5.0, 8.0]);
/// assert_eq!(steps[0].label(), "Pivot 0");
/// ```
#[must_use]
pub fn trace_sort(values: &[f64], algorithm: Algorithm) -> (Vec<f64>, Vec<StepRecord>) {
    let mut work = values.to_vec();
    let mut tracer = Tracer::default();
    match algorithm {
        Algorithm::Insertion => insertion_sort_traced(&mut work, &mut tracer),
        Algorithm::Shell => shell_sort_traced(&mut work, &mut tracer),
        Algorithm::Merge => {
            if work.len() > 1 {
                let hi = work.len() - 1;
                merge_sort_traced(&mut work, 0, hi, &mut tracer);
            }
        }
        Algorithm::Quick => {
            if work.len() > 1 {
                let hi = work.len() - 1;
                quick_sort_traced(&mut work, 0, hi, &mut tracer);
            }
        }
        Algorithm::Heap => heap_sort_traced(&mut work, &mut tracer),
    }
    (work, tracer.steps)
}

fn insertion_sort_traced(a: &mut [f64], tracer: &mut Tracer) {
    for i in 1..a.len() {
        let key = a[i];
        let mut j = i;
        while j > 0 && a[j - 1] > key {
            a[j] = a[j - 1];
            j -= 1;
        }
        a[j] = key;
        tracer.record(format!("Pass {i}"), a);
    }
}

fn shell_sort_traced(a: &mut [f64], tracer: &mut Tracer) {
    let mut gap = a.len() / 2;
    while gap > 0 {
        for i in gap..a.len() {
            let temp = a[i];
            let mut j = i;
            while j >= gap && a[j - gap] > temp {
                a[j] = a[j - gap];
                j -= gap;
            }
            a[j] = temp;
            tracer.record(format!("Gap {gap}"), a);
        }
        gap /= 2;
    }
}

fn merge_sort_traced(a: &mut [f64], l: usize, r: usize, tracer: &mut Tracer) {
    if l < r {
        let m = (l + r) / 2;
        merge_sort_traced(a, l, m, tracer);
        merge_sort_traced(a, m + 1, r, tracer);
        merge(a, l, m, r);
        tracer.record(format!("Merge {l}-{r}"), a);
    }
}

fn quick_sort_traced(a: &mut [f64], lo: usize, hi: usize, tracer: &mut Tracer) {
    if lo < hi {
        let p = partition(a, lo, hi);
        tracer.record(format!("Pivot {p}"), a);
        if p > lo {
            quick_sort_traced(a, lo, p - 1, tracer);
        }
        if p + 1 < hi {
            quick_sort_traced(a, p + 1, hi, tracer);
        }
    }
}

fn heap_sort_traced(a: &mut [f64], tracer: &mut Tracer) {
    let n = a.len();
    for i in (0..n / 2).rev() {
        sift_down(a, n, i);
    }
    // The build phase completes (vacuously for n < 2), so the record is
    // emitted regardless of length
    tracer.record("Build Heap", a);
    for end in (1..n).rev() {
        a.swap(0, end);
        sift_down(a, end, 0);
        tracer.record("Extract", a);
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::kernels::sort;

    #[test]
    fn quick_trace_concrete_scenario() {
        // [5,3,8,1]: pivot 1.0 is the minimum, so the first partition moves
        // it to index 0
        let (sorted, steps) = trace_sort(&[5.0, 3.0, 8.0, 1.0], Algorithm::Quick);
        assert_eq!(sorted, vec![1.0, 3.0, 5.0, 8.0]);
        assert_eq!(steps[0].label(), "Pivot 0");
        assert_eq!(steps[0].snapshot(), &[1.0, 3.0, 8.0, 5.0]);
        assert_eq!(steps[1].label(), "Pivot 2");
        assert_eq!(steps[1].snapshot(), &[1.0, 3.0, 5.0, 8.0]);
    }

    #[test]
    fn insertion_trace_labels_passes() {
        let (sorted, steps) = trace_sort(&[3.0, 1.0, 2.0], Algorithm::Insertion);
        assert_eq!(sorted, vec![1.0, 2.0, 3.0]);
        let labels: Vec<&str> = steps.iter().map(StepRecord::label).collect();
        assert_eq!(labels, vec!["Pass 1", "Pass 2"]);
        assert_eq!(steps[0].snapshot(), &[1.0, 3.0, 2.0]);
    }

    #[test]
    fn shell_trace_labels_gaps() {
        let (_, steps) = trace_sort(&[4.0, 3.0, 2.0, 1.0], Algorithm::Shell);
        // n=4: gap 2 places two elements, then gap 1 places three
        let labels: Vec<&str> = steps.iter().map(StepRecord::label).collect();
        assert_eq!(labels, vec!["Gap 2", "Gap 2", "Gap 1", "Gap 1", "Gap 1"]);
    }

    #[test]
    fn merge_trace_labels_ranges() {
        let (sorted, steps) = trace_sort(&[4.0, 3.0, 2.0, 1.0], Algorithm::Merge);
        assert_eq!(sorted, vec![1.0, 2.0, 3.0, 4.0]);
        let labels: Vec<&str> = steps.iter().map(StepRecord::label).collect();
        assert_eq!(labels, vec!["Merge 0-1", "Merge 2-3", "Merge 0-3"]);
    }

    #[test]
    fn heap_trace_build_then_extracts() {
        let (sorted, steps) = trace_sort(&[3.0, 1.0, 2.0], Algorithm::Heap);
        assert_eq!(sorted, vec![1.0, 2.0, 3.0]);
        let labels: Vec<&str> = steps.iter().map(StepRecord::label).collect();
        assert_eq!(labels, vec!["Build Heap", "Extract", "Extract"]);
    }

    #[test]
    fn heap_trace_emits_build_for_empty_input() {
        let (sorted, steps) = trace_sort(&[], Algorithm::Heap);
        assert!(sorted.is_empty());
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].label(), "Build Heap");
    }

    #[test]
    fn empty_traces_for_trivial_inputs() {
        for algorithm in [
            Algorithm::Insertion,
            Algorithm::Shell,
            Algorithm::Merge,
            Algorithm::Quick,
        ] {
            let (sorted, steps) = trace_sort(&[7.0], algorithm);
            assert_eq!(sorted, vec![7.0]);
            assert!(steps.is_empty(), "{algorithm} traced a singleton");
        }
    }

    #[test]
    fn final_snapshot_matches_untraced_sort() {
        let input = [9.5, -2.0, 4.25, 4.25, 0.0, 17.0, -8.5];
        for algorithm in Algorithm::ALL {
            let (sorted, steps) = trace_sort(&input, algorithm);
            let mut expected = input.to_vec();
            sort(&mut expected, algorithm);
            assert_eq!(sorted, expected, "{algorithm} traced result diverged");
            let last = steps.last().expect("non-trivial input yields steps");
            assert_eq!(
                last.snapshot(),
                expected.as_slice(),
                "{algorithm} last snapshot diverged"
            );
        }
    }

    #[test]
    fn snapshots_are_isolated_from_later_mutation() {
        let mut input = vec![5.0, 3.0, 8.0, 1.0];
        let (_, steps) = trace_sort(&input, Algorithm::Quick);
        let first = steps[0].clone();
        input.fill(0.0);
        assert_eq!(steps[0], first);
        assert_eq!(steps[0].snapshot(), &[1.0, 3.0, 8.0, 5.0]);
    }

    #[test]
    fn step_record_serde_round_trip() {
        let record = StepRecord::new("Pass 1", &[1.0, 2.0]);
        let json = serde_json::to_string(&record).unwrap();
        let back: StepRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
