//! Sort kernels
//!
//! Five classic comparison sorts over a mutable `f64` slice, each in-place
//! (merge sort uses O(n) scratch during the merge step). All kernels produce
//! an ascending permutation of their input.
//!
//! ## Preconditions
//!
//! Values must be totally ordered: no NaN entries. [`crate::extract`] rejects
//! non-finite fields before data reaches a kernel; callers feeding the
//! kernels directly carry the same obligation.
//!
//! ## Complexity
//!
//! | Kernel    | Average    | Worst      | Notes                              |
//! |-----------|------------|------------|------------------------------------|
//! | Insertion | O(n²)      | O(n²)      | O(n) on already-sorted input       |
//! | Shell     | O(n^1.25)+ | O(n²)      | halving gap sequence               |
//! | Merge     | O(n log n) | O(n log n) | stable                             |
//! | Quick     | O(n log n) | O(n²)      | Lomuto, last-element pivot         |
//! | Heap      | O(n log n) | O(n log n) |                                    |
//!
//! The quicksort worst case on sorted and reverse-sorted input is a known,
//! intentional property of the last-element pivot choice, kept so measured
//! timings reflect the classical algorithm.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sorting algorithm identifier
///
/// A closed set: every engine operation that accepts an identifier handles
/// exactly these five variants. Variant order is the fixed evaluation order
/// used by the benchmark harness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Algorithm {
    /// Adjacent-shift insertion sort
    Insertion,
    /// Shell sort with halving gap sequence
    Shell,
    /// Recursive stable merge sort
    Merge,
    /// Quicksort with Lomuto partitioning
    Quick,
    /// Heapsort with bottom-up max-heap construction
    Heap,
}

impl Algorithm {
    /// All algorithms in the fixed evaluation order
    pub const ALL: [Self; 5] = [
        Self::Insertion,
        Self::Shell,
        Self::Merge,
        Self::Quick,
        Self::Heap,
    ];

    /// Short display name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Insertion => "Insertion",
            Self::Shell => "Shell",
            Self::Merge => "Merge",
            Self::Quick => "Quick",
            Self::Heap => "Heap",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sort a slice ascending, in place, with the selected algorithm
///
/// Empty and single-element slices are no-ops. Duplicates are handled by
/// every kernel without special casing.
///
/// # Example
/// ```
/// use sortbench::kernels::{sort, Algorithm};
///
/// let mut values = vec![5.0, 3.0, 8.0, 1.0];
/// sort(&mut values, Algorithm::Quick);
/// assert_eq!(values, vec![1.0, 3.0, 5.0, 8.0]);
/// ```
pub fn sort(values: &mut [f64], algorithm: Algorithm) {
    match algorithm {
        Algorithm::Insertion => insertion_sort(values),
        Algorithm::Shell => shell_sort(values),
        Algorithm::Merge => merge_sort(values),
        Algorithm::Quick => quick_sort(values),
        Algorithm::Heap => heap_sort(values),
    }
}

/// Insertion sort: shift strictly-greater elements right, insert the key
pub(crate) fn insertion_sort(a: &mut [f64]) {
    for i in 1..a.len() {
        let key = a[i];
        let mut j = i;
        while j > 0 && a[j - 1] > key {
            a[j] = a[j - 1];
            j -= 1;
        }
        a[j] = key;
    }
}

/// Shell sort: gapped insertion over gaps n/2, n/4, ..., 1
pub(crate) fn shell_sort(a: &mut [f64]) {
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
        }
        gap /= 2;
    }
}

/// Merge sort: recursive midpoint split, stable two-pointer merge
pub(crate) fn merge_sort(a: &mut [f64]) {
    if a.len() > 1 {
        merge_sort_range(a, 0, a.len() - 1);
    }
}

/// Sort the inclusive range `[l, r]`
pub(crate) fn merge_sort_range(a: &mut [f64], l: usize, r: usize) {
    if l < r {
        let m = (l + r) / 2;
        merge_sort_range(a, l, m);
        merge_sort_range(a, m + 1, r);
        merge(a, l, m, r);
    }
}

/// Merge two sorted halves `[l, m]` and `[m+1, r]`
///
/// Stable: `<=` takes from the left half on ties, preserving the relative
/// order of equal elements.
pub(crate) fn merge(a: &mut [f64], l: usize, m: usize, r: usize) {
    let left = a[l..=m].to_vec();
    let right = a[m + 1..=r].to_vec();
    let mut i = 0;
    let mut j = 0;
    let mut k = l;
    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            a[k] = left[i];
            i += 1;
        } else {
            a[k] = right[j];
            j += 1;
        }
        k += 1;
    }
    while i < left.len() {
        a[k] = left[i];
        i += 1;
        k += 1;
    }
    while j < right.len() {
        a[k] = right[j];
        j += 1;
        k += 1;
    }
}

/// Quicksort with Lomuto partitioning (last element as pivot)
pub(crate) fn quick_sort(a: &mut [f64]) {
    if a.len() > 1 {
        quick_sort_range(a, 0, a.len() - 1);
    }
}

/// Sort the inclusive range `[lo, hi]`
pub(crate) fn quick_sort_range(a: &mut [f64], lo: usize, hi: usize) {
    if lo < hi {
        let p = partition(a, lo, hi);
        if p > lo {
            quick_sort_range(a, lo, p - 1);
        }
        if p + 1 < hi {
            quick_sort_range(a, p + 1, hi);
        }
    }
}

/// Lomuto partition: `a[hi]` is the pivot, elements `< pivot` move left of
/// the running boundary, the pivot is swapped into its final slot
///
/// Returns the pivot's final index.
pub(crate) fn partition(a: &mut [f64], lo: usize, hi: usize) -> usize {
    let pivot = a[hi];
    let mut boundary = lo;
    for j in lo..hi {
        if a[j] < pivot {
            a.swap(boundary, j);
            boundary += 1;
        }
    }
    a.swap(boundary, hi);
    boundary
}

/// Heapsort: bottom-up max-heap build, then repeated root extraction
pub(crate) fn heap_sort(a: &mut [f64]) {
    let n = a.len();
    build_heap(a);
    for end in (1..n).rev() {
        a.swap(0, end);
        sift_down(a, end, 0);
    }
}

/// Build a max-heap by sifting down every internal node, last first
pub(crate) fn build_heap(a: &mut [f64]) {
    let n = a.len();
    for i in (0..n / 2).rev() {
        sift_down(a, n, i);
    }
}

/// Restore the max-heap property for the subtree rooted at `i`, within the
/// heap prefix of length `n`
pub(crate) fn sift_down(a: &mut [f64], n: usize, mut i: usize) {
    loop {
        let left = 2 * i + 1;
        let right = 2 * i + 2;
        let mut largest = i;
        if left < n && a[left] > a[largest] {
            largest = left;
        }
        if right < n && a[right] > a[largest] {
            largest = right;
        }
        if largest == i {
            break;
        }
        a.swap(i, largest);
        i = largest;
    }
}
