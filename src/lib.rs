//! # Sortbench: sorting-algorithm comparison and trace engine
//!
//! Sortbench runs five classic comparison sorts (insertion, shell, merge,
//! quick, heap) against a numeric sequence, compares their wall-clock
//! durations, and can replay the intermediate array states of any one
//! algorithm as an ordered list of labeled snapshots.
//!
//! The engine is a library boundary only: a presentation layer (GUI, CLI,
//! test harness) supplies rows of text fields and consumes timing results
//! and step records. File formats, tables, and charts live on the caller's
//! side.
//!
//! ## Design
//!
//! - One shared kernel per algorithm, dispatched over [`kernels::Algorithm`],
//!   rather than per-front-end copies of the sort logic
//! - In-place mutation inside the kernels, explicit deep copies at the
//!   benchmark and trace boundaries so independent runs never alias
//! - Single-threaded, synchronous, sequential benchmark runs so shared-CPU
//!   contention cannot skew the comparison
//! - The engine holds no state between calls; every result is a fresh value
//!   owned by the caller
//!
//! ## Example
//!
//! ```rust
//! use sortbench::{compare_all, extract_column, trace_sort, Algorithm};
//!
//! let rows = vec![
//!     vec!["5".to_string()],
//!     vec!["3".to_string()],
//!     vec!["8".to_string()],
//!     vec!["1".to_string()],
//! ];
//! let values = extract_column(&rows, 0, None)?;
//!
//! let result = compare_all(&values, &Algorithm::ALL);
//! assert_eq!(result.entries().len(), 5);
//!
//! let (sorted, steps) = trace_sort(&values, Algorithm::Quick);
//! assert_eq!(sorted, vec![1.0, 3.0, 5.0, 8.0]);
//! assert_eq!(steps[0].label(), "Pivot 0");
//! # Ok::<(), sortbench::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod bench;
pub mod error;
pub mod extract;
pub mod kernels;
pub mod trace;

pub use bench::{compare_all, TimingEntry, TimingResult};
pub use error::{Error, Result};
pub use extract::extract_column;
pub use kernels::{sort, Algorithm};
pub use trace::{trace_sort, StepRecord};
