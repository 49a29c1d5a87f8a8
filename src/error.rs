//! Error types for sortbench
//!
//! All failures are reported synchronously to the immediate caller as typed
//! values; nothing is retried, logged-and-ignored, or escalated to a panic.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Sortbench error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A field in the selected column could not be parsed as a finite number
    #[error("row {row}, column {column}: {value:?} is not a finite number")]
    NotNumeric {
        /// Zero-based row index of the offending field
        row: usize,
        /// Zero-based column index that was being extracted
        column: usize,
        /// The raw field text that failed to parse
        value: String,
    },

    /// The selected column index is out of range for a row
    #[error("column index {index} out of range (row {row} has {width} columns)")]
    InvalidColumn {
        /// The requested column index
        index: usize,
        /// Zero-based row index where the bound was violated
        row: usize,
        /// Number of columns in that row
        width: usize,
    },
}
