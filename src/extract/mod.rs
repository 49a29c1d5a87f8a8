//! Numeric extraction
//!
//! Converts one column of caller-supplied tabular text data into a numeric
//! sequence. Extraction is strict: the first field that is not a finite
//! number aborts the call with full row/column context, and no partial
//! sequence is ever returned. The caller owns the rows; the engine returns a
//! fresh `Vec<f64>` and retains nothing.

use crate::error::{Error, Result};

/// Extract `rows[..][column_index]` as a numeric sequence
///
/// Values are returned in row order. When `limit` is given, only that many
/// leading rows are read (the reference front-end uses `Some(8)` to keep
/// step traces readable); the bounds and parse checks apply only to the rows
/// actually read.
///
/// NaN and infinite fields are rejected even though they parse as `f64`:
/// the sort kernels require totally ordered values.
///
/// # Errors
/// Returns error if:
/// - `column_index` is out of range for a row ([`Error::InvalidColumn`])
/// - a field does not parse as a finite number ([`Error::NotNumeric`])
///
/// # Example
/// ```
/// use sortbench::extract::extract_column;
///
/// let rows = vec![
///     vec!["a".to_string(), "5.5".to_string()],
///     vec!["b".to_string(), "2".to_string()],
/// ];
/// let values = extract_column(&rows, 1, None)?;
/// assert_eq!(values, vec![5.5, 2.0]);
/// # Ok::<(), sortbench::Error>(())
/// ```
pub fn extract_column(
    rows: &[Vec<String>],
    column_index: usize,
    limit: Option<usize>,
) -> Result<Vec<f64>> {
    let take = limit.unwrap_or(rows.len()).min(rows.len());
    let mut values = Vec::with_capacity(take);

    for (row, fields) in rows.iter().take(take).enumerate() {
        if column_index >= fields.len() {
            return Err(Error::InvalidColumn {
                index: column_index,
                row,
                width: fields.len(),
            });
        }
        let field = fields[column_index].trim();
        let parsed: f64 = field.parse().map_err(|_| Error::NotNumeric {
            row,
            column: column_index,
            value: field.to_string(),
        })?;
        if !parsed.is_finite() {
            return Err(Error::NotNumeric {
                row,
                column: column_index,
                value: field.to_string(),
            });
        }
        values.push(parsed);
    }

    tracing::debug!(rows = values.len(), column = column_index, "extracted column");
    Ok(values)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
        data.iter()
            .map(|r| r.iter().map(ToString::to_string).collect())
            .collect()
    }

    #[test]
    fn extracts_in_row_order() {
        let rows = rows(&[&["x", "5"], &["y", "3.25"], &["z", "-8"]]);
        let values = extract_column(&rows, 1, None).unwrap();
        assert_eq!(values, vec![5.0, 3.25, -8.0]);
    }

    #[test]
    fn limit_takes_a_prefix() {
        let rows = rows(&[&["1"], &["2"], &["3"], &["4"]]);
        let values = extract_column(&rows, 0, Some(2)).unwrap();
        assert_eq!(values, vec![1.0, 2.0]);
    }

    #[test]
    fn limit_beyond_row_count_reads_everything() {
        let rows = rows(&[&["1"], &["2"]]);
        let values = extract_column(&rows, 0, Some(10)).unwrap();
        assert_eq!(values, vec![1.0, 2.0]);
    }

    #[test]
    fn non_numeric_field_aborts_with_context() {
        let rows = rows(&[&["3"], &["x"]]);
        let err = extract_column(&rows, 0, None).unwrap_err();
        assert_eq!(
            err,
            Error::NotNumeric {
                row: 1,
                column: 0,
                value: "x".to_string(),
            }
        );
    }

    #[test]
    fn nan_and_infinity_are_rejected() {
        for bad in ["NaN", "inf", "-inf"] {
            let rows = rows(&[&[bad]]);
            let err = extract_column(&rows, 0, None).unwrap_err();
            assert!(
                matches!(err, Error::NotNumeric { row: 0, column: 0, .. }),
                "{bad} should be rejected, got {err:?}"
            );
        }
    }

    #[test]
    fn out_of_range_column_is_rejected() {
        let rows = rows(&[&["1", "2"], &["3"]]);
        let err = extract_column(&rows, 1, None).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidColumn {
                index: 1,
                row: 1,
                width: 1,
            }
        );
    }

    #[test]
    fn limit_can_skip_a_bad_row() {
        // The failing row is past the requested prefix, so it is never read
        let rows = rows(&[&["1"], &["oops"]]);
        let values = extract_column(&rows, 0, Some(1)).unwrap();
        assert_eq!(values, vec![1.0]);
    }

    #[test]
    fn empty_rows_yield_empty_sequence() {
        let values = extract_column(&[], 3, None).unwrap();
        assert!(values.is_empty());
    }

    #[test]
    fn whitespace_is_trimmed() {
        let rows = rows(&[&[" 4.5 "]]);
        let values = extract_column(&rows, 0, None).unwrap();
        assert_eq!(values, vec![4.5]);
    }
}
