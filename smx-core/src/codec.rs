//! Line-oriented text codec for sparse matrices
//!
//! The on-disk form is two header lines followed by one line per
//! non-zero entry:
//!
//! ```text
//! rows=<non-negative integer>
//! cols=<non-negative integer>
//! (<row>, <col>, <value>)
//! ```
//!
//! Blank lines are ignored anywhere. Any other deviation from the
//! grammar is a fatal decode error carrying the offending line number,
//! never a silently skipped line.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Write;

use crate::error::{MatrixError, Result};
use crate::matrix::CooMatrix;
use crate::traits::MatrixElement;

/// Decode a matrix from its text form
///
/// The first two non-blank lines must be exactly `rows=<n>` then
/// `cols=<n>`, in that order. Each further non-blank line must match
/// `(<row>, <col>, <value>)` with a literal `", "` separator and a
/// coordinate inside the declared dimensions. Duplicate coordinates
/// are allowed, the last occurrence wins; explicit zero values are
/// accepted and discarded by the store.
pub fn decode<T: MatrixElement>(text: &str) -> Result<CooMatrix<T>> {
    let lines: Vec<(usize, &str)> = text
        .lines()
        .enumerate()
        .map(|(index, raw)| (index + 1, raw.trim()))
        .filter(|(_, line)| !line.is_empty())
        .collect();
    let end_line = text.lines().count() + 1;
    let mut iter = lines.into_iter();

    let rows = match iter.next() {
        Some((line, content)) => parse_dimension(content, "rows", line)?,
        None => return Err(MatrixError::MalformedHeader { line: end_line }),
    };
    let cols = match iter.next() {
        Some((line, content)) => parse_dimension(content, "cols", line)?,
        None => return Err(MatrixError::MalformedHeader { line: end_line }),
    };

    let mut matrix = CooMatrix::new(rows, cols);
    for (line, content) in iter {
        let (row, col, value) = parse_entry::<T>(content, line)?;
        if row >= rows || col >= cols {
            return Err(MatrixError::EntryOutOfBounds { line, row, col });
        }
        matrix.set(row, col, value);
    }
    Ok(matrix)
}

/// Encode a matrix to its text form
///
/// Emits the header lines followed by one line per stored entry in the
/// store's iteration order. The order is not stable across calls, but
/// any encoding decodes back to a value-equal matrix.
pub fn encode<T: MatrixElement>(matrix: &CooMatrix<T>) -> String {
    let mut out = String::new();
    // fmt::Write to a String cannot fail
    let _ = writeln!(out, "rows={}", matrix.rows());
    let _ = writeln!(out, "cols={}", matrix.cols());
    for (row, col, value) in matrix.iter() {
        let _ = writeln!(out, "({row}, {col}, {value})");
    }
    out
}

/// Parse a `<key>=<n>` header line
fn parse_dimension(line: &str, key: &str, line_number: usize) -> Result<usize> {
    line.strip_prefix(key)
        .and_then(|rest| rest.strip_prefix('='))
        .and_then(|digits| digits.parse().ok())
        .ok_or(MatrixError::MalformedHeader { line: line_number })
}

/// Parse a `(<row>, <col>, <value>)` entry line
fn parse_entry<T: MatrixElement>(line: &str, line_number: usize) -> Result<(usize, usize, T)> {
    let malformed = MatrixError::MalformedEntry { line: line_number };

    let body = line
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or(malformed)?;

    let mut fields = body.split(", ");
    let row = fields
        .next()
        .and_then(|field| field.parse().ok())
        .ok_or(malformed)?;
    let col = fields
        .next()
        .and_then(|field| field.parse().ok())
        .ok_or(malformed)?;
    let value = fields
        .next()
        .and_then(T::from_text)
        .ok_or(malformed)?;
    if fields.next().is_some() {
        return Err(malformed);
    }
    Ok((row, col, value))
}
