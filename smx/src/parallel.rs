//! Row-partitioned parallel multiplication
//!
//! Optional performance path over [`CooMatrix::mul`]: the left
//! operand's rows are split across rayon workers, each of which owns a
//! disjoint set of result rows, so workers never contend on the same
//! output coordinate. Both operands are read-only throughout. The
//! result is value-equal to the serial product, including overflow
//! reporting.

use hashbrown::HashMap;
use rayon::prelude::*;

use smx_core::{CooMatrix, MatrixElement, MatrixError};

/// Multiply two matrices, partitioning the left operand's rows across
/// rayon workers
pub fn multiply<T>(
    lhs: &CooMatrix<T>,
    rhs: &CooMatrix<T>,
) -> Result<CooMatrix<T>, MatrixError>
where
    T: MatrixElement + Send + Sync,
{
    if lhs.cols() != rhs.rows() {
        return Err(MatrixError::DimensionMismatch {
            lhs: (lhs.rows(), lhs.cols()),
            rhs: (rhs.rows(), rhs.cols()),
        });
    }

    let lhs_rows: Vec<(usize, Vec<(usize, T)>)> = group_by_row(lhs).into_iter().collect();
    let rhs_rows = group_by_row(rhs);

    // Each task computes one result row; rows are disjoint by
    // construction, so the merge below never overwrites.
    let computed: Result<Vec<(usize, HashMap<usize, T>)>, MatrixError> = lhs_rows
        .par_iter()
        .map(|(row, terms)| {
            let mut accumulator: HashMap<usize, T> = HashMap::new();
            for &(k, value) in terms {
                let Some(partners) = rhs_rows.get(&k) else {
                    continue;
                };
                for &(col, rhs_value) in partners {
                    let term = value
                        .checked_mul(rhs_value)
                        .ok_or(MatrixError::ValueOverflow)?;
                    let current = accumulator.get(&col).copied().unwrap_or(T::ZERO);
                    let sum = current.checked_add(term).ok_or(MatrixError::ValueOverflow)?;
                    accumulator.insert(col, sum);
                }
            }
            Ok((*row, accumulator))
        })
        .collect();

    let mut result = CooMatrix::new(lhs.rows(), rhs.cols());
    for (row, accumulator) in computed? {
        for (col, value) in accumulator {
            result.set(row, col, value);
        }
    }
    Ok(result)
}

/// Collect a matrix's entries grouped by row index
fn group_by_row<T: MatrixElement>(matrix: &CooMatrix<T>) -> HashMap<usize, Vec<(usize, T)>> {
    let mut groups: HashMap<usize, Vec<(usize, T)>> = HashMap::new();
    for (row, col, value) in matrix.iter() {
        groups.entry(row).or_default().push((col, value));
    }
    groups
}
