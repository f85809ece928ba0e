//! Coordinate-keyed sparse matrix storage
//!
//! A matrix is a pair of dimensions plus a map from (row, col) to a
//! non-zero value. Zero is represented by absence: the map never holds
//! an explicit zero, so density stays implicit and storage stays
//! proportional to the number of non-zero entries.

use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::traits::{MatrixElement, MatrixOperations, SparseMatrix};

/// Sparse matrix in coordinate (COO) form
///
/// Invariants:
/// - every stored key satisfies `row < rows` and `col < cols`
/// - no stored value equals `T::ZERO`
///
/// Both are maintained by [`CooMatrix::set`], the only mutation path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CooMatrix<T: MatrixElement> {
    rows: usize,
    cols: usize,
    entries: HashMap<(usize, usize), T>,
}

impl<T: MatrixElement> CooMatrix<T> {
    /// Create an empty matrix with the given dimensions
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            entries: HashMap::new(),
        }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of stored (non-zero) entries
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// Whether the matrix stores no entries at all
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the value at a coordinate, `T::ZERO` when absent
    ///
    /// Coordinates must lie inside the declared dimensions; that is the
    /// caller's contract and only checked in debug builds.
    pub fn get(&self, row: usize, col: usize) -> T {
        debug_assert!(row < self.rows && col < self.cols);
        self.entries
            .get(&(row, col))
            .copied()
            .unwrap_or(T::ZERO)
    }

    /// Set the value at a coordinate
    ///
    /// A zero value removes any existing entry (a no-op when absent),
    /// anything else inserts or overwrites. The store never holds a
    /// zero-valued entry after this call.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        debug_assert!(row < self.rows && col < self.cols);
        if value.is_zero() {
            self.entries.remove(&(row, col));
        } else {
            self.entries.insert((row, col), value);
        }
    }

    /// Iterate over stored entries as (row, col, value) triplets
    ///
    /// Iteration order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, T)> + '_ {
        self.entries
            .iter()
            .map(|(&(row, col), &value)| (row, col, value))
    }
}

impl<T: MatrixElement> SparseMatrix for CooMatrix<T> {
    type Element = T;

    fn get_element(&self, row: usize, col: usize) -> Option<T> {
        self.entries.get(&(row, col)).copied()
    }

    fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    fn nnz(&self) -> usize {
        self.entries.len()
    }
}

impl<T: MatrixElement> MatrixOperations for CooMatrix<T> {
    fn get_row(&self, row_index: usize) -> Vec<(usize, T)> {
        let mut pairs: Vec<(usize, T)> = self
            .iter()
            .filter(|&(row, _, _)| row == row_index)
            .map(|(_, col, value)| (col, value))
            .collect();
        pairs.sort_unstable_by_key(|&(col, _)| col);
        pairs
    }

    fn get_col(&self, col_index: usize) -> Vec<(usize, T)> {
        let mut pairs: Vec<(usize, T)> = self
            .iter()
            .filter(|&(_, col, _)| col == col_index)
            .map(|(row, _, value)| (row, value))
            .collect();
        pairs.sort_unstable_by_key(|&(row, _)| row);
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_get_absent_is_zero() {
        let matrix: CooMatrix<i64> = CooMatrix::new(3, 3);
        assert_eq!(matrix.get(0, 0), 0);
        assert_eq!(matrix.get(2, 2), 0);
        assert_eq!(matrix.nnz(), 0);
    }

    #[test]
    fn test_set_and_get() {
        let mut matrix = CooMatrix::new(2, 2);
        matrix.set(0, 1, 5i64);
        assert_eq!(matrix.get(0, 1), 5);
        assert_eq!(matrix.nnz(), 1);

        // overwrite
        matrix.set(0, 1, -3);
        assert_eq!(matrix.get(0, 1), -3);
        assert_eq!(matrix.nnz(), 1);
    }

    #[test]
    fn test_set_zero_removes_entry() {
        let mut matrix = CooMatrix::new(2, 2);
        matrix.set(1, 1, 7i32);
        assert_eq!(matrix.nnz(), 1);

        matrix.set(1, 1, 0);
        assert_eq!(matrix.get(1, 1), 0);
        assert_eq!(matrix.nnz(), 0);
        assert_eq!(matrix.get_element(1, 1), None);
    }

    #[test]
    fn test_set_zero_on_absent_is_noop() {
        let mut matrix: CooMatrix<i64> = CooMatrix::new(2, 2);
        matrix.set(0, 0, 0);
        assert_eq!(matrix.nnz(), 0);
        assert!(matrix.is_empty());
    }

    #[test]
    fn test_sparse_matrix_trait() {
        let mut matrix = CooMatrix::new(4, 5);
        matrix.set(3, 4, 9i64);

        assert_eq!(matrix.dimensions(), (4, 5));
        assert_eq!(SparseMatrix::nnz(&matrix), 1);
        assert_eq!(matrix.get_element(3, 4), Some(9));
        assert_eq!(matrix.get_element(0, 0), None);
    }

    #[test]
    fn test_get_row_and_col_ordering() {
        let mut matrix = CooMatrix::new(3, 3);
        matrix.set(1, 2, 3i32);
        matrix.set(1, 0, 1);
        matrix.set(0, 2, 7);
        matrix.set(2, 2, 8);

        assert_eq!(matrix.get_row(1), vec![(0, 1), (2, 3)]);
        assert_eq!(matrix.get_row(0), vec![(2, 7)]);
        assert_eq!(matrix.get_col(2), vec![(0, 7), (1, 3), (2, 8)]);
        assert_eq!(matrix.get_col(1), vec![]);
    }

    #[test]
    fn test_value_equality_ignores_insertion_order() {
        let mut a = CooMatrix::new(2, 2);
        a.set(0, 0, 1i64);
        a.set(1, 1, 2);

        let mut b = CooMatrix::new(2, 2);
        b.set(1, 1, 2i64);
        b.set(0, 0, 1);

        assert_eq!(a, b);
    }
}
