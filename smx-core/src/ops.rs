//! Arithmetic over sparse matrices
//!
//! All three operations are pure: operands are borrowed, the result is
//! a freshly allocated matrix, and only non-zero entries are ever
//! visited. Writing results through [`CooMatrix::set`] keeps the
//! zero-omission invariant intact when terms cancel.

use alloc::vec::Vec;
use hashbrown::HashMap;

use crate::error::{MatrixError, Result};
use crate::matrix::CooMatrix;
use crate::traits::MatrixElement;

/// Operation selector for binary matrix arithmetic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operation {
    /// Entry-wise sum
    Add,
    /// Entry-wise difference
    Subtract,
    /// Matrix product
    Multiply,
}

impl Operation {
    /// Apply this operation to a pair of matrices
    pub fn apply<T: MatrixElement>(
        self,
        lhs: &CooMatrix<T>,
        rhs: &CooMatrix<T>,
    ) -> Result<CooMatrix<T>> {
        match self {
            Operation::Add => lhs.add(rhs),
            Operation::Subtract => lhs.sub(rhs),
            Operation::Multiply => lhs.mul(rhs),
        }
    }
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Operation::Add => write!(f, "add"),
            Operation::Subtract => write!(f, "subtract"),
            Operation::Multiply => write!(f, "multiply"),
        }
    }
}

impl<T: MatrixElement> CooMatrix<T> {
    /// Entry-wise sum of two matrices of identical dimensions
    pub fn add(&self, other: &Self) -> Result<Self> {
        self.elementwise(other, T::checked_add)
    }

    /// Entry-wise difference of two matrices of identical dimensions
    pub fn sub(&self, other: &Self) -> Result<Self> {
        self.elementwise(other, T::checked_sub)
    }

    /// Matrix product, requires `self.cols() == other.rows()`
    ///
    /// Iterates only the non-zero entries of both operands: for each
    /// stored `(row, k, value)` of the left operand, the accumulator
    /// picks up `value * other[k, col]` for every stored entry in row
    /// `k` of the right operand. Terms that sum to exactly zero are
    /// pruned by the store's set semantics.
    pub fn mul(&self, other: &Self) -> Result<Self> {
        if self.cols() != other.rows() {
            return Err(MatrixError::DimensionMismatch {
                lhs: (self.rows(), self.cols()),
                rhs: (other.rows(), other.cols()),
            });
        }

        // Group the right operand's entries by row so each left entry
        // scans only the non-zeros it can pair with.
        let mut rhs_rows: HashMap<usize, Vec<(usize, T)>> = HashMap::new();
        for (row, col, value) in other.iter() {
            rhs_rows.entry(row).or_default().push((col, value));
        }

        let mut result = Self::new(self.rows(), other.cols());
        for (row, k, value) in self.iter() {
            let Some(partners) = rhs_rows.get(&k) else {
                continue;
            };
            for &(col, rhs_value) in partners {
                let term = value
                    .checked_mul(rhs_value)
                    .ok_or(MatrixError::ValueOverflow)?;
                let sum = result
                    .get(row, col)
                    .checked_add(term)
                    .ok_or(MatrixError::ValueOverflow)?;
                result.set(row, col, sum);
            }
        }
        Ok(result)
    }

    /// Shared add/sub body: copy self, then fold other through get/set
    fn elementwise(
        &self,
        other: &Self,
        combine: impl Fn(T, T) -> Option<T>,
    ) -> Result<Self> {
        if self.rows() != other.rows() || self.cols() != other.cols() {
            return Err(MatrixError::DimensionMismatch {
                lhs: (self.rows(), self.cols()),
                rhs: (other.rows(), other.cols()),
            });
        }

        let mut result = Self::new(self.rows(), self.cols());
        for (row, col, value) in self.iter() {
            result.set(row, col, value);
        }
        for (row, col, value) in other.iter() {
            let combined =
                combine(result.get(row, col), value).ok_or(MatrixError::ValueOverflow)?;
            result.set(row, col, combined);
        }
        Ok(result)
    }
}
