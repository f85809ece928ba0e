//! Element and access traits for sparse matrices
//!
//! `MatrixElement` constrains the scalar types a matrix may store and
//! routes all arithmetic through checked operations. `SparseMatrix` is
//! the minimal storage-agnostic read interface; `MatrixOperations`
//! adds row/column extraction on top of it.

use alloc::vec::Vec;

/// Trait for integer types that can be stored as matrix elements
///
/// Elements must be cheap to copy and comparable against zero, since
/// zero is represented by absence in the store. All arithmetic goes
/// through the checked methods: overflow is reported to the caller
/// rather than wrapping silently.
pub trait MatrixElement:
    Copy + Clone + PartialEq + Sized + core::fmt::Debug + core::fmt::Display
{
    /// The additive identity, never stored explicitly
    const ZERO: Self;

    /// Checked addition, `None` on overflow
    fn checked_add(self, rhs: Self) -> Option<Self>;

    /// Checked subtraction, `None` on overflow
    fn checked_sub(self, rhs: Self) -> Option<Self>;

    /// Checked multiplication, `None` on overflow
    fn checked_mul(self, rhs: Self) -> Option<Self>;

    /// Parse an element from its decimal text form
    ///
    /// Used by the text codec for the `<value>` field of entry lines.
    fn from_text(text: &str) -> Option<Self>;

    /// Whether this value is the additive identity
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }
}

macro_rules! impl_matrix_element {
    ($($ty:ty),*) => {
        $(
            impl MatrixElement for $ty {
                const ZERO: Self = 0;

                fn checked_add(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_add(self, rhs)
                }

                fn checked_sub(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_sub(self, rhs)
                }

                fn checked_mul(self, rhs: Self) -> Option<Self> {
                    <$ty>::checked_mul(self, rhs)
                }

                fn from_text(text: &str) -> Option<Self> {
                    text.parse().ok()
                }
            }
        )*
    };
}

impl_matrix_element!(i32, i64);

/// Core sparse matrix trait for storage-agnostic access
pub trait SparseMatrix {
    /// The element type stored in this matrix
    type Element: MatrixElement;

    /// Get an element at the specified position
    ///
    /// Returns `None` if the element is zero (not stored).
    fn get_element(&self, row: usize, col: usize) -> Option<Self::Element>;

    /// Get matrix dimensions as (rows, cols)
    fn dimensions(&self) -> (usize, usize);

    /// Get number of non-zero elements stored
    fn nnz(&self) -> usize;
}

/// Extension trait for row/column extraction
pub trait MatrixOperations: SparseMatrix {
    /// Get all non-zero elements in a row as (col, value) pairs
    ///
    /// Pairs are returned in column order.
    fn get_row(&self, row_index: usize) -> Vec<(usize, Self::Element)>;

    /// Get all non-zero elements in a column as (row, value) pairs
    ///
    /// Pairs are returned in row order.
    fn get_col(&self, col_index: usize) -> Vec<(usize, Self::Element)>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_arithmetic() {
        assert_eq!(MatrixElement::checked_add(2i32, 3), Some(5));
        assert_eq!(MatrixElement::checked_add(i32::MAX, 1), None);
        assert_eq!(MatrixElement::checked_sub(i64::MIN, 1), None);
        assert_eq!(MatrixElement::checked_mul(i32::MAX, 2), None);
    }

    #[test]
    fn test_from_text() {
        assert_eq!(<i64 as MatrixElement>::from_text("42"), Some(42));
        assert_eq!(<i64 as MatrixElement>::from_text("-7"), Some(-7));
        assert_eq!(<i64 as MatrixElement>::from_text("4.2"), None);
        assert_eq!(<i64 as MatrixElement>::from_text(""), None);
        assert_eq!(<i32 as MatrixElement>::from_text("2147483648"), None);
    }

    #[test]
    fn test_is_zero() {
        assert!(0i32.is_zero());
        assert!(!(-1i64).is_zero());
    }
}
