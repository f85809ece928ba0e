//! Error types for sparse matrix operations

/// Errors that can occur while building, combining, or decoding matrices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatrixError {
    /// Operand dimensions violate an operation's precondition
    DimensionMismatch {
        /// Dimensions of the left operand as (rows, cols)
        lhs: (usize, usize),
        /// Dimensions of the right operand as (rows, cols)
        rhs: (usize, usize),
    },
    /// A header line is missing or does not match `rows=<n>` / `cols=<n>`
    MalformedHeader {
        /// 1-based line number of the offending line
        line: usize,
    },
    /// An entry line does not match `(<row>, <col>, <value>)`
    MalformedEntry {
        /// 1-based line number of the offending line
        line: usize,
    },
    /// A decoded coordinate lies outside the declared dimensions
    EntryOutOfBounds {
        /// 1-based line number of the offending line
        line: usize,
        /// Declared row index
        row: usize,
        /// Declared column index
        col: usize,
    },
    /// Arithmetic overflowed the element type
    ValueOverflow,
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixError::DimensionMismatch { lhs, rhs } => write!(
                f,
                "incompatible dimensions: {}x{} vs {}x{}",
                lhs.0, lhs.1, rhs.0, rhs.1
            ),
            MatrixError::MalformedHeader { line } => {
                write!(f, "malformed header at line {line}")
            }
            MatrixError::MalformedEntry { line } => {
                write!(f, "malformed entry at line {line}")
            }
            MatrixError::EntryOutOfBounds { line, row, col } => {
                write!(f, "entry ({row}, {col}) at line {line} is out of bounds")
            }
            MatrixError::ValueOverflow => write!(f, "arithmetic overflow"),
        }
    }
}

/// Result type for sparse matrix operations
pub type Result<T> = core::result::Result<T, MatrixError>;
