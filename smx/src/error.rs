//! Error type for the I/O layer
//!
//! Wraps the core error and adds the file-boundary failures. Callers
//! that only need to branch on the broad failure class can use
//! [`Error::category`] instead of matching every variant.

use std::path::PathBuf;

use smx_core::MatrixError;

/// Errors that can occur while loading, combining, or storing matrices
#[derive(Debug)]
pub enum Error {
    /// The named input file does not exist
    NotFound(PathBuf),
    /// The named file could not be read or written
    Io {
        /// Path of the offending file
        path: PathBuf,
        /// Underlying I/O failure
        source: std::io::Error,
    },
    /// A failure from the core: decode, bounds, dimensions, overflow
    Matrix(MatrixError),
}

/// Broad failure classes for boundary reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorCategory {
    /// Input file missing or unreadable
    FileNotFound,
    /// Text does not conform to the matrix grammar
    MalformedInput,
    /// Operand dimensions violate an operation's precondition
    DimensionMismatch,
    /// Arithmetic overflowed the element type
    Overflow,
}

impl Error {
    /// Classify this error for boundary reporting
    pub fn category(&self) -> ErrorCategory {
        match self {
            Error::NotFound(_) | Error::Io { .. } => ErrorCategory::FileNotFound,
            Error::Matrix(MatrixError::DimensionMismatch { .. }) => {
                ErrorCategory::DimensionMismatch
            }
            Error::Matrix(MatrixError::ValueOverflow) => ErrorCategory::Overflow,
            Error::Matrix(_) => ErrorCategory::MalformedInput,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::NotFound(path) => write!(f, "file not found: {}", path.display()),
            Error::Io { path, source } => {
                write!(f, "failed to access {}: {source}", path.display())
            }
            Error::Matrix(source) => write!(f, "{source}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<MatrixError> for Error {
    fn from(source: MatrixError) -> Self {
        Error::Matrix(source)
    }
}

/// Result type for the I/O layer
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        let not_found = Error::NotFound(PathBuf::from("missing.txt"));
        assert_eq!(not_found.category(), ErrorCategory::FileNotFound);

        let mismatch = Error::from(MatrixError::DimensionMismatch {
            lhs: (2, 3),
            rhs: (3, 2),
        });
        assert_eq!(mismatch.category(), ErrorCategory::DimensionMismatch);

        let malformed = Error::from(MatrixError::MalformedEntry { line: 3 });
        assert_eq!(malformed.category(), ErrorCategory::MalformedInput);

        let bounds = Error::from(MatrixError::EntryOutOfBounds {
            line: 4,
            row: 9,
            col: 0,
        });
        assert_eq!(bounds.category(), ErrorCategory::MalformedInput);

        let overflow = Error::from(MatrixError::ValueOverflow);
        assert_eq!(overflow.category(), ErrorCategory::Overflow);
    }

    #[test]
    fn test_display_includes_path() {
        let error = Error::NotFound(PathBuf::from("matrices/a.txt"));
        assert!(error.to_string().contains("matrices/a.txt"));
    }
}
