//! SMX - Sparse Integer Matrix Arithmetic with Text I/O
//!
//! This library provides file-backed sparse matrix arithmetic over the
//! text coordinate format.
//!
//! ## Architecture
//!
//! SMX follows a clean specification/implementation separation:
//!
//! - **smx-core**: Pure storage, arithmetic, and codec (no I/O)
//! - **smx**: File loading/storing, error classification, parallelism
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use smx::{read_matrix, write_matrix, CooMatrix, Operation};
//!
//! fn example() -> Result<(), smx::Error> {
//!     let lhs: CooMatrix<i64> = read_matrix("a.txt")?;
//!     let rhs: CooMatrix<i64> = read_matrix("b.txt")?;
//!
//!     let product = Operation::Multiply.apply(&lhs, &rhs)?;
//!     write_matrix("product.txt", &product)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Zero-omitting storage**: space proportional to non-zero entries
//! - **Checked arithmetic**: overflow is an error, never a wrap
//! - **Fatal parsing**: malformed lines abort with a line number
//! - **Parallel multiply**: optional rayon row partitioning
//! - **Type safety**: strong typing with smx-core abstractions

// Re-export core abstractions and the codec
pub use smx_core::{
    // Core types
    CooMatrix, MatrixElement, Operation,
    // Access traits
    MatrixOperations, SparseMatrix,
    // Text codec
    decode, encode,
    // Core error
    MatrixError,
};

// Implementation modules
pub mod error;
pub mod file_io;
pub mod parallel;

// Public exports
pub use error::{Error, ErrorCategory, Result};
pub use file_io::{read_matrix, write_matrix};
