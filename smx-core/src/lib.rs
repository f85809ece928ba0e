#![no_std]

//! SMX Core - Sparse Integer Matrix Definitions
//!
//! This crate provides the core data model for coordinate-keyed sparse
//! integer matrices: storage with zero-omission, dimension-checked
//! arithmetic, and a line-oriented text codec. It performs no I/O and
//! never prints; failures surface as typed errors for the caller to
//! present.

extern crate alloc;

pub mod codec;
pub mod error;
pub mod matrix;
pub mod ops;
pub mod traits;

pub use codec::{decode, encode};
pub use error::{MatrixError, Result};
pub use matrix::CooMatrix;
pub use ops::Operation;
pub use traits::{MatrixElement, MatrixOperations, SparseMatrix};
