//! File-backed encode/decode for matrix text files
//!
//! One matrix per file, in the codec's line-oriented format. This is
//! the only place the crate touches the filesystem; everything else is
//! pure and synchronous.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use smx_core::{decode, encode, CooMatrix, MatrixElement};

use crate::error::{Error, Result};

/// Read and decode a matrix from a text file
///
/// A missing file is reported as [`Error::NotFound`] with the
/// offending path; any other read failure keeps the underlying
/// `io::Error` as its source.
pub fn read_matrix<T: MatrixElement, P: AsRef<Path>>(path: P) -> Result<CooMatrix<T>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
        _ => Error::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    decode(&text).map_err(Error::from)
}

/// Encode and write a matrix to a text file
///
/// Overwrites any existing file at the path.
pub fn write_matrix<T: MatrixElement, P: AsRef<Path>>(
    path: P,
    matrix: &CooMatrix<T>,
) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, encode(matrix)).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCategory;
    use std::path::PathBuf;

    fn temp_path(name: &str) -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("smx-{}-{name}", std::process::id()));
        path
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let mut matrix = CooMatrix::new(3, 4);
        matrix.set(0, 0, 1i64);
        matrix.set(2, 3, -6);

        let path = temp_path("roundtrip.txt");
        write_matrix(&path, &matrix).unwrap();
        let loaded: CooMatrix<i64> = read_matrix(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, matrix);
    }

    #[test]
    fn test_read_missing_file() {
        let path = temp_path("does-not-exist.txt");
        let result: Result<CooMatrix<i64>> = read_matrix(&path);

        let error = result.unwrap_err();
        assert_eq!(error.category(), ErrorCategory::FileNotFound);
        assert!(error.to_string().contains("does-not-exist.txt"));
    }

    #[test]
    fn test_read_malformed_file() {
        let path = temp_path("malformed.txt");
        std::fs::write(&path, "cols=2\nrows=2\n").unwrap();
        let result: Result<CooMatrix<i64>> = read_matrix(&path);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(result.unwrap_err().category(), ErrorCategory::MalformedInput);
    }
}
