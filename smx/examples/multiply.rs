//! Multiply two sparse matrices, serially and with rayon

use std::time::Instant;

use smx::{CooMatrix, MatrixError};

fn main() -> Result<(), MatrixError> {
    let size = 2000;
    let lhs = build_band_matrix(size, 7);
    let rhs = build_band_matrix(size, 5);
    println!(
        "Operands: {size}x{size}, {} and {} non-zeros",
        lhs.nnz(),
        rhs.nnz()
    );

    let start = Instant::now();
    let serial = lhs.mul(&rhs)?;
    println!("Serial multiply:   {:?} ({} non-zeros)", start.elapsed(), serial.nnz());

    let start = Instant::now();
    let parallel = smx::parallel::multiply(&lhs, &rhs)?;
    println!("Parallel multiply: {:?} ({} non-zeros)", start.elapsed(), parallel.nnz());

    assert_eq!(serial, parallel);
    println!("Results are value-equal");
    Ok(())
}

/// Build a square matrix with a band of the given width around the diagonal
fn build_band_matrix(size: usize, band: usize) -> CooMatrix<i64> {
    let mut matrix = CooMatrix::new(size, size);
    for row in 0..size {
        for offset in 0..band {
            let col = row + offset;
            if col < size {
                matrix.set(row, col, offset as i64 + 1);
            }
        }
    }
    matrix
}
