//! Write a matrix to a text file and read it back

use smx::{read_matrix, write_matrix, CooMatrix};

fn main() -> Result<(), smx::Error> {
    let mut matrix = CooMatrix::new(1000, 1000);

    // A sparse diagonal band: 3000 entries in a million-cell grid
    for i in 0..1000 {
        matrix.set(i, i, 2i64);
        if i + 1 < 1000 {
            matrix.set(i, i + 1, -1);
            matrix.set(i + 1, i, -1);
        }
    }
    println!(
        "Built {}x{} matrix with {} non-zero entries",
        matrix.rows(),
        matrix.cols(),
        matrix.nnz()
    );

    write_matrix("example_matrix.txt", &matrix)?;
    println!("Wrote example_matrix.txt");

    let loaded: CooMatrix<i64> = read_matrix("example_matrix.txt")?;
    println!("Read back {} entries", loaded.nnz());
    assert_eq!(loaded, matrix);
    println!("Round trip is value-equal");

    Ok(())
}
