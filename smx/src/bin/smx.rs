//! Command-line shell over the matrix core
//!
//! Reads two matrix text files, applies one operation, and prints the
//! encoded result to stdout or writes it to a file. All user-facing
//! presentation lives here; the core only returns typed errors.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use smx::{read_matrix, write_matrix, CooMatrix, Operation, SparseMatrix};

#[derive(Parser)]
#[command(name = "smx", about = "Sparse integer matrix arithmetic")]
struct Args {
    /// Operation to apply
    #[arg(value_enum)]
    operation: OperationArg,

    /// Path to the left operand file
    lhs: PathBuf,

    /// Path to the right operand file
    rhs: PathBuf,

    /// Write the result here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Use the rayon row-partitioned multiply
    #[arg(long)]
    parallel: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OperationArg {
    Add,
    Subtract,
    Multiply,
}

impl From<OperationArg> for Operation {
    fn from(arg: OperationArg) -> Self {
        match arg {
            OperationArg::Add => Operation::Add,
            OperationArg::Subtract => Operation::Subtract,
            OperationArg::Multiply => Operation::Multiply,
        }
    }
}

fn run(args: &Args) -> Result<(), smx::Error> {
    let lhs: CooMatrix<i64> = read_matrix(&args.lhs)?;
    let rhs: CooMatrix<i64> = read_matrix(&args.rhs)?;

    let operation = Operation::from(args.operation);
    let result = if args.parallel && operation == Operation::Multiply {
        smx::parallel::multiply(&lhs, &rhs)?
    } else {
        operation.apply(&lhs, &rhs)?
    };

    let (rows, cols) = result.dimensions();
    eprintln!("{operation}: {rows}x{cols} result, {} non-zero entries", result.nnz());

    match &args.output {
        Some(path) => write_matrix(path, &result)?,
        None => print!("{}", smx::encode(&result)),
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error ({:?}): {error}", error.category());
            ExitCode::FAILURE
        }
    }
}
