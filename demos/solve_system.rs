//! Solving a small system with several right-hand sides.
//!
//! Run with `RUST_LOG=trace` to see the row swaps performed by the
//! elimination.

use extmath_linalg::{max_residual, LinearSystemSolver, PivotStrategy, SolverConfig, SolverError};
use nalgebra::DMatrix;

fn main() -> Result<(), SolverError> {
    env_logger::init();

    println!("=== Dense linear system solver ===\n");

    let a = DMatrix::from_row_slice(3, 3, &[0.0, 2.0, 1.0, 1.0, -2.0, -3.0, -1.0, 1.0, 2.0]);
    let b = DMatrix::from_row_slice(3, 2, &[-8.0, 1.0, 0.0, 0.0, 3.0, 1.0]);

    let solver = LinearSystemSolver::new();
    let x = solver.solve(&a, &b)?;

    println!("A = {}", a);
    println!("B = {}", b);
    println!("X = {}", x);
    println!("max |A·X - B| = {:.3e}\n", max_residual(&a, &x, &b)?);

    // The algebraically-largest rule refuses a pivot column with no positive entry.
    let signed = LinearSystemSolver::with_config(
        SolverConfig::new().with_pivot_strategy(PivotStrategy::LargestSigned),
    );
    let a = DMatrix::from_row_slice(2, 2, &[-1.0, 0.0, 0.0, 1.0]);
    let b = DMatrix::from_row_slice(2, 1, &[-2.0, 3.0]);

    match signed.solve(&a, &b) {
        Ok(x) => println!("LargestSigned solution: {}", x),
        Err(e) => println!("LargestSigned failed: {}", e),
    }
    println!("LargestMagnitude solution: {}", solver.solve(&a, &b)?);

    Ok(())
}
