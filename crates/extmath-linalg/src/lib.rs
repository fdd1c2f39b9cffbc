//! extmath linear algebra - a dense linear system solver.
//!
//! Solves `A·X = B` for a square coefficient matrix `A` and one or more
//! right-hand-side columns `B` by Gaussian elimination with row pivoting
//! followed by back substitution. All right-hand sides are carried through
//! the same elimination, so solving for several columns costs little more
//! than solving for one.
//!
//! # Examples
//!
//! ```rust
//! use extmath_linalg::solve;
//! use nalgebra::DMatrix;
//!
//! let a = DMatrix::<f64>::from_row_slice(2, 2, &[2.0, 1.0, 1.0, 3.0]);
//! let b = DMatrix::<f64>::from_row_slice(2, 1, &[5.0, 10.0]);
//!
//! let x = solve(&a, &b).unwrap();
//! assert!((x[(0, 0)] - 1.0).abs() < 1e-12);
//! assert!((x[(1, 0)] - 3.0).abs() < 1e-12);
//! ```

pub mod parallel;
pub mod solver;

pub use parallel::solve_many;
pub use solver::{
    augment, max_residual, solve, solve_augmented, solve_vector, LinearSystemSolver,
};

// Re-export commonly used items from core
pub use extmath_core::{
    config::{PivotStrategy, SolverConfig},
    error::{SolverError, SolverResult},
    types::{DMatrix, DVector, Scalar},
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exports() {
        let solver = LinearSystemSolver::with_config(
            SolverConfig::<f64>::new().with_pivot_strategy(PivotStrategy::LargestSigned),
        );
        assert_eq!(solver.config().pivot_strategy, PivotStrategy::LargestSigned);
    }
}
