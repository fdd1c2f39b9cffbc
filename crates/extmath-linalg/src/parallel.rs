//! Batch solving of independent systems.
//!
//! With the `parallel` feature the systems are distributed over the rayon
//! thread pool; without it they are solved one after another. Either way
//! each system gets its own working matrix and the results come back in
//! input order.

use extmath_core::{
    error::SolverResult,
    types::{DMatrix, Scalar},
};

use crate::solver::LinearSystemSolver;

impl<T: Scalar> LinearSystemSolver<T> {
    /// Solve every `(A, B)` pair in `systems`, one result per system.
    ///
    /// A failure in one system does not affect the others.
    #[cfg(feature = "parallel")]
    pub fn solve_many(&self, systems: &[(DMatrix<T>, DMatrix<T>)]) -> Vec<SolverResult<DMatrix<T>>> {
        use rayon::prelude::*;
        systems.par_iter().map(|(a, b)| self.solve(a, b)).collect()
    }

    /// Solve every `(A, B)` pair in `systems`, one result per system.
    ///
    /// A failure in one system does not affect the others.
    #[cfg(not(feature = "parallel"))]
    pub fn solve_many(&self, systems: &[(DMatrix<T>, DMatrix<T>)]) -> Vec<SolverResult<DMatrix<T>>> {
        systems.iter().map(|(a, b)| self.solve(a, b)).collect()
    }
}

/// Solve independent systems with the default configuration.
pub fn solve_many<T: Scalar>(systems: &[(DMatrix<T>, DMatrix<T>)]) -> Vec<SolverResult<DMatrix<T>>> {
    LinearSystemSolver::new().solve_many(systems)
}
