//! Core traits and types shared by the extmath crates.
//!
//! This crate provides the scalar abstraction, matrix type aliases, error
//! taxonomy and solver configuration used by the linear system solver and
//! by the integer/fraction helpers.
//!
//! # Modules
//!
//! - [`config`]: Solver configuration (pivot strategy, singularity tolerance)
//! - [`error`]: Error types for solving and exact arithmetic
//! - [`types`]: Scalar trait and type aliases

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used items at the crate root
pub use config::{PivotStrategy, SolverConfig};
pub use error::{ArithmeticError, ArithmeticResult, SolverError, SolverResult};
pub use types::{DMatrix, DVector, Scalar};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use extmath_core::prelude::*;
///
/// let config = SolverConfig::<f64>::new().with_pivot_strategy(PivotStrategy::LargestSigned);
/// assert_eq!(config.pivot_strategy, PivotStrategy::LargestSigned);
/// ```
pub mod prelude {
    pub use crate::config::{PivotStrategy, SolverConfig};
    pub use crate::error::{ArithmeticError, ArithmeticResult, SolverError, SolverResult};
    pub use crate::types::{DMatrix, DVector, Scalar};
}
