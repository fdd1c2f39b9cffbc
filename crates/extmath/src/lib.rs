//! extmath - dense linear systems, number theory and exact fractions.
//!
//! This crate bundles the workspace crates behind one dependency:
//!
//! - [`core`]: scalar trait, errors and solver configuration
//! - [`linalg`]: Gaussian elimination with row pivoting for `A·X = B`
//! - [`arith`]: gcd, primes, divisors, factorials and [`Fraction`]
//!
//! # Features
//!
//! - `parallel` (default): solve batches of systems on the rayon thread pool
//! - `serde`: serialize [`SolverConfig`]
//! - `full`: everything above
//!
//! # Example
//!
//! ```rust
//! use extmath::prelude::*;
//!
//! let a = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]);
//! let b = DMatrix::from_row_slice(2, 1, &[5.0, 6.0]);
//! let x = solve(&a, &b).unwrap();
//! assert!(max_residual(&a, &x, &b).unwrap() < 1e-12);
//!
//! let half: Fraction<i64> = "2/4".parse().unwrap();
//! assert_eq!(half.to_string(), "1/2");
//! ```

pub use extmath_arith as arith;
pub use extmath_core as core;
pub use extmath_linalg as linalg;

pub use extmath_arith::{BigFraction, Fraction, PrimePower};
pub use extmath_core::{
    ArithmeticError, ArithmeticResult, PivotStrategy, Scalar, SolverConfig, SolverError,
    SolverResult,
};
pub use extmath_linalg::{solve, solve_augmented, solve_many, solve_vector, LinearSystemSolver};

pub use nalgebra;
pub use num_bigint;

/// Everything needed for typical use, in one import.
pub mod prelude {
    pub use extmath_arith::{
        checked_factorial, divisor_count, divisor_sum, divisors, factorial, gcd, is_prime, lcm,
        prime_factors, primes_up_to, reverse_digits, sieve, BigFraction, Fraction, PrimePower,
    };
    pub use extmath_core::prelude::*;
    pub use extmath_linalg::{
        augment, max_residual, solve, solve_augmented, solve_many, solve_vector,
        LinearSystemSolver,
    };
}
