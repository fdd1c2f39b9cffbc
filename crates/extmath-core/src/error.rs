//! Error types for linear solving and exact arithmetic.
//!
//! This module defines the error taxonomy used throughout the workspace:
//! [`SolverError`] for the dense linear system solver and
//! [`ArithmeticError`] for the integer and fraction helpers.

use thiserror::Error;

/// Errors that can occur while solving a linear system.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    /// The selected pivot is zero (or within the configured tolerance of zero).
    ///
    /// The system has either no solution or infinitely many. No partial
    /// solution is produced.
    #[error("The system contains none, or an infinite amount of solutions (pivot {pivot} at elimination step {step})")]
    SingularSystem {
        /// Elimination step (column index) at which the pivot vanished
        step: usize,
        /// Value of the rejected pivot
        pivot: f64,
    },

    /// Dimension mismatch between the coefficient and right-hand-side matrices.
    ///
    /// Raised before the working matrix is built or touched.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Expected dimensions
        expected: String,
        /// Actual dimensions
        actual: String,
    },

    /// The system has no unknowns or no right-hand side.
    #[error("Empty system: {reason}")]
    EmptySystem {
        /// Which part of the system is empty
        reason: String,
    },

    /// Invalid solver configuration.
    #[error("Invalid solver configuration for `{parameter}`: {reason}")]
    InvalidConfiguration {
        /// Name of the invalid parameter
        parameter: String,
        /// Description of the configuration error
        reason: String,
    },
}

impl SolverError {
    /// Create a SingularSystem error.
    pub fn singular(step: usize, pivot: f64) -> Self {
        Self::SingularSystem { step, pivot }
    }

    /// Create a DimensionMismatch error.
    pub fn dimension_mismatch<S1, S2>(expected: S1, actual: S2) -> Self
    where
        S1: std::fmt::Display,
        S2: std::fmt::Display,
    {
        Self::DimensionMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Create an EmptySystem error.
    pub fn empty_system<S: Into<String>>(reason: S) -> Self {
        Self::EmptySystem {
            reason: reason.into(),
        }
    }

    /// Create an InvalidConfiguration error.
    pub fn invalid_configuration<S1, S2>(parameter: S1, reason: S2) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        Self::InvalidConfiguration {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Returns true if the error signals a singular coefficient matrix.
    pub fn is_singular(&self) -> bool {
        matches!(self, Self::SingularSystem { .. })
    }
}

/// Errors that can occur in integer and fraction arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// A fraction was built with a zero denominator.
    #[error("Fraction denominator must be non-zero")]
    ZeroDenominator,

    /// Division by a zero value (e.g. the reciprocal of a zero fraction).
    #[error("Division by zero")]
    DivisionByZero,

    /// The result does not fit in the target type.
    #[error("Arithmetic overflow in {operation}")]
    Overflow {
        /// Operation that overflowed
        operation: String,
    },

    /// An argument is outside the domain of the function.
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// Description of why the argument is invalid
        reason: String,
    },

    /// A textual representation could not be parsed.
    #[error("Cannot parse `{input}`: {reason}")]
    Parse {
        /// The rejected input
        input: String,
        /// Description of the parse failure
        reason: String,
    },
}

impl ArithmeticError {
    /// Create an Overflow error for the named operation.
    pub fn overflow<S: Into<String>>(operation: S) -> Self {
        Self::Overflow {
            operation: operation.into(),
        }
    }

    /// Create an InvalidArgument error with a custom reason.
    pub fn invalid_argument<S: Into<String>>(reason: S) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Create a Parse error.
    pub fn parse<S1, S2>(input: S1, reason: S2) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
    {
        Self::Parse {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for solver operations.
pub type SolverResult<T> = std::result::Result<T, SolverError>;

/// Result type alias for integer and fraction operations.
pub type ArithmeticResult<T> = std::result::Result<T, ArithmeticError>;
