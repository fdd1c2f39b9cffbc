//! Type definitions and aliases for the solver.
//!
//! This module provides the scalar trait the solver is generic over and the
//! dense matrix aliases it works with.

use nalgebra::{Dyn, OMatrix, OVector, RealField, Scalar as NalgebraScalar};
use num_traits::{Float, FromPrimitive};
use std::fmt::{Debug, Display};

/// Trait for scalar types accepted by the solver (f32 or f64).
///
/// This trait combines all the numeric traits needed by elimination and
/// back substitution.
pub trait Scalar:
    NalgebraScalar
    + RealField
    + Float
    + FromPrimitive
    + Display
    + Debug
    + Default
    + Copy
    + Send
    + Sync
    + 'static
{
    /// Default threshold under which a pivot is treated as zero.
    ///
    /// Zero means the singularity check is an exact equality test.
    const DEFAULT_SINGULARITY_TOLERANCE: Self;

    /// Tolerance used when checking the residual `A·X - B` of a solution.
    const RESIDUAL_TOLERANCE: Self;

    /// Convert to f64 (for logging and error reporting).
    fn to_f64(self) -> f64 {
        num_traits::cast(self).unwrap_or(f64::NAN)
    }
}

impl Scalar for f32 {
    const DEFAULT_SINGULARITY_TOLERANCE: Self = 0.0;
    const RESIDUAL_TOLERANCE: Self = 1e-4;
}

impl Scalar for f64 {
    const DEFAULT_SINGULARITY_TOLERANCE: Self = 0.0;
    const RESIDUAL_TOLERANCE: Self = 1e-10;
}

/// Type alias for a dynamically-sized matrix.
pub type DMatrix<T> = OMatrix<T, Dyn, Dyn>;

/// Type alias for a dynamically-sized vector.
pub type DVector<T> = OVector<T, Dyn>;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_scalar_trait_f32() {
        assert_eq!(f32::DEFAULT_SINGULARITY_TOLERANCE, 0.0);
        assert!(f32::RESIDUAL_TOLERANCE > f32::EPSILON);
    }

    #[test]
    fn test_scalar_trait_f64() {
        assert_eq!(f64::DEFAULT_SINGULARITY_TOLERANCE, 0.0);
        assert!(f64::RESIDUAL_TOLERANCE > f64::EPSILON);
    }

    #[test]
    fn test_scalar_conversions() {
        assert_relative_eq!(Scalar::to_f64(2.5_f32), 2.5_f64);
        assert_relative_eq!(Scalar::to_f64(-1.25_f64), -1.25_f64);
    }

    #[test]
    fn test_matrix_type_aliases() {
        let m: DMatrix<f64> = DMatrix::zeros(3, 4);
        assert_eq!(m.shape(), (3, 4));

        let v: DVector<f64> = DVector::zeros(5);
        assert_eq!(v.len(), 5);
    }
}
