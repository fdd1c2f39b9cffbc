//! Solver configuration.
//!
//! [`SolverConfig`] controls how the elimination chooses its pivots and
//! when a pivot is considered zero. The defaults reproduce classic partial
//! pivoting with an exact-zero singularity test.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    error::{SolverError, SolverResult},
    types::Scalar,
};

/// Row selection rule applied at every elimination step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PivotStrategy {
    /// Pick the row whose entry in the pivot column has the largest
    /// absolute value (partial pivoting).
    #[default]
    LargestMagnitude,
    /// Pick the row whose entry in the pivot column is algebraically
    /// largest. A negative entry is never preferred over a zero one, so
    /// some nonsingular systems are reported as singular.
    LargestSigned,
}

impl PivotStrategy {
    /// Score of a candidate pivot; the row with the highest score wins.
    pub fn score<T: Scalar>(self, value: T) -> T {
        match self {
            Self::LargestMagnitude => <T as num_traits::Float>::abs(value),
            Self::LargestSigned => value,
        }
    }
}

/// Configuration for the dense linear system solver.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>"))
)]
pub struct SolverConfig<T: Scalar> {
    /// Row selection rule for each elimination step
    pub pivot_strategy: PivotStrategy,
    /// A pivot whose absolute value is at most this threshold is treated as zero
    pub singularity_tolerance: T,
}

impl<T: Scalar> Default for SolverConfig<T> {
    fn default() -> Self {
        Self {
            pivot_strategy: PivotStrategy::default(),
            singularity_tolerance: T::DEFAULT_SINGULARITY_TOLERANCE,
        }
    }
}

impl<T: Scalar> SolverConfig<T> {
    /// Create a new configuration with default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the pivot selection rule
    pub fn with_pivot_strategy(mut self, strategy: PivotStrategy) -> Self {
        self.pivot_strategy = strategy;
        self
    }

    /// Set the threshold under which a pivot counts as zero
    pub fn with_singularity_tolerance(mut self, tolerance: T) -> Self {
        self.singularity_tolerance = tolerance;
        self
    }

    /// Check that the parameters are usable.
    pub fn validate(&self) -> SolverResult<()> {
        let tol = self.singularity_tolerance;
        if !<T as num_traits::Float>::is_finite(tol) {
            return Err(SolverError::invalid_configuration(
                "singularity_tolerance",
                format!("must be finite, got {}", tol),
            ));
        }
        if tol < T::zero() {
            return Err(SolverError::invalid_configuration(
                "singularity_tolerance",
                format!("must be non-negative, got {}", tol),
            ));
        }
        Ok(())
    }

    /// Whether `pivot` must be rejected as zero.
    pub fn is_negligible(&self, pivot: T) -> bool {
        <T as num_traits::Float>::abs(pivot) <= self.singularity_tolerance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = SolverConfig::<f64>::default();
        assert_eq!(config.pivot_strategy, PivotStrategy::LargestMagnitude);
        assert_eq!(config.singularity_tolerance, 0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = SolverConfig::<f32>::new()
            .with_pivot_strategy(PivotStrategy::LargestSigned)
            .with_singularity_tolerance(1e-6);
        assert_eq!(config.pivot_strategy, PivotStrategy::LargestSigned);
        assert_eq!(config.singularity_tolerance, 1e-6);
    }

    #[test]
    fn test_validate_rejects_bad_tolerance() {
        let negative = SolverConfig::<f64>::new().with_singularity_tolerance(-1.0);
        assert!(matches!(
            negative.validate(),
            Err(SolverError::InvalidConfiguration { .. })
        ));

        let nan = SolverConfig::<f64>::new().with_singularity_tolerance(f64::NAN);
        assert!(nan.validate().is_err());

        let inf = SolverConfig::<f64>::new().with_singularity_tolerance(f64::INFINITY);
        assert!(inf.validate().is_err());
    }

    #[test]
    fn test_exact_zero_check() {
        let config = SolverConfig::<f64>::default();
        assert!(config.is_negligible(0.0));
        assert!(config.is_negligible(-0.0));
        assert!(!config.is_negligible(1e-300));

        let loose = config.with_singularity_tolerance(1e-12);
        assert!(loose.is_negligible(-1e-13));
        assert!(!loose.is_negligible(1e-11));
    }

    #[test]
    fn test_pivot_scores() {
        assert_eq!(PivotStrategy::LargestMagnitude.score(-3.0_f64), 3.0);
        assert_eq!(PivotStrategy::LargestSigned.score(-3.0_f64), -3.0);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip() {
        let config = SolverConfig::<f64>::new()
            .with_pivot_strategy(PivotStrategy::LargestSigned)
            .with_singularity_tolerance(1e-9);
        let json = serde_json::to_string(&config).unwrap();
        let back: SolverConfig<f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
