//! The facade crate exposes the workspace through one import.

use approx::assert_relative_eq;
use extmath::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn test_prelude_solves_systems() {
    let a = DMatrix::from_row_slice(3, 3, &[2.0, 1.0, -1.0, -3.0, -1.0, 2.0, -2.0, 1.0, 2.0]);
    let b = DMatrix::from_row_slice(3, 1, &[8.0, -11.0, -3.0]);

    let x = solve(&a, &b).unwrap();
    assert_relative_eq!(x[(0, 0)], 2.0, epsilon = 1e-12);
    assert_relative_eq!(x[(1, 0)], 3.0, epsilon = 1e-12);
    assert_relative_eq!(x[(2, 0)], -1.0, epsilon = 1e-12);

    let singular = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 2.0, 4.0]);
    let err = solve(&singular, &DMatrix::from_element(2, 1, 1.0)).unwrap_err();
    assert!(err.is_singular());
}

#[test]
fn test_prelude_number_theory() {
    assert_eq!(gcd(84u32, 36), 12);
    assert_eq!(lcm(4u32, 6).unwrap(), 12);
    assert_eq!(primes_up_to(20), vec![2, 3, 5, 7, 11, 13, 17, 19]);
    assert_eq!(divisors(12).unwrap(), vec![1, 2, 3, 4, 6, 12]);
    assert_eq!(checked_factorial(5).unwrap(), 120);
    assert_eq!(
        prime_factors(84)
            .unwrap()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>(),
        vec!["2^2", "3", "7"]
    );
}

#[test]
fn test_module_paths() {
    let config = extmath::core::SolverConfig::<f64>::default();
    assert_eq!(config.pivot_strategy, extmath::PivotStrategy::LargestMagnitude);

    let f = extmath::arith::Fraction::new(10i64, 4).unwrap();
    assert_eq!(f, extmath::Fraction::new(5, 2).unwrap());

    let big = extmath::BigFraction::from_integer(extmath::num_bigint::BigInt::from(7));
    assert!(big.is_integer());
}
