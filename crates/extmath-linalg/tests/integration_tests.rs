//! Integration tests for the linear system solver.

use approx::assert_relative_eq;
use extmath_linalg::{
    augment, solve, solve_augmented, solve_many, solve_vector, DVector, LinearSystemSolver,
    PivotStrategy, SolverConfig, SolverError,
};
use nalgebra::DMatrix;
use pretty_assertions::assert_eq;

#[test]
fn test_documented_two_by_two_system() {
    let a = DMatrix::from_row_slice(2, 2, &[2.0, 1.0, 1.0, 3.0]);
    let b = DMatrix::from_row_slice(2, 1, &[5.0, 10.0]);

    let x = solve(&a, &b).unwrap();
    assert_relative_eq!(x[(0, 0)], 1.0, epsilon = 1e-12);
    assert_relative_eq!(x[(1, 0)], 3.0, epsilon = 1e-12);
}

#[test]
fn test_identity_with_two_right_hand_sides() {
    let a = DMatrix::<f64>::identity(2, 2);
    let b = DMatrix::from_row_slice(2, 2, &[1.0, 3.0, 2.0, 4.0]);

    let x = solve(&a, &b).unwrap();
    assert_eq!(x, DMatrix::from_row_slice(2, 2, &[1.0, 3.0, 2.0, 4.0]));
}

#[test]
fn test_zero_row_is_singular_for_any_rhs() {
    let a = DMatrix::from_row_slice(2, 2, &[1.0, 0.0, 0.0, 0.0]);
    for rhs in [[0.0, 0.0], [1.0, 0.0], [3.0, -7.0]] {
        let b = DMatrix::from_row_slice(2, 1, &rhs);
        let err = solve(&a, &b).unwrap_err();
        assert!(matches!(err, SolverError::SingularSystem { step: 1, .. }));
    }
}

#[test]
fn test_inputs_are_not_mutated() {
    let a = DMatrix::from_row_slice(3, 3, &[0.0, 2.0, 1.0, 1.0, -2.0, -3.0, -1.0, 1.0, 2.0]);
    let b = DMatrix::from_row_slice(3, 1, &[-8.0, 0.0, 3.0]);
    let (a_before, b_before) = (a.clone(), b.clone());

    let x = solve(&a, &b).unwrap();
    assert_eq!(a, a_before);
    assert_eq!(b, b_before);

    assert_relative_eq!(x[(0, 0)], -4.0, epsilon = 1e-12);
    assert_relative_eq!(x[(1, 0)], -5.0, epsilon = 1e-12);
    assert_relative_eq!(x[(2, 0)], 2.0, epsilon = 1e-12);
}

#[test]
fn test_zero_leading_entry_needs_row_swap() {
    let a = DMatrix::from_row_slice(2, 2, &[0.0, 1.0, 1.0, 0.0]);
    let b = DMatrix::from_row_slice(2, 1, &[7.0, 9.0]);

    let x = solve(&a, &b).unwrap();
    assert_eq!(x, DMatrix::from_row_slice(2, 1, &[9.0, 7.0]));
}

#[test]
fn test_multiple_rhs_match_single_solves() {
    let a = DMatrix::from_row_slice(3, 3, &[3.0, -1.0, 2.0, 1.0, 4.0, -2.0, -2.0, 1.0, 5.0]);
    let b = DMatrix::from_row_slice(3, 3, &[1.0, 0.0, 2.0, 0.0, 1.0, -1.0, 4.0, 2.0, 0.5]);

    let x = solve(&a, &b).unwrap();
    for j in 0..3 {
        let bj = DVector::from_iterator(3, b.column(j).iter().copied());
        let xj = solve_vector(&a, &bj).unwrap();
        assert_eq!(x.column(j).into_owned(), xj);
    }
}

#[test]
fn test_pre_augmented_entry_point() {
    let a = DMatrix::from_row_slice(2, 2, &[2.0, 1.0, 1.0, 3.0]);
    let b = DMatrix::from_row_slice(2, 2, &[5.0, 3.0, 10.0, 4.0]);

    let c = augment(&a, &b).unwrap();
    assert_eq!(c.shape(), (2, 4));

    let x = solve_augmented(c).unwrap();
    assert_eq!(x, solve(&a, &b).unwrap());
    assert_relative_eq!(x[(0, 1)], 1.0, epsilon = 1e-12);
    assert_relative_eq!(x[(1, 1)], 1.0, epsilon = 1e-12);
}

#[test]
fn test_signed_strategy_rejects_nonpositive_pivot_column() {
    let signed = LinearSystemSolver::with_config(
        SolverConfig::new().with_pivot_strategy(PivotStrategy::LargestSigned),
    );

    // Solvable under both strategies: the signed rule still finds a positive pivot.
    let a = DMatrix::from_row_slice(2, 2, &[2.0, 1.0, 1.0, 3.0]);
    let b = DMatrix::from_row_slice(2, 1, &[5.0, 10.0]);
    let x = signed.solve(&a, &b).unwrap();
    assert_relative_eq!(x[(0, 0)], 1.0, epsilon = 1e-12);
    assert_relative_eq!(x[(1, 0)], 3.0, epsilon = 1e-12);

    // Nonsingular, but every candidate in column 0 is negative or zero.
    let a = DMatrix::from_row_slice(2, 2, &[-3.0, 1.0, 0.0, 2.0]);
    assert!(signed.solve(&a, &b).unwrap_err().is_singular());
    assert!(solve(&a, &b).is_ok());
}

#[test]
fn test_solve_many_mixed_sizes() {
    let systems = vec![
        (DMatrix::<f64>::identity(1, 1) * 4.0, DMatrix::from_element(1, 1, 2.0)),
        (
            DMatrix::from_row_slice(2, 2, &[2.0, 1.0, 1.0, 3.0]),
            DMatrix::from_row_slice(2, 1, &[5.0, 10.0]),
        ),
        (DMatrix::<f64>::identity(3, 3), DMatrix::zeros(2, 1)),
    ];

    let results = solve_many(&systems);
    assert_relative_eq!(results[0].as_ref().unwrap()[(0, 0)], 0.5);
    assert_relative_eq!(results[1].as_ref().unwrap()[(1, 0)], 3.0, epsilon = 1e-12);
    assert!(matches!(results[2], Err(SolverError::DimensionMismatch { .. })));
}

#[test]
fn test_solver_is_shareable_across_threads() {
    let solver = LinearSystemSolver::<f64>::new();
    let a = DMatrix::from_row_slice(2, 2, &[2.0, 1.0, 1.0, 3.0]);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|k| {
                let solver = &solver;
                let a = &a;
                scope.spawn(move || {
                    let b = DMatrix::from_row_slice(2, 1, &[5.0 * k as f64, 10.0 * k as f64]);
                    solver.solve(a, &b).unwrap()
                })
            })
            .collect();

        for (k, handle) in handles.into_iter().enumerate() {
            let x = handle.join().unwrap();
            assert_relative_eq!(x[(0, 0)], k as f64, epsilon = 1e-12);
            assert_relative_eq!(x[(1, 0)], 3.0 * k as f64, epsilon = 1e-12);
        }
    });
}
