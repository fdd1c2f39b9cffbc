//! Gaussian elimination with row pivoting and multiple right-hand sides.
//!
//! A solve runs through a fixed sequence of stages on one working matrix
//! `C = [A | B]` of shape `n × (n + m)`:
//!
//! 1. **Augmentation**: `A` and `B` are copied side by side (skipped when the
//!    caller hands over a pre-augmented matrix).
//! 2. **Forward elimination**: for each column `i`, a pivot row is selected
//!    among rows `i..n`, swapped into place, and used to zero column `i`
//!    below the diagonal across all `n + m` columns.
//! 3. **Back substitution**: the trailing `m` columns are resolved bottom-up
//!    in place.
//! 4. **Extraction**: the trailing `m` columns are copied out as `X`.
//!
//! A pivot that is zero (or within the configured tolerance of zero) aborts
//! the solve with [`SolverError::SingularSystem`]; no partial solution is
//! ever returned.

use extmath_core::{
    config::SolverConfig,
    error::{SolverError, SolverResult},
    types::{DMatrix, DVector, Scalar},
};
use num_traits::Float;

/// Dense linear system solver.
///
/// Holds only its configuration, so a single solver can be shared across
/// threads; every call builds and owns its own working matrix.
#[derive(Debug, Clone, Default)]
pub struct LinearSystemSolver<T: Scalar> {
    config: SolverConfig<T>,
}

impl<T: Scalar> LinearSystemSolver<T> {
    /// Create a solver with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a solver with the given configuration.
    pub fn with_config(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// The configuration this solver runs with.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }

    /// Solve `A·X = B`.
    ///
    /// `a` must be square (`n × n`, `n ≥ 1`) and `b` must have `n` rows and
    /// at least one column. Column `j` of the result solves
    /// `A·x = b[:, j]`. Neither input is modified.
    ///
    /// # Errors
    ///
    /// - [`SolverError::DimensionMismatch`] / [`SolverError::EmptySystem`]
    ///   when the shapes are invalid; raised before any work is done.
    /// - [`SolverError::SingularSystem`] when elimination meets a zero pivot.
    /// - [`SolverError::InvalidConfiguration`] for an unusable tolerance.
    pub fn solve(&self, a: &DMatrix<T>, b: &DMatrix<T>) -> SolverResult<DMatrix<T>> {
        let mut augmented = augment(a, b)?;
        self.solve_augmented_in_place(&mut augmented)
    }

    /// Solve `A·x = b` for a single right-hand-side vector.
    pub fn solve_vector(&self, a: &DMatrix<T>, b: &DVector<T>) -> SolverResult<DVector<T>> {
        let rhs = DMatrix::from_column_slice(b.len(), 1, b.as_slice());
        let x = self.solve(a, &rhs)?;
        Ok(x.column(0).into_owned())
    }

    /// Solve a pre-augmented system `C = [A | B]`, consuming the matrix.
    pub fn solve_augmented(&self, mut augmented: DMatrix<T>) -> SolverResult<DMatrix<T>> {
        self.solve_augmented_in_place(&mut augmented)
    }

    /// Solve a pre-augmented system `C = [A | B]` using `augmented` itself as
    /// the working matrix.
    ///
    /// On success `augmented` holds the upper-triangular factor in its
    /// leading `n` columns and the solution in its trailing columns. On a
    /// singular system its contents are partially eliminated and should be
    /// discarded. Shape and configuration errors leave it untouched.
    pub fn solve_augmented_in_place(&self, augmented: &mut DMatrix<T>) -> SolverResult<DMatrix<T>> {
        self.config.validate()?;
        let (n, cols) = augmented.shape();
        check_augmented_shape(n, cols)?;
        let rhs_cols = cols - n;

        log::debug!(
            "Solving {}x{} system with {} right-hand side(s), pivot strategy {:?}",
            n,
            n,
            rhs_cols,
            self.config.pivot_strategy
        );

        self.eliminate(augmented)?;
        back_substitute(augmented);

        let solution = augmented.columns(n, rhs_cols).into_owned();
        log::debug!("Solved {}x{} system", n, n);
        Ok(solution)
    }

    /// Forward elimination over the leading `n` columns.
    fn eliminate(&self, c: &mut DMatrix<T>) -> SolverResult<()> {
        let n = c.nrows();
        let cols = c.ncols();

        for i in 0..n {
            let pivot_row = self.select_pivot_row(c, i);
            if pivot_row != i {
                log::trace!("Step {}: swapping rows {} and {}", i, i, pivot_row);
                c.swap_rows(i, pivot_row);
            }

            let pivot = c[(i, i)];
            if self.config.is_negligible(pivot) {
                log::debug!(
                    "Singular system: pivot {} at elimination step {} (tolerance {})",
                    pivot,
                    i,
                    self.config.singularity_tolerance
                );
                return Err(SolverError::singular(i, Scalar::to_f64(pivot)));
            }

            for j in (i + 1)..n {
                let multiplier = c[(j, i)] / pivot;
                for l in i..cols {
                    let update = multiplier * c[(i, l)];
                    c[(j, l)] -= update;
                }
            }
        }

        Ok(())
    }

    /// Row in `i..n` whose entry in column `i` scores highest under the
    /// pivot strategy. Ties go to the lowest row index.
    fn select_pivot_row(&self, c: &DMatrix<T>, i: usize) -> usize {
        let strategy = self.config.pivot_strategy;
        let mut best_row = i;
        let mut best_score = strategy.score(c[(i, i)]);

        for j in (i + 1)..c.nrows() {
            let score = strategy.score(c[(j, i)]);
            if score > best_score {
                best_score = score;
                best_row = j;
            }
        }

        best_row
    }
}

/// Resolve the trailing right-hand-side columns of an upper-triangular
/// augmented matrix, bottom row first.
fn back_substitute<T: Scalar>(c: &mut DMatrix<T>) {
    let n = c.nrows();
    let cols = c.ncols();

    for k in (0..n).rev() {
        let diagonal = c[(k, k)];
        for col in n..cols {
            let mut value = c[(k, col)];
            for i in (k + 1)..n {
                value -= c[(k, i)] * c[(i, col)];
            }
            c[(k, col)] = value / diagonal;
        }
    }
}

fn check_augmented_shape(n: usize, cols: usize) -> SolverResult<()> {
    if n == 0 {
        return Err(SolverError::empty_system("augmented matrix has no rows"));
    }
    if cols < n {
        return Err(SolverError::dimension_mismatch(
            format!("at least {} columns for {} equations", n + 1, n),
            format!("{} columns", cols),
        ));
    }
    if cols == n {
        return Err(SolverError::empty_system(
            "augmented matrix has no right-hand-side columns",
        ));
    }
    Ok(())
}

/// Build the augmented matrix `[A | B]`.
///
/// Validates that `a` is square and non-empty and that `b` has the same
/// number of rows and at least one column.
pub fn augment<T: Scalar>(a: &DMatrix<T>, b: &DMatrix<T>) -> SolverResult<DMatrix<T>> {
    let n = a.nrows();
    if n == 0 {
        return Err(SolverError::empty_system("coefficient matrix has no rows"));
    }
    if a.ncols() != n {
        return Err(SolverError::dimension_mismatch(
            format!("square coefficient matrix ({}x{})", n, n),
            format!("{}x{}", n, a.ncols()),
        ));
    }
    if b.nrows() != n {
        return Err(SolverError::dimension_mismatch(
            format!("{} right-hand-side rows", n),
            format!("{} rows", b.nrows()),
        ));
    }
    let m = b.ncols();
    if m == 0 {
        return Err(SolverError::empty_system("no right-hand-side columns"));
    }

    let mut augmented = DMatrix::zeros(n, n + m);
    augmented.columns_mut(0, n).copy_from(a);
    augmented.columns_mut(n, m).copy_from(b);
    Ok(augmented)
}

/// Largest absolute entry of `A·X - B`.
///
/// Useful to check a solution; expect values around
/// [`Scalar::RESIDUAL_TOLERANCE`] scaled by the magnitude of the system.
pub fn max_residual<T: Scalar>(
    a: &DMatrix<T>,
    x: &DMatrix<T>,
    b: &DMatrix<T>,
) -> SolverResult<T> {
    if a.ncols() != x.nrows() || a.nrows() != b.nrows() || x.ncols() != b.ncols() {
        return Err(SolverError::dimension_mismatch(
            format!(
                "A·X ({}x{} · {}x{}) shaped like B",
                a.nrows(),
                a.ncols(),
                a.ncols(),
                b.ncols()
            ),
            format!("X {}x{}, B {}x{}", x.nrows(), x.ncols(), b.nrows(), b.ncols()),
        ));
    }

    let residual = a * x - b;
    Ok(residual
        .iter()
        .fold(T::zero(), |acc, &r| Float::max(acc, Float::abs(r))))
}

/// Solve `A·X = B` with the default configuration.
///
/// See [`LinearSystemSolver::solve`].
pub fn solve<T: Scalar>(a: &DMatrix<T>, b: &DMatrix<T>) -> SolverResult<DMatrix<T>> {
    LinearSystemSolver::new().solve(a, b)
}

/// Solve a pre-augmented system `[A | B]` with the default configuration.
pub fn solve_augmented<T: Scalar>(augmented: DMatrix<T>) -> SolverResult<DMatrix<T>> {
    LinearSystemSolver::new().solve_augmented(augmented)
}

/// Solve `A·x = b` for one right-hand-side vector with the default configuration.
pub fn solve_vector<T: Scalar>(a: &DMatrix<T>, b: &DVector<T>) -> SolverResult<DVector<T>> {
    LinearSystemSolver::new().solve_vector(a, b)
}
