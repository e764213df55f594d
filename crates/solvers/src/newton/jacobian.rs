use nalgebra::{DMatrix, DVector};
use nlsolve_core::EquationSystem;

use crate::{Error, Executor};

/// The inverse Jacobian cached between iterations.
#[derive(Debug, Clone, PartialEq)]
pub enum JacobianCache {
    /// Nothing has been computed yet, or the cached value no longer applies.
    Stale,

    /// The inverse Jacobian at the point where it was last built.
    Inverted(DMatrix<f64>),
}

/// Approximates the Jacobian of `system` at `x` by forward differences.
///
/// `residuals` must be `F(x)`. Column `j` is `(F(x + step·e_j) − F(x)) / step`.
/// With a parallel executor each column is computed by one worker; the result
/// is identical to the sequential one.
///
/// # Errors
///
/// Returns [`Error::System`] if `x` does not match the system size.
pub fn jacobian(
    system: &EquationSystem,
    x: &DVector<f64>,
    residuals: &DVector<f64>,
    step: f64,
    executor: &Executor,
) -> Result<DMatrix<f64>, Error> {
    let n = x.len();
    let column = |perturbed: &DVector<f64>| {
        system
            .compute(perturbed)
            .map(|shifted| (shifted - residuals) / step)
    };

    let columns = match executor {
        Executor::Sequential => {
            let mut scratch = x.clone();
            (0..n)
                .map(|j| {
                    let original = scratch[j];
                    scratch[j] = original + step;
                    let result = column(&scratch);
                    scratch[j] = original;
                    result
                })
                .collect::<Vec<_>>()
        }
        Executor::Parallel(pool) => pool.map_indexed(n, |j| {
            let mut perturbed = x.clone();
            perturbed[j] += step;
            column(&perturbed)
        }),
    };

    let mut jacobian = DMatrix::zeros(system.len(), n);
    for (j, result) in columns.into_iter().enumerate() {
        jacobian.set_column(j, &result?);
    }
    Ok(jacobian)
}

/// Computes the Newton correction `inverse · residuals`.
///
/// Each row is an independent dot product, so a parallel executor hands one
/// row to each task.
#[must_use]
pub fn newton_step(
    inverse: &DMatrix<f64>,
    residuals: &DVector<f64>,
    executor: &Executor,
) -> DVector<f64> {
    let rows = executor.map_indexed(inverse.nrows(), |i| {
        inverse
            .row(i)
            .iter()
            .zip(residuals.iter())
            .map(|(a, r)| a * r)
            .sum::<f64>()
    });
    DVector::from_vec(rows)
}
